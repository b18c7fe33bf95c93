//! Shared HTML chrome used by all pages.

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Inline CSS for all pages.
///
/// Flat design, no JavaScript. Hierarchy comes from spacing and subtle
/// background shifts rather than borders and shadows.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fafafa;--fg:#111;--fg2:#555;--fg3:#999;--accent:#1a6baa;--accent-hover:#12507f;--surface:#fff;--border:rgba(26,107,170,.18);--mono:"SF Mono",SFMono-Regular,ui-monospace,Menlo,monospace}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
main{max-width:720px;width:100%;flex:1}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}
.nav{display:flex;gap:1.25rem;align-items:baseline;width:100%;max-width:720px;margin-bottom:1.5rem}
.nav-title{font-weight:800;font-size:1.2rem;letter-spacing:-.02em;color:var(--fg)}
.nav a{font-size:.95rem;color:var(--fg2)}
.nav a:hover{color:var(--accent);text-decoration:none}
.card{padding:1.25rem 1.5rem;border:1px solid var(--border);border-radius:10px;background:var(--surface);margin-bottom:1rem}
.page-title{font-size:1.5rem;font-weight:700;letter-spacing:-.02em;margin-bottom:1rem}
.muted{color:var(--fg3);font-size:.85rem}
.footer{margin-top:2rem;font-size:.8rem;color:var(--fg3)}

.status-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(150px,1fr));gap:.75rem}
.status-item{padding:.75rem 1rem;border:1px solid var(--border);border-radius:8px}
.status-label{font-size:.72rem;font-weight:600;color:var(--fg3);text-transform:uppercase;letter-spacing:.05em}
.status-value{font-size:1.2rem;font-weight:700;color:var(--fg);margin-top:.15rem}

.bm-row{display:flex;align-items:flex-start;gap:.75rem;padding:.75rem 0;border-bottom:1px solid var(--border)}
.bm-row:last-child{border-bottom:none}
.bm-controls{display:flex;gap:.4rem;flex-shrink:0;font-family:var(--mono);font-size:.9rem}
.bm-controls a{padding:.1rem .4rem;border:1px solid var(--border);border-radius:5px;color:var(--fg2)}
.bm-controls a:hover{color:var(--accent);border-color:var(--accent);text-decoration:none}
.bm-controls a.bm-delete:hover{color:#b00020;border-color:#b00020}
.bm-main{flex:1;min-width:0}
.bm-name{font-weight:600;color:var(--fg)}
.bm-path{font-family:var(--mono);font-size:.75rem;color:var(--fg3)}
.bm-key{font-family:var(--mono);font-size:.78rem;color:var(--fg2);overflow:hidden;text-overflow:ellipsis;white-space:nowrap}
.bm-desc{font-size:.9rem;color:var(--fg2);margin-top:.15rem}
.bm-edit{margin-top:.5rem}
.bm-edit summary{font-size:.8rem;color:var(--fg3);cursor:pointer}
.bm-form{display:grid;gap:.5rem;margin-top:.5rem}
.bm-form label{font-size:.75rem;font-weight:600;color:var(--fg3);text-transform:uppercase;letter-spacing:.05em}
.bm-form input[type=text],.bm-form textarea{width:100%;padding:.45rem .6rem;border:1px solid var(--border);border-radius:6px;font:inherit;font-size:.9rem;background:var(--bg)}
.bm-form .bm-check{display:flex;align-items:center;gap:.4rem;font-size:.85rem;color:var(--fg2)}
.bm-form button{justify-self:start;padding:.45rem 1rem;border:none;border-radius:6px;background:var(--accent);color:#fff;font:inherit;font-size:.9rem;cursor:pointer}
.bm-form button:hover{background:var(--accent-hover)}

.error-page{display:flex;flex-direction:column;align-items:center;justify-content:center;min-height:50vh;text-align:center;gap:.75rem}
.error-page h1{font-size:1.75rem;letter-spacing:-.02em}
.error-page p{color:var(--fg2);max-width:420px}
.error-page .error-detail{font-family:var(--mono);font-size:.8rem;color:var(--fg3)}
"#;

/// Full page chrome: doctype, head with inline CSS, nav bar, footer.
pub fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " — Winterface" }
                meta name="robots" content="noindex";
                link rel="icon" type="image/svg+xml" href="/static/favicon.svg";
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                nav class="nav" {
                    span class="nav-title" { "Winterface" }
                    a href="/dashboard" { "Dashboard" }
                    a href="/bookmarks" { "Bookmarks" }
                }
                main { (content) }
                footer class="footer" {
                    "Winterface " (env!("CARGO_PKG_VERSION")) " — node administration interface"
                }
            }
        }
    }
}
