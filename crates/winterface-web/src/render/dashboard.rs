//! Dashboard page — node status summary, no mutating actions.

use maud::{Markup, html};

use winterface_node::NodeStatus;

use super::components;

/// Render the dashboard for the given node status.
pub fn dashboard_page(status: &NodeStatus, rendered_at: chrono::DateTime<chrono::Utc>) -> Markup {
    components::page(
        "Dashboard",
        html! {
            h1 class="page-title" { "Dashboard" }
            div class="card" {
                div class="status-grid" {
                    div class="status-item" {
                        div class="status-label" { "Node" }
                        div class="status-value" { (status.name) }
                    }
                    div class="status-item" {
                        div class="status-label" { "Version" }
                        div class="status-value" {
                            (status.version)
                            @if status.dev_build { " (dev)" }
                        }
                    }
                    div class="status-item" {
                        div class="status-label" { "Connected peers" }
                        div class="status-value" { (status.connected_peers) }
                    }
                    div class="status-item" {
                        div class="status-label" { "Uptime" }
                        div class="status-value" { (format_uptime(status.uptime_secs)) }
                    }
                }
            }
            p class="muted" {
                "Rendered at " (rendered_at.format("%Y-%m-%d %H:%M:%S UTC"))
            }
        },
    )
}

/// Compact uptime formatting: `4d 3h 21m`, `3h 21m`, `21m`, `45s`.
fn format_uptime(secs: u64) -> String {
    let (days, rem) = (secs / 86_400, secs % 86_400);
    let (hours, rem) = (rem / 3_600, rem % 3_600);
    let minutes = rem / 60;
    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m")
    } else {
        format!("{secs}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status() -> NodeStatus {
        NodeStatus {
            name: "testnode".to_string(),
            version: "1.2.3".to_string(),
            connected_peers: 7,
            uptime_secs: 3 * 86_400 + 2 * 3_600 + 5 * 60,
            dev_build: false,
        }
    }

    #[test]
    fn dashboard_shows_status_fields() {
        let rendered = dashboard_page(&status(), chrono::Utc::now()).into_string();
        assert!(rendered.contains("testnode"));
        assert!(rendered.contains("1.2.3"));
        assert!(rendered.contains('7'));
        assert!(rendered.contains("3d 2h 5m"));
    }

    #[test]
    fn dashboard_marks_dev_builds() {
        let mut s = status();
        s.dev_build = true;
        let rendered = dashboard_page(&s, chrono::Utc::now()).into_string();
        assert!(rendered.contains("(dev)"));
    }

    #[test]
    fn uptime_formatting_tiers() {
        assert_eq!(format_uptime(45), "45s");
        assert_eq!(format_uptime(21 * 60), "21m");
        assert_eq!(format_uptime(3 * 3_600 + 21 * 60), "3h 21m");
        assert_eq!(format_uptime(4 * 86_400 + 3 * 3_600 + 21 * 60), "4d 3h 21m");
    }
}
