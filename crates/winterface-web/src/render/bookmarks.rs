//! Bookmark list page with reorder, delete and edit controls.
//!
//! Every control round-trips through `/bookmarks?action=...`; the handler
//! answers with a redirect back to the bare `/bookmarks` path so a refresh
//! never replays an action.

use maud::{Markup, html};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use winterface_node::Bookmark;

use super::components;

/// Percent-encode a bookmark path for use in an action URL.
fn encode_path(path: &str) -> String {
    utf8_percent_encode(path, NON_ALPHANUMERIC).to_string()
}

/// Render the bookmark management page.
pub fn bookmarks_page(bookmarks: &[Bookmark]) -> Markup {
    components::page(
        "Bookmarks",
        html! {
            h1 class="page-title" { "Bookmarks" }
            div class="card" {
                @if bookmarks.is_empty() {
                    p class="muted" { "The node has no bookmarks." }
                }
                @for bookmark in bookmarks {
                    (bookmark_row(bookmark))
                }
            }
        },
    )
}

/// One bookmark row: reorder/delete controls, metadata, edit form.
fn bookmark_row(bookmark: &Bookmark) -> Markup {
    let encoded = encode_path(&bookmark.path);
    html! {
        div class="bm-row" {
            div class="bm-controls" {
                a href={ "/bookmarks?action=up&bookmark=" (encoded) } title="Move up" { "↑" }
                a href={ "/bookmarks?action=down&bookmark=" (encoded) } title="Move down" { "↓" }
                a class="bm-delete" href={ "/bookmarks?action=confirmdelete&bookmark=" (encoded) } title="Delete" { "✕" }
            }
            div class="bm-main" {
                div class="bm-name" {
                    (bookmark.name)
                    " " span class="bm-path" { (bookmark.path) }
                }
                div class="bm-key" { (bookmark.key) }
                @if !bookmark.description.is_empty() {
                    div class="bm-desc" { (bookmark.description) }
                }
                details class="bm-edit" {
                    summary { "Edit" }
                    form class="bm-form" method="post" action={ "/bookmarks?action=edit&bookmark=" (encoded) } {
                        label for={ "name-" (encoded) } { "Name" }
                        input type="text" id={ "name-" (encoded) } name="name" value=(bookmark.name);
                        label for={ "key-" (encoded) } { "Key" }
                        input type="text" id={ "key-" (encoded) } name="key" value=(bookmark.key);
                        label for={ "desc-" (encoded) } { "Description" }
                        input type="text" id={ "desc-" (encoded) } name="descB" value=(bookmark.description);
                        label for={ "explain-" (encoded) } { "Explanation" }
                        textarea id={ "explain-" (encoded) } name="explain" rows="2" { (bookmark.explanation) }
                        div class="bm-check" {
                            input type="checkbox" name="hasAnActivelink" checked[bookmark.activelink];
                            "Has an activelink"
                        }
                        button type="submit" { "Save" }
                    }
                }
            }
        }
    }
}
