//! Bookmark page handlers: list rendering plus reorder/delete/edit actions.
//!
//! Both verbs share the same gate as the node's own web UI: the raw query
//! string must begin with `action` and carry a non-empty `bookmark`
//! parameter, otherwise the request falls through to plain rendering. The
//! `bookmark` value is percent-decoded explicitly; a value that does not
//! decode sends the client to the error page without touching the node.
//!
//! Actions answer with a see-other redirect to the bare `/bookmarks` path so
//! the action parameters never stay in the visible URL (refreshing the page
//! must not replay a delete).

use axum::Form;
use axum::extract::{RawQuery, State};
use axum::response::{IntoResponse, Redirect, Response};
use percent_encoding::percent_decode_str;
use serde::Deserialize;

use winterface_node::NodeUri;

use crate::error::WinterfaceError;
use crate::render;
use crate::state::AppState;

/// The closed set of bookmark actions, decoded once at the routing boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BookmarkAction {
    Delete,
    MoveUp,
    MoveDown,
    Edit,
}

impl BookmarkAction {
    /// Case-sensitive exact match on the wire value.
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "confirmdelete" => Some(Self::Delete),
            "up" => Some(Self::MoveUp),
            "down" => Some(Self::MoveDown),
            "edit" => Some(Self::Edit),
            _ => None,
        }
    }
}

/// Raw (still percent-encoded) action parameters pulled from the query string.
#[derive(Debug, PartialEq, Eq)]
struct ActionRequest {
    action: String,
    bookmark: String,
}

/// Extract an action request from a raw query string.
///
/// Returns `None` unless the query begins with `action` and carries a
/// non-empty `bookmark` parameter. An absent `bookmark` is treated the same
/// as an empty one: no action requested.
fn parse_action_query(query: &str) -> Option<ActionRequest> {
    if !query.starts_with("action") {
        return None;
    }
    let mut action = None;
    let mut bookmark = None;
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "action" if action.is_none() => action = Some(value),
            "bookmark" if bookmark.is_none() => bookmark = Some(value),
            _ => {}
        }
    }
    let action = action?;
    let bookmark = bookmark.filter(|b| !b.is_empty())?;
    Some(ActionRequest {
        action: action.to_string(),
        bookmark: bookmark.to_string(),
    })
}

/// Percent-decode the bookmark path parameter.
fn decode_bookmark_path(raw: &str) -> Option<String> {
    percent_decode_str(raw)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}

/// Form body of an edit submission. Field names are the node web UI's wire
/// names; values are forwarded to the node untouched.
#[derive(Debug, Deserialize)]
pub struct EditForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub key: String,
    #[serde(rename = "descB", default)]
    pub description: String,
    #[serde(rename = "explain", default)]
    pub explanation: String,
    /// Checkbox: active iff the submitted value is exactly `"on"`.
    #[serde(rename = "hasAnActivelink", default)]
    pub has_an_activelink: Option<String>,
}

/// `GET /bookmarks` — dispatch reorder/delete actions, else render the list.
pub async fn bookmarks_get(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Response {
    match dispatch_get(&state, query.as_deref()).await {
        Ok(response) => response,
        Err(err) => err.into_response_with(state.dev_mode),
    }
}

async fn dispatch_get(
    state: &AppState,
    query: Option<&str>,
) -> Result<Response, WinterfaceError> {
    if let Some(request) = query.and_then(parse_action_query) {
        let Some(path) = decode_bookmark_path(&request.bookmark) else {
            tracing::warn!(raw = %request.bookmark, "undecodable bookmark parameter");
            return Ok(Redirect::to("/error").into_response());
        };

        match BookmarkAction::parse(&request.action) {
            Some(BookmarkAction::Delete) => state.node.remove_bookmark(&path)?,
            Some(BookmarkAction::MoveUp) => state.node.move_bookmark_up(&path, true)?,
            Some(BookmarkAction::MoveDown) => state.node.move_bookmark_down(&path, true)?,
            // edit only arrives via POST
            Some(BookmarkAction::Edit) | None => {
                return Err(WinterfaceError::UnknownAction(request.action));
            }
        }

        // Strip the action from the visible URL
        return Ok(Redirect::to("/bookmarks").into_response());
    }

    let bookmarks = state.node.bookmarks()?;
    Ok(render::bookmarks::bookmarks_page(&bookmarks).into_response())
}

/// `POST /bookmarks` — accept an edit submission, else render the list.
pub async fn bookmarks_post(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    Form(form): Form<EditForm>,
) -> Response {
    match dispatch_post(&state, query.as_deref(), form).await {
        Ok(response) => response,
        Err(err) => err.into_response_with(state.dev_mode),
    }
}

async fn dispatch_post(
    state: &AppState,
    query: Option<&str>,
    form: EditForm,
) -> Result<Response, WinterfaceError> {
    if let Some(request) = query.and_then(parse_action_query) {
        let Some(path) = decode_bookmark_path(&request.bookmark) else {
            tracing::warn!(raw = %request.bookmark, "undecodable bookmark parameter");
            return Ok(Redirect::to("/error").into_response());
        };

        match BookmarkAction::parse(&request.action) {
            Some(BookmarkAction::Edit) => {
                let key: NodeUri = form.key.parse().map_err(WinterfaceError::Node)?;
                let activelink = form.has_an_activelink.as_deref() == Some("on");
                state.node.edit_bookmark(
                    &path,
                    &form.name,
                    key,
                    &form.description,
                    &form.explanation,
                    activelink,
                )?;
            }
            _ => return Err(WinterfaceError::UnknownAction(request.action)),
        }

        return Ok(Redirect::to("/bookmarks").into_response());
    }

    let bookmarks = state.node.bookmarks()?;
    Ok(render::bookmarks::bookmarks_page(&bookmarks).into_response())
}
