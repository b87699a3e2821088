//! Page endpoints
//!
//! - GET `/` - the input form, with an optional error banner selected by a
//!   redirect query parameter
//! - POST `/action` - pretty-print one/both documents or run the comparison,
//!   driven by the `action` form field
//!
//! The form posts as multipart so documents can arrive either as textarea
//! fields or as file uploads; a non-empty upload overrides the matching
//! text field. Upload read failures silently fall back to the text field.

use axum::extract::multipart::Field;
use axum::extract::{Multipart, Query, State};
use axum::response::Html;
use serde::Deserialize;

use crate::compare::{self, CompareOptions};
use crate::error::Side;
use crate::format::{self, Mode};
use crate::render::PageData;
use crate::state::AppState;

/// What the submit button asked for.
///
/// Invalid or missing values fall back to `Compare` at the boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Action {
    #[default]
    Compare,
    FormatA,
    FormatB,
    FormatBoth,
}

impl Action {
    pub fn from_form_value(value: &str) -> Self {
        match value {
            "format_a" => Action::FormatA,
            "format_b" => Action::FormatB,
            "format_both" => Action::FormatBoth,
            _ => Action::Compare,
        }
    }

    /// Which sides a format action touches.
    fn targets(self) -> (bool, bool) {
        match self {
            Action::Compare => (false, false),
            Action::FormatA => (true, false),
            Action::FormatB => (false, true),
            Action::FormatBoth => (true, true),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    error: Option<String>,
}

/// GET / - the input form.
pub async fn home(State(state): State<AppState>, Query(query): Query<HomeQuery>) -> Html<String> {
    let data = PageData {
        error: query.error.as_deref().map(describe_redirect_error),
        ..PageData::default()
    };
    Html(state.renderer().page(&data))
}

/// POST /action - pretty-print or compare, per the `action` field.
pub async fn action(State(state): State<AppState>, multipart: Multipart) -> Html<String> {
    let form = ActionForm::from_multipart(multipart, state.config().upload.max_file_bytes).await;

    let html = match form.action {
        Action::Compare => render_compare(&state, form),
        _ => render_format(&state, form),
    };
    Html(html)
}

fn render_compare(state: &AppState, form: ActionForm) -> String {
    let options = CompareOptions {
        mode: form.mode,
        ignore_whitespace: form.ignore_whitespace,
        ignore_case: form.ignore_case,
    };

    match compare::run(&form.a, &form.b, &options) {
        Ok(result) => {
            tracing::info!(
                mode = form.mode.as_str(),
                exact = result.exact_match,
                normalized = result.normalized_match,
                rows = result.rows.len(),
                "comparison complete"
            );
            let mut data = form.into_page_data();
            data.result = Some(result);
            state.renderer().page(&data)
        }
        Err(err) => {
            tracing::warn!(error = %err, "comparison rejected");
            let mut data = form.into_page_data();
            data.error = Some(err.to_string());
            state.renderer().page(&data)
        }
    }
}

fn render_format(state: &AppState, mut form: ActionForm) -> String {
    let (format_a, format_b) = form.action.targets();

    // Text mode has no canonical form; the action is a no-op.
    if form.mode != Mode::Text {
        if format_a {
            match format::pretty_print(&form.a, form.mode) {
                Ok(pretty) => form.a = pretty,
                Err(err) => {
                    let message = pretty_failure_message(form.mode, Side::A, &err);
                    let mut data = form.into_page_data();
                    data.error = Some(message);
                    return state.renderer().page(&data);
                }
            }
        }
        if format_b {
            match format::pretty_print(&form.b, form.mode) {
                Ok(pretty) => form.b = pretty,
                Err(err) => {
                    let message = pretty_failure_message(form.mode, Side::B, &err);
                    let mut data = form.into_page_data();
                    data.error = Some(message);
                    return state.renderer().page(&data);
                }
            }
        }
    }

    state.renderer().page(&form.into_page_data())
}

fn pretty_failure_message(mode: Mode, side: Side, err: &format::FormatError) -> String {
    format!("Pretty {} {} failed: {}", mode.label(), side, err)
}

fn describe_redirect_error(code: &str) -> String {
    match code {
        "no_id" => "No share link id was provided".to_string(),
        "not_found" => "That share link has expired or does not exist".to_string(),
        "payload_invalid" => "The stored share entry could not be decoded".to_string(),
        other => format!("Request failed: {other}"),
    }
}

/// Decoded `/action` form.
#[derive(Debug, Default)]
struct ActionForm {
    a: String,
    b: String,
    mode: Mode,
    action: Action,
    ignore_whitespace: bool,
    ignore_case: bool,
}

impl ActionForm {
    async fn from_multipart(mut multipart: Multipart, max_file_bytes: usize) -> Self {
        let mut form = ActionForm::default();
        let mut file_a = None;
        let mut file_b = None;

        loop {
            let field = match multipart.next_field().await {
                Ok(Some(field)) => field,
                Ok(None) => break,
                Err(err) => {
                    tracing::warn!(error = %err, "failed to read multipart field");
                    break;
                }
            };

            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            match name.as_str() {
                "file_a" | "file_b" => {
                    let filename = field.file_name().map(base_name);
                    let Some(content) = read_upload(field, max_file_bytes).await else {
                        continue;
                    };
                    tracing::debug!(
                        field = %name,
                        filename = filename.as_deref().unwrap_or(""),
                        bytes = content.len(),
                        "received upload"
                    );
                    if name == "file_a" {
                        file_a = Some(content);
                    } else {
                        file_b = Some(content);
                    }
                }
                _ => {
                    let value = match field.text().await {
                        Ok(value) => value,
                        Err(err) => {
                            tracing::warn!(field = %name, error = %err, "failed to read form field");
                            continue;
                        }
                    };
                    match name.as_str() {
                        "a" => form.a = trim_trailing_newlines(&value),
                        "b" => form.b = trim_trailing_newlines(&value),
                        "mode" => form.mode = Mode::from_form_value(&value),
                        "action" => form.action = Action::from_form_value(&value),
                        "ignore_ws" => form.ignore_whitespace = value == "on",
                        "ignore_case" => form.ignore_case = value == "on",
                        _ => {}
                    }
                }
            }
        }

        // Uploaded files override the textareas when non-empty.
        if let Some(content) = file_a {
            if !content.is_empty() {
                form.a = content;
            }
        }
        if let Some(content) = file_b {
            if !content.is_empty() {
                form.b = content;
            }
        }

        form
    }

    fn into_page_data(self) -> PageData {
        PageData {
            a: self.a,
            b: self.b,
            mode: self.mode,
            ignore_whitespace: self.ignore_whitespace,
            ignore_case: self.ignore_case,
            result: None,
            error: None,
        }
    }
}

/// Read an uploaded file, capped at `max` bytes (longer uploads truncate).
/// Read failures return `None` so the caller falls back to the text field.
async fn read_upload(field: Field<'_>, max: usize) -> Option<String> {
    let data = match field.bytes().await {
        Ok(data) => data,
        Err(err) => {
            tracing::warn!(error = %err, "failed to read uploaded file");
            return None;
        }
    };
    let clipped = if data.len() > max { &data[..max] } else { &data[..] };
    Some(String::from_utf8_lossy(clipped).into_owned())
}

/// Trim only the trailing run of `\r`/`\n` from a textarea value.
fn trim_trailing_newlines(value: &str) -> String {
    value.trim_end_matches(['\r', '\n']).to_string()
}

/// Base filename for display; uploads may carry full client paths.
fn base_name(name: &str) -> String {
    name.rsplit(['/', '\\']).next().unwrap_or(name).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_form_value() {
        assert_eq!(Action::from_form_value("compare"), Action::Compare);
        assert_eq!(Action::from_form_value("format_a"), Action::FormatA);
        assert_eq!(Action::from_form_value("format_b"), Action::FormatB);
        assert_eq!(Action::from_form_value("format_both"), Action::FormatBoth);
        assert_eq!(Action::from_form_value(""), Action::Compare);
        assert_eq!(Action::from_form_value("delete"), Action::Compare);
    }

    #[test]
    fn test_trim_trailing_newlines_only() {
        assert_eq!(trim_trailing_newlines("abc\r\n"), "abc");
        assert_eq!(trim_trailing_newlines("abc\n\n\r"), "abc");
        assert_eq!(trim_trailing_newlines("  abc  "), "  abc  ");
        assert_eq!(trim_trailing_newlines("a\nb"), "a\nb");
    }

    #[test]
    fn test_base_name_strips_client_paths() {
        assert_eq!(base_name("doc.json"), "doc.json");
        assert_eq!(base_name("/home/user/doc.json"), "doc.json");
        assert_eq!(base_name("C:\\Users\\user\\doc.json"), "doc.json");
    }

    #[test]
    fn test_pretty_failure_message_wording() {
        let err = format::pretty_print("{bad}", Mode::Json).unwrap_err();
        let message = pretty_failure_message(Mode::Json, Side::A, &err);
        assert!(message.starts_with("Pretty JSON A failed: "));
    }
}
