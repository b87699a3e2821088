//! HTML page rendering
//!
//! Pages are assembled by an immutable [`Renderer`] constructed once at
//! startup and handed to request handlers through the application state;
//! there is no process-global template state. All interpolated user content
//! is escaped; diff cells receive the pre-escaped highlight markup from the
//! diff engine as-is.

use html_escape::{encode_safe, encode_text};

use crate::compare::Comparison;
use crate::format::Mode;
use crate::share::SharePayload;

/// Everything one page render needs.
#[derive(Debug, Default)]
pub struct PageData {
    pub a: String,
    pub b: String,
    pub mode: Mode,
    pub ignore_whitespace: bool,
    pub ignore_case: bool,
    pub result: Option<Comparison>,
    pub error: Option<String>,
}

const STYLE: &str = "\
body { font-family: system-ui, sans-serif; margin: 1.5rem auto; max-width: 70rem; padding: 0 1rem; }\n\
textarea { width: 100%; font-family: ui-monospace, monospace; font-size: 0.85rem; }\n\
.panes { display: flex; gap: 1rem; } .panes > label { flex: 1; }\n\
.controls, .actions { margin: 0.75rem 0; display: flex; gap: 1rem; align-items: center; }\n\
.error { background: #fdd; border: 1px solid #c66; padding: 0.5rem 0.75rem; }\n\
.summary dt { font-weight: 600; } .summary dd code { word-break: break-all; }\n\
table.diff { border-collapse: collapse; width: 100%; font-family: ui-monospace, monospace; font-size: 0.85rem; }\n\
table.diff td { border: 1px solid #ddd; padding: 0.1rem 0.4rem; vertical-align: top; white-space: pre-wrap; }\n\
table.diff td.num { color: #888; text-align: right; user-select: none; }\n\
tr.changed td { background: #fff6d8; } tr.added td { background: #e2f5e2; } tr.removed td { background: #fbe3e3; }\n\
mark { background: #ffd24d; }\n";

/// Immutable rendering context, built once and stored in the app state.
pub struct Renderer {
    head: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        let head = format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>Collate</title>\n<style>\n{STYLE}</style>\n</head>\n"
        );
        Self { head }
    }

    /// Render the main page: form, optional error banner, optional result.
    pub fn page(&self, data: &PageData) -> String {
        let mut out = String::with_capacity(4096);
        out.push_str(&self.head);
        out.push_str("<body>\n<h1>Collate</h1>\n");

        if let Some(error) = &data.error {
            out.push_str(&format!(
                "<p class=\"error\">{}</p>\n",
                encode_text(error)
            ));
        }

        self.write_form(&mut out, data);

        if let Some(result) = &data.result {
            self.write_result(&mut out, result);
        }

        out.push_str("</body>\n</html>\n");
        out
    }

    /// Render the share-resolve page: an auto-submitting form that replays
    /// the stored pair against `/action`.
    pub fn resubmit_form(&self, payload: &SharePayload) -> String {
        let mut out = String::with_capacity(1024);
        out.push_str(&self.head);
        out.push_str(
            "<body onload=\"document.getElementById('resubmit').submit()\">\n\
             <form id=\"resubmit\" action=\"/action\" method=\"post\" \
             enctype=\"multipart/form-data\">\n",
        );
        out.push_str(&format!(
            "<input type=\"hidden\" name=\"a\" value=\"{}\">\n",
            encode_safe(&payload.original)
        ));
        out.push_str(&format!(
            "<input type=\"hidden\" name=\"b\" value=\"{}\">\n",
            encode_safe(&payload.revised)
        ));
        out.push_str(&format!(
            "<input type=\"hidden\" name=\"mode\" value=\"{}\">\n",
            payload.format.as_str()
        ));
        out.push_str("<input type=\"hidden\" name=\"action\" value=\"compare\">\n</form>\n");
        out.push_str(
            "<p>If you are not redirected, \
             <button type=\"submit\" form=\"resubmit\">click here</button>.</p>\n\
             </body>\n</html>\n",
        );
        out
    }

    fn write_form(&self, out: &mut String, data: &PageData) {
        out.push_str(
            "<form class=\"compare\" method=\"post\" action=\"/action\" \
             enctype=\"multipart/form-data\">\n<div class=\"panes\">\n",
        );
        out.push_str(&format!(
            "<label>Document A\n<textarea name=\"a\" rows=\"14\">{}</textarea>\n\
             <input type=\"file\" name=\"file_a\">\n</label>\n",
            encode_text(&data.a)
        ));
        out.push_str(&format!(
            "<label>Document B\n<textarea name=\"b\" rows=\"14\">{}</textarea>\n\
             <input type=\"file\" name=\"file_b\">\n</label>\n",
            encode_text(&data.b)
        ));
        out.push_str("</div>\n<div class=\"controls\">\n<label>Mode <select name=\"mode\">\n");
        for mode in [Mode::Text, Mode::Json, Mode::Xml] {
            out.push_str(&format!(
                "<option value=\"{}\"{}>{}</option>\n",
                mode.as_str(),
                selected(data.mode == mode),
                mode.as_str()
            ));
        }
        out.push_str("</select></label>\n");
        out.push_str(&format!(
            "<label><input type=\"checkbox\" name=\"ignore_ws\" value=\"on\"{}> \
             ignore whitespace</label>\n",
            checked(data.ignore_whitespace)
        ));
        out.push_str(&format!(
            "<label><input type=\"checkbox\" name=\"ignore_case\" value=\"on\"{}> \
             ignore case</label>\n",
            checked(data.ignore_case)
        ));
        out.push_str(
            "</div>\n<div class=\"actions\">\n\
             <button name=\"action\" value=\"compare\">Compare</button>\n\
             <button name=\"action\" value=\"format_a\">Format A</button>\n\
             <button name=\"action\" value=\"format_b\">Format B</button>\n\
             <button name=\"action\" value=\"format_both\">Format both</button>\n\
             <button type=\"button\" id=\"share\">Create share link</button>\n\
             </div>\n</form>\n<p id=\"share-result\" hidden></p>\n",
        );
        out.push_str(SHARE_SCRIPT);
    }

    fn write_result(&self, out: &mut String, result: &Comparison) {
        out.push_str("<section class=\"result\">\n<dl class=\"summary\">\n");
        out.push_str(&format!(
            "<dt>Exact match</dt><dd>{}</dd>\n",
            yes_no(result.exact_match)
        ));
        out.push_str(&format!(
            "<dt>Normalized match</dt><dd>{}</dd>\n",
            yes_no(result.normalized_match)
        ));
        out.push_str(&format!(
            "<dt>Length A</dt><dd>{} bytes</dd>\n<dt>Length B</dt><dd>{} bytes</dd>\n",
            result.a_len, result.b_len
        ));
        out.push_str(&format!(
            "<dt>SHA-256 A</dt><dd><code>{}</code></dd>\n\
             <dt>SHA-256 B</dt><dd><code>{}</code></dd>\n",
            result.a_hash, result.b_hash
        ));
        out.push_str("</dl>\n");

        out.push_str("<table class=\"diff\">\n");
        for row in &result.rows {
            out.push_str(&format!(
                "<tr class=\"{}\"><td class=\"num\">{}</td><td>{}</td><td>{}</td></tr>\n",
                row.status.as_str(),
                row.line_num,
                row.a_html,
                row.b_html
            ));
        }
        out.push_str("</table>\n</section>\n");
    }
}

const SHARE_SCRIPT: &str = "<script>\n\
document.getElementById('share').addEventListener('click', async () => {\n\
  const form = document.querySelector('form.compare');\n\
  const body = new URLSearchParams({\n\
    a: form.elements.a.value,\n\
    b: form.elements.b.value,\n\
    mode: form.elements.mode.value,\n\
  });\n\
  const res = await fetch('/share', { method: 'POST', body });\n\
  const data = await res.json();\n\
  const url = new URL('/share', window.location.origin);\n\
  url.searchParams.set('id', data.id);\n\
  const target = document.getElementById('share-result');\n\
  target.textContent = url.toString();\n\
  target.hidden = false;\n\
});\n\
</script>\n";

fn selected(on: bool) -> &'static str {
    if on {
        " selected"
    } else {
        ""
    }
}

fn checked(on: bool) -> &'static str {
    if on {
        " checked"
    } else {
        ""
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
