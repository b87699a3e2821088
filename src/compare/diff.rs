//! Line diff with character-level highlighting
//!
//! The diff is strictly positional: line `i` of A is compared with line `i`
//! of B. A single line inserted mid-document therefore cascades `changed`
//! status through the remainder rather than re-aligning.
//!
//! Changed rows additionally get a character-level highlight: the longest
//! common prefix and the longest common suffix of the two lines (computed
//! on code points, never overlapping) are emitted unmarked, and each side's
//! differing middle is wrapped in `<mark>`. All line content is HTML-escaped
//! before markup insertion.

use html_escape::encode_text;

/// Classification of one diff row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffStatus {
    Same,
    Changed,
    Added,
    Removed,
}

impl DiffStatus {
    /// CSS class / display name.
    pub fn as_str(self) -> &'static str {
        match self {
            DiffStatus::Same => "same",
            DiffStatus::Changed => "changed",
            DiffStatus::Added => "added",
            DiffStatus::Removed => "removed",
        }
    }
}

/// One row of the rendered diff, 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiffRow {
    pub line_num: usize,
    /// Original line text; `None` when the side has no line at this index.
    pub a: Option<String>,
    pub b: Option<String>,
    /// Escaped markup rendering, with `<mark>` spans on changed rows.
    pub a_html: String,
    pub b_html: String,
    pub status: DiffStatus,
}

/// Split into lines, normalizing `\r\n` to `\n`.
///
/// An empty document yields zero lines, not one empty line. A trailing
/// newline yields a final empty line, matching the display the user sees.
pub fn split_lines(input: &str) -> Vec<String> {
    let unified = input.replace("\r\n", "\n");
    if unified.is_empty() {
        return Vec::new();
    }
    unified.split('\n').map(str::to_owned).collect()
}

/// Positional line diff over two documents.
pub fn line_diff(a: &str, b: &str) -> Vec<LineDiffRow> {
    let a_lines = split_lines(a);
    let b_lines = split_lines(b);
    let count = a_lines.len().max(b_lines.len());

    let mut rows = Vec::with_capacity(count);
    for i in 0..count {
        let av = a_lines.get(i).map(String::as_str);
        let bv = b_lines.get(i).map(String::as_str);

        let (status, a_html, b_html) = match (av, bv) {
            (Some(x), Some(y)) if x == y => {
                (DiffStatus::Same, escape_line(x), escape_line(y))
            }
            (Some(x), Some(y)) => {
                let (a_html, b_html) = highlight_char_diff(x, y);
                (DiffStatus::Changed, a_html, b_html)
            }
            (Some(x), None) => (DiffStatus::Removed, escape_line(x), String::new()),
            (None, Some(y)) => (DiffStatus::Added, String::new(), escape_line(y)),
            (None, None) => break,
        };

        rows.push(LineDiffRow {
            line_num: i + 1,
            a: av.map(str::to_owned),
            b: bv.map(str::to_owned),
            a_html,
            b_html,
            status,
        });
    }

    rows
}

/// Highlight the differing middle of two lines.
fn highlight_char_diff(a: &str, b: &str) -> (String, String) {
    let ar: Vec<char> = a.chars().collect();
    let br: Vec<char> = b.chars().collect();

    // common prefix
    let mut prefix = 0;
    while prefix < ar.len() && prefix < br.len() && ar[prefix] == br[prefix] {
        prefix += 1;
    }

    // common suffix over the unmatched tails, so the regions never overlap
    let mut a_end = ar.len();
    let mut b_end = br.len();
    while a_end > prefix && b_end > prefix && ar[a_end - 1] == br[b_end - 1] {
        a_end -= 1;
        b_end -= 1;
    }

    (
        mark_middle(&ar, prefix, a_end),
        mark_middle(&br, prefix, b_end),
    )
}

fn mark_middle(chars: &[char], start: usize, end: usize) -> String {
    let prefix: String = chars[..start].iter().collect();
    let middle: String = chars[start..end].iter().collect();
    let suffix: String = chars[end..].iter().collect();

    let mut out = String::with_capacity(chars.len() + 13);
    out.push_str(&escape_line(&prefix));
    if !middle.is_empty() {
        out.push_str("<mark>");
        out.push_str(&escape_line(&middle));
        out.push_str("</mark>");
    }
    out.push_str(&escape_line(&suffix));
    out
}

fn escape_line(line: &str) -> String {
    encode_text(line).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_empty_is_zero_lines() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_split_lines_normalizes_crlf() {
        assert_eq!(split_lines("a\r\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_lines_trailing_newline_keeps_empty_line() {
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
    }

    #[test]
    fn test_identical_documents_all_same() {
        let rows = line_diff("one\ntwo", "one\ntwo");
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.status == DiffStatus::Same));
        assert_eq!(rows[0].line_num, 1);
        assert_eq!(rows[1].line_num, 2);
    }

    #[test]
    fn test_empty_documents_zero_rows() {
        assert!(line_diff("", "").is_empty());
    }

    #[test]
    fn test_three_vs_five_lines_trailing_added() {
        let rows = line_diff("1\n2\n3", "1\n2\n3\n4\n5");
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[2].status, DiffStatus::Same);
        assert_eq!(rows[3].status, DiffStatus::Added);
        assert_eq!(rows[4].status, DiffStatus::Added);
        assert_eq!(rows[4].line_num, 5);
        assert_eq!(rows[4].a, None);
        assert_eq!(rows[4].b.as_deref(), Some("5"));
    }

    #[test]
    fn test_extra_lines_in_a_are_removed() {
        let rows = line_diff("1\n2\n3", "1");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].status, DiffStatus::Removed);
        assert_eq!(rows[2].status, DiffStatus::Removed);
        assert_eq!(rows[1].b, None);
        assert_eq!(rows[1].b_html, "");
    }

    #[test]
    fn test_changed_row_highlights_middle() {
        let rows = line_diff("hello world", "hello earth");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, DiffStatus::Changed);
        assert_eq!(rows[0].a_html, "hello <mark>world</mark>");
        assert_eq!(rows[0].b_html, "hello <mark>earth</mark>");
    }

    #[test]
    fn test_highlight_common_prefix_and_suffix() {
        let (a_html, b_html) = highlight_char_diff("start mid end", "start MID end");
        assert_eq!(a_html, "start <mark>mid</mark> end");
        assert_eq!(b_html, "start <mark>MID</mark> end");
    }

    #[test]
    fn test_highlight_regions_never_overlap() {
        // Suffix matching must not reuse characters claimed by the prefix.
        let (a_html, b_html) = highlight_char_diff("aaa", "aa");
        assert_eq!(a_html, "aa<mark>a</mark>");
        assert_eq!(b_html, "aa");
    }

    #[test]
    fn test_highlight_operates_on_code_points() {
        let (a_html, b_html) = highlight_char_diff("naïve", "naive");
        assert_eq!(a_html, "na<mark>ï</mark>ve");
        assert_eq!(b_html, "na<mark>i</mark>ve");
    }

    #[test]
    fn test_highlight_escapes_markup() {
        let rows = line_diff("<b>bold</b>", "<b>mild</b>");
        assert_eq!(rows[0].a_html, "&lt;b&gt;<mark>bo</mark>ld&lt;/b&gt;");
        assert_eq!(rows[0].b_html, "&lt;b&gt;<mark>mi</mark>ld&lt;/b&gt;");
    }

    #[test]
    fn test_same_row_is_escaped_without_marker() {
        let rows = line_diff("<x>&</x>", "<x>&</x>");
        assert_eq!(rows[0].status, DiffStatus::Same);
        assert_eq!(rows[0].a_html, "&lt;x&gt;&amp;&lt;/x&gt;");
        assert!(!rows[0].a_html.contains("<mark>"));
    }

    #[test]
    fn test_mid_document_insertion_cascades() {
        // Positional alignment: inserting "1.5" shifts everything below.
        let rows = line_diff("1\n2\n3", "1\n1.5\n2\n3");
        assert_eq!(rows[0].status, DiffStatus::Same);
        assert_eq!(rows[1].status, DiffStatus::Changed);
        assert_eq!(rows[2].status, DiffStatus::Changed);
        assert_eq!(rows[3].status, DiffStatus::Added);
    }
}
