//! Fitting document text onto a fixed-size grid of terminal cells.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::dom::Document;
use crate::sort::{Stepper, StepperState};

/// Display width of `text` in terminal cells.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Greedy wrap of one line to `width` cells.
///
/// Breaks after the last space that fits when there is one, otherwise at
/// the width. No row is wider than `width` unless a single grapheme is.
/// Grapheme clusters are never split. An empty line stays one
/// empty row.
#[must_use]
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0usize;
    // Byte offset in `row` just after its last space.
    let mut break_at: Option<usize> = None;

    for grapheme in line.graphemes(true) {
        let w = display_width(grapheme);
        if row_width + w > width && !row.is_empty() {
            if let Some(at) = break_at.filter(|at| *at < row.len()) {
                let carry = row.split_off(at);
                push_row(&mut rows, &row);
                row_width = display_width(&carry);
                row = carry;
            }
            // The carried word may still leave no room for this grapheme.
            if row_width + w > width {
                push_row(&mut rows, &row);
                row.clear();
                row_width = 0;
            }
            break_at = None;
        }
        row.push_str(grapheme);
        row_width += w;
        if grapheme == " " {
            break_at = Some(row.len());
        }
    }
    rows.push(row);
    rows
}

/// Rows made only of the spaces a break consumed are dropped.
fn push_row(rows: &mut Vec<String>, row: &str) {
    let row = row.trim_end();
    if !row.is_empty() {
        rows.push(row.to_string());
    }
}

/// Wrap every visible line of `doc` to `width`.
#[must_use]
pub fn layout(doc: &Document, width: usize) -> Vec<String> {
    doc.visible_lines()
        .iter()
        .flat_map(|line| wrap_line(line, width))
        .collect()
}

/// Status line text for the current run.
#[must_use]
pub fn status_line(doc: &Document, stepper: &Stepper) -> String {
    let family = doc.style().font_family.as_deref().unwrap_or("default");
    let state = match stepper.state() {
        StepperState::Sorting => "sorting",
        StepperState::Done => "done",
    };
    format!(
        " {family} | {} letters | pass {} | {state}",
        stepper.letters().len(),
        stepper.passes()
    )
}

/// Cut `text` to at most `width` cells.
#[must_use]
pub fn truncate(text: &str, width: usize) -> &str {
    let mut used = 0usize;
    for (idx, grapheme) in text.grapheme_indices(true) {
        let w = display_width(grapheme);
        if used + w > width {
            return &text[..idx];
        }
        used += w;
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_at_spaces() {
        assert_eq!(
            wrap_line("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_wrap_long_word() {
        assert_eq!(wrap_line("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_wide_graphemes() {
        // Each CJK character is two cells wide.
        assert_eq!(wrap_line("中文日本語", 4), vec!["中文", "日本", "語"]);
        // Combining accent stays with its base.
        assert_eq!(wrap_line("e\u{301}e\u{301}e\u{301}", 2), vec!["e\u{301}e\u{301}", "e\u{301}"]);
    }

    #[test]
    fn test_wrap_carry_then_wide_grapheme() {
        // After breaking at the space, "ab" plus a two-cell grapheme still
        // overflows three cells.
        assert_eq!(wrap_line(" ab中", 3), vec!["ab", "中"]);
        assert_eq!(wrap_line("abc   def", 3), vec!["abc", "def"]);

        for (line, width) in [
            (" ab中", 3),
            ("x ab中文", 3),
            ("a bcd中", 4),
            ("one  two 中文 three", 5),
            ("  中 中 中", 2),
        ] {
            let rows = wrap_line(line, width);
            assert!(
                rows.iter().all(|row| display_width(row) <= width),
                "{line:?} at {width}: {rows:?}"
            );
            assert!(rows.iter().all(|row| !row.is_empty()), "{line:?}: {rows:?}");
        }
    }

    #[test]
    fn test_wrap_empty_and_zero_width() {
        assert_eq!(wrap_line("", 10), vec![""]);
        assert!(wrap_line("abc", 0).is_empty());
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 3), "hel");
        assert_eq!(truncate("hi", 10), "hi");
        assert_eq!(truncate("中文", 3), "中");
    }

    #[test]
    fn test_layout_wraps_visible_lines() {
        let doc = Document::from_text("aaa bbb\nccc");
        assert_eq!(layout(&doc, 4), vec!["aaa", "bbb", "ccc"]);
    }
}
