use crate::config::is_fixed;
use crate::dom::{Document, NodeId};

/// A character paired with its position in the original reading order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharRecord {
    original_index: usize,
    ch: char,
}

impl CharRecord {
    /// Create a record.
    #[must_use]
    pub const fn new(original_index: usize, ch: char) -> Self {
        Self { original_index, ch }
    }

    /// Position in the whitespace-filtered stream at extraction time.
    #[must_use]
    pub const fn original_index(&self) -> usize {
        self.original_index
    }

    /// The character.
    #[must_use]
    pub const fn ch(&self) -> char {
        self.ch
    }
}

/// Flatten `segments` into records and sort them alphabetically.
///
/// Indices count only the characters that take part in the sort. The sort
/// is stable, so equal characters keep their reading order.
#[must_use]
pub fn extract_letters(
    doc: &Document,
    segments: &[NodeId],
    skip_whitespace: bool,
) -> Vec<CharRecord> {
    let mut letters = Vec::new();
    let mut next_index = 0usize;
    for id in segments {
        let Some(text) = doc.text(*id) else {
            continue;
        };
        for ch in text.chars() {
            if is_fixed(ch, skip_whitespace) {
                continue;
            }
            letters.push(CharRecord::new(next_index, ch));
            next_index += 1;
        }
    }
    letters.sort_by_key(CharRecord::ch);
    letters
}

/// True when the records are in ascending original order.
#[must_use]
pub fn is_reading_order(letters: &[CharRecord]) -> bool {
    letters
        .windows(2)
        .all(|pair| pair[0].original_index < pair[1].original_index)
}

/// The characters of `letters` in sequence order.
#[must_use]
pub fn letters_to_string(letters: &[CharRecord]) -> String {
    letters.iter().map(CharRecord::ch).collect()
}
