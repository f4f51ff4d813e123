use super::letters::CharRecord;
use crate::config::is_fixed;
use crate::dom::{Document, NodeId};

/// Write `letters` back into `segments` in sequence order.
///
/// Each segment keeps its length: fixed whitespace is copied through and
/// every other position takes the next record. The number of such positions
/// must equal `letters.len()`.
pub fn render_letters(
    letters: &[CharRecord],
    doc: &mut Document,
    segments: &[NodeId],
    skip_whitespace: bool,
) {
    let mut next = letters.iter();
    for id in segments {
        let Some(current) = doc.text(*id) else {
            continue;
        };
        let mut rendered = String::with_capacity(current.len());
        for ch in current.chars() {
            if is_fixed(ch, skip_whitespace) {
                rendered.push(ch);
                continue;
            }
            let record = next.next();
            debug_assert!(record.is_some(), "more sortable positions than letters");
            rendered.push(record.map_or(ch, CharRecord::ch));
        }
        doc.set_text(*id, rendered);
    }
    debug_assert!(next.next().is_none(), "letters left over after render");
}
