//! Property-based tests for the alphabetize-and-unsort pipeline.
//!
//! Uses proptest to verify invariants that must hold across all documents.

use lettersort::sort::{is_reading_order, letters_to_string};
use lettersort::{
    CharRecord, Document, NodeId, StepOutcome, Stepper, collect_text_segments, extract_letters,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Segment text mixing ASCII, whitespace and multi-byte characters.
fn segment_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            'a', 'b', 'c', 'x', 'y', 'z', 'A', 'Z', '0', '9', '!', ' ', ' ', '\n', '\t', 'é',
            '中', '\u{a0}',
        ]),
        0..24,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// A body with one paragraph per segment.
fn document() -> impl Strategy<Value = Document> {
    prop::collection::vec(segment_text(), 0..6).prop_map(|segments| {
        let mut doc = Document::new();
        let body = doc.append_element(doc.root(), "body");
        for text in segments {
            let p = doc.append_element(body, "p");
            if !text.is_empty() {
                doc.append_text(p, &text);
            }
        }
        doc
    })
}

fn sorted_letters(text: &str) -> Vec<char> {
    let mut chars: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    chars.sort_unstable();
    chars
}

fn whitespace_layout(doc: &Document, segments: &[NodeId]) -> Vec<Vec<Option<char>>> {
    segments
        .iter()
        .map(|id| {
            doc.text(*id)
                .unwrap_or_default()
                .chars()
                .map(|c| c.is_whitespace().then_some(c))
                .collect()
        })
        .collect()
}

fn start(doc: &mut Document) -> Stepper {
    let segments = collect_text_segments(doc, doc.body_or_root());
    let letters = extract_letters(doc, &segments, true);
    let stepper = Stepper::new(letters, segments, true);
    stepper.render(doc);
    stepper
}

// ============================================================================
// Extraction Properties
// ============================================================================

proptest! {
    /// The initial sequence is in character order.
    #[test]
    fn letters_start_alphabetized(doc in document()) {
        let segments = collect_text_segments(&doc, doc.root());
        let letters = extract_letters(&doc, &segments, true);
        prop_assert!(letters.windows(2).all(|w| w[0].ch() <= w[1].ch()));
    }

    /// Equal characters keep their extraction order.
    #[test]
    fn equal_letters_keep_reading_order(doc in document()) {
        let segments = collect_text_segments(&doc, doc.root());
        let letters = extract_letters(&doc, &segments, true);
        for pair in letters.windows(2) {
            if pair[0].ch() == pair[1].ch() {
                prop_assert!(pair[0].original_index() < pair[1].original_index());
            }
        }
    }

    /// Indices are exactly 0..N.
    #[test]
    fn indices_are_a_permutation(doc in document()) {
        let segments = collect_text_segments(&doc, doc.root());
        let letters = extract_letters(&doc, &segments, true);
        let mut indices: Vec<usize> = letters.iter().map(CharRecord::original_index).collect();
        indices.sort_unstable();
        prop_assert_eq!(indices, (0..letters.len()).collect::<Vec<_>>());
    }
}

// ============================================================================
// Stepping Properties
// ============================================================================

proptest! {
    /// The letters on the page are the same multiset after every step.
    #[test]
    fn letters_are_conserved(mut doc in document()) {
        let original = sorted_letters(&doc.text_content(doc.root()));
        let mut stepper = start(&mut doc);
        prop_assert_eq!(&sorted_letters(&doc.text_content(doc.root())), &original);
        prop_assert_eq!(&sorted_letters(&letters_to_string(stepper.letters())), &original);

        while let StepOutcome::Continue { .. } = stepper.step(&mut doc) {
            prop_assert_eq!(&sorted_letters(&doc.text_content(doc.root())), &original);
        }
        prop_assert_eq!(&sorted_letters(&doc.text_content(doc.root())), &original);
    }

    /// Whitespace never moves and segments never change length.
    #[test]
    fn whitespace_layout_is_preserved(mut doc in document()) {
        let segments = collect_text_segments(&doc, doc.root());
        let layout = whitespace_layout(&doc, &segments);
        let mut stepper = start(&mut doc);
        prop_assert_eq!(&whitespace_layout(&doc, &segments), &layout);

        while stepper.step(&mut doc) != StepOutcome::Done {
            prop_assert_eq!(&whitespace_layout(&doc, &segments), &layout);
        }
        stepper.render(&mut doc);
        prop_assert_eq!(&whitespace_layout(&doc, &segments), &layout);
    }

    /// Sorting finishes within bubble sort's pass bound and restores the text.
    #[test]
    fn sorting_terminates_in_reading_order(mut doc in document()) {
        let original = doc.text_content(doc.root());
        let mut stepper = start(&mut doc);
        let n = stepper.letters().len();

        let mut swapping_passes = 0;
        while let StepOutcome::Continue { .. } = stepper.step(&mut doc) {
            swapping_passes += 1;
            prop_assert!(swapping_passes <= n.saturating_sub(1));
        }
        prop_assert!(stepper.passes() <= n.max(1));
        prop_assert!(is_reading_order(stepper.letters()));
        prop_assert_eq!(doc.text_content(doc.root()), original);
    }

    /// Without whitespace skipping, whitespace is sorted too and still returns.
    #[test]
    fn whitespace_sorting_round_trips(mut doc in document()) {
        let original = doc.text_content(doc.root());
        let segments = collect_text_segments(&doc, doc.root());
        let letters = extract_letters(&doc, &segments, false);
        prop_assert_eq!(letters.len(), original.chars().count());

        let mut stepper = Stepper::new(letters, segments, false);
        stepper.render(&mut doc);
        while stepper.step(&mut doc) != StepOutcome::Done {}
        prop_assert_eq!(doc.text_content(doc.root()), original);
    }
}
