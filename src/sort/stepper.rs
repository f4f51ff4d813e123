use super::letters::CharRecord;
use super::render::render_letters;
use crate::dom::{Document, NodeId};
use crate::event::{LogLevel, emit_event, emit_log};

/// Stepper lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepperState {
    /// More passes may be needed.
    Sorting,
    /// A pass made no swaps; nothing further is scheduled.
    Done,
}

/// Result of one [`Stepper::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The pass swapped at least once; schedule another step.
    Continue { swaps: usize },
    /// The sequence is in reading order.
    Done,
}

/// Incremental bubble sort over the alphabetized letters.
///
/// Owns the sequence and the segment list for the whole run. Each
/// [`step`](Self::step) is exactly one right-to-left pass followed by a
/// render, so the caller sees every intermediate arrangement.
#[derive(Clone, Debug)]
pub struct Stepper {
    letters: Vec<CharRecord>,
    segments: Vec<NodeId>,
    skip_whitespace: bool,
    state: StepperState,
    passes: usize,
}

impl Stepper {
    /// Create a stepper in the `Sorting` state.
    #[must_use]
    pub fn new(letters: Vec<CharRecord>, segments: Vec<NodeId>, skip_whitespace: bool) -> Self {
        Self {
            letters,
            segments,
            skip_whitespace,
            state: StepperState::Sorting,
            passes: 0,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> StepperState {
        self.state
    }

    /// Number of passes run so far.
    #[must_use]
    pub const fn passes(&self) -> usize {
        self.passes
    }

    /// The sequence in its current order.
    #[must_use]
    pub fn letters(&self) -> &[CharRecord] {
        &self.letters
    }

    /// The text segments being rewritten.
    #[must_use]
    pub fn segments(&self) -> &[NodeId] {
        &self.segments
    }

    /// Write the current sequence into the document.
    pub fn render(&self, doc: &mut Document) {
        render_letters(&self.letters, doc, &self.segments, self.skip_whitespace);
    }

    /// Run one pass and render it.
    ///
    /// Once `Done`, further calls neither sort nor render.
    pub fn step(&mut self, doc: &mut Document) -> StepOutcome {
        if self.state == StepperState::Done {
            return StepOutcome::Done;
        }

        let swaps = self.pass();
        self.passes += 1;
        self.render(doc);

        emit_event(
            "sort.step",
            &format!("{{\"pass\":{},\"swaps\":{swaps}}}", self.passes),
        );

        if swaps > 0 {
            StepOutcome::Continue { swaps }
        } else {
            self.state = StepperState::Done;
            emit_log(
                LogLevel::Info,
                &format!(
                    "sorted {} letters in {} passes",
                    self.letters.len(),
                    self.passes
                ),
            );
            emit_event("sort.done", &format!("{{\"passes\":{}}}", self.passes));
            StepOutcome::Done
        }
    }

    /// One descending bubble-sort pass; returns the number of swaps.
    fn pass(&mut self) -> usize {
        let mut swaps = 0;
        for i in (1..self.letters.len()).rev() {
            if self.letters[i].original_index() < self.letters[i - 1].original_index() {
                self.letters.swap(i - 1, i);
                swaps += 1;
            }
        }
        swaps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::{collect_text_segments, extract_letters, is_reading_order};

    fn stepper_for(doc: &mut Document) -> Stepper {
        let segments = collect_text_segments(doc, doc.body_or_root());
        let letters = extract_letters(doc, &segments, true);
        let stepper = Stepper::new(letters, segments, true);
        stepper.render(doc);
        stepper
    }

    fn indices(stepper: &Stepper) -> Vec<usize> {
        stepper
            .letters()
            .iter()
            .map(CharRecord::original_index)
            .collect()
    }

    #[test]
    fn test_db_a_walkthrough() {
        let mut doc = Document::from_text("db a");
        let mut stepper = stepper_for(&mut doc);
        assert_eq!(doc.text_content(doc.root()), "ab d");
        assert_eq!(indices(&stepper), vec![2, 1, 0]);

        // [2,1,0]: i=2 swaps 1/0 -> [2,0,1]; i=1 swaps 2/0 -> [0,2,1]
        assert_eq!(stepper.step(&mut doc), StepOutcome::Continue { swaps: 2 });
        assert_eq!(indices(&stepper), vec![0, 2, 1]);
        assert_eq!(doc.text_content(doc.root()), "da b");

        assert_eq!(stepper.step(&mut doc), StepOutcome::Continue { swaps: 1 });
        assert_eq!(indices(&stepper), vec![0, 1, 2]);
        assert_eq!(doc.text_content(doc.root()), "db a");

        assert_eq!(stepper.step(&mut doc), StepOutcome::Done);
        assert_eq!(stepper.state(), StepperState::Done);
        assert_eq!(stepper.passes(), 3);
        assert_eq!(doc.text_content(doc.root()), "db a");
    }

    #[test]
    fn test_already_sorted_needs_one_pass() {
        let mut doc = Document::from_text("abcdef");
        let mut stepper = stepper_for(&mut doc);
        assert_eq!(indices(&stepper), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(stepper.step(&mut doc), StepOutcome::Done);
        assert_eq!(stepper.passes(), 1);
    }

    #[test]
    fn test_one_pass_per_step() {
        // Alphabetizing reverses this input, the worst case for bubble sort.
        let mut doc = Document::from_text("fedcba");
        let mut stepper = stepper_for(&mut doc);
        assert_eq!(indices(&stepper), vec![5, 4, 3, 2, 1, 0]);

        let mut swapping = 0;
        while let StepOutcome::Continue { .. } = stepper.step(&mut doc) {
            swapping += 1;
            // Each descending pass settles the smallest remaining index.
            assert_eq!(indices(&stepper)[swapping - 1], swapping - 1);
        }
        assert_eq!(swapping, 5);
        assert_eq!(stepper.passes(), 6);
        assert_eq!(doc.text_content(doc.root()), "fedcba");
    }

    #[test]
    fn test_done_is_terminal() {
        let mut doc = Document::from_text("ab");
        let mut stepper = stepper_for(&mut doc);
        assert_eq!(stepper.step(&mut doc), StepOutcome::Done);

        doc.set_text(stepper.segments()[0], "zz".to_string());
        assert_eq!(stepper.step(&mut doc), StepOutcome::Done);
        assert_eq!(stepper.passes(), 1);
        assert_eq!(doc.text_content(doc.root()), "zz");
    }

    #[test]
    fn test_empty_document_finishes_immediately() {
        let mut doc = Document::new();
        let mut stepper = stepper_for(&mut doc);
        assert_eq!(stepper.state(), StepperState::Sorting);
        assert_eq!(stepper.step(&mut doc), StepOutcome::Done);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_ends_in_reading_order() {
        let mut doc = Document::from_text("the quick brown fox jumps over the lazy dog");
        let mut stepper = stepper_for(&mut doc);
        assert!(!is_reading_order(stepper.letters()));
        while stepper.step(&mut doc) != StepOutcome::Done {}
        assert!(is_reading_order(stepper.letters()));
        assert_eq!(
            doc.text_content(doc.root()),
            "the quick brown fox jumps over the lazy dog"
        );
    }
}
