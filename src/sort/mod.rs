//! Alphabetize-then-unsort pipeline.
//!
//! [`collect_text_segments`] finds the text leaves, [`extract_letters`]
//! builds the alphabetized character sequence, [`render_letters`] writes a
//! sequence back into the leaves and [`Stepper`] runs one bubble-sort pass
//! per tick until the sequence is back in reading order.

mod collect;
mod letters;
mod render;
mod stepper;

pub use collect::collect_text_segments;
pub use letters::{CharRecord, extract_letters, is_reading_order, letters_to_string};
pub use render::render_letters;
pub use stepper::{StepOutcome, Stepper, StepperState};
