//! Timer loop that drives the stepper.
//!
//! Each step runs, the frame is handed to the host, and if the pass swapped
//! anything the next step is deferred by the configured interval.

use std::time::Duration;

use crate::dom::Document;
use crate::sort::{StepOutcome, Stepper, StepperState};

/// Waits between steps.
pub trait Pacer {
    /// Block until the next step may run.
    fn wait(&mut self, delay: Duration);
}

/// Pacer backed by `std::thread::sleep`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn wait(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// Pacer that never waits.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn wait(&mut self, _delay: Duration) {}
}

/// Totals for a finished run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Passes run, including the final pass without swaps.
    pub passes: usize,
    /// Swaps across all passes.
    pub swaps: usize,
}

/// Step until the stepper reports `Done`.
///
/// `on_frame` sees the document after every step. The pacer is asked to
/// wait only between steps, never after the last one. A stepper that is
/// already done is left alone and the summary is empty.
pub fn run_to_completion<P, F>(
    stepper: &mut Stepper,
    doc: &mut Document,
    interval: Duration,
    pacer: &mut P,
    mut on_frame: F,
) -> RunSummary
where
    P: Pacer + ?Sized,
    F: FnMut(&Document, &Stepper),
{
    let mut summary = RunSummary::default();
    if stepper.state() == StepperState::Done {
        return summary;
    }
    loop {
        let outcome = stepper.step(doc);
        summary.passes += 1;
        on_frame(&*doc, &*stepper);
        match outcome {
            StepOutcome::Continue { swaps } => {
                summary.swaps += swaps;
                pacer.wait(interval);
            }
            StepOutcome::Done => return summary,
        }
    }
}
