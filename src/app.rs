//! Startup sequence and the full run.

use crate::config::SortOptions;
use crate::display::apply_display_mode;
use crate::dom::Document;
use crate::event::{LogLevel, emit_event, emit_log};
use crate::schedule::{Pacer, RunSummary, run_to_completion};
use crate::sort::{Stepper, collect_text_segments, extract_letters};

/// Prepare `doc` for sorting and show the alphabetized text.
///
/// Applies the display mode for `fragment`, collects the body's text
/// segments, alphabetizes their letters and renders that scrambled state.
/// The returned stepper is in the `Sorting` state.
pub fn init(doc: &mut Document, fragment: Option<&str>, options: &SortOptions) -> Stepper {
    let mode = apply_display_mode(doc, fragment);

    let segments = collect_text_segments(doc, doc.body_or_root());
    let letters = extract_letters(doc, &segments, options.skip_whitespace);
    emit_log(
        LogLevel::Debug,
        &format!(
            "collected {} segments, {} letters, font {:?}",
            segments.len(),
            letters.len(),
            mode.font_family()
        ),
    );
    emit_event(
        "sort.init",
        &format!(
            "{{\"segments\":{},\"letters\":{}}}",
            segments.len(),
            letters.len()
        ),
    );

    let stepper = Stepper::new(letters, segments, options.skip_whitespace);
    stepper.render(doc);
    stepper
}

/// Initialize and sort `doc` back into reading order.
///
/// `on_frame` is called once with the scrambled text and then after every
/// pass. The first pass follows the scrambled render directly; later passes
/// are spaced by `options.interval`.
pub fn run<P, F>(
    doc: &mut Document,
    fragment: Option<&str>,
    options: &SortOptions,
    pacer: &mut P,
    mut on_frame: F,
) -> RunSummary
where
    P: Pacer + ?Sized,
    F: FnMut(&Document, &Stepper),
{
    let mut stepper = init(doc, fragment, options);
    on_frame(&*doc, &stepper);
    run_to_completion(&mut stepper, doc, options.interval, pacer, on_frame)
}
