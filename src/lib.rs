//! `lettersort` - alphabetize a document, then bubble-sort it back
//!
//! Every non-whitespace character of a document's text is pulled out,
//! sorted alphabetically and written back in place, so the page shows its
//! own letters in order. A stepper then runs one bubble-sort pass per tick,
//! re-rendering after each, until the text reads as it did originally.
//!
//! ```
//! use lettersort::{Document, NoDelay, SortOptions, app};
//!
//! let mut doc = Document::from_text("db a");
//! let mut frames = Vec::new();
//! app::run(&mut doc, None, &SortOptions::default(), &mut NoDelay, |doc, _| {
//!     frames.push(doc.text_content(doc.root()));
//! });
//! assert_eq!(frames, ["ab d", "da b", "db a", "db a"]);
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (required for ioctl FFI)
#![allow(clippy::module_name_repetitions)] // Allow dom::Document etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::format_push_string)] // format! with push_str is fine
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod ansi;
pub mod app;
pub mod config;
pub mod display;
pub mod dom;
pub mod error;
pub mod event;
pub mod schedule;
pub mod sort;
pub mod terminal;
pub mod view;

// Re-export core types at crate root
pub use config::SortOptions;
pub use display::{DisplayMode, apply_display_mode};
pub use dom::{Document, NodeId, NodeKind, parse_markup};
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use schedule::{NoDelay, Pacer, RunSummary, SleepPacer, run_to_completion};
pub use sort::{
    CharRecord, StepOutcome, Stepper, StepperState, collect_text_segments, extract_letters,
    render_letters,
};
pub use terminal::{Screen, is_tty, terminal_size};
