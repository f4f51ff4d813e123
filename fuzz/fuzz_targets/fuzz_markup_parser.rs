//! Fuzz target for the markup parser and the sort pipeline behind it.
//!
//! Parsing may fail but must never panic; any parsed document must sort
//! back to its original text.

#![no_main]

use lettersort::{NoDelay, SortOptions, app, parse_markup};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let Ok(mut doc) = parse_markup(data) else {
        return;
    };
    let original = doc.text_content(doc.root());
    let _ = doc.visible_lines();

    app::run(&mut doc, None, &SortOptions::default(), &mut NoDelay, |_, _| {});
    assert_eq!(doc.text_content(doc.root()), original);
});
