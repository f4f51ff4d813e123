//! Font-family switch driven by the URL fragment.

use crate::dom::Document;

/// Fragment that selects the monospace font.
pub const MONO_FRAGMENT: &str = "#mono";

/// Font choice for the document body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    Monospace,
    #[default]
    SansSerif,
}

impl DisplayMode {
    /// Pick the mode for a URL fragment.
    ///
    /// Only an exact `#mono` selects [`Monospace`](Self::Monospace);
    /// anything else, including `mono` without the `#` or no fragment, is
    /// [`SansSerif`](Self::SansSerif).
    #[must_use]
    pub fn from_fragment(fragment: Option<&str>) -> Self {
        match fragment {
            Some(MONO_FRAGMENT) => Self::Monospace,
            _ => Self::SansSerif,
        }
    }

    /// CSS `font-family` value for this mode.
    #[must_use]
    pub const fn font_family(self) -> &'static str {
        match self {
            Self::Monospace => "monospace",
            Self::SansSerif => "Helvetica, Arial, sans-serif",
        }
    }
}

/// Set the body font from `fragment`. Text is never touched.
pub fn apply_display_mode(doc: &mut Document, fragment: Option<&str>) -> DisplayMode {
    let mode = DisplayMode::from_fragment(fragment);
    doc.set_font_family(mode.font_family());
    mode
}
