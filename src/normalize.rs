//! Text-level normalization before parsing and after serialization.

use std::borrow::Cow;

use crate::patterns::{NEWLINE, NORMALIZATION_RULES};

/// Delete every `\n` from the raw input.
///
/// Newlines are removed, not replaced with spaces, so tag syntax split
/// across lines (`<p\n>`) reads as a single tag afterwards.
#[must_use]
pub fn pre_clean(text: &str) -> Cow<'_, str> {
    NEWLINE.replace_all(text, "")
}

/// Apply the ordered normalization rules to serialized markup.
///
/// Collapses `<br>` runs, drops breaks before `</p>`, and removes `p`/`div`
/// elements that hold only breaks or whitespace.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let mut out = text.to_string();
    for (pattern, replacement) in NORMALIZATION_RULES.iter() {
        out = pattern.replace_all(&out, *replacement).into_owned();
    }
    out
}
