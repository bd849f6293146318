//! Compiled regex patterns for text-level normalization.
//!
//! All patterns are compiled once on first use via `LazyLock`. They operate
//! on serialized markup, not on the tree, and assume tags carry no
//! attributes (attribute filtering has already run on `p`, `div` and `br`).

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Raw newline characters, removed before parsing.
pub static NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n").expect("NEWLINE regex"));

/// A run of one or more line breaks (`<br>`, `<br/>`, `<br//>`).
pub static BR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(<br/*>)+").expect("BR_RUN regex"));

/// Line breaks immediately before a paragraph close.
pub static BR_BEFORE_P_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(<br/*>)+</p>").expect("BR_BEFORE_P_CLOSE regex"));

/// Paragraph holding nothing but line breaks.
pub static EMPTY_P_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<p>(<br/*>)*</p>").expect("EMPTY_P_BREAKS regex"));

/// Division holding nothing but line breaks.
pub static EMPTY_DIV_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<div>(<br/*>)*</div>").expect("EMPTY_DIV_BREAKS regex"));

/// Paragraph holding only whitespace.
///
/// `\s` is Unicode-aware and covers U+00A0; the serializer writes that
/// character as `&nbsp;`, so the entity counts as whitespace too.
pub static BLANK_P: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<p>(?:\s|&nbsp;)*</p>").expect("BLANK_P regex"));

/// Division holding only whitespace (see [`BLANK_P`]).
pub static BLANK_DIV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<div>(?:\s|&nbsp;)*</div>").expect("BLANK_DIV regex"));

/// Ordered `(pattern, replacement)` table applied by the text normalizer.
///
/// Each rule runs once, globally, on the output of the previous one.
pub static NORMALIZATION_RULES: LazyLock<[(&'static Regex, &'static str); 6]> = LazyLock::new(|| {
    [
        (&*BR_RUN, "<br>"),
        (&*BR_BEFORE_P_CLOSE, "</p>"),
        (&*EMPTY_P_BREAKS, ""),
        (&*EMPTY_DIV_BREAKS, ""),
        (&*BLANK_P, ""),
        (&*BLANK_DIV, ""),
    ]
});
