//! # rs-htmlclean
//!
//! Whitelist-based cleaning of scraped HTML fragments.
//!
//! Strips disallowed tags (keeping their content) and attributes, prunes
//! noise such as comments and sourceless images, collapses line-break runs,
//! drops empty paragraphs, and optionally rewrites relative links to absolute
//! form against the page's origin URL.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_htmlclean::clean;
//!
//! let html = r#"<div class="post"><p>Hello <span>world</span><br><br></p>
//! <p><br></p><img src="/logo.png" alt="logo"></div>"#;
//!
//! let cleaned = clean(html, Some("https://example.com/news/"));
//! assert_eq!(
//!     cleaned,
//!     r#"<div><p>Hello world</p><img src="https://example.com/logo.png"></div>"#
//! );
//! ```
//!
//! ## Pipeline
//!
//! 1. Delete raw newlines ([`pre_clean`])
//! 2. Parse into a mutable tree ([`parse`])
//! 3. Filter attributes per tag ([`clean_attrs`])
//! 4. Unwrap non-whitelisted tags ([`clean_tags`])
//! 5. Prune sourceless images, comments and childless `p`/`div` ([`clean_extra`])
//! 6. Resolve `src`/`href` against the origin URL, if any ([`join_urls`])
//! 7. Serialize and normalize the markup text ([`serialize`], [`clean_text`])
//!
//! This is not a security sanitizer: it narrows markup to a small whitelist
//! but makes no attempt to defend against hostile input.

mod clean;
mod error;
mod normalize;
mod options;
mod patterns;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Tree-level cleaning steps.
pub mod html_processing;

/// URL utilities for relative-to-absolute resolution.
pub mod url_utils;

/// Tag and attribute whitelist tables.
pub mod whitelist;

// Public API - re-exports
pub use clean::serialize;
pub use dom::parse;
pub use error::{Error, Result};
pub use html_processing::{clean_attrs, clean_extra, clean_tags, join_urls};
pub use normalize::{clean_text, pre_clean};
pub use options::Options;
pub use whitelist::{AllowedAttributes, AttributeWhitelist, TagWhitelist};

use whitelist::{DEFAULT_ATTRIBUTES, DEFAULT_TAGS};

/// Cleans an HTML fragment using the default whitelists.
///
/// # Arguments
///
/// * `html` - The markup to clean, possibly malformed
/// * `origin_url` - URL of the page the markup came from; when present and
///   non-empty, relative `src`/`href` values are made absolute against it
///
/// # Returns
///
/// The cleaned markup. Never fails: malformed markup is recovered by the
/// parser and unresolvable URLs are left as they were.
///
/// # Example
///
/// ```rust
/// use rs_htmlclean::clean;
///
/// assert_eq!(clean("<p>a<br><br>b</p>", None), "<p>a<br>b</p>");
/// assert_eq!(clean("<p><br></p>", None), "");
/// ```
#[must_use]
pub fn clean(html: &str, origin_url: Option<&str>) -> String {
    clean::run_pipeline(html, &DEFAULT_ATTRIBUTES, &DEFAULT_TAGS, origin_url)
}

/// Cleans an HTML fragment with custom options.
///
/// # Returns
///
/// Returns `Ok(String)` with the cleaned markup, or
/// [`Error::InputTooLarge`] when `options.max_input_len` is exceeded.
///
/// # Example
///
/// ```rust
/// use rs_htmlclean::{clean_with_options, Options};
///
/// let mut options = Options::default().with_origin_url("https://example.com/");
/// options.tags.insert("a");
///
/// let cleaned = clean_with_options(r#"<a href="/about" class="nav">About</a>"#, &options)?;
/// assert_eq!(cleaned, r#"<a href="https://example.com/about">About</a>"#);
/// # Ok::<(), rs_htmlclean::Error>(())
/// ```
pub fn clean_with_options(html: &str, options: &Options) -> Result<String> {
    clean::clean_content(html, options)
}

/// Cleans HTML given as raw bytes using the default whitelists.
///
/// Bytes are decoded as UTF-8; invalid sequences are replaced with �
/// (Unicode replacement character) rather than causing errors.
///
/// # Example
///
/// ```rust
/// use rs_htmlclean::clean_bytes;
///
/// assert_eq!(clean_bytes(b"<p>Caf\xC3\xA9</p>", None), "<p>Café</p>");
/// ```
#[must_use]
pub fn clean_bytes(html: &[u8], origin_url: Option<&str>) -> String {
    clean(&String::from_utf8_lossy(html), origin_url)
}
