//! URL Utility Functions
//!
//! Best-effort relative-to-absolute URL joining. Nothing here fails: when a
//! reference cannot be resolved it is handed back unchanged.

use url::Url;

/// Check if a string already parses as an absolute URL (has a scheme).
///
/// Covers `http(s)`, `mailto:`, `data:`, `javascript:` and any other scheme.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    Url::parse(s.trim()).is_ok()
}

/// Parse a base URL for joining.
///
/// # Returns
/// * `Some(Url)` if `base` is an absolute URL, `None` otherwise
#[must_use]
pub fn parse_base(base: &str) -> Option<Url> {
    Url::parse(base.trim()).ok()
}

/// Resolve `reference` against an already parsed base.
///
/// Absolute references are returned byte-for-byte unchanged. Scheme-relative,
/// path-relative, query-only and fragment-only references follow standard
/// URL joining rules. If joining fails, the reference is returned as-is.
#[must_use]
pub fn join_url(base: &Url, reference: &str) -> String {
    if is_absolute_url(reference) {
        return reference.to_string();
    }

    match base.join(reference) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => reference.to_string(),
    }
}

/// Resolve a possibly relative `reference` against `base`.
///
/// # Arguments
/// * `base` - The origin URL of the page
/// * `reference` - The `src`/`href` value to resolve
///
/// # Returns
/// * The absolute URL, or `reference` unchanged when `base` is not an
///   absolute URL or the join fails
///
/// # Examples
/// ```
/// use rs_htmlclean::url_utils::resolve_url;
///
/// let base = "http://www.baidu.com/news/";
/// assert_eq!(resolve_url(base, "a.png"), "http://www.baidu.com/news/a.png");
/// assert_eq!(resolve_url(base, "/a.png"), "http://www.baidu.com/a.png");
/// assert_eq!(
///     resolve_url("https://www.baidu.com", "//cdn.example.com/a.png"),
///     "https://cdn.example.com/a.png"
/// );
/// assert_eq!(resolve_url("http://www.baidu.com", "http://other.com"), "http://other.com");
/// ```
#[must_use]
pub fn resolve_url(base: &str, reference: &str) -> String {
    match parse_base(base) {
        Some(base) => join_url(&base, reference),
        None => reference.to_string(),
    }
}
