//! Configuration options for cleaning.
//!
//! The `Options` struct carries the whitelist tables and the origin URL used
//! for link resolution. Options can be built in code or loaded from JSON.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::whitelist::{AttributeWhitelist, TagWhitelist, DEFAULT_ATTRIBUTES, DEFAULT_TAGS};

/// Configuration options for cleaning.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the standard whitelists.
///
/// # Example
///
/// ```rust
/// use rs_htmlclean::Options;
///
/// let options = Options {
///     origin_url: Some("https://example.com/news/".to_string()),
///     ..Options::default()
/// };
/// assert!(options.tags.contains("p"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Attributes permitted per tag.
    ///
    /// Default: `a → {href}`, `img → {src}`
    pub attributes: AttributeWhitelist,

    /// Tags permitted to remain as elements; all others are unwrapped.
    ///
    /// Default: `p`, `br`, `div`, `strong`, `img`, `table`, `thead`, `tbody`,
    /// `tr`, `td`, `th`
    pub tags: TagWhitelist,

    /// URL of the page the markup came from.
    ///
    /// When set (and non-empty), `src` and `href` values on `img` and `a`
    /// elements are resolved against it.
    ///
    /// Default: `None`
    pub origin_url: Option<String>,

    /// Reject inputs longer than this many bytes.
    ///
    /// Default: `None` (no limit)
    pub max_input_len: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            attributes: DEFAULT_ATTRIBUTES.clone(),
            tags: DEFAULT_TAGS.clone(),
            origin_url: None,
            max_input_len: None,
        }
    }
}

impl Options {
    /// Load options from a JSON document.
    ///
    /// Missing fields take their defaults. In the `attributes` table a `null`
    /// value keeps every attribute of that tag.
    ///
    /// ```rust
    /// use rs_htmlclean::Options;
    ///
    /// let options = Options::from_json(r#"{"tags": ["p", "a"], "attributes": {"a": ["href"]}}"#)?;
    /// assert!(options.tags.contains("a"));
    /// assert!(!options.tags.contains("div"));
    /// # Ok::<(), rs_htmlclean::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the origin URL used for link resolution.
    #[must_use]
    pub fn with_origin_url(mut self, origin_url: impl Into<String>) -> Self {
        self.origin_url = Some(origin_url.into());
        self
    }

    /// Origin URL if it is set and non-empty.
    #[must_use]
    pub fn origin(&self) -> Option<&str> {
        self.origin_url.as_deref().filter(|s| !s.is_empty())
    }
}
