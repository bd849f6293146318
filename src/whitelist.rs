//! Tag and attribute whitelists.
//!
//! Both tables are closed: anything absent is stripped. Names are stored
//! lowercase, matching the parser's normalization of HTML tag and
//! attribute names.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

/// Tags kept as elements by default. Everything else is unwrapped.
pub const DEFAULT_ALLOWED_TAGS: [&str; 11] = [
    "p", "br", "div", "strong", "img", "table", "thead", "tbody", "tr", "td", "th",
];

/// Default attribute whitelist entries: `(tag, permitted attributes)`.
pub const DEFAULT_ALLOWED_ATTRIBUTES: [(&str, &[&str]); 2] = [("a", &["href"]), ("img", &["src"])];

/// Process-wide default attribute whitelist.
pub static DEFAULT_ATTRIBUTES: LazyLock<AttributeWhitelist> = LazyLock::new(|| {
    DEFAULT_ALLOWED_ATTRIBUTES
        .iter()
        .map(|(tag, attrs)| (*tag, AllowedAttributes::only(attrs.iter().copied())))
        .collect()
});

/// Process-wide default tag whitelist.
pub static DEFAULT_TAGS: LazyLock<TagWhitelist> =
    LazyLock::new(|| DEFAULT_ALLOWED_TAGS.into_iter().collect());

/// Attributes permitted on a whitelisted tag.
///
/// In JSON configuration `null` means [`AllowedAttributes::All`] and a list
/// of names means [`AllowedAttributes::Only`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<BTreeSet<String>>", into = "Option<BTreeSet<String>>")]
pub enum AllowedAttributes {
    /// Keep every attribute untouched.
    All,
    /// Keep only the named attributes.
    Only(BTreeSet<String>),
}

impl AllowedAttributes {
    /// Build an `Only` entry from attribute names.
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::Only(names.into_iter().map(|n| n.as_ref().to_ascii_lowercase()).collect())
    }

    /// Whether `attr` survives filtering under this entry.
    #[must_use]
    pub fn permits(&self, attr: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(names) => names.contains(attr),
        }
    }
}

impl From<Option<BTreeSet<String>>> for AllowedAttributes {
    fn from(value: Option<BTreeSet<String>>) -> Self {
        match value {
            None => Self::All,
            Some(names) => Self::only(names),
        }
    }
}

impl From<AllowedAttributes> for Option<BTreeSet<String>> {
    fn from(value: AllowedAttributes) -> Self {
        match value {
            AllowedAttributes::All => None,
            AllowedAttributes::Only(names) => Some(names),
        }
    }
}

/// Mapping from tag name to its permitted attributes.
///
/// Tags missing from the mapping keep no attributes at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, AllowedAttributes>",
    into = "BTreeMap<String, AllowedAttributes>"
)]
pub struct AttributeWhitelist(BTreeMap<String, AllowedAttributes>);

impl AttributeWhitelist {
    /// Whitelist that strips every attribute from every tag.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add or replace the entry for `tag`.
    pub fn insert(&mut self, tag: &str, allowed: AllowedAttributes) {
        self.0.insert(tag.to_ascii_lowercase(), allowed);
    }

    /// Entry for `tag`, if it is listed.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&AllowedAttributes> {
        self.0.get(tag)
    }

    /// Whether `attr` may stay on an element named `tag`.
    #[must_use]
    pub fn allows(&self, tag: &str, attr: &str) -> bool {
        self.get(tag).is_some_and(|allowed| allowed.permits(attr))
    }
}

impl<S: AsRef<str>> FromIterator<(S, AllowedAttributes)> for AttributeWhitelist {
    fn from_iter<I: IntoIterator<Item = (S, AllowedAttributes)>>(iter: I) -> Self {
        let mut whitelist = Self::empty();
        for (tag, allowed) in iter {
            whitelist.insert(tag.as_ref(), allowed);
        }
        whitelist
    }
}

impl From<BTreeMap<String, AllowedAttributes>> for AttributeWhitelist {
    fn from(value: BTreeMap<String, AllowedAttributes>) -> Self {
        value.into_iter().collect()
    }
}

impl From<AttributeWhitelist> for BTreeMap<String, AllowedAttributes> {
    fn from(value: AttributeWhitelist) -> Self {
        value.0
    }
}

/// Set of tag names permitted to remain as elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagWhitelist(BTreeSet<String>);

impl TagWhitelist {
    /// Whether elements named `tag` are kept.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    /// Permit an additional tag.
    pub fn insert(&mut self, tag: &str) {
        self.0.insert(tag.to_ascii_lowercase());
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagWhitelist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(|t| t.as_ref().to_ascii_lowercase()).collect())
    }
}

impl From<Vec<String>> for TagWhitelist {
    fn from(value: Vec<String>) -> Self {
        value.into_iter().collect()
    }
}

impl From<TagWhitelist> for Vec<String> {
    fn from(value: TagWhitelist) -> Self {
        value.0.into_iter().collect()
    }
}
