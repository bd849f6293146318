//! Pipeline orchestration.

use log::debug;

use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::html_processing::{clean_attrs, clean_extra, clean_tags, join_urls};
use crate::normalize::{clean_text, pre_clean};
use crate::options::Options;
use crate::whitelist::{AttributeWhitelist, TagWhitelist};

/// Main entry point for cleaning with injected options.
pub(crate) fn clean_content(html: &str, options: &Options) -> Result<String> {
    if let Some(max) = options.max_input_len {
        if html.len() > max {
            return Err(Error::InputTooLarge { len: html.len(), max });
        }
    }

    Ok(run_pipeline(html, &options.attributes, &options.tags, options.origin()))
}

/// Run every step in order: pre-clean, parse, attribute filter, tag filter,
/// noise prune, optional URL resolution, serialize, text normalization.
pub(crate) fn run_pipeline(
    html: &str,
    attributes: &AttributeWhitelist,
    tags: &TagWhitelist,
    origin_url: Option<&str>,
) -> String {
    debug!("cleaning {} bytes of HTML", html.len());

    let text = pre_clean(html);
    let doc = dom::parse(&text);

    clean_attrs(&doc, attributes);
    clean_tags(&doc, tags);
    clean_extra(&doc);
    if let Some(origin) = origin_url.filter(|s| !s.is_empty()) {
        join_urls(&doc, origin);
    }

    let cleaned = clean_text(&serialize(&doc));
    debug!("cleaned output is {} bytes", cleaned.len());
    cleaned
}

/// Serialize a cleaned document back to markup.
#[must_use]
pub fn serialize(doc: &Document) -> String {
    dom::content_html(doc)
}
