//! HTML Processing and Pruning
//!
//! Tree-level cleaning steps. Each step mutates the document in place and
//! returns how many nodes or attributes it touched.

use std::collections::BTreeSet;

use log::{debug, trace};

use crate::dom::{self, Document, Selection};
use crate::url_utils;
use crate::whitelist::{AttributeWhitelist, TagWhitelist};

/// Tags checked for emptiness by the noise pruner.
const PRUNABLE_EMPTY_TAGS: [&str; 2] = ["p", "div"];

/// Tags whose link attributes are resolved against the origin URL.
const LINK_TAGS_SELECTOR: &str = "img, a";

/// Attributes holding URLs.
const LINK_ATTRIBUTES: [&str; 2] = ["src", "href"];

/// Drop every attribute not permitted for its element's tag.
///
/// Tags absent from the whitelist lose all attributes; tags mapped to
/// [`AllowedAttributes::All`](crate::AllowedAttributes::All) keep theirs.
pub fn clean_attrs(doc: &Document, whitelist: &AttributeWhitelist) -> usize {
    let mut removed = 0;

    for node in dom::elements(doc) {
        let sel = Selection::from(node);
        let Some(tag) = dom::tag_name(&sel) else {
            continue;
        };

        let attrs = dom::get_all_attributes(&sel);
        let Some(allowed) = whitelist.get(&tag) else {
            if !attrs.is_empty() {
                trace!("dropping all {} attributes from <{tag}>", attrs.len());
                dom::clear_all_attributes(&sel);
                removed += attrs.len();
            }
            continue;
        };

        for (name, _) in attrs {
            if !allowed.permits(&name) {
                trace!("dropping attribute {name} from <{tag}>");
                dom::remove_attribute(&sel, &name);
                removed += 1;
            }
        }
    }

    debug!("clean_attrs: removed {removed} attributes");
    removed
}

/// Unwrap every element whose tag is not whitelisted, keeping its children
/// in place and in order.
///
/// The root `html` element is the serialization root and is never unwrapped.
pub fn clean_tags(doc: &Document, whitelist: &TagWhitelist) -> usize {
    let mut disallowed: BTreeSet<String> = BTreeSet::new();
    let mut unwrapped = 0;

    for node in dom::elements(doc) {
        let Some(name) = node.node_name() else {
            continue;
        };
        if &*name == "html" || whitelist.contains(&name) {
            continue;
        }
        disallowed.insert(name.to_string());
        unwrapped += 1;
    }

    if !disallowed.is_empty() {
        let tags: Vec<&str> = disallowed.iter().map(String::as_str).collect();
        trace!("unwrapping tags: {tags:?}");
        dom::strip_tags(&doc.select("html"), &tags);
    }

    debug!("clean_tags: unwrapped {unwrapped} elements");
    unwrapped
}

/// Remove noise nodes: sourceless images, comments, and `p`/`div`
/// elements with no child nodes at all.
///
/// A `p` or `div` holding only whitespace text survives here; the text
/// normalizer deals with it after serialization.
pub fn clean_extra(doc: &Document) -> usize {
    let mut pruned = 0;

    let images = dom::get_elements_by_tag_name(doc, "img");
    for node in images.nodes() {
        let sel = Selection::from(*node);
        if !dom::has_attribute(&sel, "src") {
            dom::remove(&sel);
            pruned += 1;
        }
    }

    pruned += dom::remove_comments(doc);

    // Document order: a parent is checked before its children are removed.
    for node in dom::elements(doc) {
        let prunable = node
            .node_name()
            .is_some_and(|name| PRUNABLE_EMPTY_TAGS.contains(&&*name));
        if prunable && dom::has_no_child_nodes(&node) {
            dom::remove(&Selection::from(node));
            pruned += 1;
        }
    }

    debug!("clean_extra: pruned {pruned} nodes");
    pruned
}

/// Resolve `src` and `href` values on `img` and `a` elements against
/// `origin_url`.
///
/// Absolute values are left untouched. An origin that is not itself an
/// absolute URL leaves every value as it was.
pub fn join_urls(doc: &Document, origin_url: &str) -> usize {
    let Some(base) = url_utils::parse_base(origin_url) else {
        debug!("join_urls: origin {origin_url:?} is not an absolute URL, skipping");
        return 0;
    };

    let mut rewritten = 0;
    let links = doc.select(LINK_TAGS_SELECTOR);
    for node in links.nodes() {
        let sel = Selection::from(*node);
        for attr in LINK_ATTRIBUTES {
            let Some(value) = dom::get_attribute(&sel, attr) else {
                continue;
            };
            let resolved = url_utils::join_url(&base, &value);
            if resolved != value {
                dom::set_attribute(&sel, attr, &resolved);
                rewritten += 1;
            }
        }
    }

    debug!("join_urls: rewrote {rewritten} links");
    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::whitelist::{AllowedAttributes, DEFAULT_ATTRIBUTES, DEFAULT_TAGS};

    #[test]
    fn test_clean_attrs_default_whitelist() {
        let doc = dom::parse(concat!(
            r#"<div class="x" id="y"><a href="/a" class="l" title="t">a</a>"#,
            r#"<img src="i.png" alt="i" width="10"></div>"#,
        ));

        assert_eq!(clean_attrs(&doc, &DEFAULT_ATTRIBUTES), 6);
        assert!(dom::get_all_attributes(&doc.select("div")).is_empty());
        assert_eq!(
            dom::get_all_attributes(&doc.select("a")),
            [("href".to_string(), "/a".to_string())]
        );
        assert_eq!(
            dom::get_all_attributes(&doc.select("img")),
            [("src".to_string(), "i.png".to_string())]
        );
    }

    #[test]
    fn test_clean_attrs_keep_all() {
        let mut whitelist = AttributeWhitelist::empty();
        whitelist.insert("td", AllowedAttributes::All);
        let doc = dom::parse(r#"<table><tr><td colspan="2" class="c">x</td></tr></table>"#);

        assert_eq!(clean_attrs(&doc, &whitelist), 0);
        assert_eq!(dom::get_all_attributes(&doc.select("td")).len(), 2);
    }

    #[test]
    fn test_clean_attrs_unlisted_tags_lose_everything() {
        let mut whitelist = AttributeWhitelist::empty();
        whitelist.insert("img", AllowedAttributes::only(["src"]));
        let doc = dom::parse(r#"<p id="a" style="b" data-c="d">x</p><img src="i.png" alt="i">"#);

        assert_eq!(clean_attrs(&doc, &whitelist), 4);
        assert!(dom::get_all_attributes(&doc.select("p")).is_empty());
        assert!(dom::has_attribute(&doc.select("img"), "src"));
    }

    #[test]
    fn test_clean_tags_unwraps_in_order() {
        let doc = dom::parse("<div><span>one</span> <em>two <b>three</b></em></div>");
        clean_tags(&doc, &DEFAULT_TAGS);

        assert!(doc.select("span, em, b, body, head").is_empty());
        assert_eq!(dom::content_html(&doc), "<div>one two three</div>");
    }

    #[test]
    fn test_clean_tags_keeps_whitelisted() {
        let doc = dom::parse("<p><strong>bold</strong><br>text</p>");
        clean_tags(&doc, &DEFAULT_TAGS);
        assert_eq!(dom::content_html(&doc), "<p><strong>bold</strong><br>text</p>");
    }

    #[test]
    fn test_clean_extra_sourceless_images() {
        let doc = dom::parse(r#"<p>x<img alt="no src"><img src="a.png"></p>"#);
        clean_attrs(&doc, &DEFAULT_ATTRIBUTES);

        assert_eq!(clean_extra(&doc), 1);
        assert_eq!(doc.select("img").length(), 1);
    }

    #[test]
    fn test_clean_extra_lost_source() {
        // data-src is not whitelisted, so the image ends up without a source.
        let doc = dom::parse(r#"<p>x<img data-src="lazy.png"></p>"#);
        clean_attrs(&doc, &DEFAULT_ATTRIBUTES);
        clean_extra(&doc);
        assert!(doc.select("img").is_empty());
    }

    #[test]
    fn test_clean_extra_comments_and_empty_blocks() {
        let doc = dom::parse("<div>a<!-- note -->b</div><p></p><div> </div><div><p></p></div>");
        clean_tags(&doc, &DEFAULT_TAGS);
        clean_extra(&doc);

        // The outer div still had a child when it was checked.
        assert_eq!(dom::content_html(&doc), "<div>ab</div><div> </div><div></div>");
    }

    #[test]
    fn test_join_urls() {
        let doc = dom::parse(concat!(
            r#"<img src="/a.png"><img src="b.png">"#,
            r#"<img src="http://cdn.example.com/c.png"><a href="../d.html">d</a>"#,
        ));

        assert_eq!(join_urls(&doc, "http://www.baidu.com/news/today.html"), 3);
        let srcs: Vec<String> = doc
            .select("img")
            .nodes()
            .iter()
            .filter_map(|n| dom::get_attribute(&Selection::from(*n), "src"))
            .collect();
        assert_eq!(
            srcs,
            [
                "http://www.baidu.com/a.png",
                "http://www.baidu.com/news/b.png",
                "http://cdn.example.com/c.png",
            ]
        );
        assert_eq!(
            dom::get_attribute(&doc.select("a"), "href"),
            Some("http://www.baidu.com/d.html".to_string())
        );
    }

    #[test]
    fn test_join_urls_both_attributes() {
        let doc = dom::parse(r#"<a href="x" src="y">link</a>"#);
        assert_eq!(join_urls(&doc, "https://example.com/"), 2);
        assert_eq!(
            dom::get_attribute(&doc.select("a"), "src"),
            Some("https://example.com/y".to_string())
        );
    }

    #[test]
    fn test_join_urls_relative_origin() {
        let doc = dom::parse(r#"<img src="a.png">"#);
        assert_eq!(join_urls(&doc, "www.baidu.com"), 0);
        assert_eq!(dom::get_attribute(&doc.select("img"), "src"), Some("a.png".to_string()));
    }
}
