//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate exposing the handful of tree
//! operations the cleaning pipeline needs: parsing, element enumeration,
//! attribute access, unwrapping, node removal and serialization.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// === Parsing ===

/// Parse HTML string into a document.
///
/// The parser never rejects input: malformed markup is recovered into a
/// best-effort tree wrapped in `html`/`head`/`body`. `<template>` contents
/// are moved into the template element, see [`inline_template_contents`].
#[must_use]
pub fn parse(html: &str) -> Document {
    let doc = Document::from(html);
    inline_template_contents(&doc);
    doc
}

/// Move the children of every `<template>` content fragment into the
/// template element itself.
///
/// The parser keeps template contents in a detached fragment that tree
/// walks and unwrapping never see, so unwrapping a template would drop
/// its markup. Nested templates are handled by repeating until nothing
/// moves. Returns the number of nodes moved.
pub fn inline_template_contents(doc: &Document) -> usize {
    let mut moved = 0;
    loop {
        let mut progressed = false;
        for node in elements(doc) {
            let Some(fragment_id) = node.element_ref().and_then(|el| el.template_contents) else {
                continue;
            };
            let fragment = NodeRef::new(fragment_id, node.tree);
            while let Some(child) = fragment.first_child() {
                node.append_child(&child);
                moved += 1;
                progressed = true;
            }
        }
        if !progressed {
            return moved;
        }
    }
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Set an attribute value
#[inline]
pub fn set_attribute(sel: &Selection, name: &str, value: &str) {
    sel.set_attr(name, value);
}

/// Check if attribute exists
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

/// Remove an attribute
#[inline]
pub fn remove_attribute(sel: &Selection, name: &str) {
    sel.remove_attr(name);
}

/// Get all attributes as key-value pairs
///
/// Returns empty vector if node has no attributes or if selection is empty.
#[must_use]
pub fn get_all_attributes(sel: &Selection) -> Vec<(String, String)> {
    sel.nodes()
        .first()
        .map(|node| {
            node.attrs()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

/// Clear all attributes from a selection.
pub fn clear_all_attributes(sel: &Selection) {
    for (key, _) in get_all_attributes(sel) {
        remove_attribute(sel, &key);
    }
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Whether the node has no child nodes of any kind (elements, text, comments).
#[inline]
#[must_use]
pub fn has_no_child_nodes(node: &NodeRef) -> bool {
    node.first_child().is_none()
}

// === Traversal ===

/// All element nodes in the document, in document order.
///
/// The result is a snapshot, so callers may mutate the tree while walking it.
#[must_use]
pub fn elements(doc: &Document) -> Vec<NodeRef<'_>> {
    doc.root()
        .descendants()
        .into_iter()
        .filter(NodeRef::is_element)
        .collect()
}

/// Get elements by tag name (or any CSS selector), in document order.
#[inline]
#[must_use]
pub fn get_elements_by_tag_name<'a>(doc: &'a Document, tag: &str) -> Selection<'a> {
    doc.select(tag)
}

// === Tree Manipulation ===

/// Remove elements from tree, children included.
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Remove elements but keep their children (unwrap).
///
/// Children are spliced into the former position, in order.
#[inline]
pub fn strip_tags(sel: &Selection, tags: &[&str]) {
    sel.strip_elements(tags);
}

/// Remove all HTML comment nodes from the document.
///
/// Returns the number of comments removed.
pub fn remove_comments(doc: &Document) -> usize {
    let comments: Vec<NodeRef> = doc
        .root()
        .descendants()
        .into_iter()
        .filter(NodeRef::is_comment)
        .collect();

    for node in &comments {
        remove(&Selection::from(*node));
    }
    comments.len()
}

// === Serialization ===

/// Serialize the content of the document's `html` element.
///
/// The `html` element itself is not part of the output, so once `head` and
/// `body` have been unwrapped this is exactly the cleaned fragment.
#[must_use]
pub fn content_html(doc: &Document) -> String {
    doc.select("html").inner_html().to_string()
}
