//! Invariants that must hold for any cleaned output.

use rs_htmlclean::clean;
use rs_htmlclean::dom::{self, Selection};
use rs_htmlclean::whitelist::DEFAULT_ALLOWED_TAGS;

const ORIGIN: &str = "https://example.com/articles/";

/// A mix of realistic scraped fragments and malformed markup.
const SAMPLES: &[&str] = &[
    "",
    "<p>plain</p>",
    "<p>a<br><br>b<br></p><p><br></p>",
    "<div class=\"wrap\"><span>x</span><!-- c --><p></p></div>",
    "<div>\u{a0}</div><p> </p><p>kept</p>",
    r#"<article><h2>Head</h2><p>Body <a href="/more" rel="nofollow">more</a></p></article>"#,
    r#"<img src="/a.png" alt="a"><img alt="no source"><img data-src="lazy.png">"#,
    r#"<table border="1"><thead><tr><th>A</th></tr></thead><tr><td>1</td></tr></table>"#,
    "<p>Unclosed paragraph<div>Nested<p>Badly</body>",
    "<p><div></p></div>",
    "<ul><li>one</li><li>two</li></ul><p>after</p>",
    "<p\n>split\ntag</p\n>",
    "<script>var x = 1;</script><style>p { color: red }</style><p>text</p>",
    "<p>5 &lt; 6 &amp; 7&nbsp;8</p>",
    "<template><p class=\"x\">y<!-- c --></p></template><p>z</p>",
];

fn outputs() -> Vec<String> {
    SAMPLES
        .iter()
        .flat_map(|html| [clean(html, None), clean(html, Some(ORIGIN))])
        .collect()
}

/// Elements of a reparsed output, minus the html/head/body wrapper the parser adds.
fn content_elements(doc: &dom::Document) -> Vec<Selection<'_>> {
    dom::elements(doc)
        .into_iter()
        .map(Selection::from)
        .filter(|sel| {
            !matches!(dom::tag_name(sel).as_deref(), Some("html" | "head" | "body"))
        })
        .collect()
}

#[test]
fn cleaning_is_idempotent() {
    for html in SAMPLES {
        for origin in [None, Some(ORIGIN)] {
            let once = clean(html, origin);
            let twice = clean(&once, origin);
            assert_eq!(once, twice, "not idempotent for input {html:?}");
        }
    }
}

#[test]
fn nested_whitespace_blocks_collapse_one_level_per_pass() {
    // Text rules run once each, so the emptied outer div only goes on the next pass.
    let once = clean("<div><div> </div></div>", None);
    assert_eq!(once, "<div></div>");
    assert_eq!(clean(&once, None), "");
}

#[test]
fn output_only_contains_whitelisted_tags() {
    for output in outputs() {
        let doc = dom::parse(&output);
        for sel in content_elements(&doc) {
            let tag = dom::tag_name(&sel).unwrap_or_default();
            assert!(
                DEFAULT_ALLOWED_TAGS.contains(&tag.as_str()),
                "unexpected <{tag}> in {output:?}"
            );
        }
    }
}

#[test]
fn output_only_contains_whitelisted_attributes() {
    for output in outputs() {
        let doc = dom::parse(&output);
        for sel in content_elements(&doc) {
            let tag = dom::tag_name(&sel).unwrap_or_default();
            for (name, _) in dom::get_all_attributes(&sel) {
                let allowed =
                    matches!((tag.as_str(), name.as_str()), ("a", "href") | ("img", "src"));
                assert!(allowed, "unexpected {name} on <{tag}> in {output:?}");
            }
        }
    }
}

#[test]
fn output_has_no_sourceless_images() {
    for output in outputs() {
        let doc = dom::parse(&output);
        let images = doc.select("img");
        for node in images.nodes() {
            assert!(
                dom::has_attribute(&Selection::from(*node), "src"),
                "image without src in {output:?}"
            );
        }
    }
}

#[test]
fn output_has_no_comments() {
    for output in outputs() {
        assert!(!output.contains("<!--"), "comment left in {output:?}");
    }
}

#[test]
fn unwrapped_content_keeps_document_order() {
    let cleaned = clean("<div><span>one</span><em>two</em><b>three</b></div>", None);
    assert_eq!(cleaned, "<div>onetwothree</div>");
}

#[test]
fn origin_resolution_makes_image_sources_absolute() {
    for html in SAMPLES {
        let output = clean(html, Some(ORIGIN));
        let doc = dom::parse(&output);
        let images = doc.select("img");
        for node in images.nodes() {
            let src = dom::get_attribute(&Selection::from(*node), "src").unwrap_or_default();
            assert!(
                src.starts_with("https://example.com/"),
                "relative src {src:?} left in {output:?}"
            );
        }
    }
}
