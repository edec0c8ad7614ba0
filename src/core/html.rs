// src/core/html.rs
//
// Small helpers over `scraper` for label/sibling style lookups.
// Every helper returns Option or an empty collection; none of them fail.

use scraper::{ElementRef, Html, Node, Selector};

/// Parse a selector that is known at compile time.
pub fn sel(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e}"))
}

/// All descendant text of an element, as-is.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Descendant text nodes trimmed and concatenated without a separator.
pub fn stripped_text(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).collect()
}

pub fn texts(doc: &Html, selector: &Selector) -> Vec<String> {
    doc.select(selector).map(text_of).collect()
}

/// The first element matched by `selector` whose trimmed text equals `label`.
pub fn find_labeled<'a>(doc: &'a Html, selector: &Selector, label: &str) -> Option<ElementRef<'a>> {
    doc.select(selector).find(|el| text_of(*el).trim() == label)
}

/// The first following sibling element with the given tag name.
pub fn next_sibling_tag<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    el.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sib| sib.value().name().eq_ignore_ascii_case(tag))
}

/// The first following sibling that is a bare text node.
pub fn next_sibling_text(el: ElementRef<'_>) -> Option<String> {
    el.next_siblings().find_map(|node| match node.value() {
        Node::Text(t) => Some(t.to_string()),
        _ => None,
    })
}

/// Every text node in the document that contains `needle`.
pub fn text_nodes_containing<'a>(doc: &'a Html, needle: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    doc.root_element().text().filter(move |t| t.contains(needle))
}
