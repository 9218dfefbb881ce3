//! HTML extraction: `href` of every anchor, in document order.
//!
//! Attribute values are taken as written in the markup. Character references
//! are not decoded, so `?q=1&amp;r=2` comes back exactly like that.

use tl::{HTMLTag, ParserOptions};

use super::ExtractOptions;
use crate::validate::validate;

/// Extracts anchor links with the default [`ExtractOptions`].
///
/// An `href` is kept only if it contains the letter `a` and is a valid URI,
/// so `https://ex.com` is dropped while `https://api.example.com` is kept.
pub fn extract_html(document: &str) -> Vec<String> {
    extract_html_with(document, &ExtractOptions::default())
}

/// Extracts anchor links, applying the letter-`a` guard only when
/// `options.html_require_letter_a` is set.
pub fn extract_html_with(document: &str, options: &ExtractOptions) -> Vec<String> {
    let dom = match tl::parse(document, ParserOptions::default()) {
        Ok(dom) => dom,
        Err(e) => {
            tracing::debug!("html parse failed: {e:?}");
            return vec![];
        }
    };

    dom.nodes()
        .iter()
        .filter_map(|node| node.as_tag())
        .filter(|tag| tag.name().as_utf8_str().eq_ignore_ascii_case("a"))
        .filter_map(raw_href)
        .filter(|href| !options.html_require_letter_a || href.contains('a'))
        .filter(|href| validate(href))
        .collect()
}

/// Undecoded `href` value of an anchor; attribute names match case-insensitively.
fn raw_href(tag: &HTMLTag<'_>) -> Option<String> {
    tag.attributes()
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("href"))
        .and_then(|(_, value)| value)
        .map(|value| value.into_owned())
}
