//! Capability-scoped HTML queries for the portal pages.
//!
//! The parsers are written against this small interface instead of raw CSS
//! selection: lookup by id, class lookup, a direct-children-only filter, and
//! descendant-by-tag search. Tariff rows are only meaningful as immediate
//! children of their `current` block, so the direct-children filter is the
//! one place nesting is not allowed to leak through.

use scraper::{ElementRef, Html, Selector};

use crate::error::{ParseError, Result};

/// Creates a CSS selector, converting syntax errors into `ParseError`.
pub fn selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::invalid_selector(css, e))
}

/// Finds the element carrying the given id, if present.
///
/// Ids are unique per document, so the first match is the match.
pub fn find_by_id<'a>(document: &'a Html, id: &str) -> Result<Option<ElementRef<'a>>, ParseError> {
    let selector = selector(&format!("#{}", id))?;
    Ok(document.select(&selector).next())
}

/// All elements with the given tag name and class, in document order.
///
/// The search is recursive over the whole document; use
/// [`direct_children_with_class`] where nesting must not leak through.
pub fn find_all_by_class<'a>(
    document: &'a Html,
    name: &str,
    class: &str,
) -> Result<Vec<ElementRef<'a>>, ParseError> {
    let selector = selector(&format!("{}.{}", name, class))?;
    Ok(document.select(&selector).collect())
}

/// Direct child elements of `element` with the given tag name and class.
///
/// Never recurses: grandchildren are not returned, whatever their class
/// attribute says.
pub fn direct_children_with_class<'a>(
    element: ElementRef<'a>,
    name: &str,
    class: &str,
) -> Vec<ElementRef<'a>> {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == name && has_class(*child, class))
        .collect()
}

/// All descendant elements of `element` with the given tag name, in document
/// order. The element itself is not a candidate.
pub fn descendant_elements<'a>(
    element: ElementRef<'a>,
    name: &str,
) -> Result<Vec<ElementRef<'a>>, ParseError> {
    let selector = selector(name)?;
    Ok(element.select(&selector).collect())
}

/// First descendant of `element` with the given tag name, if any.
pub fn first_descendant<'a>(
    element: ElementRef<'a>,
    name: &str,
) -> Result<Option<ElementRef<'a>>, ParseError> {
    let selector = selector(name)?;
    Ok(element.select(&selector).next())
}

/// Whether the element's class attribute contains `class` as one of its
/// whitespace-separated names.
pub fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element
        .value()
        .attr("class")
        .map(|attr| attr.split_whitespace().any(|c| c == class))
        .unwrap_or(false)
}

/// Concatenated text of the element and all of its descendants.
///
/// No trimming happens here; label matching downstream is exact.
pub fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect()
}
