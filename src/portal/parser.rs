//! Parsers for the two tariff pages of the Mijn UnitedConsumers portal.
//!
//! `extract_form_fields` reads the hidden address form off the first page so
//! its fields can be replayed on the results request, and `extract_tariffs`
//! turns the results page's rows into a reading set. Both operate on already
//! parsed documents; fetching is the client's business.

use scraper::{ElementRef, Html};

use crate::error::{ParseError, Result};
use crate::model::{TariffKey, TariffReadings};
use crate::portal::html::{
    descendant_elements, direct_children_with_class, find_all_by_class, find_by_id,
    first_descendant, text_content,
};

/// Id of the form whose hidden fields select the address the tariffs apply to.
pub const ADDRESS_FORM_ID: &str = "formAdres";

/// Characters stripped from both ends of a raw tariff value.
const VALUE_TRIM: &[char] = &['\r', '\n', '\t', '€', ' '];

/// Extracts the named inputs of the address form as (name, value) pairs.
///
/// Pairs keep document order so the results request replays the form exactly
/// as served. Inputs without a `name` are not submittable fields and are
/// skipped; an input without a `value` contributes an empty string.
pub fn extract_form_fields(document: &Html) -> Result<Vec<(String, String)>, ParseError> {
    let form = find_by_id(document, ADDRESS_FORM_ID)?
        .ok_or_else(|| ParseError::element_not_found(format!("#{}", ADDRESS_FORM_ID)))?;

    let fields = descendant_elements(form, "input")?
        .into_iter()
        .filter_map(|input| {
            let name = input.value().attr("name")?;
            let value = input.value().attr("value").unwrap_or_default();
            Some((name.to_string(), value.to_string()))
        })
        .collect();

    Ok(fields)
}

/// Parses the tariff results page into a reading set.
///
/// Tariff rows are the direct `div.row` children of each `div.current`
/// block. Within a row, the first descendant div is the label cell and the
/// last one the value cell; when the value cell wraps its text in a link,
/// the link text wins. Rows whose value does not parse as a number and rows
/// whose label is not a known tariff are skipped, so a partial page yields
/// a partial set. A label that appears twice keeps the later value.
pub fn extract_tariffs(document: &Html) -> Result<TariffReadings, ParseError> {
    let mut readings = TariffReadings::new();

    for block in find_all_by_class(document, "div", "current")? {
        for row in direct_children_with_class(block, "div", "row") {
            let cells = descendant_elements(row, "div")?;
            let (Some(label_cell), Some(value_cell)) = (cells.first(), cells.last()) else {
                continue;
            };

            let label = text_content(*label_cell);
            let Some(value) = parse_value(&value_cell_text(*value_cell)?) else {
                continue;
            };

            if let Some(key) = tariff_key_for_label(&label) {
                readings.insert(key, value);
            }
        }
    }

    Ok(readings)
}

/// Text of a value cell. Expandable rows keep their value inside a link.
fn value_cell_text(cell: ElementRef<'_>) -> Result<String, ParseError> {
    match first_descendant(cell, "a")? {
        Some(link) => Ok(text_content(link)),
        None => Ok(text_content(cell)),
    }
}

/// Strips whitespace and the euro sign, swaps the decimal comma for a point,
/// and parses the remainder. `None` means the cell carries no number (header
/// rows, empty cells) and the row should be skipped.
fn parse_value(raw: &str) -> Option<f64> {
    raw.trim_matches(VALUE_TRIM).replace(',', ".").parse().ok()
}

/// Maps the exact row label to its tariff key.
///
/// Matching is exact, untrimmed text included: these strings are the page's
/// contract, and a near-match is treated as an unknown row.
fn tariff_key_for_label(label: &str) -> Option<TariffKey> {
    match label {
        "Normaaltarief (per kWh)" => Some(TariffKey::High),
        "Daltarief (per kWh)" => Some(TariffKey::Low),
        "Teruglevertarief normaal (per kWh)" => Some(TariffKey::ReturnHigh),
        "Teruglevertarief dal (per kWh)" => Some(TariffKey::ReturnLow),
        "Gastarief (per m3)" => Some(TariffKey::Gas),
        _ => None,
    }
}
