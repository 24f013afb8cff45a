//! Portal page fixtures for testing.
//!
//! Builders for the handful of HTML pages the Mijn UnitedConsumers portal
//! serves around the tariff flow. The markup follows the shapes the parsers
//! rely on: the hidden address form on the first page and `current` blocks
//! with direct-child rows on the results page.

/// The address form page, with one hidden input per (name, value) pair.
///
/// A nameless submit button is always appended; real pages have one and the
/// form extractor must skip it.
pub fn tariff_form_page(fields: &[(&str, &str)]) -> String {
    let inputs: String = fields
        .iter()
        .map(|(name, value)| format!(r#"<input type="hidden" name="{}" value="{}">"#, name, value))
        .collect();

    format!(
        r#"<html><body>
            <div class="adreskeuze">
                <form id="formAdres" method="post" action="tarieven.asp">
                    {}
                    <input type="submit" value="Verder">
                </form>
            </div>
        </body></html>"#,
        inputs
    )
}

/// A tariff row as the results page renders it.
fn tariff_row(label: &str, value: &str) -> String {
    format!(
        r#"<div class="row"><div class="cell">{}</div><div class="cell">{}</div></div>"#,
        label, value
    )
}

/// A tariff row whose value sits inside an expandable link.
fn linked_tariff_row(label: &str, value: &str) -> String {
    format!(
        r##"<div class="row"><div class="cell">{}</div><div class="cell"><a href="#">{}</a></div></div>"##,
        label, value
    )
}

/// The results page with the standard five tariffs.
///
/// Electricity and gas render as separate `current` blocks, the way the
/// portal splits them; the gas value sits inside a link.
pub fn standard_results_page() -> String {
    let electricity = format!(
        "{}{}{}{}{}",
        tariff_row("Tarieven", "Prijs"),
        tariff_row("Normaaltarief (per kWh)", "0,2154 €"),
        tariff_row("Daltarief (per kWh)", "0,1854 €"),
        tariff_row("Teruglevertarief normaal (per kWh)", "0,0762 €"),
        tariff_row("Teruglevertarief dal (per kWh)", "0,0651 €"),
    );
    let gas = linked_tariff_row("Gastarief (per m3)", "1,1032 €");

    format!(
        r#"<html><body>
            <div class="tarieven">
                <div class="current">{}</div>
                <div class="current">{}</div>
            </div>
        </body></html>"#,
        electricity, gas
    )
}

/// The login page, as the portal serves it to anyone without a session.
pub fn login_page() -> String {
    r#"<html><body>
        <form id="formLogin" method="post" action="log-in.asp">
            <input type="text" name="username">
            <input type="password" name="password">
            <input type="submit" name="login" value="Inloggen">
        </form>
    </body></html>"#
        .to_string()
}

/// A page with neither the address form nor any tariff rows on it.
pub fn maintenance_page() -> String {
    "<html><body><p>Mijn UnitedConsumers is tijdelijk niet beschikbaar.</p></body></html>"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tariff_form_page_embeds_fields() {
        let page = tariff_form_page(&[("klantnummer", "12345"), ("adres", "2")]);
        assert!(page.contains(r#"id="formAdres""#));
        assert!(page.contains(r#"<input type="hidden" name="klantnummer" value="12345">"#));
        assert!(page.contains(r#"<input type="hidden" name="adres" value="2">"#));
    }

    #[test]
    fn test_standard_results_page_lists_all_tariffs() {
        let page = standard_results_page();
        assert!(page.contains("Normaaltarief (per kWh)"));
        assert!(page.contains("Daltarief (per kWh)"));
        assert!(page.contains("Teruglevertarief normaal (per kWh)"));
        assert!(page.contains("Teruglevertarief dal (per kWh)"));
        assert!(page.contains("Gastarief (per m3)"));
        assert_eq!(page.matches(r#"<div class="current">"#).count(), 2);
    }
}
