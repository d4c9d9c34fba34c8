//! Visitor currency resolution and price localization.
//!
//! Prices in the markup are authored in Naira (the base currency). On
//! startup the manager resolves the visitor's country, either from a
//! cached selection or by asking a short chain of IP-geolocation
//! providers, then rewrites every price-bearing element on the page.
//! Nothing in here ever surfaces an error to the visitor; the worst
//! outcome is base-currency pricing.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use log::{info, warn};
use serde::Serialize;

use crate::config;

/// Everything needed to display a price in one currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Currency {
    pub symbol: &'static str,
    pub code: &'static str,
    /// Multiplier from one Naira into this currency.
    pub rate: f64,
    pub name: &'static str,
    pub locale: &'static str,
}

pub const DEFAULT_COUNTRY: &str = "NG";

/// Static rate table keyed by two-letter country code. Rates are a
/// snapshot, not live; `DEFAULT_COUNTRY` must stay the first entry.
const CURRENCIES: &[(&str, Currency)] = &[
    ("NG", Currency { symbol: "₦", code: "NGN", rate: 1.0, name: "Nigerian Naira", locale: "en-NG" }),
    ("US", Currency { symbol: "$", code: "USD", rate: 0.00065, name: "US Dollar", locale: "en-US" }),
    ("GB", Currency { symbol: "£", code: "GBP", rate: 0.00051, name: "British Pound", locale: "en-GB" }),
    ("CA", Currency { symbol: "C$", code: "CAD", rate: 0.00089, name: "Canadian Dollar", locale: "en-CA" }),
    ("AU", Currency { symbol: "A$", code: "AUD", rate: 0.00099, name: "Australian Dollar", locale: "en-AU" }),
    ("IE", Currency { symbol: "€", code: "EUR", rate: 0.0006, name: "Euro", locale: "en-IE" }),
    ("DE", Currency { symbol: "€", code: "EUR", rate: 0.0006, name: "Euro", locale: "de-DE" }),
    ("FR", Currency { symbol: "€", code: "EUR", rate: 0.0006, name: "Euro", locale: "fr-FR" }),
    ("ES", Currency { symbol: "€", code: "EUR", rate: 0.0006, name: "Euro", locale: "es-ES" }),
    ("IT", Currency { symbol: "€", code: "EUR", rate: 0.0006, name: "Euro", locale: "it-IT" }),
    ("NL", Currency { symbol: "€", code: "EUR", rate: 0.0006, name: "Euro", locale: "nl-NL" }),
    ("GH", Currency { symbol: "GH₵", code: "GHS", rate: 0.0095, name: "Ghanaian Cedi", locale: "en-GH" }),
    ("KE", Currency { symbol: "KSh", code: "KES", rate: 0.084, name: "Kenyan Shilling", locale: "en-KE" }),
    ("ZA", Currency { symbol: "R", code: "ZAR", rate: 0.012, name: "South African Rand", locale: "en-ZA" }),
    ("IN", Currency { symbol: "₹", code: "INR", rate: 0.054, name: "Indian Rupee", locale: "en-IN" }),
];

/// Countries offered in the nav's manual currency selector. One entry
/// per distinct currency; the full table keeps per-country locales.
pub const SELECTOR_COUNTRIES: &[&str] =
    &["NG", "US", "GB", "DE", "CA", "AU", "GH", "KE", "ZA", "IN"];

pub fn currency_for(country: &str) -> Option<&'static Currency> {
    let code = normalize(country);
    CURRENCIES
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, currency)| currency)
}

fn default_currency() -> &'static Currency {
    &CURRENCIES[0].1
}

fn normalize(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Collapses unsupported countries to the default before caching, so a
/// visitor from an unlisted country is not re-geolocated every visit.
fn effective_country(code: &str) -> String {
    let code = normalize(code);
    if currency_for(&code).is_some() {
        code
    } else {
        DEFAULT_COUNTRY.to_string()
    }
}

#[derive(Clone)]
struct Selected {
    country: String,
    currency: &'static Currency,
}

/// Payload on the `currencychange` event, read by listeners with plain
/// property lookups. The descriptor stays nested under `currency`:
/// flattening it would push serialization through serde-wasm-bindgen's
/// map path, which emits a `js_sys::Map` that property reads cannot see.
#[derive(Serialize)]
pub(crate) struct CurrencyChange<'a> {
    pub(crate) country: &'a str,
    pub(crate) currency: &'a Currency,
}

/// Owned handle to the single current-currency selection. Created once
/// in `App` and handed to whichever component needs it; cloning shares
/// the same selection.
#[derive(Clone)]
pub struct CurrencyManager {
    current: Rc<RefCell<Option<Selected>>>,
}

impl PartialEq for CurrencyManager {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.current, &other.current)
    }
}

impl CurrencyManager {
    pub fn new() -> Self {
        Self {
            current: Rc::new(RefCell::new(None)),
        }
    }

    /// Adopts the cached country if its 24h entry is still fresh,
    /// otherwise runs a detection cycle and caches the outcome. Always
    /// finishes by republishing prices; never fails.
    pub async fn init(&self) {
        if let Some(code) = read_cached_country() {
            self.adopt(&code);
        } else {
            let detected = detect_country().await;
            let country = effective_country(&detected);
            write_cache(&country);
            self.adopt(&country);
        }
        self.update_all_prices();
    }

    /// Manual override. Unknown codes leave the current selection
    /// untouched; known codes also refresh the cache entry.
    pub fn set_currency(&self, country: &str) {
        let code = normalize(country);
        if currency_for(&code).is_none() {
            warn!("unsupported country code {code:?}, keeping current currency");
            return;
        }
        write_cache(&code);
        self.adopt(&code);
        self.update_all_prices();
    }

    /// Base amount into the current currency, rounded to whole units.
    /// Identity while no currency is resolved yet.
    pub fn convert_price(&self, amount_in_base: f64) -> f64 {
        convert_in(self.active(), amount_in_base)
    }

    pub fn format_price(&self, amount: f64) -> String {
        format_in(self.active(), amount)
    }

    /// Symbol plus formatted converted amount, e.g. `$39`.
    pub fn get_formatted_price(&self, amount_in_base: f64) -> String {
        formatted_in(self.active(), amount_in_base)
    }

    /// Rewrites every `.currency`/`[data-currency-symbol]` element, every
    /// `[data-price]` element (base amount read from the attribute) and
    /// the two plan option labels, then dispatches the `currencychange`
    /// event on `window`. No-op while no currency is resolved.
    pub fn update_all_prices(&self) {
        let Some(selected) = self.current.borrow().clone() else {
            return;
        };
        publish_to_dom(&selected);
    }

    fn adopt(&self, country: &str) {
        let code = normalize(country);
        let (country, currency) = match currency_for(&code) {
            Some(currency) => (code, currency),
            None => (DEFAULT_COUNTRY.to_string(), default_currency()),
        };
        info!("currency set to {} via {}", currency.code, country);
        *self.current.borrow_mut() = Some(Selected { country, currency });
    }

    fn active(&self) -> Option<&'static Currency> {
        self.current.borrow().as_ref().map(|sel| sel.currency)
    }
}

pub fn convert_in(currency: Option<&Currency>, amount_in_base: f64) -> f64 {
    match currency {
        Some(currency) => (amount_in_base * currency.rate).round(),
        None => amount_in_base,
    }
}

/// Locale-aware grouping with zero decimals where the platform provides
/// it, plain comma grouping otherwise.
pub fn format_in(currency: Option<&Currency>, amount: f64) -> String {
    let rounded = amount.round();
    currency
        .and_then(|currency| locale_format(currency.locale, rounded))
        .unwrap_or_else(|| group_thousands(rounded))
}

pub fn formatted_in(currency: Option<&Currency>, amount_in_base: f64) -> String {
    let symbol = currency.unwrap_or_else(|| default_currency()).symbol;
    let converted = convert_in(currency, amount_in_base);
    format!("{}{}", symbol, format_in(currency, converted))
}

#[cfg(target_arch = "wasm32")]
fn locale_format(locale: &str, amount: f64) -> Option<String> {
    use web_sys::js_sys;

    let formatted: String = js_sys::Number::from(amount).to_locale_string(locale).into();
    if formatted.is_empty() {
        None
    } else {
        Some(formatted)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn locale_format(_locale: &str, _amount: f64) -> Option<String> {
    None
}

fn group_thousands(amount: f64) -> String {
    let value = amount.round() as i64;
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

struct GeoProvider {
    url: &'static str,
    field: &'static str,
}

/// Ordered fallback chain of free IP-geolocation endpoints. Each is a
/// single unauthenticated GET returning JSON with a country-code field.
const GEO_PROVIDERS: &[GeoProvider] = &[
    GeoProvider { url: "https://ipapi.co/json/", field: "country_code" },
    GeoProvider { url: "https://api.country.is/", field: "country" },
];

/// Tries each provider in order; any network error, non-success status or
/// unusable body moves on to the next. Exhaustion lands on the default.
pub async fn detect_country() -> String {
    let mut answer = None;
    for provider in GEO_PROVIDERS {
        match probe_provider(provider).await {
            Some(code) => {
                info!("geolocation resolved {code} via {}", provider.url);
                answer = Some(code);
                break;
            }
            None => warn!("geolocation provider {} failed", provider.url),
        }
    }
    if answer.is_none() {
        warn!("all geolocation providers failed, defaulting to {DEFAULT_COUNTRY}");
    }
    country_from_answers(answer)
}

/// Settles a detection walk: the first answer in provider order stands.
/// A walk that produced none lands on the default country.
fn country_from_answers(answers: impl IntoIterator<Item = String>) -> String {
    answers
        .into_iter()
        .next()
        .unwrap_or_else(|| DEFAULT_COUNTRY.to_string())
}

async fn probe_provider(provider: &GeoProvider) -> Option<String> {
    let response = Request::get(provider.url).send().await.ok()?;
    if !response.ok() {
        return None;
    }
    let body = response.json::<serde_json::Value>().await.ok()?;
    country_code_from(&body, provider.field)
}

/// Pulls a two-letter code out of a provider response, rejecting
/// anything that does not look like an ISO country code.
fn country_code_from(body: &serde_json::Value, field: &str) -> Option<String> {
    let code = normalize(body.get(field)?.as_str()?);
    (code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic())).then_some(code)
}

fn fresh_cached_country(
    code: Option<String>,
    expires: Option<String>,
    now_ms: f64,
) -> Option<String> {
    let code = code?;
    let expires = expires?.parse::<f64>().ok()?;
    if now_ms < expires {
        Some(code)
    } else {
        None
    }
}

#[cfg(target_arch = "wasm32")]
fn read_cached_country() -> Option<String> {
    use web_sys::js_sys;

    let storage = web_sys::window()?.local_storage().ok()??;
    let code = storage.get_item(config::STORAGE_KEY_COUNTRY).ok()?;
    let expires = storage.get_item(config::STORAGE_KEY_COUNTRY_EXPIRES).ok()?;
    fresh_cached_country(code, expires, js_sys::Date::now())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_cached_country() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn write_cache(country: &str) {
    use web_sys::js_sys;

    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok()).flatten() else {
        return;
    };
    let expires = (js_sys::Date::now() + config::COUNTRY_CACHE_TTL_MS).round();
    let _ = storage.set_item(config::STORAGE_KEY_COUNTRY, country);
    let _ = storage.set_item(config::STORAGE_KEY_COUNTRY_EXPIRES, &expires.to_string());
}

#[cfg(not(target_arch = "wasm32"))]
fn write_cache(_country: &str) {}

#[cfg(target_arch = "wasm32")]
fn publish_to_dom(selected: &Selected) {
    use wasm_bindgen::JsCast;
    use web_sys::{CustomEvent, CustomEventInit, Element};

    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let currency = selected.currency;

    if let Ok(nodes) = document.query_selector_all("[data-currency-symbol], .currency") {
        for i in 0..nodes.length() {
            if let Some(node) = nodes.get(i) {
                node.set_text_content(Some(currency.symbol));
            }
        }
    }

    if let Ok(nodes) = document.query_selector_all("[data-price], .price") {
        for i in 0..nodes.length() {
            let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let Some(base) = element
                .get_attribute("data-price")
                .and_then(|raw| raw.parse::<f64>().ok())
            else {
                continue;
            };
            let converted = convert_in(Some(currency), base);
            element.set_text_content(Some(&format_in(Some(currency), converted)));
        }
    }

    let yearly = formatted_in(Some(currency), config::PLAN_YEARLY_BASE);
    if let Ok(Some(option)) = document.query_selector("#plan-select option[value='yearly']") {
        option.set_text_content(Some(&format!("Yearly - {yearly}")));
    }
    let two_years = formatted_in(Some(currency), config::PLAN_TWO_YEAR_BASE);
    if let Ok(Some(option)) = document.query_selector("#plan-select option[value='2years']") {
        option.set_text_content(Some(&format!("2 Years - {two_years}")));
    }

    let payload = CurrencyChange { country: &selected.country, currency };
    if let Ok(detail) = serde_wasm_bindgen::to_value(&payload) {
        let init = CustomEventInit::new();
        init.set_detail(&detail);
        if let Ok(event) = CustomEvent::new_with_event_init_dict(config::CURRENCY_EVENT, &init) {
            let _ = window.dispatch_event(&event);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn publish_to_dom(_selected: &Selected) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_country_is_first_table_entry() {
        assert_eq!(CURRENCIES[0].0, DEFAULT_COUNTRY);
        assert_eq!(default_currency().code, "NGN");
        assert_eq!(default_currency().symbol, "₦");
    }

    #[test]
    fn selector_countries_all_resolve() {
        for country in SELECTOR_COUNTRIES {
            assert!(currency_for(country).is_some(), "{country} missing from table");
        }
    }

    #[test]
    fn lookup_normalizes_case_and_whitespace() {
        assert_eq!(currency_for(" us ").unwrap().code, "USD");
        assert_eq!(currency_for("gb").unwrap().code, "GBP");
        assert!(currency_for("XX").is_none());
    }

    #[test]
    fn formatted_price_equals_symbol_plus_format_of_convert() {
        // The composition property must hold for every supported country.
        for (_, currency) in CURRENCIES {
            let composed = format!(
                "{}{}",
                currency.symbol,
                format_in(Some(currency), convert_in(Some(currency), 123456.0))
            );
            assert_eq!(formatted_in(Some(currency), 123456.0), composed);
        }
    }

    #[test]
    fn yearly_price_in_usd_is_39_dollars() {
        let manager = CurrencyManager::new();
        manager.set_currency("US");
        assert_eq!(manager.convert_price(60000.0), 39.0);
        assert_eq!(manager.get_formatted_price(60000.0), "$39");
    }

    #[test]
    fn unresolved_manager_leaves_amounts_in_base() {
        let manager = CurrencyManager::new();
        assert_eq!(manager.convert_price(500.0), 500.0);
        assert_eq!(manager.get_formatted_price(60000.0), "₦60,000");
    }

    #[test]
    fn unsupported_code_keeps_current_currency() {
        let manager = CurrencyManager::new();
        manager.set_currency("US");
        manager.set_currency("XX");
        assert_eq!(manager.active().unwrap().code, "USD");
    }

    #[test]
    fn unknown_detection_results_collapse_to_default() {
        let manager = CurrencyManager::new();
        manager.adopt("ZZ");
        let current = manager.active().unwrap();
        assert_eq!(current.code, "NGN");
        assert_eq!(current.symbol, "₦");
        assert_eq!(
            manager.current.borrow().as_ref().unwrap().country,
            DEFAULT_COUNTRY
        );
    }

    #[test]
    fn effective_country_maps_unknowns_to_default() {
        assert_eq!(effective_country("us"), "US");
        assert_eq!(effective_country("ZZ"), DEFAULT_COUNTRY);
        assert_eq!(effective_country(""), DEFAULT_COUNTRY);
    }

    #[test]
    fn cached_selection_dies_at_expiry() {
        let fresh = fresh_cached_country(Some("US".into()), Some("1000".into()), 999.0);
        assert_eq!(fresh.as_deref(), Some("US"));

        // now == expiry means expired; the caller must re-detect.
        assert!(fresh_cached_country(Some("US".into()), Some("1000".into()), 1000.0).is_none());
        assert!(fresh_cached_country(Some("US".into()), Some("1000".into()), 2000.0).is_none());
    }

    #[test]
    fn cache_reads_tolerate_missing_or_garbled_entries() {
        assert!(fresh_cached_country(None, Some("1000".into()), 0.0).is_none());
        assert!(fresh_cached_country(Some("US".into()), None, 0.0).is_none());
        assert!(fresh_cached_country(Some("US".into()), Some("soon".into()), 0.0).is_none());
    }

    #[test]
    fn grouping_fallback_inserts_separators() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(39.0), "39");
        assert_eq!(group_thousands(1234.0), "1,234");
        assert_eq!(group_thousands(60000.0), "60,000");
        assert_eq!(group_thousands(1234567.0), "1,234,567");
        assert_eq!(group_thousands(-4500.0), "-4,500");
    }

    #[test]
    fn provider_chain_is_two_distinct_https_endpoints() {
        assert_eq!(GEO_PROVIDERS.len(), 2);
        for provider in GEO_PROVIDERS {
            assert!(provider.url.starts_with("https://"));
        }
        assert_ne!(GEO_PROVIDERS[0].url, GEO_PROVIDERS[1].url);
    }

    #[test]
    fn provider_bodies_yield_only_plausible_country_codes() {
        let body = serde_json::json!({ "country_code": "us", "ip": "203.0.113.9" });
        assert_eq!(country_code_from(&body, "country_code").as_deref(), Some("US"));

        // Wrong field name, wrong type, wrong length, non-alphabetic.
        assert!(country_code_from(&body, "country").is_none());
        assert!(country_code_from(&serde_json::json!({ "country": 44 }), "country").is_none());
        assert!(
            country_code_from(&serde_json::json!({ "country": "USA" }), "country").is_none()
        );
        assert!(
            country_code_from(&serde_json::json!({ "country": "U1" }), "country").is_none()
        );
    }

    fn walk_answers(bodies: &[serde_json::Value]) -> Vec<String> {
        GEO_PROVIDERS
            .iter()
            .zip(bodies)
            .filter_map(|(provider, body)| country_code_from(body, provider.field))
            .collect()
    }

    #[test]
    fn detection_walk_takes_the_first_usable_answer() {
        let bodies = [
            serde_json::json!({ "country_code": "us", "ip": "203.0.113.9" }),
            serde_json::json!({ "country": "GB" }),
        ];
        assert_eq!(country_from_answers(walk_answers(&bodies)), "US");
    }

    #[test]
    fn detection_walk_falls_through_to_the_second_provider() {
        let bodies = [
            serde_json::json!({ "error": true, "reason": "RateLimited" }),
            serde_json::json!({ "country": "ke" }),
        ];
        assert_eq!(country_from_answers(walk_answers(&bodies)), "KE");
    }

    #[test]
    fn exhausted_detection_walk_lands_on_naira_defaults() {
        let bodies = [
            serde_json::json!({ "error": true, "reason": "RateLimited" }),
            serde_json::json!({ "country": 404 }),
        ];
        let answers = walk_answers(&bodies);
        assert!(answers.is_empty());

        let detected = country_from_answers(answers);
        assert_eq!(detected, DEFAULT_COUNTRY);
        let fallback = currency_for(&detected).unwrap();
        assert_eq!(fallback.code, "NGN");
        assert_eq!(fallback.symbol, "₦");
    }

    #[test]
    fn published_change_keeps_the_descriptor_nested() {
        let currency = currency_for("US").unwrap();
        let payload = CurrencyChange { country: "US", currency };
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["country"], "US");
        assert_eq!(value["currency"]["code"], "USD");
        assert_eq!(value["currency"]["symbol"], "$");
        // No descriptor field may spread onto the top level.
        assert!(value.get("code").is_none());
        assert!(value.get("symbol").is_none());
    }
}
