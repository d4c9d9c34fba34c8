//! Captured leads: the local mirror every submission is appended to
//! regardless of how the email hand-off went, plus the admin-only CSV
//! export callable from the browser console.

use log::warn;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::config;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub plan: String,
    pub timestamp: String,
    pub source: String,
}

impl Lead {
    /// Stamps the submission time and source tag; an empty phone field
    /// becomes the sentinel value.
    pub fn new(name: &str, email: &str, company: &str, phone: &str, plan: &str) -> Self {
        let phone = phone.trim();
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            company: company.trim().to_string(),
            phone: if phone.is_empty() {
                config::PHONE_NOT_PROVIDED.to_string()
            } else {
                phone.to_string()
            },
            plan: plan.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            source: config::LEAD_SOURCE.to_string(),
        }
    }
}

fn parse_leads(raw: Option<String>) -> Vec<Lead> {
    raw.and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

/// Every lead ever captured on this browser, oldest first. An absent or
/// garbled store reads as empty.
pub fn stored_leads() -> Vec<Lead> {
    parse_leads(read_store())
}

/// Appends to the local lead list. Best-effort: storage failures are
/// logged and swallowed, never surfaced to the visitor.
pub fn persist_lead(lead: Lead) {
    let mut leads = stored_leads();
    leads.push(lead);
    match serde_json::to_string(&leads) {
        Ok(json) => write_store(&json),
        Err(err) => warn!("could not serialize lead list: {err}"),
    }
}

/// Builds the export table: headers come from the first record's
/// serialized field names, every cell is double-quoted with embedded
/// quotes doubled. `None` when there is nothing to export.
pub fn leads_to_csv(leads: &[Lead]) -> Option<String> {
    let first = serde_json::to_value(leads.first()?).ok()?;
    let headers: Vec<String> = first.as_object()?.keys().cloned().collect();

    let mut rows = Vec::with_capacity(leads.len() + 1);
    rows.push(csv_row(headers.iter().map(String::as_str)));
    for lead in leads {
        let record = serde_json::to_value(lead).ok()?;
        let object = record.as_object()?;
        rows.push(csv_row(headers.iter().map(|header| {
            object.get(header).and_then(|v| v.as_str()).unwrap_or("")
        })));
    }
    Some(rows.join("\n"))
}

fn csv_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    cells
        .map(|cell| format!("\"{}\"", cell.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}

/// Console-invocable admin export, reachable through the exported wasm
/// bindings (`wasmBindings.export_leads()` in devtools). Deliberately
/// wired to no UI control. No-op when the lead list is empty.
#[wasm_bindgen]
pub fn export_leads() {
    let leads = stored_leads();
    let Some(csv) = leads_to_csv(&leads) else {
        warn!("no stored leads to export");
        return;
    };
    offer_csv_download(&csv);
}

#[cfg(target_arch = "wasm32")]
fn read_store() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(config::STORAGE_KEY_LEADS)
        .ok()?
}

#[cfg(not(target_arch = "wasm32"))]
fn read_store() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn write_store(json: &str) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok()).flatten() else {
        warn!("localStorage unavailable, lead not mirrored locally");
        return;
    };
    if storage.set_item(config::STORAGE_KEY_LEADS, json).is_err() {
        warn!("could not write lead list to localStorage");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_store(_json: &str) {}

#[cfg(target_arch = "wasm32")]
fn offer_csv_download(csv: &str) {
    use wasm_bindgen::JsCast;
    use web_sys::js_sys;
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let parts = js_sys::Array::of1(&JsValue::from_str(csv));
    let bag = BlobPropertyBag::new();
    bag.set_type("text/csv;charset=utf-8");
    let Ok(blob) = Blob::new_with_str_sequence_and_options(&parts, &bag) else {
        return;
    };
    let Ok(url) = Url::create_object_url_with_blob(&blob) else {
        return;
    };
    let Some(anchor) = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
    else {
        return;
    };
    anchor.set_href(&url);
    anchor.set_download("stockpilot-leads.csv");
    if let Some(body) = document.body() {
        let _ = body.append_child(&anchor);
        anchor.click();
        anchor.remove();
    }
    let _ = Url::revoke_object_url(&url);
}

#[cfg(not(target_arch = "wasm32"))]
fn offer_csv_download(_csv: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(name: &str, phone: &str) -> Lead {
        Lead {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            company: "Adaeze Stores".to_string(),
            phone: phone.to_string(),
            plan: "yearly".to_string(),
            timestamp: "2026-03-01T09:30:00+00:00".to_string(),
            source: config::LEAD_SOURCE.to_string(),
        }
    }

    #[test]
    fn new_lead_applies_sentinel_and_source_tag() {
        let lead = Lead::new("  Ada Obi ", "ada@shop.ng", "Obi & Sons", "   ", "2years");
        assert_eq!(lead.name, "Ada Obi");
        assert_eq!(lead.phone, config::PHONE_NOT_PROVIDED);
        assert_eq!(lead.plan, "2years");
        assert_eq!(lead.source, config::LEAD_SOURCE);
        assert!(!lead.timestamp.is_empty());
    }

    #[test]
    fn new_lead_keeps_provided_phone() {
        let lead = Lead::new("Ada", "ada@shop.ng", "Obi & Sons", " +234 801 000 0000 ", "yearly");
        assert_eq!(lead.phone, "+234 801 000 0000");
    }

    #[test]
    fn parse_tolerates_missing_and_garbled_stores() {
        assert!(parse_leads(None).is_empty());
        assert!(parse_leads(Some("not json".to_string())).is_empty());
        assert!(parse_leads(Some("{\"truncated\":".to_string())).is_empty());
    }

    #[test]
    fn leads_round_trip_through_json() {
        let leads = vec![lead("Ada", "0801"), lead("Bayo", "")];
        let json = serde_json::to_string(&leads).unwrap();
        assert_eq!(parse_leads(Some(json)), leads);
    }

    #[test]
    fn appending_grows_list_by_exactly_one() {
        let mut leads = vec![lead("Ada", "0801")];
        let before = leads.len();
        leads.push(lead("Bayo", ""));
        assert_eq!(leads.len(), before + 1);
        assert_eq!(leads[0].name, "Ada");
        assert_eq!(leads[1].name, "Bayo");
    }

    #[test]
    fn empty_store_exports_nothing() {
        assert!(leads_to_csv(&[]).is_none());
    }

    #[test]
    fn csv_headers_come_from_first_record_fields() {
        let csv = leads_to_csv(&[lead("Ada", "0801")]).unwrap();
        let header_line = csv.lines().next().unwrap();
        // serde_json maps iterate keys in lexicographic order.
        assert_eq!(
            header_line,
            "\"company\",\"email\",\"name\",\"phone\",\"plan\",\"source\",\"timestamp\""
        );
    }

    #[test]
    fn csv_quotes_every_cell_and_doubles_inner_quotes() {
        let mut tricky = lead("Ada", "0801");
        tricky.company = "The \"Corner\" Shop".to_string();
        let csv = leads_to_csv(&[tricky]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("\"The \"\"Corner\"\" Shop\","));
        assert_eq!(row.matches("\",\"").count(), 6);
    }

    #[test]
    fn csv_has_one_row_per_lead() {
        let csv = leads_to_csv(&[lead("Ada", "0801"), lead("Bayo", ""), lead("Chike", "")]).unwrap();
        assert_eq!(csv.lines().count(), 4);
    }
}
