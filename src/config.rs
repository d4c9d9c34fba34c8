//! Fixed endpoints, identifiers and DOM contract values for the site.
//! Renaming anything here must be mirrored in the markup, or the
//! integration breaks silently.

/// EmailJS REST endpoint plus the account identifiers baked into the
/// lead-capture template.
pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const EMAILJS_SERVICE_ID: &str = "service_stockpilot";
pub const EMAILJS_TEMPLATE_ID: &str = "template_lead_capture";
pub const EMAILJS_PUBLIC_KEY: &str = "b4XPqeJ9wdTRkYxnM";

/// localStorage keys. The country pair caches the geolocation result,
/// the leads key holds the append-only JSON array of submissions.
pub const STORAGE_KEY_COUNTRY: &str = "stockpilot_country";
pub const STORAGE_KEY_COUNTRY_EXPIRES: &str = "stockpilot_country_expires";
pub const STORAGE_KEY_LEADS: &str = "stockpilot_leads";

/// A detected country is trusted for 24 hours before re-detection.
pub const COUNTRY_CACHE_TTL_MS: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Name of the `CustomEvent` dispatched on `window` after every price
/// republish, for any other script on the page.
pub const CURRENCY_EVENT: &str = "currencychange";

/// Source tag stamped on every captured lead.
pub const LEAD_SOURCE: &str = "stockpilot-website";

/// Sentinel stored when the visitor leaves the optional phone field empty.
pub const PHONE_NOT_PROVIDED: &str = "Not provided";

/// Base (NGN) prices for the two subscription plans shown in the plan
/// selector; the currency manager rewrites the option labels from these.
pub const PLAN_YEARLY_BASE: f64 = 60000.0;
pub const PLAN_TWO_YEAR_BASE: f64 = 100000.0;

/// Where a successful lead submission lands, and what the manual
/// download control on that page points at.
pub const DOWNLOAD_PAGE: &str = "/download";
pub const INSTALLER_PATH: &str = "/downloads/stockpilot-setup-2.3.1.exe";

/// Navbar swaps to its solid background once the page is scrolled past
/// this many pixels.
pub const NAV_SCROLL_THRESHOLD: i32 = 50;

/// In-page anchor reserved for the lead-modal triggers; the smooth-scroll
/// controller leaves clicks on it alone.
pub const RESERVED_ANCHOR: &str = "#get-started";

/// Dialog element ids shared between the markup and the modal triggers.
pub const LEAD_MODAL_ID: &str = "lead-modal";
pub const DEMO_MODAL_ID: &str = "demo-modal";
