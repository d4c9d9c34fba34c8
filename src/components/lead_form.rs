use gloo_console::log;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, Event, HtmlInputElement, HtmlSelectElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::components::modal;
use crate::config;
use crate::currency::CurrencyManager;
use crate::leads::{self, Lead};

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    /// Labels the plan options in whatever currency is active.
    pub manager: CurrencyManager,
    /// Fired once the lead has been captured, just before the download redirect.
    pub on_success: Callback<()>,
}

fn field_filled(value: &str) -> bool {
    value.trim().chars().count() >= 2
}

fn email_looks_valid(email: &str) -> bool {
    let email = email.trim();
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

fn validate_lead_fields(name: &str, email: &str, company: &str) -> Result<(), &'static str> {
    if !field_filled(name) {
        return Err("Please enter your full name (at least 2 characters).");
    }
    if !email_looks_valid(email) {
        return Err("Please enter a valid email address.");
    }
    if !field_filled(company) {
        return Err("Please enter your business name (at least 2 characters).");
    }
    Ok(())
}

async fn deliver_lead(lead: &Lead) -> bool {
    let payload = json!({
        "service_id": config::EMAILJS_SERVICE_ID,
        "template_id": config::EMAILJS_TEMPLATE_ID,
        "user_id": config::EMAILJS_PUBLIC_KEY,
        "template_params": {
            "name": lead.name,
            "email": lead.email,
            "company": lead.company,
            "phone": lead.phone,
            "plan": lead.plan,
        },
    });

    let request = match Request::post(config::EMAILJS_ENDPOINT).json(&payload) {
        Ok(request) => request,
        Err(e) => {
            log!("Failed to encode lead payload:", e.to_string());
            return false;
        }
    };

    match request.send().await {
        Ok(response) if response.ok() => true,
        Ok(response) => {
            log!("Email service rejected the lead:", response.status());
            false
        }
        Err(e) => {
            log!("Failed to reach the email service:", e.to_string());
            false
        }
    }
}

#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let company = use_state(String::new);
    let phone = use_state(String::new);
    let plan = use_state(|| "yearly".to_string());
    let submitting = use_state(|| false);

    let oninput_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let oninput_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let oninput_company = {
        let company = company.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            company.set(input.value());
        })
    };
    let oninput_phone = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(input.value());
        })
    };
    let onchange_plan = {
        let plan = plan.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            plan.set(select.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let company = company.clone();
        let phone = phone.clone();
        let plan = plan.clone();
        let submitting = submitting.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            if let Err(message) = validate_lead_fields(&name, &email, &company) {
                if let Some(w) = window() {
                    let _ = w.alert_with_message(message);
                }
                return;
            }

            let lead = Lead::new(&name, &email, &company, &phone, &plan);
            submitting.set(true);

            let name = name.clone();
            let email = email.clone();
            let company = company.clone();
            let phone = phone.clone();
            let plan = plan.clone();
            let submitting = submitting.clone();
            let on_success = on_success.clone();
            spawn_local(async move {
                if !deliver_lead(&lead).await {
                    log!("Lead email not sent, keeping the local copy only");
                }
                // The local mirror is written no matter how delivery went.
                leads::persist_lead(lead);

                modal::close_all();
                on_success.emit(());

                name.set(String::new());
                email.set(String::new());
                company.set(String::new());
                phone.set(String::new());
                plan.set("yearly".to_string());
                submitting.set(false);

                // Leave the confirmation on screen for a beat before moving on.
                TimeoutFuture::new(1_400).await;
                if let Some(w) = window() {
                    let _ = w.location().set_href(config::DOWNLOAD_PAGE);
                }
            });
        })
    };

    html! {
        <form class="lead-form" {onsubmit}>
            <div class="form-field">
                <label for="lead-name">{"Full name"}</label>
                <input
                    id="lead-name"
                    type="text"
                    placeholder="Adaeze Okafor"
                    value={(*name).clone()}
                    oninput={oninput_name}
                />
            </div>
            <div class="form-field">
                <label for="lead-email">{"Email"}</label>
                <input
                    id="lead-email"
                    type="email"
                    placeholder="you@business.com"
                    value={(*email).clone()}
                    oninput={oninput_email}
                />
            </div>
            <div class="form-field">
                <label for="lead-company">{"Business name"}</label>
                <input
                    id="lead-company"
                    type="text"
                    placeholder="Okafor Stores"
                    value={(*company).clone()}
                    oninput={oninput_company}
                />
            </div>
            <div class="form-field">
                <label for="lead-phone">{"Phone (optional)"}</label>
                <input
                    id="lead-phone"
                    type="tel"
                    placeholder="+234 800 000 0000"
                    value={(*phone).clone()}
                    oninput={oninput_phone}
                />
            </div>
            <div class="form-field">
                <label for="plan-select">{"Plan"}</label>
                <select id="plan-select" onchange={onchange_plan}>
                    <option value="yearly" selected={*plan == "yearly"}>
                        {format!("Yearly - {}", props.manager.get_formatted_price(config::PLAN_YEARLY_BASE))}
                    </option>
                    <option value="2years" selected={*plan == "2years"}>
                        {format!("2 Years - {}", props.manager.get_formatted_price(config::PLAN_TWO_YEAR_BASE))}
                    </option>
                </select>
            </div>
            <button type="submit" class="submit-button" disabled={*submitting}>
                {
                    if *submitting {
                        "Sending..."
                    } else {
                        "Get StockPilot"
                    }
                }
            </button>
            <style>
                {r#"
                    .lead-form {
                        display: flex;
                        flex-direction: column;
                        gap: 16px;
                    }

                    .form-field {
                        display: flex;
                        flex-direction: column;
                        gap: 6px;
                    }

                    .form-field label {
                        color: #999;
                        font-size: 0.85rem;
                    }

                    .form-field input,
                    .form-field select {
                        background: rgba(30, 30, 30, 0.8);
                        border: 1px solid rgba(30, 144, 255, 0.2);
                        border-radius: 8px;
                        padding: 10px 12px;
                        color: #fff;
                        font-size: 0.95rem;
                    }

                    .form-field input:focus,
                    .form-field select:focus {
                        outline: none;
                        border-color: rgba(30, 144, 255, 0.5);
                    }

                    .submit-button {
                        margin-top: 8px;
                        background: linear-gradient(45deg, #1E90FF, #4169E1);
                        color: #fff;
                        border: none;
                        border-radius: 8px;
                        padding: 12px 16px;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: opacity 0.2s;
                    }

                    .submit-button:hover {
                        opacity: 0.9;
                    }

                    .submit-button:disabled {
                        opacity: 0.6;
                        cursor: wait;
                    }
                "#}
            </style>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_passes_for_a_complete_lead() {
        assert!(validate_lead_fields("Adaeze Okafor", "adaeze@okafor.ng", "Okafor Stores").is_ok());
    }

    #[test]
    fn name_shorter_than_two_chars_is_rejected() {
        let err = validate_lead_fields("A", "adaeze@okafor.ng", "Okafor Stores").unwrap_err();
        assert!(err.contains("name"));
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        assert!(validate_lead_fields("   ", "adaeze@okafor.ng", "Okafor Stores").is_err());
    }

    #[test]
    fn company_shorter_than_two_chars_is_rejected() {
        let err = validate_lead_fields("Adaeze", "adaeze@okafor.ng", "X").unwrap_err();
        assert!(err.contains("business"));
    }

    #[test]
    fn email_without_at_sign_is_rejected() {
        assert!(!email_looks_valid("adaeze.okafor.ng"));
    }

    #[test]
    fn email_with_two_at_signs_is_rejected() {
        assert!(!email_looks_valid("adaeze@okafor@ng"));
    }

    #[test]
    fn email_without_domain_dot_is_rejected() {
        assert!(!email_looks_valid("adaeze@okafor"));
    }

    #[test]
    fn email_with_leading_domain_dot_is_rejected() {
        assert!(!email_looks_valid("adaeze@.okafor.ng"));
    }

    #[test]
    fn email_with_spaces_is_rejected() {
        assert!(!email_looks_valid("ada eze@okafor.ng"));
    }

    #[test]
    fn plain_email_is_accepted() {
        assert!(email_looks_valid("adaeze@okafor.ng"));
        assert!(email_looks_valid("  adaeze@okafor.com.ng  "));
    }
}
