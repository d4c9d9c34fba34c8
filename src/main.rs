use log::{info, Level};
use serde::Deserialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{CustomEvent, Event, HtmlSelectElement, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod currency;
mod leads;
mod components {
    pub mod faq;
    pub mod lead_form;
    pub mod modal;
    pub mod reveal;
    pub mod scroll;
}
mod pages {
    pub mod download;
    pub mod home;
}

use components::{modal, scroll};
use currency::{currency_for, CurrencyManager, SELECTOR_COUNTRIES};
use pages::{download::Download, home::Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/download")]
    Download,
}

/// The slice of the `currencychange` payload the nav cares about.
#[derive(Deserialize)]
struct CurrencyChanged {
    country: String,
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub manager: CurrencyManager,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > config::NAV_SCROLL_THRESHOLD);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // Keeps the selector showing whatever currency is active, whichever
    // side changed it (startup detection or a manual pick).
    {
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                let listener = Closure::wrap(Box::new(move |e: Event| {
                    let Ok(event) = e.dyn_into::<CustomEvent>() else {
                        return;
                    };
                    let detail = event.detail();
                    let Ok(change) = serde_wasm_bindgen::from_value::<CurrencyChanged>(detail)
                    else {
                        return;
                    };
                    let select = web_sys::window()
                        .and_then(|w| w.document())
                        .and_then(|d| d.query_selector(".currency-select").ok())
                        .flatten()
                        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok());
                    if let Some(select) = select {
                        select.set_value(&change.country);
                    }
                }) as Box<dyn FnMut(Event)>);

                window
                    .add_event_listener_with_callback(
                        config::CURRENCY_EVENT,
                        listener.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            config::CURRENCY_EVENT,
                            listener.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let on_select = {
        let manager = props.manager.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            manager.set_currency(&select.value());
        })
    };

    let open_lead_modal = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            modal::open(config::LEAD_MODAL_ID);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"StockPilot"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <a href="#features" class="nav-link">{"Features"}</a>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <a href="#pricing" class="nav-link">{"Pricing"}</a>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <a href="#faq" class="nav-link">{"FAQ"}</a>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Download} classes="nav-link">
                            {"Download"}
                        </Link<Route>>
                    </div>
                    <a href="#get-started" class="nav-cta" onclick={open_lead_modal}>
                        {"Get StockPilot"}
                    </a>
                    <select class="currency-select" onchange={on_select}>
                        {
                            for SELECTOR_COUNTRIES.iter().filter_map(|code| {
                                currency_for(code).map(|currency| html! {
                                    <option value={*code}>
                                        {format!("{} ({})", currency.code, currency.symbol)}
                                    </option>
                                })
                            })
                        }
                    </select>
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        padding: 0.9rem 2rem;
                        transition: background 0.3s, box-shadow 0.3s;
                        background: transparent;
                    }

                    .top-nav.scrolled {
                        background: rgba(26, 26, 26, 0.95);
                        backdrop-filter: blur(10px);
                        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.4);
                    }

                    .nav-content {
                        max-width: 1100px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .nav-logo {
                        font-size: 1.3rem;
                        font-weight: 700;
                        color: #fff;
                        text-decoration: none;
                    }

                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }

                    .nav-link {
                        color: #ccc;
                        text-decoration: none;
                        font-size: 0.95rem;
                    }

                    .nav-link:hover {
                        color: #7EB2FF;
                    }

                    .nav-cta {
                        background: linear-gradient(45deg, #1E90FF, #4169E1);
                        color: #fff;
                        text-decoration: none;
                        border-radius: 6px;
                        padding: 6px 14px;
                        font-size: 0.9rem;
                        font-weight: 600;
                    }

                    .currency-select {
                        background: rgba(30, 30, 30, 0.8);
                        color: #fff;
                        border: 1px solid rgba(30, 144, 255, 0.3);
                        border-radius: 6px;
                        padding: 4px 8px;
                        font-size: 0.85rem;
                        cursor: pointer;
                    }

                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 6px;
                    }

                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: #fff;
                        border-radius: 1px;
                    }

                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }

                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            background: rgba(26, 26, 26, 0.98);
                            padding: 1.5rem;
                        }

                        .nav-right.mobile-menu-open {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let manager = use_state(CurrencyManager::new);

    {
        let manager = manager.clone();
        use_effect_with_deps(
            move |_| {
                modal::init();
                scroll::init();
                let manager = (*manager).clone();
                spawn_local(async move {
                    manager.init().await;
                });
                || ()
            },
            (),
        );
    }

    let render = {
        let manager = (*manager).clone();
        move |route: Route| match route {
            Route::Home => {
                info!("Rendering home page");
                html! { <Home manager={manager.clone()} /> }
            }
            Route::Download => {
                info!("Rendering download page");
                html! { <Download /> }
            }
        }
    };

    html! {
        <BrowserRouter>
            <Nav manager={(*manager).clone()} />
            <Switch<Route> render={render} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting StockPilot site");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::CurrencyChanged;
    use crate::currency::{currency_for, CurrencyChange};

    #[test]
    fn nav_listener_slice_parses_from_the_published_payload() {
        let currency = currency_for("CA").unwrap();
        let payload = CurrencyChange { country: "CA", currency };
        let value = serde_json::to_value(&payload).unwrap();

        let seen: CurrencyChanged = serde_json::from_value(value).unwrap();
        assert_eq!(seen.country, "CA");
    }
}
