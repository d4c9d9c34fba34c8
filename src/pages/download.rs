use web_sys::window;
use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::Route;

#[function_component(Download)]
pub fn download() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(w) = window() {
                    w.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="download-page">
            <div class="download-card">
                <h1>{"Your download is ready"}</h1>
                <p class="download-sub">
                    {"StockPilot 2.3.1 for Windows 10 and 11. About 84 MB."}
                </p>
                <a
                    class="download-button"
                    href={config::INSTALLER_PATH}
                    download="stockpilot-setup-2.3.1.exe"
                >
                    {"Download StockPilot for Windows"}
                </a>
                <ol class="install-steps">
                    <li>{"Run the installer and follow the prompts."}</li>
                    <li>{"Open StockPilot and create your shop profile."}</li>
                    <li>{"Add your first products and start selling."}</li>
                </ol>
                <p class="help-line">
                    {"Need a hand? Write to "}
                    <a href="mailto:support@stockpilot.ng">{"support@stockpilot.ng"}</a>
                    {" and we'll walk you through setup."}
                </p>
                <Link<Route> to={Route::Home} classes="back-link">{"← Back to the site"}</Link<Route>>
            </div>
            <style>
                {r#"
                    .download-page {
                        min-height: 100vh;
                        background-color: #1a1a1a;
                        color: #fff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 6rem 2rem 3rem;
                        font-family: system-ui, -apple-system, sans-serif;
                    }

                    .download-card {
                        max-width: 560px;
                        width: 100%;
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(30, 144, 255, 0.15);
                        border-radius: 16px;
                        padding: 3rem;
                        text-align: center;
                    }

                    .download-card h1 {
                        font-size: 2.2rem;
                        margin-bottom: 0.8rem;
                        background: linear-gradient(45deg, #fff, #7EB2FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }

                    .download-sub {
                        color: #999;
                        margin-bottom: 2rem;
                    }

                    .download-button {
                        display: inline-block;
                        background: linear-gradient(45deg, #1E90FF, #4169E1);
                        color: #fff;
                        text-decoration: none;
                        border-radius: 8px;
                        padding: 1rem 2rem;
                        font-size: 1.1rem;
                        font-weight: 600;
                        transition: transform 0.2s, box-shadow 0.2s;
                    }

                    .download-button:hover {
                        transform: translateY(-2px);
                        box-shadow: 0 4px 20px rgba(30, 144, 255, 0.3);
                    }

                    .install-steps {
                        text-align: left;
                        color: #bbb;
                        margin: 2rem auto 1.5rem;
                        max-width: 380px;
                        line-height: 1.8;
                    }

                    .help-line {
                        color: #999;
                        font-size: 0.95rem;
                        margin-bottom: 1.5rem;
                    }

                    .help-line a {
                        color: #7EB2FF;
                    }

                    .back-link {
                        color: #7EB2FF;
                        text-decoration: none;
                    }

                    .back-link:hover {
                        text-decoration: underline;
                    }
                "#}
            </style>
        </div>
    }
}
