use web_sys::{window, MouseEvent};
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::faq::Faq;
use crate::components::lead_form::LeadForm;
use crate::components::{modal, reveal};
use crate::config;
use crate::currency::CurrencyManager;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub manager: CurrencyManager,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let lead_sent = use_state(|| false);

    // Runs once per mount, so coming back from the download page
    // re-arms the reveal observer and repaints prices on fresh nodes.
    {
        let manager = props.manager.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(w) = window() {
                    w.scroll_to_with_x_and_y(0.0, 0.0);
                }
                reveal::init();
                manager.update_all_prices();
                || ()
            },
            (),
        );
    }

    let open_lead_modal = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        modal::open(config::LEAD_MODAL_ID);
    });
    let open_demo_modal = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        modal::open(config::DEMO_MODAL_ID);
    });
    let on_lead_sent = {
        let lead_sent = lead_sent.clone();
        Callback::from(move |_| lead_sent.set(true))
    };

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-background"></div>
                <div class="hero-content">
                    <h1>{"Know your stock. Grow your sales."}</h1>
                    <p class="hero-subtitle">
                        {"StockPilot keeps inventory, sales and receipts in one desktop app \
                          built for Nigerian shops. Works offline, syncs when you're back."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#get-started" class="hero-cta" onclick={open_lead_modal.clone()}>
                            {"Get StockPilot"}
                        </a>
                        <button class="demo-link" onclick={open_demo_modal}>
                            {"▶️ Watch the demo"}
                        </button>
                    </div>
                </div>
            </header>

            <section id="features" class="features">
                <div class="section-head">
                    <h2>{"Everything your shop needs"}</h2>
                    <p>{"From the first carton on the shelf to the end-of-day report."}</p>
                </div>
                <div class="features-grid">
                    <div class="feature-card">
                        <span class="feature-icon">{"📦"}</span>
                        <h3>{"Inventory tracking"}</h3>
                        <p>{"Every product, quantity and cost price in one place. Barcode friendly."}</p>
                    </div>
                    <div class="feature-card">
                        <span class="feature-icon">{"🧾"}</span>
                        <h3>{"Sales & receipts"}</h3>
                        <p>{"Ring up sales in seconds and print or WhatsApp the receipt."}</p>
                    </div>
                    <div class="feature-card">
                        <span class="feature-icon">{"🔔"}</span>
                        <h3>{"Low-stock alerts"}</h3>
                        <p>{"StockPilot warns you before a fast seller runs out."}</p>
                    </div>
                    <div class="feature-card">
                        <span class="feature-icon">{"📴"}</span>
                        <h3>{"Offline first"}</h3>
                        <p>{"NEPA took the light? Keep selling. Everything syncs later."}</p>
                    </div>
                    <div class="feature-card">
                        <span class="feature-icon">{"📊"}</span>
                        <h3>{"Daily reports"}</h3>
                        <p>{"Profit, best sellers and slow movers, summarised every evening."}</p>
                    </div>
                    <div class="feature-card">
                        <span class="feature-icon">{"👥"}</span>
                        <h3>{"Staff accounts"}</h3>
                        <p>{"Give each attendant their own login and see who sold what."}</p>
                    </div>
                </div>
            </section>

            <section id="pricing" class="pricing">
                <div class="section-head">
                    <h2>{"Simple pricing, every feature included"}</h2>
                    <p>{"No monthly fees. Pay once a year, use it on your shop computer."}</p>
                </div>
                <div class="pricing-grid">
                    <div class="pricing-card">
                        <h3>{"Yearly"}</h3>
                        <div class="price-line">
                            <span class="currency">{"₦"}</span>
                            <span class="price" data-price="60000">{"60,000"}</span>
                            <span class="price-term">{"/ year"}</span>
                        </div>
                        <ul class="plan-list">
                            <li>{"Unlimited products and sales"}</li>
                            <li>{"All features, no add-ons"}</li>
                            <li>{"Free updates and support"}</li>
                        </ul>
                        <a href="#get-started" class="hero-cta plan-cta" onclick={open_lead_modal.clone()}>
                            {"Choose Yearly"}
                        </a>
                    </div>
                    <div class="pricing-card popular">
                        <span class="plan-badge">{"Best value"}</span>
                        <h3>{"2 Years"}</h3>
                        <div class="price-line">
                            <span class="currency">{"₦"}</span>
                            <span class="price" data-price="100000">{"100,000"}</span>
                            <span class="price-term">{"/ 2 years"}</span>
                        </div>
                        <ul class="plan-list">
                            <li>{"Everything in Yearly"}</li>
                            <li>{"Two months free"}</li>
                            <li>{"Price locked for both years"}</li>
                        </ul>
                        <a href="#get-started" class="hero-cta plan-cta" onclick={open_lead_modal.clone()}>
                            {"Choose 2 Years"}
                        </a>
                    </div>
                </div>
            </section>

            <Faq />

            if *lead_sent {
                <div class="toast">{"Thanks! Taking you to your download..."}</div>
            }

            <div id={config::LEAD_MODAL_ID} class="modal">
                <div class="modal-content">
                    <button class="modal-close" aria-label="Close">{"×"}</button>
                    <h3>{"Start with StockPilot"}</h3>
                    <p class="modal-sub">{"Tell us about your business and we'll take you straight to the installer."}</p>
                    <LeadForm manager={props.manager.clone()} on_success={on_lead_sent} />
                </div>
            </div>

            <div id={config::DEMO_MODAL_ID} class="modal">
                <div class="modal-content modal-wide">
                    <button class="modal-close" aria-label="Close">{"×"}</button>
                    <h3>{"StockPilot in three minutes"}</h3>
                    <video controls=true preload="none" poster="/media/demo-poster.jpg" src="/media/stockpilot-demo.mp4"></video>
                </div>
            </div>

            <footer class="footer-cta">
                <div class="footer-content">
                    <h2>{"Ready to run a tighter shop?"}</h2>
                    <p class="subtitle">{"Join the businesses across Nigeria already counting on StockPilot."}</p>
                    <a href="#get-started" class="hero-cta" onclick={open_lead_modal}>
                        {"Get StockPilot today"}
                    </a>
                    <div class="footer-links">
                        <a href="#features">{"Features"}</a>
                        <a href="#pricing">{"Pricing"}</a>
                        <a href="#faq">{"FAQ"}</a>
                        <Link<Route> to={Route::Download}>{"Download"}</Link<Route>>
                    </div>
                    <p class="fine-print">{"© 2026 StockPilot Technologies Ltd. Lagos, Nigeria."}</p>
                </div>
            </footer>

            <style>
                {r#"
                    .landing-page {
                        position: relative;
                        min-height: 100vh;
                        background-color: #1a1a1a;
                        color: #ffffff;
                        font-family: system-ui, -apple-system, sans-serif;
                    }

                    .hero {
                        position: relative;
                        min-height: 80vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 6rem 2rem 4rem;
                    }

                    .hero-background {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at 50% 20%, rgba(30, 144, 255, 0.15), transparent 60%);
                        pointer-events: none;
                    }

                    .hero-content {
                        position: relative;
                        max-width: 720px;
                    }

                    .hero-content h1 {
                        font-size: 3.2rem;
                        line-height: 1.1;
                        margin-bottom: 1.2rem;
                        background: linear-gradient(45deg, #fff, #7EB2FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }

                    .hero-subtitle {
                        color: #999;
                        font-size: 1.15rem;
                        line-height: 1.6;
                        margin-bottom: 2rem;
                    }

                    .hero-cta-group {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        align-items: center;
                        flex-wrap: wrap;
                    }

                    .hero-cta {
                        display: inline-block;
                        background: linear-gradient(45deg, #1E90FF, #4169E1);
                        color: #fff;
                        text-decoration: none;
                        border: none;
                        border-radius: 8px;
                        padding: 1rem 2rem;
                        font-size: 1.1rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: transform 0.2s, box-shadow 0.2s;
                    }

                    .hero-cta:hover {
                        transform: translateY(-2px);
                        box-shadow: 0 4px 20px rgba(30, 144, 255, 0.3);
                    }

                    .demo-link {
                        background: none;
                        border: none;
                        color: #7EB2FF;
                        font-size: 1rem;
                        cursor: pointer;
                        text-decoration: underline;
                    }

                    .features, .pricing {
                        padding: 5rem 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }

                    .section-head {
                        text-align: center;
                        margin-bottom: 3rem;
                    }

                    .section-head h2 {
                        font-size: 2.2rem;
                        margin-bottom: 0.6rem;
                    }

                    .section-head p {
                        color: #999;
                    }

                    .features-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 1.5rem;
                    }

                    .feature-card {
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(30, 144, 255, 0.1);
                        border-radius: 12px;
                        padding: 1.8rem;
                    }

                    .feature-card:hover {
                        border-color: rgba(30, 144, 255, 0.3);
                    }

                    .feature-icon {
                        font-size: 1.8rem;
                        display: block;
                        margin-bottom: 0.8rem;
                    }

                    .feature-card h3 {
                        margin-bottom: 0.5rem;
                        color: #7EB2FF;
                    }

                    .feature-card p {
                        color: #bbb;
                        line-height: 1.5;
                    }

                    .pricing-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 1.5rem;
                        max-width: 760px;
                        margin: 0 auto;
                    }

                    .pricing-card {
                        position: relative;
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(30, 144, 255, 0.15);
                        border-radius: 16px;
                        padding: 2.2rem;
                        text-align: center;
                    }

                    .pricing-card.popular {
                        border-color: rgba(30, 144, 255, 0.5);
                    }

                    .plan-badge {
                        position: absolute;
                        top: -12px;
                        left: 50%;
                        transform: translateX(-50%);
                        background: linear-gradient(45deg, #1E90FF, #4169E1);
                        border-radius: 12px;
                        padding: 2px 14px;
                        font-size: 0.8rem;
                    }

                    .price-line {
                        margin: 1.2rem 0;
                    }

                    .price-line .currency {
                        font-size: 1.4rem;
                        vertical-align: top;
                        color: #7EB2FF;
                    }

                    .price-line .price {
                        font-size: 2.8rem;
                        font-weight: 700;
                    }

                    .price-line .price-term {
                        color: #999;
                    }

                    .plan-list {
                        list-style: none;
                        padding: 0;
                        margin-bottom: 1.8rem;
                        color: #bbb;
                    }

                    .plan-list li {
                        padding: 0.35rem 0;
                    }

                    .plan-cta {
                        width: 100%;
                    }

                    .toast {
                        position: fixed;
                        bottom: 24px;
                        right: 24px;
                        background: rgba(34, 139, 34, 0.95);
                        color: #fff;
                        padding: 14px 20px;
                        border-radius: 8px;
                        box-shadow: 0 4px 16px rgba(0, 0, 0, 0.4);
                        z-index: 300;
                        animation: toast-in 0.3s ease-out;
                    }

                    @keyframes toast-in {
                        from { opacity: 0; transform: translateY(12px); }
                        to { opacity: 1; transform: translateY(0); }
                    }

                    .modal-sub {
                        color: #999;
                        margin-bottom: 1.2rem;
                    }

                    .modal-wide {
                        max-width: 720px;
                    }

                    .modal-wide video {
                        width: 100%;
                        border-radius: 8px;
                        margin-top: 1rem;
                    }

                    .footer-cta {
                        padding: 5rem 2rem;
                        text-align: center;
                        background: linear-gradient(to top, rgba(30, 144, 255, 0.08), transparent);
                    }

                    .footer-content h2 {
                        font-size: 2rem;
                        margin-bottom: 0.8rem;
                    }

                    .footer-content .subtitle {
                        color: #999;
                        margin-bottom: 1.6rem;
                    }

                    .footer-links {
                        display: flex;
                        gap: 1.5rem;
                        justify-content: center;
                        margin: 2rem 0 1rem;
                    }

                    .footer-links a {
                        color: #7EB2FF;
                        text-decoration: none;
                    }

                    .footer-links a:hover {
                        text-decoration: underline;
                    }

                    .fine-print {
                        color: #666;
                        font-size: 0.85rem;
                    }

                    @media (max-width: 768px) {
                        .hero-content h1 {
                            font-size: 2.2rem;
                        }

                        .features, .pricing {
                            padding: 3rem 1rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
