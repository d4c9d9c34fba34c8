use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    open: bool,
    on_toggle: Callback<()>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    // Single-open accordion: opening an item closes every other one, and
    // clicking the open item again closes it too.
    let open = use_state(|| None::<usize>);

    let toggle = |index: usize| {
        let open = open.clone();
        Callback::from(move |_| {
            open.set(if *open == Some(index) { None } else { Some(index) });
        })
    };

    let questions: Vec<(&str, Html)> = vec![
        (
            "Does StockPilot work without an internet connection?",
            html! {
                <p>{"Yes. Sales, stock adjustments and receipts all run fully offline. \
                     When a connection comes back, StockPilot syncs your records in the \
                     background so reports stay up to date across registers."}</p>
            },
        ),
        (
            "Which computers can run it?",
            html! {
                <p>{"Any Windows 10 or 11 machine from the last decade. It is a light \
                     desktop app, so the modest PCs most shops already own are more than \
                     enough. No server and no extra hardware required."}</p>
            },
        ),
        (
            "Can I use my existing barcode scanner and printer?",
            html! {
                <p>{"Almost certainly. StockPilot speaks to standard USB barcode scanners \
                     out of the box and prints receipts to any installed Windows printer, \
                     including 58mm and 80mm thermal printers."}</p>
            },
        ),
        (
            "What happens when my subscription ends?",
            html! {
                <p>{"Your data stays yours. The app keeps opening in read-only mode so you \
                     can view and export everything; renewing switches selling back on the \
                     moment payment clears."}</p>
            },
        ),
        (
            "Is there a free trial?",
            html! {
                <p>{"Every download starts a 14-day trial with all features switched on. \
                     No card details are needed to try it."}</p>
            },
        ),
        (
            "How do I get help setting up?",
            html! {
                <p>{"Request the app through the form on this page and our onboarding team \
                     will reach out within one business day to walk your staff through \
                     first setup, usually in under an hour."}</p>
            },
        ),
    ];

    html! {
        <section class="faq-section" id="faq">
            <div class="section-head">
                <h2>{"Frequently asked questions"}</h2>
            </div>
            {
                for questions.into_iter().enumerate().map(|(index, (question, answer))| {
                    html! {
                        <FaqItem
                            key={index}
                            question={question.to_string()}
                            open={*open == Some(index)}
                            on_toggle={toggle(index)}
                        >
                            { answer }
                        </FaqItem>
                    }
                })
            }

            <style>
                {r#"
                .faq-section {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                }

                .faq-section h2 {
                    font-size: 2.2rem;
                    margin-bottom: 2rem;
                }

                .faq-item {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.12);
                    border-radius: 10px;
                    margin-bottom: 0.9rem;
                    overflow: hidden;
                }

                .faq-item:hover {
                    border-color: rgba(30, 144, 255, 0.35);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.1rem 1.3rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.05rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                }

                .toggle-icon {
                    color: #7EB2FF;
                    font-size: 1.4rem;
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.4s ease;
                    padding: 0 1.3rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 400px;
                    padding: 0 1.3rem 1.2rem;
                }

                .faq-answer p {
                    color: #bbb;
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}
