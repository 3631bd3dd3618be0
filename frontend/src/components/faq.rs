use crate::store::{Action, StoreContext};
use yew::prelude::*;

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "Which languages does ULT translate?",
        answer: "Over 100 languages, with tuned models for Chinese-English in both \
                 directions. The site itself ships in Chinese and English.",
    },
    FaqEntry {
        question: "Do I need my own API key?",
        answer: "No. Out of the box ULT uses our hosted models. If you prefer your own \
                 provider, open the AI assistant settings and paste a key and base URL.",
    },
    FaqEntry {
        question: "Where are my assistant settings stored?",
        answer: "Only in your browser's local storage. Nothing is sent to our servers, \
                 and clearing site data removes them.",
    },
    FaqEntry {
        question: "Is there a free tier?",
        answer: "Yes, the free tier covers everyday translation. Paid plans add batch \
                 documents and glossary support.",
    },
];

/// Accordion with an exclusive-open invariant: the store tracks a single open
/// index, so expanding one item collapses its siblings by construction.
#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    html! {
        <section id="faq" class="faq-section">
            <h2>{"Frequently Asked Questions"}</h2>
            <div class="faq-list">
                { for FAQ_ENTRIES.iter().enumerate().map(|(index, entry)| html! {
                    <FaqItem {index} question={entry.question} answer={entry.answer} />
                })}
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub index: usize,
    pub question: AttrValue,
    pub answer: AttrValue,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");
    let is_open = store.faq_open == Some(props.index);

    let toggle = {
        let store = store.clone();
        let index = props.index;
        Callback::from(move |_: MouseEvent| store.dispatch(Action::ToggleFaq(index)))
    };

    let on_keydown = {
        let store = store.clone();
        let index = props.index;
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                store.dispatch(Action::ToggleFaq(index));
            }
        })
    };

    html! {
        <div class={classes!("faq-item", is_open.then_some("open"))}>
            <button
                class="faq-question"
                aria-expanded={is_open.to_string()}
                onclick={toggle}
                onkeydown={on_keydown}
            >
                <span class="question-text">{ &props.question }</span>
                <span class="faq-toggle">{ if is_open { "−" } else { "+" } }</span>
            </button>
            <div class="faq-answer" aria-hidden={(!is_open).to_string()}>
                <p>{ &props.answer }</p>
            </div>
        </div>
    }
}
