use crate::components::nav::AnchorLink;
use crate::components::reveal::Reveal;
use crate::store::{Action, StoreContext};
use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");

    let open_assistant = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(Action::OpenModal))
    };

    html! {
        <header class="header">
            <div class="header-inner">
                <span class="logo">{"ULT"}</span>
                <nav class="header-nav">
                    <AnchorLink href="#features">{"Features"}</AnchorLink>
                    <AnchorLink href="#faq">{"FAQ"}</AnchorLink>
                </nav>
                <button class="ai-toggle btn btn-secondary" onclick={open_assistant}>
                    {"AI Assistant"}
                </button>
            </div>
        </header>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <Reveal>
                <h1>{"Translation that reads like it was written for you"}</h1>
                <p class="hero-subtitle">
                    {"ULT pairs fast neural translation with an assistant you can tune \
                      to your own voice."}
                </p>
                <AnchorLink href="#features" class={classes!("btn", "btn-primary")}>
                    {"See what it does"}
                </AnchorLink>
            </Reveal>
        </section>
    }
}

struct Feature {
    title: &'static str,
    body: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Context-aware",
        body: "Whole-document context, so pronouns, tone and terminology stay \
               consistent from the first line to the last.",
    },
    Feature {
        title: "Your own assistant",
        body: "Bring a prompt, an API key and a base URL; everything stays in your \
               browser.",
    },
    Feature {
        title: "Instant anywhere",
        body: "The site greets you in your own language and the translator follows \
               you across devices.",
    },
];

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id="features" class="features">
            <h2>{"Features"}</h2>
            <div class="feature-grid">
                { for FEATURES.iter().map(|feature| html! {
                    <Reveal class={classes!("feature-card")}>
                        <h3>{ feature.title }</h3>
                        <p>{ feature.body }</p>
                    </Reveal>
                })}
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="footer">
            <p>
                {"© "}
                <span class="current-year">{ year }</span>
                {" ULT. All rights reserved."}
            </p>
        </footer>
    }
}
