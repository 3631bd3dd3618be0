mod components;
mod store;

use components::ai_modal::AiModal;
use components::faq::FaqSection;
use components::landing::{Features, Footer, Header, Hero};
use components::toast::ToastHost;
use store::{State, StoreContext};
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let store = use_reducer(State::default);

    html! {
        <ContextProvider<StoreContext> context={store.clone()}>
            <Header />
            <main>
                <Hero />
                <Features />
                <FaqSection />
            </main>
            <Footer />
            <ToastHost />

            if store.modal_open {
                <AiModal />
            }
        </ContextProvider<StoreContext>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
