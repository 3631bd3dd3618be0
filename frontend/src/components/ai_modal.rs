use crate::store::{Action, CONFIG_STORAGE_KEY, StoreContext, ToastKind};
use gloo_events::EventListener;
use gloo_storage::{LocalStorage, Storage};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlTextAreaElement, KeyboardEvent};
use yew::prelude::*;

/// How long the success toast is shown before the modal closes itself.
const SAVE_CLOSE_DELAY_MS: u32 = 1_000;

#[function_component(AiModal)]
pub fn ai_modal() -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");

    // Local state for form fields to avoid global dispatch on every keystroke
    let local = use_state(|| store.ai_config.clone());
    let first_input = use_node_ref();

    // Scroll lock, initial focus and the document-level Escape listener live for
    // exactly as long as the modal; the effect cleanup runs on every exit path,
    // so the listener can never outlive the dialog.
    {
        let store = store.clone();
        let first_input = first_input.clone();
        use_effect_with((), move |_| {
            let document = web_sys::window().and_then(|w| w.document());

            if let Some(body) = document.as_ref().and_then(|d| d.body()) {
                let _ = body.style().set_property("overflow", "hidden");
            }
            if let Some(input) = first_input.cast::<HtmlTextAreaElement>() {
                let _ = input.focus();
            }

            let escape = document.as_ref().map(|document| {
                let store = store.clone();
                EventListener::new(document, "keydown", move |event| {
                    if let Some(event) = event.dyn_ref::<KeyboardEvent>()
                        && event.key() == "Escape"
                    {
                        store.dispatch(Action::CloseModal);
                    }
                })
            });

            move || {
                drop(escape);
                let document = web_sys::window().and_then(|w| w.document());
                if let Some(body) = document.as_ref().and_then(|d| d.body()) {
                    let _ = body.style().set_property("overflow", "");
                }
                // Hand focus back to the control that opened the dialog.
                if let Some(toggle) = document
                    .and_then(|d| d.query_selector(".ai-toggle").ok().flatten())
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                {
                    let _ = toggle.focus();
                }
            }
        });
    }

    let on_cancel = {
        let store = store.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            store.dispatch(Action::CloseModal);
        })
    };

    let on_overlay_click = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(Action::CloseModal))
    };

    let on_prompt_input = {
        let local = local.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut config = (*local).clone();
            config.prompt = input.value();
            local.set(config);
        })
    };

    let on_api_key_input = {
        let local = local.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut config = (*local).clone();
            config.api_key = input.value();
            local.set(config);
        })
    };

    let on_base_url_input = {
        let local = local.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut config = (*local).clone();
            config.base_url = input.value();
            local.set(config);
        })
    };

    // Storage failures surface as a toast; the page itself keeps working.
    let on_save = {
        let store = store.clone();
        let local = local.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let config = (*local).clone();
            match LocalStorage::set(CONFIG_STORAGE_KEY, &config) {
                Ok(()) => {
                    store.dispatch(Action::SetConfig(config));
                    store.dispatch(Action::PushToast {
                        message: "Settings saved".into(),
                        kind: ToastKind::Success,
                    });
                    let store = store.clone();
                    Timeout::new(SAVE_CLOSE_DELAY_MS, move || {
                        store.dispatch(Action::CloseModal);
                    })
                    .forget();
                }
                Err(err) => {
                    tracing::error!("failed to persist AI assistant settings: {err}");
                    store.dispatch(Action::PushToast {
                        message: "Save failed, please retry".into(),
                        kind: ToastKind::Error,
                    });
                }
            }
        })
    };

    html! {
        <div class="ai-modal-overlay" onclick={on_overlay_click}>
            <div
                class="ai-modal"
                role="dialog"
                aria-modal="true"
                aria-label="AI assistant settings"
                onclick={|e: MouseEvent| e.stop_propagation()}
            >
                <div class="modal-header">
                    <h2 class="modal-title">{"AI Assistant"}</h2>
                    <button class="close-btn" aria-label="Close" onclick={on_cancel.clone()}>{"×"}</button>
                </div>

                <div class="modal-body">
                    <div class="form-group">
                        <label class="form-label" for="ai-prompt">{"Prompt"}</label>
                        <textarea id="ai-prompt" class="form-input" ref={first_input}
                            value={local.prompt.clone()}
                            oninput={on_prompt_input}
                            placeholder="How should the assistant translate for you?"
                        />
                    </div>

                    <div class="form-group">
                        <label class="form-label" for="ai-api-key">{"API Key"}</label>
                        <input id="ai-api-key" type="password" class="form-input"
                            value={local.api_key.clone()}
                            oninput={on_api_key_input}
                            placeholder="sk-..."
                        />
                    </div>

                    <div class="form-group">
                        <label class="form-label" for="ai-base-url">{"API Base URL"}</label>
                        <input id="ai-base-url" type="text" class="form-input"
                            value={local.base_url.clone()}
                            oninput={on_base_url_input}
                            placeholder="https://api.example.com/v1"
                        />
                    </div>

                    <div class="form-actions">
                        <button class="btn btn-secondary" onclick={on_cancel}>{"Cancel"}</button>
                        <button class="btn btn-primary ai-save-btn" onclick={on_save}>{"Save"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
