use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Fades content in the first time it scrolls into view. One-directional: once
/// visible the marker stays and the element is unobserved.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let mut observer_handle: Option<IntersectionObserver> = None;
            let mut callback_handle: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>> =
                None;

            if let Some(element) = node.cast::<Element>() {
                let callback = Closure::wrap(Box::new(
                    move |entries: js_sys::Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>()
                                && entry.is_intersecting()
                            {
                                visible.set(true);
                                observer.unobserve(&entry.target());
                            }
                        }
                    },
                )
                    as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(0.1));
                options.set_root_margin("0px 0px -50px 0px");

                if let Ok(observer) = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                ) {
                    observer.observe(&element);
                    observer_handle = Some(observer);
                }
                callback_handle = Some(callback);
            }

            move || {
                if let Some(observer) = observer_handle {
                    observer.disconnect();
                }
                drop(callback_handle);
            }
        });
    }

    html! {
        <div
            ref={node}
            class={classes!("fade-in", (*visible).then_some("visible"), props.class.clone())}
        >
            { for props.children.iter() }
        </div>
    }
}
