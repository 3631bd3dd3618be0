use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

/// Breathing room left between the fixed header and the scrolled-to section.
pub const SCROLL_GAP: i32 = 20;

/// Scroll position for an in-page target: the element's top minus the fixed
/// header and a small gap, floored at the document start.
pub fn scroll_target_top(element_top: i32, header_height: i32) -> f64 {
    f64::from((element_top - header_height - SCROLL_GAP).max(0))
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    /// Same-page fragment, e.g. `#faq`.
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Smooth-scrolls to a same-page anchor instead of jumping, then updates the URL
/// fragment without navigating.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let Some(id) = href.strip_prefix('#') else {
                return;
            };
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(document) = window.document() else {
                return;
            };
            let Some(target) = document.get_element_by_id(id) else {
                return;
            };

            let header_height = document
                .query_selector(".header")
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                .map(|el| el.offset_height())
                .unwrap_or(0);
            let element_top = target
                .dyn_into::<HtmlElement>()
                .map(|el| el.offset_top())
                .unwrap_or(0);

            let options = ScrollToOptions::new();
            options.set_top(scroll_target_top(element_top, header_height));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);

            if let Ok(history) = window.history() {
                let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&format!("#{id}")));
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_sits_below_the_fixed_header() {
        assert_eq!(scroll_target_top(500, 64), 416.0);
    }

    #[test]
    fn targets_near_the_top_do_not_scroll_negative() {
        assert_eq!(scroll_target_top(10, 64), 0.0);
    }
}
