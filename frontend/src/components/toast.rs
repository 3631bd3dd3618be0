use crate::store::{Action, StoreContext, Toast};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

pub const AUTO_DISMISS_MS: u32 = 5_000;
pub const EXIT_ANIMATION_MS: u32 = 300;

#[function_component(ToastHost)]
pub fn toast_host() -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");

    html! {
        <div class="notification-area" aria-live="polite">
            { for store.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastItemProps {
    pub toast: Toast,
}

/// One transient notification: auto-dismisses after five seconds or on the close
/// button, playing its exit animation before the store drops it.
#[function_component(ToastItem)]
pub fn toast_item(props: &ToastItemProps) -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");
    let leaving = use_state(|| false);
    let id = props.toast.id;

    let begin_leave = {
        let store = store.clone();
        let leaving = leaving.clone();
        Callback::from(move |_: ()| {
            if *leaving {
                return;
            }
            leaving.set(true);
            let store = store.clone();
            Timeout::new(EXIT_ANIMATION_MS, move || {
                store.dispatch(Action::DismissToast(id));
            })
            .forget();
        })
    };

    // The auto-dismiss timer is dropped (and thereby cancelled) if the toast is
    // closed by hand first.
    {
        let begin_leave = begin_leave.clone();
        use_effect_with((), move |_| {
            let timer = Timeout::new(AUTO_DISMISS_MS, move || begin_leave.emit(()));
            move || drop(timer)
        });
    }

    let on_close = {
        let begin_leave = begin_leave.clone();
        Callback::from(move |_: MouseEvent| begin_leave.emit(()))
    };

    html! {
        <div
            class={classes!("notification", props.toast.kind.class(), (*leaving).then_some("leaving"))}
            role="alert"
        >
            <span>{ &props.toast.message }</span>
            <button class="notification-close" aria-label="Dismiss" onclick={on_close}>{"×"}</button>
        </div>
    }
}
