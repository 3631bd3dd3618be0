use gloo_storage::{LocalStorage, Storage};
use shared::models::AiConfig;
use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

/// Key the AI assistant config has always been stored under.
pub const CONFIG_STORAGE_KEY: &str = "ult-ai-config";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "notification-success",
            ToastKind::Error => "notification-error",
            ToastKind::Info => "notification-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, Debug, PartialEq)]
pub struct State {
    /// Index of the open FAQ item. `Option` makes exclusive-open structural:
    /// there is no state in which two items are expanded.
    pub faq_open: Option<usize>,
    pub modal_open: bool,
    pub ai_config: AiConfig,
    pub toasts: Vec<Toast>,
}

impl Default for State {
    fn default() -> Self {
        let ai_config =
            LocalStorage::get(CONFIG_STORAGE_KEY).unwrap_or_else(|_| AiConfig::default());
        Self {
            faq_open: None,
            modal_open: false,
            ai_config,
            toasts: Vec::new(),
        }
    }
}

pub enum Action {
    ToggleFaq(usize),
    OpenModal,
    CloseModal,
    SetConfig(AiConfig),
    PushToast { message: String, kind: ToastKind },
    DismissToast(Uuid),
}

impl Reducible for State {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            Action::ToggleFaq(index) => {
                // Opening an item closes whichever sibling was open.
                next.faq_open = if next.faq_open == Some(index) {
                    None
                } else {
                    Some(index)
                };
            }
            Action::OpenModal => {
                next.modal_open = true;
            }
            Action::CloseModal => {
                next.modal_open = false;
            }
            Action::SetConfig(config) => {
                next.ai_config = config;
            }
            Action::PushToast { message, kind } => {
                next.toasts.push(Toast {
                    id: Uuid::new_v4(),
                    message,
                    kind,
                });
            }
            Action::DismissToast(id) => {
                next.toasts.retain(|t| t.id != id);
            }
        }

        next.into()
    }
}

pub type StoreContext = UseReducerHandle<State>;

#[cfg(test)]
mod tests {
    use super::*;

    // Built by hand instead of `State::default()` so the tests stay off browser
    // storage.
    fn state() -> Rc<State> {
        Rc::new(State {
            faq_open: None,
            modal_open: false,
            ai_config: AiConfig::default(),
            toasts: Vec::new(),
        })
    }

    #[test]
    fn opening_one_faq_item_closes_the_other() {
        let state = state()
            .reduce(Action::ToggleFaq(0))
            .reduce(Action::ToggleFaq(1));
        assert_eq!(state.faq_open, Some(1));
    }

    #[test]
    fn toggling_the_open_faq_item_closes_it() {
        let state = state()
            .reduce(Action::ToggleFaq(2))
            .reduce(Action::ToggleFaq(2));
        assert_eq!(state.faq_open, None);
    }

    #[test]
    fn modal_open_and_close_round_trip() {
        let state = state().reduce(Action::OpenModal);
        assert!(state.modal_open);
        let state = state.reduce(Action::CloseModal);
        assert!(!state.modal_open);
    }

    #[test]
    fn dismissing_a_toast_removes_only_that_toast() {
        let state = state()
            .reduce(Action::PushToast {
                message: "first".into(),
                kind: ToastKind::Success,
            })
            .reduce(Action::PushToast {
                message: "second".into(),
                kind: ToastKind::Error,
            });
        assert_eq!(state.toasts.len(), 2);

        let first_id = state.toasts[0].id;
        let state = state.reduce(Action::DismissToast(first_id));
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].message, "second");
    }

    #[test]
    fn saving_config_replaces_the_stored_one() {
        let config = AiConfig {
            prompt: "translate casually".into(),
            api_key: "sk-2".into(),
            base_url: String::new(),
        };
        let state = state().reduce(Action::SetConfig(config.clone()));
        assert_eq!(state.ai_config, config);
    }
}
