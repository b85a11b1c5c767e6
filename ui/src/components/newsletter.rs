//! The footer newsletter signup form.

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::components::pico::Button;
use crate::hooks::use_store;

#[derive(Clone, PartialEq, Default)]
enum SubmitState {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

#[component]
pub fn NewsletterForm() -> Element {
    let store = use_store();
    let mut email = use_signal(String::new);
    let mut state = use_signal(SubmitState::default);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let address = email.read().trim().to_string();
        if address.is_empty() {
            return;
        }
        let store = store.clone();
        state.set(SubmitState::Sending);
        spawn(async move {
            match store.subscribe(&address).await {
                Ok(()) => {
                    state.set(SubmitState::Sent);
                    email.set(String::new());
                }
                Err(e) => {
                    tracing::warn!("newsletter signup failed: {e}");
                    state.set(SubmitState::Failed(e.to_string()));
                }
            }
        });
    };

    rsx! {
        form {
            class: "newsletter",
            onsubmit: submit,
            div {
                role: "group",
                input {
                    r#type: "email",
                    placeholder: "Your email address",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                Button {
                    disabled: *state.read() == SubmitState::Sending,
                    "Subscribe"
                }
            }
            match &*state.read() {
                SubmitState::Idle => rsx! {},
                SubmitState::Sending => rsx! { small { "Subscribing…" } },
                SubmitState::Sent => rsx! { small { "Thanks! You're on the list." } },
                SubmitState::Failed(e) => rsx! { small { class: "error", "Could not subscribe: {e}" } },
            }
        }
    }
}
