//=============================================================================
// File: src/screens/contact.rs
//=============================================================================
use api::contact::ContactRequest;
use api::FilterState;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Field;
use crate::hooks::use_store;

#[derive(Clone, PartialEq, Default)]
enum SubmitState {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

#[allow(non_snake_case)]
#[component]
pub fn ContactScreen(filters: ReadOnlySignal<FilterState>) -> Element {
    let store = use_store();

    let mut full_name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut state = use_signal(String::new);
    let mut submit_state = use_signal(SubmitState::default);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        // Enquiry context arrives through the query string when the shopper
        // comes from a dog or product page.
        let current = filters();
        let request = ContactRequest {
            full_name: full_name.read().trim().to_string(),
            phone: phone.read().trim().to_string(),
            email: email.read().trim().to_string(),
            city: city.read().trim().to_string(),
            state: state.read().trim().to_string(),
            is_dog: current.get("isDog").map(|v| v == "true"),
            interest_uuid: current.get("interestUuid").map(str::to_string),
        };
        if request.full_name.is_empty() || request.email.is_empty() {
            return;
        }
        let store = store.clone();
        submit_state.set(SubmitState::Sending);
        spawn(async move {
            match store.submit_contact(&request).await {
                Ok(()) => submit_state.set(SubmitState::Sent),
                Err(e) => {
                    tracing::warn!("contact submission failed: {e}");
                    submit_state.set(SubmitState::Failed(e.to_string()));
                }
            }
        });
    };

    rsx! {
        h2 { "Contact us" }
        Card {
            if filters().get("interestUuid").is_some() {
                p {
                    class: "muted",
                    "We'll attach your enquiry to the item you were viewing."
                }
            }
            match &*submit_state.read() {
                SubmitState::Sent => rsx! {
                    p { "Thanks! We received your message and will be in touch shortly." }
                },
                other => {
                    let sending = *other == SubmitState::Sending;
                    rsx! {
                        form {
                            onsubmit: submit,
                            Field {
                                label: "Full name",
                                name: "fullName",
                                required: true,
                                value: "{full_name}",
                                on_input: move |evt: FormEvent| full_name.set(evt.value()),
                            }
                            Field {
                                label: "Phone",
                                name: "phone",
                                input_type: "tel",
                                value: "{phone}",
                                on_input: move |evt: FormEvent| phone.set(evt.value()),
                            }
                            Field {
                                label: "Email",
                                name: "email",
                                input_type: "email",
                                required: true,
                                value: "{email}",
                                on_input: move |evt: FormEvent| email.set(evt.value()),
                            }
                            Field {
                                label: "City",
                                name: "city",
                                value: "{city}",
                                on_input: move |evt: FormEvent| city.set(evt.value()),
                            }
                            Field {
                                label: "State / Province",
                                name: "state",
                                value: "{state}",
                                on_input: move |evt: FormEvent| state.set(evt.value()),
                            }
                            Button {
                                disabled: sending,
                                if sending { "Sending…" } else { "Send message" }
                            }
                        }
                        if let SubmitState::Failed(e) = other {
                            p { class: "error", "Could not send your message: {e}" }
                        }
                    }
                }
            }
        }
    }
}
