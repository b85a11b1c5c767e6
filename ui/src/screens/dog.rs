//=============================================================================
// File: src/screens/dog.rs
//=============================================================================
use api::FilterState;
use dioxus::prelude::*;

use crate::components::pico::Card;
use crate::components::price::PriceTag;
use crate::hooks::use_store;
use crate::Route;

#[allow(non_snake_case)]
#[component]
pub fn DogScreen(id: ReadOnlySignal<String>) -> Element {
    let store = use_store();
    let mut dog = use_resource(move || {
        let store = store.clone();
        async move { store.dog(&id()).await }
    });

    rsx! {
        match &*dog.read() {
            None => rsx! {
                Card {
                    p { "Loading..." }
                    progress {}
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to load dog: {e}" }
                    button { onclick: move |_| dog.restart(), "Retry" }
                }
            },
            Some(Ok(dog)) => {
                let enquiry = FilterState::clear_all()
                    .set("interestUuid", &dog.id)
                    .set("isDog", "true");
                let breed = dog.breed_name.as_deref().unwrap_or("Mixed breed");
                rsx! {
                    Card {
                        if let Some(url) = &dog.image_url {
                            img { src: "{url}", alt: "{dog.name}" }
                        }
                        h2 { "{dog.name}" }
                        p { class: "muted", "{breed} · {dog.gender} · {dog.color}" }
                        if let Some(age) = dog.age_months {
                            p { "Age: {age} months" }
                        }
                        h3 { PriceTag { price: dog.price } }
                        if let Some(description) = &dog.description {
                            p { "{description}" }
                        }
                        Link {
                            class: "button",
                            to: Route::ContactScreen { filters: enquiry },
                            "Ask about {dog.name}"
                        }
                    }
                }
            }
        }
    }
}
