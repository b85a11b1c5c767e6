//=============================================================================
// File: src/screens/product.rs
//=============================================================================
use api::FilterState;
use dioxus::prelude::*;

use crate::components::pico::Card;
use crate::components::price::PriceTag;
use crate::hooks::use_store;
use crate::Route;

#[allow(non_snake_case)]
#[component]
pub fn ProductScreen(id: ReadOnlySignal<String>) -> Element {
    let store = use_store();
    let mut product = use_resource(move || {
        let store = store.clone();
        async move { store.product(&id()).await }
    });

    rsx! {
        match &*product.read() {
            None => rsx! {
                Card {
                    p { "Loading..." }
                    progress {}
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to load product: {e}" }
                    button { onclick: move |_| product.restart(), "Retry" }
                }
            },
            Some(Ok(product)) => {
                let enquiry = FilterState::clear_all()
                    .set("interestUuid", &product.id)
                    .set("isDog", "false");
                let sizes = product.sizes.join(", ");
                rsx! {
                    Card {
                        if let Some(url) = &product.image_url {
                            img { src: "{url}", alt: "{product.name}" }
                        }
                        h2 { "{product.name}" }
                        p { class: "muted", "{product.category}" }
                        if !product.sizes.is_empty() {
                            p { "Sizes: {sizes}" }
                        }
                        h3 { PriceTag { price: product.price } }
                        if let Some(description) = &product.description {
                            p { "{description}" }
                        }
                        Link {
                            class: "button",
                            to: Route::ContactScreen { filters: enquiry },
                            "Ask about this product"
                        }
                    }
                }
            }
        }
    }
}
