//=============================================================================
// File: src/screens/home.rs
//=============================================================================
use api::FilterState;
use dioxus::prelude::*;

use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::price::PriceTag;
use crate::hooks::use_store;
use crate::Route;

#[allow(non_snake_case)]
#[component]
pub fn HomeScreen() -> Element {
    let store = use_store();

    // First page of each catalog, unfiltered. These do not depend on any
    // filter state and load once per mount.
    let dogs_store = store.clone();
    let featured_dogs = use_resource(move || {
        let store = dogs_store.clone();
        async move { store.dogs(&FilterState::default()).await }
    });

    let articles_store = store.clone();
    let latest_articles = use_resource(move || {
        let store = articles_store.clone();
        async move { store.articles(&FilterState::default()).await }
    });

    rsx! {
        section {
            class: "hero",
            h1 { "Find your new best friend" }
            p { "Puppies from trusted breeders, plus everything they need at home." }
            Link { class: "button", to: Route::DogsScreen { filters: FilterState::default() }, "Browse dogs" }
        }
        h3 { "Featured dogs" }
        match &*featured_dogs.read() {
            None => rsx! { progress {} },
            Some(Err(e)) => rsx! { p { class: "error", "Failed to load featured dogs: {e}" } },
            Some(Ok(page)) => rsx! {
                Grid {
                    for dog in page.items.iter().take(4) {
                        Card {
                            key: "{dog.id}",
                            if let Some(url) = &dog.image_url {
                                img { src: "{url}", alt: "{dog.name}", loading: "lazy" }
                            }
                            h4 {
                                Link { to: Route::DogScreen { id: dog.id.clone() }, "{dog.name}" }
                            }
                            PriceTag { price: dog.price }
                        }
                    }
                }
            }
        }
        h3 { "From our blog" }
        match &*latest_articles.read() {
            None => rsx! { progress {} },
            Some(Err(e)) => rsx! { p { class: "error", "Failed to load articles: {e}" } },
            Some(Ok(page)) => rsx! {
                for article in page.items.iter().take(3) {
                    Card {
                        key: "{article.id}",
                        h4 {
                            Link { to: Route::ArticleScreen { id: article.id.clone() }, "{article.title}" }
                        }
                        if let Some(excerpt) = &article.excerpt {
                            p { "{excerpt}" }
                        }
                    }
                }
            }
        }
    }
}
