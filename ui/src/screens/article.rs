//=============================================================================
// File: src/screens/article.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::pico::Card;
use crate::hooks::use_store;

#[allow(non_snake_case)]
#[component]
pub fn ArticleScreen(id: ReadOnlySignal<String>) -> Element {
    let store = use_store();
    let mut article = use_resource(move || {
        let store = store.clone();
        async move { store.article(&id()).await }
    });

    rsx! {
        match &*article.read() {
            None => rsx! {
                Card {
                    p { "Loading..." }
                    progress {}
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to load article: {e}" }
                    button { onclick: move |_| article.restart(), "Retry" }
                }
            },
            Some(Ok(article)) => rsx! {
                Card {
                    h2 { "{article.title}" }
                    if let Some(date) = &article.published_at {
                        small { class: "muted", "{date}" }
                    }
                    if let Some(url) = &article.image_url {
                        img { src: "{url}", alt: "{article.title}" }
                    }
                    if let Some(content) = &article.content {
                        p { white_space: "pre-wrap", "{content}" }
                    } else if let Some(excerpt) = &article.excerpt {
                        p { "{excerpt}" }
                    }
                }
            }
        }
    }
}
