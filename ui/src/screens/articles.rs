//=============================================================================
// File: src/screens/articles.rs
//=============================================================================
use api::article::Article;
use api::FilterState;
use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::pagination::Pagination;
use crate::components::pico::Card;
use crate::hooks::use_store;
use crate::Route;

#[component]
fn ArticleRow(article: Article) -> Element {
    rsx! {
        Card {
            h4 {
                Link { to: Route::ArticleScreen { id: article.id.clone() }, "{article.title}" }
            }
            if let Some(date) = &article.published_at {
                small { class: "muted", "{date}" }
            }
            if let Some(excerpt) = &article.excerpt {
                p { "{excerpt}" }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn ArticlesScreen(filters: ReadOnlySignal<FilterState>) -> Element {
    let store = use_store();
    let mut articles = use_resource(move || {
        let store = store.clone();
        async move { store.articles(&filters()).await }
    });

    // The input is local state; only submitting it touches the URL.
    let mut search_input = use_signal(|| filters().get("q").unwrap_or("").to_string());

    let nav = navigator();
    let apply = move |next: FilterState| {
        nav.push(Route::ArticlesScreen { filters: next });
    };

    rsx! {
        h2 { "Articles" }
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                apply(filters().set("q", search_input.read().trim()));
            },
            div {
                role: "group",
                input {
                    r#type: "search",
                    placeholder: "Search articles",
                    value: "{search_input}",
                    oninput: move |evt| search_input.set(evt.value()),
                }
                button { r#type: "submit", "Search" }
            }
        }
        match &*articles.read() {
            None => rsx! {
                Card {
                    p { "Loading..." }
                    progress {}
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to load articles: {e}" }
                    button { onclick: move |_| articles.restart(), "Retry" }
                }
            },
            Some(Ok(page)) => rsx! {
                if page.items.is_empty() {
                    EmptyState {
                        title: "No articles found",
                        description: "Try a different search term.",
                        icon: rsx! { span { "📰" } },
                    }
                } else {
                    for article in page.items.iter() {
                        ArticleRow {
                            key: "{article.id}",
                            article: article.clone(),
                        }
                    }
                }
                Pagination {
                    current: filters().page(),
                    total: page.total_pages,
                    on_navigate: move |page| apply(filters().with_page(page)),
                }
            }
        }
    }
}
