//=============================================================================
// File: src/screens/products.rs
//=============================================================================
use api::catalog::Product;
use api::FilterState;
use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::pagination::Pagination;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::price::PriceTag;
use crate::hooks::use_store;
use crate::Route;

/// Sizes offered by the size filter.
const SIZES: &[&str] = &["S", "M", "L", "XL"];

#[component]
fn ProductCard(product: Product) -> Element {
    rsx! {
        Card {
            if let Some(url) = &product.image_url {
                img { src: "{url}", alt: "{product.name}", loading: "lazy" }
            }
            h4 {
                Link { to: Route::ProductScreen { id: product.id.clone() }, "{product.name}" }
            }
            p { class: "muted", "{product.category}" }
            PriceTag { price: product.price }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn ProductsScreen(filters: ReadOnlySignal<FilterState>) -> Element {
    let store = use_store();

    let list_store = store.clone();
    let mut products = use_resource(move || {
        let store = list_store.clone();
        async move { store.products(&filters()).await }
    });

    // Loads once per mount; the category list does not depend on filters.
    let ref_store = store.clone();
    let categories = use_resource(move || {
        let store = ref_store.clone();
        async move { store.categories().await }
    });

    let nav = navigator();
    let apply = move |next: FilterState| {
        nav.push(Route::ProductsScreen { filters: next });
    };

    rsx! {
        h2 { "Products" }
        div {
            class: "listing",
            aside {
                class: "filter-panel",
                label {
                    "Category"
                    select {
                        value: filters().get("category").unwrap_or("").to_string(),
                        onchange: move |evt| apply(filters().set("category", &evt.value())),
                        option { value: "", "All categories" }
                        if let Some(Ok(list)) = &*categories.read() {
                            for category in list.iter() {
                                option {
                                    key: "{category.id}",
                                    value: "{category.id}",
                                    "{category.name}"
                                }
                            }
                        }
                    }
                }
                fieldset {
                    legend { "Size" }
                    for size in SIZES {
                        label {
                            key: "{size}",
                            input {
                                r#type: "checkbox",
                                checked: filters().contains("size", size),
                                onchange: move |_| apply(filters().toggle("size", size)),
                            }
                            "{size}"
                        }
                    }
                }
                label {
                    "Min price"
                    input {
                        r#type: "number",
                        min: "0",
                        value: filters().get("minPrice").unwrap_or("").to_string(),
                        onchange: move |evt| apply(filters().set("minPrice", &evt.value())),
                    }
                }
                label {
                    "Max price"
                    input {
                        r#type: "number",
                        min: "0",
                        value: filters().get("maxPrice").unwrap_or("").to_string(),
                        onchange: move |evt| apply(filters().set("maxPrice", &evt.value())),
                    }
                }
                if !filters().is_empty() {
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: move |_| apply(FilterState::clear_all()),
                        "Clear all filters"
                    }
                }
            }
            section {
                class: "results",
                match &*products.read() {
                    None => rsx! {
                        Card {
                            p { "Loading..." }
                            progress {}
                        }
                    },
                    Some(Err(e)) => rsx! {
                        Card {
                            h3 { "Error" }
                            p { "Failed to load products: {e}" }
                            button { onclick: move |_| products.restart(), "Retry" }
                        }
                    },
                    Some(Ok(page)) => rsx! {
                        if page.items.is_empty() {
                            EmptyState {
                                title: "No products match these filters",
                                description: "Try removing a filter or two.",
                                icon: rsx! { span { "🛒" } },
                            }
                        } else {
                            Grid {
                                for product in page.items.iter() {
                                    ProductCard {
                                        key: "{product.id}",
                                        product: product.clone(),
                                    }
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
    }
}
