//=============================================================================
// File: src/screens/dogs.rs
//=============================================================================
use std::collections::HashMap;

use api::catalog::Dog;
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

/// Coat colors offered by the color filter.
const COLORS: &[&str] = &["Black", "White", "Red", "Cream", "Grey", "Tan"];

/// A single card in the dogs grid.
#[component]
fn DogCard(dog: Dog, breed_name: Option<String>) -> Element {
    let breed = breed_name
        .or_else(|| dog.breed_name.clone())
        .unwrap_or_else(|| "Mixed breed".to_string());

    rsx! {
        Card {
            if let Some(url) = &dog.image_url {
                img { src: "{url}", alt: "{dog.name}", loading: "lazy" }
            }
            h4 {
                Link { to: Route::DogScreen { id: dog.id.clone() }, "{dog.name}" }
            }
            p { class: "muted", "{breed} · {dog.gender} · {dog.color}" }
            PriceTag { price: dog.price }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn DogsScreen(filters: ReadOnlySignal<FilterState>) -> Element {
    let store = use_store();

    let list_store = store.clone();
    let mut dogs = use_resource(move || {
        let store = list_store.clone();
        async move { store.dogs(&filters()).await }
    });

    // Reference data for the breed filter; independent of the filter state,
    // so it loads once per mount.
    let ref_store = store.clone();
    let breeds = use_resource(move || {
        let store = ref_store.clone();
        async move { store.breeds().await }
    });

    let nav = navigator();
    let apply = move |next: FilterState| {
        nav.push(Route::DogsScreen { filters: next });
    };

    rsx! {
        h2 { "Dogs" }
        div {
            class: "listing",
            aside {
                class: "filter-panel",
                label {
                    "Breed"
                    select {
                        value: filters().get("breedId").unwrap_or("").to_string(),
                        onchange: move |evt| apply(filters().set("breedId", &evt.value())),
                        option { value: "", "All breeds" }
                        if let Some(Ok(list)) = &*breeds.read() {
                            for breed in list.iter() {
                                option {
                                    key: "{breed.id}",
                                    value: "{breed.id}",
                                    "{breed.name}"
                                }
                            }
                        }
                    }
                }
                label {
                    "Gender"
                    select {
                        value: filters().get("gender").unwrap_or("").to_string(),
                        onchange: move |evt| apply(filters().set("gender", &evt.value())),
                        option { value: "", "Any" }
                        option { value: "male", "Male" }
                        option { value: "female", "Female" }
                    }
                }
                fieldset {
                    legend { "Color" }
                    for color in COLORS {
                        label {
                            key: "{color}",
                            input {
                                r#type: "checkbox",
                                checked: filters().contains("color", color),
                                onchange: move |_| apply(filters().toggle("color", color)),
                            }
                            "{color}"
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
                match &*dogs.read() {
                    None => rsx! {
                        Card {
                            p { "Loading..." }
                            progress {}
                        }
                    },
                    Some(Err(e)) => rsx! {
                        Card {
                            h3 { "Error" }
                            p { "Failed to load dogs: {e}" }
                            button { onclick: move |_| dogs.restart(), "Retry" }
                        }
                    },
                    Some(Ok(page)) => {
                        let breed_names: HashMap<String, String> = match &*breeds.read() {
                            Some(Ok(list)) => list
                                .iter()
                                .map(|b| (b.id.clone(), b.name.clone()))
                                .collect(),
                            _ => HashMap::new(),
                        };
                        rsx! {
                            if page.items.is_empty() {
                                EmptyState {
                                    title: "No dogs match these filters",
                                    description: "Try removing a filter or two.",
                                    icon: rsx! { span { "🐾" } },
                                }
                            } else {
                                Grid {
                                    for dog in page.items.iter() {
                                        DogCard {
                                            key: "{dog.id}",
                                            dog: dog.clone(),
                                            breed_name: breed_names.get(&dog.breed_id).cloned(),
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
}
