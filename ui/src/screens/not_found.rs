//=============================================================================
// File: src/screens/not_found.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::Route;

#[allow(non_snake_case)]
#[component]
pub fn NotFoundScreen(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        EmptyState {
            title: "Page not found",
            description: "There is nothing at /{path}.",
            icon: rsx! { span { "🐶" } },
            primary_action: rsx! {
                Link {
                    class: "button",
                    to: Route::HomeScreen {},
                    "Back to the homepage"
                }
            },
        }
    }
}
