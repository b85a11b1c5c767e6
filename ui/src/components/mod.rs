//! The components module contains all shared components for our app.
//! Components are the building blocks of dioxus apps.
pub mod currency_chooser;
pub mod empty_state;
pub mod newsletter;
pub mod pagination;
pub mod pico;
pub mod price;
