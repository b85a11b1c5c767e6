// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
mod components;
pub mod hooks;
mod screens;

use api::currency::Currency;
use api::FilterState;
use app_state::AppState;
use app_state_mut::AppStateMut;
use components::currency_chooser::CurrencyChooser;
use components::newsletter::NewsletterForm;
use screens::article::ArticleScreen;
use screens::articles::ArticlesScreen;
use screens::contact::ContactScreen;
use screens::dog::DogScreen;
use screens::dogs::DogsScreen;
use screens::home::HomeScreen;
use screens::not_found::NotFoundScreen;
use screens::product::ProductScreen;
use screens::products::ProductsScreen;

/// The application's routes. Listing routes carry their filter state in the
/// query string — the query string, not component state, is what a screen's
/// filters are reconstructed from on every render, so back/forward and
/// shared links just work.
#[derive(Clone, PartialEq, Debug, Routable)]
pub enum Route {
    #[layout(StoreLayout)]
    #[route("/")]
    HomeScreen {},

    #[route("/dogs?:..filters")]
    DogsScreen { filters: FilterState },
    #[route("/dogs/:id")]
    DogScreen { id: String },

    #[route("/products?:..filters")]
    ProductsScreen { filters: FilterState },
    #[route("/products/:id")]
    ProductScreen { id: String },

    #[route("/articles?:..filters")]
    ArticlesScreen { filters: FilterState },
    #[route("/articles/:id")]
    ArticleScreen { id: String },

    #[route("/contact?:..filters")]
    ContactScreen { filters: FilterState },

    #[route("/:..segments")]
    NotFoundScreen { segments: Vec<String> },
}

/// The shared frame around every screen: header navigation, content outlet,
/// footer. Also the single place the shared state contexts are provided.
#[component]
fn StoreLayout() -> Element {
    // Stable, non-reactive state: the REST client handle.
    use_context_provider(AppState::new);

    // Mutable, reactive state: the one process-wide currency selection.
    let currency = use_signal(Currency::default);
    use_context_provider(|| AppStateMut { currency });

    rsx! {
        header {
            class: "container",
            nav {
                ul {
                    li {
                        Link {
                            to: Route::HomeScreen {},
                            strong { "🐕 Pawmart" }
                        }
                    }
                }
                ul {
                    li { Link { to: Route::DogsScreen { filters: FilterState::default() }, "Dogs" } }
                    li { Link { to: Route::ProductsScreen { filters: FilterState::default() }, "Products" } }
                    li { Link { to: Route::ArticlesScreen { filters: FilterState::default() }, "Articles" } }
                    li { Link { to: Route::ContactScreen { filters: FilterState::default() }, "Contact" } }
                    li { CurrencyChooser {} }
                }
            }
        }
        main {
            class: "container content",
            Outlet::<Route> {}
        }
        footer {
            class: "container",
            div {
                class: "footer-columns",
                div {
                    h5 { "Pawmart" }
                    p { class: "muted", "Dogs, food, toys and advice — all in one place." }
                }
                div {
                    h5 { "Stay in touch" }
                    NewsletterForm {}
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: asset!("/assets/css/storefront.css"),
        }
        Router::<Route> {}
    }
}
