// ui/src/components/currency_chooser.rs
#![allow(non_snake_case)]

use api::currency::Currency;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::hooks::use_currency;

/// A dropdown for selecting the global display currency.
///
/// Writes the one shared currency signal; every `PriceTag` on screen
/// re-renders when the selection changes.
pub fn CurrencyChooser() -> Element {
    let mut currency = use_currency();
    let mut is_open = use_signal(|| false);

    let selected = *currency.read();

    rsx! {
        div {
            class: "currency-chooser",
            button {
                class: "secondary outline currency-toggle",
                title: "Choose display currency. Prices are stored in {Currency::default().name()}.",
                onclick: move |_| is_open.toggle(),
                "{selected.flag()} {selected.code()} ↓"
            }
            if is_open() {
                // Backdrop to catch clicks outside the dropdown
                div {
                    class: "dropdown-backdrop",
                    onclick: move |_| is_open.set(false),
                }
                ul {
                    role: "listbox",
                    class: "currency-menu",
                    onclick: |e| e.stop_propagation(),
                    for option in Currency::iter() {
                        li {
                            key: "{option.code()}",
                            class: if option == selected { "selected" } else { "" },
                            onclick: move |_| {
                                currency.set(option);
                                is_open.set(false);
                            },
                            span {
                                class: "currency-check",
                                if option == selected { "✓" } else { "" }
                            }
                            span { "{option.flag()} {option.code()} – {option.name()}" }
                        }
                    }
                }
            }
        }
    }
}
