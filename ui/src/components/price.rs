//! A component for displaying catalog prices in the selected currency.

use api::currency::BASE_CURRENCY;
use api::money::Price;
use dioxus::prelude::*;

use crate::hooks::use_currency;

/// Renders a price in the shopper's chosen display currency.
///
/// Conversion is a pure display transform; the tooltip always carries the
/// canonical base-currency amount so the stored value stays visible.
#[component]
pub fn PriceTag(price: Price) -> Element {
    let currency = use_currency();
    let selected = *currency.read();

    let text = price.format_in(selected);
    let tooltip = if selected.is_base() {
        format!("{} {}", price.format_in(BASE_CURRENCY), BASE_CURRENCY.code())
    } else {
        format!(
            "{} ≈ {} {}",
            price.format_in(BASE_CURRENCY),
            text,
            selected.code()
        )
    };

    rsx! {
        span {
            class: "price",
            title: "{tooltip}",
            "{text}"
        }
    }
}
