//! Small context-access hooks used by every screen.

use api::currency::Currency;
use api::StoreClient;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;

/// A handle to the shared REST client.
pub fn use_store() -> StoreClient {
    use_context::<AppState>().client.clone()
}

/// The global display-currency signal.
pub fn use_currency() -> Signal<Currency> {
    use_context::<AppStateMut>().currency
}
