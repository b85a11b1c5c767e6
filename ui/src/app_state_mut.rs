//! Defines the mutable, reactive state for the application's UI.

use api::currency::Currency;
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// The selected display currency is shared process-wide for the session and
/// read by every price on screen; changing it re-renders them all. All reads
/// and writes of the selection go through this signal.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The shopper's chosen display currency. Not persisted.
    pub currency: Signal<Currency>,
}
