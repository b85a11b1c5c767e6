//! URL-query-string filter state shared by every listing page.
//!
//! The address bar is the only store for filter and pagination state. A
//! [`FilterState`] is reconstructed from the query string on every render and
//! never mutated in place: each mutator returns the state a navigation should
//! carry, the router pushes it, and the screen re-parses it from the new URL.

use std::fmt;

use dioxus::prelude::FromQuery;

/// The reserved pagination key.
pub const PAGE_KEY: &str = "page";

/// An ordered multimap of filter keys to string values.
///
/// Multi-valued keys (e.g. `color`, `size`) preserve insertion order;
/// single-valued keys are read with last-write-wins semantics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pairs: Vec<(String, String)>,
}

impl FilterState {
    /// Parses a query string (with or without a leading `?`).
    ///
    /// A malformed query string yields the empty state rather than an error;
    /// there is nothing useful to do with garbage from the address bar.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        if query.is_empty() {
            return Self::default();
        }
        match serde_html_form::from_str::<Vec<(String, String)>>(query) {
            Ok(pairs) => Self { pairs },
            Err(e) => {
                dioxus_logger::tracing::warn!("ignoring malformed query string {query:?}: {e}");
                Self::default()
            }
        }
    }

    /// Single-valued lookup. If the key appears more than once the last
    /// value wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Multi-valued lookup, in insertion order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Whether the multi-valued key currently contains `value`.
    pub fn contains(&self, key: &str, value: &str) -> bool {
        self.pairs.iter().any(|(k, v)| k == key && v == value)
    }

    /// The current page, always a positive integer. Missing, zero or
    /// non-numeric values default to 1.
    pub fn page(&self) -> u32 {
        self.get(PAGE_KEY)
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1)
    }

    /// Replaces a single-valued key. An empty value removes the key
    /// entirely. Resets the page.
    pub fn set(&self, key: &str, value: &str) -> Self {
        if key == PAGE_KEY {
            // Explicit page changes go through `with_page`; route strays
            // there so the clamp applies either way.
            return self.with_page(value.parse().unwrap_or(1));
        }
        let mut pairs: Vec<_> = self
            .pairs
            .iter()
            .filter(|(k, _)| k != key)
            .cloned()
            .collect();
        let value = value.trim();
        if !value.is_empty() {
            pairs.push((key.to_string(), value.to_string()));
        }
        Self { pairs }.reset_page()
    }

    /// Toggles a value on a multi-valued key: removes it if present
    /// (preserving the order of the remaining values), appends it otherwise.
    /// Resets the page.
    pub fn toggle(&self, key: &str, value: &str) -> Self {
        let mut pairs: Vec<(String, String)>;
        if self.contains(key, value) {
            pairs = self
                .pairs
                .iter()
                .filter(|(k, v)| !(k == key && v == value))
                .cloned()
                .collect();
        } else {
            pairs = self.pairs.clone();
            pairs.push((key.to_string(), value.to_string()));
        }
        Self { pairs }.reset_page()
    }

    /// An explicit page change. Clamped so that page 0 is not constructible;
    /// page 1 is represented by the absence of the key, keeping first-page
    /// URLs bare.
    pub fn with_page(&self, page: u32) -> Self {
        let page = page.max(1);
        let mut pairs: Vec<_> = self
            .pairs
            .iter()
            .filter(|(k, _)| k != PAGE_KEY)
            .cloned()
            .collect();
        if page > 1 {
            pairs.push((PAGE_KEY.to_string(), page.to_string()));
        }
        Self { pairs }
    }

    /// Drops every filter, producing the bare base path.
    pub fn clear_all() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The raw pairs, in order. Used when mapping filters onto backend
    /// request parameters.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn reset_page(self) -> Self {
        self.with_page(1)
    }
}

impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pairs.is_empty() {
            return Ok(());
        }
        let encoded = serde_html_form::to_string(&self.pairs).map_err(|_| fmt::Error)?;
        write!(f, "{encoded}")
    }
}

impl FromQuery for FilterState {
    fn from_query(query: &str) -> Self {
        Self::parse(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_in_order_and_round_trips() {
        let state = FilterState::parse("color=Red&gender=male&color=Blue");
        assert_eq!(state.get_all("color"), vec!["Red", "Blue"]);
        assert_eq!(state.get("gender"), Some("male"));
        assert_eq!(FilterState::parse(&state.to_string()), state);
    }

    #[test]
    fn get_is_last_write_wins() {
        let state = FilterState::parse("gender=male&gender=female");
        assert_eq!(state.get("gender"), Some("female"));
    }

    #[test]
    fn page_defaults_to_one_on_garbage() {
        assert_eq!(FilterState::parse("page=abc").page(), 1);
        assert_eq!(FilterState::parse("page=0").page(), 1);
        assert_eq!(FilterState::parse("page=-3").page(), 1);
        assert_eq!(FilterState::parse("").page(), 1);
        assert_eq!(FilterState::parse("page=7").page(), 7);
    }

    #[test]
    fn malformed_query_never_panics() {
        let state = FilterState::parse("%zz&&==");
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn set_replaces_and_empty_removes() {
        let state = FilterState::parse("category=food");
        let replaced = state.set("category", "toys");
        assert_eq!(replaced.get("category"), Some("toys"));
        let removed = replaced.set("category", "");
        assert_eq!(removed.get("category"), None);
        assert!(removed.is_empty());
    }

    #[test]
    fn mutations_reset_the_page_except_explicit_page_changes() {
        let state = FilterState::parse("page=4&gender=male");
        assert_eq!(state.set("gender", "female").page(), 1);
        assert_eq!(state.toggle("color", "Red").page(), 1);
        assert_eq!(state.with_page(3).page(), 3);
        assert_eq!(state.with_page(3).get("gender"), Some("male"));
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        let state = FilterState::parse("color=Red&color=Blue&color=White");
        let toggled = state.toggle("color", "Blue");
        assert_eq!(toggled.get_all("color"), vec!["Red", "White"]);
        let back = toggled.toggle("color", "Blue");
        assert_eq!(back.get_all("color"), vec!["Red", "White", "Blue"]);
        // and removing the re-added value restores the remaining order
        assert_eq!(
            back.toggle("color", "Blue").get_all("color"),
            vec!["Red", "White"]
        );
    }

    #[test]
    fn toggle_never_duplicates() {
        let state = FilterState::default()
            .toggle("size", "M")
            .toggle("size", "M")
            .toggle("size", "M");
        assert_eq!(state.get_all("size"), vec!["M"]);
    }

    #[test]
    fn page_zero_is_not_constructible() {
        assert_eq!(FilterState::default().with_page(0).page(), 1);
    }

    #[test]
    fn first_page_keeps_the_url_bare() {
        let state = FilterState::parse("page=5").with_page(1);
        assert_eq!(state.to_string(), "");
    }

    #[test]
    fn values_with_spaces_survive_the_round_trip() {
        let state = FilterState::default().set("q", "golden retriever");
        assert_eq!(
            FilterState::parse(&state.to_string()).get("q"),
            Some("golden retriever")
        );
    }

    #[test]
    fn select_red_then_blue_then_deselect_red() {
        let state = FilterState::default()
            .toggle("color", "Red")
            .with_page(4)
            .toggle("color", "Blue")
            .toggle("color", "Red");
        assert_eq!(state.get_all("color"), vec!["Blue"]);
        assert_eq!(state.page(), 1);
    }
}
