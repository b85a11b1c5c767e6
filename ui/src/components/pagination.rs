//! The bounded page-number control shared by every listing screen.

use dioxus::prelude::*;

use crate::components::pico::Button;

/// The contiguous window of page numbers to display, at most five wide.
///
/// Small totals show everything; near either edge the window is clamped to
/// the first or last five pages; otherwise it is centered on the current
/// page.
pub fn window(current: u32, total: u32) -> Vec<u32> {
    if total <= 5 {
        (1..=total).collect()
    } else if current <= 3 {
        (1..=5).collect()
    } else if current >= total - 2 {
        (total - 4..=total).collect()
    } else {
        (current - 2..=current + 2).collect()
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct PaginationProps {
    pub current: u32,
    pub total: u32,
    /// Receives the (clamped) target page; the screen turns it into a
    /// navigation so the query string stays the only pagination store.
    pub on_navigate: EventHandler<u32>,
}

#[component]
pub fn Pagination(props: PaginationProps) -> Element {
    let total = props.total.max(1);
    let current = props.current.clamp(1, total);
    let on_navigate = props.on_navigate;

    if total <= 1 {
        return rsx! {};
    }

    let go = move |page: u32| {
        let page = page.clamp(1, total);
        // UX contract: a page change brings the shopper back to the top.
        let _ = document::eval("window.scrollTo(0, 0);");
        on_navigate.call(page);
    };

    let pages = window(current, total);
    let show_tail = pages.last().copied().unwrap_or(total) < total;

    rsx! {
        nav {
            class: "pagination",
            role: "group",
            "aria-label": "pagination",
            for page in pages {
                Button {
                    key: "{page}",
                    outline: page != current,
                    disabled: page == current,
                    on_click: move |_| go(page),
                    "{page}"
                }
            }
            if show_tail {
                span { class: "ellipsis", "…" }
                Button {
                    outline: true,
                    on_click: move |_| go(total),
                    "{total}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_totals_show_every_page() {
        assert_eq!(window(2, 4), vec![1, 2, 3, 4]);
        assert_eq!(window(1, 1), vec![1]);
    }

    #[test]
    fn start_of_a_long_list_is_clamped_to_the_first_five() {
        assert_eq!(window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(window(3, 10), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn middle_of_a_long_list_is_centered() {
        assert_eq!(window(5, 10), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn end_of_a_long_list_is_clamped_to_the_last_five() {
        assert_eq!(window(8, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(window(10, 10), vec![6, 7, 8, 9, 10]);
    }
}
