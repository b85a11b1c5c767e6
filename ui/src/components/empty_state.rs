// File: src/components/empty_state.rs
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Props)]
pub struct EmptyStateProps {
    title: String,
    #[props(default)]
    description: Option<String>,
    #[props(default)]
    primary_action: Option<Element>,
    #[props(default)]
    icon: Option<Element>,
}

/// The placeholder shown when a listing returns no items.
#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            class: "empty-state",
            if let Some(icon) = props.icon {
                div { class: "empty-state-icon", {icon} }
            }
            h4 { "{props.title}" }
            if let Some(desc) = props.description {
                p { "{desc}" }
            }
            if let Some(action) = props.primary_action {
                div { {action} }
            }
        }
    }
}
