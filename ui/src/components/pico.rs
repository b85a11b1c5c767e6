//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have a pico-compatible stylesheet linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A responsive grid layout.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = match (&props.button_type, props.outline) {
        (ButtonType::Primary, false) => "",
        (ButtonType::Primary, true) => "outline",
        (ButtonType::Secondary, false) => "secondary",
        (ButtonType::Secondary, true) => "secondary outline",
        (ButtonType::Contrast, false) => "contrast",
        (ButtonType::Contrast, true) => "contrast outline",
    };
    rsx! {
        button {
            class: "{class_str}",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FieldProps {
    label: String,
    name: String,
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(default = false)]
    required: bool,
    #[props(optional)]
    placeholder: Option<String>,
    pub value: String,
    pub on_input: EventHandler<FormEvent>,
}

/// A labelled form input.
pub fn Field(props: FieldProps) -> Element {
    rsx! {
        label {
            r#for: "{props.name}",
            "{props.label}"
            input {
                id: "{props.name}",
                name: "{props.name}",
                r#type: "{props.input_type}",
                required: props.required,
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                value: "{props.value}",
                oninput: move |evt| props.on_input.call(evt),
            }
        }
    }
}
