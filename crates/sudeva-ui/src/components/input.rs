//! Input Field Components
//!
//! Text inputs and textareas for the contact and newsletter forms.
//! Labels are optional; the newsletter field relies on `aria-label` alone.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Visible label text
    #[props(default)]
    pub label: Option<String>,
    /// Hint after the label (e.g., "optional")
    #[props(default)]
    pub hint: Option<String>,
    /// Accessible label when there is no visible one
    #[props(default)]
    pub aria_label: Option<String>,
    /// Input type (text, email, tel, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// ID for label association
    pub id: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Single-line text input
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     Input {
///         id: "newsletter-email".to_string(),
///         value: email(),
///         oninput: move |s| email.set(s),
///         input_type: "email".to_string(),
///         aria_label: "Newsletter email address".to_string(),
///         placeholder: "Email address".to_string()
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let input_class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("input-field {}", extra),
        _ => "input-field".to_string(),
    };

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{props.id}",
                    "{label}"
                    if let Some(hint) = &props.hint {
                        span { class: "input-hint", " ({hint})" }
                    }
                }
            }
            input {
                id: "{props.id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                "aria-label": props.aria_label.as_deref(),
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Textarea label
    #[props(default)]
    pub label: Option<String>,
    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,
    /// Whether the textarea is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// ID for label association
    pub id: String,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{props.id}", "{label}" }
            }
            textarea {
                id: "{props.id}",
                class: "input-field textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
