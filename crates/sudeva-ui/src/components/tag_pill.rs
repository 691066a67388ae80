//! Tag Pill Component
//!
//! Small rounded labels under project and article cards.

use dioxus::prelude::*;

/// A single read-only tag
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TagPill { label: "Knowledge" }
/// }
/// ```
#[component]
pub fn TagPill(label: &'static str) -> Element {
    rsx! {
        span { class: "tag", "{label}" }
    }
}

/// Row of tags, in the given order
#[component]
pub fn TagList(tags: &'static [&'static str]) -> Element {
    rsx! {
        div { class: "tag-row", role: "list",
            for tag in tags {
                TagPill { label: *tag }
            }
        }
    }
}
