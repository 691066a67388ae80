//! Centered section heading: optional eyebrow, title, optional subtitle, lead.

use dioxus::prelude::*;
use sudeva_core::content::Heading;

/// Heading size, matching how loud each section is on the page
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum HeadingScale {
    /// Regular sections (services, blog, team, contact)
    #[default]
    Standard,
    /// Showcase sections with oversized titles
    Display,
}

impl HeadingScale {
    pub fn class(&self) -> &'static str {
        match self {
            HeadingScale::Standard => "section-title",
            HeadingScale::Display => "section-title display",
        }
    }
}

#[component]
pub fn SectionHeader(
    heading: Heading,
    #[props(default)] scale: HeadingScale,
    /// Render on a dark background
    #[props(default = false)]
    inverted: bool,
) -> Element {
    let wrapper = if inverted {
        "section-header inverted"
    } else {
        "section-header"
    };

    rsx! {
        div { class: "{wrapper}",
            if let Some(eyebrow) = heading.eyebrow {
                span { class: "section-eyebrow", "{eyebrow}" }
            }
            h2 { class: scale.class(), "{heading.title}" }
            if let Some(subtitle) = heading.subtitle {
                h3 { class: "section-subtitle", "{subtitle}" }
            }
            p { class: "section-lead", "{heading.lead}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_classes() {
        assert_eq!(HeadingScale::default().class(), "section-title");
        assert_eq!(HeadingScale::Display.class(), "section-title display");
    }
}
