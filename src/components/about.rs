//! About the company.

use dioxus::prelude::*;
use sudeva_core::content::{Anchor, ABOUT, ABOUT_IMAGE, ABOUT_INTRO};

use crate::components::site_image::SiteImage;

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: Anchor::About.id(), class: "section",
            div { class: "container about",
                div { class: "about-text",
                    h2 { class: "section-title", "About Us" }
                    p { class: "section-lead", "{ABOUT_INTRO}" }
                    for paragraph in ABOUT {
                        div { class: "about-point",
                            h3 { class: "card-title", "{paragraph.title}" }
                            p { class: "card-text", "{paragraph.body}" }
                        }
                    }
                }
                div { class: "about-media",
                    SiteImage { path: ABOUT_IMAGE, alt: "Sudeva Engineers site work".to_string() }
                }
            }
        }
    }
}
