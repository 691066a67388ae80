//! "Why choose us" strip under the hero.

use dioxus::prelude::*;
use sudeva_core::content::{Feature, WHY_US, WHY_US_LEAD};

use crate::components::site_image::SiteImage;

#[component]
pub fn WhyUs() -> Element {
    rsx! {
        section { class: "why-us",
            div { class: "container",
                p { class: "why-us-lead", "{WHY_US_LEAD}" }
                div { class: "feature-grid",
                    for feature in WHY_US {
                        FeatureItem { feature }
                    }
                }
            }
        }
    }
}

#[component]
fn FeatureItem(feature: Feature) -> Element {
    rsx! {
        div { class: "feature",
            SiteImage {
                path: feature.icon,
                alt: feature.title.to_string(),
                class: "feature-icon".to_string(),
            }
            h3 { class: "feature-title", "{feature.title}" }
            p { class: "feature-body", "{feature.body}" }
        }
    }
}
