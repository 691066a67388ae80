//! Services overview and the solar / construction showcases.

use dioxus::prelude::*;
use sudeva_core::content::{Anchor, Card, Heading, SERVICES, SERVICES_HEADING};
use sudeva_ui::{HeadingScale, SectionHeader};

use crate::components::site_image::SiteImage;

/// Two large service cards.
#[component]
pub fn Services() -> Element {
    rsx! {
        section { id: Anchor::Services.id(), class: "section",
            div { class: "container",
                SectionHeader { heading: SERVICES_HEADING }
                div { class: "card-grid two",
                    for card in SERVICES {
                        ServiceCard { card }
                    }
                }
            }
        }
    }
}

#[component]
fn ServiceCard(card: Card) -> Element {
    rsx! {
        article { class: "service-card",
            div { class: "service-card-media",
                SiteImage { path: card.image, alt: card.alt.to_string() }
            }
            div { class: "service-card-body",
                h3 { class: "card-title", "{card.title}" }
                p { class: "card-text", "{card.body}" }
            }
        }
    }
}

/// Three-card grid under a display heading. Construction sits on a dark
/// background.
#[component]
pub fn Showcase(
    heading: Heading,
    cards: Vec<Card>,
    #[props(default = false)] dark: bool,
) -> Element {
    let class = if dark { "section showcase dark" } else { "section showcase" };

    rsx! {
        section { class: "{class}",
            div { class: "container",
                SectionHeader { heading, scale: HeadingScale::Display, inverted: dark }
                div { class: "card-grid three",
                    for card in cards {
                        article { class: "showcase-card",
                            div { class: "showcase-card-media",
                                SiteImage { path: card.image, alt: card.alt.to_string() }
                            }
                            h3 { class: "card-title", "{card.title}" }
                            p { class: "card-text", "{card.body}" }
                        }
                    }
                }
            }
        }
    }
}
