//! Blog section: knowledge cards with alternating image side.

use dioxus::prelude::*;
use sudeva_core::content::{
    knowledge_reversed, Anchor, Card, KNOWLEDGE, KNOWLEDGE_HEADING, KNOWLEDGE_TAG,
};
use sudeva_ui::{SectionHeader, TagPill};

use crate::components::site_image::SiteImage;

#[component]
pub fn Knowledge() -> Element {
    rsx! {
        section { id: Anchor::Blog.id(), class: "section",
            div { class: "container",
                SectionHeader { heading: KNOWLEDGE_HEADING }
                div { class: "knowledge-list",
                    for (i, card) in KNOWLEDGE.into_iter().enumerate() {
                        KnowledgeCard { card, reversed: knowledge_reversed(i) }
                    }
                }
            }
        }
    }
}

#[component]
fn KnowledgeCard(card: Card, reversed: bool) -> Element {
    let class = if reversed {
        "knowledge-card reversed"
    } else {
        "knowledge-card"
    };

    rsx! {
        article { class: "{class}",
            div { class: "knowledge-media",
                SiteImage { path: card.image, alt: card.alt.to_string() }
            }
            div { class: "knowledge-body",
                TagPill { label: KNOWLEDGE_TAG }
                h3 { class: "card-title", "{card.title}" }
                p { class: "card-text", "{card.body}" }
            }
        }
    }
}
