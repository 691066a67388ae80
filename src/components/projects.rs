//! Featured case studies.

use dioxus::prelude::*;
use sudeva_core::content::{Anchor, Project, PROJECTS, PROJECTS_HEADING};
use sudeva_ui::{SectionHeader, TagList};

use crate::components::site_image::SiteImage;

#[component]
pub fn Projects() -> Element {
    rsx! {
        section { id: Anchor::Projects.id(), class: "section muted",
            div { class: "container",
                SectionHeader { heading: PROJECTS_HEADING }
                div { class: "card-grid two",
                    for project in PROJECTS {
                        ProjectCard { project }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    let card = project.card;

    rsx! {
        article { class: "project-card",
            div { class: "project-card-media",
                SiteImage { path: card.image, alt: card.alt.to_string() }
            }
            div { class: "project-card-body",
                h3 { class: "card-title", "{card.title}" }
                p { class: "card-text", "{card.body}" }
                TagList { tags: project.tags }
            }
        }
    }
}
