//! Team roster.

use dioxus::prelude::*;
use sudeva_core::content::{Social, TeamMember, TEAM, TEAM_LEAD};

use crate::components::icons::{Icon, IconKind};
use crate::components::site_image::SiteImage;

#[component]
pub fn Team() -> Element {
    rsx! {
        section { class: "section team",
            div { class: "container",
                div { class: "section-header",
                    h2 { class: "section-title", "Our Team" }
                    p { class: "section-lead", "{TEAM_LEAD}" }
                }
                div { class: "card-grid two",
                    for member in TEAM {
                        TeamCard { member }
                    }
                }
            }
        }
    }
}

#[component]
fn TeamCard(member: TeamMember) -> Element {
    rsx! {
        article { class: "team-card",
            SiteImage {
                path: member.photo,
                alt: member.name.to_string(),
                class: "team-photo".to_string(),
            }
            h3 { class: "team-name", "{member.name}" }
            p { class: "team-role", "{member.role}" }
            p { class: "card-text", "{member.bio}" }
            div { class: "social-row",
                for social in Social::TEAM {
                    a { class: "social-link", href: "#", "aria-label": social.label(),
                        Icon { kind: IconKind::Social(social), size: 18 }
                    }
                }
            }
        }
    }
}
