//! Page footer: newsletter signup, quick links, socials and legal line.

use dioxus::prelude::*;
use sudeva_core::content::{Anchor, Social, COMPANY_NAME, COPYRIGHT, LEGAL_LINKS, LOGO};
use sudeva_core::NewsletterForm;
use sudeva_ui::{Button, Input, StatusLine, StatusMessages};
use tracing::debug;

use crate::components::icons::{Icon, IconKind};
use crate::components::site_image::Logo;
use crate::context::{use_simulated_form, use_site_config};

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "container footer-grid",
                div { class: "footer-brand",
                    Logo { path: LOGO, fallback: COMPANY_NAME }
                    p { class: "footer-text",
                        "Subscribe to our newsletter for the latest updates on features and releases."
                    }
                    NewsletterSignup {}
                }

                nav { class: "footer-links", "aria-label": "Quick links",
                    h4 { class: "footer-heading", "Quick Links" }
                    for anchor in Anchor::ALL {
                        a { class: "footer-link", href: anchor.href(), "{anchor.label()}" }
                    }
                }

                div { class: "footer-social",
                    h4 { class: "footer-heading", "Follow Us" }
                    for social in Social::ALL {
                        a { class: "footer-link", href: "#",
                            Icon { kind: IconKind::Social(social), size: 18 }
                            span { "{social.label()}" }
                        }
                    }
                }
            }

            div { class: "container footer-bottom",
                span { "{COPYRIGHT}" }
                div { class: "footer-legal",
                    for link in LEGAL_LINKS {
                        a { class: "footer-link", href: "#", "{link}" }
                    }
                }
            }
        }
    }
}

/// Email-only signup. No sending phase; the notice clears itself.
#[component]
fn NewsletterSignup() -> Element {
    let site = use_site_config();
    let mut signup = use_simulated_form(NewsletterForm::default(), site.newsletter_timings());

    let status = signup.status();
    let email = signup.data().email;

    rsx! {
        form {
            class: "newsletter-form",
            novalidate: true,
            onsubmit: move |evt| {
                evt.prevent_default();
                let outcome = signup.submit();
                debug!(?outcome, "Newsletter form submitted");
            },
            div { class: "newsletter-row",
                Input {
                    id: "newsletter-email".to_string(),
                    input_type: "email".to_string(),
                    aria_label: "Email address".to_string(),
                    placeholder: "Enter your email".to_string(),
                    value: email,
                    disabled: status.is_busy(),
                    oninput: move |value: String| signup.update(|f| f.email = value),
                }
                Button {
                    button_type: "submit".to_string(),
                    disabled: status.is_busy(),
                    "Subscribe"
                }
            }
            StatusLine { status, messages: StatusMessages::NEWSLETTER }
        }
    }
}
