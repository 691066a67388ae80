//! Navigation Header Component
//!
//! Desktop: fixed header with logo, anchor links and the quote button
//! Mobile: menu button opening a full-width link list

use dioxus::prelude::*;
use sudeva_core::content::{Anchor, COMPANY_NAME, LOGO, QUOTE_CTA};
use sudeva_ui::{IconButton, LinkButton};

use crate::components::icons::{Icon, IconKind};
use crate::components::site_image::Logo;

/// Navigation Header component
///
/// - Left: logo (text fallback) and anchor links
/// - Right: "Get a Quote" on desktop, menu toggle on mobile
#[component]
pub fn NavHeader() -> Element {
    let mut nav_open = use_signal(|| false);

    rsx! {
        header { class: "site-header",
            div { class: "site-header-inner",
                div { class: "site-header-left",
                    Logo { path: LOGO, fallback: COMPANY_NAME }
                    nav { class: "nav-links", "aria-label": "Main",
                        for anchor in Anchor::ALL {
                            a { class: "nav-link", href: anchor.href(), "{anchor.header_label()}" }
                        }
                    }
                }

                div { class: "site-header-right",
                    LinkButton {
                        class: "desktop-only".to_string(),
                        href: QUOTE_CTA.target.href(),
                        "{QUOTE_CTA.label}"
                    }
                    IconButton {
                        class: "mobile-only".to_string(),
                        aria_label: "Open menu".to_string(),
                        onclick: move |_| nav_open.set(true),
                        Icon { kind: IconKind::Menu }
                    }
                }
            }

            if nav_open() {
                MobileNav { on_close: move |_| nav_open.set(false) }
            }
        }
    }
}

/// Mobile menu. Any link click closes it.
#[component]
fn MobileNav(on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "mobile-nav mobile-only",
            div { class: "mobile-nav-top",
                span { class: "mobile-nav-title", "{COMPANY_NAME}" }
                IconButton {
                    aria_label: "Close menu".to_string(),
                    onclick: move |_| on_close.call(()),
                    Icon { kind: IconKind::Close }
                }
            }
            nav { class: "mobile-nav-links",
                for anchor in Anchor::ALL {
                    a {
                        class: "mobile-nav-link",
                        href: anchor.href(),
                        onclick: move |_| on_close.call(()),
                        "{anchor.label()}"
                    }
                }
            }
        }
    }
}
