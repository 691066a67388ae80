//! Contact channels and the contact form.

use dioxus::prelude::*;
use sudeva_core::content::{Anchor, ContactChannel, Heading, CONTACT_CHANNELS, CONTACT_LEAD};
use sudeva_core::{ContactField, ContactFormData};
use sudeva_ui::{Button, Input, SectionHeader, StatusLine, StatusMessages, TextArea};
use tracing::debug;

use crate::components::icons::{Icon, IconKind};
use crate::context::{use_simulated_form, use_site_config};

const CONTACT_HEADING: Heading = Heading {
    eyebrow: Some("Connect"),
    title: "Contact us",
    subtitle: None,
    lead: CONTACT_LEAD,
};

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { id: Anchor::Contact.id(), class: "section muted",
            div { class: "container",
                SectionHeader { heading: CONTACT_HEADING }
                div { class: "contact-layout",
                    div { class: "channel-list",
                        for channel in CONTACT_CHANNELS {
                            ChannelCard { channel }
                        }
                    }
                    ContactForm {}
                }
            }
        }
    }
}

#[component]
fn ChannelCard(channel: ContactChannel) -> Element {
    rsx! {
        div { class: "channel-card",
            span { class: "channel-icon",
                Icon { kind: IconKind::Channel(channel.kind), size: 24 }
            }
            h3 { class: "card-title", "{channel.title}" }
            p { class: "card-text", "{channel.detail}" }
            a { class: "channel-action", href: channel.href, "{channel.action}" }
        }
    }
}

fn placeholder(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "Your name",
        ContactField::Email => "you@example.com",
        ContactField::Phone => "Optional",
        ContactField::Message => "Tell us about your project",
    }
}

fn input_type(field: ContactField) -> &'static str {
    match field {
        ContactField::Email => "email",
        ContactField::Phone => "tel",
        _ => "text",
    }
}

/// Simulated contact form: sending, then a success or error notice that
/// clears itself.
#[component]
fn ContactForm() -> Element {
    let site = use_site_config();
    let mut contact = use_simulated_form(ContactFormData::default(), site.contact_timings());

    let status = contact.status();
    let data = contact.data();
    let busy = status.is_busy();

    rsx! {
        form {
            class: "contact-form",
            novalidate: true,
            onsubmit: move |evt| {
                evt.prevent_default();
                let outcome = contact.submit();
                debug!(?outcome, "Contact form submitted");
            },

            for field in ContactField::ALL {
                if field == ContactField::Message {
                    TextArea {
                        id: "contact-message".to_string(),
                        label: field.label().to_string(),
                        placeholder: placeholder(field).to_string(),
                        value: data.get(field).to_string(),
                        disabled: busy,
                        oninput: move |value: String| contact.update(|d| d.set(field, value)),
                    }
                } else {
                    Input {
                        id: format!("contact-{}", field.label().to_lowercase()),
                        label: field.label().to_string(),
                        placeholder: placeholder(field).to_string(),
                        input_type: input_type(field).to_string(),
                        value: data.get(field).to_string(),
                        disabled: busy,
                        oninput: move |value: String| contact.update(|d| d.set(field, value)),
                    }
                }
            }

            Button {
                button_type: "submit".to_string(),
                disabled: busy,
                "Send message"
            }
            StatusLine { status, messages: StatusMessages::CONTACT }
        }
    }
}
