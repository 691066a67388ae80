//! Form Status Line
//!
//! Inline message under a form, shown only while the form is not idle:
//!
//! | Status | Class |
//! |--------|-------|
//! | Sending | `status-line sending` |
//! | Success | `status-line success` |
//! | Error | `status-line error` |

use dioxus::prelude::*;
use sudeva_core::SubmissionStatus;

/// Copy for each visible status of one form
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StatusMessages {
    pub sending: &'static str,
    pub success: &'static str,
    pub error: &'static str,
}

impl StatusMessages {
    pub const NEWSLETTER: Self = Self {
        sending: "Subscribing...",
        success: "Subscribed successfully!",
        error: "Please enter a valid email.",
    };

    pub const CONTACT: Self = Self {
        sending: "Sending...",
        success: "Thanks! We'll be in touch shortly.",
        error: "Please fill in your name, a valid email and a message.",
    };

    /// Text for `status`, or `None` while idle.
    pub fn text(&self, status: SubmissionStatus) -> Option<&'static str> {
        match status {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Sending => Some(self.sending),
            SubmissionStatus::Success => Some(self.success),
            SubmissionStatus::Error => Some(self.error),
        }
    }
}

#[component]
pub fn StatusLine(status: SubmissionStatus, messages: StatusMessages) -> Element {
    let Some(text) = messages.text(status) else {
        return rsx! {};
    };

    rsx! {
        p {
            class: "status-line {status}",
            role: if status == SubmissionStatus::Error { "alert" } else { "status" },
            "{text}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_has_no_text() {
        assert_eq!(StatusMessages::CONTACT.text(SubmissionStatus::Idle), None);
        assert_eq!(StatusMessages::NEWSLETTER.text(SubmissionStatus::Idle), None);
    }

    #[test]
    fn newsletter_copy() {
        assert_eq!(
            StatusMessages::NEWSLETTER.text(SubmissionStatus::Success),
            Some("Subscribed successfully!")
        );
        assert_eq!(
            StatusMessages::NEWSLETTER.text(SubmissionStatus::Error),
            Some("Please enter a valid email.")
        );
    }

    #[test]
    fn contact_copy() {
        assert_eq!(
            StatusMessages::CONTACT.text(SubmissionStatus::Sending),
            Some("Sending...")
        );
    }
}
