//! Form data records
//!
//! Both forms live only for a single page view. Fields are plain text and
//! are mutated one at a time by user input.

/// Selects one field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    /// All fields in display order.
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Message,
    ];

    /// Label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Phone => "Phone",
            ContactField::Message => "Message",
        }
    }
}

/// Contents of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    /// Optional, never validated
    pub phone: String,
    pub message: String,
}

impl ContactFormData {
    /// Read a single field.
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    /// Replace a single field, leaving the others untouched.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// True when every field is empty.
    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Contents of the footer newsletter signup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    pub email: String,
}

impl NewsletterForm {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Forms that can be wiped after a simulated successful send.
pub trait Clearable {
    fn clear(&mut self);
}

impl Clearable for ContactFormData {
    fn clear(&mut self) {
        *self = Self::default();
    }
}

impl Clearable for NewsletterForm {
    fn clear(&mut self) {
        self.email.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_touches_only_one_field() {
        let mut form = ContactFormData::default();
        form.set(ContactField::Phone, "+91 7983581207");

        assert_eq!(form.phone, "+91 7983581207");
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
        assert!(!form.is_empty());
    }

    #[test]
    fn clear_resets_all_fields() {
        let mut form = ContactFormData {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            phone: "123".into(),
            message: "hi".into(),
        };
        form.clear();
        assert!(form.is_empty());

        let mut newsletter = NewsletterForm::new("a@b.com");
        newsletter.clear();
        assert_eq!(newsletter, NewsletterForm::default());
    }

    #[test]
    fn field_labels() {
        let labels: Vec<_> = ContactField::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, ["Name", "Email", "Phone", "Message"]);
    }
}
