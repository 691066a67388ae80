//! Property-based tests for rotation and validation
//!
//! Uses proptest to verify the invariants the landing page relies on.

use proptest::prelude::*;
use sudeva_core::{
    is_valid_email, ContactFormData, ImageRotator, ImageSet, NewsletterForm, Validate,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Non-empty list of image paths
fn image_set_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("/images/[a-z0-9 ]{1,20}\\.(png|jpg)", 1..12)
}

/// Text without any `@`
fn no_at_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^@]{0,40}").expect("valid regex")
}

/// Something shaped like local@domain with no dot in the domain
fn dotless_domain_strategy() -> impl Strategy<Value = String> {
    ("[a-z0-9]{1,10}", "[a-z0-9]{1,10}").prop_map(|(local, domain)| format!("{local}@{domain}"))
}

/// Well-formed address
fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z0-9._]{1,10}", "[a-z0-9]{1,10}", "[a-z]{2,6}")
        .prop_map(|(local, domain, tld)| format!("{local}@{domain}.{tld}"))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// After t ticks the rotation index is t mod n
    #[test]
    fn rotation_index_is_ticks_mod_len(images in image_set_strategy(), ticks in 0u64..500) {
        let n = images.len();
        let mut rotator = ImageRotator::new(ImageSet::new(images).unwrap());
        for _ in 0..ticks {
            rotator.advance();
        }
        prop_assert_eq!(rotator.index(), (ticks % n as u64) as usize);
        prop_assert_eq!(rotator.index_after(ticks), rotator.index());
    }

    /// The lazy index sequence agrees with the stateful rotator
    #[test]
    fn indices_match_rotator(images in image_set_strategy(), take in 1usize..100) {
        let set = ImageSet::new(images).unwrap();
        let mut rotator = ImageRotator::new(set.clone());
        for (t, idx) in set.indices().take(take).enumerate() {
            prop_assert_eq!(idx, rotator.index_after(t as u64));
            prop_assert_eq!(idx, rotator.index());
            rotator.advance();
        }
    }

    /// Blank name always fails, whatever else is filled in
    #[test]
    fn blank_name_never_validates(
        name in "[ \t\n]{0,5}",
        email in email_strategy(),
        phone in ".{0,20}",
        message in ".{0,50}",
    ) {
        let form = ContactFormData { name, email, phone, message };
        prop_assert!(!form.validate());
    }

    /// No `@`, no valid email
    #[test]
    fn missing_at_rejected(email in no_at_strategy()) {
        prop_assert!(!is_valid_email(&email));
        prop_assert!(!NewsletterForm::new(email).validate());
    }

    /// No dot after the `@`, no valid email
    #[test]
    fn missing_dot_after_at_rejected(email in dotless_domain_strategy()) {
        prop_assert!(!is_valid_email(&email));
    }

    /// Well-formed address with name and message validates
    #[test]
    fn complete_contact_form_validates(
        name in "[A-Za-z]{1,20}",
        email in email_strategy(),
        message in "[A-Za-z ]{0,40}[a-z]",
    ) {
        let form = ContactFormData { name, email, phone: String::new(), message };
        prop_assert!(form.validate());
    }

    /// Validation never touches the data
    #[test]
    fn validation_is_pure(email in ".{0,30}") {
        let form = NewsletterForm::new(email.clone());
        let _ = form.validate();
        prop_assert_eq!(form.email, email);
    }
}
