//! Edge case and boundary condition tests
//!
//! Unusual inputs and re-entrant use of the forms and the slideshow.

use std::time::Duration;

use sudeva_core::content::{Anchor, HERO_IMAGES};
use sudeva_core::{
    ContactField, ContactFormData, ImageRotator, ImageSet, NewsletterForm, SimulatedForm,
    SiteError, SubmissionStatus, SubmissionTimings, SubmitOutcome, Validate, VirtualScheduler,
};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// ============================================================================
// Empty / Whitespace Input Tests
// ============================================================================

/// Whitespace-only required fields are treated as empty
#[test]
fn test_whitespace_only_fields() {
    for blank in ["", " ", "\t", "\n", "\r\n", "   \t\n  "] {
        let mut form = ContactFormData::default();
        form.set(ContactField::Name, blank);
        form.set(ContactField::Email, "a@b.com");
        form.set(ContactField::Message, "hello");
        assert!(!form.validate(), "name {blank:?} should fail");

        form.set(ContactField::Name, "Jane");
        form.set(ContactField::Message, blank);
        assert!(!form.validate(), "message {blank:?} should fail");
    }
}

/// Surrounding whitespace in a name is fine; it is not trimmed from the data
#[test]
fn test_padded_name_kept_verbatim() {
    let form = ContactFormData {
        name: "  Jane  ".into(),
        email: "a@b.com".into(),
        phone: String::new(),
        message: "hi".into(),
    };
    assert!(form.validate());
    assert_eq!(form.name, "  Jane  ");
}

/// Unicode text passes the required-field checks
#[test]
fn test_unicode_fields() {
    let form = ContactFormData {
        name: "सुदेव".into(),
        email: "इ@मेल.भारत".into(),
        phone: String::new(),
        message: "नमस्ते 🌞".into(),
    };
    assert!(form.validate());
}

/// Addresses from the form copy.
#[test]
fn test_reference_addresses() {
    assert!(NewsletterForm::new("a@b.com").validate());
    assert!(!NewsletterForm::new("not-an-email").validate());
    assert!(!NewsletterForm::new("ab.com").validate());
    assert!(!NewsletterForm::new("a@bcom").validate());
}

// ============================================================================
// Re-entrant Submission Tests
// ============================================================================

/// Hammering submit while sending leaves exactly one send in flight
#[test]
fn test_repeated_submit_while_sending() {
    let mut sched = VirtualScheduler::new();
    let mut form = SimulatedForm::new(
        ContactFormData {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            phone: String::new(),
            message: "hi".into(),
        },
        SubmissionTimings::CONTACT,
    );

    assert_eq!(form.submit(&mut sched), SubmitOutcome::Sending);
    for _ in 0..10 {
        assert_eq!(form.submit(&mut sched), SubmitOutcome::Ignored);
    }
    assert_eq!(sched.pending(), 1);

    form.run_due(&mut sched, ms(1200));
    assert_eq!(form.status(), SubmissionStatus::Success);
}

/// Submitting again during success starts a fresh sequence
#[test]
fn test_submit_during_success_restarts() {
    let mut sched = VirtualScheduler::new();
    let mut form = SimulatedForm::new(NewsletterForm::new("a@b.com"), SubmissionTimings::NEWSLETTER);

    form.submit(&mut sched);
    form.run_due(&mut sched, ms(2500));

    // Field was cleared by the first success, so this one is rejected
    form.submit(&mut sched);
    assert_eq!(form.status(), SubmissionStatus::Error);

    // The first success hold (due at 3000) must not reset the new error early
    form.run_due(&mut sched, ms(600));
    assert_eq!(form.status(), SubmissionStatus::Error);

    form.run_due(&mut sched, ms(1400));
    assert_eq!(form.status(), SubmissionStatus::Idle);
}

/// Idle is reached even if nobody submits again; no terminal state
#[test]
fn test_machine_reusable_after_cycle() {
    let mut sched = VirtualScheduler::new();
    let mut form = SimulatedForm::new(NewsletterForm::default(), SubmissionTimings::NEWSLETTER);

    for round in 0..3 {
        form.data_mut().email = format!("user{round}@site.in");
        assert_eq!(form.submit(&mut sched), SubmitOutcome::Succeeded);
        form.run_due(&mut sched, ms(3000));
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }
}

// ============================================================================
// Slideshow Boundaries
// ============================================================================

#[test]
fn test_empty_slideshow_rejected() {
    let result = ImageSet::new(Vec::<&str>::new());
    assert!(matches!(result, Err(SiteError::EmptyImageSet)));
}

#[test]
fn test_hero_slideshow_cycles_reference_images() {
    let mut rotator = ImageRotator::new(ImageSet::new(HERO_IMAGES).unwrap());
    let shown: Vec<_> = (0..5)
        .map(|_| {
            let current = rotator.current().to_string();
            rotator.advance();
            current
        })
        .collect();
    assert_eq!(shown[0], HERO_IMAGES[0]);
    assert_eq!(shown[3], HERO_IMAGES[3]);
    assert_eq!(shown[4], HERO_IMAGES[0]);
}

#[test]
fn test_huge_tick_count_wraps() {
    let rotator = ImageRotator::new(ImageSet::new(HERO_IMAGES).unwrap());
    assert_eq!(rotator.index_after(u64::MAX), (u64::MAX % 4) as usize);
}

#[test]
fn test_anchor_hrefs() {
    let hrefs: Vec<_> = Anchor::ALL.iter().map(Anchor::href).collect();
    assert_eq!(
        hrefs,
        ["#home", "#about", "#services", "#projects", "#blog", "#contact"]
    );
}
