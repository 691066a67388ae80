//! End-to-end submission flows
//!
//! Drives both forms through virtual time and through real tokio timers on a
//! paused clock, the same way the desktop view wires them up.

use std::time::Duration;

use sudeva_core::{
    ContactFormData, FormTimer, NewsletterForm, SimulatedForm, SubmissionStatus,
    SubmissionTimings, SubmitOutcome, TokioScheduler, ValidationError, VirtualScheduler,
};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn jane() -> ContactFormData {
    ContactFormData {
        name: "Jane".into(),
        email: "jane@x.com".into(),
        phone: "+91 555".into(),
        message: "hi".into(),
    }
}

// ============================================================================
// Virtual time
// ============================================================================

#[test]
fn contact_success_walks_all_phases() {
    let mut sched = VirtualScheduler::new();
    let mut form = SimulatedForm::new(jane(), SubmissionTimings::CONTACT);
    assert_eq!(form.status(), SubmissionStatus::Idle);

    assert_eq!(form.submit(&mut sched), SubmitOutcome::Sending);
    assert_eq!(form.status(), SubmissionStatus::Sending);
    assert_eq!(form.data(), &jane(), "fields kept while sending");

    form.run_due(&mut sched, ms(1200));
    assert_eq!(form.status(), SubmissionStatus::Success);
    assert!(form.data().is_empty(), "all four fields cleared");

    form.run_due(&mut sched, ms(2999));
    assert_eq!(form.status(), SubmissionStatus::Success);

    form.run_due(&mut sched, ms(1));
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(sched.now(), ms(4200));
    assert_eq!(sched.pending(), 0);
}

#[test]
fn contact_invalid_email_errors_without_mutation() {
    let mut sched = VirtualScheduler::new();
    let mut data = jane();
    data.email = "not-an-email".into();
    let mut form = SimulatedForm::new(data.clone(), SubmissionTimings::CONTACT);

    assert_eq!(
        form.submit(&mut sched),
        SubmitOutcome::Rejected(ValidationError::InvalidEmail)
    );
    assert_eq!(form.status(), SubmissionStatus::Error);

    form.run_due(&mut sched, ms(2199));
    assert_eq!(form.status(), SubmissionStatus::Error);

    form.run_due(&mut sched, ms(1));
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(form.data(), &data);
}

#[test]
fn newsletter_empty_email_errors_without_mutation() {
    let mut sched = VirtualScheduler::new();
    let mut form = SimulatedForm::new(NewsletterForm::new(""), SubmissionTimings::NEWSLETTER);

    assert_eq!(
        form.submit(&mut sched),
        SubmitOutcome::Rejected(ValidationError::MissingEmail)
    );
    assert_eq!(form.status(), SubmissionStatus::Error);

    form.run_due(&mut sched, ms(2000));
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(form.data().email, "");
}

#[test]
fn forms_are_independent() {
    let mut contact_sched = VirtualScheduler::new();
    let mut newsletter_sched = VirtualScheduler::new();
    let mut contact = SimulatedForm::new(jane(), SubmissionTimings::CONTACT);
    let mut newsletter =
        SimulatedForm::new(NewsletterForm::new("bad"), SubmissionTimings::NEWSLETTER);

    contact.submit(&mut contact_sched);
    newsletter.submit(&mut newsletter_sched);

    assert_eq!(contact.status(), SubmissionStatus::Sending);
    assert_eq!(newsletter.status(), SubmissionStatus::Error);

    newsletter.run_due(&mut newsletter_sched, ms(2000));
    assert_eq!(newsletter.status(), SubmissionStatus::Idle);
    assert_eq!(contact.status(), SubmissionStatus::Sending);
}

#[test]
fn edits_during_success_are_kept_until_next_submit() {
    let mut sched = VirtualScheduler::new();
    let mut form = SimulatedForm::new(jane(), SubmissionTimings::CONTACT);

    form.submit(&mut sched);
    form.run_due(&mut sched, ms(1200));
    form.data_mut().name = "Ravi".into();

    form.run_due(&mut sched, ms(3000));
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(form.data().name, "Ravi");
}

// ============================================================================
// Tokio timers (paused clock)
// ============================================================================

/// Feed every timer that arrives within `window` into the form.
async fn pump(
    form: &mut SimulatedForm<ContactFormData>,
    sched: &mut TokioScheduler<FormTimer>,
    rx: &mut tokio::sync::mpsc::UnboundedReceiver<FormTimer>,
    window: Duration,
) {
    let deadline = tokio::time::Instant::now() + window;
    while let Ok(Some(timer)) = tokio::time::timeout_at(deadline, rx.recv()).await {
        form.on_timer(timer, sched);
    }
}

#[tokio::test(start_paused = true)]
async fn contact_success_on_tokio_timers() {
    let (mut sched, mut rx) = TokioScheduler::new();
    let mut form = SimulatedForm::new(jane(), SubmissionTimings::CONTACT);

    form.submit(&mut sched);
    assert_eq!(form.status(), SubmissionStatus::Sending);

    pump(&mut form, &mut sched, &mut rx, ms(1250)).await;
    assert_eq!(form.status(), SubmissionStatus::Success);
    assert!(form.data().is_empty());

    pump(&mut form, &mut sched, &mut rx, ms(3000)).await;
    assert_eq!(form.status(), SubmissionStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn teardown_cancels_pending_transition() {
    use sudeva_core::Scheduler;

    let (mut sched, mut rx) = TokioScheduler::new();
    let mut form = SimulatedForm::new(jane(), SubmissionTimings::CONTACT);

    form.submit(&mut sched);
    sched.cancel_all();

    pump(&mut form, &mut sched, &mut rx, ms(10_000)).await;
    assert_eq!(form.status(), SubmissionStatus::Sending);
    assert_eq!(form.data(), &jane());
}
