//! Simulated form submission.
//!
//! Nothing is sent anywhere. A submit only walks the form's status through
//! timed phases:
//!
//! ```text
//!            valid                send_delay           success_hold
//!   Idle ─────────────▶ Sending ─────────────▶ Success ─────────────▶ Idle
//!     │                                        (fields cleared)
//!     │ invalid                 error_hold
//!     └──────────────▶ Error ─────────────────────────────────────▶ Idle
//! ```
//!
//! A form without a `send_delay` skips `Sending` and goes straight to
//! `Success`.
//!
//! Every submit bumps an epoch carried by the timers it schedules. Timers from
//! an older epoch are ignored, so a fresh submit from `Success` or `Error`
//! cleanly replaces the previous sequence. Submits while `Sending` are ignored.

use std::time::Duration;

use tracing::debug;

use crate::error::ValidationError;
use crate::forms::Clearable;
use crate::scheduler::{Scheduler, VirtualScheduler};
use crate::validation::Validate;

/// Lifecycle phase of a form's simulated send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Lower-case name, also used as a CSS modifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Sending => "sending",
            SubmissionStatus::Success => "success",
            SubmissionStatus::Error => "error",
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, SubmissionStatus::Sending)
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-form delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTimings {
    /// Time spent in `Sending`. `None` skips the phase.
    pub send_delay: Option<Duration>,
    /// Time `Success` stays visible.
    pub success_hold: Duration,
    /// Time `Error` stays visible.
    pub error_hold: Duration,
}

impl SubmissionTimings {
    /// Contact form: 1.2 s sending, 3 s success, 2.2 s error.
    pub const CONTACT: Self = Self {
        send_delay: Some(Duration::from_millis(1200)),
        success_hold: Duration::from_millis(3000),
        error_hold: Duration::from_millis(2200),
    };

    /// Newsletter: immediate success held 3 s, error held 2 s.
    pub const NEWSLETTER: Self = Self {
        send_delay: None,
        success_hold: Duration::from_millis(3000),
        error_hold: Duration::from_millis(2000),
    };
}

/// Which delay a timer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// `Sending` → `Success`
    SendComplete,
    /// `Success`/`Error` → `Idle`
    HoldElapsed,
}

/// Timer event handed to a [`Scheduler`] and fed back via `on_timer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormTimer {
    pub kind: TimerKind,
    pub epoch: u64,
}

/// What a submit request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Entered `Sending`
    Sending,
    /// Went straight to `Success`; the caller must clear the form
    Succeeded,
    /// Validation failed, entered `Error`
    Rejected(ValidationError),
    /// A send was already in flight
    Ignored,
}

/// Status machine for one form.
#[derive(Debug, Clone)]
pub struct SubmissionMachine {
    status: SubmissionStatus,
    timings: SubmissionTimings,
    epoch: u64,
}

impl SubmissionMachine {
    pub fn new(timings: SubmissionTimings) -> Self {
        Self {
            status: SubmissionStatus::Idle,
            timings,
            epoch: 0,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn timings(&self) -> SubmissionTimings {
        self.timings
    }

    /// Start a submission given the validation result.
    pub fn submit(
        &mut self,
        validation: Result<(), ValidationError>,
        scheduler: &mut impl Scheduler<FormTimer>,
    ) -> SubmitOutcome {
        if self.status.is_busy() {
            debug!("Submit ignored while sending");
            return SubmitOutcome::Ignored;
        }

        self.epoch += 1;
        match validation {
            Err(reason) => {
                self.enter(SubmissionStatus::Error);
                self.schedule(scheduler, self.timings.error_hold, TimerKind::HoldElapsed);
                SubmitOutcome::Rejected(reason)
            }
            Ok(()) => match self.timings.send_delay {
                Some(delay) => {
                    self.enter(SubmissionStatus::Sending);
                    self.schedule(scheduler, delay, TimerKind::SendComplete);
                    SubmitOutcome::Sending
                }
                None => {
                    self.enter(SubmissionStatus::Success);
                    self.schedule(scheduler, self.timings.success_hold, TimerKind::HoldElapsed);
                    SubmitOutcome::Succeeded
                }
            },
        }
    }

    /// Apply a fired timer.
    ///
    /// Returns `true` when the transition entered `Success`, meaning the
    /// caller must clear the form's fields now.
    pub fn on_timer(
        &mut self,
        timer: FormTimer,
        scheduler: &mut impl Scheduler<FormTimer>,
    ) -> bool {
        if timer.epoch != self.epoch {
            debug!(?timer, current = self.epoch, "Stale form timer dropped");
            return false;
        }

        match (timer.kind, self.status) {
            (TimerKind::SendComplete, SubmissionStatus::Sending) => {
                self.enter(SubmissionStatus::Success);
                self.schedule(scheduler, self.timings.success_hold, TimerKind::HoldElapsed);
                true
            }
            (TimerKind::HoldElapsed, SubmissionStatus::Success | SubmissionStatus::Error) => {
                self.enter(SubmissionStatus::Idle);
                false
            }
            _ => false,
        }
    }

    fn enter(&mut self, next: SubmissionStatus) {
        debug!(from = %self.status, to = %next, "Form status");
        self.status = next;
    }

    fn schedule(
        &self,
        scheduler: &mut impl Scheduler<FormTimer>,
        delay: Duration,
        kind: TimerKind,
    ) {
        scheduler.schedule(
            delay,
            FormTimer {
                kind,
                epoch: self.epoch,
            },
        );
    }
}

/// A form's data together with its status machine.
///
/// This is what a view owns: field edits go through
/// [`data_mut`](Self::data_mut), submit validates the current data, and the
/// data is cleared at the moment the machine reports success.
#[derive(Debug, Clone)]
pub struct SimulatedForm<F> {
    data: F,
    machine: SubmissionMachine,
}

impl<F: Validate + Clearable> SimulatedForm<F> {
    pub fn new(data: F, timings: SubmissionTimings) -> Self {
        Self {
            data,
            machine: SubmissionMachine::new(timings),
        }
    }

    pub fn data(&self) -> &F {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut F {
        &mut self.data
    }

    pub fn status(&self) -> SubmissionStatus {
        self.machine.status()
    }

    /// Validate the current data and start the simulated send.
    pub fn submit(&mut self, scheduler: &mut impl Scheduler<FormTimer>) -> SubmitOutcome {
        let outcome = self.machine.submit(self.data.check(), scheduler);
        if outcome == SubmitOutcome::Succeeded {
            self.data.clear();
        }
        outcome
    }

    /// Feed a fired timer back in.
    pub fn on_timer(&mut self, timer: FormTimer, scheduler: &mut impl Scheduler<FormTimer>) {
        if self.machine.on_timer(timer, scheduler) {
            self.data.clear();
        }
    }

    /// Advance a virtual clock by `by`, applying every timer that falls due,
    /// including ones scheduled along the way.
    pub fn run_due(&mut self, scheduler: &mut VirtualScheduler<FormTimer>, by: Duration) {
        let until = scheduler.now() + by;
        while let Some(timer) = scheduler.pop_due(until) {
            self.on_timer(timer, scheduler);
        }
        scheduler.settle(until);
    }
}
