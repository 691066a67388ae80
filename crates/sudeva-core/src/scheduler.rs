//! Delay primitive behind every timed transition.
//!
//! State machines never sleep themselves. They ask a [`Scheduler`] to hand an
//! event back after a delay, and whoever owns the machine feeds that event in
//! when it arrives.
//!
//! ```text
//!   SubmissionMachine ──schedule(delay, event)──▶ Scheduler
//!          ▲                                         │
//!          └───────────── on_timer(event) ◀──────────┘
//! ```
//!
//! Two implementations:
//!
//! | Scheduler | Clock | Used by |
//! |-----------|-------|---------|
//! | [`VirtualScheduler`] | manual, advanced by the caller | tests |
//! | [`TokioScheduler`] | `tokio::time` | the desktop app |

use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Hands events back after a delay.
pub trait Scheduler<E> {
    /// Deliver `event` once `delay` has elapsed.
    fn schedule(&mut self, delay: Duration, event: E);

    /// Drop every pending event without delivering it.
    fn cancel_all(&mut self);
}

// ═══════════════════════════════════════════════════════════════
//  Virtual time
// ═══════════════════════════════════════════════════════════════

#[derive(Debug)]
struct Pending<E> {
    deadline: Duration,
    seq: u64,
    event: E,
}

/// Scheduler with a manually advanced clock.
///
/// Events come out in deadline order; events sharing a deadline come out in
/// the order they were scheduled.
#[derive(Debug)]
pub struct VirtualScheduler<E> {
    now: Duration,
    next_seq: u64,
    pending: Vec<Pending<E>>,
}

impl<E> Default for VirtualScheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> VirtualScheduler<E> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            pending: Vec::new(),
        }
    }

    /// Current virtual time since construction.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of events not yet delivered.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Remove the earliest event due at or before `until`, moving the clock
    /// to its deadline.
    ///
    /// Returns `None` (and leaves the clock alone) when nothing is due.
    pub fn pop_due(&mut self, until: Duration) -> Option<E> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.deadline <= until)
            .min_by_key(|(_, p)| (p.deadline, p.seq))
            .map(|(i, _)| i)?;

        let entry = self.pending.remove(idx);
        self.now = self.now.max(entry.deadline);
        Some(entry.event)
    }

    /// Move the clock forward by `by`, returning every event that fell due in
    /// delivery order.
    ///
    /// Events scheduled while handling the returned ones are not included;
    /// use [`pop_due`](Self::pop_due) in a loop when handlers reschedule.
    pub fn advance(&mut self, by: Duration) -> Vec<E> {
        let until = self.now + by;
        let mut fired = Vec::new();
        while let Some(event) = self.pop_due(until) {
            fired.push(event);
        }
        self.now = until;
        fired
    }

    /// Move the clock to `until` without delivering anything.
    ///
    /// Callers use this after draining [`pop_due`](Self::pop_due).
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

impl<E> Scheduler<E> for VirtualScheduler<E> {
    fn schedule(&mut self, delay: Duration, event: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending {
            deadline: self.now + delay,
            seq,
            event,
        });
    }

    fn cancel_all(&mut self) {
        self.pending.clear();
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tokio time
// ═══════════════════════════════════════════════════════════════

/// Scheduler backed by `tokio::time::sleep`.
///
/// Each scheduled event gets its own task that sleeps and then sends the
/// event down an unbounded channel. The receiving half is returned from
/// [`TokioScheduler::new`]. Dropping the scheduler cancels every pending
/// timer, so nothing reaches the receiver after the owning view is gone.
#[derive(Debug)]
pub struct TokioScheduler<E> {
    tx: mpsc::UnboundedSender<E>,
    cancel: CancellationToken,
}

impl<E: Send + 'static> TokioScheduler<E> {
    /// Create a scheduler and the channel its events arrive on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<E>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                tx,
                cancel: CancellationToken::new(),
            },
            rx,
        )
    }
}

impl<E: Send + 'static> Scheduler<E> for TokioScheduler<E> {
    fn schedule(&mut self, delay: Duration, event: E) {
        let tx = self.tx.clone();
        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    // Receiver gone means the view is gone
                    let _ = tx.send(event);
                }
            }
        });
    }

    fn cancel_all(&mut self) {
        self.cancel.cancel();
        self.cancel = CancellationToken::new();
    }
}

impl<E> Drop for TokioScheduler<E> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
