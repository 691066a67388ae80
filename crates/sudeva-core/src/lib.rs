//! Sudeva Engineers Core Library
//!
//! UI-free logic behind the Sudeva Engineers landing page.
//!
//! ## Overview
//!
//! The page itself is static content. The only stateful pieces are:
//!
//! - **Hero slideshow**: an [`ImageRotator`] stepping through a fixed
//!   [`ImageSet`] on an interval
//! - **Forms**: a contact form and a newsletter signup, each checked by the
//!   [`Validate`] predicates and driven through a [`SubmissionMachine`]
//! - **Timers**: every delayed transition goes through a [`Scheduler`], so
//!   tests run against a [`VirtualScheduler`] instead of real time
//!
//! ## Quick Start
//!
//! ```
//! use std::time::Duration;
//! use sudeva_core::{
//!     ContactFormData, SimulatedForm, SubmissionStatus, SubmissionTimings, VirtualScheduler,
//! };
//!
//! let mut form = SimulatedForm::new(ContactFormData::default(), SubmissionTimings::CONTACT);
//! let mut scheduler = VirtualScheduler::new();
//!
//! form.data_mut().name = "Jane".into();
//! form.data_mut().email = "jane@x.com".into();
//! form.data_mut().message = "hi".into();
//!
//! form.submit(&mut scheduler);
//! assert_eq!(form.status(), SubmissionStatus::Sending);
//!
//! form.run_due(&mut scheduler, Duration::from_millis(1200));
//! assert_eq!(form.status(), SubmissionStatus::Success);
//! assert!(form.data().is_empty());
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod forms;
pub mod logging;
pub mod preload;
pub mod rotator;
pub mod scheduler;
pub mod submission;
pub mod validation;

// Re-exports
pub use config::SiteConfig;
pub use error::{SiteError, SiteResult, ValidationError};
pub use forms::{Clearable, ContactField, ContactFormData, NewsletterForm};
pub use preload::{encode_uri, AssetCache};
pub use rotator::{run_rotation, ImageRotator, ImageSet, Indices};
pub use scheduler::{Scheduler, TokioScheduler, VirtualScheduler};
pub use submission::{
    FormTimer, SimulatedForm, SubmissionMachine, SubmissionStatus, SubmissionTimings, SubmitOutcome,
    TimerKind,
};
pub use validation::{is_valid_email, Validate};
