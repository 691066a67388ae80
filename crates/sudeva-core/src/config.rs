//! Site configuration.
//!
//! Defaults reproduce the reference timings. A JSON file may override any
//! subset of fields, nested timings included; the desktop binary layers CLI
//! flags on top. For `send_delay_ms`, an absent key keeps the form's default
//! and an explicit `null` removes the sending phase.
//!
//! ```json
//! {
//!   "assets_dir": "./public",
//!   "rotation_interval_ms": 3000,
//!   "preload_images": true,
//!   "contact": { "send_delay_ms": 1200, "success_hold_ms": 3000, "error_hold_ms": 2200 },
//!   "newsletter": { "send_delay_ms": null, "success_hold_ms": 3000, "error_hold_ms": 2000 }
//! }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};
use crate::rotator::DEFAULT_ROTATION_INTERVAL;
use crate::submission::SubmissionTimings;

/// Millisecond form of [`SubmissionTimings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimingsConfig {
    pub send_delay_ms: Option<u64>,
    pub success_hold_ms: u64,
    pub error_hold_ms: u64,
}

impl From<SubmissionTimings> for TimingsConfig {
    fn from(t: SubmissionTimings) -> Self {
        Self {
            send_delay_ms: t.send_delay.map(|d| d.as_millis() as u64),
            success_hold_ms: t.success_hold.as_millis() as u64,
            error_hold_ms: t.error_hold.as_millis() as u64,
        }
    }
}

impl From<TimingsConfig> for SubmissionTimings {
    fn from(c: TimingsConfig) -> Self {
        Self {
            send_delay: c.send_delay_ms.map(Duration::from_millis),
            success_hold: Duration::from_millis(c.success_hold_ms),
            error_hold: Duration::from_millis(c.error_hold_ms),
        }
    }
}

/// Timing fields present in a config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct TimingsOverride {
    /// Outer `None`: key absent. `Some(None)`: explicit `null`.
    #[serde(deserialize_with = "present")]
    send_delay_ms: Option<Option<u64>>,
    success_hold_ms: Option<u64>,
    error_hold_ms: Option<u64>,
}

/// Wraps any present value, `null` included, in `Some`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl TimingsOverride {
    fn apply(self, base: TimingsConfig) -> TimingsConfig {
        TimingsConfig {
            send_delay_ms: self.send_delay_ms.unwrap_or(base.send_delay_ms),
            success_hold_ms: self.success_hold_ms.unwrap_or(base.success_hold_ms),
            error_hold_ms: self.error_hold_ms.unwrap_or(base.error_hold_ms),
        }
    }
}

/// On-disk shape of [`SiteConfig`]: every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SiteConfigFile {
    assets_dir: Option<PathBuf>,
    rotation_interval_ms: Option<u64>,
    preload_images: Option<bool>,
    contact: TimingsOverride,
    newsletter: TimingsOverride,
}

impl From<SiteConfigFile> for SiteConfig {
    fn from(file: SiteConfigFile) -> Self {
        let defaults = SiteConfig::default();
        Self {
            assets_dir: file.assets_dir.unwrap_or(defaults.assets_dir),
            rotation_interval_ms: file
                .rotation_interval_ms
                .unwrap_or(defaults.rotation_interval_ms),
            preload_images: file.preload_images.unwrap_or(defaults.preload_images),
            contact: file.contact.apply(defaults.contact),
            newsletter: file.newsletter.apply(defaults.newsletter),
        }
    }
}

/// Runtime settings for the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SiteConfigFile")]
pub struct SiteConfig {
    /// Directory that site-absolute image paths resolve against
    pub assets_dir: PathBuf,
    /// Hero slideshow interval
    pub rotation_interval_ms: u64,
    /// Read every image once at mount
    pub preload_images: bool,
    pub contact: TimingsConfig,
    pub newsletter: TimingsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("public"),
            rotation_interval_ms: DEFAULT_ROTATION_INTERVAL.as_millis() as u64,
            preload_images: true,
            contact: SubmissionTimings::CONTACT.into(),
            newsletter: SubmissionTimings::NEWSLETTER.into(),
        }
    }
}

impl SiteConfig {
    /// Load from a JSON file; missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> SiteResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stall or spin the timers.
    pub fn validate(&self) -> SiteResult<()> {
        if self.rotation_interval_ms == 0 {
            return Err(SiteError::Config(
                "rotation interval must be positive".to_string(),
            ));
        }
        for (form, timings) in [("contact", &self.contact), ("newsletter", &self.newsletter)] {
            if timings.success_hold_ms == 0 || timings.error_hold_ms == 0 {
                return Err(SiteError::Config(format!(
                    "{form} hold durations must be positive"
                )));
            }
        }
        Ok(())
    }

    pub fn rotation_interval(&self) -> Duration {
        Duration::from_millis(self.rotation_interval_ms)
    }

    pub fn contact_timings(&self) -> SubmissionTimings {
        self.contact.into()
    }

    pub fn newsletter_timings(&self) -> SubmissionTimings {
        self.newsletter.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_timings() {
        let config = SiteConfig::default();
        assert_eq!(config.rotation_interval(), Duration::from_millis(3000));
        assert_eq!(config.contact_timings(), SubmissionTimings::CONTACT);
        assert_eq!(config.newsletter_timings(), SubmissionTimings::NEWSLETTER);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(&path, r#"{ "rotation_interval_ms": 5000, "preload_images": false }"#)
            .unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.rotation_interval_ms, 5000);
        assert!(!config.preload_images);
        assert_eq!(config.contact_timings(), SubmissionTimings::CONTACT);
    }

    #[test]
    fn partial_timings_keep_form_defaults() {
        let config: SiteConfig =
            serde_json::from_str(r#"{ "contact": { "error_hold_ms": 5000 } }"#).unwrap();
        assert_eq!(config.contact.error_hold_ms, 5000);
        assert_eq!(config.contact.success_hold_ms, 3000);
        assert_eq!(config.contact.send_delay_ms, Some(1200));
        assert_eq!(config.newsletter_timings(), SubmissionTimings::NEWSLETTER);
    }

    #[test]
    fn absent_send_delay_keeps_sending_phase() {
        let config: SiteConfig = serde_json::from_str(
            r#"{ "contact": { "success_hold_ms": 3000, "error_hold_ms": 5000 } }"#,
        )
        .unwrap();
        assert_eq!(
            config.contact_timings().send_delay,
            Some(Duration::from_millis(1200))
        );
    }

    #[test]
    fn null_send_delay_drops_sending_phase() {
        let config: SiteConfig =
            serde_json::from_str(r#"{ "contact": { "send_delay_ms": null } }"#).unwrap();
        assert_eq!(config.contact_timings().send_delay, None);
        assert_eq!(config.contact.error_hold_ms, 2200);

        let config: SiteConfig =
            serde_json::from_str(r#"{ "newsletter": { "send_delay_ms": 800 } }"#).unwrap();
        assert_eq!(
            config.newsletter_timings().send_delay,
            Some(Duration::from_millis(800))
        );
    }

    #[test]
    fn serialized_defaults_read_back() {
        let json = serde_json::to_string(&SiteConfig::default()).unwrap();
        let config: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn zero_interval_rejected() {
        let config = SiteConfig {
            rotation_interval_ms: 0,
            ..SiteConfig::default()
        };
        assert!(matches!(config.validate(), Err(SiteError::Config(_))));
    }

    #[test]
    fn zero_hold_rejected() {
        let mut config = SiteConfig::default();
        config.newsletter.error_hold_ms = 0;
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Config error: newsletter hold durations must be positive"
        );
    }

    #[test]
    fn malformed_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(SiteConfig::load(&path), Err(SiteError::Json(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            SiteConfig::load("/definitely/not/here.json"),
            Err(SiteError::Io(_))
        ));
    }
}
