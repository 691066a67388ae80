//! Tracing setup for the desktop binary.
//!
//! Filter precedence: explicit directive, then `RUST_LOG`, then `info`.

use tracing_subscriber::EnvFilter;

use crate::error::{SiteError, SiteResult};

const DEFAULT_FILTER: &str = "info";

/// Build the filter for [`init`].
pub fn filter(directive: Option<&str>) -> SiteResult<EnvFilter> {
    match directive {
        Some(d) => EnvFilter::try_new(d).map_err(|e| SiteError::Logging(e.to_string())),
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Install a global fmt subscriber.
pub fn init(directive: Option<&str>) -> SiteResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(directive)?)
        .try_init()
        .map_err(|e| SiteError::Logging(e.to_string()))
}
