//! Hero slideshow rotation.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::{SiteError, SiteResult};

/// Default time each hero image stays on screen.
pub const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_millis(3000);

/// Fixed, non-empty, ordered list of image references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSet {
    images: Vec<String>,
}

impl ImageSet {
    /// Build a set, rejecting an empty list.
    pub fn new<I, S>(images: I) -> SiteResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let images: Vec<String> = images.into_iter().map(Into::into).collect();
        if images.is_empty() {
            return Err(SiteError::EmptyImageSet);
        }
        Ok(Self { images })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always `false`; kept for the `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.images.iter().map(String::as_str)
    }

    /// Endless `0, 1, …, n-1, 0, 1, …` sequence.
    pub fn indices(&self) -> Indices {
        Indices {
            len: self.images.len(),
            next: 0,
        }
    }
}

/// Infinite rotation index sequence. Not `Clone`: it cannot be restarted.
#[derive(Debug)]
pub struct Indices {
    len: usize,
    next: usize,
}

impl Iterator for Indices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.next;
        self.next = (self.next + 1) % self.len;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Current position within an [`ImageSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRotator {
    images: ImageSet,
    index: usize,
}

impl ImageRotator {
    pub fn new(images: ImageSet) -> Self {
        Self { images, index: 0 }
    }

    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Reference of the image on screen.
    pub fn current(&self) -> &str {
        // index is always < len and len > 0
        &self.images.images[self.index]
    }

    /// Alt text for the image on screen ("Hero 1", "Hero 2", ...).
    pub fn caption(&self) -> String {
        format!("Hero {}", self.index + 1)
    }

    /// Step one image forward, wrapping at the end. Returns the new index.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.images.len();
        self.index
    }

    /// Index shown after `ticks` advances from the start.
    pub fn index_after(&self, ticks: u64) -> usize {
        (ticks % self.images.len() as u64) as usize
    }
}

/// Call `on_tick` once per `interval` until `cancel` fires.
///
/// The first call happens one full interval after start. The hosting view
/// must cancel the token on teardown so no tick lands after disposal.
pub async fn run_rotation(
    interval: Duration,
    cancel: CancellationToken,
    mut on_tick: impl FnMut(),
) {
    let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + interval, interval);
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!("Rotation stopped");
                return;
            }
            _ = ticker.tick() => on_tick(),
        }
    }
}
