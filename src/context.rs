//! Shared state and hooks for the landing page.
//!
//! Provides the site config and preloaded images to all components via
//! use_context, and binds the core state machines to Dioxus signals.
//!
//! ## Usage
//!
//! ```ignore
//! // In a section component
//! let src = use_image_src(LOGO);
//! let rotator = use_rotator(ImageSet::new(HERO_IMAGES)?);
//! let contact = use_simulated_form(ContactFormData::default(), site.contact_timings());
//! ```

use dioxus::prelude::*;
use sudeva_core::{
    run_rotation, AssetCache, Clearable, FormTimer, ImageRotator, ImageSet, SimulatedForm,
    SiteConfig, SubmissionStatus, SubmissionTimings, SubmitOutcome, TokioScheduler, Validate,
};
use tokio_util::sync::CancellationToken;

/// Hook to access the site configuration.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

/// Hook to access preloaded images.
///
/// Starts empty and fills in once preloading finishes; `resolve` falls back
/// to the encoded path until then.
pub fn use_assets() -> Signal<AssetCache> {
    use_context::<Signal<AssetCache>>()
}

/// Hook resolving an image path to its `src`.
///
/// Images come from the configured assets directory. With preloading off,
/// the first render falls back to the encoded path and the file is read in
/// the background; the cache update re-renders with the data URI.
pub fn use_image_src(path: &str) -> String {
    let site = use_site_config();
    let mut assets = use_assets();
    let path = path.to_string();

    use_effect(use_reactive((&path,), move |(path,)| {
        if site.preload_images || assets.peek().contains(&path) {
            return;
        }
        let root = site.assets_dir.clone();
        spawn(async move {
            if let Some(uri) = AssetCache::load(&root, &path).await {
                assets.write().insert(path, uri);
            }
        });
    }));

    let src = assets.read().resolve(&path);
    src
}

/// Hook driving a slideshow.
///
/// Advances once per configured interval. The rotation task is cancelled
/// when the calling component unmounts.
pub fn use_rotator(images: ImageSet) -> Signal<ImageRotator> {
    let interval = use_site_config().rotation_interval();
    let rotator = use_signal(move || ImageRotator::new(images));
    let cancel = use_hook(CancellationToken::new);

    use_hook({
        let cancel = cancel.clone();
        move || {
            let mut rotator = rotator;
            spawn(run_rotation(interval, cancel, move || {
                rotator.write().advance();
            }));
        }
    });

    use_drop(move || cancel.cancel());

    rotator
}

/// A form bound to tokio timers.
///
/// Copyable handle: field edits go through [`update`](Self::update),
/// [`submit`](Self::submit) starts the simulated send.
pub struct FormHandle<F: 'static> {
    form: Signal<SimulatedForm<F>>,
    scheduler: Signal<TokioScheduler<FormTimer>>,
}

impl<F: 'static> Clone for FormHandle<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: 'static> Copy for FormHandle<F> {}

impl<F: Validate + Clearable + Clone + 'static> FormHandle<F> {
    /// Reactive read of the status.
    pub fn status(&self) -> SubmissionStatus {
        self.form.read().status()
    }

    /// Reactive snapshot of the data.
    pub fn data(&self) -> F {
        self.form.read().data().clone()
    }

    /// Edit the form data.
    pub fn update(&mut self, edit: impl FnOnce(&mut F)) {
        edit(self.form.write().data_mut());
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let mut scheduler = self.scheduler.write();
        self.form.write().submit(&mut *scheduler)
    }
}

/// Hook owning a [`SimulatedForm`] and its timers.
///
/// Timer events arrive on a channel and are applied in order. The scheduler
/// lives in a signal owned by the calling component; when the component
/// unmounts the scheduler is dropped, which cancels every pending timer, so
/// nothing mutates the form after disposal.
pub fn use_simulated_form<F>(initial: F, timings: SubmissionTimings) -> FormHandle<F>
where
    F: Validate + Clearable + Clone + 'static,
{
    let form = use_signal(move || SimulatedForm::new(initial, timings));

    let scheduler = use_hook(move || {
        let (scheduler, mut rx) = TokioScheduler::new();
        let scheduler = Signal::new(scheduler);

        let mut form = form;
        let mut timers = scheduler;
        spawn(async move {
            while let Some(timer) = rx.recv().await {
                let mut timers = timers.write();
                form.write().on_timer(timer, &mut *timers);
            }
        });

        scheduler
    });

    FormHandle { form, scheduler }
}
