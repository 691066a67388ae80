use dioxus::prelude::*;
use sudeva_core::content;
use sudeva_core::{AssetCache, SiteConfig};

use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;

/// Images read up front: every image on the page, so none of them falls
/// back to the webview's own asset root.
fn preload_list() -> Vec<&'static str> {
    content::image_paths()
}

/// Root application component.
///
/// Provides global styles and the preloaded image cache, then renders the
/// single landing page. There are no routes; navigation is in-page anchors.
#[component]
pub fn App() -> Element {
    let site = use_context::<SiteConfig>();
    let mut assets: Signal<AssetCache> = use_signal(AssetCache::default);

    // Provide the cache to every section
    use_context_provider(|| assets);

    // Preload once on mount; failures are skipped inside the cache
    use_effect(move || {
        if !site.preload_images {
            tracing::info!("Image preloading disabled");
            return;
        }
        let root = site.assets_dir.clone();
        spawn(async move {
            let cache = AssetCache::preload(root, preload_list()).await;
            assets.set(cache);
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Landing {}
    }
}
