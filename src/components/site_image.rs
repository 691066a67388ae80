//! Images read from the assets directory.
//!
//! Renders the cached `data:` URI once the file has been read, otherwise the
//! URI-encoded asset path.

use dioxus::prelude::*;

use crate::context::use_image_src;

#[component]
pub fn SiteImage(
    /// Site-absolute path, e.g. "/images/logo.png"
    path: &'static str,
    /// Alt text for accessibility
    alt: String,
    #[props(default = "cover-img".to_string())] class: String,
) -> Element {
    let src = use_image_src(path);

    rsx! {
        img { class: "{class}", src: "{src}", alt: "{alt}" }
    }
}

/// Header logo. Falls back to the company name in text if the image fails.
#[component]
pub fn Logo(path: &'static str, fallback: &'static str) -> Element {
    let mut failed = use_signal(|| false);
    let src = use_image_src(path);

    rsx! {
        if failed() {
            span { class: "logo-text", "{fallback}" }
        } else {
            img {
                class: "logo-img",
                src: "{src}",
                alt: "Sudeva Engineers",
                onerror: move |_| {
                    tracing::debug!("Logo failed to load, showing text");
                    failed.set(true);
                },
            }
        }
    }
}
