//! Hero section with the background slideshow.

use dioxus::prelude::*;
use sudeva_core::content::{Anchor, HERO_CTAS, HERO_IMAGES, HERO_SUBTITLE, TAGLINE};
use sudeva_core::ImageSet;
use sudeva_ui::{ButtonVariant, LinkButton};

use crate::context::{use_image_src, use_rotator};

/// Hero section. An empty image list only loses the slideshow backdrop.
#[component]
pub fn Hero() -> Element {
    let backdrop = match ImageSet::new(HERO_IMAGES) {
        Ok(images) => rsx! { HeroSlideshow { images } },
        Err(err) => {
            tracing::error!(%err, "Hero slideshow disabled");
            rsx! {}
        }
    };

    rsx! {
        section { id: Anchor::Home.id(), class: "hero",
            {backdrop}
            HeroContent {}
        }
    }
}

/// Rotating background image with the gradient overlay.
#[component]
fn HeroSlideshow(images: ImageSet) -> Element {
    let rotator = use_rotator(images);

    let (current, caption) = {
        let r = rotator.read();
        (r.current().to_string(), r.caption())
    };
    let src = use_image_src(&current);

    rsx! {
        div { class: "hero-backdrop",
            img {
                class: "hero-slide",
                src: "{src}",
                alt: "{caption}",
            }
            div { class: "hero-overlay" }
        }
    }
}

#[component]
fn HeroContent() -> Element {
    rsx! {
        div { class: "hero-content",
            h1 { class: "hero-title", "{TAGLINE}" }
            p { class: "hero-subtitle", "{HERO_SUBTITLE}" }
            div { class: "hero-actions",
                for (i, cta) in HERO_CTAS.iter().enumerate() {
                    LinkButton {
                        variant: hero_cta_variant(i),
                        href: cta.target.href(),
                        "{cta.label}"
                    }
                }
            }
        }
    }
}

/// First call to action is filled, the rest outlined.
fn hero_cta_variant(index: usize) -> ButtonVariant {
    if index == 0 {
        ButtonVariant::Light
    } else {
        ButtonVariant::Outline
    }
}
