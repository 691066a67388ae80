#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use sudeva_core::SiteConfig;

/// Sudeva Engineers - landing page
#[derive(Parser, Debug)]
#[command(name = "sudeva-desktop")]
#[command(about = "Sudeva Engineers - solar and construction engineering")]
struct Args {
    /// JSON site config (timings, assets dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory that /images/... paths resolve against
    #[arg(short, long)]
    assets_dir: Option<PathBuf>,

    /// Hero slideshow interval in milliseconds
    #[arg(long)]
    rotation_ms: Option<u64>,

    /// Skip reading images up front
    #[arg(long)]
    no_preload: bool,

    /// Tracing filter, e.g. "sudeva=debug" (falls back to RUST_LOG)
    #[arg(long)]
    log: Option<String>,
}

impl Args {
    /// Defaults, then the config file, then flags.
    fn site_config(&self) -> anyhow::Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => SiteConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SiteConfig::default(),
        };

        if let Some(dir) = &self.assets_dir {
            config.assets_dir = dir.clone();
        }
        if let Some(ms) = self.rotation_ms {
            config.rotation_interval_ms = ms;
        }
        if self.no_preload {
            config.preload_images = false;
        }

        config.validate().context("invalid site config")?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    sudeva_core::logging::init(args.log.as_deref()).context("initializing logging")?;

    let site = args.site_config()?;
    tracing::info!(
        "Starting with assets dir {:?}, slideshow every {} ms",
        site.assets_dir,
        site.rotation_interval_ms
    );

    // Window size: roughly a laptop viewport
    let window_width = 1280.0;
    let window_height = 860.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Sudeva Engineers")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(site)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "sudeva-desktop",
            "--assets-dir",
            "/srv/site",
            "--rotation-ms",
            "4500",
            "--no-preload",
        ]);
        let config = args.site_config().unwrap();
        assert_eq!(config.assets_dir, PathBuf::from("/srv/site"));
        assert_eq!(config.rotation_interval_ms, 4500);
        assert!(!config.preload_images);
    }

    #[test]
    fn zero_rotation_rejected() {
        let args = Args::parse_from(["sudeva-desktop", "--rotation-ms", "0"]);
        assert!(args.site_config().is_err());
    }

    #[test]
    fn missing_config_file_reported() {
        let args = Args::parse_from(["sudeva-desktop", "--config", "/nope/site.json"]);
        let err = args.site_config().unwrap_err();
        assert!(err.to_string().contains("/nope/site.json"));
    }
}
