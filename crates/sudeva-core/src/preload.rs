//! Eager image preloading.
//!
//! Every image is read from the configured assets directory and handed to the
//! webview as a `data:` URI. By default all of them are read once when the
//! page mounts; with preloading off each image is read when it first shows.
//! A file that cannot be read is skipped; the page then falls back to the
//! plain (URI-encoded) path for it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use base64::Engine;
use futures::future::join_all;
use tracing::{debug, info};

/// Percent-encode a path the way a browser's `encodeURI` would for our
/// asset paths: each segment is encoded, `/` separators are kept.
pub fn encode_uri(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// MIME type guessed from the file extension.
fn mime_for(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Resolve a site-absolute asset path (`/images/x.png`) under `root`.
fn on_disk(root: &Path, path: &str) -> PathBuf {
    root.join(path.trim_start_matches('/'))
}

/// Preloaded images keyed by their site path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetCache {
    uris: HashMap<String, String>,
}

impl AssetCache {
    /// Read every path concurrently and keep the ones that load.
    pub async fn preload<I, S>(root: impl AsRef<Path>, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let root = root.as_ref();
        let loads = paths.into_iter().map(Into::into).map(|path: String| async move {
            let uri = Self::load(root, &path).await?;
            Some((path, uri))
        });

        let uris: HashMap<_, _> = join_all(loads).await.into_iter().flatten().collect();

        info!("Preloaded {} images", uris.len());
        Self { uris }
    }

    /// Read one image under `root` as a `data:` URI, `None` if it cannot be read.
    pub async fn load(root: impl AsRef<Path>, path: &str) -> Option<String> {
        let file = on_disk(root.as_ref(), path);
        match tokio::fs::read(&file).await {
            Ok(bytes) => {
                let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
                Some(format!("data:{};base64,{}", mime_for(path), encoded))
            }
            Err(e) => {
                debug!("Image skipped {}: {}", file.display(), e);
                None
            }
        }
    }

    /// Cache a URI loaded after the initial preload.
    pub fn insert(&mut self, path: impl Into<String>, uri: String) {
        self.uris.insert(path.into(), uri);
    }

    pub fn len(&self) -> usize {
        self.uris.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uris.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.uris.contains_key(path)
    }

    /// `src` value for an image: the cached data URI, or the encoded path.
    pub fn resolve(&self, path: &str) -> String {
        self.uris
            .get(path)
            .cloned()
            .unwrap_or_else(|| encode_uri(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_keeps_separators() {
        assert_eq!(
            encode_uri("/images/1_front web page.jpg"),
            "/images/1_front%20web%20page.jpg"
        );
        assert_eq!(encode_uri("/images/logo.png"), "/images/logo.png");
    }

    #[test]
    fn mime_from_extension() {
        assert_eq!(mime_for("a.PNG"), "image/png");
        assert_eq!(mime_for("Team/Deepak yadav.jpeg"), "image/jpeg");
        assert_eq!(mime_for("noext"), "application/octet-stream");
    }

    #[test]
    fn resolve_falls_back_to_path() {
        let cache = AssetCache::default();
        assert!(cache.is_empty());
        assert_eq!(cache.resolve("/a b.png"), "/a%20b.png");
    }

    #[tokio::test]
    async fn preload_skips_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("images")).unwrap();
        std::fs::write(dir.path().join("images/hero one.png"), [0x89, b'P', b'N', b'G']).unwrap();

        let cache =
            AssetCache::preload(dir.path(), ["/images/hero one.png", "/images/missing.jpg"]).await;

        assert_eq!(cache.len(), 1);
        assert!(cache.contains("/images/hero one.png"));
        assert_eq!(cache.resolve("/images/hero one.png"), "data:image/png;base64,iVBORw==");
        assert_eq!(cache.resolve("/images/missing.jpg"), "/images/missing.jpg");
    }

    #[tokio::test]
    async fn single_load_resolves_under_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("Sudeva Website Assets/Blog")).unwrap();
        std::fs::write(dir.path().join("Sudeva Website Assets/Blog/6.png"), [0x89, b'P', b'N', b'G'])
            .unwrap();

        let mut cache = AssetCache::default();
        let uri = AssetCache::load(dir.path(), "/Sudeva Website Assets/Blog/6.png")
            .await
            .unwrap();
        cache.insert("/Sudeva Website Assets/Blog/6.png", uri);

        assert_eq!(
            cache.resolve("/Sudeva Website Assets/Blog/6.png"),
            "data:image/png;base64,iVBORw=="
        );
        assert!(AssetCache::load(dir.path(), "/images/EPC1.png").await.is_none());
    }
}
