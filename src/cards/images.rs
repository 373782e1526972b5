//! Card image cache.
//!
//! Images are read once, base64 encoded and kept for the lifetime of the
//! process. Nothing is ever evicted. A card without an asset simply has no
//! entry and the caller shows a text placeholder instead.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const PLACEHOLDER: &str = "[IMAGE_NOT_FOUND]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mime {
    Gif,
    Png,
}

impl Mime {
    /// Lookup order when loading from disk; also breaks ties in preload.
    const PREFERENCE: [Mime; 2] = [Mime::Gif, Mime::Png];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mime::Gif => "image/gif",
            Mime::Png => "image/png",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Mime::Gif => "gif",
            Mime::Png => "png",
        }
    }

    fn rank(&self) -> usize {
        Self::PREFERENCE
            .iter()
            .position(|mime| mime == self)
            .unwrap_or(Self::PREFERENCE.len())
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "gif" => Some(Mime::Gif),
            "png" => Some(Mime::Png),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    /// Base64 encoded file contents.
    pub data: String,
    pub mime: Mime,
}

impl CardImage {
    pub fn from_bytes(bytes: &[u8], mime: Mime) -> Self {
        Self {
            data: STANDARD.encode(bytes),
            mime,
        }
    }

    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime.as_str(), self.data)
    }

    pub fn encoded_len(&self) -> usize {
        self.data.len()
    }
}

/// File stem for a card name: "The High Priestess" → "the_high_priestess".
pub fn asset_key(card_name: &str) -> String {
    card_name.to_lowercase().replace(' ', "_")
}

#[derive(Debug, Default)]
pub struct ImageCache {
    dir: Option<PathBuf>,
    entries: HashMap<String, CardImage>,
}

impl ImageCache {
    /// Cache with no backing directory; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Cache that reads lazily from `dir` without preloading.
    pub fn lazy(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
            entries: HashMap::new(),
        }
    }

    /// Loads every gif/png in `dir`. A missing directory gives an empty cache.
    pub fn preload(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let mut cache = Self::lazy(dir.clone());

        let read_dir = match fs::read_dir(&dir) {
            Ok(read_dir) => read_dir,
            Err(err) => {
                tracing::warn!(dir = %dir.display(), %err, "card asset directory unavailable");
                return cache;
            }
        };

        for entry in read_dir.flatten() {
            let path = entry.path();
            let (Some(mime), Some(stem)) = (
                Mime::from_path(&path),
                path.file_stem().and_then(|s| s.to_str()),
            ) else {
                continue;
            };
            if let Some(existing) = cache.entries.get(stem) {
                if existing.mime.rank() <= mime.rank() {
                    continue;
                }
            }
            match fs::read(&path) {
                Ok(bytes) => {
                    cache
                        .entries
                        .insert(stem.to_string(), CardImage::from_bytes(&bytes, mime));
                }
                Err(err) => tracing::warn!(path = %path.display(), %err, "skipping unreadable asset"),
            }
        }

        tracing::info!(count = cache.entries.len(), dir = %dir.display(), "preloaded card images");
        cache
    }

    /// Cached image for a card, without touching the disk.
    pub fn get(&self, card_name: &str) -> Option<&CardImage> {
        self.entries.get(&asset_key(card_name))
    }

    /// Cached image, falling back to the asset directory and memoizing the hit.
    pub fn load(&mut self, card_name: &str) -> Option<&CardImage> {
        let key = asset_key(card_name);
        if !self.entries.contains_key(&key) {
            let image = self.read_from_disk(&key)?;
            tracing::debug!(card = card_name, "loaded card image from disk");
            self.entries.insert(key.clone(), image);
        }
        self.entries.get(&key)
    }

    fn read_from_disk(&self, key: &str) -> Option<CardImage> {
        let dir = self.dir.as_ref()?;
        Mime::PREFERENCE.iter().find_map(|mime| {
            let path = dir.join(format!("{}.{}", key, mime.extension()));
            fs::read(&path)
                .ok()
                .map(|bytes| CardImage::from_bytes(&bytes, *mime))
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_key() {
        assert_eq!(asset_key("The High Priestess"), "the_high_priestess");
        assert_eq!(asset_key("Death"), "death");
    }

    #[test]
    fn test_preload_reads_gif_and_png() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("the_fool.gif"), b"GIF89a").unwrap();
        fs::write(dir.path().join("death.png"), b"\x89PNG").unwrap();
        fs::write(dir.path().join("notes.txt"), b"ignored").unwrap();

        let cache = ImageCache::preload(dir.path());
        assert_eq!(cache.len(), 2);

        let fool = cache.get("The Fool").unwrap();
        assert_eq!(fool.mime, Mime::Gif);
        assert_eq!(fool.data, STANDARD.encode(b"GIF89a"));
        assert_eq!(cache.get("Death").unwrap().mime, Mime::Png);
    }

    #[test]
    fn test_preload_missing_dir_is_empty() {
        let cache = ImageCache::preload("/definitely/not/here");
        assert!(cache.is_empty());
        assert!(cache.get("The Fool").is_none());
    }

    #[test]
    fn test_load_falls_back_to_disk_and_memoizes() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = ImageCache::lazy(dir.path());
        fs::write(dir.path().join("the_star.png"), b"star").unwrap();

        assert!(cache.get("The Star").is_none());
        assert!(cache.load("The Star").is_some());

        // still served after the file disappears
        fs::remove_file(dir.path().join("the_star.png")).unwrap();
        assert!(cache.get("The Star").is_some());
    }

    #[test]
    fn test_load_prefers_gif() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("the_sun.png"), b"png").unwrap();
        fs::write(dir.path().join("the_sun.gif"), b"gif").unwrap();

        let mut cache = ImageCache::lazy(dir.path());
        assert_eq!(cache.load("The Sun").unwrap().mime, Mime::Gif);
    }

    #[test]
    fn test_preload_prefers_gif() {
        let dir = tempfile::tempdir().unwrap();
        for key in ["the_sun", "the_moon", "the_star", "death", "justice", "the_world"] {
            fs::write(dir.path().join(format!("{}.png", key)), b"png").unwrap();
            fs::write(dir.path().join(format!("{}.gif", key)), b"gif").unwrap();
        }

        let cache = ImageCache::preload(dir.path());
        assert_eq!(cache.len(), 6);
        for name in ["The Sun", "The Moon", "The Star", "Death", "Justice", "The World"] {
            let image = cache.get(name).unwrap();
            assert_eq!(image.mime, Mime::Gif, "{}", name);
            assert_eq!(image.data, STANDARD.encode(b"gif"));
        }
    }

    #[test]
    fn test_load_missing_asset_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = ImageCache::lazy(dir.path());
        assert!(cache.load("The Moon").is_none());
        assert!(ImageCache::empty().load("The Moon").is_none());
    }

    #[test]
    fn test_data_uri() {
        let image = CardImage::from_bytes(b"abc", Mime::Png);
        assert_eq!(image.data_uri(), "data:image/png;base64,YWJj");
        assert_eq!(image.encoded_len(), 4);
    }
}
