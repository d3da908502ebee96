//! Gallery model: the media entries the screen lists and their triggers.
//!
//! Galleries are plain TOML files. Each entry may carry a video identifier,
//! an image source, both, or neither. Payloads are read at activation time;
//! an absent or empty payload makes the activation a silent no-op.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::media::{MediaContent, TriggerKind, VideoId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub title: String,
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub image_src: Option<String>,
}

impl GalleryEntry {
    /// Reads the payload for `kind` and builds the content the modal should
    /// show. Returns `None` when the payload is absent or empty.
    #[must_use]
    pub fn trigger(&self, kind: TriggerKind) -> Option<MediaContent> {
        match kind {
            TriggerKind::PlayVideo => {
                let id = VideoId::new(self.video_id.clone().unwrap_or_default())?;
                Some(MediaContent::embed(&id, self.title.clone()))
            }
            TriggerKind::ShowImage => {
                let src = self.image_src.clone().unwrap_or_default();
                if src.is_empty() {
                    return None;
                }
                Some(MediaContent::image(src, self.title.clone()))
            }
        }
    }

    #[must_use]
    pub fn has_video(&self) -> bool {
        self.video_id.as_deref().is_some_and(|v| !v.is_empty())
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image_src.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Viewer section of a gallery file. A gallery can ship without a viewer,
/// in which case triggers are silently inert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Gallery {
    #[serde(default)]
    pub viewer: ViewerConfig,
    #[serde(default)]
    pub entries: Vec<GalleryEntry>,
}

impl Gallery {
    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let content = fs::read_to_string(path)?;
        let gallery: Self = toml::from_str(&content)?;
        debug!("Loaded gallery with {} entries from {:?}", gallery.entries.len(), path);
        Ok(gallery)
    }

    /// Built-in gallery so the binary does something useful without a file.
    #[must_use]
    pub fn demo() -> Self {
        let entry = |title: &str, video: Option<&str>, image: Option<&str>| GalleryEntry {
            title: title.to_string(),
            video_id: video.map(String::from),
            image_src: image.map(String::from),
        };
        Self {
            viewer: ViewerConfig::default(),
            entries: vec![
                entry(
                    "Spaghetti carbonara",
                    Some("qoHnwOHLiMk"),
                    Some("images/carbonara.jpg"),
                ),
                entry("Risotto ai funghi", Some("NKtR3v3mXrk"), None),
                entry("Focaccia barese", None, Some("images/focaccia.jpg")),
                entry("Tiramisu (coming soon)", None, None),
            ],
        }
    }
}
