//! Media content descriptors for the modal viewer.
//!
//! A gallery entry carries at most one video identifier and one image
//! source. Activating a trigger turns the payload into a [`MediaContent`]
//! that occupies the modal's content slot until the modal closes.

use serde::{Deserialize, Serialize};

/// YouTube video identifier read from a gallery entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoId(String);

impl VideoId {
    /// Returns `None` for an empty identifier. Triggers without a payload
    /// are ignored, so an empty id never reaches the modal.
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() { None } else { Some(Self(id)) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Embed URL with autoplay enabled and the related-videos panel off.
    #[must_use]
    pub fn embed_url(&self) -> String {
        format!(
            "https://www.youtube.com/embed/{}?rel=0&showinfo=0&autoplay=1",
            self.0
        )
    }
}

/// Content occupying the modal's slot.
///
/// Exactly one variant is present at a time. The slot is dropped in full on
/// close so no playback state can outlive the modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaContent {
    Embed { url: String, title: String },
    Image { src: String, alt: String },
}

impl MediaContent {
    pub fn embed(id: &VideoId, title: impl Into<String>) -> Self {
        Self::Embed {
            url: id.embed_url(),
            title: title.into(),
        }
    }

    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::Image {
            src: src.into(),
            alt: alt.into(),
        }
    }

    /// URL handed to the copy control.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Embed { url, .. } => url,
            Self::Image { src, .. } => src,
        }
    }
}

/// Which trigger was activated on a gallery entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerKind {
    PlayVideo,
    ShowImage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_url() {
        let id = VideoId::new("feHf-khAmTM").unwrap();
        assert_eq!(
            id.embed_url(),
            "https://www.youtube.com/embed/feHf-khAmTM?rel=0&showinfo=0&autoplay=1"
        );
    }

    #[test]
    fn test_empty_video_id_rejected() {
        assert!(VideoId::new("").is_none());
        assert!(VideoId::new(String::new()).is_none());
    }

    #[test]
    fn test_content_url() {
        let id = VideoId::new("abc123").unwrap();
        let embed = MediaContent::embed(&id, "Carbonara");
        assert_eq!(
            embed.url(),
            "https://www.youtube.com/embed/abc123?rel=0&showinfo=0&autoplay=1"
        );

        let image = MediaContent::image("images/carbonara.jpg", "Carbonara");
        assert_eq!(image.url(), "images/carbonara.jpg");
    }
}
