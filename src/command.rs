//! Commands routed through the app's channel.

use serde::{Deserialize, Serialize};

use crate::media::MediaContent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    ClearScreen,

    /// Open the modal viewer with the given content. A no-op when the
    /// gallery ships without a viewer.
    OpenMedia(MediaContent),
    /// Dismiss the modal viewer.
    CloseModal,
    /// Copy a URL to the system clipboard.
    CopyUrl(String),
    /// Switch and persist the color theme.
    SelectTheme(String),
}
