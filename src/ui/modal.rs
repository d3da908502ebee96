//! Modal trait for ephemeral overlay dialogs.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::Theme;
use crate::ui::{Handled, Result};

/// Ephemeral overlay that blocks the screen below.
///
/// Modals capture all input until dismissed. While one is open the screen
/// below receives no key events, which is also what keeps its scrolling
/// suspended.
pub trait Modal {
    /// The message type this modal emits.
    type Msg;

    /// Handle a key event. Modals normally consume every key they do not
    /// recognize so nothing leaks to the screen below.
    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Msg>>;

    /// Handle a mouse event. Default is to ignore the mouse entirely.
    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<Handled<Self::Msg>> {
        _ = mouse;
        Ok(Handled::Ignored)
    }

    /// Render the modal (typically as a centered overlay).
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// Title shown in the modal header (optional).
    fn title(&self) -> Option<&str> {
        None
    }
}
