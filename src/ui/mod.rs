//! UI trait hierarchy.
//!
//! - [`Component`] - reusable, interactive building blocks
//! - [`Screen`] - full-page views that orchestrate components
//! - [`Modal`] - ephemeral overlays that block the screen below
//! - [`Handled`] - result of handling an input event

mod component;
pub mod focus;
pub mod gallery_screen;
pub mod media_modal;
mod modal;
mod screen;
pub mod theme_selector;
pub mod toast;

pub use component::Component;
pub use modal::Modal;
pub use screen::Screen;

/// Result type alias for UI operations.
pub type Result<T> = std::result::Result<T, color_eyre::Report>;

/// Result of handling an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled<E> {
    /// Input was not handled, parent should process it.
    Ignored,
    /// Input was consumed but produced no event.
    Consumed,
    /// Input was consumed and produced an event.
    Event(E),
}

impl<E> Handled<E> {
    /// True if the input was consumed (not ignored).
    pub fn is_consumed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

impl<E> From<E> for Handled<E> {
    fn from(event: E) -> Self {
        Self::Event(event)
    }
}

impl<E> From<Handled<E>> for Result<Handled<E>> {
    fn from(handled: Handled<E>) -> Self {
        Ok(handled)
    }
}
