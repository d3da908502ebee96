//! Maps incoming key events onto configured actions.

use std::sync::Arc;

use crossterm::event::KeyEvent;

use crate::config::actions::{GalleryAction, GlobalAction, ModalAction, NavAction, SearchAction};
use crate::config::keybindings::KeybindingsConfig;

pub struct KeyResolver {
    pub keybindings: Arc<KeybindingsConfig>,
}

impl KeyResolver {
    #[must_use]
    pub fn new(keybindings: Arc<KeybindingsConfig>) -> Self {
        Self { keybindings }
    }

    #[must_use]
    pub fn matches_global(&self, event: &KeyEvent, action: GlobalAction) -> bool {
        let kb = &self.keybindings.global;
        match action {
            GlobalAction::Quit => kb.quit.matches(event),
            GlobalAction::Theme => kb.theme.matches(event),
        }
    }

    #[must_use]
    pub fn matches_nav(&self, event: &KeyEvent, action: NavAction) -> bool {
        let kb = &self.keybindings.navigation;
        match action {
            NavAction::Up => kb.up.matches(event),
            NavAction::Down => kb.down.matches(event),
            NavAction::Home => kb.home.matches(event),
            NavAction::End => kb.end.matches(event),
            NavAction::Select => kb.select.matches(event),
        }
    }

    #[must_use]
    pub fn matches_gallery(&self, event: &KeyEvent, action: GalleryAction) -> bool {
        let kb = &self.keybindings.gallery;
        match action {
            GalleryAction::PlayVideo => kb.play_video.matches(event),
            GalleryAction::ShowImage => kb.show_image.matches(event),
        }
    }

    #[must_use]
    pub fn matches_modal(&self, event: &KeyEvent, action: ModalAction) -> bool {
        let kb = &self.keybindings.modal;
        match action {
            ModalAction::Close => kb.close.matches(event),
            ModalAction::FocusNext => kb.focus_next.matches(event),
            ModalAction::FocusPrev => kb.focus_prev.matches(event),
            ModalAction::Activate => kb.activate.matches(event),
            ModalAction::CopyUrl => kb.copy_url.matches(event),
        }
    }

    #[must_use]
    pub fn matches_search(&self, event: &KeyEvent, action: SearchAction) -> bool {
        let kb = &self.keybindings.search;
        match action {
            SearchAction::Toggle => kb.toggle.matches(event),
            SearchAction::Exit => kb.exit.matches(event),
        }
    }

    #[must_use]
    pub fn display_global(&self, action: GlobalAction) -> String {
        let kb = &self.keybindings.global;
        match action {
            GlobalAction::Quit => kb.quit.display(),
            GlobalAction::Theme => kb.theme.display(),
        }
    }

    #[must_use]
    pub fn display_gallery(&self, action: GalleryAction) -> String {
        let kb = &self.keybindings.gallery;
        match action {
            GalleryAction::PlayVideo => kb.play_video.display(),
            GalleryAction::ShowImage => kb.show_image.display(),
        }
    }

    #[must_use]
    pub fn display_search(&self, action: SearchAction) -> String {
        let kb = &self.keybindings.search;
        match action {
            SearchAction::Toggle => kb.toggle.display(),
            SearchAction::Exit => kb.exit.display(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn resolver() -> KeyResolver {
        KeyResolver::new(Arc::new(KeybindingsConfig::default()))
    }

    #[test]
    fn test_default_modal_bindings() {
        let r = resolver();
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        let back_tab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert!(r.matches_modal(&esc, ModalAction::Close));
        assert!(r.matches_modal(&tab, ModalAction::FocusNext));
        assert!(!r.matches_modal(&tab, ModalAction::FocusPrev));
        assert!(r.matches_modal(&back_tab, ModalAction::FocusPrev));
    }

    #[test]
    fn test_default_gallery_bindings() {
        let r = resolver();
        let v = KeyEvent::new(KeyCode::Char('v'), KeyModifiers::NONE);
        let i = KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE);
        assert!(r.matches_gallery(&v, GalleryAction::PlayVideo));
        assert!(r.matches_gallery(&i, GalleryAction::ShowImage));
        assert!(!r.matches_gallery(&v, GalleryAction::ShowImage));
    }
}
