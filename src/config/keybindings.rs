//! Default keybindings and their config representation.

use crossterm::event::KeyCode;
use serde::{Deserialize, Serialize};

use crate::config::key::{Key, KeyBinding};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalKeybindings {
    pub quit: KeyBinding,
    pub theme: KeyBinding,
}

impl Default for GlobalKeybindings {
    fn default() -> Self {
        Self {
            quit: Key::new(KeyCode::Char('q')).into(),
            theme: Key::new(KeyCode::Char('t')).into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationKeybindings {
    pub up: KeyBinding,
    pub down: KeyBinding,
    pub home: KeyBinding,
    pub end: KeyBinding,
    pub select: KeyBinding,
}

impl Default for NavigationKeybindings {
    fn default() -> Self {
        Self {
            up: KeyBinding::multiple(vec![Key::new(KeyCode::Char('k')), Key::new(KeyCode::Up)]),
            down: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('j')),
                Key::new(KeyCode::Down),
            ]),
            home: KeyBinding::multiple(vec![Key::new(KeyCode::Char('g')), Key::new(KeyCode::Home)]),
            end: KeyBinding::multiple(vec![Key::new(KeyCode::Char('G')), Key::new(KeyCode::End)]),
            select: Key::new(KeyCode::Enter).into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryKeybindings {
    pub play_video: KeyBinding,
    pub show_image: KeyBinding,
}

impl Default for GalleryKeybindings {
    fn default() -> Self {
        Self {
            play_video: Key::new(KeyCode::Char('v')).into(),
            show_image: Key::new(KeyCode::Char('i')).into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModalKeybindings {
    pub close: KeyBinding,
    pub focus_next: KeyBinding,
    pub focus_prev: KeyBinding,
    pub activate: KeyBinding,
    pub copy_url: KeyBinding,
}

impl Default for ModalKeybindings {
    fn default() -> Self {
        Self {
            close: Key::new(KeyCode::Esc).into(),
            focus_next: Key::new(KeyCode::Tab).into(),
            focus_prev: Key::new(KeyCode::BackTab).into(),
            activate: Key::new(KeyCode::Enter).into(),
            copy_url: Key::new(KeyCode::Char('c')).into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchKeybindings {
    pub toggle: KeyBinding,
    pub exit: KeyBinding,
}

impl Default for SearchKeybindings {
    fn default() -> Self {
        Self {
            toggle: Key::new(KeyCode::Char('/')).into(),
            exit: Key::new(KeyCode::Esc).into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    pub global: GlobalKeybindings,
    pub navigation: NavigationKeybindings,
    pub gallery: GalleryKeybindings,
    pub modal: ModalKeybindings,
    pub search: SearchKeybindings,
}
