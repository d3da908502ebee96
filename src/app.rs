//! Application wiring: event loop, command routing, overlay stack.

use std::sync::Arc;

use arboard::Clipboard;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

use crate::Theme;
use crate::command::Command;
use crate::config::{self, GlobalAction, KeyResolver};
use crate::gallery::Gallery;
use crate::media::MediaContent;
use crate::theme::theme_from_name;
use crate::tui::{Event, Tui};
use crate::ui::gallery_screen::{GalleryMsg, GalleryScreen};
use crate::ui::media_modal::{MediaModal, ModalEvent};
use crate::ui::theme_selector::{ThemeSelector, ThemeSelectorEvent};
use crate::ui::toast::ToastManager;
use crate::ui::{Component, Handled, Modal, Screen};

pub struct App {
    gallery: GalleryScreen,
    /// Absent when the gallery file disables the viewer; open requests are
    /// then silent no-ops, the way a page without modal markup behaves.
    modal: Option<MediaModal>,
    theme_selector: Option<ThemeSelector>,
    toasts: ToastManager,
    resolver: Arc<KeyResolver>,
    theme: Theme,
    theme_name: String,
    should_quit: bool,
    should_suspend: bool,
    command_tx: UnboundedSender<Command>,
    command_rx: UnboundedReceiver<Command>,
}

impl App {
    #[must_use]
    pub fn new(gallery: Gallery, resolver: Arc<KeyResolver>, theme_name: String) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let modal = gallery
            .viewer
            .enabled
            .then(|| MediaModal::new(Arc::clone(&resolver)));
        let theme = theme_from_name(&theme_name);
        Self {
            gallery: GalleryScreen::new(gallery.entries, Arc::clone(&resolver)),
            modal,
            theme_selector: None,
            toasts: ToastManager::default(),
            resolver,
            theme,
            theme_name,
            should_quit: false,
            should_suspend: false,
            command_tx,
            command_rx,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::new(60.0, 4.0)?;
        tui.enter()?;

        loop {
            self.handle_events(&mut tui).await?;
            self.handle_commands(&mut tui)?;
            if self.should_suspend {
                tui.suspend()?;
                self.command_tx.send(Command::Resume)?;
                self.command_tx.send(Command::ClearScreen)?;
                tui.enter()?;
            } else if self.should_quit {
                break;
            }
        }

        tui.exit()?;
        Ok(())
    }

    async fn handle_events(&mut self, tui: &mut Tui) -> color_eyre::Result<()> {
        let Some(event) = tui.next_event().await else {
            return Ok(());
        };

        match event {
            Event::Quit => self.command_tx.send(Command::Quit)?,
            Event::Tick => self.command_tx.send(Command::Tick)?,
            Event::Render => self.command_tx.send(Command::Render)?,
            Event::Resize(width, height) => self.command_tx.send(Command::Resize(width, height))?,
            Event::Key(key) => self.handle_key_event(key)?,
            Event::Mouse(mouse) => self.handle_mouse_event(mouse)?,
            _ => {}
        }

        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> color_eyre::Result<()> {
        // Topmost overlay first: theme selector, then the media modal, then
        // the gallery. An open modal captures all keys, which is what keeps
        // the gallery from scrolling underneath.
        if let Some(selector) = self.theme_selector.as_mut() {
            if let Handled::Event(event) = selector.handle_key(key)? {
                self.theme_selector = None;
                if let ThemeSelectorEvent::Chosen(name) = event {
                    self.command_tx.send(Command::SelectTheme(name))?;
                }
            }
            return Ok(());
        }

        if self.modal.as_ref().is_some_and(MediaModal::is_open) {
            if let Some(modal) = self.modal.as_mut() {
                match modal.handle_key(key)? {
                    Handled::Event(ModalEvent::Closed) => {
                        self.command_tx.send(Command::CloseModal)?;
                    }
                    Handled::Event(ModalEvent::CopyUrl(url)) => {
                        self.command_tx.send(Command::CopyUrl(url))?;
                    }
                    Handled::Consumed | Handled::Ignored => {}
                }
            }
            return Ok(());
        }

        match self.gallery.handle_key(key)? {
            Handled::Event(GalleryMsg::Open(content)) => {
                self.command_tx.send(Command::OpenMedia(content))?;
                return Ok(());
            }
            Handled::Consumed => return Ok(()),
            Handled::Ignored => {}
        }

        if self.resolver.matches_global(&key, GlobalAction::Quit) {
            self.command_tx.send(Command::Quit)?;
        } else if self.resolver.matches_global(&key, GlobalAction::Theme) {
            self.theme_selector = Some(ThemeSelector::new(
                &self.theme_name,
                Arc::clone(&self.resolver),
            ));
        }
        Ok(())
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> color_eyre::Result<()> {
        let Some(modal) = self.modal.as_mut() else {
            return Ok(());
        };
        match modal.handle_mouse(mouse)? {
            Handled::Event(ModalEvent::Closed) => {
                self.command_tx.send(Command::CloseModal)?;
            }
            Handled::Event(ModalEvent::CopyUrl(url)) => {
                self.command_tx.send(Command::CopyUrl(url))?;
            }
            Handled::Consumed | Handled::Ignored => {}
        }
        Ok(())
    }

    fn handle_commands(&mut self, tui: &mut Tui) -> color_eyre::Result<()> {
        while let Ok(command) = self.command_rx.try_recv() {
            if command != Command::Tick && command != Command::Render {
                debug!("Handling command: {:?}", command);
            }

            match command {
                Command::Tick => self.toasts.on_tick(),
                Command::Quit => self.should_quit = true,
                Command::Suspend => self.should_suspend = true,
                Command::Resume => self.should_suspend = false,
                Command::ClearScreen => tui.clear()?,
                Command::Resize(width, height) => self.handle_resize(tui, width, height)?,
                Command::Render => self.render(tui)?,
                Command::OpenMedia(content) => self.open_media(content),
                Command::CloseModal => self.close_modal(),
                Command::CopyUrl(url) => self.copy_url(&url),
                Command::SelectTheme(name) => self.select_theme(name),
            }
        }
        Ok(())
    }

    /// Open the modal viewer. Silently does nothing when the gallery ships
    /// without a viewer.
    fn open_media(&mut self, content: MediaContent) {
        if let Some(modal) = self.modal.as_mut() {
            modal.open(content);
            self.gallery.set_scroll_locked(true);
        } else {
            debug!("Viewer disabled, ignoring open request");
        }
    }

    fn close_modal(&mut self) {
        if let Some(modal) = self.modal.as_mut() {
            modal.close();
        }
        self.gallery.set_scroll_locked(false);
    }

    fn copy_url(&mut self, url: &str) {
        match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(url.to_string())) {
            Ok(()) => self.toasts.show("URL copied"),
            Err(error) => warn!("Clipboard unavailable: {error}"),
        }
    }

    fn select_theme(&mut self, name: String) {
        self.theme = theme_from_name(&name);
        self.theme_name.clone_from(&name);
        if let Err(error) = config::save_theme(&name) {
            warn!("Failed to persist theme: {error}");
        }
        self.toasts.show(format!("Theme: {name}"));
    }

    fn handle_resize(&mut self, tui: &mut Tui, width: u16, height: u16) -> color_eyre::Result<()> {
        tui.resize(Rect::new(0, 0, width, height))?;
        self.render(tui)?;
        Ok(())
    }

    fn render(&mut self, tui: &mut Tui) -> color_eyre::Result<()> {
        tui.draw(|frame| {
            let area = frame.area();
            self.gallery.render(frame, area, &self.theme);
            if let Some(modal) = self.modal.as_mut() {
                modal.render(frame, area, &self.theme);
            }
            if let Some(selector) = self.theme_selector.as_mut() {
                selector.render(frame, area, &self.theme);
            }
            self.toasts.render(frame, area, &self.theme);
        })?;
        Ok(())
    }
}
