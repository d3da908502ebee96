//! Modal media viewer: the lightbox overlay.
//!
//! Owns the modal lifecycle: a content slot holding either a video embed or
//! an image, a visibility state, and a focus trap over the modal's controls.
//! The slot is occupied exactly while the modal is open; closing drops the
//! content so nothing of a previous viewing can linger.

use std::sync::Arc;

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::Theme;
use crate::config::{KeyResolver, ModalAction};
use crate::media::MediaContent;
use crate::ui::focus::{FocusTrap, ModalControl};
use crate::ui::{Handled, Modal, Result};

const CLOSE_LABEL: &str = "[ close ]";
const COPY_LABEL: &str = "[ copy url ]";

/// Events the modal emits to the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEvent {
    Closed,
    CopyUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Open,
    Closed,
}

pub struct MediaModal {
    visibility: Visibility,
    content: Option<MediaContent>,
    trap: Option<FocusTrap>,
    resolver: Arc<KeyResolver>,
    // Geometry from the last rendered frame, for mouse hit-testing. The
    // region outside `dialog_area` is the overlay.
    dialog_area: Rect,
    close_area: Rect,
    copy_area: Rect,
}

impl MediaModal {
    #[must_use]
    pub fn new(resolver: Arc<KeyResolver>) -> Self {
        Self {
            visibility: Visibility::Closed,
            content: None,
            trap: None,
            resolver,
            dialog_area: Rect::ZERO,
            close_area: Rect::ZERO,
            copy_area: Rect::ZERO,
        }
    }

    /// Open the modal with `content`, replacing whatever was shown before.
    ///
    /// The previous focus trap is released before a new one is armed, so at
    /// most one trap ever exists. Focus starts on the dismiss control.
    pub fn open(&mut self, content: MediaContent) {
        self.trap = None;
        self.content = Some(content);
        self.visibility = Visibility::Open;

        let mut trap = FocusTrap::new(vec![ModalControl::Close, ModalControl::CopyUrl]);
        trap.focus(ModalControl::Close);
        self.trap = Some(trap);
    }

    /// Close the modal: release the trap, clear the slot, hide. Idempotent.
    pub fn close(&mut self) {
        self.trap = None;
        self.content = None;
        self.visibility = Visibility::Closed;
        self.dialog_area = Rect::ZERO;
        self.close_area = Rect::ZERO;
        self.copy_area = Rect::ZERO;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    #[must_use]
    pub const fn content(&self) -> Option<&MediaContent> {
        self.content.as_ref()
    }

    #[must_use]
    pub fn focused_control(&self) -> Option<ModalControl> {
        self.trap.as_ref().and_then(FocusTrap::focused)
    }

    fn copy_event(&self) -> Handled<ModalEvent> {
        self.content.as_ref().map_or(Handled::Consumed, |c| {
            Handled::Event(ModalEvent::CopyUrl(c.url().to_string()))
        })
    }

    fn control_style(&self, control: ModalControl, theme: &Theme) -> Style {
        if self.focused_control() == Some(control) {
            Style::default()
                .fg(theme.crust)
                .bg(theme.lavender)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.subtext0)
        }
    }

    fn content_lines(content: &MediaContent, theme: &Theme) -> Vec<Line<'static>> {
        let url_style = Style::default()
            .fg(theme.blue)
            .add_modifier(Modifier::UNDERLINED);
        let note_style = Style::default().fg(theme.subtext0);
        match content {
            MediaContent::Embed { url, title } => vec![
                Line::from(Span::styled(
                    format!("▶ {title}"),
                    Style::default()
                        .fg(theme.text)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(url.clone(), url_style)),
                Line::from(""),
                Line::from(Span::styled(
                    "autoplay on · related videos hidden",
                    note_style,
                )),
            ],
            MediaContent::Image { src, alt } => vec![
                Line::from(Span::styled(
                    alt.clone(),
                    Style::default()
                        .fg(theme.text)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(src.clone(), url_style)),
            ],
        }
    }
}

impl Modal for MediaModal {
    type Msg = ModalEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Msg>> {
        // A closed modal has no bindings; Escape and everything else fall
        // through to the screen below.
        if !self.is_open() {
            return Ok(Handled::Ignored);
        }

        if self.resolver.matches_modal(&key, ModalAction::Close) {
            self.close();
            return Ok(ModalEvent::Closed.into());
        }
        if self.resolver.matches_modal(&key, ModalAction::FocusNext) {
            if let Some(trap) = self.trap.as_mut() {
                trap.next();
            }
            return Ok(Handled::Consumed);
        }
        if self.resolver.matches_modal(&key, ModalAction::FocusPrev) {
            if let Some(trap) = self.trap.as_mut() {
                trap.prev();
            }
            return Ok(Handled::Consumed);
        }
        if self.resolver.matches_modal(&key, ModalAction::Activate) {
            return match self.focused_control() {
                Some(ModalControl::Close) => {
                    self.close();
                    Ok(ModalEvent::Closed.into())
                }
                Some(ModalControl::CopyUrl) => Ok(self.copy_event()),
                None => Ok(Handled::Consumed),
            };
        }
        if self.resolver.matches_modal(&key, ModalAction::CopyUrl) {
            return Ok(self.copy_event());
        }

        // Capture everything else so the gallery below stays inert.
        Ok(Handled::Consumed)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<Handled<Self::Msg>> {
        if !self.is_open() {
            return Ok(Handled::Ignored);
        }
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(Handled::Consumed);
        }
        // Not rendered yet, nothing to hit-test against.
        if self.dialog_area.is_empty() {
            return Ok(Handled::Consumed);
        }

        let position = Position::new(mouse.column, mouse.row);
        if self.close_area.contains(position) {
            self.close();
            return Ok(ModalEvent::Closed.into());
        }
        if self.copy_area.contains(position) {
            return Ok(self.copy_event());
        }
        if self.dialog_area.contains(position) {
            return Ok(Handled::Consumed);
        }
        // Anywhere else is the overlay region.
        self.close();
        Ok(ModalEvent::Closed.into())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if !self.is_open() {
            return;
        }
        let Some(content) = self.content.clone() else {
            return;
        };

        // Dim the page below; this whole region dismisses on click.
        frame.render_widget(
            Block::default().style(Style::default().bg(theme.crust)),
            area,
        );

        let dialog_area = area.centered(Constraint::Percentage(70), Constraint::Length(11));
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(format!(" {} ", self.title().unwrap_or_default()))
            .title_style(
                Style::default()
                    .fg(theme.mauve)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.lavender))
            .style(Style::default().bg(theme.base));
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        // Content slot above, control row at the bottom.
        let content_area = Rect {
            height: inner.height.saturating_sub(2),
            ..inner
        };
        let paragraph = Paragraph::new(Self::content_lines(&content, theme))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, content_area);

        let controls_y = inner.y + inner.height.saturating_sub(1);
        let close_width = CLOSE_LABEL.chars().count() as u16;
        let copy_width = COPY_LABEL.chars().count() as u16;
        let total = close_width + 2 + copy_width;
        let controls_x = inner.x + inner.width.saturating_sub(total) / 2;

        let close_area = Rect::new(controls_x, controls_y, close_width, 1);
        let copy_area = Rect::new(controls_x + close_width + 2, controls_y, copy_width, 1);
        frame.render_widget(
            Paragraph::new(CLOSE_LABEL).style(self.control_style(ModalControl::Close, theme)),
            close_area,
        );
        frame.render_widget(
            Paragraph::new(COPY_LABEL).style(self.control_style(ModalControl::CopyUrl, theme)),
            copy_area,
        );

        self.dialog_area = dialog_area;
        self.close_area = close_area;
        self.copy_area = copy_area;
    }

    fn title(&self) -> Option<&str> {
        match self.content {
            Some(MediaContent::Embed { .. }) => Some("Video"),
            Some(MediaContent::Image { .. }) => Some("Image"),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::keybindings::KeybindingsConfig;
    use crate::media::VideoId;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn modal() -> MediaModal {
        MediaModal::new(Arc::new(KeyResolver::new(Arc::new(
            KeybindingsConfig::default(),
        ))))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn embed(id: &str) -> MediaContent {
        MediaContent::embed(&VideoId::new(id).unwrap(), "Carbonara")
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Slot is occupied exactly while the modal is open.
    fn assert_invariant(modal: &MediaModal) {
        assert_eq!(modal.is_open(), modal.content().is_some());
    }

    #[test]
    fn test_open_fills_slot_and_focuses_dismiss() {
        let mut m = modal();
        assert_invariant(&m);

        m.open(embed("feHf-khAmTM"));
        assert!(m.is_open());
        assert_eq!(
            m.content().unwrap().url(),
            "https://www.youtube.com/embed/feHf-khAmTM?rel=0&showinfo=0&autoplay=1"
        );
        assert_eq!(m.focused_control(), Some(ModalControl::Close));
        assert_invariant(&m);
    }

    #[test]
    fn test_close_clears_slot_and_is_idempotent() {
        let mut m = modal();
        m.open(MediaContent::image("images/focaccia.jpg", "Focaccia"));
        m.close();
        assert!(!m.is_open());
        assert!(m.content().is_none());
        assert!(m.focused_control().is_none());
        assert_invariant(&m);

        // Second close changes nothing.
        m.close();
        assert!(!m.is_open());
        assert_invariant(&m);
    }

    #[test]
    fn test_escape_closes_only_when_open() {
        let mut m = modal();
        // Escape on a closed modal is not even consumed.
        assert_eq!(m.handle_key(key(KeyCode::Esc)).unwrap(), Handled::Ignored);

        m.open(embed("abc123"));
        let handled = m.handle_key(key(KeyCode::Esc)).unwrap();
        assert_eq!(handled, Handled::Event(ModalEvent::Closed));
        assert!(!m.is_open());
        assert_invariant(&m);
    }

    #[test]
    fn test_reopen_replaces_content_and_trap() {
        let mut m = modal();
        m.open(embed("first11"));
        m.handle_key(key(KeyCode::Tab)).unwrap();
        assert_eq!(m.focused_control(), Some(ModalControl::CopyUrl));

        // Opening again without closing swaps the slot wholesale and arms a
        // fresh trap focused on the dismiss control.
        m.open(MediaContent::image("images/focaccia.jpg", "Focaccia"));
        assert_eq!(m.content().unwrap().url(), "images/focaccia.jpg");
        assert_eq!(m.focused_control(), Some(ModalControl::Close));
        assert_invariant(&m);
    }

    #[test]
    fn test_tab_cycles_within_modal() {
        let mut m = modal();
        m.open(embed("abc123"));

        m.handle_key(key(KeyCode::Tab)).unwrap();
        assert_eq!(m.focused_control(), Some(ModalControl::CopyUrl));
        // Tab on the last control wraps to the first.
        m.handle_key(key(KeyCode::Tab)).unwrap();
        assert_eq!(m.focused_control(), Some(ModalControl::Close));
        // Shift+Tab on the first control wraps to the last.
        m.handle_key(key(KeyCode::BackTab)).unwrap();
        assert_eq!(m.focused_control(), Some(ModalControl::CopyUrl));
    }

    #[test]
    fn test_activate_dismiss_control_closes() {
        let mut m = modal();
        m.open(embed("abc123"));
        let handled = m.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(handled, Handled::Event(ModalEvent::Closed));
        assert!(!m.is_open());
    }

    #[test]
    fn test_copy_control_emits_url() {
        let mut m = modal();
        m.open(embed("abc123"));
        m.handle_key(key(KeyCode::Tab)).unwrap();
        let handled = m.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(
            handled,
            Handled::Event(ModalEvent::CopyUrl(
                "https://www.youtube.com/embed/abc123?rel=0&showinfo=0&autoplay=1".to_string()
            ))
        );
        // Copying does not dismiss.
        assert!(m.is_open());
    }

    #[test]
    fn test_unrecognized_keys_are_captured_while_open() {
        let mut m = modal();
        m.open(embed("abc123"));
        let handled = m.handle_key(key(KeyCode::Char('j'))).unwrap();
        assert_eq!(handled, Handled::Consumed);
        assert!(m.is_open());
    }

    fn render(m: &mut MediaModal) {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::catppuccin_mocha();
        terminal
            .draw(|frame| m.render(frame, frame.area(), &theme))
            .unwrap();
    }

    #[test]
    fn test_overlay_click_dismisses() {
        let mut m = modal();
        m.open(embed("abc123"));
        render(&mut m);

        // Top-left corner is outside the centered dialog.
        let handled = m.handle_mouse(click(0, 0)).unwrap();
        assert_eq!(handled, Handled::Event(ModalEvent::Closed));
        assert!(!m.is_open());
        assert_invariant(&m);
    }

    #[test]
    fn test_click_inside_dialog_does_not_dismiss() {
        let mut m = modal();
        m.open(embed("abc123"));
        render(&mut m);

        // Dead center of an 80x24 frame lands inside the dialog body.
        let handled = m.handle_mouse(click(40, 10)).unwrap();
        assert_eq!(handled, Handled::Consumed);
        assert!(m.is_open());
    }

    #[test]
    fn test_mouse_ignored_while_closed() {
        let mut m = modal();
        assert_eq!(m.handle_mouse(click(0, 0)).unwrap(), Handled::Ignored);
    }
}
