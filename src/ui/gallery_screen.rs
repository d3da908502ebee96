//! Gallery screen: lists the media entries and activates their triggers.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::Theme;
use crate::config::{GalleryAction, KeyResolver, NavAction, SearchAction};
use crate::gallery::GalleryEntry;
use crate::media::{MediaContent, TriggerKind};
use crate::search::Matcher;
use crate::ui::{Handled, Result, Screen};

/// Messages the gallery emits to the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryMsg {
    Open(MediaContent),
}

pub struct GalleryScreen {
    entries: Vec<GalleryEntry>,
    selected: usize,
    filter: Option<String>,
    /// True while keystrokes edit the filter pattern. A confirmed filter
    /// stays applied with input mode off, so triggers work on the
    /// narrowed list.
    filter_input: bool,
    matcher: Matcher,
    scroll_locked: bool,
    resolver: Arc<KeyResolver>,
    list_state: ListState,
}

impl GalleryScreen {
    #[must_use]
    pub fn new(entries: Vec<GalleryEntry>, resolver: Arc<KeyResolver>) -> Self {
        Self {
            entries,
            selected: 0,
            filter: None,
            filter_input: false,
            matcher: Matcher::new(),
            scroll_locked: false,
            resolver,
            list_state: ListState::default(),
        }
    }

    /// Suppresses scrolling while the modal above is open, mirroring the
    /// page-level scroll lock of a browser lightbox.
    pub const fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    #[must_use]
    pub const fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Indices of the visible entries, filtered and ranked when a search
    /// pattern is active.
    fn visible_indices(&self) -> Vec<usize> {
        match self.filter.as_deref() {
            None | Some("") => (0..self.entries.len()).collect(),
            Some(pattern) => {
                let mut scored: Vec<(usize, i64)> = self
                    .entries
                    .iter()
                    .enumerate()
                    .filter_map(|(i, e)| self.matcher.score(&e.title, pattern).map(|s| (i, s)))
                    .collect();
                scored.sort_by_key(|(_, score)| std::cmp::Reverse(*score));
                scored.into_iter().map(|(i, _)| i).collect()
            }
        }
    }

    #[must_use]
    pub fn selected_entry(&self) -> Option<&GalleryEntry> {
        let visible = self.visible_indices();
        visible.get(self.selected).map(|&i| &self.entries[i])
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_indices().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Activates the trigger of the selected entry. Entries without the
    /// requested payload are silently ignored.
    fn activate(&self, kind: TriggerKind) -> Handled<GalleryMsg> {
        self.selected_entry()
            .and_then(|entry| entry.trigger(kind))
            .map_or(Handled::Consumed, |content| {
                Handled::Event(GalleryMsg::Open(content))
            })
    }

    /// Enter prefers the video trigger and falls back to the image.
    fn activate_preferred(&self) -> Handled<GalleryMsg> {
        let Some(entry) = self.selected_entry() else {
            return Handled::Consumed;
        };
        let content = entry
            .trigger(TriggerKind::PlayVideo)
            .or_else(|| entry.trigger(TriggerKind::ShowImage));
        content.map_or(Handled::Consumed, |c| Handled::Event(GalleryMsg::Open(c)))
    }

    /// Keystrokes while the filter pattern is being edited. Enter confirms
    /// the filter and leaves input mode; Esc discards it.
    fn handle_search_key(&mut self, key: KeyEvent) -> Handled<GalleryMsg> {
        if self.resolver.matches_search(&key, SearchAction::Exit) {
            self.filter = None;
            self.filter_input = false;
            self.clamp_selection();
            return Handled::Consumed;
        }
        match key.code {
            KeyCode::Enter => {
                self.filter_input = false;
                if self.filter.as_deref() == Some("") {
                    self.filter = None;
                }
                Handled::Consumed
            }
            KeyCode::Backspace => {
                if let Some(filter) = self.filter.as_mut() {
                    filter.pop();
                }
                self.clamp_selection();
                Handled::Consumed
            }
            KeyCode::Char(c) => {
                if let Some(filter) = self.filter.as_mut() {
                    filter.push(c);
                }
                self.selected = 0;
                Handled::Consumed
            }
            _ => Handled::Ignored,
        }
    }

    fn entry_item(entry: &GalleryEntry, theme: &Theme) -> ListItem<'static> {
        let mut spans = vec![Span::styled(
            entry.title.clone(),
            Style::default().fg(theme.text),
        )];
        if entry.has_video() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled("▶ video", Style::default().fg(theme.green)));
        }
        if entry.has_image() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled("🖼 image", Style::default().fg(theme.blue)));
        }
        ListItem::new(Line::from(spans))
    }

    fn footer_line(&self, theme: &Theme) -> Line<'static> {
        let key_style = Style::default()
            .fg(theme.peach)
            .add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(theme.subtext0);
        let hint = |key: String, label: &str| {
            vec![
                Span::styled(format!("[{key}]"), key_style),
                Span::styled(format!(" {label}  "), label_style),
            ]
        };

        let mut spans = Vec::new();
        spans.extend(hint(
            self.resolver.display_gallery(GalleryAction::PlayVideo),
            "video",
        ));
        spans.extend(hint(
            self.resolver.display_gallery(GalleryAction::ShowImage),
            "image",
        ));
        spans.extend(hint(
            self.resolver.display_search(SearchAction::Toggle),
            "filter",
        ));
        spans.extend(hint(
            self.resolver
                .display_global(crate::config::GlobalAction::Theme),
            "theme",
        ));
        spans.extend(hint(
            self.resolver
                .display_global(crate::config::GlobalAction::Quit),
            "quit",
        ));
        Line::from(spans)
    }
}

impl Screen for GalleryScreen {
    type Msg = GalleryMsg;

    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Msg>> {
        // Locked while the modal is open; the app should not even route
        // keys here, this is the backstop.
        if self.scroll_locked {
            return Ok(Handled::Ignored);
        }

        if self.filter_input {
            let handled = self.handle_search_key(key);
            if handled.is_consumed() {
                return Ok(handled);
            }
        }

        if self.resolver.matches_search(&key, SearchAction::Toggle) {
            self.filter = Some(String::new());
            self.filter_input = true;
            return Ok(Handled::Consumed);
        }
        // Esc on a confirmed filter clears it.
        if self.filter.is_some() && self.resolver.matches_search(&key, SearchAction::Exit) {
            self.filter = None;
            self.clamp_selection();
            return Ok(Handled::Consumed);
        }
        if self.resolver.matches_nav(&key, NavAction::Up) {
            self.selected = self.selected.saturating_sub(1);
            return Ok(Handled::Consumed);
        }
        if self.resolver.matches_nav(&key, NavAction::Down) {
            self.selected += 1;
            self.clamp_selection();
            return Ok(Handled::Consumed);
        }
        if self.resolver.matches_nav(&key, NavAction::Home) {
            self.selected = 0;
            return Ok(Handled::Consumed);
        }
        if self.resolver.matches_nav(&key, NavAction::End) {
            self.selected = self.visible_indices().len().saturating_sub(1);
            return Ok(Handled::Consumed);
        }
        if self.resolver.matches_gallery(&key, GalleryAction::PlayVideo) {
            return Ok(self.activate(TriggerKind::PlayVideo));
        }
        if self.resolver.matches_gallery(&key, GalleryAction::ShowImage) {
            return Ok(self.activate(TriggerKind::ShowImage));
        }
        if self.resolver.matches_nav(&key, NavAction::Select) {
            return Ok(self.activate_preferred());
        }

        Ok(Handled::Ignored)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let [list_area, footer_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        let visible = self.visible_indices();
        let items: Vec<ListItem> = visible
            .iter()
            .map(|&i| Self::entry_item(&self.entries[i], theme))
            .collect();

        let title = match (self.filter.as_deref(), self.filter_input) {
            (Some(pattern), true) => format!(" Gallery · filter: {pattern}▏"),
            (Some(pattern), false) => format!(" Gallery · filter: {pattern} "),
            (None, _) => " Gallery ".to_string(),
        };
        let block = Block::default()
            .title(title)
            .title_style(
                Style::default()
                    .fg(theme.mauve)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.surface1))
            .style(Style::default().bg(theme.base));

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(theme.surface0)
                .fg(theme.lavender)
                .add_modifier(Modifier::BOLD),
        );
        self.list_state.select(if visible.is_empty() {
            None
        } else {
            Some(self.selected)
        });
        frame.render_stateful_widget(list, list_area, &mut self.list_state);

        frame.render_widget(Paragraph::new(self.footer_line(theme)), footer_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::keybindings::KeybindingsConfig;
    use crossterm::event::KeyModifiers;

    fn screen(entries: Vec<GalleryEntry>) -> GalleryScreen {
        GalleryScreen::new(
            entries,
            Arc::new(KeyResolver::new(Arc::new(KeybindingsConfig::default()))),
        )
    }

    fn entry(title: &str, video: Option<&str>, image: Option<&str>) -> GalleryEntry {
        GalleryEntry {
            title: title.to_string(),
            video_id: video.map(String::from),
            image_src: image.map(String::from),
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_video_trigger_emits_open() {
        let mut s = screen(vec![entry("Carbonara", Some("feHf-khAmTM"), None)]);
        let handled = s.handle_key(key(KeyCode::Char('v'))).unwrap();
        let Handled::Event(GalleryMsg::Open(MediaContent::Embed { url, .. })) = handled else {
            panic!("expected an embed open event");
        };
        assert_eq!(
            url,
            "https://www.youtube.com/embed/feHf-khAmTM?rel=0&showinfo=0&autoplay=1"
        );
    }

    #[test]
    fn test_trigger_without_payload_is_silent() {
        let mut s = screen(vec![entry("Tiramisu", None, None)]);
        // Consumed, but no event: the modal never opens.
        assert_eq!(
            s.handle_key(key(KeyCode::Char('v'))).unwrap(),
            Handled::Consumed
        );
        assert_eq!(
            s.handle_key(key(KeyCode::Char('i'))).unwrap(),
            Handled::Consumed
        );
        assert_eq!(s.handle_key(key(KeyCode::Enter)).unwrap(), Handled::Consumed);
    }

    #[test]
    fn test_empty_payload_is_silent() {
        let mut s = screen(vec![entry("Tiramisu", Some(""), Some(""))]);
        assert_eq!(
            s.handle_key(key(KeyCode::Char('v'))).unwrap(),
            Handled::Consumed
        );
        assert_eq!(
            s.handle_key(key(KeyCode::Char('i'))).unwrap(),
            Handled::Consumed
        );
    }

    #[test]
    fn test_select_prefers_video_falls_back_to_image() {
        let mut with_video = screen(vec![entry("A", Some("vid1234"), Some("a.jpg"))]);
        assert!(matches!(
            with_video.handle_key(key(KeyCode::Enter)).unwrap(),
            Handled::Event(GalleryMsg::Open(MediaContent::Embed { .. }))
        ));

        let mut image_only = screen(vec![entry("B", None, Some("b.jpg"))]);
        assert!(matches!(
            image_only.handle_key(key(KeyCode::Enter)).unwrap(),
            Handled::Event(GalleryMsg::Open(MediaContent::Image { .. }))
        ));
    }

    #[test]
    fn test_navigation_clamps() {
        let mut s = screen(vec![
            entry("A", None, None),
            entry("B", None, None),
            entry("C", None, None),
        ]);
        s.handle_key(key(KeyCode::Up)).unwrap();
        assert_eq!(s.selected_entry().unwrap().title, "A");
        s.handle_key(key(KeyCode::Down)).unwrap();
        s.handle_key(key(KeyCode::Down)).unwrap();
        s.handle_key(key(KeyCode::Down)).unwrap();
        assert_eq!(s.selected_entry().unwrap().title, "C");
    }

    #[test]
    fn test_scroll_lock_ignores_keys() {
        let mut s = screen(vec![entry("A", Some("vid1234"), None)]);
        s.set_scroll_locked(true);
        assert_eq!(
            s.handle_key(key(KeyCode::Char('v'))).unwrap(),
            Handled::Ignored
        );
        s.set_scroll_locked(false);
        assert!(s.handle_key(key(KeyCode::Char('v'))).unwrap().is_consumed());
    }

    #[test]
    fn test_filter_narrows_entries() {
        let mut s = screen(vec![
            entry("Spaghetti carbonara", None, None),
            entry("Focaccia barese", None, None),
        ]);
        s.handle_key(key(KeyCode::Char('/'))).unwrap();
        for c in "foca".chars() {
            s.handle_key(key(KeyCode::Char(c))).unwrap();
        }
        assert_eq!(s.selected_entry().unwrap().title, "Focaccia barese");
        // Escape while editing drops the filter.
        s.handle_key(key(KeyCode::Esc)).unwrap();
        assert_eq!(s.visible_indices().len(), 2);
    }

    #[test]
    fn test_confirmed_filter_allows_triggers() {
        let mut s = screen(vec![
            entry("Spaghetti carbonara", None, None),
            entry("Focaccia barese", Some("feHf-khAmTM"), None),
        ]);
        s.handle_key(key(KeyCode::Char('/'))).unwrap();
        for c in "foca".chars() {
            s.handle_key(key(KeyCode::Char(c))).unwrap();
        }
        s.handle_key(key(KeyCode::Enter)).unwrap();

        // The filter stays applied after Enter confirms it.
        assert_eq!(s.filter.as_deref(), Some("foca"));
        assert_eq!(s.visible_indices().len(), 1);

        // Triggers now act on the narrowed list instead of editing the
        // pattern.
        let handled = s.handle_key(key(KeyCode::Char('v'))).unwrap();
        let Handled::Event(GalleryMsg::Open(MediaContent::Embed { url, .. })) = handled else {
            panic!("expected an embed open event");
        };
        assert_eq!(
            url,
            "https://www.youtube.com/embed/feHf-khAmTM?rel=0&showinfo=0&autoplay=1"
        );
        assert_eq!(s.filter.as_deref(), Some("foca"));

        // Escape on the confirmed filter clears it.
        s.handle_key(key(KeyCode::Esc)).unwrap();
        assert_eq!(s.filter, None);
        assert_eq!(s.visible_indices().len(), 2);
    }

    #[test]
    fn test_confirming_empty_filter_turns_it_off() {
        let mut s = screen(vec![entry("Spaghetti carbonara", None, None)]);
        s.handle_key(key(KeyCode::Char('/'))).unwrap();
        s.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(s.filter, None);
        assert!(!s.filter_input);
    }
}
