//! Theme picker modal.

use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};

use crate::Theme;
use crate::config::{KeyResolver, ModalAction, NavAction};
use crate::theme::available_themes;
use crate::ui::{Handled, Modal, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSelectorEvent {
    Chosen(String),
    Cancelled,
}

pub struct ThemeSelector {
    themes: Vec<&'static str>,
    selected: usize,
    resolver: Arc<KeyResolver>,
    list_state: ListState,
}

impl ThemeSelector {
    #[must_use]
    pub fn new(current: &str, resolver: Arc<KeyResolver>) -> Self {
        let themes = available_themes();
        let selected = themes.iter().position(|t| *t == current).unwrap_or(0);
        Self {
            themes,
            selected,
            resolver,
            list_state: ListState::default(),
        }
    }
}

impl Modal for ThemeSelector {
    type Msg = ThemeSelectorEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Msg>> {
        if self.resolver.matches_modal(&key, ModalAction::Close) {
            return Ok(ThemeSelectorEvent::Cancelled.into());
        }
        if self.resolver.matches_nav(&key, NavAction::Up) {
            self.selected = self.selected.saturating_sub(1);
            return Ok(Handled::Consumed);
        }
        if self.resolver.matches_nav(&key, NavAction::Down) {
            self.selected = (self.selected + 1).min(self.themes.len() - 1);
            return Ok(Handled::Consumed);
        }
        if self.resolver.matches_nav(&key, NavAction::Select) {
            let name = self.themes[self.selected].to_string();
            return Ok(ThemeSelectorEvent::Chosen(name).into());
        }
        Ok(Handled::Consumed)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let popup_area = area.centered(
            Constraint::Length(36),
            Constraint::Length(self.themes.len() as u16 + 2),
        );
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Theme ")
            .title_style(
                Style::default()
                    .fg(theme.mauve)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.lavender))
            .style(Style::default().bg(theme.base));

        let items: Vec<ListItem> = self
            .themes
            .iter()
            .map(|name| ListItem::new(*name))
            .collect();
        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(theme.surface0)
                .fg(theme.lavender)
                .add_modifier(Modifier::BOLD),
        );
        self.list_state.select(Some(self.selected));
        frame.render_stateful_widget(list, popup_area, &mut self.list_state);
    }

    fn title(&self) -> Option<&str> {
        Some("Theme")
    }
}
