//! Transient notification shown after clipboard copies and theme changes.

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::Theme;
use crate::ui::Component;

const TOAST_DURATION: Duration = Duration::from_secs(3);

pub struct Toast {
    message: String,
    created_at: Instant,
}

impl Toast {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= TOAST_DURATION
    }
}

/// Shows at most one toast at a time; a new one replaces the old.
#[derive(Default)]
pub struct ToastManager {
    toast: Option<Toast>,
}

impl ToastManager {
    pub fn show(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }
}

impl Component for ToastManager {
    type Output = ();

    fn on_tick(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let Some(toast) = self.toast.as_ref() else {
            return;
        };

        let width = 40u16.min(area.width.saturating_sub(4));
        let height = 3u16;
        let x = area.x + area.width.saturating_sub(width + 2);
        let y = area.y + area.height.saturating_sub(height + 1);
        let toast_area = Rect::new(x, y, width, height);

        frame.render_widget(Clear, toast_area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.green))
            .style(Style::default().bg(theme.surface0));
        let inner = block.inner(toast_area);
        frame.render_widget(block, toast_area);

        let paragraph = Paragraph::new(format!("✓ {}", toast.message))
            .style(
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, inner);
    }
}
