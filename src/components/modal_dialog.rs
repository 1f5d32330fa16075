//! Modal dialog component
//!
//! Renders the singleton modal centered over a dimmed backdrop and maps
//! keys and clicks onto modal actions. A click outside the dialog body
//! closes unconditionally.

use crate::action::Action;
use crate::components::layout::centered_popup;
use crate::model::modal::ModalState;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const DIALOG_WIDTH: u16 = 52;

pub struct ModalDialog {
    dialog_area: Rect,
    confirm_rect: Option<Rect>,
    cancel_rect: Option<Rect>,
    item_rects: Vec<(Rect, Action)>,
}

impl Default for ModalDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalDialog {
    pub fn new() -> Self {
        Self {
            dialog_area: Rect::default(),
            confirm_rect: None,
            cancel_rect: None,
            item_rects: Vec::new(),
        }
    }

    pub fn handle_key_event(&self, key: KeyEvent, state: &ModalState) -> Result<Option<Action>> {
        let has_items = state.spec().map(|s| !s.items.is_empty()).unwrap_or(false);

        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Enter => {
                if has_items {
                    state.selected_item_action()
                } else if state.footer_visible {
                    Some(Action::ConfirmModal)
                } else {
                    Some(Action::CloseModal)
                }
            }
            KeyCode::Char('y') | KeyCode::Char('Y') if state.footer_visible => {
                Some(Action::ConfirmModal)
            }
            KeyCode::Char('n') | KeyCode::Char('N') if state.footer_visible => {
                Some(Action::CancelModal)
            }
            KeyCode::Char('j') | KeyCode::Down if has_items => Some(Action::ModalDown),
            KeyCode::Char('k') | KeyCode::Up if has_items => Some(Action::ModalUp),
            _ => None,
        };
        Ok(action)
    }

    /// Map a click onto the dialog; anywhere on the backdrop closes
    pub fn hit(&self, column: u16, row: u16) -> Option<Action> {
        let position = Position::new(column, row);

        if !self.dialog_area.contains(position) {
            return Some(Action::CloseModal);
        }
        for (rect, action) in &self.item_rects {
            if rect.contains(position) {
                return Some(action.clone());
            }
        }
        if let Some(rect) = self.confirm_rect {
            if rect.contains(position) {
                return Some(Action::ConfirmModal);
            }
        }
        if let Some(rect) = self.cancel_rect {
            if rect.contains(position) {
                return Some(Action::CancelModal);
            }
        }
        None
    }

    pub fn draw_with_state(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &ModalState,
    ) -> Result<()> {
        let Some(spec) = state.spec() else {
            return Ok(());
        };

        let body_height = spec.body.len() as u16;
        let items_height = if spec.items.is_empty() {
            0
        } else {
            spec.items.len() as u16 + 1
        };
        let footer_height = if state.footer_visible { 2 } else { 0 };
        let height = 3 + body_height + items_height + footer_height + 1;

        let popup = centered_popup(area, DIALOG_WIDTH, height);
        self.dialog_area = popup;
        self.confirm_rect = None;
        self.cancel_rect = None;
        self.item_rects.clear();

        frame.render_widget(Clear, popup);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(format!(" {} ", spec.title))
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            popup,
        );

        let inner = popup.inner(ratatui::layout::Margin {
            vertical: 1,
            horizontal: 1,
        });
        let mut y = inner.y + 1;

        for line in &spec.body {
            frame.render_widget(
                Paragraph::new(line.as_str()).alignment(ratatui::layout::Alignment::Center),
                Rect::new(inner.x, y, inner.width, 1),
            );
            y += 1;
        }

        if !spec.items.is_empty() {
            y += 1;
            for (index, item) in spec.items.iter().enumerate() {
                let selected = index == state.selected_item;
                let style = if selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                let marker = if selected { "▶ " } else { "  " };
                let rect = Rect::new(inner.x, y, inner.width, 1);
                frame.render_widget(
                    Paragraph::new(format!("{}{}", marker, item.label)).style(style),
                    rect,
                );
                self.item_rects.push((rect, item.action.clone()));
                y += 1;
            }
        }

        if state.footer_visible {
            y += 1;
            let confirm_text = format!("[ {} ]", spec.confirm_label);
            let cancel_text = format!("[ {} ]", spec.cancel_label);
            let confirm_width = confirm_text.width() as u16;
            let cancel_width = cancel_text.width() as u16;
            let total = confirm_width + 2 + cancel_width;
            let start = inner.x + inner.width.saturating_sub(total) / 2;

            let confirm_rect = Rect::new(start, y, confirm_width, 1);
            let cancel_rect = Rect::new(start + confirm_width + 2, y, cancel_width, 1);

            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    confirm_text,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ))),
                confirm_rect,
            );
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    cancel_text,
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ))),
                cancel_rect,
            );

            self.confirm_rect = Some(confirm_rect);
            self.cancel_rect = Some(cancel_rect);
        }

        Ok(())
    }
}
