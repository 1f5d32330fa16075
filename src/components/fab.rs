//! Floating action button
//!
//! One persistent tap target in the bottom-right corner of the content
//! region. Activation opens the modal pre-populated with a fixed menu of
//! three navigation shortcuts; each closes the modal and opens a portal
//! URL in the system browser.

use crate::action::Action;
use crate::components::layout::fab_rect;
use crate::config::Config;
use crate::model::modal::{ModalItem, ModalSpec};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub struct FabComponent {
    rect: Rect,
}

impl Default for FabComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl FabComponent {
    pub fn new() -> Self {
        Self {
            rect: Rect::default(),
        }
    }

    pub fn draw(&mut self, frame: &mut Frame, content: Rect) {
        self.rect = fab_rect(content);
        frame.render_widget(Clear, self.rect);
        frame.render_widget(
            Paragraph::new("+")
                .alignment(ratatui::layout::Alignment::Center)
                .style(
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                )
                .block(Block::default().borders(Borders::ALL)),
            self.rect,
        );
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.rect.contains(Position::new(column, row))
    }
}

/// The fixed quick-actions menu; footer hidden, so Esc or the backdrop
/// are the only plain dismissals
pub fn quick_actions_spec(config: &Config) -> ModalSpec {
    let mut spec = ModalSpec::message("Quick Actions", Vec::new());
    spec.items = vec![
        ModalItem {
            label: "Upload Tugas".to_string(),
            action: Action::OpenUrl(config.url("/pengajuan/upload")),
        },
        ModalItem {
            label: "Forum Diskusi".to_string(),
            action: Action::OpenUrl(config.url("/elearning/forum")),
        },
        ModalItem {
            label: "Update Profil".to_string(),
            action: Action::OpenUrl(config.url("/akademik/profil")),
        },
    ];
    spec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_actions_is_informational_with_three_shortcuts() {
        let config = Config::default();
        let spec = quick_actions_spec(&config);

        // Empty confirm label hides the footer
        assert!(spec.confirm_label.is_empty());
        assert_eq!(spec.items.len(), 3);
        assert_eq!(
            spec.items[0].action,
            Action::OpenUrl("http://localhost:5000/pengajuan/upload".to_string())
        );
        assert_eq!(
            spec.items[1].action,
            Action::OpenUrl("http://localhost:5000/elearning/forum".to_string())
        );
        assert_eq!(
            spec.items[2].action,
            Action::OpenUrl("http://localhost:5000/akademik/profil".to_string())
        );
    }
}
