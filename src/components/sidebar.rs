//! Sidebar navigation panel
//!
//! Renders the menu with its collapsible sections and maps clicks onto
//! navigation actions. On wide viewports the panel occupies a layout
//! column; on narrow viewports the same draw is used over a Clear as an
//! overlay.

use crate::action::Action;
use crate::model::sidebar::{MenuTarget, SidebarRow, SidebarState};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub struct SidebarComponent {
    area: Rect,
    close_rect: Rect,
    row_rects: Vec<(Rect, SidebarRow)>,
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// The action a menu row triggers when activated
pub fn row_action(row: &SidebarRow) -> Action {
    match row {
        SidebarRow::Section { id, .. } => Action::ToggleMenuSection(id.to_string()),
        SidebarRow::Item { target, .. } | SidebarRow::SubItem { target, .. } => match target {
            MenuTarget::Page(route) => Action::Navigate(*route),
            MenuTarget::External(path) => Action::OpenUrl(path.to_string()),
        },
    }
}

impl SidebarComponent {
    pub fn new() -> Self {
        Self {
            area: Rect::default(),
            close_rect: Rect::default(),
            row_rects: Vec::new(),
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    /// Map a click inside the panel onto an action; clicks on the panel
    /// background are swallowed (they never bubble to the content)
    pub fn hit(&self, column: u16, row: u16) -> Option<Action> {
        let position = Position::new(column, row);

        if self.close_rect.contains(position) {
            return Some(Action::CloseSidebar);
        }
        for (rect, menu_row) in &self.row_rects {
            if rect.contains(position) {
                return Some(row_action(menu_row));
            }
        }
        None
    }

    pub fn draw_with_state(&mut self, frame: &mut Frame, area: Rect, state: &SidebarState) {
        self.area = area;
        self.row_rects.clear();

        frame.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(" Menu ")
            .title_style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Close control in the top border, right-aligned
        self.close_rect = Rect::new(area.right().saturating_sub(4), area.y, 3, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "[x]",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            self.close_rect,
        );

        for (index, menu_row) in state.visible_rows().into_iter().enumerate() {
            if index as u16 >= inner.height {
                break;
            }
            let rect = Rect::new(inner.x, inner.y + index as u16, inner.width, 1);
            let selected = index == state.cursor;

            let line = match &menu_row {
                SidebarRow::Item { label, .. } => Line::from(format!(" {}", label)),
                SidebarRow::Section { id, label } => {
                    let icon = if state.is_expanded(id) { "▾" } else { "▸" };
                    Line::from(Span::styled(
                        format!(" {} {}", icon, label),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ))
                }
                SidebarRow::SubItem { label, .. } => Line::from(format!("   {}", label)),
            };

            let style = if selected {
                Style::default().fg(Color::Black).bg(Color::Blue)
            } else {
                Style::default()
            };
            frame.render_widget(Paragraph::new(line).style(style), rect);
            self.row_rects.push((rect, menu_row));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::page::Route;

    #[test]
    fn test_row_action_for_each_row_kind() {
        assert_eq!(
            row_action(&SidebarRow::Section {
                id: "akademik",
                label: "Akademik"
            }),
            Action::ToggleMenuSection("akademik".to_string())
        );
        assert_eq!(
            row_action(&SidebarRow::Item {
                label: "Dashboard",
                target: MenuTarget::Page(Route::Dashboard)
            }),
            Action::Navigate(Route::Dashboard)
        );
        assert_eq!(
            row_action(&SidebarRow::SubItem {
                section: "elearning",
                label: "Forum Diskusi",
                target: MenuTarget::External("/elearning/forum")
            }),
            Action::OpenUrl("/elearning/forum".to_string())
        );
    }

    #[test]
    fn test_hit_close_control() {
        let mut panel = SidebarComponent::new();
        panel.area = Rect::new(0, 3, 26, 30);
        panel.close_rect = Rect::new(22, 3, 3, 1);

        assert_eq!(panel.hit(23, 3), Some(Action::CloseSidebar));
        // Background clicks are swallowed
        assert_eq!(panel.hit(5, 20), None);
    }
}
