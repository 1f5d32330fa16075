//! Sidebar navigation state
//!
//! Open/closed flag plus the expanded-set of collapsible sections.
//! Startup state is closed with every section collapsed; nothing is
//! persisted across runs.

use crate::model::page::Route;
use std::collections::HashSet;

/// Where a menu item leads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuTarget {
    /// A page rendered by the content region
    Page(Route),
    /// A portal path opened in the system browser
    External(&'static str),
}

/// One row of the flattened sidebar menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarRow {
    /// Top-level item
    Item {
        label: &'static str,
        target: MenuTarget,
    },
    /// Collapsible section header
    Section { id: &'static str, label: &'static str },
    /// Item inside a section, only visible while its section is expanded
    SubItem {
        section: &'static str,
        label: &'static str,
        target: MenuTarget,
    },
}

/// The fixed portal menu
fn menu() -> Vec<SidebarRow> {
    vec![
        SidebarRow::Item {
            label: "Dashboard",
            target: MenuTarget::Page(Route::Dashboard),
        },
        SidebarRow::Section {
            id: "akademik",
            label: "Akademik",
        },
        SidebarRow::SubItem {
            section: "akademik",
            label: "Kartu Hasil Studi",
            target: MenuTarget::Page(Route::Khs),
        },
        SidebarRow::SubItem {
            section: "akademik",
            label: "Profil",
            target: MenuTarget::Page(Route::Profil),
        },
        SidebarRow::Section {
            id: "elearning",
            label: "E-Learning",
        },
        SidebarRow::SubItem {
            section: "elearning",
            label: "Materi Kuliah",
            target: MenuTarget::Page(Route::Materi),
        },
        SidebarRow::SubItem {
            section: "elearning",
            label: "Forum Diskusi",
            target: MenuTarget::External("/elearning/forum"),
        },
        SidebarRow::SubItem {
            section: "elearning",
            label: "Upload Tugas",
            target: MenuTarget::External("/pengajuan/upload"),
        },
    ]
}

#[derive(Debug, Default)]
pub struct SidebarState {
    pub open: bool,
    expanded: HashSet<String>,
    /// Cursor over the currently visible rows
    pub cursor: usize,
}

impl SidebarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_expanded(&self, section: &str) -> bool {
        self.expanded.contains(section)
    }

    /// Flip a section's sub-menu visibility (and its disclosure icon)
    pub fn toggle_section(&mut self, section: &str) {
        if !self.expanded.remove(section) {
            self.expanded.insert(section.to_string());
        }
        self.clamp_cursor();
    }

    /// Menu rows visible under the current expansion state
    pub fn visible_rows(&self) -> Vec<SidebarRow> {
        menu()
            .into_iter()
            .filter(|row| match row {
                SidebarRow::SubItem { section, .. } => self.is_expanded(section),
                _ => true,
            })
            .collect()
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let max = self.visible_rows().len().saturating_sub(1);
        if self.cursor < max {
            self.cursor += 1;
        }
    }

    pub fn selected_row(&self) -> Option<SidebarRow> {
        self.visible_rows().into_iter().nth(self.cursor)
    }

    fn clamp_cursor(&mut self) {
        let max = self.visible_rows().len().saturating_sub(1);
        if self.cursor > max {
            self.cursor = max;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed_and_collapsed() {
        let state = SidebarState::new();
        assert!(!state.open);
        // Only top-level item and the two section headers are visible
        assert_eq!(state.visible_rows().len(), 3);
    }

    #[test]
    fn test_toggle_section_reveals_sub_items() {
        let mut state = SidebarState::new();
        state.toggle_section("elearning");

        let labels: Vec<&str> = state
            .visible_rows()
            .iter()
            .filter_map(|row| match row {
                SidebarRow::SubItem { label, .. } => Some(*label),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["Materi Kuliah", "Forum Diskusi", "Upload Tugas"]);

        state.toggle_section("elearning");
        assert_eq!(state.visible_rows().len(), 3);
    }

    #[test]
    fn test_cursor_clamped_when_section_collapses() {
        let mut state = SidebarState::new();
        state.toggle_section("akademik");
        state.toggle_section("elearning");

        let last = state.visible_rows().len() - 1;
        for _ in 0..last {
            state.cursor_down();
        }
        assert_eq!(state.cursor, last);

        state.toggle_section("elearning");
        assert!(state.cursor < state.visible_rows().len());
    }

    #[test]
    fn test_selected_row_follows_cursor() {
        let mut state = SidebarState::new();
        state.cursor_down();
        assert_eq!(
            state.selected_row(),
            Some(SidebarRow::Section {
                id: "akademik",
                label: "Akademik"
            })
        );
    }
}
