//! Singleton modal state
//!
//! One dialog region shared by every caller. Opening populates title,
//! body, button labels and the optional follow-up slots; closing resets
//! the footer to visible so a footerless (informational) invocation can
//! never leak its hidden footer into the next one.

use crate::action::Action;

/// A selectable entry rendered inside the modal body (quick-action menus)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalItem {
    pub label: String,
    pub action: Action,
}

/// Everything a caller supplies when opening the modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalSpec {
    pub title: String,
    pub body: Vec<String>,
    /// Selectable menu entries; empty for plain message dialogs
    pub items: Vec<ModalItem>,
    /// Empty label hides the whole footer (informational-only dialog)
    pub confirm_label: String,
    pub cancel_label: String,
    pub on_confirm: Option<Box<Action>>,
    pub on_cancel: Option<Box<Action>>,
}

impl ModalSpec {
    /// Informational dialog: no footer, dismissed by Esc or backdrop only
    pub fn message(title: impl Into<String>, body: Vec<String>) -> Self {
        Self {
            title: title.into(),
            body,
            items: Vec::new(),
            confirm_label: String::new(),
            cancel_label: String::new(),
            on_confirm: None,
            on_cancel: None,
        }
    }

    /// Yes/no confirmation wrapping a follow-up action
    pub fn confirm(message: impl Into<String>, on_confirm: Action) -> Self {
        Self {
            title: "Konfirmasi".to_string(),
            body: vec![message.into()],
            items: Vec::new(),
            confirm_label: "Ya".to_string(),
            cancel_label: "Tidak".to_string(),
            on_confirm: Some(Box::new(on_confirm)),
            on_cancel: None,
        }
    }
}

/// The singleton dialog region
#[derive(Debug)]
pub struct ModalState {
    spec: Option<ModalSpec>,
    /// Button-row visibility; reset to true on every close
    pub footer_visible: bool,
    /// Cursor over `spec.items`
    pub selected_item: usize,
}

impl Default for ModalState {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalState {
    pub fn new() -> Self {
        Self {
            spec: None,
            footer_visible: true,
            selected_item: 0,
        }
    }

    /// Populate and show the modal
    pub fn open(&mut self, spec: ModalSpec) {
        self.footer_visible = !spec.confirm_label.is_empty();
        self.selected_item = 0;
        self.spec = Some(spec);
    }

    /// Hide the modal and reset the footer for the next invocation
    pub fn close(&mut self) {
        self.spec = None;
        self.footer_visible = true;
    }

    pub fn is_open(&self) -> bool {
        self.spec.is_some()
    }

    pub fn spec(&self) -> Option<&ModalSpec> {
        self.spec.as_ref()
    }

    /// Follow-up for the confirm button, if the caller supplied one
    pub fn on_confirm(&self) -> Option<Action> {
        self.spec
            .as_ref()
            .and_then(|s| s.on_confirm.as_deref().cloned())
    }

    /// Follow-up for the cancel button, if the caller supplied one
    pub fn on_cancel(&self) -> Option<Action> {
        self.spec
            .as_ref()
            .and_then(|s| s.on_cancel.as_deref().cloned())
    }

    /// Action of the menu item under the cursor
    pub fn selected_item_action(&self) -> Option<Action> {
        self.spec
            .as_ref()
            .and_then(|s| s.items.get(self.selected_item))
            .map(|item| item.action.clone())
    }

    pub fn item_up(&mut self) {
        self.selected_item = self.selected_item.saturating_sub(1);
    }

    pub fn item_down(&mut self) {
        let max = self
            .spec
            .as_ref()
            .map(|s| s.items.len().saturating_sub(1))
            .unwrap_or(0);
        if self.selected_item < max {
            self.selected_item += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_sets_footer_from_confirm_label() {
        let mut modal = ModalState::new();

        modal.open(ModalSpec::confirm("Hapus data?", Action::Quit));
        assert!(modal.footer_visible);

        modal.open(ModalSpec::message("Info", vec!["baris".to_string()]));
        assert!(!modal.footer_visible);
    }

    #[test]
    fn test_close_resets_footer_regardless_of_confirm_label() {
        let mut modal = ModalState::new();

        // Footerless open followed by close must leave the footer visible
        modal.open(ModalSpec::message("Info", vec![]));
        assert!(!modal.footer_visible);
        modal.close();
        assert!(modal.footer_visible);
        assert!(!modal.is_open());

        // Same invariant for the footered form
        modal.open(ModalSpec::confirm("Ya?", Action::Quit));
        modal.close();
        assert!(modal.footer_visible);
    }

    #[test]
    fn test_confirm_follow_up_slot() {
        let mut modal = ModalState::new();
        modal.open(ModalSpec::confirm("Keluar?", Action::Quit));
        assert_eq!(modal.on_confirm(), Some(Action::Quit));
        assert_eq!(modal.on_cancel(), None);
    }

    #[test]
    fn test_item_cursor_clamps() {
        let mut modal = ModalState::new();
        let mut spec = ModalSpec::message("Menu", vec![]);
        spec.items = vec![
            ModalItem {
                label: "a".to_string(),
                action: Action::OpenHelp,
            },
            ModalItem {
                label: "b".to_string(),
                action: Action::Quit,
            },
        ];
        modal.open(spec);

        modal.item_up();
        assert_eq!(modal.selected_item, 0);

        modal.item_down();
        modal.item_down();
        assert_eq!(modal.selected_item, 1);
        assert_eq!(modal.selected_item_action(), Some(Action::Quit));
    }
}
