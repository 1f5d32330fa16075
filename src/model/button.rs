//! Loading-state toggle for action buttons
//!
//! A control that is busy is disabled and shows a loading label; clearing
//! the busy state restores the label cached at construction. The "Submit"
//! fallback covers a button whose cache was never populated - wrong for
//! any control whose real label differs, so `new` caches up front.

/// Label shown while a request is in flight
pub const LOADING_LABEL: &str = "Loading...";

/// Fallback restore label when no original was cached
const FALLBACK_LABEL: &str = "Submit";

#[derive(Debug, Clone)]
pub struct ButtonState {
    pub label: String,
    original: Option<String>,
    pub busy: bool,
}

impl ButtonState {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            original: Some(label.clone()),
            label,
            busy: false,
        }
    }

    /// A button with no cached original label; restoring falls back to "Submit"
    pub fn uncached(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            original: None,
            busy: false,
        }
    }

    /// Swap the label for a custom in-flight indicator and disable the control
    pub fn set_busy_label(&mut self, label: impl Into<String>) {
        self.busy = true;
        self.label = label.into();
    }

    /// Toggle the loading state; restoring uses the cached original label
    pub fn set_loading(&mut self, loading: bool) {
        if loading {
            self.busy = true;
            self.label = LOADING_LABEL.to_string();
        } else {
            self.busy = false;
            self.label = self
                .original
                .clone()
                .unwrap_or_else(|| FALLBACK_LABEL.to_string());
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_swaps_and_restores_label() {
        let mut btn = ButtonState::new("Unduh");
        btn.set_loading(true);
        assert!(btn.is_busy());
        assert_eq!(btn.label, LOADING_LABEL);

        btn.set_loading(false);
        assert!(!btn.is_busy());
        assert_eq!(btn.label, "Unduh");
    }

    #[test]
    fn test_uncached_button_falls_back_to_submit() {
        let mut btn = ButtonState::uncached("Unduh");
        btn.set_loading(true);
        btn.set_loading(false);
        assert_eq!(btn.label, "Submit");
    }

    #[test]
    fn test_custom_busy_label_restores_original() {
        let mut btn = ButtonState::new("Download PDF");
        btn.set_busy_label("Mengunduh...");
        assert!(btn.is_busy());
        assert_eq!(btn.label, "Mengunduh...");

        btn.set_loading(false);
        assert_eq!(btn.label, "Download PDF");
    }
}
