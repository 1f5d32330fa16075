//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::modal::ModalSpec;
use crate::model::page::Route;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for timers and background completions
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    Quit,

    // ─────────────────────────────────────────────────────────────────────────
    // Sidebar
    // ─────────────────────────────────────────────────────────────────────────
    /// Toggle the sidebar open/closed
    ToggleSidebar,
    /// Force the sidebar closed
    CloseSidebar,
    /// Toggle a collapsible menu section by id
    ToggleMenuSection(String),
    /// Move sidebar cursor up
    SidebarUp,
    /// Move sidebar cursor down
    SidebarDown,
    /// Activate the sidebar entry under the cursor
    SidebarActivate,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Switch the content region to a page
    Navigate(Route),
    /// Open an absolute URL in the system browser
    OpenUrl(String),
    /// Open the floating-action-button quick menu
    OpenQuickActions,
    /// Open the key-binding help overlay
    OpenHelp,

    // ─────────────────────────────────────────────────────────────────────────
    // Modal
    // ─────────────────────────────────────────────────────────────────────────
    /// Populate and show the modal
    OpenModal(ModalSpec),
    /// Invoke the modal's confirm button
    ConfirmModal,
    /// Invoke the modal's cancel button
    CancelModal,
    /// Dismiss the modal (backdrop / Esc)
    CloseModal,
    /// Move modal item cursor up
    ModalUp,
    /// Move modal item cursor down
    ModalDown,
    /// Convenience confirmation dialog wrapping an action
    RequestConfirm {
        message: String,
        on_confirm: Box<Action>,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Alerts
    // ─────────────────────────────────────────────────────────────────────────
    /// Insert an alert banner at the top of the content region
    ShowAlert { message: String, severity: String },
    /// Manually dismiss an alert banner
    DismissAlert(u64),

    // ─────────────────────────────────────────────────────────────────────────
    // Content
    // ─────────────────────────────────────────────────────────────────────────
    /// Left click landed inside the main content region
    ContentClick { column: u16, row: u16 },
    /// Pointer position changed (tooltip hover tracking)
    PointerMoved { column: u16, row: u16 },
    /// Move content cursor to next item
    NextItem,
    /// Move content cursor to previous item
    PrevItem,
    /// Activate the content item under the cursor
    Activate,
    /// Add character to the focused profile form field
    FormInput(char),
    /// Remove last character from the focused profile form field
    FormBackspace,
    /// Validate and submit the profile form
    FormSubmit,

    // ─────────────────────────────────────────────────────────────────────────
    // Downloads
    // ─────────────────────────────────────────────────────────────────────────
    /// Start the material download flow for a material id
    DownloadMaterial(u32),
    /// Start the transcript (KHS) download flow
    DownloadKhs,
    /// Open the printable transcript page
    PrintKhs,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::Quit => write!(f, "Quit"),
            Action::ToggleSidebar => write!(f, "ToggleSidebar"),
            Action::CloseSidebar => write!(f, "CloseSidebar"),
            Action::ToggleMenuSection(id) => write!(f, "ToggleMenuSection({})", id),
            Action::SidebarUp => write!(f, "SidebarUp"),
            Action::SidebarDown => write!(f, "SidebarDown"),
            Action::SidebarActivate => write!(f, "SidebarActivate"),
            Action::Navigate(route) => write!(f, "Navigate({})", route.title()),
            Action::OpenUrl(url) => write!(f, "OpenUrl({})", url),
            Action::OpenQuickActions => write!(f, "OpenQuickActions"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::OpenModal(spec) => write!(f, "OpenModal({})", spec.title),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::CancelModal => write!(f, "CancelModal"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ModalUp => write!(f, "ModalUp"),
            Action::ModalDown => write!(f, "ModalDown"),
            Action::RequestConfirm { message, .. } => write!(f, "RequestConfirm({})", message),
            Action::ShowAlert { message, severity } => {
                write!(f, "ShowAlert({}, {})", message, severity)
            }
            Action::DismissAlert(id) => write!(f, "DismissAlert({})", id),
            Action::ContentClick { column, row } => write!(f, "ContentClick({}, {})", column, row),
            Action::PointerMoved { column, row } => write!(f, "PointerMoved({}, {})", column, row),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::Activate => write!(f, "Activate"),
            Action::FormInput(c) => write!(f, "FormInput('{}')", c),
            Action::FormBackspace => write!(f, "FormBackspace"),
            Action::FormSubmit => write!(f, "FormSubmit"),
            Action::DownloadMaterial(id) => write!(f, "DownloadMaterial({})", id),
            Action::DownloadKhs => write!(f, "DownloadKhs"),
            Action::PrintKhs => write!(f, "PrintKhs"),
        }
    }
}
