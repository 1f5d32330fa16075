//! UI Components
//!
//! Each component encapsulates its own state, rendering logic and the
//! click-target rects recorded while drawing. Components communicate
//! through Actions rather than direct state mutation.

pub mod content;
pub mod fab;
pub mod layout;
pub mod modal_dialog;
pub mod sidebar;
pub mod status_bar;
pub mod tooltip;

pub use content::ContentComponent;
pub use fab::{quick_actions_spec, FabComponent};
pub use layout::{calculate_main_layout, centered_popup, sidebar_overlay, MainLayout};
pub use modal_dialog::ModalDialog;
pub use sidebar::{row_action, SidebarComponent};
pub use status_bar::draw_status_bar;
pub use tooltip::TooltipManager;
