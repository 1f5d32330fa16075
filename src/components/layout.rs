//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Sidebar width in cells when visible
pub const SIDEBAR_WIDTH: u16 = 26;

/// Main screen layout areas
pub struct MainLayout {
    pub header: Rect,
    /// Present only when the sidebar pushes the content aside (wide layout)
    pub sidebar: Option<Rect>,
    pub content: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout
///
/// `sidebar_pushes` is true when the sidebar is open on a wide viewport:
/// the content region shifts right to make room. On narrow viewports the
/// sidebar is drawn as an overlay instead (see `sidebar_overlay`).
pub fn calculate_main_layout(area: Rect, sidebar_pushes: bool) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let (sidebar, content) = if sidebar_pushes {
        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(main_chunks[1]);
        (Some(horizontal_chunks[0]), horizontal_chunks[1])
    } else {
        (None, main_chunks[1])
    };

    MainLayout {
        header: main_chunks[0],
        sidebar,
        content,
        help: main_chunks[2],
    }
}

/// Overlay rect for the sidebar on narrow viewports: drawn over the
/// left edge of the body instead of shifting the content
pub fn sidebar_overlay(body: Rect) -> Rect {
    Rect::new(
        body.x,
        body.y,
        SIDEBAR_WIDTH.min(body.width),
        body.height,
    )
}

/// Bottom-right floating action button area within the content region
pub fn fab_rect(content: Rect) -> Rect {
    let width: u16 = 5;
    let height: u16 = 3;
    Rect::new(
        content.right().saturating_sub(width + 1).max(content.x),
        content.bottom().saturating_sub(height).max(content.y),
        width.min(content.width),
        height.min(content.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_sidebar_shift() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = calculate_main_layout(area, true);

        let sidebar = layout.sidebar.unwrap();
        assert_eq!(sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(layout.content.x, sidebar.right());
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.help.height, 3);
    }

    #[test]
    fn test_layout_without_sidebar_uses_full_width() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = calculate_main_layout(area, false);

        assert!(layout.sidebar.is_none());
        assert_eq!(layout.content.width, 120);
    }

    #[test]
    fn test_sidebar_overlay_covers_left_edge() {
        let body = Rect::new(0, 3, 80, 34);
        let overlay = sidebar_overlay(body);
        assert_eq!(overlay.x, 0);
        assert_eq!(overlay.y, 3);
        assert_eq!(overlay.width, SIDEBAR_WIDTH);
        assert_eq!(overlay.height, 34);
    }

    #[test]
    fn test_fab_rect_sits_bottom_right() {
        let content = Rect::new(26, 3, 94, 34);
        let fab = fab_rect(content);
        assert!(fab.right() <= content.right());
        assert_eq!(fab.bottom(), content.bottom());
        assert!(fab.x > content.x);
    }

    #[test]
    fn test_centered_popup_is_clamped() {
        let area = Rect::new(0, 0, 40, 10);
        let popup = centered_popup(area, 60, 20);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 10);
    }
}
