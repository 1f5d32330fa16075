//! Hover tooltips
//!
//! Components register hover regions while drawing; pointer movement
//! creates tooltip nodes for the regions under the cursor and removes
//! every tooltip once the pointer leaves - all of them, not just the one
//! the departed region spawned, so overlapping identical tooltips never
//! coexist as separate nodes.

use ratatui::{
    layout::{Position, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// A hover-sensitive region registered during draw
#[derive(Debug, Clone)]
struct TooltipRegion {
    rect: Rect,
    text: String,
}

/// A tooltip node currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub text: String,
    pub anchor: Rect,
}

#[derive(Debug, Default)]
pub struct TooltipManager {
    regions: Vec<TooltipRegion>,
    visible: Vec<Tooltip>,
}

impl TooltipManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget last frame's regions; called at the top of each draw
    pub fn begin_frame(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, rect: Rect, text: impl Into<String>) {
        self.regions.push(TooltipRegion {
            rect,
            text: text.into(),
        });
    }

    /// Track the pointer: entering regions creates their tooltips,
    /// leaving removes every tooltip currently on screen
    pub fn pointer_moved(&mut self, column: u16, row: u16) {
        let over: Vec<Tooltip> = self
            .regions
            .iter()
            .filter(|r| r.rect.contains(Position::new(column, row)))
            .map(|r| Tooltip {
                text: r.text.clone(),
                anchor: r.rect,
            })
            .collect();

        if over.is_empty() {
            self.visible.clear();
        } else {
            self.visible = over;
        }
    }

    pub fn visible(&self) -> &[Tooltip] {
        &self.visible
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        for tooltip in &self.visible {
            let width = (tooltip.text.width() as u16).saturating_add(2);
            let rect = tooltip_rect(tooltip.anchor, width, area);
            frame.render_widget(Clear, rect);
            frame.render_widget(
                Paragraph::new(format!(" {} ", tooltip.text))
                    .style(Style::default().fg(Color::Black).bg(Color::Gray)),
                rect,
            );
        }
    }
}

/// One row above the anchor, horizontally centered on it, clamped into `area`
pub fn tooltip_rect(anchor: Rect, width: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let centered = (anchor.x + anchor.width / 2).saturating_sub(width / 2);
    let max_x = area.right().saturating_sub(width);
    let x = centered.clamp(area.x, max_x.max(area.x));
    let y = anchor.y.saturating_sub(1).max(area.y);
    Rect::new(x, y, width, 1)
}
