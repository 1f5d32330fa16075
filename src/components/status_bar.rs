//! Bottom help bar with context-dependent key hints

use crate::model::page::Route;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_status_bar(
    frame: &mut Frame,
    area: Rect,
    modal_open: bool,
    sidebar_open: bool,
    route: Route,
) {
    let hint = |key: &'static str, label: &'static str| {
        vec![
            Span::styled(
                format!(" {} ", key),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(label),
            Span::raw("  "),
        ]
    };

    let mut spans = Vec::new();
    if modal_open {
        spans.extend(hint("Enter", "Pilih"));
        spans.extend(hint("Esc", "Tutup"));
    } else if sidebar_open {
        spans.extend(hint("j/k", "Navigasi"));
        spans.extend(hint("Enter", "Buka"));
        spans.extend(hint("Esc", "Tutup menu"));
    } else {
        spans.extend(hint("m", "Menu"));
        spans.extend(hint("a", "Aksi cepat"));
        if route == Route::Khs {
            spans.extend(hint("p", "Cetak"));
            spans.extend(hint("d", "Unduh"));
        }
        spans.extend(hint("?", "Bantuan"));
        spans.extend(hint("q", "Keluar"));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
