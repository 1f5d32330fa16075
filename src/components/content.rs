//! Main content region
//!
//! Renders the active page with the alert banners stacked on top, owns
//! the per-page interactive state (material buttons, KHS buttons, the
//! profile form) and maps clicks onto actions via rects recorded during
//! draw.

use crate::action::Action;
use crate::config::Config;
use crate::model::alert::AlertFeed;
use crate::model::button::ButtonState;
use crate::model::page::{Material, ProfileField, ProfileForm, Route};
use crate::components::tooltip::TooltipManager;
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::collections::BTreeSet;
use unicode_width::UnicodeWidthStr;

pub struct ContentComponent {
    /// Cursor over the active page's interactive items
    pub selected: usize,
    pub materials: Vec<(Material, ButtonState)>,
    pub khs_button: ButtonState,
    pub save_button: ButtonState,
    pub profile: ProfileForm,
    area: Rect,
    click_targets: Vec<(Rect, Action)>,
}

fn severity_color(severity: &str) -> Color {
    match severity {
        "success" => Color::Green,
        "error" => Color::Red,
        "warning" => Color::Yellow,
        _ => Color::Blue,
    }
}

impl ContentComponent {
    pub fn new(config: &Config) -> Self {
        let materials = config
            .materials
            .iter()
            .cloned()
            .map(|material| (material, ButtonState::new("Unduh")))
            .collect();

        Self {
            selected: 0,
            materials,
            khs_button: ButtonState::new("Download PDF"),
            save_button: ButtonState::new("Simpan"),
            profile: ProfileForm::new(&config.nim, &config.email),
            area: Rect::default(),
            click_targets: Vec::new(),
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<Action> {
        let position = Position::new(column, row);
        self.click_targets
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, action)| action.clone())
    }

    fn item_count(&self, route: Route) -> usize {
        match route {
            Route::Dashboard => 0,
            Route::Materi => self.materials.len(),
            Route::Khs => 2,
            Route::Profil => 3,
        }
    }

    pub fn reset_cursor(&mut self) {
        self.selected = 0;
        self.profile.editing = false;
    }

    pub fn next(&mut self, route: Route) {
        let max = self.item_count(route).saturating_sub(1);
        if self.selected < max {
            self.selected += 1;
        }
    }

    pub fn previous(&mut self, _route: Route) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Activate the item under the cursor; busy controls are inert
    pub fn activate(&mut self, route: Route) -> Option<Action> {
        match route {
            Route::Dashboard => None,
            Route::Materi => {
                let (material, button) = self.materials.get(self.selected)?;
                if button.is_busy() {
                    None
                } else {
                    Some(Action::DownloadMaterial(material.id))
                }
            }
            Route::Khs => match self.selected {
                0 => Some(Action::PrintKhs),
                1 if !self.khs_button.is_busy() => Some(Action::DownloadKhs),
                _ => None,
            },
            Route::Profil => match self.selected {
                0 => {
                    self.profile.field = ProfileField::Nim;
                    self.profile.editing = true;
                    None
                }
                1 => {
                    self.profile.field = ProfileField::Email;
                    self.profile.editing = true;
                    None
                }
                2 if !self.save_button.is_busy() => Some(Action::FormSubmit),
                _ => None,
            },
        }
    }

    /// Disable the material's button and swap in the loading label.
    /// Returns false when a request is already in flight for it.
    pub fn begin_material_download(&mut self, id: u32) -> bool {
        match self.button_for_mut(id) {
            Some(button) if !button.is_busy() => {
                button.set_loading(true);
                true
            }
            _ => false,
        }
    }

    /// Re-enable the material's button; called on every terminal outcome
    pub fn finish_material_download(&mut self, id: u32) {
        if let Some(button) = self.button_for_mut(id) {
            button.set_loading(false);
        }
    }

    fn button_for_mut(&mut self, id: u32) -> Option<&mut ButtonState> {
        self.materials
            .iter_mut()
            .find(|(material, _)| material.id == id)
            .map(|(_, button)| button)
    }

    pub fn draw_with(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        route: Route,
        alerts: &AlertFeed,
        config: &Config,
        tooltips: &mut TooltipManager,
    ) {
        self.area = area;
        self.click_targets.clear();

        // Alert banners stacked at the top of the region, newest first
        let mut y = area.y;
        for alert in alerts.iter() {
            if y >= area.bottom() {
                break;
            }
            let row = Rect::new(area.x, y, area.width, 1);
            frame.render_widget(
                Paragraph::new(format!(" {}", alert.message)).style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(severity_color(&alert.severity)),
                ),
                row,
            );

            let close = Rect::new(area.right().saturating_sub(4), y, 3, 1);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "[x]",
                    Style::default()
                        .fg(Color::Black)
                        .bg(severity_color(&alert.severity))
                        .add_modifier(Modifier::BOLD),
                )),
                close,
            );
            self.click_targets.push((close, Action::DismissAlert(alert.id)));
            y += 1;
        }

        let body = Rect::new(
            area.x,
            y,
            area.width,
            area.height.saturating_sub(y - area.y),
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", route.title()));
        let inner = block.inner(body);
        frame.render_widget(block, body);

        match route {
            Route::Dashboard => self.draw_dashboard(frame, inner, config),
            Route::Materi => self.draw_materials(frame, inner, tooltips),
            Route::Khs => self.draw_khs(frame, inner, config, tooltips),
            Route::Profil => self.draw_profile(frame, inner),
        }
    }

    fn draw_dashboard(&mut self, frame: &mut Frame, inner: Rect, config: &Config) {
        let lines = vec![
            format!("Selamat datang, {}!", config.nama),
            format!("NIM: {}", config.nim),
            String::new(),
            "Tekan 'm' untuk membuka menu navigasi.".to_string(),
            "Tekan 'a' untuk aksi cepat, '?' untuk bantuan.".to_string(),
        ];
        for (index, line) in lines.iter().enumerate() {
            if index as u16 >= inner.height {
                break;
            }
            frame.render_widget(
                Paragraph::new(line.as_str()),
                Rect::new(inner.x, inner.y + index as u16, inner.width, 1),
            );
        }
    }

    fn draw_materials(&mut self, frame: &mut Frame, inner: Rect, tooltips: &mut TooltipManager) {
        let weeks: BTreeSet<u32> = self.materials.iter().map(|(m, _)| m.minggu).collect();
        let mut y = inner.y;
        let mut targets = Vec::new();

        for week in weeks {
            if y >= inner.bottom() {
                break;
            }
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!("Minggu {}", week),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                Rect::new(inner.x, y, inner.width, 1),
            );
            y += 1;

            for (index, (material, button)) in self.materials.iter().enumerate() {
                if material.minggu != week {
                    continue;
                }
                if y >= inner.bottom() {
                    break;
                }

                let row = Rect::new(inner.x, y, inner.width, 1);
                let row_style = if index == self.selected {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                frame.render_widget(
                    Paragraph::new(format!("  {}", material.judul)).style(row_style),
                    row,
                );

                let button_text = format!("[ {} ]", button.label);
                let button_width = button_text.width() as u16;
                let button_rect = Rect::new(
                    inner.right().saturating_sub(button_width),
                    y,
                    button_width,
                    1,
                );
                let button_style = if button.is_busy() {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                };
                frame.render_widget(
                    Paragraph::new(Span::styled(button_text, button_style)),
                    button_rect,
                );

                if !button.is_busy() {
                    targets.push((button_rect, Action::DownloadMaterial(material.id)));
                }
                tooltips.register(button_rect, "Unduh materi");
                y += 1;
            }
        }
        self.click_targets.extend(targets);
    }

    fn draw_khs(
        &mut self,
        frame: &mut Frame,
        inner: Rect,
        config: &Config,
        tooltips: &mut TooltipManager,
    ) {
        let info = [
            format!("Nama : {}", config.nama),
            format!("NIM  : {}", config.nim),
        ];
        for (index, line) in info.iter().enumerate() {
            if index as u16 >= inner.height {
                return;
            }
            frame.render_widget(
                Paragraph::new(line.as_str()),
                Rect::new(inner.x, inner.y + index as u16, inner.width, 1),
            );
        }

        let y = inner.y + 3;
        if y >= inner.bottom() {
            return;
        }

        let print_text = "[ Cetak KHS ]";
        let download_text = format!("[ {} ]", self.khs_button.label);
        let print_width = print_text.width() as u16;

        let print_rect = Rect::new(inner.x, y, print_width, 1);
        let download_rect = Rect::new(
            inner.x + print_width + 2,
            y,
            download_text.width() as u16,
            1,
        );

        let selected_style = Style::default().add_modifier(Modifier::REVERSED);
        let print_style = if self.selected == 0 {
            selected_style
        } else {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        };
        let download_style = if self.khs_button.is_busy() {
            Style::default().fg(Color::DarkGray)
        } else if self.selected == 1 {
            selected_style
        } else {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        };

        frame.render_widget(
            Paragraph::new(Span::styled(print_text, print_style)),
            print_rect,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(download_text, download_style)),
            download_rect,
        );

        self.click_targets.push((print_rect, Action::PrintKhs));
        if !self.khs_button.is_busy() {
            self.click_targets.push((download_rect, Action::DownloadKhs));
        }
        tooltips.register(print_rect, "Buka halaman cetak");
        tooltips.register(download_rect, "Unduh KHS sebagai PDF");
    }

    fn draw_profile(&mut self, frame: &mut Frame, inner: Rect) {
        let cursor = |field: ProfileField| {
            if self.profile.editing && self.profile.field == field {
                "_"
            } else {
                ""
            }
        };
        let rows = [
            (0, format!("NIM   : {}{}", self.profile.nim, cursor(ProfileField::Nim))),
            (
                1,
                format!(
                    "Email : {}{}",
                    self.profile.email,
                    cursor(ProfileField::Email)
                ),
            ),
        ];
        for (index, text) in &rows {
            if *index as u16 >= inner.height {
                return;
            }
            let style = if self.selected == *index {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            frame.render_widget(
                Paragraph::new(text.as_str()).style(style),
                Rect::new(inner.x, inner.y + *index as u16, inner.width, 1),
            );
        }

        let y = inner.y + 3;
        if y >= inner.bottom() {
            return;
        }
        let save_text = format!("[ {} ]", self.save_button.label);
        let save_rect = Rect::new(inner.x, y, save_text.width() as u16, 1);
        let save_style = if self.save_button.is_busy() {
            Style::default().fg(Color::DarkGray)
        } else if self.selected == 2 {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(save_text, save_style)),
            save_rect,
        );
        if !self.save_button.is_busy() {
            self.click_targets.push((save_rect, Action::FormSubmit));
        }

        if (y + 2) < inner.bottom() {
            frame.render_widget(
                Paragraph::new("Enter untuk mengubah field, Esc untuk selesai.")
                    .style(Style::default().fg(Color::DarkGray)),
                Rect::new(inner.x, y + 2, inner.width, 1),
            );
        }
    }
}
