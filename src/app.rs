//! Root application component
//!
//! The App struct implements the Component trait, acting as the root
//! component that owns all transient UI state (sidebar, modal, alerts,
//! tooltips, viewport) and coordinates between child components. Network
//! completions are drained on Tick; the only mutual exclusion between
//! overlapping requests is each control's own disabled flag, set
//! synchronously before the request is spawned.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, draw_status_bar, quick_actions_spec, row_action, sidebar_overlay,
    ContentComponent, FabComponent, ModalDialog, SidebarComponent, TooltipManager,
};
use crate::config::Config;
use crate::model::alert::AlertFeed;
use crate::model::modal::{ModalSpec, ModalState};
use crate::model::page::Route;
use crate::model::sidebar::SidebarState;
use crate::model::ui::Viewport;
use crate::services::download::KhsResult;
use crate::services::http::{ApiPayload, ApiRequest, ApiRunner, Completion, RequestContext};
use crate::services::{self, HttpMethod, KhsRunner};
use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use std::path::PathBuf;
use std::time::Instant;

/// Generic localized banner for any failed request; the detail stays in
/// the log only
const REQUEST_ERROR_MESSAGE: &str = "Terjadi kesalahan saat memproses permintaan.";

/// Key-binding overlay; informational, so the footer stays hidden
fn help_spec() -> ModalSpec {
    ModalSpec::message(
        "Bantuan",
        vec![
            "m      Buka/tutup menu navigasi".to_string(),
            "j/k    Navigasi item".to_string(),
            "Enter  Aktifkan item".to_string(),
            "a      Aksi cepat".to_string(),
            "p / d  Cetak / unduh KHS (halaman KHS)".to_string(),
            "q      Keluar".to_string(),
        ],
    )
}

/// Main application state - coordinates between components
pub struct App {
    /// Active content page
    pub route: Route,

    /// Terminal dimensions, tracked for the overlay breakpoint
    pub viewport: Viewport,

    /// Sidebar open/expanded state
    pub sidebar: SidebarState,

    /// The singleton modal region
    pub modal: ModalState,

    /// Alert banner feed
    pub alerts: AlertFeed,

    /// Hover tooltip regions and nodes
    pub tooltips: TooltipManager,

    /// Portal origin, identity and download settings
    pub config: Config,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// URL queued for the main loop to open in the system browser
    pub pending_open_url: Option<String>,

    /// Background API request runner
    api: ApiRunner,

    /// Background transcript download runner
    khs_runner: KhsRunner,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub sidebar_panel: SidebarComponent,
    pub content: ContentComponent,
    pub modal_dialog: ModalDialog,
    pub fab: FabComponent,

    /// Menu toggle control in the header
    menu_toggle_rect: Rect,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App instance from the saved config, seeding the
    /// config file with defaults on first run
    pub fn new() -> App {
        let config = match Config::load() {
            Some(config) => config,
            None => {
                let config = Config::default();
                if let Err(e) = config.save() {
                    log::warn!("could not write default config: {}", e);
                }
                config
            }
        };
        Self::with_config(config)
    }

    pub fn with_config(config: Config) -> App {
        App {
            route: Route::Dashboard,
            viewport: Viewport::default(),
            sidebar: SidebarState::new(),
            modal: ModalState::new(),
            alerts: AlertFeed::new(),
            tooltips: TooltipManager::new(),
            content: ContentComponent::new(&config),
            config,
            should_quit: false,
            pending_open_url: None,
            api: ApiRunner::new(),
            khs_runner: KhsRunner::new(),
            sidebar_panel: SidebarComponent::new(),
            modal_dialog: ModalDialog::new(),
            fab: FabComponent::new(),
            menu_toggle_rect: Rect::default(),
        }
    }

    /// Resolve a possibly-relative portal path against the configured origin
    fn absolute_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            self.config.url(url)
        }
    }

    /// Disable the button and fire the download request; a busy button
    /// means a request is already in flight and the trigger is ignored
    fn start_material_download(&mut self, id: u32) {
        if !self.content.begin_material_download(id) {
            return;
        }
        self.api.request(ApiRequest {
            method: HttpMethod::Post,
            url: self.config.url(&format!("/api/material/{}/download", id)),
            body: None,
            session_token: self.config.session_token_opt(),
            context: RequestContext::MaterialDownload { id },
        });
    }

    fn start_khs_download(&mut self) {
        if self.content.khs_button.is_busy() {
            return;
        }
        self.content.khs_button.set_busy_label("Mengunduh...");
        self.khs_runner.spawn(
            self.config.url("/akademik/khs/download"),
            self.config.session_token_opt(),
            PathBuf::from(&self.config.download_dir),
        );
    }

    /// Validate the profile form locally, then submit it as JSON
    fn submit_profile(&mut self) -> Option<Action> {
        let nim = self.content.profile.nim.clone();
        let email = self.content.profile.email.clone();

        if !services::validate_nim(&nim) {
            return Some(Action::ShowAlert {
                message: "NIM harus terdiri dari 9 digit angka.".to_string(),
                severity: "error".to_string(),
            });
        }
        if !services::validate_email(&email) {
            return Some(Action::ShowAlert {
                message: "Format email tidak valid.".to_string(),
                severity: "error".to_string(),
            });
        }

        self.content.save_button.set_loading(true);
        self.api.request(ApiRequest {
            method: HttpMethod::Post,
            url: self.config.url("/akademik/profil/update"),
            body: Some(serde_json::json!({ "nim": nim, "email": email })),
            session_token: self.config.session_token_opt(),
            context: RequestContext::ProfileUpdate,
        });
        None
    }

    /// Handle one finished API request.
    ///
    /// Controls are released on every terminal outcome, including
    /// transport failures; error detail goes to the log and the user sees
    /// only the generic banner.
    fn handle_completion(&mut self, completion: Completion) {
        let Completion { context, result } = completion;

        match &context {
            RequestContext::MaterialDownload { id } => {
                self.content.finish_material_download(*id);
            }
            RequestContext::ProfileUpdate => {
                self.content.save_button.set_loading(false);
            }
        }

        match result {
            Err(err) => {
                log::error!("request failed: {}", err);
                self.alerts.push(REQUEST_ERROR_MESSAGE, "error");
            }
            Ok(payload) => self.on_api_success(context, payload),
        }
    }

    fn on_api_success(&mut self, context: RequestContext, payload: ApiPayload) {
        match context {
            RequestContext::MaterialDownload { .. } => match payload {
                ApiPayload::Json(value)
                    if value.get("status").and_then(|v| v.as_str()) == Some("success") =>
                {
                    let message = value
                        .get("message")
                        .and_then(|v| v.as_str())
                        .unwrap_or("Materi berhasil diunduh.")
                        .to_string();
                    self.alerts.push(message, "success");

                    if let Some(file_url) = value.get("file_url").and_then(|v| v.as_str()) {
                        self.pending_open_url = Some(self.absolute_url(file_url));
                    }
                }
                _ => {
                    self.alerts.push("Gagal mengunduh materi.", "error");
                }
            },
            RequestContext::ProfileUpdate => match payload {
                ApiPayload::Json(value) => {
                    let message = value
                        .get("message")
                        .and_then(|v| v.as_str())
                        .unwrap_or("Profil berhasil diperbarui.")
                        .to_string();
                    self.alerts.push(message, "success");
                }
                // 200 with a non-JSON body degrades to the raw text
                ApiPayload::Text(text) => {
                    self.alerts.push(text, "info");
                }
            },
        }
    }

    /// Handle one finished transcript download; the button is restored
    /// in both continuations
    fn handle_khs_result(&mut self, result: KhsResult) {
        self.content.khs_button.set_loading(false);
        match result {
            Ok(path) => {
                log::info!("KHS saved to {}", path.display());
                self.alerts.push("KHS berhasil diunduh!", "success");
            }
            Err(err) => {
                log::error!("KHS download failed: {}", err);
                self.alerts
                    .push("Gagal mengunduh KHS. Silakan coba lagi.", "error");
            }
        }
    }

    fn draw_header(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" SIAKAD - Sistem Informasi Akademik ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let toggle_text = "[≡ Menu]";
        self.menu_toggle_rect = Rect::new(inner.x + 1, inner.y, 8, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(
                toggle_text,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            self.menu_toggle_rect,
        );
        self.tooltips
            .register(self.menu_toggle_rect, "Buka/tutup menu navigasi");

        let title = self.route.title();
        let title_rect = Rect::new(
            inner
                .right()
                .saturating_sub(title.len() as u16 + 1)
                .max(inner.x),
            inner.y,
            (title.len() as u16).min(inner.width),
            1,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(title, Style::default().fg(Color::DarkGray))),
            title_rect,
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if self.modal.is_open() {
            return self.modal_dialog.handle_key_event(key, &self.modal);
        }

        // Text entry while a profile field is focused
        if self.route == Route::Profil && self.content.profile.editing {
            let action = match key.code {
                KeyCode::Esc | KeyCode::Enter => {
                    self.content.profile.editing = false;
                    None
                }
                KeyCode::Backspace => Some(Action::FormBackspace),
                KeyCode::Char(c) => Some(Action::FormInput(c)),
                _ => None,
            };
            return Ok(action);
        }

        if self.sidebar.open {
            let action = match key.code {
                KeyCode::Esc => Some(Action::CloseSidebar),
                KeyCode::Char('m') => Some(Action::ToggleSidebar),
                KeyCode::Char('j') | KeyCode::Down => Some(Action::SidebarDown),
                KeyCode::Char('k') | KeyCode::Up => Some(Action::SidebarUp),
                KeyCode::Enter => Some(Action::SidebarActivate),
                KeyCode::Char('q') => Some(Action::RequestConfirm {
                    message: "Keluar dari aplikasi?".to_string(),
                    on_confirm: Box::new(Action::Quit),
                }),
                _ => None,
            };
            return Ok(action);
        }

        let action = match key.code {
            KeyCode::Char('q') => Some(Action::RequestConfirm {
                message: "Keluar dari aplikasi?".to_string(),
                on_confirm: Box::new(Action::Quit),
            }),
            KeyCode::Char('m') => Some(Action::ToggleSidebar),
            KeyCode::Char('a') => Some(Action::OpenQuickActions),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Enter => Some(Action::Activate),
            KeyCode::Char('p') if self.route == Route::Khs => Some(Action::PrintKhs),
            KeyCode::Char('d') if self.route == Route::Khs => Some(Action::DownloadKhs),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let (column, row) = (mouse.column, mouse.row);

        let action = match mouse.kind {
            MouseEventKind::Moved => {
                // Elements under the backdrop cannot be hovered
                if self.modal.is_open() {
                    None
                } else {
                    Some(Action::PointerMoved { column, row })
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if self.modal.is_open() {
                    self.modal_dialog.hit(column, row)
                } else if self.fab.contains(column, row) {
                    Some(Action::OpenQuickActions)
                } else if self.menu_toggle_rect.contains(Position::new(column, row)) {
                    Some(Action::ToggleSidebar)
                } else if self.sidebar.open && self.sidebar_panel.contains(column, row) {
                    self.sidebar_panel.hit(column, row)
                } else if self.content.contains(column, row) {
                    Some(Action::ContentClick { column, row })
                } else {
                    None
                }
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                for completion in self.api.poll() {
                    self.handle_completion(completion);
                }
                for result in self.khs_runner.poll() {
                    self.handle_khs_result(result);
                }
                self.alerts.prune(Instant::now());
            }
            Action::Resize(width, height) => {
                self.viewport = Viewport::new(width, height);
            }
            Action::Quit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Sidebar
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleSidebar => self.sidebar.toggle(),
            Action::CloseSidebar => self.sidebar.close(),
            Action::ToggleMenuSection(id) => self.sidebar.toggle_section(&id),
            Action::SidebarUp => self.sidebar.cursor_up(),
            Action::SidebarDown => self.sidebar.cursor_down(),
            Action::SidebarActivate => {
                if let Some(menu_row) = self.sidebar.selected_row() {
                    return Ok(Some(row_action(&menu_row)));
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::Navigate(route) => {
                self.modal.close();
                self.sidebar.close();
                self.route = route;
                self.content.reset_cursor();
            }
            Action::OpenUrl(url) => {
                self.modal.close();
                let url = self.absolute_url(&url);
                self.pending_open_url = Some(url);
            }
            Action::OpenQuickActions => {
                return Ok(Some(Action::OpenModal(quick_actions_spec(&self.config))));
            }
            Action::OpenHelp => {
                return Ok(Some(Action::OpenModal(help_spec())));
            }

            // ─────────────────────────────────────────────────────────────────
            // Modal
            // ─────────────────────────────────────────────────────────────────
            Action::OpenModal(spec) => {
                self.modal.open(spec);
            }
            Action::ConfirmModal => {
                let follow = self.modal.on_confirm();
                self.modal.close();
                return Ok(follow);
            }
            Action::CancelModal => {
                let follow = self.modal.on_cancel();
                self.modal.close();
                return Ok(follow);
            }
            Action::CloseModal => {
                self.modal.close();
            }
            Action::ModalUp => self.modal.item_up(),
            Action::ModalDown => self.modal.item_down(),
            Action::RequestConfirm {
                message,
                on_confirm,
            } => {
                return Ok(Some(Action::OpenModal(ModalSpec::confirm(
                    message,
                    *on_confirm,
                ))));
            }

            // ─────────────────────────────────────────────────────────────────
            // Alerts
            // ─────────────────────────────────────────────────────────────────
            Action::ShowAlert { message, severity } => {
                self.alerts.push(message, severity);
            }
            Action::DismissAlert(id) => {
                self.alerts.dismiss(id);
            }

            // ─────────────────────────────────────────────────────────────────
            // Content
            // ─────────────────────────────────────────────────────────────────
            Action::ContentClick { column, row } => {
                let follow = self.content.hit(column, row);
                // Overlay behavior on narrow viewports: the click also
                // collapses an open sidebar, and still reaches the control
                // under it
                if self.viewport.is_narrow() && self.sidebar.open {
                    self.sidebar.close();
                }
                return Ok(follow);
            }
            Action::PointerMoved { column, row } => {
                self.tooltips.pointer_moved(column, row);
            }
            Action::NextItem => self.content.next(self.route),
            Action::PrevItem => self.content.previous(self.route),
            Action::Activate => {
                return Ok(self.content.activate(self.route));
            }
            Action::FormInput(c) => self.content.profile.input(c),
            Action::FormBackspace => self.content.profile.backspace(),
            Action::FormSubmit => {
                return Ok(self.submit_profile());
            }

            // ─────────────────────────────────────────────────────────────────
            // Downloads
            // ─────────────────────────────────────────────────────────────────
            Action::DownloadMaterial(id) => {
                self.start_material_download(id);
            }
            Action::DownloadKhs => {
                self.start_khs_download();
            }
            Action::PrintKhs => {
                self.pending_open_url = Some(self.config.url("/akademik/khs"));
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.viewport = Viewport::new(area.width, area.height);
        self.tooltips.begin_frame();

        let sidebar_pushes = self.sidebar.open && !self.viewport.is_narrow();
        let layout = calculate_main_layout(area, sidebar_pushes);

        self.draw_header(frame, layout.header);
        self.content.draw_with(
            frame,
            layout.content,
            self.route,
            &self.alerts,
            &self.config,
            &mut self.tooltips,
        );
        self.fab.draw(frame, layout.content);
        self.tooltips.register(self.fab.rect(), "Aksi cepat");

        if let Some(sidebar_area) = layout.sidebar {
            self.sidebar_panel
                .draw_with_state(frame, sidebar_area, &self.sidebar);
        } else if self.sidebar.open {
            // Narrow viewport: the sidebar overlays the content region
            self.sidebar_panel
                .draw_with_state(frame, sidebar_overlay(layout.content), &self.sidebar);
        }

        draw_status_bar(
            frame,
            layout.help,
            self.modal.is_open(),
            self.sidebar.open,
            self.route,
        );

        if self.modal.is_open() {
            self.modal_dialog.draw_with_state(frame, area, &self.modal)?;
        } else {
            self.tooltips.draw(frame, area);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ui::OVERLAY_BREAKPOINT;
    use crate::services::http::ApiError;
    use serde_json::json;

    fn app() -> App {
        App::with_config(Config::default())
    }

    /// Apply an action and its follow-ups, mirroring the main loop
    fn dispatch(app: &mut App, action: Action) {
        let mut current = Some(action);
        while let Some(a) = current {
            current = app.update(a).unwrap();
        }
    }

    #[test]
    fn test_narrow_content_click_closes_sidebar_exactly_once() {
        let mut app = app();
        app.update(Action::Resize(OVERLAY_BREAKPOINT - 20, 24)).unwrap();
        app.update(Action::ToggleSidebar).unwrap();
        assert!(app.sidebar.open);

        app.update(Action::ContentClick { column: 40, row: 10 }).unwrap();
        assert!(!app.sidebar.open);

        // Repeated clicks while already closed are no-ops
        app.update(Action::ContentClick { column: 40, row: 10 }).unwrap();
        assert!(!app.sidebar.open);
    }

    #[test]
    fn test_wide_content_click_never_closes_sidebar() {
        let mut app = app();
        app.update(Action::Resize(OVERLAY_BREAKPOINT + 60, 40)).unwrap();
        app.update(Action::ToggleSidebar).unwrap();

        app.update(Action::ContentClick { column: 80, row: 10 }).unwrap();
        assert!(app.sidebar.open);
    }

    #[test]
    fn test_confirm_helper_runs_callback_then_closes() {
        let mut app = app();
        dispatch(
            &mut app,
            Action::RequestConfirm {
                message: "Keluar dari aplikasi?".to_string(),
                on_confirm: Box::new(Action::Quit),
            },
        );
        assert!(app.modal.is_open());
        assert!(app.modal.footer_visible);

        let follow = app.update(Action::ConfirmModal).unwrap();
        assert_eq!(follow, Some(Action::Quit));
        assert!(!app.modal.is_open());
    }

    #[test]
    fn test_cancel_closes_without_running_callback() {
        let mut app = app();
        dispatch(
            &mut app,
            Action::RequestConfirm {
                message: "Hapus?".to_string(),
                on_confirm: Box::new(Action::Quit),
            },
        );

        let follow = app.update(Action::CancelModal).unwrap();
        assert_eq!(follow, None);
        assert!(!app.modal.is_open());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_footer_reset_after_informational_modal() {
        let mut app = app();
        dispatch(&mut app, Action::OpenHelp);
        assert!(app.modal.is_open());
        assert!(!app.modal.footer_visible);

        app.update(Action::CloseModal).unwrap();
        assert!(app.modal.footer_visible);
    }

    #[test]
    fn test_quick_action_closes_modal_and_queues_url() {
        let mut app = app();
        dispatch(&mut app, Action::OpenQuickActions);
        assert!(app.modal.is_open());

        let item_action = app.modal.selected_item_action().unwrap();
        dispatch(&mut app, item_action);

        assert!(!app.modal.is_open());
        assert_eq!(
            app.pending_open_url.as_deref(),
            Some("http://localhost:5000/pengajuan/upload")
        );
    }

    #[test]
    fn test_material_success_releases_button_and_alerts() {
        let mut app = app();
        let id = app.content.materials[0].0.id;
        assert!(app.content.begin_material_download(id));

        app.handle_completion(Completion {
            context: RequestContext::MaterialDownload { id },
            result: Ok(ApiPayload::Json(json!({
                "status": "success",
                "message": "Download berhasil",
                "file_url": "http://x/f.pdf"
            }))),
        });

        assert!(!app.content.materials[0].1.is_busy());
        let first = app.alerts.iter().next().unwrap();
        assert_eq!(first.severity, "success");
        assert_eq!(first.message, "Download berhasil");
        assert_eq!(app.pending_open_url.as_deref(), Some("http://x/f.pdf"));
    }

    #[test]
    fn test_material_non_success_payload_shows_failure_alert() {
        let mut app = app();
        let id = app.content.materials[0].0.id;
        app.content.begin_material_download(id);

        app.handle_completion(Completion {
            context: RequestContext::MaterialDownload { id },
            result: Ok(ApiPayload::Json(json!({ "status": "error" }))),
        });

        assert!(!app.content.materials[0].1.is_busy());
        assert_eq!(
            app.alerts.iter().next().map(|a| a.message.as_str()),
            Some("Gagal mengunduh materi.")
        );
    }

    #[test]
    fn test_transport_failure_releases_button_with_generic_banner() {
        let mut app = app();
        let id = app.content.materials[0].0.id;
        app.content.begin_material_download(id);

        app.handle_completion(Completion {
            context: RequestContext::MaterialDownload { id },
            result: Err(ApiError::Transport("connection refused".to_string())),
        });

        assert!(!app.content.materials[0].1.is_busy());
        assert_eq!(
            app.alerts.iter().next().map(|a| a.message.as_str()),
            Some(REQUEST_ERROR_MESSAGE)
        );
    }

    #[test]
    fn test_khs_result_restores_button_in_both_continuations() {
        let mut app = app();

        app.content.khs_button.set_busy_label("Mengunduh...");
        app.handle_khs_result(Ok(PathBuf::from("/tmp/KHS_2026.pdf")));
        assert!(!app.content.khs_button.is_busy());
        assert_eq!(app.content.khs_button.label, "Download PDF");
        assert_eq!(
            app.alerts.iter().next().map(|a| a.message.as_str()),
            Some("KHS berhasil diunduh!")
        );

        app.content.khs_button.set_busy_label("Mengunduh...");
        app.handle_khs_result(Err("server returned 500".to_string()));
        assert!(!app.content.khs_button.is_busy());
        assert_eq!(app.content.khs_button.label, "Download PDF");
        assert_eq!(
            app.alerts.iter().next().map(|a| a.message.as_str()),
            Some("Gagal mengunduh KHS. Silakan coba lagi.")
        );
    }

    #[test]
    fn test_profile_submit_validates_before_request() {
        let mut app = app();

        app.content.profile.nim = "12345".to_string();
        let follow = app.update(Action::FormSubmit).unwrap();
        assert_eq!(
            follow,
            Some(Action::ShowAlert {
                message: "NIM harus terdiri dari 9 digit angka.".to_string(),
                severity: "error".to_string(),
            })
        );
        assert!(!app.content.save_button.is_busy());

        app.content.profile.nim = "123456789".to_string();
        app.content.profile.email = "not-an-email".to_string();
        let follow = app.update(Action::FormSubmit).unwrap();
        assert_eq!(
            follow,
            Some(Action::ShowAlert {
                message: "Format email tidak valid.".to_string(),
                severity: "error".to_string(),
            })
        );
    }

    #[test]
    fn test_navigate_closes_sidebar_and_resets_cursor() {
        let mut app = app();
        app.update(Action::ToggleSidebar).unwrap();
        app.content.selected = 3;

        app.update(Action::Navigate(Route::Khs)).unwrap();

        assert_eq!(app.route, Route::Khs);
        assert!(!app.sidebar.open);
        assert_eq!(app.content.selected, 0);
    }

    #[test]
    fn test_print_khs_queues_portal_page() {
        let mut app = app();
        app.update(Action::PrintKhs).unwrap();
        assert_eq!(
            app.pending_open_url.as_deref(),
            Some("http://localhost:5000/akademik/khs")
        );
    }

    #[test]
    fn test_relative_file_url_is_absolutized() {
        let mut app = app();
        let id = app.content.materials[0].0.id;
        app.content.begin_material_download(id);

        app.handle_completion(Completion {
            context: RequestContext::MaterialDownload { id },
            result: Ok(ApiPayload::Json(json!({
                "status": "success",
                "message": "ok",
                "file_url": "/static/uploads/materi.pdf"
            }))),
        });

        assert_eq!(
            app.pending_open_url.as_deref(),
            Some("http://localhost:5000/static/uploads/materi.pdf")
        );
    }
}
