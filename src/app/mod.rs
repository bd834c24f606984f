//! `PortfolioApp` — the top-level egui application state.
//!
//! This module declares the `PortfolioApp` struct, its constructor, and
//! the `eframe::App` frame loop. The drawing methods are split across
//! the sibling sub-modules:
//!
//! - `sidebar`  — navigation menu, mobile drawer, hire-me shortcut
//! - `content`  — the active section, gallery cards, overlays
//! - `switcher` — style-switcher panel, theme persistence

pub mod sidebar;
pub mod content;
pub mod switcher;

use std::collections::HashMap;
use std::sync::mpsc;
use std::time::Instant;

use eframe::egui;

use folio::filter::{self, FilterState};
use folio::fx::fade::ImageFade;
use folio::fx::reveal::{self, ProgressBar, SectionFade};
use folio::fx::scroll::{self, ScrollWatcher};
use folio::gallery::{Certificate, Gallery};
use folio::nav::{NavState, Section};
use folio::net::{FetchError, ImageLoader};
use folio::prefs::{self, Preferences};
use folio::theme::{Palette, ThemePreference};
use folio::typing::{self, TypingAnimator};

/// Certificate data source. A hosted deployment can point this at an
/// http(s) URL; the default is the bundled demo file.
const CERTIFICATES_SOURCE: &str = "assets/certificates.json";

pub struct PortfolioApp {
    // Preferences
    pub prefs: Preferences,
    pub theme: ThemePreference,
    pub dark_mode: bool,
    pub color_input: String,
    pub switcher_open: bool,
    // Navigation
    pub nav: NavState,
    // Typing headline
    pub typing: TypingAnimator,
    pub typing_next: Instant,
    // Certificate gallery
    pub gallery: Gallery,
    pub fetch_rx: Option<mpsc::Receiver<Result<Vec<(String, Certificate)>, FetchError>>>,
    pub image_loader: ImageLoader,
    pub image_textures: HashMap<String, egui::TextureHandle>,
    pub image_fades: HashMap<String, ImageFade>,
    // Portfolio grid
    pub filter: FilterState,
    pub popup_open: bool,
    // Decorators
    pub progress_bars: Vec<ProgressBar>,
    pub section_fades: HashMap<Section, SectionFade>,
    pub scroll_watcher: ScrollWatcher,
    pub scroll_offset: f32,
    pub content_height: f32,
    pub scroll_to_top_requested: bool,
    pub last_frame: Instant,
}

impl PortfolioApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let prefs = prefs::load();
        let theme = prefs.theme().unwrap_or_default();
        let dark_mode = prefs.dark_mode().unwrap_or(false);

        let mut app = Self {
            prefs,
            theme,
            dark_mode,
            color_input: theme.base().to_hex(),
            switcher_open: false,
            nav: NavState::default(),
            typing: TypingAnimator::new(typing::default_labels()),
            typing_next: Instant::now(),
            gallery: Gallery::default(),
            fetch_rx: None,
            image_loader: ImageLoader::new(),
            image_textures: HashMap::new(),
            image_fades: HashMap::new(),
            filter: FilterState::new(filter::default_items()),
            popup_open: false,
            progress_bars: reveal::default_progress_bars(),
            section_fades: HashMap::new(),
            scroll_watcher: ScrollWatcher::default(),
            scroll_offset: 0.0,
            content_height: 0.0,
            scroll_to_top_requested: false,
            last_frame: Instant::now(),
        };
        app.apply_visuals(ctx);
        app.start_fetch(ctx);
        app
    }

    pub fn palette(&self) -> Palette {
        Palette::new(self.theme.base())
    }

    /// Background scrolling is locked while any overlay is up.
    pub fn scroll_locked(&self) -> bool {
        self.gallery.scroll_locked() || self.popup_open || self.nav.drawer_open()
    }

    /// One-shot startup fetch of the certificate data file on a
    /// background thread (no retry; failure leaves the gallery empty).
    fn start_fetch(&mut self, ctx: &egui::Context) {
        if !CERTIFICATES_SOURCE.starts_with("http")
            && !std::path::Path::new(CERTIFICATES_SOURCE).exists()
        {
            log::error!("certificate data file missing: {CERTIFICATES_SOURCE}");
        }

        let (tx, rx) = mpsc::channel();
        self.fetch_rx = Some(rx);
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            let result = folio::net::fetch_certificates(CERTIFICATES_SOURCE);
            let _ = tx.send(result);
            ctx.request_repaint();
        });
    }

    /// Poll the fetch channel and install the records when they arrive.
    fn check_fetch(&mut self) {
        if let Some(rx) = &self.fetch_rx {
            if let Ok(result) = rx.try_recv() {
                match result {
                    Ok(records) => {
                        log::info!("loaded {} certificates", records.len());
                        self.gallery.load(records);
                    }
                    Err(e) => {
                        log::error!("certificate fetch failed: {e}");
                    }
                }
                self.fetch_rx = None;
            }
        }
    }

    fn handle_escape(&mut self) {
        if self.popup_open {
            self.popup_open = false;
        } else {
            // no-op while nothing is open
            let _ = self.gallery.handle_escape();
        }
    }

    fn any_animation_running(&self, now: Instant) -> bool {
        self.filter.animating()
            || self.progress_bars.iter().any(|b| b.animating())
            || self
                .section_fades
                .get(&self.nav.current())
                .is_some_and(|f| !f.settled())
            || self.image_fades.values().any(|f| f.animating(now))
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last_frame)
            .as_secs_f32()
            .min(0.1);
        self.last_frame = now;

        self.check_fetch();
        if self.image_loader.poll() {
            ctx.request_repaint();
        }

        // Typing headline: catch up on due ticks, then sleep until the
        // next one.
        while now >= self.typing_next {
            let delay = self.typing.tick();
            self.typing_next += delay;
        }
        ctx.request_repaint_after(self.typing_next.saturating_duration_since(now));

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.handle_escape();
        }

        // Wide viewports force the mobile drawer closed.
        let viewport_width = ctx.screen_rect().width();
        if scroll::drawer_forced_closed(viewport_width) {
            self.nav.close_drawer();
        }

        self.filter.advance(now);
        if self.nav.take_progress_reveal(now) {
            for bar in &mut self.progress_bars {
                bar.trigger();
            }
        }
        for bar in &mut self.progress_bars {
            bar.step(dt);
        }

        let wide = viewport_width >= scroll::DRAWER_BREAKPOINT;
        if wide {
            egui::SidePanel::left("sidebar")
                .exact_width(220.0)
                .resizable(false)
                .show(ctx, |ui| self.draw_sidebar(ui, now));
        } else {
            egui::TopBottomPanel::top("topbar").show(ctx, |ui| self.draw_topbar(ui));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_content(ui, ctx, now, dt);
        });

        if !wide && self.nav.drawer_open() {
            self.draw_drawer(ctx, now);
        }

        self.draw_switcher(ctx);
        self.draw_detail_overlay(ctx, now);
        self.draw_popup(ctx);
        self.draw_scroll_top(ctx);

        if self.any_animation_running(now) {
            ctx.request_repaint();
        }
    }
}
