//! Content-area rendering for `PortfolioApp`.
//!
//! Draws the active section inside the main scroll area, plus the
//! overlays that sit above it:
//!
//! - `draw_content`        — scroll area, section fade-in, dispatcher
//! - `draw_home` … `draw_contact` — the five sections
//! - `draw_detail_overlay` — certificate detail with lazy image
//! - `draw_popup`          — transient "coming soon" notice
//! - `draw_scroll_top`     — scroll-to-top affordance

use std::time::Instant;

use eframe::egui;

use folio::filter;
use folio::fx::fade::ImageFade;
use folio::fx::parallax;
use folio::fx::reveal;
use folio::fx::scroll;
use folio::gallery::Certificate;
use folio::nav::Section;
use folio::net::ImageStatus;

use crate::ui;
use super::PortfolioApp;

impl PortfolioApp {
    /// Render the active section inside the main scroll area.
    pub fn draw_content(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        now: Instant,
        dt: f32,
    ) {
        let section = self.nav.current();
        let view = ui.available_rect_before_wrap();

        // Reveal-on-scroll: the section fades in while it qualifies
        // inside the (margin-shrunk) viewport.
        let top = view.top() - self.scroll_offset;
        let height = self.content_height.max(view.height());
        let qualifies = reveal::section_qualifies(top, height, view.top(), view.height());
        let fade = self.section_fades.entry(section).or_default();
        fade.step(dt, qualifies);
        let alpha = fade.alpha();
        let rise = fade.offset_y();

        let mut scroll_area = egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .enable_scrolling(!self.scroll_locked());
        if self.scroll_to_top_requested {
            scroll_area = scroll_area.vertical_scroll_offset(0.0);
            self.scroll_to_top_requested = false;
        }

        let output = scroll_area.show(ui, |ui| {
            ui.add_space(24.0 + rise);
            ui.set_opacity(alpha);
            match section {
                Section::Home => self.draw_home(ui, ctx, now),
                Section::About => self.draw_about(ui),
                Section::Portfolio => self.draw_portfolio(ui, now),
                Section::Certificates => self.draw_certificates(ui),
                Section::Contact => self.draw_contact(ui, now),
            }
            ui.add_space(48.0);
        });

        self.scroll_offset = output.state.offset.y;
        self.content_height = output.content_size.y;

        // Any scroll movement auto-closes the style switcher.
        if self.scroll_watcher.update(self.scroll_offset) {
            self.switcher_open = false;
        }
    }

    // ── Home ─────────────────────────────────────────────────────────────────

    fn draw_home(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, now: Instant) {
        let palette = self.palette();

        // Hero banner: diagonal gradient with the parallax shape field.
        let (hero, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), 180.0),
            egui::Sense::hover(),
        );
        let painter = ui.painter_at(hero);
        let (from, to) = palette.gradient();
        ui::gradient_rect(&painter, hero, from, to);

        let screen = ctx.screen_rect();
        let pointer = ctx
            .input(|i| i.pointer.hover_pos())
            .unwrap_or_else(|| screen.center());
        let norm_x = (pointer.x / screen.width()).clamp(0.0, 1.0);
        let norm_y = (pointer.y / screen.height()).clamp(0.0, 1.0);

        for (i, offset) in parallax::field_offsets(norm_x, norm_y).iter().enumerate() {
            let base = hero.left_top()
                + egui::vec2(
                    hero.width() * (0.15 + 0.17 * i as f32),
                    hero.height() * if i % 2 == 0 { 0.3 } else { 0.65 },
                );
            let center = base + egui::vec2(offset.x, offset.y);
            ui::rotated_square(
                &painter,
                center,
                10.0 + 2.0 * i as f32,
                offset.rot_deg.to_radians(),
                ui::faded(ui::color32(palette.ornament_color(i)), 0.35),
            );
        }
        for i in 0..3 {
            let center = hero.left_top()
                + egui::vec2(hero.width() * (0.25 + 0.25 * i as f32), hero.height() * 0.5);
            ui::conic_ring(&painter, center, 26.0, &palette.conic(i));
        }

        ui.add_space(24.0);
        ui.heading(egui::RichText::new("Hi, I'm Sakamoro").size(32.0));
        ui.add_space(4.0);

        // Typing headline with a blinking caret.
        let caret = if ctx.input(|i| i.time) % 1.0 < 0.5 { "|" } else { " " };
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("I'm a ").size(20.0));
            ui.label(
                egui::RichText::new(format!("{}{}", self.typing.display(), caret))
                    .size(20.0)
                    .color(ui::color32(palette.primary()))
                    .strong(),
            );
        });

        ui.add_space(12.0);
        ui.label("I design and build things for the web, for desktops, and for play.");
        ui.add_space(16.0);

        let hire = egui::Button::new(egui::RichText::new("Hire Me").color(egui::Color32::WHITE))
            .fill(ui::color32(palette.primary()))
            .min_size(egui::vec2(120.0, 36.0));
        if ui.add(hire).clicked() {
            self.nav.activate_section(Section::Contact, now);
        }
    }

    // ── About ────────────────────────────────────────────────────────────────

    fn draw_about(&mut self, ui: &mut egui::Ui) {
        let palette = self.palette();
        ui.heading("About Me");
        ui.add_space(8.0);
        ui.label(
            "Designer-developer with a decade of shipped websites, apps and \
             small games. I like small teams, fast feedback, and interfaces \
             that feel alive.",
        );
        ui.add_space(24.0);
        ui.label(egui::RichText::new("Skills").strong());
        ui.add_space(8.0);

        let skills = ui.vertical(|ui| {
            let accent = ui::color32(palette.primary());
            let track = ui::color32a(palette.light_tint());
            for bar in &self.progress_bars {
                ui.horizontal(|ui| {
                    ui.label(&bar.label);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(format!("{:.0}%", bar.target() * 100.0));
                    });
                });
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(ui.available_width(), 8.0),
                    egui::Sense::hover(),
                );
                let painter = ui.painter();
                painter.rect_filled(rect, 4.0, track);
                let mut fill = rect;
                fill.set_width(rect.width() * bar.fill());
                painter.rect_filled(fill, 4.0, accent);
                ui.add_space(10.0);
            }
        });

        // Half-visible skills block re-fires the fill animation, the
        // native stand-in for the 0.5-threshold intersection observer.
        let clip = ui.clip_rect();
        let rect = skills.response.rect;
        let ratio = reveal::visible_ratio(rect.top(), rect.height(), clip.top(), clip.height());
        if ratio >= reveal::PROGRESS_TRIGGER_RATIO {
            for bar in &mut self.progress_bars {
                bar.trigger();
            }
        }
    }

    // ── Portfolio ────────────────────────────────────────────────────────────

    fn draw_portfolio(&mut self, ui: &mut egui::Ui, now: Instant) {
        let palette = self.palette();
        ui.heading("Portfolio");
        ui.add_space(8.0);

        // Filter bar. The active control derives from the stored
        // selection, so clicks just pass the tag.
        let mut apply_tag: Option<String> = None;
        ui.horizontal_wrapped(|ui| {
            for tag in filter::filter_tags(self.filter.items()) {
                let active = self.filter.is_selected(&tag);
                let text = if active {
                    egui::RichText::new(&tag)
                        .color(ui::color32(palette.primary()))
                        .strong()
                } else {
                    egui::RichText::new(&tag)
                };
                if ui.selectable_label(active, text).clicked() {
                    apply_tag = Some(tag);
                }
            }
        });
        if let Some(tag) = apply_tag {
            self.filter.apply(&tag, now);
        }
        ui.add_space(16.0);

        let mut open_popup = false;
        let accent = ui::color32(palette.primary());
        let items: Vec<_> = self.filter.items().to_vec();
        ui.horizontal_wrapped(|ui| {
            for (i, item) in items.iter().enumerate() {
                if !self.filter.in_layout(i) {
                    continue;
                }
                let alpha = self.filter.alpha(i, now);
                ui.scope(|ui| {
                    ui.set_opacity(alpha);
                    egui::Frame::group(ui.style())
                        .inner_margin(egui::Margin::same(12.0))
                        .show(ui, |ui| {
                            ui.set_width(240.0);
                            ui.label(egui::RichText::new(&item.title).strong());
                            ui.label(
                                egui::RichText::new(&item.category).small().color(accent),
                            );
                            ui.add_space(6.0);
                            ui.label(ui::truncate_str(&item.description, 90));
                            ui.add_space(8.0);
                            if item.coming_soon {
                                if ui.button("\u{23F0} Coming Soon").clicked() {
                                    open_popup = true;
                                }
                            } else if let Some(link) = &item.link {
                                ui.hyperlink_to("View Project", link);
                            }
                        });
                });
            }
        });
        if open_popup {
            self.popup_open = true;
        }
    }

    // ── Certificates ─────────────────────────────────────────────────────────

    fn draw_certificates(&mut self, ui: &mut egui::Ui) {
        let palette = self.palette();
        ui.heading("Certificates");
        ui.add_space(8.0);

        if !self.gallery.is_loaded() {
            if self.fetch_rx.is_some() {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new().size(24.0));
                    ui.label("Loading certificates...");
                });
            }
            // failed fetch: the gallery container simply stays empty
            return;
        }

        let accent = ui::color32(palette.primary());
        let mut view_details: Option<String> = None;
        let records: Vec<(String, Certificate)> = self.gallery.records().to_vec();
        ui.horizontal_wrapped(|ui| {
            for (id, cert) in &records {
                egui::Frame::group(ui.style())
                    .inner_margin(egui::Margin::same(12.0))
                    .show(ui, |ui| {
                        ui.set_width(260.0);
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(ui::icon_glyph(&cert.icon)).size(22.0),
                            );
                            ui.vertical(|ui| {
                                ui.label(egui::RichText::new(&cert.title).strong());
                                ui.label(
                                    egui::RichText::new(format!(
                                        "{} \u{00B7} {}",
                                        cert.category, cert.year
                                    ))
                                    .small()
                                    .color(accent),
                                );
                            });
                        });
                        ui.add_space(6.0);
                        ui.label(ui::truncate_str(&cert.description, 110));
                        ui.add_space(8.0);
                        ui.horizontal(|ui| {
                            if ui.button("View Details").clicked() {
                                view_details = Some(id.clone());
                            }
                            match cert.verify_url() {
                                Some(url) => {
                                    ui.hyperlink_to("Verify", url.to_string());
                                }
                                None => {
                                    ui.add_enabled(false, egui::Button::new("Verify"));
                                }
                            }
                        });
                    });
            }
        });

        if let Some(id) = view_details {
            if let Err(e) = self.gallery.open_detail(&id) {
                log::debug!("detail rejected: {e}");
            }
        }
    }

    // ── Contact ──────────────────────────────────────────────────────────────

    fn draw_contact(&mut self, ui: &mut egui::Ui, _now: Instant) {
        ui.heading("Contact");
        ui.add_space(8.0);
        ui.label("Have a project in mind? Let's talk.");
        ui.add_space(16.0);
        egui::Grid::new("contact_grid").spacing([16.0, 8.0]).show(ui, |ui| {
            ui.label(egui::RichText::new("Email").strong());
            ui.hyperlink_to("hello@sakamoro.dev", "mailto:hello@sakamoro.dev");
            ui.end_row();
            ui.label(egui::RichText::new("GitHub").strong());
            ui.hyperlink("https://github.com/ext-sakamoro");
            ui.end_row();
            ui.label(egui::RichText::new("Based in").strong());
            ui.label("Tokyo, JP \u{00B7} remote-friendly");
            ui.end_row();
        });
    }

    // ── Certificate detail overlay ───────────────────────────────────────────

    pub fn draw_detail_overlay(&mut self, ctx: &egui::Context, now: Instant) {
        let Some((_, cert)) = self.gallery.open_record() else {
            return;
        };
        let cert = cert.clone();

        let screen = ctx.screen_rect();
        let mut close = false;

        // Backdrop: dims the page and closes on click (the panel itself
        // consumes its own clicks).
        egui::Area::new(egui::Id::new("detail_backdrop"))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let resp = ui.allocate_response(screen.size(), egui::Sense::click());
                ui.painter()
                    .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(160));
                if resp.clicked() {
                    close = true;
                }
            });

        let accent = ui::color32(self.palette().primary());
        egui::Area::new(egui::Id::new("detail_panel"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                egui::Frame::window(ui.style())
                    .inner_margin(egui::Margin::same(20.0))
                    .show(ui, |ui| {
                        ui.set_width(screen.width().min(560.0) - 80.0);
                        ui.horizontal(|ui| {
                            ui.heading(&cert.title);
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.button("\u{2715}").clicked() {
                                        close = true;
                                    }
                                },
                            );
                        });
                        ui.label(
                            egui::RichText::new(format!(
                                "{} \u{00B7} {}",
                                cert.category, cert.year
                            ))
                            .color(accent),
                        );
                        ui.add_space(12.0);

                        self.draw_detail_image(ui, ctx, &cert.image, now);

                        ui.add_space(12.0);
                        ui.label(&cert.description);
                        ui.add_space(12.0);

                        if !cert.list_items.is_empty() {
                            ui.label(egui::RichText::new(cert.highlights_title()).strong());
                            for item in &cert.list_items {
                                ui.label(format!("  \u{2022} {item}"));
                            }
                            ui.add_space(12.0);
                        }

                        if !cert.verification_details.is_empty() {
                            ui.label(egui::RichText::new("Verification").strong());
                            ui.label(cert.verification_block());
                            ui.add_space(12.0);
                        }

                        if !cert.quote.is_empty() {
                            ui.label(egui::RichText::new(&cert.quote).italics().weak());
                        }
                    });
            });

        if close {
            self.gallery.close_detail();
        }
    }

    /// Lazily-loaded detail image: spinner while pending, fade-in once
    /// decoded, blank on failure.
    fn draw_detail_image(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        url: &str,
        now: Instant,
    ) {
        // Images already decoded when the overlay opens skip the fade.
        if !self.image_fades.contains_key(url) {
            let fade = if self.image_textures.contains_key(url) {
                ImageFade::already_loaded()
            } else {
                ImageFade::default()
            };
            self.image_fades.insert(url.to_string(), fade);
        }
        self.image_loader.request(url);

        let width = ui.available_width();
        match self.image_loader.status(url) {
            ImageStatus::Pending | ImageStatus::Unknown => {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.add(egui::Spinner::new().size(32.0));
                    ui.add_space(40.0);
                });
            }
            ImageStatus::Ready(data) => {
                let texture = self.image_textures.entry(url.to_string()).or_insert_with(|| {
                    ctx.load_texture(
                        url,
                        egui::ColorImage::from_rgba_unmultiplied(
                            [data.width as usize, data.height as usize],
                            &data.rgba,
                        ),
                        egui::TextureOptions::LINEAR,
                    )
                });
                let alpha = {
                    let fade = self.image_fades.entry(url.to_string()).or_default();
                    fade.mark_loaded(now);
                    fade.alpha(now)
                };
                let scale = (width / data.width as f32).min(1.0);
                let size = egui::vec2(
                    data.width as f32 * scale,
                    data.height as f32 * scale,
                );
                let tint = ui::faded(egui::Color32::WHITE, alpha);
                ui.add(
                    egui::Image::new((texture.id(), size)).tint(tint),
                );
            }
            ImageStatus::Failed => {
                // load error: leave the frame blank
                ui.allocate_exact_size(egui::vec2(width, 8.0), egui::Sense::hover());
            }
        }
    }

    // ── Coming-soon popup ────────────────────────────────────────────────────

    pub fn draw_popup(&mut self, ctx: &egui::Context) {
        if !self.popup_open {
            return;
        }
        let screen = ctx.screen_rect();
        let mut close = false;

        egui::Area::new(egui::Id::new("popup_backdrop"))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let resp = ui.allocate_response(screen.size(), egui::Sense::click());
                ui.painter()
                    .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(120));
                if resp.clicked() {
                    close = true;
                }
            });

        egui::Area::new(egui::Id::new("popup_panel"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                egui::Frame::window(ui.style())
                    .inner_margin(egui::Margin::same(20.0))
                    .show(ui, |ui| {
                        ui.set_width(300.0);
                        ui.vertical_centered(|ui| {
                            ui.label(egui::RichText::new("\u{23F0}").size(32.0));
                            ui.heading("Coming Soon");
                            ui.add_space(4.0);
                            ui.label("This project is still in the works. Check back later!");
                            ui.add_space(12.0);
                            if ui.button("Close").clicked() {
                                close = true;
                            }
                        });
                    });
            });

        if close {
            self.popup_open = false;
        }
    }

    // ── Scroll-to-top affordance ─────────────────────────────────────────────

    pub fn draw_scroll_top(&mut self, ctx: &egui::Context) {
        if !scroll::show_scroll_top(self.scroll_offset) {
            return;
        }
        egui::Area::new(egui::Id::new("scroll_top"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -24.0))
            .show(ctx, |ui| {
                let button = egui::Button::new(egui::RichText::new("\u{2191}").size(18.0))
                    .fill(ui::color32(self.palette().primary()))
                    .min_size(egui::vec2(40.0, 40.0));
                if ui.add(button).clicked() {
                    self.scroll_to_top_requested = true;
                }
            });
    }
}
