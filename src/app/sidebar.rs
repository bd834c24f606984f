//! Navigation chrome for `PortfolioApp`: the wide-viewport sidebar, the
//! narrow-viewport top bar with its burger button, and the slide-over
//! drawer.

use std::time::Instant;

use eframe::egui;

use folio::nav::Section;

use crate::ui;
use super::PortfolioApp;

impl PortfolioApp {
    /// Render the fixed sidebar (viewports at or above the breakpoint).
    pub fn draw_sidebar(&mut self, ui: &mut egui::Ui, now: Instant) {
        let accent = ui::color32(self.palette().primary());

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.heading(egui::RichText::new("Sakamoro").size(24.0).color(accent));
            ui.label(egui::RichText::new("Portfolio").small());
        });
        ui.add_space(24.0);
        ui.separator();
        ui.add_space(8.0);

        self.draw_menu_entries(ui, now);

        ui.add_space(16.0);
        ui.separator();
        ui.add_space(16.0);

        ui.vertical_centered(|ui| {
            let hire = egui::Button::new(
                egui::RichText::new("Hire Me").color(egui::Color32::WHITE),
            )
            .fill(accent)
            .min_size(egui::vec2(140.0, 32.0));
            if ui.add(hire).clicked() {
                self.nav.activate_section(Section::Contact, now);
            }
        });
    }

    /// Render the narrow-viewport top bar with the drawer toggle.
    pub fn draw_topbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui
                .button(egui::RichText::new("\u{2630}").size(18.0))
                .clicked()
            {
                self.nav.toggle_drawer();
            }
            ui.heading("Sakamoro");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(self.nav.current().title());
            });
        });
    }

    /// Slide-over drawer for narrow viewports.
    pub fn draw_drawer(&mut self, ctx: &egui::Context, now: Instant) {
        let screen = ctx.screen_rect();

        // Dimmed backdrop; clicking it closes the drawer.
        egui::Area::new(egui::Id::new("drawer_backdrop"))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let resp = ui.allocate_response(screen.size(), egui::Sense::click());
                ui.painter()
                    .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(120));
                if resp.clicked() {
                    self.nav.close_drawer();
                }
            });

        egui::Area::new(egui::Id::new("drawer"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .inner_margin(egui::Margin::same(12.0))
                    .show(ui, |ui| {
                        ui.set_width(200.0);
                        ui.set_min_height(screen.height());
                        self.draw_menu_entries(ui, now);
                    });
            });
    }

    fn draw_menu_entries(&mut self, ui: &mut egui::Ui, now: Instant) {
        let palette = self.palette();
        let accent = ui::color32(palette.primary());
        let wash = ui::color32a(palette.light_tint());

        for section in Section::ALL {
            let active = self.nav.is_active(section);
            let text = if active {
                egui::RichText::new(section.title()).color(accent).strong()
            } else {
                egui::RichText::new(section.title())
            };
            let mut button = egui::Button::new(text).min_size(egui::vec2(160.0, 30.0));
            if active {
                button = button.fill(wash);
            }
            if ui.add(button).clicked() {
                // the id round-trips from the enum, so this cannot fail
                if let Err(e) = self.nav.activate(section.id(), now) {
                    log::debug!("navigation rejected: {e}");
                }
            }
        }
    }
}
