//! Style switcher for `PortfolioApp`: palette swatches, the custom hex
//! field, a live gradient preview, and the dark-mode toggle. All
//! changes persist immediately through the preference store.

use eframe::egui;

use folio::prefs;
use folio::theme::{self, NamedPalette, ThemePreference};

use crate::ui;
use super::PortfolioApp;

impl PortfolioApp {
    /// Gear button plus, while open, the switcher panel. Scrolling the
    /// page closes the panel (see `draw_content`).
    pub fn draw_switcher(&mut self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("switcher_toggle"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 72.0))
            .show(ctx, |ui| {
                if ui
                    .button(egui::RichText::new("\u{2699}").size(18.0))
                    .clicked()
                {
                    self.switcher_open = !self.switcher_open;
                }
            });

        if !self.switcher_open {
            return;
        }

        egui::Area::new(egui::Id::new("switcher_panel"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 112.0))
            .show(ctx, |ui| {
                egui::Frame::window(ui.style())
                    .inner_margin(egui::Margin::same(14.0))
                    .show(ui, |ui| {
                        ui.set_width(220.0);
                        ui.label(egui::RichText::new("Theme Colors").strong());
                        ui.add_space(8.0);

                        let mut picked: Option<ThemePreference> = None;
                        ui.horizontal_wrapped(|ui| {
                            for palette in NamedPalette::ALL {
                                let selected =
                                    self.theme == ThemePreference::Named(palette);
                                let fill = ui::color32(palette.base());
                                let button = egui::Button::new("  ")
                                    .fill(fill)
                                    .min_size(egui::vec2(28.0, 28.0))
                                    .stroke(if selected {
                                        egui::Stroke::new(2.0, ui.visuals().strong_text_color())
                                    } else {
                                        egui::Stroke::NONE
                                    });
                                if ui.add(button).on_hover_text(palette.name()).clicked() {
                                    picked = Some(ThemePreference::Named(palette));
                                }
                            }
                        });
                        if let Some(theme) = picked {
                            self.set_theme(theme);
                        }

                        ui.add_space(10.0);
                        ui.label("Custom color");
                        let response = ui.add(
                            egui::TextEdit::singleline(&mut self.color_input)
                                .hint_text("#2196f3")
                                .font(egui::TextStyle::Monospace),
                        );
                        if response.lost_focus()
                            && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        {
                            self.commit_custom_color();
                        }

                        // Preview swatch: the derived gradient.
                        ui.add_space(8.0);
                        let (rect, _) = ui.allocate_exact_size(
                            egui::vec2(ui.available_width(), 24.0),
                            egui::Sense::hover(),
                        );
                        let (from, to) = self.palette().gradient();
                        ui::gradient_rect(ui.painter(), rect, from, to);

                        ui.add_space(10.0);
                        ui.separator();
                        ui.add_space(6.0);

                        let dark_label = if self.dark_mode {
                            "\u{2600} Light mode"
                        } else {
                            "\u{263E} Dark mode"
                        };
                        if ui.button(dark_label).clicked() {
                            self.toggle_dark_mode(ctx);
                        }
                    });
            });
    }

    /// Apply the hex field. Invalid input is rejected and the current
    /// theme stays untouched.
    pub fn commit_custom_color(&mut self) {
        match theme::parse_hex(&self.color_input) {
            Ok(rgb) => self.set_theme(ThemePreference::Custom(rgb)),
            Err(e) => log::debug!("rejected color input: {e}"),
        }
    }

    /// Switch the accent theme and persist it.
    pub fn set_theme(&mut self, theme: ThemePreference) {
        self.theme = theme;
        self.color_input = theme.base().to_hex();
        self.prefs.set_theme(theme);
        prefs::save(&self.prefs);
    }

    /// Flip dark/light, restyle, persist.
    pub fn toggle_dark_mode(&mut self, ctx: &egui::Context) {
        self.dark_mode = !self.dark_mode;
        self.apply_visuals(ctx);
        self.prefs.set_dark_mode(self.dark_mode);
        prefs::save(&self.prefs);
    }

    pub fn apply_visuals(&self, ctx: &egui::Context) {
        ctx.set_visuals(if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
    }
}
