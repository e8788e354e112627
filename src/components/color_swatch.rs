use eframe::egui;

use crate::color::{self, ColorKey, Theme};

/// Square palette entry filled with the key's color for the active theme.
pub struct ColorSwatch {
    pub key: ColorKey,
    pub theme: Theme,
    pub selected: bool,
}

impl ColorSwatch {
    pub fn new(key: ColorKey, theme: Theme, selected: bool) -> Self {
        Self {
            key,
            theme,
            selected,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(40.0, 40.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let rect = if response.hovered() { rect } else { rect.shrink(1.0) };
            ui.painter()
                .rect_filled(rect, 12.0, color::color32(self.theme, self.key));

            if self.selected {
                ui.painter().rect_stroke(
                    rect.expand(2.0),
                    14.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(59, 130, 246)),
                );
            }
        }

        response.on_hover_text(self.key.name())
    }
}
