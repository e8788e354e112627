use std::ops::RangeInclusive;

use eframe::egui;

/// Sizes the slider can produce.
pub const PEN_SIZE_RANGE: RangeInclusive<f32> = 1.0..=20.0;

/// Rounds a slider value to a whole size inside [`PEN_SIZE_RANGE`].
pub fn restrict_size(size: f32) -> f32 {
    size.round()
        .clamp(*PEN_SIZE_RANGE.start(), *PEN_SIZE_RANGE.end())
}

/// Diameter of the preview dot, never smaller than 2 px so it stays visible.
pub fn preview_diameter(size: f32) -> f32 {
    size.max(2.0)
}

/// Pen width control: slider, preview dot and numeric readout.
pub struct PenSizeSlider {
    size: f32,
}

impl PenSizeSlider {
    pub fn new(size: f32) -> Self {
        Self { size }
    }

    /// Returns the newly chosen size when the user moved the slider.
    pub fn show(self, ui: &mut egui::Ui) -> Option<f32> {
        let mut value = self.size;
        let mut chosen = None;

        ui.label("Pen Size");
        let response = ui.add(
            egui::Slider::new(&mut value, PEN_SIZE_RANGE)
                .step_by(1.0)
                .show_value(false),
        );
        if response.changed() {
            chosen = Some(restrict_size(value));
        }

        let diameter = preview_diameter(chosen.unwrap_or(self.size));
        let (rect, _) = ui.allocate_exact_size(egui::vec2(diameter, diameter), egui::Sense::hover());
        let dot_color = if ui.visuals().dark_mode {
            egui::Color32::from_rgb(229, 231, 235)
        } else {
            egui::Color32::from_rgb(31, 41, 55)
        };
        ui.painter()
            .circle_filled(rect.center(), diameter / 2.0, dot_color);

        ui.monospace(format!("{}", chosen.unwrap_or(self.size)));

        chosen
    }
}
