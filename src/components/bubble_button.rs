use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    fn fill(self, dark_mode: bool, hovered: bool) -> egui::Color32 {
        match (self, dark_mode, hovered) {
            (Self::Primary, _, false) => egui::Color32::from_rgb(59, 130, 246),
            (Self::Primary, _, true) => egui::Color32::from_rgb(37, 99, 235),
            (Self::Secondary, false, false) => egui::Color32::from_rgb(229, 231, 235),
            (Self::Secondary, false, true) => egui::Color32::from_rgb(209, 213, 219),
            (Self::Secondary, true, false) => egui::Color32::from_rgb(55, 65, 81),
            (Self::Secondary, true, true) => egui::Color32::from_rgb(75, 85, 99),
            (Self::Danger, _, false) => egui::Color32::from_rgb(239, 68, 68),
            (Self::Danger, _, true) => egui::Color32::from_rgb(220, 38, 38),
        }
    }

    fn text(self, dark_mode: bool) -> egui::Color32 {
        match (self, dark_mode) {
            (Self::Secondary, false) => egui::Color32::from_rgb(31, 41, 55),
            (Self::Secondary, true) => egui::Color32::from_rgb(229, 231, 235),
            _ => egui::Color32::WHITE,
        }
    }
}

/// Rounded toolbar button. A disabled button is drawn faded and never reports clicks.
pub struct BubbleButton {
    pub label: &'static str,
    pub variant: ButtonVariant,
    pub enabled: bool,
}

impl BubbleButton {
    pub fn new(label: &'static str, variant: ButtonVariant) -> Self {
        Self {
            label,
            variant,
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let font_id = egui::FontId::proportional(14.0);
        let galley = ui
            .painter()
            .layout_no_wrap(self.label.to_owned(), font_id.clone(), egui::Color32::PLACEHOLDER);
        let button_size = galley.size() + egui::vec2(24.0, 16.0);

        let sense = if self.enabled {
            egui::Sense::click()
        } else {
            egui::Sense::hover()
        };
        let (rect, response) = ui.allocate_exact_size(button_size, sense);

        if ui.is_rect_visible(rect) {
            let dark_mode = ui.visuals().dark_mode;
            let hovered = self.enabled && response.hovered();
            let opacity = if self.enabled { 1.0 } else { 0.5 };

            let bg_color = self.variant.fill(dark_mode, hovered).gamma_multiply(opacity);
            let text_color = self.variant.text(dark_mode).gamma_multiply(opacity);

            ui.painter().rect_filled(rect, 16.0, bg_color);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                font_id,
                text_color,
            );
        }

        response
    }
}
