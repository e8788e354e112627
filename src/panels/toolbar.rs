use crate::color::ColorKey;
use crate::components::{BubbleButton, ButtonVariant, ColorSwatch, PenSizeSlider};
use crate::export::TOOLBAR_HEIGHT;
use crate::state::PaintState;

/// User intent raised by the toolbar. The toolbar itself keeps no drawing state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolbarAction {
    SelectColor(ColorKey),
    SetSize(f32),
    Undo,
    Clear,
    Export,
}

pub fn toolbar_panel(state: &PaintState, ctx: &egui::Context) -> Vec<ToolbarAction> {
    let mut actions = Vec::new();

    egui::TopBottomPanel::top("toolbar")
        .exact_height(TOOLBAR_HEIGHT)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label("Colors:");
                for key in ColorKey::ALL {
                    let swatch = ColorSwatch::new(key, state.theme(), state.color_key() == key);
                    if swatch.show(ui).clicked() {
                        log::info!("Color selected from UI: {}", key.name());
                        actions.push(ToolbarAction::SelectColor(key));
                    }
                }

                ui.separator();

                if let Some(size) = PenSizeSlider::new(state.size()).show(ui) {
                    actions.push(ToolbarAction::SetSize(size));
                }

                ui.separator();

                let undo = BubbleButton::new("Undo", ButtonVariant::Secondary).enabled(state.can_undo());
                if undo.show(ui).clicked() {
                    actions.push(ToolbarAction::Undo);
                }
                if BubbleButton::new("Clear", ButtonVariant::Danger).show(ui).clicked() {
                    actions.push(ToolbarAction::Clear);
                }
                if BubbleButton::new("Export SVG", ButtonVariant::Secondary).show(ui).clicked() {
                    actions.push(ToolbarAction::Export);
                }

                egui::widgets::global_theme_preference_switch(ui);
            });
        });

    actions
}
