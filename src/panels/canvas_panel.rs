use crate::canvas::DrawingSurface;
use crate::color;
use crate::state::PaintState;

pub fn canvas_panel(surface: &mut DrawingSurface, state: &mut PaintState, ctx: &egui::Context) {
    let frame = egui::Frame::central_panel(&ctx.style())
        .fill(color::background_color32(state.theme()))
        .inner_margin(0.0);

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| surface.ui(ui, state));
}
