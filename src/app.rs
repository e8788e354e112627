use egui::Vec2;

use crate::canvas::DrawingSurface;
use crate::panels::{self, ToolbarAction};
use crate::state::{self, PaintState};
use crate::theme::{SubscriptionId, ThemeSignal};

/// Top-level app: owns the paint state and wires it into the toolbar and the canvas.
#[derive(Debug, Default)]
pub struct PaintApp {
    state: PaintState,
    surface: DrawingSurface,
    theme_signal: ThemeSignal,
    theme_subscription: Option<SubscriptionId>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let strokes = state::load_strokes(cc.storage);
        let mut app = Self {
            state: PaintState::with_strokes(strokes),
            ..Default::default()
        };

        let ctx = cc.egui_ctx.clone();
        app.theme_subscription = Some(app.theme_signal.subscribe(move |theme| {
            log::info!("Theme changed to {}", theme.name());
            ctx.request_repaint();
        }));
        app.sync_theme(cc.egui_ctx.style().visuals.dark_mode);

        app
    }

    pub fn state(&self) -> &PaintState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PaintState {
        &mut self.state
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut DrawingSurface {
        &mut self.surface
    }

    /// Re-derives the theme from the dark mode marker.
    pub fn sync_theme(&mut self, is_dark: bool) {
        if let Some(theme) = self.theme_signal.observe(is_dark) {
            self.state.set_theme(theme);
        }
    }

    /// Applies one toolbar intent. `viewport` is the window size used for exports.
    pub fn handle_action(&mut self, action: ToolbarAction, viewport: Vec2) {
        match action {
            ToolbarAction::SelectColor(key) => self.state.set_color(key),
            ToolbarAction::SetSize(size) => self.state.set_size(size),
            ToolbarAction::Undo => {
                self.state.undo();
            }
            ToolbarAction::Clear => self.state.clear(),
            ToolbarAction::Export => {
                self.surface
                    .export_vector(self.state.strokes(), self.state.theme(), viewport);
            }
        }
    }

    /// Writes the stroke list if it changed since the last call.
    pub fn persist(&mut self, storage: Option<&mut (dyn eframe::Storage + 'static)>) {
        if !self.state.take_strokes_changed() {
            return;
        }
        let Some(storage) = storage else {
            return;
        };
        if let Err(err) = state::save_strokes(storage, self.state.strokes()) {
            log::error!("Failed to save strokes: {}", err);
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Err(err) = state::save_strokes(storage, self.state.strokes()) {
            log::error!("Failed to save strokes: {}", err);
        }
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.sync_theme(ctx.style().visuals.dark_mode);

        let viewport = ctx.screen_rect().size();
        for action in panels::toolbar_panel(&self.state, ctx) {
            self.handle_action(action, viewport);
        }

        panels::canvas_panel(&mut self.surface, &mut self.state, ctx);

        self.persist(frame.storage_mut());
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Some(id) = self.theme_subscription.take() {
            self.theme_signal.unsubscribe(id);
        }
    }
}
