use chrono::{DateTime, Utc};
use egui::{Painter, Pos2, Rect, Sense, Shape, Ui, Vec2};

use crate::color::{self, Theme};
use crate::export::{self, SvgExport};
use crate::state::PaintState;
use crate::stroke::{Point, Stroke, StrokeBuilder};

/// A primary pointer event, in the order the host delivered it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed(Pos2),
    Moved(Pos2),
    Released(Pos2),
    /// The pointer left the window.
    Gone,
}

/// One frame's worth of input from the single logical pointer.
///
/// egui folds the first touch contact into the pointer, so touch input arrives here
/// the same way mouse input does.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerSample {
    /// Every press, move and release since the previous frame, oldest first.
    pub events: Vec<PointerEvent>,
    /// Whether the primary button is held at the end of the frame.
    pub down: bool,
}

impl PointerSample {
    pub fn from_input(input: &egui::InputState) -> Self {
        // All sub-frame moves are kept so slow frames don't turn curves into chords.
        let events = input
            .events
            .iter()
            .filter_map(|event| match event {
                egui::Event::PointerMoved(pos) => Some(PointerEvent::Moved(*pos)),
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    ..
                } => Some(if *pressed {
                    PointerEvent::Pressed(*pos)
                } else {
                    PointerEvent::Released(*pos)
                }),
                egui::Event::PointerGone => Some(PointerEvent::Gone),
                _ => None,
            })
            .collect();

        Self {
            events,
            down: input.pointer.primary_down(),
        }
    }
}

/// The drawing area: captures pointer input, holds the in-progress stroke and paints
/// every stroke.
#[derive(Debug, Default)]
pub struct DrawingSurface {
    // Where the surface was last laid out. `None` until the first render.
    rect: Option<Rect>,
    current: Option<StrokeBuilder>,
}

impl DrawingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// Records the on-screen area for this frame. Coordinates are mapped against it.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = Some(rect);
    }

    pub fn is_drawing(&self) -> bool {
        self.current.is_some()
    }

    pub fn in_progress(&self) -> Option<&StrokeBuilder> {
        self.current.as_ref()
    }

    /// Maps a screen position into surface-local coordinates.
    pub fn to_local(&self, screen_pos: Option<Pos2>) -> Option<Point> {
        let rect = self.rect?;
        screen_pos.map(|pos| Point::from_screen(pos, rect.min))
    }

    fn contains(&self, screen_pos: Pos2) -> bool {
        self.rect.is_some_and(|rect| rect.contains(screen_pos))
    }

    /// Starts a stroke with the pen currently selected in `state`.
    pub fn begin(&mut self, point: Point, state: &PaintState) {
        self.current = Some(StrokeBuilder::new(state.color_key(), state.size(), point));
    }

    pub fn extend(&mut self, point: Point) {
        if let Some(stroke) = &mut self.current {
            stroke.add_point(point);
        }
    }

    /// Hands the in-progress stroke to `state`, if there is one.
    pub fn commit(&mut self, state: &mut PaintState) {
        if let Some(stroke) = self.current.take() {
            log::debug!("Committing stroke with {} points", stroke.points().len());
            state.add_stroke(stroke.finish());
        }
    }

    /// Press inside starts a stroke, movement inside extends it, release or leaving
    /// the surface commits it. Events are applied one by one in delivery order.
    pub fn handle_pointer(&mut self, sample: &PointerSample, state: &mut PaintState) {
        for event in &sample.events {
            match *event {
                PointerEvent::Pressed(pos) => {
                    if self.contains(pos) {
                        if let Some(point) = self.to_local(Some(pos)) {
                            self.begin(point, state);
                        }
                    }
                }
                PointerEvent::Moved(pos) if self.is_drawing() => {
                    if self.contains(pos) {
                        if let Some(point) = self.to_local(Some(pos)) {
                            self.extend(point);
                        }
                    } else {
                        self.commit(state);
                    }
                }
                PointerEvent::Moved(_) => {}
                PointerEvent::Released(_) | PointerEvent::Gone => self.commit(state),
            }
        }

        // A release the window never saw still ends the stroke.
        if self.is_drawing() && !sample.down {
            self.commit(state);
        }
    }

    /// Committed strokes followed by the in-progress one.
    fn all_strokes<'a>(&'a self, strokes: &'a [Stroke]) -> impl Iterator<Item = Stroke> + 'a {
        strokes
            .iter()
            .cloned()
            .chain(self.current.as_ref().map(StrokeBuilder::to_stroke))
    }

    /// One open polyline per stroke, colored for `theme`, offset by `origin`.
    pub fn shapes(&self, strokes: &[Stroke], theme: Theme, origin: Pos2) -> Vec<Shape> {
        let mut shapes = Vec::new();
        for stroke in self.all_strokes(strokes) {
            let color = color::color32(theme, stroke.color_key());
            let points: Vec<Pos2> = stroke.points().iter().map(|p| p.to_screen(origin)).collect();
            let radius = stroke.size() / 2.0;

            // egui lines have butt ends and sharp joins, a disc on every vertex rounds both
            shapes.extend(points.iter().map(|p| Shape::circle_filled(*p, radius, color)));
            if points.len() > 1 {
                shapes.push(Shape::line(points, egui::Stroke::new(stroke.size(), color)));
            }
        }
        shapes
    }

    pub fn render(&self, painter: &Painter, strokes: &[Stroke], theme: Theme) {
        let Some(rect) = self.rect else {
            return;
        };
        painter.extend(self.shapes(strokes, theme, rect.min));
    }

    /// Lays out the surface over the remaining space, handles pointer input and paints.
    pub fn ui(&mut self, ui: &mut Ui, state: &mut PaintState) {
        // Sense::drag keeps the gesture on the canvas instead of scrolling the page.
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
        self.set_rect(response.rect);

        let sample = ui.input(PointerSample::from_input);
        self.handle_pointer(&sample, state);

        if self.is_drawing() {
            ui.ctx().request_repaint();
        }
        response.on_hover_cursor(egui::CursorIcon::Crosshair);

        self.render(&painter, state.strokes(), state.theme());
    }

    /// Builds the export document, or `None` if the surface has never been laid out.
    pub fn build_export(
        &self,
        strokes: &[Stroke],
        theme: Theme,
        viewport: Vec2,
        now: DateTime<Utc>,
    ) -> Option<SvgExport> {
        self.rect?;
        let all: Vec<Stroke> = self.all_strokes(strokes).collect();
        Some(SvgExport {
            file_name: export::export_file_name(theme, now),
            contents: export::svg_document(&all, theme, export::canvas_size(viewport)),
        })
    }

    /// Saves the drawing as an SVG file. Does nothing before the first render.
    pub fn export_vector(&self, strokes: &[Stroke], theme: Theme, viewport: Vec2) {
        let Some(export) = self.build_export(strokes, theme, viewport, Utc::now()) else {
            log::debug!("Export skipped, surface not rendered yet");
            return;
        };
        if let Err(err) = export::save_svg(&export) {
            log::error!("Failed to export drawing: {}", err);
        }
    }
}
