use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

use crate::color::ColorKey;

/// Surface-local position, origin at the drawing surface's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Maps a screen position into the frame of a surface whose top-left is `origin`.
    pub fn from_screen(pos: Pos2, origin: Pos2) -> Self {
        let local = pos - origin;
        Self::new(local.x, local.y)
    }

    /// Inverse of [`Point::from_screen`].
    pub fn to_screen(self, origin: Pos2) -> Pos2 {
        origin + Vec2::new(self.x, self.y)
    }
}

// Immutable once committed to the stroke list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Stroke {
    points: Vec<Point>,
    color_key: ColorKey,
    size: f32,
}

impl Stroke {
    pub fn new(color_key: ColorKey, size: f32, points: Vec<Point>) -> Self {
        Self {
            points,
            color_key,
            size,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color_key(&self) -> ColorKey {
        self.color_key
    }

    pub fn size(&self) -> f32 {
        self.size
    }
}

/// The stroke currently being drawn.
///
/// Color and size are captured when the stroke begins and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeBuilder {
    points: Vec<Point>,
    color_key: ColorKey,
    size: f32,
}

impl StrokeBuilder {
    pub fn new(color_key: ColorKey, size: f32, first: Point) -> Self {
        Self {
            points: vec![first],
            color_key,
            size,
        }
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color_key(&self) -> ColorKey {
        self.color_key
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Snapshot for rendering without ending the stroke.
    pub fn to_stroke(&self) -> Stroke {
        Stroke::new(self.color_key, self.size, self.points.clone())
    }

    pub fn finish(self) -> Stroke {
        Stroke::new(self.color_key, self.size, self.points)
    }
}
