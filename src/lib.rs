#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod color;
pub mod components;
pub mod error;
pub mod export;
pub mod panels;
pub mod state;
pub mod stroke;
pub mod theme;

pub use app::PaintApp;
pub use canvas::{DrawingSurface, PointerEvent, PointerSample};
pub use color::{ColorKey, Theme};
pub use panels::ToolbarAction;
pub use state::PaintState;
pub use stroke::{Point, Stroke, StrokeBuilder};
pub use theme::ThemeSignal;
