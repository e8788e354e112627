pub mod bubble_button;
pub mod color_swatch;
pub mod pen_size_slider;

pub use bubble_button::{BubbleButton, ButtonVariant};
pub use color_swatch::ColorSwatch;
pub use pen_size_slider::{PEN_SIZE_RANGE, PenSizeSlider};
