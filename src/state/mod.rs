mod persistence;

pub use persistence::{STROKES_KEY, load_strokes, parse_strokes, save_strokes};

use crate::color::{ColorKey, Theme};
use crate::stroke::Stroke;

/// Pen width selected when the app starts.
pub const DEFAULT_PEN_SIZE: f32 = 3.0;

/// Canonical application state: the committed strokes plus the current pen and theme.
///
/// The stroke list is append-only except for [`PaintState::undo`] and
/// [`PaintState::clear`]. Every stroke-list operation raises a change mark that the
/// app drains with [`PaintState::take_strokes_changed`] to re-serialize the list.
#[derive(Debug, Clone)]
pub struct PaintState {
    strokes: Vec<Stroke>,
    color_key: ColorKey,
    size: f32,
    theme: Theme,
    strokes_changed: bool,
}

impl Default for PaintState {
    fn default() -> Self {
        Self::with_strokes(Vec::new())
    }
}

impl PaintState {
    /// State restored from storage. Loading does not count as a change.
    pub fn with_strokes(strokes: Vec<Stroke>) -> Self {
        Self {
            strokes,
            color_key: ColorKey::default(),
            size: DEFAULT_PEN_SIZE,
            theme: Theme::default(),
            strokes_changed: false,
        }
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn add_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
        self.strokes_changed = true;
    }

    /// Removes the most recent stroke, if any.
    pub fn undo(&mut self) -> Option<Stroke> {
        let removed = self.strokes.pop();
        self.strokes_changed = true;
        removed
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.strokes_changed = true;
    }

    pub fn can_undo(&self) -> bool {
        !self.strokes.is_empty()
    }

    pub fn color_key(&self) -> ColorKey {
        self.color_key
    }

    pub fn set_color(&mut self, color_key: ColorKey) {
        self.color_key = color_key;
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Stored as given. Range limits belong to the size control, not the state.
    pub fn set_size(&mut self, size: f32) {
        self.size = size;
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Returns whether the stroke list changed since the last call, and resets the mark.
    pub fn take_strokes_changed(&mut self) -> bool {
        std::mem::take(&mut self.strokes_changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::Point;

    fn stroke_at(x: f32) -> Stroke {
        Stroke::new(ColorKey::Ink, DEFAULT_PEN_SIZE, vec![Point::new(x, x)])
    }

    #[test]
    fn test_defaults() {
        let state = PaintState::default();
        assert!(state.strokes().is_empty());
        assert_eq!(state.color_key(), ColorKey::Ink);
        assert_eq!(state.size(), 3.0);
        assert_eq!(state.theme(), Theme::Light);
        assert!(!state.can_undo());
    }

    #[test]
    fn test_undo_removes_last() {
        let mut state = PaintState::default();
        state.add_stroke(stroke_at(1.0));
        state.add_stroke(stroke_at(2.0));

        assert_eq!(state.undo(), Some(stroke_at(2.0)));
        assert_eq!(state.strokes(), &[stroke_at(1.0)]);
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut state = PaintState::default();
        assert_eq!(state.undo(), None);
        assert!(state.strokes().is_empty());
    }

    #[test]
    fn test_clear() {
        let mut state = PaintState::with_strokes(vec![stroke_at(1.0), stroke_at(2.0)]);
        state.clear();
        assert!(state.strokes().is_empty());

        state.clear();
        assert!(state.strokes().is_empty());
    }

    #[test]
    fn test_change_mark() {
        let mut state = PaintState::with_strokes(vec![stroke_at(1.0)]);
        assert!(!state.take_strokes_changed());

        state.add_stroke(stroke_at(2.0));
        assert!(state.take_strokes_changed());
        assert!(!state.take_strokes_changed());

        state.set_color(ColorKey::Red);
        state.set_size(9.0);
        assert!(!state.take_strokes_changed());

        state.clear();
        assert!(state.take_strokes_changed());
    }

    #[test]
    fn test_size_is_not_clamped() {
        let mut state = PaintState::default();
        state.set_size(25.0);
        assert_eq!(state.size(), 25.0);
    }
}
