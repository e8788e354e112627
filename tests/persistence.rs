use std::collections::HashMap;

use egui::Vec2;
use sketchpad::state::{self, STROKES_KEY};
use sketchpad::{ColorKey, PaintApp, Point, Stroke, ToolbarAction};

const VIEWPORT: Vec2 = Vec2::new(1024.0, 768.0);

#[derive(Default)]
struct MemoryStorage {
    values: HashMap<String, String>,
}

impl eframe::Storage for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.values.insert(key.to_owned(), value);
    }

    fn flush(&mut self) {}
}

fn create_test_strokes() -> Vec<Stroke> {
    vec![
        Stroke::new(
            ColorKey::Ink,
            3.0,
            vec![Point::new(10.0, 10.0), Point::new(20.0, 10.0), Point::new(20.0, 20.0)],
        ),
        Stroke::new(ColorKey::Green, 12.5, vec![Point::new(0.25, 99.75)]),
    ]
}

#[test]
fn test_round_trip_preserves_order_and_fields() {
    let strokes = create_test_strokes();
    let mut storage = MemoryStorage::default();

    state::save_strokes(&mut storage, &strokes).unwrap();
    let json = storage.values.get(STROKES_KEY).unwrap();

    assert_eq!(state::parse_strokes(json).unwrap(), strokes);
    assert_eq!(state::load_strokes(Some(&storage)), strokes);
}

#[test]
fn test_malformed_value_loads_empty() {
    let mut storage = MemoryStorage::default();
    storage
        .values
        .insert(STROKES_KEY.to_owned(), "[{\"points\":[{\"x\":1".to_owned());

    assert!(state::load_strokes(Some(&storage)).is_empty());
}

#[test]
fn test_every_change_is_written() {
    let mut app = PaintApp::default();
    let mut storage = MemoryStorage::default();

    for stroke in create_test_strokes() {
        app.state_mut().add_stroke(stroke);
    }
    app.persist(Some(&mut storage));
    assert_eq!(state::load_strokes(Some(&storage)), create_test_strokes());

    app.handle_action(ToolbarAction::Undo, VIEWPORT);
    app.persist(Some(&mut storage));
    assert_eq!(state::load_strokes(Some(&storage)).len(), 1);

    app.handle_action(ToolbarAction::Clear, VIEWPORT);
    app.persist(Some(&mut storage));
    assert_eq!(storage.values.get(STROKES_KEY).map(String::as_str), Some("[]"));
}

#[test]
fn test_pen_changes_are_not_written() {
    let mut app = PaintApp::default();
    let mut storage = MemoryStorage::default();

    app.handle_action(ToolbarAction::SelectColor(ColorKey::Blue), VIEWPORT);
    app.handle_action(ToolbarAction::SetSize(8.0), VIEWPORT);
    app.persist(Some(&mut storage));

    assert!(storage.values.is_empty());
}
