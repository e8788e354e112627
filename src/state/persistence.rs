use crate::error::{PersistenceError, PersistenceResult};
use crate::stroke::Stroke;

/// Storage key holding the JSON stroke list.
pub const STROKES_KEY: &str = "paint-strokes";

/// Parses a stored stroke list.
///
/// The payload must match the stroke shape exactly, and every stroke needs at least
/// one point. Any violation rejects the whole payload.
pub fn parse_strokes(json: &str) -> PersistenceResult<Vec<Stroke>> {
    let strokes: Vec<Stroke> = serde_json::from_str(json)?;

    if let Some(index) = strokes.iter().position(|stroke| stroke.points().is_empty()) {
        return Err(PersistenceError::EmptyStroke { index });
    }

    Ok(strokes)
}

/// Reads the stroke list saved by a previous session.
///
/// Missing storage or a missing key yields an empty list. A malformed value is logged
/// and discarded.
pub fn load_strokes(storage: Option<&dyn eframe::Storage>) -> Vec<Stroke> {
    let Some(json) = storage.and_then(|storage| storage.get_string(STROKES_KEY)) else {
        return Vec::new();
    };

    match parse_strokes(&json) {
        Ok(strokes) => {
            log::info!("Restored {} strokes", strokes.len());
            strokes
        }
        Err(err) => {
            log::error!("Failed to load saved strokes: {}", err);
            Vec::new()
        }
    }
}

/// Overwrites the stored stroke list with `strokes`.
pub fn save_strokes(storage: &mut dyn eframe::Storage, strokes: &[Stroke]) -> PersistenceResult<()> {
    let json = serde_json::to_string(strokes)?;
    storage.set_string(STROKES_KEY, json);
    storage.flush();
    log::debug!("Saved {} strokes", strokes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorKey;
    use crate::stroke::Point;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        values: HashMap<String, String>,
        flushes: usize,
    }

    impl eframe::Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.values.insert(key.to_owned(), value);
        }

        fn flush(&mut self) {
            self.flushes += 1;
        }
    }

    #[test]
    fn test_save_then_load() {
        let strokes = vec![
            Stroke::new(ColorKey::Red, 4.0, vec![Point::new(1.0, 2.0), Point::new(3.5, 4.25)]),
            Stroke::new(ColorKey::Blue, 25.0, vec![Point::new(0.0, 0.0)]),
        ];
        let mut storage = MemoryStorage::default();

        save_strokes(&mut storage, &strokes).unwrap();
        assert_eq!(storage.flushes, 1);
        assert_eq!(load_strokes(Some(&storage)), strokes);
    }

    #[test]
    fn test_save_overwrites() {
        let mut storage = MemoryStorage::default();
        let stroke = Stroke::new(ColorKey::Ink, 3.0, vec![Point::new(1.0, 1.0)]);

        save_strokes(&mut storage, &[stroke]).unwrap();
        save_strokes(&mut storage, &[]).unwrap();
        assert_eq!(storage.values.get(STROKES_KEY).map(String::as_str), Some("[]"));
    }

    #[test]
    fn test_missing_value_is_empty() {
        assert!(load_strokes(None).is_empty());
        assert!(load_strokes(Some(&MemoryStorage::default())).is_empty());
    }

    #[test]
    fn test_truncated_value_is_discarded() {
        let mut storage = MemoryStorage::default();
        storage.values.insert(
            STROKES_KEY.to_owned(),
            r#"[{"points":[{"x":1,"y":2}],"colorKey":"ink","si"#.to_owned(),
        );
        assert!(load_strokes(Some(&storage)).is_empty());
    }

    #[test]
    fn test_shape_mismatch_is_rejected() {
        // Unknown color key.
        assert!(parse_strokes(r#"[{"points":[{"x":1,"y":2}],"colorKey":"pink","size":3}]"#).is_err());
        // Extra field.
        assert!(parse_strokes(r#"[{"points":[{"x":1,"y":2}],"colorKey":"ink","size":3,"id":1}]"#).is_err());
        // Not a list.
        assert!(parse_strokes(r#"{"strokes":[]}"#).is_err());
    }

    #[test]
    fn test_empty_stroke_rejects_payload() {
        let json = r#"[{"points":[{"x":1,"y":2}],"colorKey":"ink","size":3},{"points":[],"colorKey":"red","size":3}]"#;
        assert!(matches!(
            parse_strokes(json),
            Err(PersistenceError::EmptyStroke { index: 1 })
        ));
    }

    #[test]
    fn test_integer_coordinates_parse() {
        let strokes = parse_strokes(r#"[{"points":[{"x":10,"y":10}],"colorKey":"green","size":3}]"#).unwrap();
        assert_eq!(strokes[0].points(), &[Point::new(10.0, 10.0)]);
        assert_eq!(strokes[0].color_key(), ColorKey::Green);
    }
}
