use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use egui::Vec2;

use crate::color::{self, Theme};
use crate::error::ExportResult;
use crate::stroke::Stroke;

/// Height of the toolbar band above the canvas, excluded from exported documents.
pub const TOOLBAR_HEIGHT: f32 = 80.0;

pub const SVG_MIME: &str = "image/svg+xml";

/// A rendered drawing ready to be handed to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgExport {
    pub file_name: String,
    pub contents: String,
}

/// Canvas area of a viewport: full width, height minus the toolbar band.
pub fn canvas_size(viewport: Vec2) -> Vec2 {
    Vec2::new(viewport.x, (viewport.y - TOOLBAR_HEIGHT).max(0.0))
}

/// `paint-artwork-<theme>-<UTC time to the second, ':' replaced by '-'>.svg`
pub fn export_file_name(theme: Theme, now: DateTime<Utc>) -> String {
    format!(
        "paint-artwork-{}-{}.svg",
        theme.name(),
        now.format("%Y-%m-%dT%H-%M-%S")
    )
}

/// Writes one `<polyline>` element in the same style as the on-screen rendering.
pub fn polyline(out: &mut String, stroke: &Stroke, theme: Theme) {
    // A lone point is doubled so the round cap still renders a dot.
    let vertices = match stroke.points() {
        [single] => vec![*single, *single],
        many => many.to_vec(),
    };
    let points = vertices
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");

    // Writing into a String cannot fail.
    let _ = write!(
        out,
        r#"<polyline points="{}" stroke="{}" stroke-width="{}" fill="none" stroke-linecap="round" stroke-linejoin="round"/>"#,
        points,
        color::hex(theme, stroke.color_key()),
        stroke.size(),
    );
}

/// Builds a standalone SVG document of `size` with a themed background behind `strokes`.
pub fn svg_document<'a>(
    strokes: impl IntoIterator<Item = &'a Stroke>,
    theme: Theme,
    size: Vec2,
) -> String {
    let (width, height) = (size.x, size.y);
    let mut out = String::new();

    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}">"#
    );
    let _ = write!(
        out,
        r#"<rect x="0" y="0" width="{width}" height="{height}" fill="{}"/>"#,
        color::background_hex(theme)
    );
    for stroke in strokes {
        polyline(&mut out, stroke, theme);
    }
    out.push_str("</svg>");
    out
}

/// Hands the document to the browser as a file download.
#[cfg(target_arch = "wasm32")]
pub fn save_svg(export: &SvgExport) -> ExportResult<()> {
    use crate::error::ExportError;
    use wasm_bindgen::{JsCast as _, JsValue};

    let browser = |err: JsValue| ExportError::Browser(format!("{err:?}"));
    let missing = |what: &str| ExportError::Browser(format!("missing {what}"));

    let window = web_sys::window().ok_or_else(|| missing("window"))?;
    let document = window.document().ok_or_else(|| missing("document"))?;
    let body = document.body().ok_or_else(|| missing("document body"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&export.contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&format!("{SVG_MIME};charset=utf-8"));
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(browser)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(browser)?;

    let anchor = document
        .create_element("a")
        .map_err(browser)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| missing("anchor element"))?;
    anchor.set_href(&url);
    anchor.set_download(&export.file_name);

    body.append_child(&anchor).map_err(browser)?;
    anchor.click();
    body.remove_child(&anchor).map_err(browser)?;
    web_sys::Url::revoke_object_url(&url).map_err(browser)?;

    log::info!("Downloaded {}", export.file_name);
    Ok(())
}

/// Writes the document next to the running binary's working directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_svg(export: &SvgExport) -> ExportResult<()> {
    std::fs::write(&export.file_name, &export.contents)?;
    log::info!("Wrote {}", export.file_name);
    Ok(())
}
