use egui::Color32;
use serde::{Deserialize, Serialize};

/// Light or dark display mode. Decides which value a [`ColorKey`] resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Symbolic stroke color, independent of the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorKey {
    #[default]
    Ink,
    Red,
    Blue,
    Green,
}

impl ColorKey {
    /// Palette order as shown in the toolbar.
    pub const ALL: [ColorKey; 4] = [Self::Ink, Self::Red, Self::Blue, Self::Green];

    pub fn name(self) -> &'static str {
        match self {
            Self::Ink => "Ink",
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Green => "Green",
        }
    }

    /// Reverse lookup of a hex value within one theme's column.
    pub fn from_hex(theme: Theme, hex: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|key| swatch(theme, *key).hex.eq_ignore_ascii_case(hex))
    }
}

struct Swatch {
    hex: &'static str,
    color: Color32,
}

const fn sw(hex: &'static str, r: u8, g: u8, b: u8) -> Swatch {
    Swatch {
        hex,
        color: Color32::from_rgb(r, g, b),
    }
}

// Indexed by ColorKey declaration order.
const LIGHT: [Swatch; 4] = [
    sw("#000000", 0x00, 0x00, 0x00),
    sw("#dc2626", 0xdc, 0x26, 0x26),
    sw("#2563eb", 0x25, 0x63, 0xeb),
    sw("#16a34a", 0x16, 0xa3, 0x4a),
];

const DARK: [Swatch; 4] = [
    sw("#ffffff", 0xff, 0xff, 0xff),
    sw("#fca5a5", 0xfc, 0xa5, 0xa5),
    sw("#93c5fd", 0x93, 0xc5, 0xfd),
    sw("#86efac", 0x86, 0xef, 0xac),
];

const LIGHT_BACKGROUND: Swatch = sw("#f3f4f6", 0xf3, 0xf4, 0xf6);
const DARK_BACKGROUND: Swatch = sw("#1f2937", 0x1f, 0x29, 0x37);

fn swatch(theme: Theme, key: ColorKey) -> &'static Swatch {
    let column = match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
    };
    &column[key as usize]
}

fn background_swatch(theme: Theme) -> &'static Swatch {
    match theme {
        Theme::Light => &LIGHT_BACKGROUND,
        Theme::Dark => &DARK_BACKGROUND,
    }
}

/// Hex value of `key` under `theme`, e.g. `#dc2626`.
pub fn hex(theme: Theme, key: ColorKey) -> &'static str {
    swatch(theme, key).hex
}

pub fn color32(theme: Theme, key: ColorKey) -> Color32 {
    swatch(theme, key).color
}

/// Canvas background, shared by the on-screen surface and exported documents.
pub fn background_hex(theme: Theme) -> &'static str {
    background_swatch(theme).hex
}

pub fn background_color32(theme: Theme) -> Color32 {
    background_swatch(theme).color
}
