use eframe::egui::Color32;
use palette::named;
use palette::Srgb;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Named colour resolution
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
#[error("unknown colour '{0}' (expected a CSS colour name or #rrggbb)")]
pub struct ColorError(pub String);

/// Resolve a CSS colour name (`"darkblue"`) or hex code (`"#00008b"`).
pub fn resolve(name: &str) -> Result<Srgb<u8>, ColorError> {
    let trimmed = name.trim();
    if trimmed.starts_with('#') {
        return trimmed
            .parse::<Srgb<u8>>()
            .map_err(|_| ColorError(name.to_string()));
    }
    named::from_str(&trimmed.to_ascii_lowercase()).ok_or_else(|| ColorError(name.to_string()))
}

pub fn to_color32(c: Srgb<u8>) -> Color32 {
    Color32::from_rgb(c.red, c.green, c.blue)
}

/// `#rrggbb` for SVG attributes.
pub fn to_hex(c: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", c.red, c.green, c.blue)
}

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// One fixed colour per bar series, plus the ink for axis and labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesColors {
    pub bar_a: Srgb<u8>,
    pub bar_b: Srgb<u8>,
    pub ink: Srgb<u8>,
}

impl Default for SeriesColors {
    fn default() -> Self {
        Self {
            bar_a: named::PURPLE,
            bar_b: named::DARKBLUE,
            ink: named::BLACK,
        }
    }
}

impl SeriesColors {
    pub fn from_names(bar_a: &str, bar_b: &str) -> Result<Self, ColorError> {
        Ok(Self {
            bar_a: resolve(bar_a)?,
            bar_b: resolve(bar_b)?,
            ..Self::default()
        })
    }
}
