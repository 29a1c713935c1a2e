use std::fmt;

use eframe::egui::Color32;
use palette::{Darken, Hsl, IntoColor, Srgb, Srgba};

// ---------------------------------------------------------------------------
// Chart colours
// ---------------------------------------------------------------------------

/// An sRGB colour with alpha, independent of the rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartColor(pub Srgba<u8>);

impl ChartColor {
    /// Build from 8-bit channels and a fractional alpha in `0.0..=1.0`.
    pub fn rgba(red: u8, green: u8, blue: u8, alpha: f32) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        ChartColor(Srgba::new(red, green, blue, a))
    }

    pub fn alpha(&self) -> f32 {
        self.0.alpha as f32 / 255.0
    }

    /// Same hue, fully opaque and slightly darker; used for bar outlines.
    pub fn darker(&self, amount: f32) -> Self {
        let rgb: Srgb<f32> = Srgb::new(self.0.red, self.0.green, self.0.blue).into_format();
        let hsl: Hsl = rgb.into_color();
        let darker: Srgb = hsl.darken(amount).into_color();
        let out: Srgb<u8> = darker.into_format();
        ChartColor(Srgba::new(out.red, out.green, out.blue, 255))
    }

    pub fn to_color32(&self) -> Color32 {
        Color32::from_rgba_unmultiplied(self.0.red, self.0.green, self.0.blue, self.0.alpha)
    }
}

/// CSS notation, e.g. `rgba(102, 126, 234, 0.6)`.
impl fmt::Display for ChartColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.0.red,
            self.0.green,
            self.0.blue,
            (self.alpha() * 100.0).round() / 100.0
        )
    }
}

pub const VARIANT_FILL: (u8, u8, u8) = (102, 126, 234);
pub const EXPRESSION_BORDER: (u8, u8, u8) = (118, 75, 162);

/// Bar fill used for every chromosome bucket.
pub fn variant_fill() -> ChartColor {
    let (r, g, b) = VARIANT_FILL;
    ChartColor::rgba(r, g, b, 0.6)
}

pub fn variant_border() -> ChartColor {
    let (r, g, b) = VARIANT_FILL;
    ChartColor::rgba(r, g, b, 1.0)
}

pub fn expression_border() -> ChartColor {
    let (r, g, b) = EXPRESSION_BORDER;
    ChartColor::rgba(r, g, b, 1.0)
}

// ---------------------------------------------------------------------------
// Expression level buckets
// ---------------------------------------------------------------------------

/// Coarse bucket of an expression value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionLevel {
    Low,
    Medium,
    High,
}

impl ExpressionLevel {
    /// `>= 7` high, `>= 5` medium, otherwise low.
    pub fn from_value(value: f64) -> Self {
        if value >= 7.0 {
            ExpressionLevel::High
        } else if value >= 5.0 {
            ExpressionLevel::Medium
        } else {
            ExpressionLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpressionLevel::Low => "low",
            ExpressionLevel::Medium => "medium",
            ExpressionLevel::High => "high",
        }
    }

    /// Semi-transparent bar fill for this bucket.
    pub fn fill(&self) -> ChartColor {
        match self {
            ExpressionLevel::High => ChartColor::rgba(231, 76, 60, 0.6),
            ExpressionLevel::Medium => ChartColor::rgba(243, 156, 18, 0.6),
            ExpressionLevel::Low => ChartColor::rgba(39, 174, 96, 0.6),
        }
    }

    /// Opaque text colour for the value label on item cards.
    pub fn text_color(&self) -> Color32 {
        self.fill().darker(0.1).to_color32()
    }
}

impl fmt::Display for ExpressionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
