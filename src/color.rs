use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            to_color32(rgb)
        })
        .collect()
}

fn to_color32(rgb: Srgb) -> Color32 {
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

// ---------------------------------------------------------------------------
// Genre colours: genre → Color32
// ---------------------------------------------------------------------------

/// Maps the genres of a dataset to distinct colours, so a genre keeps its
/// colour while the selections change.
#[derive(Debug, Clone, Default)]
pub struct GenreColors {
    mapping: BTreeMap<String, Color32>,
}

impl GenreColors {
    pub fn new(genres: &[String]) -> Self {
        let palette = generate_palette(genres.len());
        let mapping = genres.iter().cloned().zip(palette).collect();
        GenreColors { mapping }
    }

    pub fn color_for(&self, genre: &str) -> Color32 {
        self.mapping.get(genre).copied().unwrap_or(Color32::GRAY)
    }
}

// ---------------------------------------------------------------------------
// Continuous scales for value-coloured bars
// ---------------------------------------------------------------------------

/// Piecewise-linear colour ramp over `[0, 1]`, interpolated in linear RGB.
#[derive(Debug, Clone)]
pub struct ColorScale {
    stops: Vec<LinSrgb>,
}

impl ColorScale {
    fn from_rgb8(stops: &[(u8, u8, u8)]) -> Self {
        let stops: Vec<LinSrgb> = stops
            .iter()
            .map(|&(r, g, b)| {
                let srgb: Srgb = Srgb::new(r, g, b).into_format();
                srgb.into_color()
            })
            .collect();
        ColorScale { stops }
    }

    /// Light to dark blue.
    pub fn blues() -> Self {
        Self::from_rgb8(&[(222, 235, 247), (107, 174, 214), (33, 113, 181), (8, 48, 107)])
    }

    /// Dark violet through magenta and orange to yellow.
    pub fn plasma() -> Self {
        Self::from_rgb8(&[
            (13, 8, 135),
            (126, 3, 168),
            (204, 71, 120),
            (248, 149, 64),
            (240, 249, 33),
        ])
    }

    /// Colour at position `t`; clamped to `[0, 1]`.
    pub fn at(&self, t: f64) -> Color32 {
        let Some(first) = self.stops.first().copied() else {
            return Color32::GRAY;
        };
        if self.stops.len() == 1 || !t.is_finite() {
            return to_color32(first.into_color());
        }
        let t = t.clamp(0.0, 1.0) as f32;
        let segments = (self.stops.len() - 1) as f32;
        let pos = t * segments;
        let i = (pos.floor() as usize).min(self.stops.len() - 2);
        let local = pos - i as f32;
        let mixed = self.stops[i].mix(self.stops[i + 1], local);
        to_color32(mixed.into_color())
    }

    /// Colour for `value` relative to `[min, max]`. A degenerate range maps
    /// to the top of the scale.
    pub fn for_value(&self, value: f64, min: f64, max: f64) -> Color32 {
        let span = max - min;
        if span.abs() < f64::EPSILON {
            self.at(1.0)
        } else {
            self.at((value - min) / span)
        }
    }
}
