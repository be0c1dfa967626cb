use colors_transform::Color;

use crate::errors::HeatmapError;

// Palette from lowest to highest intensity
const DEFAULT_PALETTE: [[u8; 3]; 6] = [
    [0xF4, 0xF4, 0xF4],
    [0x66, 0xAD, 0xFA],
    [0xFF, 0xBE, 0x2E],
    [0x9A, 0xCC, 0x34],
    [0xFF, 0xA2, 0x2F],
    [0xF2, 0x3B, 0x3B],
];

const DEFAULT_GRADIENT_START: [u8; 3] = [0xF4, 0xF4, 0xF4];
const DEFAULT_GRADIENT_END: [u8; 3] = [0xFF, 0x00, 0x00];

fn parse_hex(hex: &str) -> Result<[u8; 3], HeatmapError> {
    let parsed = colors_transform::Rgb::from_hex_str(hex)
        .map_err(|_| HeatmapError::InvalidColor(hex.to_string()))?;

    Ok([
        parsed.get_red() as u8,
        parsed.get_green() as u8,
        parsed.get_blue() as u8,
    ])
}

fn to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}

fn intensity_ratio(magnitude: usize, max_magnitude: usize) -> f64 {
    // An all-empty grid maps everything to the lowest-intensity color
    if max_magnitude == 0 {
        0.0
    } else {
        magnitude as f64 / max_magnitude as f64
    }
}

/// Per-channel linear interpolation between a start and an end color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientScale {
    pub start: [u8; 3],
    pub end: [u8; 3],
}

impl Default for GradientScale {
    fn default() -> Self {
        GradientScale {
            start: DEFAULT_GRADIENT_START,
            end: DEFAULT_GRADIENT_END,
        }
    }
}

impl GradientScale {
    pub fn new(start: [u8; 3], end: [u8; 3]) -> Self {
        GradientScale { start, end }
    }

    pub fn from_hex_strs(start: &str, end: &str) -> Result<Self, HeatmapError> {
        Ok(GradientScale {
            start: parse_hex(start)?,
            end: parse_hex(end)?,
        })
    }

    pub fn rgb_for(&self, magnitude: usize, max_magnitude: usize) -> [u8; 3] {
        let ratio = intensity_ratio(magnitude, max_magnitude);

        let mut rgb = [0u8; 3];
        for (i, channel) in rgb.iter_mut().enumerate() {
            let start = self.start[i] as f64;
            let end = self.end[i] as f64;
            *channel = (start + ratio * (end - start)).round().clamp(0.0, 255.0) as u8;
        }

        rgb
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Levels {
    EqualWidth(Vec<[u8; 3]>),
    // Ascending (percentage, color) pairs; first threshold >= percentage wins
    Thresholds(Vec<(f64, [u8; 3])>),
}

/// A fixed set of intensity levels, keyed either by equal-width division of
/// the [0, max] range or by an explicit percentage-threshold table.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteScale {
    levels: Levels,
}

impl Default for DiscreteScale {
    fn default() -> Self {
        DiscreteScale::equal_width(DEFAULT_PALETTE.to_vec())
    }
}

impl DiscreteScale {
    pub fn equal_width(palette: Vec<[u8; 3]>) -> Self {
        assert!(!palette.is_empty());
        DiscreteScale {
            levels: Levels::EqualWidth(palette),
        }
    }

    pub fn equal_width_from_hex_strs(palette: &[&str]) -> Result<Self, HeatmapError> {
        let colors = palette
            .iter()
            .map(|hex| parse_hex(hex))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DiscreteScale::equal_width(colors))
    }

    pub fn with_thresholds(steps: Vec<(f64, [u8; 3])>) -> Self {
        assert!(!steps.is_empty());
        DiscreteScale {
            levels: Levels::Thresholds(steps),
        }
    }

    pub fn rgb_for(&self, magnitude: usize, max_magnitude: usize) -> [u8; 3] {
        let ratio = intensity_ratio(magnitude, max_magnitude);

        match &self.levels {
            Levels::EqualWidth(palette) => {
                let index = ((ratio * palette.len() as f64).floor() as usize)
                    .min(palette.len() - 1);
                palette[index]
            }
            Levels::Thresholds(steps) => {
                let percentage = ratio * 100.0;
                steps
                    .iter()
                    .find(|(threshold, _)| *threshold >= percentage)
                    .map(|(_, color)| *color)
                    .unwrap_or_else(|| steps[steps.len() - 1].1)
            }
        }
    }
}

/// The two interchangeable coloring strategies behind one contract: the
/// gradient gives finer granularity, the discrete scale gives nameable
/// levels for a legend.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorScale {
    Gradient(GradientScale),
    Discrete(DiscreteScale),
}

impl ColorScale {
    pub fn rgb_for(&self, magnitude: usize, max_magnitude: usize) -> [u8; 3] {
        match self {
            ColorScale::Gradient(scale) => scale.rgb_for(magnitude, max_magnitude),
            ColorScale::Discrete(scale) => scale.rgb_for(magnitude, max_magnitude),
        }
    }

    /// Uppercase #RRGGBB form of `rgb_for`.
    pub fn color_for(&self, magnitude: usize, max_magnitude: usize) -> String {
        to_hex(self.rgb_for(magnitude, max_magnitude))
    }
}
