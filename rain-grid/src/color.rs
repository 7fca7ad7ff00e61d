//! Discrete color scale shared by cell fills and the legend.

use crate::config::HeatmapConfig;
use crate::error::GridError;
use crate::plan::LegendEntry;
use rain_utils::numbers::format_value;
use std::fmt;

/// Opaque RGB color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> Result<Self, GridError> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(GridError::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| GridError::InvalidColor(s.to_string()))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear blend: `t = 0` gives `self`, `t = 1` gives `other`.
    pub fn lerp(self, other: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color::rgb(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Relative luminance in `[0, 1]` (Rec. 709 weights on the raw channels).
    pub fn luminance(self) -> f64 {
        (0.2126 * self.r as f64 + 0.7152 * self.g as f64 + 0.0722 * self.b as f64) / 255.0
    }

    /// Light end of the default sequential palette.
    pub const LIGHT_BLUE: Color = Color::rgb(0xde, 0xeb, 0xf7);
    /// Saturated end of the default sequential palette.
    pub const DEEP_BLUE: Color = Color::rgb(0x08, 0x30, 0x6b);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Bucket index of `value` on a scale of `bucket_count` equal steps over
/// `[0, domain_max]`. Values at or above `domain_max` land in the last,
/// open-ended bucket; negative and NaN values land in bucket 0.
pub fn bucket_of(value: f64, domain_max: f64, bucket_count: usize) -> usize {
    if bucket_count == 0 || !(value > 0.0) || !(domain_max > 0.0) {
        return 0;
    }
    let step = domain_max / bucket_count as f64;
    ((value / step).floor() as usize).min(bucket_count - 1)
}

/// Largest palette a [`ColorScale`] will build.
pub const MAX_BUCKET_COUNT: usize = 256;

/// Equal-width quantizing scale with a light → saturated palette.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    domain_max: f64,
    palette: Vec<Color>,
}

impl ColorScale {
    /// Scale over `[0, domain_max]` with the default blue palette.
    pub fn new(domain_max: f64, bucket_count: usize) -> Result<Self, GridError> {
        Self::with_colors(domain_max, bucket_count, Color::LIGHT_BLUE, Color::DEEP_BLUE)
    }

    /// Scale whose palette interpolates from `low` (bucket 0) to `high`
    /// (last bucket).
    pub fn with_colors(
        domain_max: f64,
        bucket_count: usize,
        low: Color,
        high: Color,
    ) -> Result<Self, GridError> {
        if !domain_max.is_finite() || domain_max <= 0.0 {
            return Err(GridError::InvalidScale(format!(
                "domain max must be positive, got {domain_max}"
            )));
        }
        if bucket_count == 0 {
            return Err(GridError::InvalidScale("bucket count must be at least 1".into()));
        }
        if bucket_count > MAX_BUCKET_COUNT {
            return Err(GridError::InvalidScale(format!(
                "bucket count must be at most {MAX_BUCKET_COUNT}, got {bucket_count}"
            )));
        }
        let palette = (0..bucket_count)
            .map(|i| {
                let t = if bucket_count == 1 {
                    0.0
                } else {
                    i as f64 / (bucket_count - 1) as f64
                };
                low.lerp(high, t)
            })
            .collect();
        Ok(Self {
            domain_max,
            palette,
        })
    }

    pub fn from_config(config: &HeatmapConfig) -> Result<Self, GridError> {
        Self::with_colors(
            config.domain_max,
            config.bucket_count,
            Color::from_hex(&config.low_color)?,
            Color::from_hex(&config.high_color)?,
        )
    }

    pub fn bucket_count(&self) -> usize {
        self.palette.len()
    }

    pub fn domain_max(&self) -> f64 {
        self.domain_max
    }

    /// Width of every bucket but the last.
    pub fn step(&self) -> f64 {
        self.domain_max / self.bucket_count() as f64
    }

    pub fn bucket_of(&self, value: f64) -> usize {
        bucket_of(value, self.domain_max, self.bucket_count())
    }

    /// Palette color of `bucket`; indexes past the end get the last color.
    pub fn color_of(&self, bucket: usize) -> Color {
        let last = self.palette.len() - 1;
        self.palette[bucket.min(last)]
    }

    pub fn color_for(&self, value: f64) -> Color {
        self.color_of(self.bucket_of(value))
    }

    /// One entry per bucket, labelled with its lower threshold. The last
    /// bucket reads `"<lower>+"`.
    pub fn legend(&self) -> Vec<LegendEntry> {
        let step = self.step();
        let last = self.bucket_count() - 1;
        (0..self.bucket_count())
            .map(|bucket| {
                let lower = bucket as f64 * step;
                let (label, upper) = if bucket == last {
                    (format!("{}+", format_value(lower)), None)
                } else {
                    (format_value(lower), Some(lower + step))
                };
                LegendEntry {
                    bucket,
                    color: self.color_of(bucket).to_hex(),
                    label,
                    lower,
                    upper,
                }
            })
            .collect()
    }
}
