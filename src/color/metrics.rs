use std::cmp::Ordering;

use crate::color::hex::Color;

/// Perceived lightness in `[0, 1]` from Rec. 601 luma weights.
///
/// Only used to order and classify palette entries; it makes no colorimetric claim.
pub fn lightness(color: Color) -> f64 {
    let r = f64::from(color.r);
    let g = f64::from(color.g);
    let b = f64::from(color.b);
    (0.299 * r + 0.587 * g + 0.114 * b) / 255.0
}

/// HSL hue in whole degrees, `[0, 360)`. Achromatic colors report `0`.
pub fn hue(color: Color) -> f64 {
    let [r, g, b] = color.to_unit_rgb();

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    if delta == 0.0 {
        return 0.0;
    }

    // `%` keeps the dividend's sign, so the red sector can go negative before wrapping.
    let sector = if max == r {
        ((g - b) / delta) % 6.0
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    let mut deg = (sector * 60.0).round();
    if deg < 0.0 {
        deg += 360.0;
    }
    // Normalizes a rounded `-0.0`.
    deg + 0.0
}

/// Warm/cool split used to assign palette entries to opposite wave corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Temperature {
    Warm,
    Cool,
}

impl Temperature {
    /// Reds, oranges and yellows (`0..=60`) plus magentas (`>= 300`) are warm.
    pub fn of(color: Color) -> Self {
        let h = hue(color);
        if (0.0..=60.0).contains(&h) || h >= 300.0 {
            Self::Warm
        } else {
            Self::Cool
        }
    }
}

/// Stable sort, lightest first.
pub fn sort_by_lightness_desc(colors: &mut [Color]) {
    colors.sort_by(|a, b| lightness(*b).partial_cmp(&lightness(*a)).unwrap_or(Ordering::Equal));
}

/// Stable sort, darkest first.
pub fn sort_by_lightness_asc(colors: &mut [Color]) {
    colors.sort_by(|a, b| lightness(*a).partial_cmp(&lightness(*b)).unwrap_or(Ordering::Equal));
}

#[cfg(test)]
#[path = "../../tests/unit/color/metrics.rs"]
mod tests;
