//! Corner-anchored wave fills.
//!
//! A palette is split into a background (its lightest color) and two groups, warm and cool,
//! which fill opposite corners of the canvas with stacked wavy layers. Each layer's boundary
//! runs through the same control points, pushed a little further toward its corner than the
//! layer before it, and is smoothed into a Catmull-Rom spline.

use std::f64::consts::PI;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::color::hex::Color;
use crate::color::metrics::{Temperature, sort_by_lightness_asc, sort_by_lightness_desc};
use crate::foundation::core::{BezPath, Point};
use crate::foundation::error::{BackdropError, BackdropResult};
use crate::geometry::smooth::smooth_closed;
use crate::surface::{PathSurface, polygon_path};

/// Accepted number of wave crests.
pub const WAVE_COUNT_RANGE: RangeInclusive<u32> = 1..=8;
/// Accepted amplitude, in percent.
pub const AMPLITUDE_RANGE: RangeInclusive<u32> = 10..=100;

/// Horizontal span of the control points, as fractions of the width. Slightly wider than the
/// canvas so the smoothed boundary never turns inside it.
const X_START: f64 = -0.05;
const X_END: f64 = 1.05;

/// Trough depth at 100% amplitude, as a fraction of the height.
const TROUGH_DEPTH: f64 = 0.14;
/// Linear sag from the right end to the left end at 100% amplitude.
const DRIFT: f64 = 0.16;
/// Peak of the sinusoidal variation that keeps troughs from looking identical.
const RIPPLE: f64 = 0.02;

/// Resting height of the boundary for the top and bottom corner groups.
const TOP_BASE_Y: f64 = 0.38;
const BOTTOM_BASE_Y: f64 = 0.62;

/// Horizontal anchor coordinates beyond the canvas edges.
const OUTSIDE_LO: f64 = -0.1;
const OUTSIDE_HI: f64 = 1.1;
/// Vertical anchor coordinates. Far enough out that the deepest layer at full amplitude
/// never crosses them.
const ANCHOR_TOP: f64 = -0.5;
const ANCHOR_BOTTOM: f64 = 1.5;

/// Closing points along the near vertical edge, measured from the corner's own side.
const CLOSE_FAR: f64 = 0.7;
const CLOSE_NEAR: f64 = 0.3;

/// Upper bounds on per-layer inward spacing.
const MAX_LAYER_SPACING: f64 = 0.10;
const TOTAL_LAYER_SPACING: f64 = 0.35;

/// Shape of the wavy boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "WaveParamsRepr")]
pub struct WaveParams {
    /// Number of troughs across the width, `1..=8`.
    pub wave_count: u32,
    /// Depth of the undulation in percent, `10..=100`.
    pub amplitude: u32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            wave_count: 4,
            amplitude: 60,
        }
    }
}

impl WaveParams {
    pub fn new(wave_count: u32, amplitude: u32) -> BackdropResult<Self> {
        if !WAVE_COUNT_RANGE.contains(&wave_count) {
            return Err(BackdropError::validation(format!(
                "waveCount must be in {}..={}, got {wave_count}",
                WAVE_COUNT_RANGE.start(),
                WAVE_COUNT_RANGE.end()
            )));
        }
        if !AMPLITUDE_RANGE.contains(&amplitude) {
            return Err(BackdropError::validation(format!(
                "amplitude must be in {}..={}, got {amplitude}",
                AMPLITUDE_RANGE.start(),
                AMPLITUDE_RANGE.end()
            )));
        }
        Ok(Self {
            wave_count,
            amplitude,
        })
    }

    /// Clamp arbitrary integers into the accepted ranges.
    pub fn clamped(wave_count: i64, amplitude: i64) -> Self {
        let clamp = |v: i64, r: &RangeInclusive<u32>| {
            v.clamp(i64::from(*r.start()), i64::from(*r.end())) as u32
        };
        Self {
            wave_count: clamp(wave_count, &WAVE_COUNT_RANGE),
            amplitude: clamp(amplitude, &AMPLITUDE_RANGE),
        }
    }

    /// Amplitude as a multiplier in `[0.1, 1.0]`.
    pub fn amplitude_scale(self) -> f64 {
        f64::from(self.amplitude) / 100.0
    }

    /// Number of control points on the boundary: `2 * wave_count + 1`.
    pub fn control_point_count(self) -> usize {
        2 * self.wave_count as usize + 1
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WaveParamsRepr {
    #[serde(default = "default_wave_count")]
    wave_count: u32,
    #[serde(default = "default_amplitude")]
    amplitude: u32,
}

fn default_wave_count() -> u32 {
    WaveParams::default().wave_count
}

fn default_amplitude() -> u32 {
    WaveParams::default().amplitude
}

impl TryFrom<WaveParamsRepr> for WaveParams {
    type Error = BackdropError;

    fn try_from(repr: WaveParamsRepr) -> Result<Self, Self::Error> {
        Self::new(repr.wave_count, repr.amplitude)
    }
}

/// One control vertex of the boundary: `x` as a fraction of the width, `amp` as a fraction
/// of the height added to the corner's base line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WavePoint {
    pub x: f64,
    pub amp: f64,
}

/// Control points from right (`x = 1.05`) to left (`x = -0.05`).
///
/// Even indices are crests and odd indices troughs; troughs carry the full depth plus a small
/// sinusoidal variation, and every point sags with a linear drift toward the left. All
/// offsets scale with `amplitude / 100`.
pub fn wave_points(params: WaveParams) -> Vec<WavePoint> {
    let segments = 2 * params.wave_count.max(1) as usize;
    let waves = f64::from(params.wave_count.max(1));
    let scale = params.amplitude_scale();

    (0..=segments)
        .map(|k| {
            let t = k as f64 / segments as f64;
            let trough = if k % 2 == 1 { TROUGH_DEPTH } else { 0.0 };
            let ripple = RIPPLE * (t * PI * waves).sin();
            WavePoint {
                x: X_END - (X_END - X_START) * t,
                amp: (DRIFT * t + trough + ripple) * scale,
            }
        })
        .collect()
}

/// Inward offset of layer `index` out of `total`: `index * min(0.10, 0.35 / total)`.
pub fn layer_offset(index: usize, total: usize) -> f64 {
    let spacing = MAX_LAYER_SPACING.min(TOTAL_LAYER_SPACING / total.max(1) as f64);
    index as f64 * spacing
}

/// Canvas corner a wave group grows from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }

    fn is_mirrored(self) -> bool {
        matches!(self, Self::TopRight | Self::BottomLeft)
    }
}

/// Closed outline of a corner fill in unit coordinates (fractions of width and height).
///
/// Two anchors beyond the corner, the boundary through every control point, then two closing
/// points along the near edge. Top corners rest at `0.38` and move up by `offset`; bottom
/// corners rest at `0.62`, trace the points in reverse and move down by `offset`. Both add
/// `amp` so the two edges undulate in step across the diagonal. Right-hand variants are the
/// horizontal mirror of the left-hand ones.
pub fn corner_outline(corner: Corner, wave: &[WavePoint], offset: f64) -> Vec<Point> {
    let mut pts = Vec::with_capacity(wave.len() + 4);
    if corner.is_top() {
        pts.push(Point::new(OUTSIDE_LO, ANCHOR_TOP));
        pts.push(Point::new(OUTSIDE_HI, ANCHOR_TOP));
        pts.extend(
            wave.iter()
                .map(|p| Point::new(p.x, TOP_BASE_Y + p.amp - offset)),
        );
        pts.push(Point::new(OUTSIDE_LO, CLOSE_FAR));
        pts.push(Point::new(OUTSIDE_LO, CLOSE_NEAR));
    } else {
        pts.push(Point::new(OUTSIDE_HI, ANCHOR_BOTTOM));
        pts.push(Point::new(OUTSIDE_LO, ANCHOR_BOTTOM));
        pts.extend(
            wave.iter()
                .rev()
                .map(|p| Point::new(p.x, BOTTOM_BASE_Y + p.amp + offset)),
        );
        pts.push(Point::new(OUTSIDE_HI, 1.0 - CLOSE_FAR));
        pts.push(Point::new(OUTSIDE_HI, 1.0 - CLOSE_NEAR));
    }

    if corner.is_mirrored() {
        for p in &mut pts {
            p.x = 1.0 - p.x;
        }
    }
    pts
}

/// Palette split for wave templates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaveGroups {
    /// Lightest color, painted full-bleed first.
    pub background: Color,
    /// Warm layers, darkest first.
    pub warm: Vec<Color>,
    /// Cool layers, darkest first.
    pub cool: Vec<Color>,
}

/// Split `colors` into background, warm and cool groups.
///
/// When every non-background color has the same temperature, the lightness-ordered remainder
/// is cut in half instead (first `ceil(n/2)` warm), so both corners are drawn whenever at
/// least two colors remain. Returns `None` for an empty palette.
pub fn group_wave_colors(colors: &[Color]) -> Option<WaveGroups> {
    let mut sorted = colors.to_vec();
    sort_by_lightness_desc(&mut sorted);
    let (&background, rest) = sorted.split_first()?;

    let (mut warm, mut cool): (Vec<Color>, Vec<Color>) = rest
        .iter()
        .partition(|c| Temperature::of(**c) == Temperature::Warm);

    if warm.is_empty() || cool.is_empty() {
        let mid = rest.len().div_ceil(2);
        warm = rest[..mid].to_vec();
        cool = rest[mid..].to_vec();
    }

    sort_by_lightness_asc(&mut warm);
    sort_by_lightness_asc(&mut cool);

    Some(WaveGroups {
        background,
        warm,
        cool,
    })
}

/// One filled layer of a corner group.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveLayer {
    pub corner: Corner,
    pub index: usize,
    pub offset: f64,
    pub color: Color,
    /// Control polygon in unit coordinates, before smoothing.
    pub outline: Vec<Point>,
}

impl WaveLayer {
    /// Smoothed fill path in canvas pixels.
    pub fn to_path(&self, width: f64, height: f64) -> Option<BezPath> {
        let scaled: Vec<Point> = self
            .outline
            .iter()
            .map(|p| Point::new(p.x * width, p.y * height))
            .collect();
        smooth_closed(&scaled)
    }
}

/// Layers for one corner, outermost (darkest) first.
pub fn corner_layers(corner: Corner, colors: &[Color], params: WaveParams) -> Vec<WaveLayer> {
    let wave = wave_points(params);
    let total = colors.len();
    colors
        .iter()
        .enumerate()
        .map(|(index, &color)| {
            let offset = layer_offset(index, total);
            WaveLayer {
                corner,
                index,
                offset,
                color,
                outline: corner_outline(corner, &wave, offset),
            }
        })
        .collect()
}

/// Paint a two-corner wave composition: background, then the warm corner, then the cool one.
pub fn draw_corner_waves(
    surface: &mut dyn PathSurface,
    width: f64,
    height: f64,
    colors: &[Color],
    params: WaveParams,
    warm_corner: Corner,
    cool_corner: Corner,
) {
    let Some(groups) = group_wave_colors(colors) else {
        return;
    };
    tracing::debug!(
        background = %groups.background,
        warm = groups.warm.len(),
        cool = groups.cool.len(),
        wave_count = params.wave_count,
        amplitude = params.amplitude,
        "wave groups"
    );

    let full = [
        Point::new(0.0, 0.0),
        Point::new(width, 0.0),
        Point::new(width, height),
        Point::new(0.0, height),
    ];
    if let Some(bg) = polygon_path(&full) {
        surface.fill_path(&bg, groups.background);
    }

    let layers = corner_layers(warm_corner, &groups.warm, params)
        .into_iter()
        .chain(corner_layers(cool_corner, &groups.cool, params));
    for layer in layers {
        if let Some(path) = layer.to_path(width, height) {
            surface.fill_path(&path, layer.color);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/wave.rs"]
mod tests;
