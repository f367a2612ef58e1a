use serde::{Deserialize, Serialize};

use crate::color::hex::Color;
use crate::foundation::core::{Affine, Rect, Vec2};
use crate::surface::RasterSurface;

/// Overdraw, in pixels, of each stripe into its successor so shared edges never show the
/// surface underneath. The successor is drawn later and covers it.
///
/// Must exceed the widest projection of a pixel onto a diagonal axis (`sqrt 2`), so every
/// seam pixel is fully inside at least one stripe.
pub(crate) const SEAM_BLEED_PX: f64 = 2.0;

/// Axis along which diagonal stripes advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diagonal {
    /// Top-left corner to bottom-right corner.
    #[serde(rename = "tl-br")]
    TlBr,
    /// Bottom-left corner to top-right corner.
    #[serde(rename = "bl-tr")]
    BlTr,
}

impl Diagonal {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TlBr => "tl-br",
            Self::BlTr => "bl-tr",
        }
    }
}

/// A proportionally sized band of color. Sizes are relative to the sum over all stripes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stripe {
    pub color: Color,
    pub size: f64,
}

impl Stripe {
    pub fn new(color: Color, size: f64) -> Self {
        Self { color, size }
    }
}

/// One stripe as an axis-aligned rectangle in the rotated frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotatedBand {
    pub color: Color,
    pub rect: Rect,
}

/// Stripes laid out in a frame centered on the canvas and rotated onto the diagonal.
#[derive(Clone, Debug, PartialEq)]
pub struct RotatedStripeLayout {
    /// Maps the rotated frame onto canvas coordinates.
    pub transform: Affine,
    /// Length of the canvas diagonal; the bands together span exactly this width.
    pub diagonal: f64,
    pub bands: Vec<RotatedBand>,
}

/// Lay out `stripes` along `dir`.
///
/// In the rotated frame the bands start at `-D/2` and advance left to right in list order,
/// each `size / total * D` wide and `2D` tall, which covers the whole canvas after rotation
/// for any aspect ratio.
pub fn rotated_stripe_layout(
    width: f64,
    height: f64,
    stripes: &[Stripe],
    dir: Diagonal,
) -> RotatedStripeLayout {
    let diagonal = width.hypot(height);
    let angle = height.atan2(width);
    let rotation = match dir {
        Diagonal::TlBr => angle,
        Diagonal::BlTr => -angle,
    };
    let transform =
        Affine::translate(Vec2::new(width / 2.0, height / 2.0)) * Affine::rotate(rotation);

    let total: f64 = stripes.iter().map(|s| s.size.max(0.0)).sum();
    if !(total.is_finite() && total > 0.0) {
        return RotatedStripeLayout {
            transform,
            diagonal,
            bands: Vec::new(),
        };
    }

    let half = diagonal / 2.0;
    let mut position = -half;
    let mut bands = Vec::with_capacity(stripes.len());
    for (i, stripe) in stripes.iter().enumerate() {
        let band_width = (stripe.size.max(0.0) / total) * diagonal;
        // Pin the final edge so rounding never leaves a sliver uncovered.
        let end = if i + 1 == stripes.len() {
            half
        } else {
            position + band_width
        };
        bands.push(RotatedBand {
            color: stripe.color,
            rect: Rect::new(position, -diagonal, end, diagonal),
        });
        position = end;
    }

    RotatedStripeLayout {
        transform,
        diagonal,
        bands,
    }
}

/// Paint diagonal stripes by rotating the frame and filling axis-aligned bands.
///
/// Restores the identity transform before returning.
pub fn draw_rotated_stripes(
    surface: &mut dyn RasterSurface,
    width: f64,
    height: f64,
    stripes: &[Stripe],
    dir: Diagonal,
) {
    let layout = rotated_stripe_layout(width, height, stripes, dir);
    surface.set_transform(layout.transform);
    let last = layout.bands.len().saturating_sub(1);
    for (i, band) in layout.bands.iter().enumerate() {
        let mut rect = band.rect;
        if i < last {
            rect.x1 += SEAM_BLEED_PX;
        }
        surface.fill_rect(rect, band.color);
    }
    surface.set_transform(Affine::IDENTITY);
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/stripes.rs"]
mod tests;
