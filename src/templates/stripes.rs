use crate::color::hex::Color;
use crate::color::metrics::sort_by_lightness_desc;
use crate::foundation::core::Rect;
use crate::geometry::intersect::draw_diagonal_stripe;
use crate::geometry::stripes::{Diagonal, SEAM_BLEED_PX, Stripe, draw_rotated_stripes};
use crate::surface::RasterSurface;
use crate::templates::DrawArgs;

pub const VERTICAL_MIN_COLORS: usize = 1;
pub const EQUAL_MIN_COLORS: usize = 1;
pub const RETRO_LINES_MIN_COLORS: usize = 3;
pub const RETRO_STRIPES_MIN_COLORS: usize = 2;

/// Number of vertical bands, independent of palette length.
pub const VERTICAL_STRIPE_COUNT: usize = 5;

/// Relative weight of the first and last Retro Lines stripes; middle stripes weigh 1.
pub const RETRO_LINES_END_WEIGHT: f64 = 3.5;

/// Retro Stripes accent width, as a fraction of the diagonal.
pub const RETRO_ACCENT_WIDTH: f64 = 0.03;
/// At most this many main stripes; extra colors are ignored.
pub const RETRO_MAX_MAIN_STRIPES: usize = 4;

/// Five equal vertical bands, cycling through the palette.
pub fn draw_vertical_stripes(surface: &mut dyn RasterSurface, args: &DrawArgs<'_>) {
    let colors = args.colors;
    if colors.len() < VERTICAL_MIN_COLORS {
        return;
    }

    let band = args.width / VERTICAL_STRIPE_COUNT as f64;
    for i in 0..VERTICAL_STRIPE_COUNT {
        let x0 = i as f64 * band;
        let x1 = if i + 1 == VERTICAL_STRIPE_COUNT {
            args.width
        } else {
            x0 + band + SEAM_BLEED_PX
        };
        surface.fill_rect(Rect::new(x0, 0.0, x1, args.height), colors[i % colors.len()]);
    }
}

/// One equal-width diagonal stripe per color, bottom-left to top-right.
pub fn draw_equal_stripes(surface: &mut dyn RasterSurface, args: &DrawArgs<'_>) {
    if args.colors.len() < EQUAL_MIN_COLORS {
        return;
    }
    let stripes: Vec<Stripe> = args.colors.iter().map(|&c| Stripe::new(c, 1.0)).collect();
    draw_rotated_stripes(surface, args.width, args.height, &stripes, Diagonal::BlTr);
}

/// Stripe weights for Retro Lines: heavy ends, thin middle.
pub fn retro_lines_stripes(colors: &[Color]) -> Vec<Stripe> {
    let last = colors.len().saturating_sub(1);
    colors
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let size = if i == 0 || i == last {
                RETRO_LINES_END_WEIGHT
            } else {
                1.0
            };
            Stripe::new(c, size)
        })
        .collect()
}

/// Diagonal stripes, top-left to bottom-right, with enlarged first and last colors.
pub fn draw_retro_lines(surface: &mut dyn RasterSurface, args: &DrawArgs<'_>) {
    if args.colors.len() < RETRO_LINES_MIN_COLORS {
        return;
    }
    let stripes = retro_lines_stripes(args.colors);
    draw_rotated_stripes(surface, args.width, args.height, &stripes, Diagonal::TlBr);
}

/// One band of a Retro Stripes layout, as diagonal offsets in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RetroBand {
    pub color: Color,
    pub start: f64,
    pub end: f64,
}

/// Retro Stripes layout: the lightest color becomes a thin accent between up to four main
/// stripes, taken from the rest in descending lightness. Bands tile `[0, 1]` exactly.
pub fn retro_stripes_layout(colors: &[Color]) -> Vec<RetroBand> {
    if colors.len() < RETRO_STRIPES_MIN_COLORS {
        return Vec::new();
    }

    let mut sorted = colors.to_vec();
    sort_by_lightness_desc(&mut sorted);
    let accent = sorted[0];
    let mains = &sorted[1..sorted.len().min(RETRO_MAX_MAIN_STRIPES + 1)];

    let m = mains.len();
    let main_width = (1.0 - RETRO_ACCENT_WIDTH * (m - 1) as f64) / m as f64;

    let mut bands = Vec::with_capacity(2 * m - 1);
    let mut pos = 0.0;
    for (i, &color) in mains.iter().enumerate() {
        let end = if i + 1 == m { 1.0 } else { pos + main_width };
        bands.push(RetroBand {
            color,
            start: pos,
            end,
        });
        pos = end;

        if i + 1 < m {
            bands.push(RetroBand {
                color: accent,
                start: pos,
                end: pos + RETRO_ACCENT_WIDTH,
            });
            pos += RETRO_ACCENT_WIDTH;
        }
    }
    bands
}

/// Intersection-based diagonal stripes with thin accent lines, top-left to bottom-right.
pub fn draw_retro_stripes(surface: &mut dyn RasterSurface, args: &DrawArgs<'_>) {
    let bands = retro_stripes_layout(args.colors);
    let Some((last, rest)) = bands.split_last() else {
        return;
    };

    let diag = args.width.hypot(args.height);
    let bleed = if diag > 0.0 { SEAM_BLEED_PX / diag } else { 0.0 };
    for band in rest {
        draw_diagonal_stripe(
            surface,
            args.width,
            args.height,
            band.start,
            band.end + bleed,
            band.color,
            Diagonal::TlBr,
        );
    }
    draw_diagonal_stripe(
        surface,
        args.width,
        args.height,
        last.start,
        last.end,
        last.color,
        Diagonal::TlBr,
    );
}
