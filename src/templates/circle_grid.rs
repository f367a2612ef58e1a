use crate::color::hex::Color;
use crate::foundation::core::{Point, Rect};
use crate::surface::RasterSurface;
use crate::templates::DrawArgs;

pub const MIN_COLORS: usize = 1;

pub const GRID_SIZE: usize = 8;
/// 1-indexed, row-major position of the accent circle.
pub const ACCENT_INDEX: usize = 42;

const PADDING_RATIO: f64 = 0.08;
const DIAMETER_RATIO: f64 = 0.7;
/// Extra radius matching a 2px outline in the circle's own color.
const EDGE_PX: f64 = 1.0;

const FALLBACK_BACKGROUND: Color = Color::from_u24(0x3d405b);
const FALLBACK_CIRCLE: Color = Color::from_u24(0xf4f1de);
const FALLBACK_ACCENT: Color = Color::from_u24(0xe07a5f);

/// Background, circle and accent colors: `colors[2]`, `colors[0]`, `colors[1]`, with fixed
/// fallbacks for short palettes.
pub fn circle_grid_colors(colors: &[Color]) -> (Color, Color, Color) {
    let pick = |i: usize, fallback: Color| colors.get(i).copied().unwrap_or(fallback);
    (
        pick(2, FALLBACK_BACKGROUND),
        pick(0, FALLBACK_CIRCLE),
        pick(1, FALLBACK_ACCENT),
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCircle {
    /// 1-indexed, row-major.
    pub index: usize,
    pub center: Point,
    pub radius: f64,
}

/// Circle centers and radii for a `width` x `height` canvas.
pub fn circle_grid_layout(width: f64, height: f64) -> Vec<GridCircle> {
    let padding = width.min(height) * PADDING_RATIO;
    let cell_w = (width - 2.0 * padding) / GRID_SIZE as f64;
    let cell_h = (height - 2.0 * padding) / GRID_SIZE as f64;
    let radius = cell_w.min(cell_h) * DIAMETER_RATIO / 2.0 + EDGE_PX;

    (0..GRID_SIZE * GRID_SIZE)
        .map(|i| {
            let (row, col) = (i / GRID_SIZE, i % GRID_SIZE);
            GridCircle {
                index: i + 1,
                center: Point::new(
                    padding + (col as f64 + 0.5) * cell_w,
                    padding + (row as f64 + 0.5) * cell_h,
                ),
                radius,
            }
        })
        .collect()
}

/// 8x8 circles on a solid background, with one accent circle.
pub fn draw_circle_grid(surface: &mut dyn RasterSurface, args: &DrawArgs<'_>) {
    if args.colors.len() < MIN_COLORS {
        return;
    }
    let (background, base, accent) = circle_grid_colors(args.colors);

    surface.fill_rect(Rect::new(0.0, 0.0, args.width, args.height), background);
    for circle in circle_grid_layout(args.width, args.height) {
        let color = if circle.index == ACCENT_INDEX {
            accent
        } else {
            base
        };
        surface.fill_circle(circle.center, circle.radius, color);
    }
}
