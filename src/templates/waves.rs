use crate::geometry::wave::{Corner, WaveParams, draw_corner_waves};
use crate::surface::PathSurface;
use crate::templates::DrawArgs;

pub const MIN_COLORS: usize = 3;

/// Default wave shape; warm layers from the top-right, cool from the bottom-left.
pub fn draw_flowing_waves(surface: &mut dyn PathSurface, args: &DrawArgs<'_>) {
    if args.colors.len() < MIN_COLORS {
        return;
    }
    draw_corner_waves(
        surface,
        args.width,
        args.height,
        args.colors,
        WaveParams::default(),
        Corner::TopRight,
        Corner::BottomLeft,
    );
}

/// Caller-tunable wave shape; warm layers from the top-left, cool from the bottom-right.
pub fn draw_flowing_waves_smooth(surface: &mut dyn PathSurface, args: &DrawArgs<'_>) {
    if args.colors.len() < MIN_COLORS {
        return;
    }
    draw_corner_waves(
        surface,
        args.width,
        args.height,
        args.colors,
        args.waves.unwrap_or_default(),
        Corner::TopLeft,
        Corner::BottomRight,
    );
}
