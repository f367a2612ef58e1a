//! Drawing surfaces.
//!
//! Templates draw against one of two capability contracts:
//!
//! - [`RasterSurface`]: immediate-mode fills (rectangles, circles, polygons) under a current
//!   transform, in the spirit of a p5-style canvas.
//! - [`PathSurface`]: filled Bézier paths, for templates that build smooth outlines.
//!
//! A concrete [`Surface`] provides both plus clearing. The crate ships [`cpu::CpuSurface`]
//! (pixels via `vello_cpu`) and [`recorder::RecordingSurface`] (an in-memory command log).

use crate::color::hex::Color;
use crate::foundation::core::{Affine, BezPath, Point, Rect};

pub mod cpu;
pub mod recorder;

/// Immediate-mode drawing. Shapes are filled without stroke.
pub trait RasterSurface {
    /// Replace the current transform. Later fills are mapped through it.
    fn set_transform(&mut self, transform: Affine);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    /// Fill a closed polygon (nonzero winding). Fewer than three points draw nothing.
    fn fill_polygon(&mut self, points: &[Point], color: Color);
}

/// Vector path drawing. Paths are filled in canvas coordinates.
pub trait PathSurface {
    fn fill_path(&mut self, path: &BezPath, color: Color);
}

/// A render target that supports both capability contracts.
pub trait Surface: RasterSurface + PathSurface {
    /// Discard everything drawn so far and reset to the surface's clear color
    /// and the identity transform.
    fn clear(&mut self);
}

/// Build a closed polyline path. Returns `None` for fewer than three points.
pub(crate) fn polygon_path(points: &[Point]) -> Option<BezPath> {
    let (first, rest) = points.split_first()?;
    if rest.len() < 2 {
        return None;
    }
    let mut path = BezPath::new();
    path.move_to(*first);
    for p in rest {
        path.line_to(*p);
    }
    path.close_path();
    Some(path)
}
