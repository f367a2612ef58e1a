use crate::color::hex::Color;
use crate::foundation::core::{Affine, BezPath, Point, Rect};
use crate::surface::{PathSurface, RasterSurface, Surface};

/// One recorded fill, with the transform that was current when it was issued.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Rect {
        rect: Rect,
        transform: Affine,
        color: Color,
    },
    Circle {
        center: Point,
        radius: f64,
        transform: Affine,
        color: Color,
    },
    Polygon {
        points: Vec<Point>,
        transform: Affine,
        color: Color,
    },
    Path {
        path: BezPath,
        color: Color,
    },
}

impl DrawCommand {
    pub fn color(&self) -> Color {
        match self {
            Self::Rect { color, .. }
            | Self::Circle { color, .. }
            | Self::Polygon { color, .. }
            | Self::Path { color, .. } => *color,
        }
    }
}

/// A surface that keeps a log of draw calls instead of pixels.
///
/// Useful for asserting geometry exactly, without anti-aliasing in the way.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    transform: Affine,
    commands: Vec<DrawCommand>,
    clears: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of times [`Surface::clear`] was called.
    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn rects(&self) -> impl Iterator<Item = (Rect, Affine, Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect {
                rect,
                transform,
                color,
            } => Some((*rect, *transform, *color)),
            _ => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = (&BezPath, Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Path { path, color } => Some((path, *color)),
            _ => None,
        })
    }
}

impl RasterSurface for RecordingSurface {
    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect {
            rect,
            transform: self.transform,
            color,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            transform: self.transform,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        if points.len() < 3 {
            return;
        }
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            transform: self.transform,
            color,
        });
    }
}

impl PathSurface for RecordingSurface {
    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.commands.push(DrawCommand::Path {
            path: path.clone(),
            color,
        });
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.transform = Affine::IDENTITY;
        self.commands.clear();
        self.clears += 1;
    }
}
