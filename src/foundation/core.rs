use crate::foundation::error::{BackdropError, BackdropResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Pixel dimensions of a render target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// 3840×2160, the export resolution of every wallpaper.
    pub const UHD: Canvas = Canvas {
        width: 3840,
        height: 2160,
    };

    pub fn new(width: u32, height: u32) -> BackdropResult<Self> {
        if width == 0 || height == 0 {
            return Err(BackdropError::validation(
                "canvas width and height must be > 0",
            ));
        }
        // vello_cpu addresses pixmaps with u16 coordinates.
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(BackdropError::validation(format!(
                "canvas {width}x{height} exceeds {max}x{max}",
                max = u16::MAX
            )));
        }
        Ok(Self { width, height })
    }

    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }

    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width_f64(), self.height_f64())
    }

    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::UHD
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    pub fn to_straight_rgba(self) -> [u8; 4] {
        fn unpremul(c: u8, a: u8) -> u8 {
            let c = u32::from(c);
            let a = u32::from(a);
            ((c * 255 + a / 2) / a).min(255) as u8
        }

        match self.a {
            0 => [0, 0, 0, 0],
            255 => [self.r, self.g, self.b, 255],
            a => [unpremul(self.r, a), unpremul(self.g, a), unpremul(self.b, a), a],
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
