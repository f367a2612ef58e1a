use std::fmt;

use xxhash_rust::xxh3::Xxh3;

use crate::foundation::core::{Affine, BezPath, Point, Rect};
use crate::render::frame::FrameRGBA;
use crate::surface::recorder::DrawCommand;

const XXH3_SEED: u64 = 0x3c1f_7a52_e04d_9b68;

/// 128-bit digest of rendered output, used to check that renders are reproducible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameFingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Fingerprint of a frame's dimensions, alpha mode and pixels.
pub fn fingerprint_frame(frame: &FrameRGBA) -> FrameFingerprint {
    let mut h = StableHasher::new();
    h.write_u32(frame.width);
    h.write_u32(frame.height);
    h.write_u8(u8::from(frame.premultiplied));
    h.write_bytes(&frame.data);
    h.finish()
}

/// Fingerprint of a recorded draw log. Geometry is hashed bit-exactly.
pub fn fingerprint_commands(commands: &[DrawCommand]) -> FrameFingerprint {
    let mut h = StableHasher::new();
    h.write_u64(commands.len() as u64);
    for cmd in commands {
        match cmd {
            DrawCommand::Rect {
                rect,
                transform,
                color,
            } => {
                h.write_u8(0);
                h.write_rect(*rect);
                h.write_affine(*transform);
                h.write_bytes(&color.to_rgba8());
            }
            DrawCommand::Circle {
                center,
                radius,
                transform,
                color,
            } => {
                h.write_u8(1);
                h.write_point(*center);
                h.write_f64(*radius);
                h.write_affine(*transform);
                h.write_bytes(&color.to_rgba8());
            }
            DrawCommand::Polygon {
                points,
                transform,
                color,
            } => {
                h.write_u8(2);
                h.write_u64(points.len() as u64);
                for p in points {
                    h.write_point(*p);
                }
                h.write_affine(*transform);
                h.write_bytes(&color.to_rgba8());
            }
            DrawCommand::Path { path, color } => {
                h.write_u8(3);
                h.write_path(path);
                h.write_bytes(&color.to_rgba8());
            }
        }
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_point(&mut self, p: Point) {
        self.write_f64(p.x);
        self.write_f64(p.y);
    }

    fn write_rect(&mut self, r: Rect) {
        for v in [r.x0, r.y0, r.x1, r.y1] {
            self.write_f64(v);
        }
    }

    fn write_affine(&mut self, a: Affine) {
        for c in a.as_coeffs() {
            self.write_f64(c);
        }
    }

    fn write_path(&mut self, path: &BezPath) {
        use kurbo::PathEl;

        let els = path.elements();
        self.write_u64(els.len() as u64);
        for el in els {
            match *el {
                PathEl::MoveTo(p) => {
                    self.write_u8(0);
                    self.write_point(p);
                }
                PathEl::LineTo(p) => {
                    self.write_u8(1);
                    self.write_point(p);
                }
                PathEl::QuadTo(p1, p2) => {
                    self.write_u8(2);
                    self.write_point(p1);
                    self.write_point(p2);
                }
                PathEl::CurveTo(p1, p2, p3) => {
                    self.write_u8(3);
                    self.write_point(p1);
                    self.write_point(p2);
                    self.write_point(p3);
                }
                PathEl::ClosePath => self.write_u8(4),
            }
        }
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/fingerprint.rs"]
mod tests;
