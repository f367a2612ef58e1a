use kurbo::Shape;

use crate::color::hex::Color;
use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect};
use crate::foundation::error::{BackdropError, BackdropResult};
use crate::render::RenderSettings;
use crate::render::frame::FrameRGBA;
use crate::surface::{PathSurface, RasterSurface, Surface, polygon_path};

/// Tolerance used when flattening circles into Bézier segments, in pixels.
const CIRCLE_TOLERANCE: f64 = 0.1;

/// CPU raster surface powered by `vello_cpu`.
///
/// Draw calls are recorded into a `vello_cpu::RenderContext`; pixels are produced on
/// [`CpuSurface::read_frame`].
pub struct CpuSurface {
    canvas: Canvas,
    settings: RenderSettings,
    transform: Affine,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("canvas", &self.canvas)
            .field("settings", &self.settings)
            .field("transform", &self.transform)
            .finish_non_exhaustive()
    }
}

impl CpuSurface {
    pub fn new(canvas: Canvas, settings: RenderSettings) -> BackdropResult<Self> {
        let width_u16: u16 = canvas
            .width
            .try_into()
            .map_err(|_| BackdropError::render("surface width exceeds u16"))?;
        let height_u16: u16 = canvas
            .height
            .try_into()
            .map_err(|_| BackdropError::render("surface height exceeds u16"))?;
        if width_u16 == 0 || height_u16 == 0 {
            return Err(BackdropError::render("surface must be at least 1x1"));
        }

        let mut surface = Self {
            canvas,
            settings,
            transform: Affine::IDENTITY,
            ctx: vello_cpu::RenderContext::new(width_u16, height_u16),
            pixmap: vello_cpu::Pixmap::new(width_u16, height_u16),
        };
        surface.clear();
        Ok(surface)
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Rasterize everything drawn since the last clear and read the pixels back.
    ///
    /// Repeated calls without intervening draws return identical frames.
    pub fn read_frame(&mut self) -> FrameRGBA {
        clear_pixmap(&mut self.pixmap, [0, 0, 0, 0]);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);

        FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn set_paint(&mut self, color: Color) {
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(color.r, color.g, color.b, 255));
    }
}

impl RasterSurface for CpuSurface {
    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_transform(affine_to_cpu(self.transform));
        self.set_paint(color);
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        let path = kurbo::Circle::new(center, radius).to_path(CIRCLE_TOLERANCE);
        self.ctx.set_transform(affine_to_cpu(self.transform));
        self.set_paint(color);
        self.ctx.fill_path(&bezpath_to_cpu(&path));
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        let Some(path) = polygon_path(points) else {
            return;
        };
        self.ctx.set_transform(affine_to_cpu(self.transform));
        self.set_paint(color);
        self.ctx.fill_path(&bezpath_to_cpu(&path));
    }
}

impl PathSurface for CpuSurface {
    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.set_paint(color);
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }
}

impl Surface for CpuSurface {
    fn clear(&mut self) {
        self.ctx.reset();
        self.transform = Affine::IDENTITY;
        clear_pixmap(&mut self.pixmap, [0, 0, 0, 0]);

        if let Some([r, g, b, a]) = self.settings.clear_rgba
            && a > 0
        {
            self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            self.ctx
                .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            self.ctx.fill_rect(&rect_to_cpu(self.canvas.rect()));
        }
    }
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/surface/cpu.rs"]
mod tests;
