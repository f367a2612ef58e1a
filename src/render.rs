use serde::{Deserialize, Serialize};

use crate::color::hex::Color;
use crate::foundation::core::Canvas;
use crate::foundation::error::{BackdropError, BackdropResult};
use crate::geometry::wave::WaveParams;
use crate::surface::Surface;
use crate::surface::cpu::CpuSurface;
use crate::templates::{DrawArgs, TemplateId, template};

pub mod frame;

pub use frame::FrameRGBA;

/// Surface-level settings that are not part of a wallpaper's identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderSettings {
    /// Fill applied on every clear. `None` leaves the surface transparent.
    pub clear_rgba: Option<[u8; 4]>,
}

/// Everything needed to reproduce one wallpaper.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub colors: Vec<Color>,
    pub template: TemplateId,
    /// Ignored by templates that don't support wave settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waves: Option<WaveParams>,
    #[serde(default)]
    pub canvas: Canvas,
}

impl RenderRequest {
    pub fn new(colors: Vec<Color>, template: TemplateId) -> Self {
        Self {
            colors,
            template,
            waves: None,
            canvas: Canvas::default(),
        }
    }

    pub fn with_waves(mut self, waves: WaveParams) -> Self {
        self.waves = Some(waves);
        self
    }

    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    /// Parse a request from JSON.
    pub fn from_json_str(s: &str) -> BackdropResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn validate(&self) -> BackdropResult<()> {
        if self.colors.is_empty() {
            return Err(BackdropError::validation("palette must have at least one color"));
        }
        Canvas::new(self.canvas.width, self.canvas.height)?;
        Ok(())
    }

    fn draw_args(&self) -> DrawArgs<'_> {
        DrawArgs::new(
            self.canvas.width_f64(),
            self.canvas.height_f64(),
            &self.colors,
        )
        .with_waves(self.waves)
    }
}

/// File name used when exporting without an explicit path: `wallpaper-<template>.png`.
pub fn default_output_name(template: TemplateId) -> String {
    format!("wallpaper-{template}.png")
}

/// Clear `surface` and paint `request` onto it at `request.canvas` size.
///
/// The surface is expected to match the request canvas. A palette shorter than the template's
/// minimum leaves the surface cleared and returns `false`.
#[tracing::instrument(skip(surface, request), fields(template = %request.template, colors = request.colors.len()))]
pub fn render_into<S: Surface>(surface: &mut S, request: &RenderRequest) -> bool {
    surface.clear();

    let def = template(request.template);
    if !def.accepts(&request.colors) {
        tracing::debug!(
            min_colors = def.min_colors,
            "palette too short for template; nothing drawn"
        );
        return false;
    }
    def.draw_on(surface, &request.draw_args())
}

/// Render `request` on a fresh CPU surface and read back the pixels.
pub fn render(request: &RenderRequest, settings: &RenderSettings) -> BackdropResult<FrameRGBA> {
    request.validate()?;
    let mut surface = CpuSurface::new(request.canvas, settings.clone())?;
    render_into(&mut surface, request);
    Ok(surface.read_frame())
}

#[cfg(test)]
#[path = "../tests/unit/render.rs"]
mod tests;
