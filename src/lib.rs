//! Backdrop renders deterministic 4K wallpapers from small color palettes.
//!
//! A wallpaper is a template id plus an ordered palette (and, for the smooth wave template,
//! wave parameters). The same inputs always produce the same pixels:
//!
//! - Pick a template from [`TEMPLATES`] and a palette from [`PRESETS`] or your own colors
//! - Build a [`RenderRequest`]
//! - [`render`] it to a [`FrameRGBA`], or [`render_into`] a surface you own
#![forbid(unsafe_code)]

mod color;
mod foundation;

/// Stripe, intersection and wave geometry shared by templates.
pub mod geometry;
/// Palette catalog and custom palette persistence.
pub mod palette;
/// One-shot rendering API.
pub mod render;
/// Share link encoding.
pub mod share;
/// Drawing surface contracts and implementations.
pub mod surface;
/// Template registry.
pub mod templates;

mod fingerprint;

pub use crate::color::hex::{Color, parse_colors};
pub use crate::color::metrics::{
    Temperature, hue, lightness, sort_by_lightness_asc, sort_by_lightness_desc,
};
pub use crate::fingerprint::{FrameFingerprint, fingerprint_commands, fingerprint_frame};
pub use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8Premul, Vec2};
pub use crate::foundation::error::{BackdropError, BackdropResult};

pub use crate::geometry::stripes::Diagonal;
pub use crate::geometry::wave::WaveParams;
pub use crate::palette::{CustomPaletteStore, PRESETS, Palette, resolve_palette};
pub use crate::render::{FrameRGBA, RenderRequest, RenderSettings, render, render_into};
pub use crate::share::{PaletteRef, ShareConfig};
pub use crate::surface::cpu::CpuSurface;
pub use crate::surface::recorder::{DrawCommand, RecordingSurface};
pub use crate::surface::{PathSurface, RasterSurface, Surface};
pub use crate::templates::{TEMPLATES, TemplateDef, TemplateId, template, template_by_id};
