//! Wallpaper templates.
//!
//! Every template is a pure function of `(colors, width, height, wave params)` painted onto a
//! caller-provided surface. Templates are listed once, in display order, in [`TEMPLATES`].
//!
//! A template draws against exactly one capability contract, recorded in [`TemplateDraw`].
//! Adding a template means writing one draw function and one registry entry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::hex::Color;
use crate::foundation::error::{BackdropError, BackdropResult};
use crate::geometry::wave::WaveParams;
use crate::surface::{PathSurface, RasterSurface};

pub mod circle_grid;
pub mod stripes;
pub mod waves;

pub use stripes::RETRO_LINES_END_WEIGHT;

/// Stable template identifiers, as used in share links and on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    VerticalStripes,
    EqualStripes,
    RetroLines,
    RetroStripes,
    CircleGrid,
    FlowingWaves,
    FlowingWavesSmooth,
}

impl TemplateId {
    pub const ALL: [TemplateId; 7] = [
        Self::VerticalStripes,
        Self::EqualStripes,
        Self::RetroLines,
        Self::RetroStripes,
        Self::CircleGrid,
        Self::FlowingWaves,
        Self::FlowingWavesSmooth,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::VerticalStripes => "vertical-stripes",
            Self::EqualStripes => "equal-stripes",
            Self::RetroLines => "retro-lines",
            Self::RetroStripes => "retro-stripes",
            Self::CircleGrid => "circle-grid",
            Self::FlowingWaves => "flowing-waves",
            Self::FlowingWavesSmooth => "flowing-waves-smooth",
        }
    }

    /// Registry entry for this id.
    pub fn def(self) -> &'static TemplateDef {
        template(self)
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = BackdropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| BackdropError::validation(format!("unknown template id \"{s}\"")))
    }
}

/// Inputs shared by every draw function.
#[derive(Clone, Copy, Debug)]
pub struct DrawArgs<'a> {
    pub width: f64,
    pub height: f64,
    pub colors: &'a [Color],
    /// Only read by templates that support wave settings.
    pub waves: Option<WaveParams>,
}

impl<'a> DrawArgs<'a> {
    pub fn new(width: f64, height: f64, colors: &'a [Color]) -> Self {
        Self {
            width,
            height,
            colors,
            waves: None,
        }
    }

    pub fn with_waves(mut self, waves: Option<WaveParams>) -> Self {
        self.waves = waves;
        self
    }
}

/// Capability a template draws against.
#[derive(Clone, Copy)]
pub enum TemplateDraw {
    /// Immediate-mode fills under a transform.
    Raster(fn(&mut dyn RasterSurface, &DrawArgs<'_>)),
    /// Filled Bézier paths.
    Vector(fn(&mut dyn PathSurface, &DrawArgs<'_>)),
}

impl fmt::Debug for TemplateDraw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raster(_) => f.write_str("Raster"),
            Self::Vector(_) => f.write_str("Vector"),
        }
    }
}

/// One registry entry.
#[derive(Clone, Copy, Debug)]
pub struct TemplateDef {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
    /// Fewer colors than this and the template draws nothing.
    pub min_colors: usize,
    pub supports_wave_settings: bool,
    pub draw: TemplateDraw,
}

impl TemplateDef {
    pub fn accepts(&self, colors: &[Color]) -> bool {
        colors.len() >= self.min_colors
    }

    /// Dispatch to the draw function. Returns `false` when the palette is too short and
    /// nothing was drawn.
    pub fn draw_on<S>(&self, surface: &mut S, args: &DrawArgs<'_>) -> bool
    where
        S: RasterSurface + PathSurface,
    {
        if !self.accepts(args.colors) {
            return false;
        }
        let args = if self.supports_wave_settings {
            *args
        } else {
            args.with_waves(None)
        };
        match self.draw {
            TemplateDraw::Raster(f) => f(surface, &args),
            TemplateDraw::Vector(f) => f(surface, &args),
        }
        true
    }
}

/// Every template, in display order.
pub static TEMPLATES: [TemplateDef; 7] = [
    TemplateDef {
        id: TemplateId::VerticalStripes,
        name: "Vertical Stripes",
        description: "5 equal width vertical stripes",
        min_colors: stripes::VERTICAL_MIN_COLORS,
        supports_wave_settings: false,
        draw: TemplateDraw::Raster(stripes::draw_vertical_stripes),
    },
    TemplateDef {
        id: TemplateId::EqualStripes,
        name: "Equal Stripes",
        description: "Equal width diagonal stripes using all colors",
        min_colors: stripes::EQUAL_MIN_COLORS,
        supports_wave_settings: false,
        draw: TemplateDraw::Raster(stripes::draw_equal_stripes),
    },
    TemplateDef {
        id: TemplateId::RetroLines,
        name: "Retro Lines",
        description: "Classic diagonal stripes with larger end colors",
        min_colors: stripes::RETRO_LINES_MIN_COLORS,
        supports_wave_settings: false,
        draw: TemplateDraw::Raster(stripes::draw_retro_lines),
    },
    TemplateDef {
        id: TemplateId::RetroStripes,
        name: "Retro Stripes",
        description: "Variable width stripes with thin accent lines",
        min_colors: stripes::RETRO_STRIPES_MIN_COLORS,
        supports_wave_settings: false,
        draw: TemplateDraw::Raster(stripes::draw_retro_stripes),
    },
    TemplateDef {
        id: TemplateId::CircleGrid,
        name: "Circle Grid",
        description: "8x8 grid of circles with one unique accent circle",
        min_colors: circle_grid::MIN_COLORS,
        supports_wave_settings: false,
        draw: TemplateDraw::Raster(circle_grid::draw_circle_grid),
    },
    TemplateDef {
        id: TemplateId::FlowingWaves,
        name: "Flowing Waves",
        description: "Organic, layered waves flowing from opposite corners",
        min_colors: waves::MIN_COLORS,
        supports_wave_settings: false,
        draw: TemplateDraw::Vector(waves::draw_flowing_waves),
    },
    TemplateDef {
        id: TemplateId::FlowingWavesSmooth,
        name: "Flowing Waves (Smooth)",
        description: "Smooth organic waves with adjustable wave count and amplitude",
        min_colors: waves::MIN_COLORS,
        supports_wave_settings: true,
        draw: TemplateDraw::Vector(waves::draw_flowing_waves_smooth),
    },
];

pub fn templates() -> &'static [TemplateDef] {
    &TEMPLATES
}

pub fn template(id: TemplateId) -> &'static TemplateDef {
    // The registry holds one entry per id, in `TemplateId::ALL` order.
    &TEMPLATES[id as usize]
}

/// Look up a template by its string id.
pub fn template_by_id(id: &str) -> BackdropResult<&'static TemplateDef> {
    id.parse::<TemplateId>().map(template)
}

#[cfg(test)]
#[path = "../tests/unit/templates.rs"]
mod tests;
