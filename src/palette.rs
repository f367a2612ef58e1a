//! Palette catalog.
//!
//! Built-in presets plus one user-defined palette persisted on disk. The rendering core never
//! sees palette identity; callers resolve an id here and pass the colors on.

use crate::color::hex::Color;
use crate::foundation::error::{BackdropError, BackdropResult};

pub mod presets;
pub mod store;

pub use presets::{PRESETS, PresetPalette, preset};
pub use store::CustomPaletteStore;

/// Id that resolves to the stored custom palette.
pub const CUSTOM_PALETTE_ID: &str = "custom";

/// A palette with its catalog identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub id: String,
    pub name: String,
    pub colors: Vec<Color>,
}

impl From<&PresetPalette> for Palette {
    fn from(p: &PresetPalette) -> Self {
        Self {
            id: p.id.to_owned(),
            name: p.name.to_owned(),
            colors: p.colors.to_vec(),
        }
    }
}

/// Resolve a palette id: a preset, or [`CUSTOM_PALETTE_ID`] for the stored palette.
pub fn resolve_palette(id: &str, store: &CustomPaletteStore) -> BackdropResult<Palette> {
    if id == CUSTOM_PALETTE_ID {
        return store
            .load()?
            .map(|colors| Palette {
                id: CUSTOM_PALETTE_ID.to_owned(),
                name: "Custom Palette".to_owned(),
                colors,
            })
            .ok_or_else(|| BackdropError::validation("no custom palette has been saved"));
    }
    preset(id)
        .map(Palette::from)
        .ok_or_else(|| BackdropError::validation(format!("unknown palette id \"{id}\"")))
}

#[cfg(test)]
#[path = "../tests/unit/palette.rs"]
mod tests;
