use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::color::hex::Color;
use crate::foundation::error::{BackdropError, BackdropResult};

/// Environment variable overriding the custom palette location.
pub const PALETTE_PATH_ENV: &str = "BACKDROP_PALETTE_PATH";
pub const DEFAULT_PALETTE_FILE: &str = "backdrop-custom-palette.json";

/// Minimum number of colors accepted by [`CustomPaletteStore::save`].
pub const MIN_CUSTOM_COLORS: usize = 3;

/// A single user-defined palette stored as a JSON array of `#RRGGBB` strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomPaletteStore {
    path: PathBuf,
}

impl CustomPaletteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `$BACKDROP_PALETTE_PATH`, or [`DEFAULT_PALETTE_FILE`] in the working directory.
    pub fn from_env() -> Self {
        match std::env::var_os(PALETTE_PATH_ENV) {
            Some(p) if !p.is_empty() => Self::new(p),
            _ => Self::new(DEFAULT_PALETTE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored palette. A missing file or an empty array is `None`.
    pub fn load(&self) -> BackdropResult<Option<Vec<Color>>> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(anyhow::Error::new(err)
                    .context(format!("read custom palette '{}'", self.path.display()))
                    .into());
            }
        };
        let colors: Vec<Color> = serde_json::from_str(&text)?;
        Ok((!colors.is_empty()).then_some(colors))
    }

    /// Replace the stored palette. Fewer than [`MIN_CUSTOM_COLORS`] colors is rejected and
    /// leaves the file untouched.
    pub fn save(&self, colors: &[Color]) -> BackdropResult<()> {
        if colors.len() < MIN_CUSTOM_COLORS {
            return Err(BackdropError::validation(format!(
                "custom palette needs at least {MIN_CUSTOM_COLORS} colors, got {}",
                colors.len()
            )));
        }
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create palette dir '{}'", parent.display()))?;
        }
        let json = serde_json::to_string(colors)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("write custom palette '{}'", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), colors = colors.len(), "saved custom palette");
        Ok(())
    }

    /// Remove the stored palette. Returns whether a file was removed.
    pub fn delete(&self) -> BackdropResult<bool> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(anyhow::Error::new(err)
                .context(format!("delete custom palette '{}'", self.path.display()))
                .into()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/store.rs"]
mod tests;
