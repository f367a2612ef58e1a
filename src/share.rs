//! Share links.
//!
//! A wallpaper is shared as a query string:
//!
//! ```text
//! palette=<id>&template=<id>[&waveCount=<n>&amplitude=<n>]
//! colors=<hex>,<hex>,...&template=<id>[&waveCount=<n>&amplitude=<n>]
//! ```
//!
//! Hex colors are written without `#`. Decoding is lenient: unknown keys are ignored,
//! `colors` wins over `palette`, and wave values are clamped into range.

use crate::color::hex::Color;
use crate::foundation::error::{BackdropError, BackdropResult};
use crate::geometry::wave::WaveParams;
use crate::palette::{CustomPaletteStore, resolve_palette};
use crate::render::RenderRequest;
use crate::templates::TemplateId;

/// Where a shared wallpaper's colors come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaletteRef {
    /// A catalog id, resolved by the receiver.
    Id(String),
    /// Explicit colors, in order.
    Colors(Vec<Color>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareConfig {
    pub palette: PaletteRef,
    pub template: TemplateId,
    pub waves: Option<WaveParams>,
}

impl ShareConfig {
    pub fn to_query(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::with_capacity(4);
        match &self.palette {
            PaletteRef::Id(id) => pairs.push(("palette", urlencoding::encode(id).into_owned())),
            PaletteRef::Colors(colors) => {
                let list: Vec<String> = colors.iter().map(|c| c.to_bare_hex()).collect();
                pairs.push(("colors", list.join(",")));
            }
        }
        pairs.push(("template", self.template.as_str().to_owned()));
        if let Some(w) = self.waves {
            pairs.push(("waveCount", w.wave_count.to_string()));
            pairs.push(("amplitude", w.amplitude.to_string()));
        }

        pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Parse a query string, with or without a leading `?`.
    pub fn from_query(query: &str) -> BackdropResult<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut palette_id = None;
        let mut colors = None;
        let mut template = None;
        let mut wave_count = None;
        let mut amplitude = None;

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode_component(raw)?;
            match key {
                "palette" => palette_id = Some(value),
                "colors" => colors = Some(parse_color_list(&value)?),
                "template" => template = Some(value.parse::<TemplateId>()?),
                "waveCount" => wave_count = Some(parse_int(key, &value)?),
                "amplitude" => amplitude = Some(parse_int(key, &value)?),
                _ => {}
            }
        }

        let palette = match (colors, palette_id) {
            (Some(colors), _) => PaletteRef::Colors(colors),
            (None, Some(id)) if !id.is_empty() => PaletteRef::Id(id),
            _ => {
                return Err(BackdropError::validation(
                    "share link needs a palette or colors parameter",
                ));
            }
        };
        let template = template
            .ok_or_else(|| BackdropError::validation("share link needs a template parameter"))?;

        let waves = if wave_count.is_some() || amplitude.is_some() {
            let d = WaveParams::default();
            Some(WaveParams::clamped(
                wave_count.unwrap_or(i64::from(d.wave_count)),
                amplitude.unwrap_or(i64::from(d.amplitude)),
            ))
        } else {
            None
        };

        Ok(Self {
            palette,
            template,
            waves,
        })
    }

    /// Turn the link into a render request, resolving palette ids through the catalog.
    pub fn to_request(&self, store: &CustomPaletteStore) -> BackdropResult<RenderRequest> {
        let colors = match &self.palette {
            PaletteRef::Colors(colors) => colors.clone(),
            PaletteRef::Id(id) => resolve_palette(id, store)?.colors,
        };
        let mut request = RenderRequest::new(colors, self.template);
        request.waves = self.waves;
        Ok(request)
    }
}

fn decode_component(raw: &str) -> BackdropResult<String> {
    let raw = raw.replace('+', " ");
    urlencoding::decode(&raw)
        .map(|s| s.into_owned())
        .map_err(|e| BackdropError::validation(format!("invalid percent-encoding: {e}")))
}

fn parse_color_list(value: &str) -> BackdropResult<Vec<Color>> {
    let colors = value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| match s.strip_prefix('#') {
            Some(_) => Color::from_hex(s),
            None => Color::from_bare_hex(s),
        })
        .collect::<BackdropResult<Vec<_>>>()?;
    if colors.is_empty() {
        return Err(BackdropError::validation("colors parameter is empty"));
    }
    Ok(colors)
}

fn parse_int(key: &str, value: &str) -> BackdropResult<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| BackdropError::validation(format!("{key} must be an integer, got \"{value}\"")))
}

#[cfg(test)]
#[path = "../tests/unit/share.rs"]
mod tests;
