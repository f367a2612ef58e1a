//! Hex colors and the lightness/hue heuristics templates use to order and group them.

pub(crate) mod hex;
pub(crate) mod metrics;
