//! Shared geometry for templates: diagonal stripes (by rotation and by intersection) and
//! corner-anchored wave fills.

pub mod intersect;
pub mod smooth;
pub mod stripes;
pub mod wave;
