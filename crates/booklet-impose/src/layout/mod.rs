//! Layout calculation modules for imposition
//!
//! This module handles all the calculations for booklet imposition:
//! - Padding and saddle-stitch page ordering (which source page goes where)
//! - Sheet geometry (sheet size, scale, slot offsets)
//! - The combined plan consumed by the renderer

mod geometry;
mod plan;
mod sequence;
mod types;

pub use geometry::*;
pub use plan::*;
pub use sequence::*;
pub use types::*;
