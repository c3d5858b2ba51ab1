//! Planar geometry shared by meshes and quadtrees.

mod quadrant;
mod rect;

pub use quadrant::*;
pub use rect::*;
