//! Readers and writers for the text dumps of a 2-D advancing-front mesh generator: the mesh
//! itself ([Mesh]) and the quadtree used to index it ([QuadDump]).
//!
//! Both readers load the whole file, parse it in one pass, and either return the complete model
//! or the first [FormatError] encountered, located by path and line.
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

pub mod error;
pub mod geom;
pub mod mesh;
pub mod qtree;
pub mod text;
mod traits;

pub use error::{Error, FormatError, FormatErrorKind};
pub use geom::*;
pub use mesh::{
    Boundary, BoundaryId, Edge, Marker, Mesh, MeshReader, Neighbors, Section, Triangle,
};
pub use qtree::{Layer, Quad, QuadDump};
pub use tmdump_common::ArrayIndex;
pub use traits::*;
