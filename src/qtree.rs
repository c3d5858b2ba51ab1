//! Quadtree subdivisions as dumped by the mesh generator's spatial index.
//!
//! The dump is a flat list of leaf cells; nothing links a cell to its parent. The hierarchy can
//! be rebuilt from coordinates, see [QuadDump::parent_cell].

mod reader;
mod writer;

use crate::{Float, Rect};

/// Depth of a quadtree cell, as written in the dump. Not checked against anything.
pub type Layer = i32;

/// A quadtree cell and its depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad<Real: Float = f64> {
    pub layer: Layer,
    pub rect: Rect<Real>,
}

/// A parsed quadtree dump. Cells are kept in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuadDump<Real: Float = f64> {
    pub(crate) quads: Vec<Quad<Real>>,
}

impl<Real: Float> QuadDump<Real> {
    pub fn quads(&self) -> &[Quad<Real>] {
        &self.quads
    }

    pub fn len(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// The layer of each quad, parallel to [Self::quads].
    pub fn layers(&self) -> Vec<Layer> {
        self.quads.iter().map(|q| q.layer).collect()
    }

    pub fn rects(&self) -> impl Iterator<Item = &Rect<Real>> {
        self.quads.iter().map(|q| &q.rect)
    }

    /// Quads at depth `layer`.
    pub fn at_layer(&self, layer: Layer) -> impl Iterator<Item = &Quad<Real>> {
        self.quads.iter().filter(move |q| q.layer == layer)
    }

    pub fn max_layer(&self) -> Option<Layer> {
        self.quads.iter().map(|q| q.layer).max()
    }

    /// The smallest rectangle containing every quad.
    pub fn bounds(&self) -> Option<Rect<Real>> {
        let mut rects = self.rects();
        let first = *rects.next()?;
        Some(rects.fold(first, |acc, r| acc.union(r)))
    }

    /// The cell which the `index`th quad was split from.
    ///
    /// The root is taken to be [Self::bounds], which holds for a dump listing every leaf of a
    /// tree. `None` for quads on layer 0 or below and for out-of-range indices.
    pub fn parent_cell(&self, index: usize) -> Option<Rect<Real>> {
        let quad = self.quads.get(index)?;
        let depth = u32::try_from(quad.layer.checked_sub(1)?).ok()?;
        self.bounds()?.cell_containing(&quad.rect.center(), depth)
    }
}
