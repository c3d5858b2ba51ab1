//! Triangular meshes as dumped by an advancing-front mesh generator.
//!
//! A dump holds the node coordinates, the boundary edges grouped by boundary, the edges of the
//! advancing front at the time of the dump, and the triangles created so far. Node references are
//! 1-based in the text; every index stored in a [Mesh] is 0-based.

mod reader;
mod section;
mod writer;

use std::collections::BTreeMap;

pub use reader::*;
pub use section::*;

use nalgebra::Point2;
use tmdump_common::ArrayIndex;

use crate::{Float, Rect};

/// Identifier of a boundary group.
pub type BoundaryId = i64;

/// Secondary tag of a boundary edge (ex. inlet vs. wall).
pub type Marker = i64;

/// Two connected nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge<Idx = u32>(pub [Idx; 2]);

impl<Idx: ArrayIndex> Edge<Idx> {
    #[inline]
    pub fn new(a: Idx, b: Idx) -> Self {
        Self([a, b])
    }

    #[inline]
    pub fn a(&self) -> Idx {
        self.0[0]
    }

    #[inline]
    pub fn b(&self) -> Idx {
        self.0[1]
    }
}

/// Three nodes forming a triangle, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle<Idx = u32>(pub [Idx; 3]);

impl<Idx: ArrayIndex> Triangle<Idx> {
    #[inline]
    pub fn new(n0: Idx, n1: Idx, n2: Idx) -> Self {
        Self([n0, n1, n2])
    }

    /// The edges of this triangle, `n0 -> n1 -> n2 -> n0`.
    pub fn edges(&self) -> [Edge<Idx>; 3] {
        let [n0, n1, n2] = self.0;
        [Edge::new(n0, n1), Edge::new(n1, n2), Edge::new(n2, n0)]
    }
}

/// Indices of the triangles adjacent to a triangle, if any.
pub type Neighbors<Idx = u32> = [Option<Idx>; 3];

/// A group of boundary edges sharing an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary<Idx = u32> {
    pub(crate) id: BoundaryId,
    pub(crate) edges: Vec<Edge<Idx>>,
    /// One per edge, if the dump carried markers.
    pub(crate) markers: Option<Vec<Marker>>,
}

impl<Idx: ArrayIndex> Boundary<Idx> {
    pub fn id(&self) -> BoundaryId {
        self.id
    }

    pub fn edges(&self) -> &[Edge<Idx>] {
        &self.edges
    }

    /// The marker of each edge, parallel to [Self::edges].
    pub fn markers(&self) -> Option<&[Marker]> {
        self.markers.as_deref()
    }

    /// Edges paired with their marker.
    pub fn marked_edges(&self) -> impl Iterator<Item = (&Edge<Idx>, Option<Marker>)> {
        self.edges.iter().enumerate().map(|(i, e)| {
            (e, self.markers.as_ref().map(|m| m[i]))
        })
    }
}

/// A parsed mesh dump.
///
/// Once read, a mesh is never modified; every node reference it holds is known to be in range.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh<Real: Float = f64, Idx: ArrayIndex = u32> {
    pub(crate) nodes: Vec<Point2<Real>>,
    pub(crate) boundaries: Vec<Boundary<Idx>>,
    pub(crate) front: Vec<Edge<Idx>>,
    pub(crate) triangles: Vec<Triangle<Idx>>,
    pub(crate) neighbors: Option<Vec<Neighbors<Idx>>>,
}

impl<Real: Float, Idx: ArrayIndex> Mesh<Real, Idx> {
    /// Node coordinates, in declaration order.
    pub fn nodes(&self) -> &[Point2<Real>] {
        &self.nodes
    }

    pub fn node(&self, idx: Idx) -> Option<&Point2<Real>> {
        self.nodes.get(idx.index())
    }

    /// Boundary groups, in declaration order.
    pub fn boundaries(&self) -> &[Boundary<Idx>] {
        &self.boundaries
    }

    /// The boundary group with identifier `id`.
    pub fn boundary(&self, id: BoundaryId) -> Option<&Boundary<Idx>> {
        self.boundaries.iter().find(|b| b.id == id)
    }

    /// Every boundary edge, group by group.
    pub fn boundary_edges(&self) -> impl Iterator<Item = &Edge<Idx>> {
        self.boundaries.iter().flat_map(|b| b.edges.iter())
    }

    /// Boundary edges bucketed by marker, across all groups.
    ///
    /// `None` if the dump carried no markers.
    pub fn markers(&self) -> Option<BTreeMap<Marker, Vec<Edge<Idx>>>> {
        if !self.has_markers() {
            return None;
        }
        let mut res: BTreeMap<Marker, Vec<Edge<Idx>>> = BTreeMap::new();
        for (edge, marker) in self.boundaries.iter().flat_map(Boundary::marked_edges) {
            if let Some(m) = marker {
                res.entry(m).or_default().push(*edge);
            }
        }
        Some(res)
    }

    pub fn has_markers(&self) -> bool {
        self.boundaries.iter().any(|b| b.markers.is_some())
    }

    /// Edges of the advancing front.
    pub fn front(&self) -> &[Edge<Idx>] {
        &self.front
    }

    /// Triangles, in the order they were created.
    pub fn triangles(&self) -> &[Triangle<Idx>] {
        &self.triangles
    }

    /// The first `step` triangles; all of them if `step` exceeds the count.
    ///
    /// Used to replay mesh generation one triangle at a time.
    pub fn triangle_prefix(&self, step: usize) -> &[Triangle<Idx>] {
        &self.triangles[..step.min(self.triangles.len())]
    }

    /// Neighbors of each triangle, parallel to [Self::triangles], if the dump included them.
    pub fn neighbors(&self) -> Option<&[Neighbors<Idx>]> {
        self.neighbors.as_deref()
    }

    /// Coordinates of the endpoints of `edge`.
    ///
    /// # Panics
    ///
    /// * `edge` does not belong to `self`
    pub fn edge_points(&self, edge: &Edge<Idx>) -> [Point2<Real>; 2] {
        edge.0.map(|n| self.nodes[n.index()])
    }

    /// Coordinates of the corners of `tri`.
    ///
    /// # Panics
    ///
    /// * `tri` does not belong to `self`
    pub fn triangle_points(&self, tri: &Triangle<Idx>) -> [Point2<Real>; 3] {
        tri.0.map(|n| self.nodes[n.index()])
    }

    /// The smallest rectangle containing every node, or `None` for a mesh without nodes.
    pub fn bounds(&self) -> Option<Rect<Real>> {
        Rect::enclosing(&self.nodes)
    }
}
