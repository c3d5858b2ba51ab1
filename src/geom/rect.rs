use nalgebra::{point, Point2};

use super::Quadrant;
use crate::Float;

/// Axis-Aligned Rectangle
///
/// Quadtree cells and the bounds of a mesh are both described by one of these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<Real: Float> {
    pub mins: Point2<Real>,
    pub maxs: Point2<Real>,
}

impl<Real: Float> Rect<Real> {
    #[inline]
    pub fn new(mins: Point2<Real>, maxs: Point2<Real>) -> Self {
        Self { mins, maxs }
    }

    /// The smallest rectangle containing every point of `points`, or `None` if there are none.
    pub fn enclosing<'p>(points: impl IntoIterator<Item = &'p Point2<Real>>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut res = Self::new(*first, *first);
        for p in points {
            res.expand_to(p);
        }
        Some(res)
    }

    #[inline]
    pub fn width(&self) -> Real {
        self.maxs.x - self.mins.x
    }

    #[inline]
    pub fn height(&self) -> Real {
        self.maxs.y - self.mins.y
    }

    /// Determine whether a point `p` lies within `self`, borders included.
    #[inline]
    pub fn contains(&self, p: &Point2<Real>) -> bool {
        let Self { mins: i, maxs: a } = self;
        (p.x >= i.x && p.y >= i.y) && (p.x <= a.x && p.y <= a.y)
    }

    /// Grow `self` such that it contains `p`.
    pub fn expand_to(&mut self, p: &Point2<Real>) {
        self.mins = self.mins.inf(p);
        self.maxs = self.maxs.sup(p);
    }

    /// The smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    /// Determine the center of `self`.
    #[inline]
    pub fn center(&self) -> Point2<Real> {
        let Self { mins: i, maxs: a } = self;
        point![(i.x + a.x) / Real::TWO, (i.y + a.y) / Real::TWO]
    }

    /// Determine the [Quadrant] of `p`.
    ///
    /// This still works even if `p` ∉ `self`: the result is given as if taking the quadrant of `p`
    /// within an infinitely-large rectangle sharing a center with `self`.
    #[inline]
    pub fn quadrant_of(&self, p: &Point2<Real>) -> Quadrant {
        let c = self.center();
        Quadrant::new(p.x > c.x, p.y > c.y)
    }

    /// Construct a [Rect] such that the result is the `q`th quadrant of `self`.
    pub fn child(&self, q: Quadrant) -> Self {
        let Self { mins: i, maxs: a } = self;
        let c = self.center();
        let (x0, x1) = if q.i() { (c.x, a.x) } else { (i.x, c.x) };
        let (y0, y1) = if q.j() { (c.y, a.y) } else { (i.y, c.y) };
        Self {
            mins: point![x0, y0],
            maxs: point![x1, y1],
        }
    }

    /// The cell `depth` subdivisions below `self` which contains `p`.
    ///
    /// At `depth == 0` this is `self`. Returns `None` if `p` ∉ `self`.
    pub fn cell_containing(&self, p: &Point2<Real>, depth: u32) -> Option<Self> {
        if !self.contains(p) {
            return None;
        }
        let mut res = *self;
        for _ in 0..depth {
            res = res.child(res.quadrant_of(p));
        }
        Some(res)
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::point;

    use super::*;

    fn square(len: f64) -> Rect<f64> {
        Rect::new(point![0.0, 0.0], point![len, len])
    }

    #[test]
    fn children() {
        let root = square(8.0);
        assert_eq!(
            root.child(Quadrant::NE),
            Rect::new(point![4.0, 4.0], point![8.0, 8.0])
        );
        assert_eq!(
            root.child(Quadrant::SE),
            Rect::new(point![4.0, 0.0], point![8.0, 4.0])
        );
        assert_eq!(root.quadrant_of(&point![1.0, 7.0]), Quadrant::NW);
        // the center belongs to the lower quadrant on both axes
        assert_eq!(root.quadrant_of(&point![4.0, 4.0]), Quadrant::SW);
    }

    #[test]
    fn cells() {
        let root = square(8.0);
        assert_eq!(
            root.cell_containing(&point![7.0, 1.0], 2),
            Some(Rect::new(point![6.0, 0.0], point![8.0, 2.0]))
        );
        assert_eq!(root.cell_containing(&point![9.0, 1.0], 1), None);
        assert_eq!(root.cell_containing(&point![1.0, 1.0], 0), Some(root));
    }

    #[test]
    fn enclosing_points() {
        let pts = [point![1.0, -2.0], point![-1.0, 3.0], point![0.5, 0.5]];
        let bb = Rect::enclosing(&pts).unwrap();
        assert_eq!(bb, Rect::new(point![-1.0, -2.0], point![1.0, 3.0]));
        assert_eq!((bb.width(), bb.height()), (2.0, 5.0));
        assert!(Rect::<f64>::enclosing(&[]).is_none());
    }
}
