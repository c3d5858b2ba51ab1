/// A way to refer to quadrants of a rectangle.
///
/// # Diagram
/// `IJ>A`, where `IJ` are the quadrant coords, and `A` is the corresponding child index.
/// <pre>
/// -----------     J
/// |01>1|11>3|     |
/// |----|----|     ___ I
/// |00>0|10>2|
/// -----------
/// </pre>
#[repr(transparent)]
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Quadrant(pub u8);

impl Quadrant {
    pub const SW: Self = Self(0b00);
    pub const NW: Self = Self(0b01);
    pub const SE: Self = Self(0b10);
    pub const NE: Self = Self(0b11);

    /// Construct a Quadrant from coordinates.
    pub fn new(i: bool, j: bool) -> Self {
        Self((i as u8 * 0b10) | (j as u8))
    }

    /// Whether self lies on the upper side of the `i` (x) axis.
    #[inline]
    pub fn i(self) -> bool {
        self.0 & 0b10 != 0
    }
    /// Whether self lies on the upper side of the `j` (y) axis.
    #[inline]
    pub fn j(self) -> bool {
        self.0 & 0b01 != 0
    }
}

#[cfg(test)]
mod tests {
    use super::Quadrant;

    #[test]
    fn compass() {
        assert_eq!(Quadrant::new(true, true), Quadrant::NE);
        assert_eq!(Quadrant::new(false, true), Quadrant::NW);
        assert_eq!(Quadrant::new(false, false), Quadrant::SW);
        assert_eq!(Quadrant::new(true, false), Quadrant::SE);
        assert!(Quadrant::SE.i() && !Quadrant::SE.j());
    }
}
