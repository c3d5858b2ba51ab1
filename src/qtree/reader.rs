use std::{fs, path::Path, str::FromStr};

use nalgebra::Point2;

use super::{Quad, QuadDump};
use crate::{
    error::{Error, FormatError, FormatErrorKind},
    mesh::IN_MEMORY,
    text::{self, parse_token, Line},
    Float, Rect,
};

/// Fields of a quadtree line: layer, x_min, y_min, x_max, y_max.
const QUAD_FIELDS: usize = 5;

impl<Real: Float> QuadDump<Real> {
    /// Read and parse the quadtree dump at `path`.
    ///
    /// # Errors
    ///
    /// * [`Io`](Error::Io) if the file can't be read.
    /// * [`Format`](Error::Format) if any line is malformed.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let src = fs::read_to_string(path)?;
        Ok(Self::parse(&src, path)?)
    }

    /// Parse a dump held in memory. `path` is only used to label errors.
    ///
    /// Every line which isn't a comment is one quad; layers are taken as given.
    pub fn parse(src: &str, path: impl AsRef<Path>) -> Result<Self, FormatError> {
        let quads = text::strip_comments(src)
            .map(|line| parse_quad(line).map_err(|kind| kind.at(path.as_ref(), line.number)))
            .collect::<Result<Vec<_>, _>>()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(path = ?path.as_ref(), quads = quads.len(), "parsed quadtree dump");
        Ok(Self { quads })
    }
}

impl<Real: Float> FromStr for QuadDump<Real> {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, IN_MEMORY)
    }
}

fn parse_quad<Real: Float>(line: Line<'_>) -> Result<Quad<Real>, FormatErrorKind> {
    let fields = line.exact_fields(QUAD_FIELDS)?;
    let coord = |i: usize| parse_token::<Real>(fields[i]);
    Ok(Quad {
        layer: parse_token(fields[0])?,
        rect: Rect::new(
            Point2::new(coord(1)?, coord(2)?),
            Point2::new(coord(3)?, coord(4)?),
        ),
    })
}

#[cfg(test)]
mod tests {
    use nalgebra::point;

    use super::*;

    #[test]
    fn two_layers() {
        let dump: QuadDump = "0\t0.0\t0.0\t10.0\t10.0\n1\t0.0\t0.0\t5.0\t5.0\n"
            .parse()
            .unwrap();
        assert_eq!(dump.layers(), vec![0, 1]);
        let rects: Vec<_> = dump.rects().copied().collect();
        assert_eq!(
            rects,
            vec![
                Rect::new(point![0.0, 0.0], point![10.0, 10.0]),
                Rect::new(point![0.0, 0.0], point![5.0, 5.0]),
            ]
        );
    }

    #[test]
    fn generator_padding_and_comments() {
        let src = "> quadtree\n3\t  0.12500\t  0.25000\t  0.25000\t  0.37500\n> end\n";
        let dump: QuadDump<f32> = src.parse().unwrap();
        assert_eq!(dump.quads()[0].layer, 3);
        assert_eq!(dump.quads()[0].rect.maxs, point![0.25f32, 0.375]);
    }

    #[test]
    fn four_fields() {
        let err = "0\t0\t0\t1\t1\n> note\n1\t0\t0\t1\n"
            .parse::<QuadDump>()
            .unwrap_err();
        assert_eq!(err.line, 3);
        assert_eq!(
            err.kind,
            FormatErrorKind::FieldCount {
                expected: 5,
                found: 4
            }
        );
    }

    #[test]
    fn layers_are_not_validated() {
        let dump: QuadDump = "-1\t0\t0\t1\t1\n0\t0\t0\t1\t1\n".parse().unwrap();
        assert_eq!(dump.layers(), vec![-1, 0]);
        assert_eq!(dump.at_layer(-1).count(), 1);
    }

    #[test]
    fn trailing_tab() {
        let err = "0\t0\t0\t1\t1\t\n".parse::<QuadDump>().unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(
            err.kind,
            FormatErrorKind::FieldCount {
                expected: 5,
                found: 6
            }
        );
    }

    #[test]
    fn bad_number() {
        let err = "0\t0\tzero\t1\t1\n".parse::<QuadDump>().unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.kind, FormatErrorKind::InvalidNumber("zero".into()));
        assert_eq!(err.path, std::path::PathBuf::from(IN_MEMORY));
    }

    #[test]
    fn empty_dump() {
        let dump: QuadDump = "> nothing here\n".parse().unwrap();
        assert!(dump.is_empty());
        assert_eq!(dump.bounds(), None);
    }
}
