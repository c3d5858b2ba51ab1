use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use nalgebra::Point2;
use tmdump_common::ArrayIndex;

use super::{Boundary, BoundaryId, Edge, Marker, Mesh, Neighbors, Section, Triangle};
use crate::{
    error::{Error, FormatError, FormatErrorKind},
    text::{self, parse_token, Line},
    Float,
};

/// Path reported for dumps parsed from memory.
pub const IN_MEMORY: &str = "<string>";

/// Options for reading [Meshes](Mesh).
///
/// The default reader is lenient about the leading index column of each data line and accepts
/// dumps with or without a `NEIGHBORS` section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeshReader {
    strict_indices: bool,
    require_neighbors: bool,
}

impl MeshReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the leading index column of each data line to count up from 1 within its section.
    pub fn strict_indices(mut self, strict: bool) -> Self {
        self.strict_indices = strict;
        self
    }

    /// Reject dumps without a `NEIGHBORS` section.
    pub fn require_neighbors(mut self, require: bool) -> Self {
        self.require_neighbors = require;
        self
    }

    /// Read and parse the dump at `path`.
    ///
    /// # Errors
    ///
    /// * [`Io`](Error::Io) if the file can't be read.
    /// * [`Format`](Error::Format) if its contents are malformed.
    pub fn read<Real: Float, Idx: ArrayIndex>(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<Mesh<Real, Idx>, Error> {
        let path = path.as_ref();
        let src = fs::read_to_string(path)?;
        Ok(self.parse(&src, path)?)
    }

    /// Parse a dump held in memory. `path` is only used to label errors.
    pub fn parse<Real: Float, Idx: ArrayIndex>(
        &self,
        src: &str,
        path: impl AsRef<Path>,
    ) -> Result<Mesh<Real, Idx>, FormatError> {
        let parser = Parser {
            options: *self,
            path: path.as_ref(),
            lines: text::strip_comments(src).collect(),
            pos: 0,
            last_line: src.lines().count().max(1),
            previous: None,
        };
        let res = parser.run();
        #[cfg(feature = "tracing")]
        trace_parse(path.as_ref(), &res);
        res
    }
}

impl<Real: Float, Idx: ArrayIndex> Mesh<Real, Idx> {
    /// Read the dump at `path` with the default [MeshReader].
    pub fn read(path: impl AsRef<Path>) -> Result<Self, Error> {
        MeshReader::default().read(path)
    }
}

impl<Real: Float, Idx: ArrayIndex> FromStr for Mesh<Real, Idx> {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MeshReader::default().parse(s, IN_MEMORY)
    }
}

/// What the parser finds when it looks at the next line.
enum Next<'src> {
    Eof,
    Header(Section, Line<'src>),
    /// A keyword which introduces no known section.
    Unknown(Line<'src>),
    Data(Line<'src>),
}

struct Parser<'src, 'p> {
    options: MeshReader,
    path: &'p Path,
    lines: Vec<Line<'src>>,
    pos: usize,
    /// Line number reported for errors at the end of the input.
    last_line: usize,
    /// The section most recently read, and its declared count.
    previous: Option<(Section, usize)>,
}

impl<'src, 'p> Parser<'src, 'p> {
    fn fail<T>(&self, line: usize, kind: FormatErrorKind) -> Result<T, FormatError> {
        Err(kind.at(PathBuf::from(self.path), line))
    }

    fn peek(&self) -> Next<'src> {
        let Some(line) = self.lines.get(self.pos).copied() else {
            return Next::Eof;
        };
        match line.keyword() {
            Some(kw) => match Section::from_keyword(kw) {
                Some(section) => Next::Header(section, line),
                None => Next::Unknown(line),
            },
            None => Next::Data(line),
        }
    }

    /// Report whatever stands where one of `allowed` was expected.
    fn unexpected<T>(&self, allowed: &[Section]) -> Result<T, FormatError> {
        let expected = if allowed.is_empty() {
            "end of file".to_owned()
        } else {
            allowed
                .iter()
                .map(|s| s.keyword())
                .collect::<Vec<_>>()
                .join(" or ")
        };
        match self.peek() {
            Next::Eof => self.fail(self.last_line, FormatErrorKind::UnexpectedEof(expected)),
            Next::Header(_, line) | Next::Unknown(line) => self.fail(
                line.number,
                FormatErrorKind::UnexpectedSection {
                    expected,
                    found: line.text.trim().to_owned(),
                },
            ),
            Next::Data(line) => match self.previous {
                Some((section, declared)) => {
                    self.fail(line.number, FormatErrorKind::TrailingData { section, declared })
                }
                None => self.fail(
                    line.number,
                    FormatErrorKind::MissingHeader {
                        expected: Section::Nodes,
                        found: line.text.trim().to_owned(),
                    },
                ),
            },
        }
    }

    /// Consume the header of `section`, returning its arguments (everything after the keyword).
    fn header(&mut self, section: Section) -> Result<(Line<'src>, Vec<&'src str>), FormatError> {
        let line = match self.peek() {
            Next::Header(s, line) if s == section => line,
            _ => return self.unexpected(&[section]),
        };
        self.pos += 1;
        Ok((line, line.tokens().skip(1).collect()))
    }

    /// Parse the single count argument of a header.
    fn count(&self, line: Line<'src>, args: &[&str]) -> Result<usize, FormatError> {
        match args {
            [tok] => parse_token(tok).or_else(|kind| self.fail(line.number, kind)),
            _ => self.fail(
                line.number,
                FormatErrorKind::FieldCount {
                    expected: 2,
                    found: args.len() + 1,
                },
            ),
        }
    }

    /// Consume the `declared` data lines of `section`, handing each to `f` along with its
    /// position in the section.
    fn data<T>(
        &mut self,
        section: Section,
        declared: usize,
        mut f: impl FnMut(&Self, usize, Line<'src>) -> Result<T, FormatErrorKind>,
    ) -> Result<Vec<T>, FormatError> {
        let mut res = Vec::with_capacity(declared.min(self.lines.len() - self.pos));
        for i in 0..declared {
            let line = match self.peek() {
                Next::Data(line) => line,
                Next::Header(_, line) | Next::Unknown(line) => {
                    return self.fail(
                        line.number,
                        FormatErrorKind::CountMismatch {
                            section,
                            declared,
                            found: i,
                        },
                    )
                }
                Next::Eof => {
                    return self.fail(
                        self.last_line,
                        FormatErrorKind::CountMismatch {
                            section,
                            declared,
                            found: i,
                        },
                    )
                }
            };
            let item = f(self, i, line).or_else(|kind| self.fail(line.number, kind))?;
            res.push(item);
            self.pos += 1;
        }
        self.previous = Some((section, declared));
        Ok(res)
    }

    fn check_sequence(&self, position: usize, token: &str) -> Result<(), FormatErrorKind> {
        if !self.options.strict_indices {
            return Ok(());
        }
        let expected = position + 1;
        match token.parse::<usize>() {
            Ok(found) if found == expected => Ok(()),
            _ => Err(FormatErrorKind::NonSequentialIndex {
                expected,
                found: token.to_owned(),
            }),
        }
    }

    fn run<Real: Float, Idx: ArrayIndex>(mut self) -> Result<Mesh<Real, Idx>, FormatError> {
        // NODES
        let (line, args) = match self.peek() {
            Next::Header(Section::Nodes, _) => self.header(Section::Nodes)?,
            Next::Eof => return self.unexpected(&[Section::Nodes]),
            Next::Header(_, line) | Next::Unknown(line) | Next::Data(line) => {
                return self.fail(
                    line.number,
                    FormatErrorKind::MissingHeader {
                        expected: Section::Nodes,
                        found: line.text.trim().to_owned(),
                    },
                )
            }
        };
        let n_nodes = self.count(line, &args)?;
        let nodes = self.data(Section::Nodes, n_nodes, |p, i, line| {
            let fields = line.exact_fields(3)?;
            p.check_sequence(i, fields[0])?;
            Ok(Point2::new(
                parse_token::<Real>(fields[1])?,
                parse_token::<Real>(fields[2])?,
            ))
        })?;

        // BOUNDARY*
        let mut boundaries: Vec<Boundary<Idx>> = Vec::new();
        let mut marked: Option<bool> = None;
        while let Next::Header(Section::Boundary, _) = self.peek() {
            let (line, args) = self.header(Section::Boundary)?;
            if args.len() != 2 {
                return self.fail(
                    line.number,
                    FormatErrorKind::FieldCount {
                        expected: 3,
                        found: args.len() + 1,
                    },
                );
            }
            let id: BoundaryId = parse_token(args[0]).or_else(|kind| self.fail(line.number, kind))?;
            if boundaries.iter().any(|b| b.id == id) {
                return self.fail(line.number, FormatErrorKind::DuplicateBoundary(id));
            }
            let declared = self.count(line, &args[1..])?;
            let rows = self.data(Section::Boundary, declared, |p, i, line| {
                let fields = line.fields();
                let has_marker = match fields.len() {
                    3 => false,
                    4 => true,
                    found => {
                        return Err(FormatErrorKind::FieldCount {
                            expected: if marked == Some(true) { 4 } else { 3 },
                            found,
                        })
                    }
                };
                if *marked.get_or_insert(has_marker) != has_marker {
                    return Err(FormatErrorKind::InconsistentMarkers);
                }
                p.check_sequence(i, fields[0])?;
                let edge = Edge::new(
                    node_ref(fields[1], nodes.len())?,
                    node_ref(fields[2], nodes.len())?,
                );
                let marker: Option<Marker> = if has_marker {
                    Some(parse_token(fields[3])?)
                } else {
                    None
                };
                Ok((edge, marker))
            })?;
            let (edges, markers): (Vec<_>, Vec<_>) = rows.into_iter().unzip();
            boundaries.push(Boundary {
                id,
                edges,
                markers: Some(markers.into_iter().flatten().collect()),
            });
        }
        // a group without edges can't tell whether the dump is marked; follow the others
        if marked != Some(true) {
            for b in &mut boundaries {
                b.markers = None;
            }
        }

        // FRONT
        if !matches!(self.peek(), Next::Header(Section::Front, _)) {
            return self.unexpected(&[Section::Boundary, Section::Front]);
        }
        let (line, args) = self.header(Section::Front)?;
        let n_front = self.count(line, &args)?;
        let front = self.data(Section::Front, n_front, |p, i, line| {
            let fields = line.exact_fields(3)?;
            p.check_sequence(i, fields[0])?;
            Ok(Edge::new(
                node_ref(fields[1], nodes.len())?,
                node_ref(fields[2], nodes.len())?,
            ))
        })?;

        // TRIANGLES
        let (line, args) = self.header(Section::Triangles)?;
        let n_tris = self.count(line, &args)?;
        let triangles = self.data(Section::Triangles, n_tris, |p, i, line| {
            let fields = line.exact_fields(4)?;
            p.check_sequence(i, fields[0])?;
            Ok(Triangle::new(
                node_ref(fields[1], nodes.len())?,
                node_ref(fields[2], nodes.len())?,
                node_ref(fields[3], nodes.len())?,
            ))
        })?;

        // NEIGHBORS?
        let neighbors = match self.peek() {
            Next::Header(Section::Neighbors, _) => {
                let (line, args) = self.header(Section::Neighbors)?;
                let declared = self.count(line, &args)?;
                if declared != n_tris {
                    return self.fail(
                        line.number,
                        FormatErrorKind::NeighborCount {
                            declared,
                            triangles: n_tris,
                        },
                    );
                }
                Some(self.data(Section::Neighbors, declared, |p, i, line| {
                    let fields = line.exact_fields(4)?;
                    p.check_sequence(i, fields[0])?;
                    let mut res: Neighbors<Idx> = [None; 3];
                    for (slot, tok) in res.iter_mut().zip(&fields[1..]) {
                        *slot = triangle_ref(tok, n_tris)?;
                    }
                    Ok(res)
                })?)
            }
            Next::Eof if self.options.require_neighbors => {
                return self.unexpected(&[Section::Neighbors])
            }
            Next::Eof => None,
            _ => return self.unexpected(&[Section::Neighbors]),
        };

        if !matches!(self.peek(), Next::Eof) {
            return self.unexpected(&[]);
        }

        Ok(Mesh {
            nodes,
            boundaries,
            front,
            triangles,
            neighbors,
        })
    }
}

#[cfg(feature = "tracing")]
fn trace_parse<Real: Float, Idx: ArrayIndex>(
    path: &Path,
    res: &Result<Mesh<Real, Idx>, FormatError>,
) {
    match res {
        Ok(mesh) => tracing::debug!(
            ?path,
            nodes = mesh.nodes.len(),
            boundaries = mesh.boundaries.len(),
            front = mesh.front.len(),
            triangles = mesh.triangles.len(),
            "parsed mesh dump"
        ),
        Err(e) => tracing::debug!(error = %e, "malformed mesh dump"),
    }
}

/// Convert a 1-based reference into one of `count` entries into a 0-based index.
fn one_based<Idx: ArrayIndex>(token: &str, count: usize) -> Result<Idx, FormatErrorKind> {
    let index: i64 = parse_token(token)?;
    if index < 1 || index as u64 > count as u64 {
        return Err(FormatErrorKind::IndexOutOfRange { index, max: count });
    }
    let index = (index - 1) as usize;
    Idx::from_usize(index).ok_or(FormatErrorKind::IndexOverflow(index))
}

#[inline]
fn node_ref<Idx: ArrayIndex>(token: &str, n_nodes: usize) -> Result<Idx, FormatErrorKind> {
    one_based(token, n_nodes)
}

/// A neighbor reference; `-1` stands for "no neighbor".
fn triangle_ref<Idx: ArrayIndex>(token: &str, n_tris: usize) -> Result<Option<Idx>, FormatErrorKind> {
    if token == "-1" {
        return Ok(None);
    }
    one_based(token, n_tris).map(Some)
}
