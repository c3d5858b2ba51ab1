use std::{fmt, fs, io, path::Path};

use tmdump_common::ArrayIndex;

use super::{Mesh, Section};
use crate::Float;

/// Emits the dump format read by [MeshReader](super::MeshReader): 1-based references, a
/// sequential index column, markers only if the mesh carries them.
impl<Real: Float, Idx: ArrayIndex> fmt::Display for Mesh<Real, Idx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = |idx: Idx| idx.index() + 1;

        writeln!(f, "{} {}", Section::Nodes, self.nodes.len())?;
        for (i, p) in self.nodes.iter().enumerate() {
            writeln!(f, "{}\t{}\t{}", i + 1, p.x, p.y)?;
        }

        for bdry in &self.boundaries {
            writeln!(f, "{} {} {}", Section::Boundary, bdry.id, bdry.edges.len())?;
            for (i, (e, marker)) in bdry.marked_edges().enumerate() {
                write!(f, "{}\t{}\t{}", i + 1, n(e.a()), n(e.b()))?;
                match marker {
                    Some(m) => writeln!(f, "\t{m}")?,
                    None => writeln!(f)?,
                }
            }
        }

        writeln!(f, "{} {}", Section::Front, self.front.len())?;
        for (i, e) in self.front.iter().enumerate() {
            writeln!(f, "{}\t{}\t{}", i + 1, n(e.a()), n(e.b()))?;
        }

        writeln!(f, "{} {}", Section::Triangles, self.triangles.len())?;
        for (i, t) in self.triangles.iter().enumerate() {
            let [n0, n1, n2] = t.0.map(n);
            writeln!(f, "{}\t{n0}\t{n1}\t{n2}", i + 1)?;
        }

        if let Some(neighbors) = &self.neighbors {
            writeln!(f, "{} {}", Section::Neighbors, neighbors.len())?;
            for (i, adj) in neighbors.iter().enumerate() {
                let [t0, t1, t2] = adj.map(|t| t.map_or(-1, |t| n(t) as i64));
                writeln!(f, "{}\t{t0}\t{t1}\t{t2}", i + 1)?;
            }
        }
        Ok(())
    }
}

impl<Real: Float, Idx: ArrayIndex> Mesh<Real, Idx> {
    /// Write `self` to `path` in the dump format.
    pub fn write(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::Mesh;

    #[test]
    fn rewrite_is_canonical() {
        let src = "> from the generator\n\
                   NODES 3\n\
                   0\t  0.00000\t  0.00000\n\
                   0\t  1.00000\t  0.00000\n\
                   0\t  0.50000\t  1.00000\n\
                   BOUNDARY 7 3\n\
                   0\t 1\t 2\t 4\n\
                   0\t 2\t 3\t 4\n\
                   0\t 3\t 1\t 5\n\
                   FRONT 0\n\
                   TRIANGLES 1\n\
                   0\t1\t2\t3\n\
                   NEIGHBORS 1\n\
                   0\t-1\t-1\t-1\n";
        let mesh: Mesh = src.parse().unwrap();
        assert_eq!(
            mesh.to_string(),
            "NODES 3\n\
             1\t0\t0\n\
             2\t1\t0\n\
             3\t0.5\t1\n\
             BOUNDARY 7 3\n\
             1\t1\t2\t4\n\
             2\t2\t3\t4\n\
             3\t3\t1\t5\n\
             FRONT 0\n\
             TRIANGLES 1\n\
             1\t1\t2\t3\n\
             NEIGHBORS 1\n\
             1\t-1\t-1\t-1\n"
        );
    }
}
