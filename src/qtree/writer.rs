use std::{fmt, fs, io, path::Path};

use super::QuadDump;
use crate::Float;

/// One `layer\tx_min\ty_min\tx_max\ty_max` line per quad, in order.
impl<Real: Float> fmt::Display for QuadDump<Real> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for q in &self.quads {
            let (i, a) = (&q.rect.mins, &q.rect.maxs);
            writeln!(f, "{}\t{}\t{}\t{}\t{}", q.layer, i.x, i.y, a.x, a.y)?;
        }
        Ok(())
    }
}

impl<Real: Float> QuadDump<Real> {
    /// Write `self` to `path` in the dump format.
    pub fn write(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, self.to_string())
    }
}
