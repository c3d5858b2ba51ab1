//! Properties which hold for every well-formed dump.

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use tmdump::{text, Mesh, QuadDump};

fn below(g: &mut Gen, n: usize) -> usize {
    usize::arbitrary(g) % n
}

/// A random, valid mesh dump in text form.
#[derive(Debug, Clone)]
struct MeshDump {
    text: String,
    n_nodes: usize,
    /// (id, edge count) of each boundary, in order.
    boundaries: Vec<(i64, usize)>,
}

impl Arbitrary for MeshDump {
    fn arbitrary(g: &mut Gen) -> Self {
        let n_nodes = below(g, 12);
        let mut out = Vec::new();
        out.push(format!("NODES {n_nodes}"));
        for i in 0..n_nodes {
            let x = f64::from(i16::arbitrary(g)) / 8.0;
            let y = f64::from(i16::arbitrary(g)) / 8.0;
            out.push(format!("{}\t{x:9.5}\t{y:9.5}", i + 1));
        }

        let node = |g: &mut Gen| below(g, n_nodes) + 1;
        let marked = bool::arbitrary(g);
        let mut boundaries = Vec::new();
        if n_nodes > 0 {
            let mut id = i64::from(i8::arbitrary(g));
            for _ in 0..below(g, 4) {
                id += 1 + below(g, 3) as i64;
                let count = below(g, 6);
                out.push(format!("BOUNDARY {id} {count}"));
                for i in 0..count {
                    let mut line = format!("{}\t{}\t{}", i + 1, node(g), node(g));
                    if marked {
                        line.push_str(&format!("\t{}", below(g, 4)));
                    }
                    out.push(line);
                }
                boundaries.push((id, count));
            }
        }

        let n_front = if n_nodes > 0 { below(g, 6) } else { 0 };
        out.push(format!("FRONT {n_front}"));
        for i in 0..n_front {
            out.push(format!("{}\t{}\t{}", i + 1, node(g), node(g)));
        }

        let n_tris = if n_nodes > 0 { below(g, 8) } else { 0 };
        out.push(format!("TRIANGLES {n_tris}"));
        for i in 0..n_tris {
            out.push(format!("{}\t{}\t{}\t{}", i + 1, node(g), node(g), node(g)));
        }

        if bool::arbitrary(g) {
            out.push(format!("NEIGHBORS {n_tris}"));
            for i in 0..n_tris {
                let mut adj = || match below(g, n_tris + 1) {
                    0 => -1,
                    t => t as i64,
                };
                out.push(format!("{}\t{}\t{}\t{}", i + 1, adj(), adj(), adj()));
            }
        }

        // comments may go anywhere
        let mut text = String::new();
        for line in out {
            if below(g, 4) == 0 {
                text.push_str("> comment\n");
            }
            text.push_str(&line);
            text.push('\n');
        }
        Self {
            text,
            n_nodes,
            boundaries,
        }
    }
}

#[quickcheck]
fn declared_counts_hold(dump: MeshDump) -> bool {
    let mesh: Mesh = dump.text.parse().unwrap();
    let groups: Vec<_> = mesh
        .boundaries()
        .iter()
        .map(|b| (b.id(), b.edges().len()))
        .collect();
    mesh.nodes().len() == dump.n_nodes && groups == dump.boundaries
}

#[quickcheck]
fn references_are_in_range(dump: MeshDump) -> bool {
    let mesh: Mesh = dump.text.parse().unwrap();
    let n = mesh.nodes().len() as u32;
    let edges_ok = mesh
        .boundary_edges()
        .chain(mesh.front())
        .all(|e| e.a() < n && e.b() < n);
    let tris_ok = mesh.triangles().iter().all(|t| t.0.iter().all(|&i| i < n));
    let n_tris = mesh.triangles().len() as u32;
    let adj_ok = mesh
        .neighbors()
        .map_or(true, |adj| adj.iter().flatten().flatten().all(|&t| t < n_tris));
    edges_ok && tris_ok && adj_ok
}

#[quickcheck]
fn rewrite_roundtrips(dump: MeshDump) -> bool {
    let mesh: Mesh = dump.text.parse().unwrap();
    let again: Mesh = mesh.to_string().parse().unwrap();
    mesh == again
}

#[quickcheck]
fn comments_change_nothing(dump: MeshDump) -> bool {
    let stripped = text::without_comments(&dump.text);
    let with: Mesh = dump.text.parse().unwrap();
    let without: Mesh = stripped.parse().unwrap();
    with == without && text::without_comments(&stripped) == stripped
}

#[quickcheck]
fn stripping_is_idempotent(lines: Vec<String>) -> bool {
    let src = lines.join("\n");
    let once = text::without_comments(&src);
    text::without_comments(&once) == once
}

#[quickcheck]
fn quadtree_roundtrips(cells: Vec<(i8, i16, i16, u8)>) -> bool {
    let mut src = String::new();
    for (layer, x, y, size) in &cells {
        let (x, y, s) = (f64::from(*x), f64::from(*y), f64::from(*size));
        src.push_str(&format!("{layer}\t{x}\t{y}\t{}\t{}\n", x + s, y + s));
    }
    let dump: QuadDump = src.parse().unwrap();
    let again: QuadDump = dump.to_string().parse().unwrap();
    dump.len() == cells.len()
        && dump.layers() == cells.iter().map(|c| i32::from(c.0)).collect::<Vec<_>>()
        && dump == again
}
