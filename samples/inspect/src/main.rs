use std::{collections::BTreeSet, io, path::PathBuf, process::ExitCode};

use clap::Parser;
use tmdump::{Layer, Mesh, MeshReader, QuadDump, Rect};

mod cli;
use cli::{Cli, Command};

#[derive(Debug, thiserror::Error)]
enum InspectError {
    #[error(transparent)]
    Read(#[from] tmdump::Error),
    #[error("couldn't write {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

pub fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::initialize_tracing(&cli.log_filter, cli.log_format);

    let res = match cli.command {
        Command::Mesh {
            file,
            step,
            strict,
            require_neighbors,
            rewrite,
        } => {
            let reader = MeshReader::new()
                .strict_indices(strict)
                .require_neighbors(require_neighbors);
            inspect_mesh(reader, file, step, rewrite)
        }
        Command::Qtree { file, rewrite } => inspect_qtree(file, rewrite),
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[tracing::instrument(skip(reader))]
fn inspect_mesh(
    reader: MeshReader,
    file: PathBuf,
    step: Option<usize>,
    rewrite: Option<PathBuf>,
) -> Result<(), InspectError> {
    let mesh: Mesh = reader.read(&file)?;
    tracing::info!("loaded mesh dump");

    println!("nodes      {}", mesh.nodes().len());
    for bdry in mesh.boundaries() {
        println!("boundary   {} ({} edges)", bdry.id(), bdry.edges().len());
    }
    if let Some(markers) = mesh.markers() {
        for (marker, edges) in &markers {
            println!("marker     {marker} ({} edges)", edges.len());
        }
    }
    println!("front      {}", mesh.front().len());
    println!("triangles  {}", mesh.triangles().len());
    if let Some(adj) = mesh.neighbors() {
        let interior = adj.iter().filter(|t| t.iter().all(Option::is_some)).count();
        println!("interior   {interior}");
    }
    if let Some(bb) = mesh.bounds() {
        print_bounds(&bb);
    }

    if let Some(step) = step {
        for (i, tri) in mesh.triangle_prefix(step).iter().enumerate() {
            let [a, b, c] = mesh.triangle_points(tri);
            println!(
                "{i}\t({}, {})\t({}, {})\t({}, {})",
                a.x, a.y, b.x, b.y, c.x, c.y
            );
        }
    }

    if let Some(path) = rewrite {
        tracing::info!(?path, "rewriting mesh dump");
        mesh.write(&path)
            .map_err(|source| InspectError::Write { path, source })?;
    }
    Ok(())
}

#[tracing::instrument]
fn inspect_qtree(file: PathBuf, rewrite: Option<PathBuf>) -> Result<(), InspectError> {
    let dump: QuadDump = QuadDump::read(&file)?;
    tracing::info!(quads = dump.len(), "loaded quadtree dump");

    println!("quads      {}", dump.len());
    let layers: BTreeSet<Layer> = dump.layers().into_iter().collect();
    for layer in layers {
        println!("layer {layer:<4} {}", dump.at_layer(layer).count());
    }
    if let Some(bb) = dump.bounds() {
        print_bounds(&bb);
    }

    if let Some(path) = rewrite {
        tracing::info!(?path, "rewriting quadtree dump");
        dump.write(&path)
            .map_err(|source| InspectError::Write { path, source })?;
    }
    Ok(())
}

fn print_bounds(bb: &Rect<f64>) {
    println!(
        "bounds     ({}, {}) .. ({}, {}), {} x {}",
        bb.mins.x,
        bb.mins.y,
        bb.maxs.x,
        bb.maxs.y,
        bb.width(),
        bb.height()
    );
}
