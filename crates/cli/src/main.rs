use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use planar_regions::prelude::*;

mod graph_io;
mod provenance;

use graph_io::{load_graph, write_json, FaceRecord, GraphFile};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Trace faces of planar graphs and query them")]
struct Cmd {
    /// Log debug output from the tracer
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, ValueEnum)]
enum PredicateArg {
    Ray,
    Winding,
}

impl From<PredicateArg> for Predicate {
    fn from(p: PredicateArg) -> Self {
        match p {
            PredicateArg::Ray => Predicate::RayCast,
            PredicateArg::Winding => Predicate::Winding,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// List interior faces; with --out, write them as JSON plus a provenance sidecar
    Faces {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the id of the face containing (x, y), or "outside"
    Locate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        #[arg(long, value_enum, default_value_t = PredicateArg::Ray)]
        predicate: PredicateArg,
    },
    /// Print the faces sharing an edge with --face
    Neighbors {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        face: usize,
    },
    /// Breadth-first neighbor map and layers starting at --face
    Layers {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        face: usize,
    },
    /// Write a random jittered grid graph
    Sample {
        #[arg(long, default_value_t = 4)]
        rows: usize,
        #[arg(long, default_value_t = 4)]
        cols: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0.5)]
        diagonal_prob: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Faces { input, out } => faces(input, out),
        Action::Locate {
            input,
            x,
            y,
            predicate,
        } => locate(input, x, y, predicate.into()),
        Action::Neighbors { input, face } => neighbors(input, face),
        Action::Layers { input, face } => layers(input, face),
        Action::Sample {
            rows,
            cols,
            seed,
            diagonal_prob,
            out,
        } => sample(rows, cols, seed, diagonal_prob, out),
        Action::Report => report(),
    }
}

fn extract(input: &Path) -> Result<Subdivision> {
    let graph = load_graph(input)?;
    let snap = Subdivision::extract(&graph)
        .with_context(|| format!("extracting faces from {}", input.display()))?;
    for defect in snap.defects() {
        tracing::warn!(%defect, "input is probably not planar");
    }
    Ok(snap)
}

fn faces(input: PathBuf, out: Option<PathBuf>) -> Result<()> {
    let snap = extract(&input)?;
    let records: Vec<FaceRecord> = snap.faces().iter().map(FaceRecord::from).collect();
    match out {
        Some(out) => {
            write_json(&out, &records)?;
            let payload = provenance::Payload::new(
                "faces",
                json!({ "input": input.to_string_lossy() }),
            )
            .with_summary(json!({
                "vertices": snap.vertices().len(),
                "faces": snap.faces().len(),
                "external_faces": snap.external_face_count(),
                "defects": snap.defects().len(),
            }));
            let sidecar = provenance::write_sidecar(&out, payload)?;
            tracing::info!(
                out = %out.display(),
                sidecar = %sidecar.display(),
                faces = records.len(),
                "wrote faces"
            );
        }
        None => {
            for rec in &records {
                println!(
                    "face {} {} indices={:?} neighbors={:?} centroid=({:.3}, {:.3})",
                    rec.id, rec.color, rec.indices, rec.neighbors, rec.centroid[0], rec.centroid[1]
                );
            }
        }
    }
    Ok(())
}

fn locate(input: PathBuf, x: f64, y: f64, predicate: Predicate) -> Result<()> {
    if !x.is_finite() || !y.is_finite() {
        bail!("query point ({x}, {y}) is not finite");
    }
    let snap = extract(&input)?;
    match snap.point_locate_with(Vec2::new(x, y), predicate) {
        Some(id) => println!("{id}"),
        None => println!("outside"),
    }
    Ok(())
}

fn neighbors(input: PathBuf, face: usize) -> Result<()> {
    let snap = extract(&input)?;
    let ids = snap.neighbors_of(FaceId(face))?;
    let ids: Vec<usize> = ids.into_iter().map(|id| id.0).collect();
    println!("{}", serde_json::to_string(&ids)?);
    Ok(())
}

fn layers(input: PathBuf, face: usize) -> Result<()> {
    let snap = extract(&input)?;
    let map = snap.neighbor_layers(FaceId(face))?;
    let entries: serde_json::Map<String, serde_json::Value> = map
        .iter()
        .map(|(id, ns)| {
            let ns: Vec<usize> = ns.iter().map(|n| n.0).collect();
            (id.to_string(), json!(ns))
        })
        .collect();
    let layers: Vec<Vec<usize>> = map
        .layers()
        .into_iter()
        .map(|layer| layer.into_iter().map(|id| id.0).collect())
        .collect();
    let doc = json!({ "start": face, "neighbors": entries, "layers": layers });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn sample(rows: usize, cols: usize, seed: u64, diagonal_prob: f64, out: PathBuf) -> Result<()> {
    let cfg = GridCfg {
        rows,
        cols,
        diagonal_prob,
        ..GridCfg::default()
    };
    let graph = draw_grid_graph(cfg, ReplayToken { seed, index: 0 });
    write_json(&out, &GraphFile::from_graph(&graph))?;
    let payload = provenance::Payload::new(
        "sample",
        json!({
            "rows": rows,
            "cols": cols,
            "seed": seed,
            "spacing": cfg.spacing,
            "jitter": cfg.jitter,
            "diagonal_prob": diagonal_prob,
        }),
    )
    .with_summary(json!({
        "vertices": graph.vertex_count(),
        "edges": graph.undirected_edge_count(),
    }));
    provenance::write_sidecar(&out, payload)?;
    tracing::info!(
        out = %out.display(),
        vertices = graph.vertex_count(),
        edges = graph.undirected_edge_count(),
        "wrote sample graph"
    );
    Ok(())
}

fn report() -> Result<()> {
    let doc = json!({
        "code_rev": provenance::current_git_rev(),
        "engine_version": planar_regions::VERSION,
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
