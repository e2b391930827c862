//! Print the faces of a sample graph and the BFS neighbor layers from face 0.
//!
//! Usage:
//!   cargo run -p planar-regions --example face_layers -- wheel 8
//!   cargo run -p planar-regions --example face_layers -- grid 5

use planar_regions::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let kind = args.next().unwrap_or_else(|| "wheel".to_string());
    let n: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(6);
    let graph = match kind.as_str() {
        "wheel" => wheel_graph(n.max(3), 1.0),
        "grid" => draw_grid_graph(
            GridCfg {
                rows: n,
                cols: n,
                ..GridCfg::default()
            },
            ReplayToken { seed: 2025, index: 0 },
        ),
        _ => {
            eprintln!("usage: face_layers [wheel|grid] [n]");
            return;
        }
    };

    let snap = match Subdivision::extract(&graph) {
        Ok(snap) => snap,
        Err(err) => {
            eprintln!("extraction failed: {err}");
            return;
        }
    };
    println!(
        "V={} E={} interior faces={} external={}",
        graph.vertex_count(),
        graph.undirected_edge_count(),
        snap.faces().len(),
        snap.external_face_count()
    );
    for face in snap.faces() {
        let c = face.centroid();
        println!(
            "  face {:>3} {:<20} len={} area={:.3} centroid=({:.2}, {:.2})",
            face.id(),
            face.color().to_string(),
            face.len(),
            face.area(),
            c.x,
            c.y
        );
    }
    if let Ok(map) = snap.neighbor_layers(FaceId(0)) {
        for (depth, layer) in map.layers().iter().enumerate() {
            let ids: Vec<String> = layer.iter().map(|id| id.to_string()).collect();
            println!("  layer {depth}: {}", ids.join(" "));
        }
    }
}
