//! Print hulls of a few random clouds.
//!
//! Usage:
//!   cargo run -p perimeter --example random_hull -- disk
//!   cargo run -p perimeter --example random_hull -- ring
//!   cargo run -p perimeter --example random_hull -- square

use std::time::Instant;

use perimeter::prelude::*;

fn main() {
    let shape = match std::env::args().nth(1).as_deref().unwrap_or("disk") {
        "disk" => CloudShape::Disk,
        "ring" => CloudShape::Ring,
        "square" => CloudShape::Square,
        other => {
            eprintln!("usage: random_hull [disk|ring|square] (got {other})");
            return;
        }
    };
    let cfg = CloudCfg {
        shape,
        count: 20,
        lo: -20.0,
        hi: 20.0,
    };
    let mut tok = ReplayToken {
        seed: 2025,
        index: 0,
    };
    for i in 0..3 {
        let pts = draw_cloud(cfg, tok).unwrap();
        tok = tok.next();
        let start = Instant::now();
        let hull = shortest_perimeter(&pts).unwrap();
        let elapsed = start.elapsed().as_secs_f64();
        let verts: Vec<[f64; 2]> = hull.points().iter().map(|p| [p.x, p.y]).collect();
        println!("sample {i}: {} : {:?}", hull.vertex_count(), verts);
        println!("length={:.3} seconds={elapsed:.6}", hull.length());
    }
}
