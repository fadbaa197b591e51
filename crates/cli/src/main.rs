use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use perimeter::hull::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use perimeter::hull::{shortest_perimeter_with_stats, HullCfg, Perimeter};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull runner: hull files, random clouds, timings")]
struct Cmd {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Upper bound on vertex insertions (defaults to the input size)
    #[arg(long, global = true)]
    max_insertions: Option<usize>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
    Square,
    Disk,
    Ring,
}

impl From<Shape> for CloudShape {
    fn from(s: Shape) -> Self {
        match s {
            Shape::Square => CloudShape::Square,
            Shape::Disk => CloudShape::Disk,
            Shape::Ring => CloudShape::Ring,
        }
    }
}

#[derive(clap::Args, Clone, Copy, Debug)]
struct CloudArgs {
    #[arg(long, value_enum, default_value_t = Shape::Disk)]
    shape: Shape,
    #[arg(long, default_value_t = 20)]
    count: usize,
    #[arg(long, default_value_t = -20.0, allow_negative_numbers = true)]
    lo: f64,
    #[arg(long, default_value_t = 20.0, allow_negative_numbers = true)]
    hi: f64,
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

impl CloudArgs {
    fn cfg(&self) -> CloudCfg {
        CloudCfg {
            shape: self.shape.into(),
            count: self.count,
            lo: self.lo,
            hi: self.hi,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Hull of a point file (.json pairs or .csv with x,y columns)
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Hull of a random cloud, printed as text
    Random {
        #[command(flatten)]
        cloud: CloudArgs,
        /// Optional JSON output (with provenance sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Average wall-clock seconds per hull over fresh clouds
    Bench {
        #[command(flatten)]
        cloud: CloudArgs,
        #[arg(long, default_value_t = 10)]
        iters: u32,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let cfg = HullCfg {
        max_insertions: cmd.max_insertions,
    };
    match cmd.action {
        Action::Hull { input, out } => hull(input, out, cfg),
        Action::Random { cloud, out } => random(cloud, out, cfg),
        Action::Bench { cloud, iters } => bench(cloud, iters, cfg),
        Action::Report => report(),
    }
}

fn hull(input: PathBuf, out: PathBuf, cfg: HullCfg) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "hull");
    let points = io::read_points(&input)?;
    let start = Instant::now();
    let (perim, stats) = shortest_perimeter_with_stats(&points, cfg)?;
    let elapsed = start.elapsed().as_secs_f64();
    tracing::info!(
        n = points.len(),
        vertices = perim.vertex_count(),
        insertions = stats.insertions,
        elapsed,
        "hull_done"
    );
    write_with_provenance(
        &out,
        &perim,
        json!({
            "input": input.to_string_lossy(),
            "n": points.len(),
            "max_insertions": cfg.max_insertions,
        }),
        json!({
            "vertices": perim.vertex_count(),
            "insertions": stats.insertions,
            "edges_checked": stats.edges_checked,
            "max_scope_depth": stats.max_scope_depth,
            "seconds": elapsed,
        }),
    )
}

fn random(cloud: CloudArgs, out: Option<PathBuf>, cfg: HullCfg) -> Result<()> {
    tracing::info!(shape = ?cloud.shape, count = cloud.count, seed = cloud.seed, "random");
    let points = draw_cloud(
        cloud.cfg(),
        ReplayToken {
            seed: cloud.seed,
            index: 0,
        },
    )?;
    let start = Instant::now();
    let (perim, stats) = shortest_perimeter_with_stats(&points, cfg)?;
    let elapsed = start.elapsed().as_secs_f64();

    let closed: Vec<[f64; 2]> = perim.points().iter().map(|p| [p.x, p.y]).collect();
    println!("Results:");
    println!("{} : {:?}", perim.vertex_count(), closed);
    println!("{elapsed} seconds");

    if let Some(out) = out {
        write_with_provenance(
            &out,
            &perim,
            json!({
                "shape": format!("{:?}", cloud.shape),
                "count": cloud.count,
                "lo": cloud.lo,
                "hi": cloud.hi,
                "seed": cloud.seed,
                "max_insertions": cfg.max_insertions,
            }),
            json!({
                "vertices": perim.vertex_count(),
                "insertions": stats.insertions,
                "seconds": elapsed,
            }),
        )?;
    }
    Ok(())
}

fn bench(cloud: CloudArgs, iters: u32, cfg: HullCfg) -> Result<()> {
    tracing::info!(shape = ?cloud.shape, count = cloud.count, iters, "bench");
    let iters = iters.max(1);
    let mut tok = ReplayToken {
        seed: cloud.seed,
        index: 0,
    };
    let mut elapsed = 0.0;
    for _ in 0..iters {
        let points = draw_cloud(cloud.cfg(), tok)?;
        tok = tok.next();
        let start = Instant::now();
        let (_perim, stats) = shortest_perimeter_with_stats(&points, cfg)?;
        elapsed += start.elapsed().as_secs_f64();
        tracing::debug!(insertions = stats.insertions, "bench_iter");
    }
    println!("{} seconds", elapsed / f64::from(iters));
    Ok(())
}

fn report() -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&provenance::report_block())?
    );
    Ok(())
}

#[track_caller]
fn write_with_provenance(
    out: &Path,
    perim: &Perimeter,
    params: serde_json::Value,
    metrics: serde_json::Value,
) -> Result<()> {
    io::write_json(out, &io::HullDoc::from(perim))?;
    let payload = provenance::Payload::new(params).with_metrics(metrics);
    let prov = provenance::write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "written");
    Ok(())
}
