use anyhow::{anyhow, bail, Context, Result};
use perimeter::api::{pairs_from_points, points_from_pairs};
use perimeter::hull::{Perimeter, Point};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Accepted JSON layouts: a bare `[[x, y], ...]` array or `{ "points": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PointsDoc {
    Pairs(Vec<[f64; 2]>),
    Wrapped { points: Vec<[f64; 2]> },
}

/// Hull written by `cli hull`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HullDoc {
    /// Clockwise vertices, no closing duplicate.
    pub vertices: Vec<[f64; 2]>,
    /// Closed ring, first point repeated at the end.
    pub closed: Vec<[f64; 2]>,
    pub length: f64,
    pub area: f64,
}

impl From<&Perimeter> for HullDoc {
    fn from(p: &Perimeter) -> Self {
        Self {
            vertices: pairs_from_points(p.vertices()),
            closed: pairs_from_points(p.points()),
            length: p.length(),
            area: p.signed_area().abs(),
        }
    }
}

/// Read points from `.csv` (columns `x`, `y`) or JSON.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        return read_csv_points(path);
    }
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    parse_json_points(&bytes).with_context(|| format!("parsing {}", path.display()))
}

pub fn parse_json_points(bytes: &[u8]) -> Result<Vec<Point>> {
    let doc: PointsDoc = serde_json::from_slice(bytes)?;
    let pairs = match doc {
        PointsDoc::Pairs(p) | PointsDoc::Wrapped { points: p } => p,
    };
    if pairs.is_empty() {
        bail!("no points in input");
    }
    Ok(points_from_pairs(&pairs))
}

fn read_csv_points(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns of {}", path.display()))?;
    tracing::info!(rows = df.height(), "input_csv_shape");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => Err(anyhow!("row {row}: missing x or y")),
        })
        .collect()
}

/// Pretty-print `value` to `path`, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
