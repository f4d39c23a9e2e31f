//! Image-space vertices and bounding extents.

use kurbo::Point;
use serde::{Deserialize, Deserializer, Serialize};

/// A 2-D coordinate in image space.
///
/// The detector omits zero-valued or unknown components, so any component
/// that is absent or `null` in the JSON is stored as NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    #[serde(default = "nan", deserialize_with = "nan_if_null")]
    pub x: f64,
    #[serde(default = "nan", deserialize_with = "nan_if_null")]
    pub y: f64,
}

fn nan() -> f64 {
    f64::NAN
}

fn nan_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

impl Vertex {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// A vertex with both components absent.
    pub fn missing() -> Self {
        Self::new(f64::NAN, f64::NAN)
    }

    /// Whether both components are usable numbers.
    pub fn is_valid(&self) -> bool {
        !self.x.is_nan() && !self.y.is_nan()
    }

    /// Replace NaN components with `sentinel`.
    fn or_sentinel(self, sentinel: f64) -> Self {
        Self {
            x: if self.x.is_nan() { sentinel } else { self.x },
            y: if self.y.is_nan() { sentinel } else { self.y },
        }
    }
}

impl From<Vertex> for Point {
    fn from(v: Vertex) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vertex {
    fn from(p: Point) -> Self {
        Vertex::new(p.x, p.y)
    }
}

/// An ordered sequence of vertices, typically the four corners of a box.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingPoly {
    #[serde(default)]
    pub vertices: Vec<Vertex>,
}

impl BoundingPoly {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    pub fn extent(&self) -> Option<Extent> {
        compute_extent(&self.vertices)
    }
}

/// Minimum and maximum corners of a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: Vertex,
    pub max: Vertex,
}

/// Compute the extent of `vertices` with a pairwise dominance fold.
///
/// Each step compares the running accumulator with the next vertex. NaN
/// components on both sides are first replaced by `+inf` (minimum search)
/// or `-inf` (maximum search). The accumulator survives only if it
/// dominates the candidate on both axes at once, so for rotated or concave
/// point sets the result can differ from a per-axis min/max. Ties keep the
/// earlier vertex. A single vertex is returned unchanged.
///
/// Returns `None` for an empty slice. The input is never modified.
pub fn compute_extent(vertices: &[Vertex]) -> Option<Extent> {
    let min = dominance_fold(vertices, f64::INFINITY, |acc, cand| {
        acc.x <= cand.x && acc.y <= cand.y
    })?;
    let max = dominance_fold(vertices, f64::NEG_INFINITY, |acc, cand| {
        acc.x >= cand.x && acc.y >= cand.y
    })?;
    Some(Extent { min, max })
}

fn dominance_fold(
    vertices: &[Vertex],
    sentinel: f64,
    keeps: impl Fn(&Vertex, &Vertex) -> bool,
) -> Option<Vertex> {
    let (first, rest) = vertices.split_first()?;
    Some(rest.iter().fold(*first, |acc, cand| {
        let acc = acc.or_sentinel(sentinel);
        let cand = cand.or_sentinel(sentinel);
        if keeps(&acc, &cand) { acc } else { cand }
    }))
}
