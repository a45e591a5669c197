//! # Outline Model
//!
//! A closed 2D shape described by an exterior boundary polyline plus zero or
//! more hole polylines. Winding direction is significant: downstream cap
//! triangulation expects a counter-clockwise exterior and clockwise holes,
//! which [`Outline::normalized`] enforces.

use config::constants::EPSILON;
use glam::DVec2;

/// Axis-aligned 2D bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner.
    pub min: DVec2,
    /// Maximum corner.
    pub max: DVec2,
}

impl Aabb2 {
    /// Computes the bounding box of a point set.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_points(points: &[DVec2]) -> Option<Self> {
        let first = *points.first()?;
        let mut min = first;
        let mut max = first;
        for p in &points[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }
        Some(Self { min, max })
    }

    /// Box width (x extent).
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Box height (y extent).
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Box center.
    #[inline]
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }
}

/// A closed 2D outline: one exterior boundary and zero or more holes.
///
/// The first polyline is always the exterior; every additional polyline is
/// treated as a hole cut out of it. Polylines are implicitly closed (the
/// last point connects back to the first).
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    /// Exterior boundary.
    exterior: Vec<DVec2>,
    /// Hole boundaries.
    holes: Vec<Vec<DVec2>>,
}

impl Outline {
    /// Creates an outline with no holes.
    pub fn new(exterior: Vec<DVec2>) -> Self {
        Self {
            exterior,
            holes: Vec::new(),
        }
    }

    /// Creates an outline with holes.
    pub fn with_holes(exterior: Vec<DVec2>, holes: Vec<Vec<DVec2>>) -> Self {
        Self { exterior, holes }
    }

    /// Builds an outline from a list of closed rings.
    ///
    /// The first ring becomes the exterior, the rest become holes.
    /// Returns `None` for an empty list.
    pub fn from_rings(mut rings: Vec<Vec<DVec2>>) -> Option<Self> {
        if rings.is_empty() {
            return None;
        }
        let exterior = rings.remove(0);
        Some(Self {
            exterior,
            holes: rings,
        })
    }

    /// Exterior boundary points.
    #[inline]
    pub fn exterior(&self) -> &[DVec2] {
        &self.exterior
    }

    /// Hole boundaries.
    #[inline]
    pub fn holes(&self) -> &[Vec<DVec2>] {
        &self.holes
    }

    /// Bounding box of the exterior boundary.
    ///
    /// Holes are always contained in the exterior, so this is the bounding
    /// box of the whole outline. Returns `None` when the exterior is empty.
    pub fn bounding_box(&self) -> Option<Aabb2> {
        Aabb2::from_points(&self.exterior)
    }

    /// True when the outline cannot produce a solid.
    ///
    /// An exterior with fewer than 3 points, or with (numerically) zero
    /// enclosed area, has no interior to sweep.
    pub fn is_degenerate(&self) -> bool {
        self.exterior.len() < 3 || signed_area(&self.exterior).abs() < EPSILON
    }

    /// Returns a copy with canonical winding.
    ///
    /// The exterior is forced counter-clockwise (positive signed area) and
    /// each hole clockwise. Holes with fewer than 3 points are dropped; the
    /// exterior is left as-is even when degenerate so that callers can still
    /// observe [`Outline::is_degenerate`].
    pub fn normalized(&self) -> Outline {
        let mut exterior = self.exterior.clone();
        if signed_area(&exterior) < 0.0 {
            exterior.reverse();
        }
        let holes = self
            .holes
            .iter()
            .filter(|ring| ring.len() >= 3)
            .map(|ring| {
                let mut ring = ring.clone();
                if signed_area(&ring) > 0.0 {
                    ring.reverse();
                }
                ring
            })
            .collect();
        Outline { exterior, holes }
    }
}

/// Signed area of a closed ring (shoelace formula).
///
/// Positive for counter-clockwise winding, negative for clockwise.
pub fn signed_area(ring: &[DVec2]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum * 0.5
}
