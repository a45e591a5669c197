//! # Cap Triangulation
//!
//! Ear clipping over a single merged loop. Holes are first bridged into the
//! exterior boundary (each hole's rightmost vertex is connected to a visible
//! exterior vertex by a pair of coincident bridge edges), then the resulting
//! weakly-simple loop is clipped ear by ear.
//!
//! The input outline must be winding-normalized: counter-clockwise exterior,
//! clockwise holes. Output indices address the flattened vertex layout
//! `[exterior..., hole_0..., hole_1...]` so that callers can reuse the same
//! layout for cap and wall vertices.

use crate::error::MeshError;
use ambigram_outline::Outline;
use config::constants::EPSILON;
use glam::DVec2;

/// Triangulates a normalized outline into index triples.
///
/// # Errors
///
/// Returns [`MeshError::HoleBridgeFailed`] when a hole has no visible
/// exterior vertex, and [`MeshError::NoEarFound`] when clipping stalls
/// (a self-intersecting ring).
pub(crate) fn triangulate_outline(outline: &Outline) -> Result<Vec<[u32; 3]>, MeshError> {
    let exterior = outline.exterior();
    if exterior.len() < 3 {
        return Err(MeshError::degenerate("fewer than 3 exterior points"));
    }

    // Flatten all rings into one point list; rings keep their input order so
    // the indices line up with wall vertices built from the same layout.
    let mut points: Vec<DVec2> = exterior.to_vec();
    let mut hole_ranges: Vec<(u32, u32)> = Vec::new();
    for hole in outline.holes() {
        let start = points.len() as u32;
        points.extend_from_slice(hole);
        hole_ranges.push((start, hole.len() as u32));
    }

    let mut loop_indices: Vec<u32> = (0..exterior.len() as u32).collect();

    // Bridge holes right-to-left: once a hole is spliced in, its vertices
    // can shadow holes further left, so rightmost holes must go first.
    let mut order: Vec<usize> = (0..hole_ranges.len()).collect();
    order.sort_by(|&a, &b| {
        let ax = ring_max_x(&points, hole_ranges[a]);
        let bx = ring_max_x(&points, hole_ranges[b]);
        bx.partial_cmp(&ax).unwrap_or(std::cmp::Ordering::Equal)
    });
    for hole in order {
        bridge_hole(&points, &mut loop_indices, hole_ranges[hole], hole)?;
    }

    ear_clip(&points, loop_indices)
}

fn ring_max_x(points: &[DVec2], (start, len): (u32, u32)) -> f64 {
    (start..start + len)
        .map(|i| points[i as usize].x)
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Splices one hole into the working loop via a bridge to a visible vertex.
fn bridge_hole(
    points: &[DVec2],
    loop_indices: &mut Vec<u32>,
    (start, len): (u32, u32),
    hole: usize,
) -> Result<(), MeshError> {
    // Rightmost hole vertex: the bridge is cast from here along +x, which
    // guarantees the ray leaves the hole immediately.
    let mut local_m = 0;
    for offset in 1..len {
        if points[(start + offset) as usize].x > points[(start + local_m) as usize].x {
            local_m = offset;
        }
    }
    let m = points[(start + local_m) as usize];

    let bridge_at = visible_vertex(points, loop_indices, m)
        .ok_or(MeshError::HoleBridgeFailed { hole })?;

    // Splice: ... P, M, (hole cycle), M, P, ... The duplicated M and P make
    // the two coincident bridge edges that keep the loop closed.
    let mut spliced: Vec<u32> = Vec::with_capacity(loop_indices.len() + len as usize + 2);
    spliced.extend_from_slice(&loop_indices[..=bridge_at]);
    for offset in 0..=len {
        spliced.push(start + (local_m + offset) % len);
    }
    spliced.extend_from_slice(&loop_indices[bridge_at..]);
    *loop_indices = spliced;
    Ok(())
}

/// Finds the loop position of a vertex visible from `m` along the +x ray.
///
/// Classic hole-cutting visibility: intersect the ray with the loop edges,
/// take the closest hit, then fall back to the blocking reflex vertex that
/// is angularly closest to the ray if the candidate endpoint is occluded.
fn visible_vertex(points: &[DVec2], loop_indices: &[u32], m: DVec2) -> Option<usize> {
    let n = loop_indices.len();
    let mut best: Option<(f64, usize)> = None; // (intersection x, edge start)

    for i in 0..n {
        let a = points[loop_indices[i] as usize];
        let b = points[loop_indices[(i + 1) % n] as usize];
        if (a.y <= m.y) == (b.y <= m.y) {
            continue; // edge does not straddle the ray's scanline
        }
        let t = (m.y - a.y) / (b.y - a.y);
        let x = a.x + t * (b.x - a.x);
        if x >= m.x - EPSILON && best.map_or(true, |(bx, _)| x < bx) {
            best = Some((x, i));
        }
    }

    let (hit_x, edge_start) = best?;
    let intersection = DVec2::new(hit_x, m.y);
    let a_pos = edge_start;
    let b_pos = (edge_start + 1) % n;
    let a = points[loop_indices[a_pos] as usize];
    let b = points[loop_indices[b_pos] as usize];

    // Candidate endpoint of the hit edge: the one further right, or the one
    // nearer the scanline when the edge is vertical.
    let candidate = if (a.x - b.x).abs() > EPSILON {
        if a.x > b.x {
            a_pos
        } else {
            b_pos
        }
    } else if (a.y - m.y).abs() < (b.y - m.y).abs() {
        a_pos
    } else {
        b_pos
    };
    let p = points[loop_indices[candidate] as usize];

    // A reflex vertex inside triangle (m, intersection, p) occludes the
    // candidate; connect to the occluder closest in angle to the ray.
    let mut chosen = candidate;
    let mut best_key: Option<(f64, f64)> = None; // (-cos angle, distance)
    for i in 0..n {
        let v = points[loop_indices[i] as usize];
        if v.abs_diff_eq(m, EPSILON) || v.abs_diff_eq(p, EPSILON) {
            continue;
        }
        let prev = points[loop_indices[(i + n - 1) % n] as usize];
        let next = points[loop_indices[(i + 1) % n] as usize];
        let reflex = cross2(v - prev, next - v) < -EPSILON;
        if !reflex || !point_in_triangle(v, m, intersection, p) {
            continue;
        }
        let to_v = v - m;
        let distance = to_v.length();
        if distance < EPSILON {
            continue;
        }
        let key = (-(to_v.x / distance), distance);
        if best_key.map_or(true, |bk| key < bk) {
            best_key = Some(key);
            chosen = i;
        }
    }
    Some(chosen)
}

/// Clips ears off a counter-clockwise loop until three vertices remain.
fn ear_clip(points: &[DVec2], mut loop_indices: Vec<u32>) -> Result<Vec<[u32; 3]>, MeshError> {
    let mut triangles: Vec<[u32; 3]> = Vec::with_capacity(loop_indices.len().saturating_sub(2));

    while loop_indices.len() > 3 {
        let n = loop_indices.len();
        let mut clipped = None;

        // Prefer strictly convex ears; fall back to a zero-area ear so that
        // collinear boundary vertices still end up in some cap triangle and
        // their wall edges stay paired.
        for degenerate_pass in [false, true] {
            for i in 0..n {
                let prev = points[loop_indices[(i + n - 1) % n] as usize];
                let cur = points[loop_indices[i] as usize];
                let next = points[loop_indices[(i + 1) % n] as usize];
                let turn = cross2(cur - prev, next - cur);
                let convex = if degenerate_pass {
                    turn.abs() <= EPSILON
                } else {
                    turn > EPSILON
                };
                if convex && is_ear(points, &loop_indices, i) {
                    clipped = Some(i);
                    break;
                }
            }
            if clipped.is_some() {
                break;
            }
        }

        let Some(i) = clipped else {
            return Err(MeshError::NoEarFound { remaining: n });
        };
        triangles.push([
            loop_indices[(i + n - 1) % n],
            loop_indices[i],
            loop_indices[(i + 1) % n],
        ]);
        loop_indices.remove(i);
    }

    triangles.push([loop_indices[0], loop_indices[1], loop_indices[2]]);
    Ok(triangles)
}

/// True when no other loop vertex lies inside (or on) the candidate ear.
fn is_ear(points: &[DVec2], loop_indices: &[u32], i: usize) -> bool {
    let n = loop_indices.len();
    let a = points[loop_indices[(i + n - 1) % n] as usize];
    let b = points[loop_indices[i] as usize];
    let c = points[loop_indices[(i + 1) % n] as usize];

    for (j, &index) in loop_indices.iter().enumerate() {
        if j == (i + n - 1) % n || j == i || j == (i + 1) % n {
            continue;
        }
        let p = points[index as usize];
        // Duplicated bridge vertices share coordinates with ear corners.
        if p.abs_diff_eq(a, EPSILON) || p.abs_diff_eq(b, EPSILON) || p.abs_diff_eq(c, EPSILON) {
            continue;
        }
        if point_in_triangle(p, a, b, c) {
            return false;
        }
    }
    true
}

#[inline]
fn cross2(a: DVec2, b: DVec2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Closed point-in-triangle test (boundary counts as inside).
fn point_in_triangle(p: DVec2, a: DVec2, b: DVec2, c: DVec2) -> bool {
    let d1 = cross2(b - a, p - a);
    let d2 = cross2(c - b, p - b);
    let d3 = cross2(a - c, p - c);
    let has_neg = d1 < -EPSILON || d2 < -EPSILON || d3 < -EPSILON;
    let has_pos = d1 > EPSILON || d2 > EPSILON || d3 > EPSILON;
    !(has_neg && has_pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ambigram_outline::digit_outline;
    use approx::assert_relative_eq;

    fn ring(points: &[(f64, f64)]) -> Vec<DVec2> {
        points.iter().map(|&(x, y)| DVec2::new(x, y)).collect()
    }

    /// Sum of unsigned triangle areas, for comparing against ring area.
    fn triangulated_area(points: &[DVec2], triangles: &[[u32; 3]]) -> f64 {
        triangles
            .iter()
            .map(|&[a, b, c]| {
                let (a, b, c) = (points[a as usize], points[b as usize], points[c as usize]);
                cross2(b - a, c - a).abs() * 0.5
            })
            .sum()
    }

    fn flatten(outline: &Outline) -> Vec<DVec2> {
        let mut points = outline.exterior().to_vec();
        for hole in outline.holes() {
            points.extend_from_slice(hole);
        }
        points
    }

    #[test]
    fn test_triangle_passes_through() {
        let outline = Outline::new(ring(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]));
        let triangles = triangulate_outline(&outline).unwrap();
        assert_eq!(triangles, vec![[0, 1, 2]]);
    }

    #[test]
    fn test_square_yields_two_triangles() {
        let outline = Outline::new(ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]));
        let triangles = triangulate_outline(&outline).unwrap();
        assert_eq!(triangles.len(), 2);
        assert_relative_eq!(triangulated_area(&flatten(&outline), &triangles), 1.0);
    }

    #[test]
    fn test_concave_polygon() {
        // L-shape: 6 vertices, 4 triangles.
        let outline = Outline::new(ring(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (0.0, 2.0),
        ]));
        let triangles = triangulate_outline(&outline).unwrap();
        assert_eq!(triangles.len(), 4);
        assert_relative_eq!(triangulated_area(&flatten(&outline), &triangles), 3.0);
    }

    #[test]
    fn test_square_with_hole() {
        let outline = Outline::with_holes(
            ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]),
            vec![ring(&[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)])],
        )
        .normalized();
        let triangles = triangulate_outline(&outline).unwrap();
        // 8 vertices + 2 bridge duplicates -> 8 triangles.
        assert_eq!(triangles.len(), 8);
        assert_relative_eq!(triangulated_area(&flatten(&outline), &triangles), 12.0);
    }

    #[test]
    fn test_collinear_boundary_vertices() {
        // Extra vertices on straight edges must still be clipped.
        let outline = Outline::new(ring(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (2.0, 2.0),
            (0.0, 2.0),
        ]));
        let triangles = triangulate_outline(&outline).unwrap();
        assert_eq!(triangles.len(), 3);
        assert_relative_eq!(triangulated_area(&flatten(&outline), &triangles), 4.0);
    }

    #[test]
    fn test_all_digits_triangulate() {
        for digit in 0..10 {
            let outline = digit_outline(digit).unwrap();
            let triangles = triangulate_outline(&outline).unwrap();
            let points = flatten(&outline);

            // Triangulated area must match the outline's net area (exterior
            // minus holes).
            let mut expected = ambigram_outline::signed_area(outline.exterior());
            for hole in outline.holes() {
                expected += ambigram_outline::signed_area(hole);
            }
            assert_relative_eq!(
                triangulated_area(&points, &triangles),
                expected,
                epsilon = 1e-6
            );

            // Every vertex must be referenced by at least one triangle so
            // that wall edges can pair with cap edges.
            let mut used = vec![false; points.len()];
            for t in &triangles {
                for &i in t {
                    used[i as usize] = true;
                }
            }
            assert!(used.iter().all(|&u| u), "digit {digit} left a vertex uncapped");
        }
    }

    #[test]
    fn test_degenerate_exterior_rejected() {
        let outline = Outline::new(ring(&[(0.0, 0.0), (1.0, 1.0)]));
        assert!(matches!(
            triangulate_outline(&outline),
            Err(MeshError::DegenerateOutline { .. })
        ));
    }
}
