//! Splitting plane for BSP clipping.

use crate::boolean::polygon::Polygon;
use config::constants::{BSP_EPSILON, EPSILON};
use glam::DVec3;

const COPLANAR: u8 = 0;
const FRONT: u8 = 1;
const BACK: u8 = 2;
const SPANNING: u8 = FRONT | BACK;

/// Oriented plane `dot(normal, p) == w`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Plane {
    pub normal: DVec3,
    pub w: f64,
}

impl Plane {
    /// Plane through three points, normal by the right-hand rule.
    ///
    /// Returns `None` for collinear points.
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3) -> Option<Self> {
        let cross = (b - a).cross(c - a);
        if cross.length_squared() < EPSILON {
            return None;
        }
        let normal = cross.normalize();
        Some(Self {
            normal,
            w: normal.dot(a),
        })
    }

    /// Reverses which side counts as front.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Splits `polygon` by this plane into the four output lists.
    ///
    /// Coplanar polygons are routed front or back by normal agreement;
    /// spanning polygons are cut along the plane, with intersection points
    /// interpolated on the crossing edges. Fragments that degenerate below
    /// three vertices are discarded.
    pub fn split_polygon(
        &self,
        polygon: &Polygon,
        coplanar_front: &mut Vec<Polygon>,
        coplanar_back: &mut Vec<Polygon>,
        front: &mut Vec<Polygon>,
        back: &mut Vec<Polygon>,
    ) {
        let mut polygon_type = COPLANAR;
        let mut types = Vec::with_capacity(polygon.vertices.len());
        for vertex in &polygon.vertices {
            let t = self.normal.dot(*vertex) - self.w;
            let vertex_type = if t < -BSP_EPSILON {
                BACK
            } else if t > BSP_EPSILON {
                FRONT
            } else {
                COPLANAR
            };
            polygon_type |= vertex_type;
            types.push(vertex_type);
        }

        match polygon_type {
            COPLANAR => {
                if self.normal.dot(polygon.plane.normal) > 0.0 {
                    coplanar_front.push(polygon.clone());
                } else {
                    coplanar_back.push(polygon.clone());
                }
            }
            FRONT => front.push(polygon.clone()),
            BACK => back.push(polygon.clone()),
            _ => {
                let n = polygon.vertices.len();
                let mut front_vertices: Vec<DVec3> = Vec::new();
                let mut back_vertices: Vec<DVec3> = Vec::new();
                for i in 0..n {
                    let j = (i + 1) % n;
                    let (ti, tj) = (types[i], types[j]);
                    let (vi, vj) = (polygon.vertices[i], polygon.vertices[j]);
                    if ti != BACK {
                        front_vertices.push(vi);
                    }
                    if ti != FRONT {
                        back_vertices.push(vi);
                    }
                    if (ti | tj) == SPANNING {
                        let t = (self.w - self.normal.dot(vi)) / self.normal.dot(vj - vi);
                        let v = vi.lerp(vj, t);
                        front_vertices.push(v);
                        back_vertices.push(v);
                    }
                }
                if let Some(p) = Polygon::new(front_vertices) {
                    front.push(p);
                }
                if let Some(p) = Polygon::new(back_vertices) {
                    back.push(p);
                }
            }
        }
    }
}
