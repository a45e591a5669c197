//! Binary space partitioning tree over polygon soups.
//!
//! Each node stores the polygons coplanar with its splitting plane and
//! recurses front/back. Clipping a polygon set against a tree removes
//! everything inside the solid the tree represents; inverting the tree flips
//! solid and empty space. These two operations compose into the boolean
//! evaluations in [`crate::boolean`].

use crate::boolean::plane::Plane;
use crate::boolean::polygon::Polygon;

/// One node of a BSP tree.
#[derive(Debug, Clone, Default)]
pub(crate) struct BspNode {
    plane: Option<Plane>,
    front: Option<Box<BspNode>>,
    back: Option<Box<BspNode>>,
    polygons: Vec<Polygon>,
}

impl BspNode {
    /// Builds a tree from a polygon soup.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut node = Self::default();
        node.build(polygons);
        node
    }

    /// Inserts polygons, using the first polygon's plane as the splitter
    /// when the node is fresh.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        if polygons.is_empty() {
            return;
        }
        if self.plane.is_none() {
            self.plane = Some(polygons[0].plane);
        }
        // checked just above
        let Some(plane) = self.plane else { return };

        let mut front: Vec<Polygon> = Vec::new();
        let mut back: Vec<Polygon> = Vec::new();
        for polygon in &polygons {
            let mut coplanar_back = Vec::new();
            plane.split_polygon(
                polygon,
                &mut self.polygons,
                &mut coplanar_back,
                &mut front,
                &mut back,
            );
            self.polygons.append(&mut coplanar_back);
        }
        if !front.is_empty() {
            self.front
                .get_or_insert_with(Box::default)
                .build(front);
        }
        if !back.is_empty() {
            self.back
                .get_or_insert_with(Box::default)
                .build(back);
        }
    }

    /// Swaps solid and empty space.
    pub fn invert(&mut self) {
        for polygon in &mut self.polygons {
            polygon.flip();
        }
        if let Some(plane) = &mut self.plane {
            plane.flip();
        }
        if let Some(front) = &mut self.front {
            front.invert();
        }
        if let Some(back) = &mut self.back {
            back.invert();
        }
        std::mem::swap(&mut self.front, &mut self.back);
    }

    /// Removes the parts of `polygons` inside the solid this tree bounds.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let Some(plane) = self.plane else {
            return polygons;
        };
        let mut front: Vec<Polygon> = Vec::new();
        let mut back: Vec<Polygon> = Vec::new();
        for polygon in &polygons {
            // Coplanar polygons follow their facing side.
            let mut coplanar_front = Vec::new();
            let mut coplanar_back = Vec::new();
            plane.split_polygon(
                polygon,
                &mut coplanar_front,
                &mut coplanar_back,
                &mut front,
                &mut back,
            );
            front.append(&mut coplanar_front);
            back.append(&mut coplanar_back);
        }
        let mut front = match &self.front {
            Some(node) => node.clip_polygons(front),
            None => front,
        };
        let back = match &self.back {
            Some(node) => node.clip_polygons(back),
            None => Vec::new(), // no back subtree: back side is solid
        };
        front.extend(back);
        front
    }

    /// Clips every polygon stored in this tree against `other`.
    pub fn clip_to(&mut self, other: &BspNode) {
        self.polygons = other.clip_polygons(std::mem::take(&mut self.polygons));
        if let Some(front) = &mut self.front {
            front.clip_to(other);
        }
        if let Some(back) = &mut self.back {
            back.clip_to(other);
        }
    }

    /// Collects all polygons stored in the tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut out = self.polygons.clone();
        if let Some(front) = &self.front {
            out.extend(front.all_polygons());
        }
        if let Some(back) = &self.back {
            out.extend(back.all_polygons());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    /// Axis-aligned box as 12 triangles with outward winding.
    fn box_polygons(min: DVec3, max: DVec3) -> Vec<Polygon> {
        let corner = |mask: u8| {
            DVec3::new(
                if mask & 1 != 0 { max.x } else { min.x },
                if mask & 2 != 0 { max.y } else { min.y },
                if mask & 4 != 0 { max.z } else { min.z },
            )
        };
        // Quads as corner masks, CCW from outside.
        let faces: [[u8; 4]; 6] = [
            [0, 4, 6, 2], // -x
            [1, 3, 7, 5], // +x
            [0, 1, 5, 4], // -y
            [2, 6, 7, 3], // +y
            [0, 2, 3, 1], // -z
            [4, 5, 7, 6], // +z
        ];
        let mut polygons = Vec::new();
        for face in faces {
            let quad: Vec<DVec3> = face.iter().map(|&m| corner(m)).collect();
            polygons.push(Polygon::new(vec![quad[0], quad[1], quad[2]]).unwrap());
            polygons.push(Polygon::new(vec![quad[0], quad[2], quad[3]]).unwrap());
        }
        polygons
    }

    #[test]
    fn test_all_polygons_roundtrip() {
        let polygons = box_polygons(DVec3::ZERO, DVec3::ONE);
        let node = BspNode::new(polygons.clone());
        assert_eq!(node.all_polygons().len(), polygons.len());
    }

    #[test]
    fn test_clip_disjoint_keeps_everything() {
        let node = BspNode::new(box_polygons(DVec3::ZERO, DVec3::ONE));
        let far = box_polygons(DVec3::splat(5.0), DVec3::splat(6.0));
        assert_eq!(node.clip_polygons(far).len(), 12);
    }

    #[test]
    fn test_clip_contained_removes_everything() {
        let node = BspNode::new(box_polygons(DVec3::ZERO, DVec3::ONE));
        let inner = box_polygons(DVec3::splat(0.25), DVec3::splat(0.75));
        assert!(node.clip_polygons(inner).is_empty());
    }

    #[test]
    fn test_clip_keeps_own_coplanar_faces() {
        // A solid clipped against its own tree keeps its boundary: every
        // face is coplanar with some node plane, routes to the front side
        // by normal agreement, and survives.
        let polygons = box_polygons(DVec3::ZERO, DVec3::ONE);
        let node = BspNode::new(polygons.clone());
        assert!(node.clip_polygons(polygons).len() >= 12);
    }

    #[test]
    fn test_invert_flips_containment() {
        let mut node = BspNode::new(box_polygons(DVec3::ZERO, DVec3::ONE));
        node.invert();
        // Inside the original box is now empty space: nothing is clipped.
        let inner = box_polygons(DVec3::splat(0.25), DVec3::splat(0.75));
        assert_eq!(node.clip_polygons(inner).len(), 12);
    }
}
