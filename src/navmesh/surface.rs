//! Navmesh domain: immutable triangle soup queried by ray intersection.

use bevy::prelude::*;

/// Hits closer than this along the ray are discarded, as are rays that run
/// parallel to a triangle's plane.
const RAY_EPSILON: f32 = 1e-6;

/// The walkable surface: a world-space triangle soup, read-only after
/// construction.
///
/// Inserted as a resource only once triangle data exists, so the rest of
/// the app observes "no surface yet" as the resource being absent rather
/// than as an empty or half-built value.
#[derive(Resource, Debug, Clone)]
pub struct NavmeshSurface {
    triangles: Vec<[Vec3; 3]>,
}

impl NavmeshSurface {
    pub fn new(triangles: Vec<[Vec3; 3]>) -> Self {
        Self { triangles }
    }

    /// Flat square surface centered on `center` at the given height.
    ///
    /// Deterministic stand-in for a real navmesh when loading fails; also
    /// the canonical test fixture.
    pub fn horizontal_quad(center: Vec2, half_extent: f32, height: f32) -> Self {
        let a = Vec3::new(center.x - half_extent, height, center.y - half_extent);
        let b = Vec3::new(center.x + half_extent, height, center.y - half_extent);
        let c = Vec3::new(center.x + half_extent, height, center.y + half_extent);
        let d = Vec3::new(center.x - half_extent, height, center.y + half_extent);
        Self::new(vec![[a, b, c], [a, c, d]])
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Consume the surface, yielding its triangles for merging into another.
    pub fn into_triangles(self) -> Vec<[Vec3; 3]> {
        self.triangles
    }

    /// Nearest intersection of the ray with the surface, if any.
    ///
    /// `direction` does not need to be normalized; the returned point is
    /// exact either way.
    pub fn cast_ray(&self, origin: Vec3, direction: Vec3) -> Option<Vec3> {
        let mut nearest: Option<f32> = None;
        for triangle in &self.triangles {
            if let Some(t) = ray_triangle(origin, direction, triangle) {
                if nearest.is_none_or(|n| t < n) {
                    nearest = Some(t);
                }
            }
        }
        nearest.map(|t| origin + direction * t)
    }

    /// Height of the nearest surface below `(x, start_height, z)`.
    ///
    /// For a downward ray the nearest hit is the highest surface under the
    /// start point, so a start above all terrain sees through overhangs to
    /// the topmost walkable layer.
    pub fn height_below(&self, x: f32, z: f32, start_height: f32) -> Option<f32> {
        self.cast_ray(Vec3::new(x, start_height, z), Vec3::NEG_Y)
            .map(|hit| hit.y)
    }
}

/// Möller–Trumbore without backface culling.
///
/// Returns the ray parameter of the hit, or `None` for misses, near-zero
/// determinants (ray parallel to the plane, or a degenerate triangle), and
/// hits behind or effectively at the origin.
fn ray_triangle(origin: Vec3, direction: Vec3, triangle: &[Vec3; 3]) -> Option<f32> {
    let edge1 = triangle[1] - triangle[0];
    let edge2 = triangle[2] - triangle[0];

    let p = direction.cross(edge2);
    let det = edge1.dot(p);
    if det.abs() < RAY_EPSILON {
        return None;
    }
    let inv_det = 1.0 / det;

    let s = origin - triangle[0];
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(q) * inv_det;
    (t > RAY_EPSILON).then_some(t)
}
