//! Navmesh domain: triangle extraction from loaded render meshes.

use bevy::mesh::{Indices, Mesh, PrimitiveTopology, VertexAttributeValues};
use bevy::prelude::*;

/// Append `mesh`'s triangles to `out` in world space.
///
/// Only `TriangleList` meshes with float positions contribute; anything
/// else (lines, point clouds, exotic vertex formats) is skipped rather
/// than guessed at. Returns the number of triangles appended.
pub fn append_mesh_triangles(
    mesh: &Mesh,
    transform: &GlobalTransform,
    out: &mut Vec<[Vec3; 3]>,
) -> usize {
    if mesh.primitive_topology() != PrimitiveTopology::TriangleList {
        return 0;
    }

    let Some(VertexAttributeValues::Float32x3(positions)) =
        mesh.attribute(Mesh::ATTRIBUTE_POSITION)
    else {
        return 0;
    };

    let world_point = |index: usize| -> Option<Vec3> {
        positions
            .get(index)
            .map(|p| transform.transform_point(Vec3::from_array(*p)))
    };

    let before = out.len();
    match mesh.indices() {
        Some(Indices::U16(indices)) => {
            append_indexed(&world_point, indices.iter().map(|i| *i as usize), out);
        }
        Some(Indices::U32(indices)) => {
            append_indexed(&world_point, indices.iter().map(|i| *i as usize), out);
        }
        // Non-indexed: every three consecutive vertices form a triangle.
        None => {
            append_indexed(&world_point, 0..positions.len(), out);
        }
    }
    out.len() - before
}

fn append_indexed(
    world_point: &impl Fn(usize) -> Option<Vec3>,
    indices: impl IntoIterator<Item = usize>,
    out: &mut Vec<[Vec3; 3]>,
) {
    let mut indices = indices.into_iter();
    while let (Some(a), Some(b), Some(c)) = (indices.next(), indices.next(), indices.next()) {
        if let (Some(a), Some(b), Some(c)) = (world_point(a), world_point(b), world_point(c)) {
            out.push([a, b, c]);
        }
    }
}
