//! Navmesh domain: tests for ray queries and mesh extraction.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, Mesh, PrimitiveTopology};
use bevy::prelude::*;

use super::{NavmeshSurface, append_mesh_triangles};

// -----------------------------------------------------------------------------
// Ray query tests
// -----------------------------------------------------------------------------

#[test]
fn test_downward_ray_hits_quad() {
    let surface = NavmeshSurface::horizontal_quad(Vec2::ZERO, 10.0, 0.0);

    let hit = surface.cast_ray(Vec3::new(3.0, 100.0, -4.0), Vec3::NEG_Y);
    let hit = hit.expect("ray over the quad should hit");
    assert!((hit - Vec3::new(3.0, 0.0, -4.0)).length() < 1e-4);
}

#[test]
fn test_ray_misses_outside_quad() {
    let surface = NavmeshSurface::horizontal_quad(Vec2::ZERO, 10.0, 0.0);

    assert!(surface.cast_ray(Vec3::new(15.0, 100.0, 0.0), Vec3::NEG_Y).is_none());
    assert!(surface.cast_ray(Vec3::new(0.0, 100.0, -10.5), Vec3::NEG_Y).is_none());
}

#[test]
fn test_hit_behind_origin_is_ignored() {
    let surface = NavmeshSurface::horizontal_quad(Vec2::ZERO, 10.0, 5.0);

    // Surface is above the origin; a downward ray never reaches it.
    assert!(surface.cast_ray(Vec3::new(0.0, 0.0, 0.0), Vec3::NEG_Y).is_none());
}

#[test]
fn test_nearest_hit_wins_with_stacked_surfaces() {
    let mut triangles = Vec::new();
    triangles.extend(NavmeshSurface::horizontal_quad(Vec2::ZERO, 10.0, 0.0).into_triangles());
    triangles.extend(NavmeshSurface::horizontal_quad(Vec2::ZERO, 10.0, 4.0).into_triangles());
    let surface = NavmeshSurface::new(triangles);

    // From above both layers, the upper one is nearest.
    let top = surface.height_below(0.0, 0.0, 100.0).unwrap();
    assert!((top - 4.0).abs() < 1e-4);
    // From between the layers, only the lower one is below.
    let bottom = surface.height_below(0.0, 0.0, 2.0).unwrap();
    assert!(bottom.abs() < 1e-4);
}

#[test]
fn test_ray_parallel_to_triangle_plane_misses() {
    let surface = NavmeshSurface::horizontal_quad(Vec2::ZERO, 10.0, 0.0);

    // Grazing along the surface plane itself.
    assert!(surface.cast_ray(Vec3::new(-20.0, 0.0, 0.0), Vec3::X).is_none());
}

#[test]
fn test_degenerate_triangle_is_never_hit() {
    // All three corners collinear: zero-area triangle.
    let surface = NavmeshSurface::new(vec![[
        Vec3::new(-1.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
    ]]);

    assert!(surface.cast_ray(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y).is_none());
}

#[test]
fn test_oblique_teleport_style_ray() {
    let surface = NavmeshSurface::horizontal_quad(Vec2::ZERO, 10.0, 0.0);

    // Eye-height origin looking down-forward, the shape of a teleport click.
    let origin = Vec3::new(0.0, 3.0, 8.0);
    let direction = Vec3::new(0.0, -1.0, -1.0).normalize();
    let hit = surface.cast_ray(origin, direction).expect("should land on the quad");
    assert!(hit.y.abs() < 1e-4);
    assert!((hit.z - 5.0).abs() < 1e-4);
}

#[test]
fn test_sloped_surface_height() {
    // Single triangle rising from y=0 at z=0 to y=2 at z=2.
    let surface = NavmeshSurface::new(vec![[
        Vec3::new(-5.0, 0.0, 0.0),
        Vec3::new(5.0, 0.0, 0.0),
        Vec3::new(0.0, 2.0, 2.0),
    ]]);

    let height = surface.height_below(0.0, 0.0, 100.0).unwrap();
    assert!(height.abs() < 1e-4);
    let height = surface.height_below(0.0, 1.0, 100.0).unwrap();
    assert!((height - 1.0).abs() < 1e-3);
}

// -----------------------------------------------------------------------------
// Mesh extraction tests
// -----------------------------------------------------------------------------

fn quad_mesh() -> Mesh {
    let positions: Vec<[f32; 3]> = vec![
        [-1.0, 0.0, -1.0],
        [1.0, 0.0, -1.0],
        [1.0, 0.0, 1.0],
        [-1.0, 0.0, 1.0],
    ];
    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_indices(Indices::U32(vec![0, 1, 2, 0, 2, 3]))
}

#[test]
fn test_extract_indexed_mesh() {
    let mut triangles = Vec::new();
    let appended =
        append_mesh_triangles(&quad_mesh(), &GlobalTransform::IDENTITY, &mut triangles);

    assert_eq!(appended, 2);
    let surface = NavmeshSurface::new(triangles);
    let height = surface.height_below(0.0, 0.0, 100.0).unwrap();
    assert!(height.abs() < 1e-4);
}

#[test]
fn test_extract_applies_world_transform() {
    let transform = GlobalTransform::from(Transform::from_xyz(10.0, 5.0, 0.0));
    let mut triangles = Vec::new();
    append_mesh_triangles(&quad_mesh(), &transform, &mut triangles);

    let surface = NavmeshSurface::new(triangles);
    assert!(surface.height_below(0.0, 0.0, 100.0).is_none());
    let height = surface.height_below(10.0, 0.0, 100.0).unwrap();
    assert!((height - 5.0).abs() < 1e-4);
}

#[test]
fn test_extract_non_indexed_mesh() {
    let positions: Vec<[f32; 3]> = vec![
        [-1.0, 0.0, -1.0],
        [1.0, 0.0, -1.0],
        [1.0, 0.0, 1.0],
    ];
    let mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions);

    let mut triangles = Vec::new();
    assert_eq!(
        append_mesh_triangles(&mesh, &GlobalTransform::IDENTITY, &mut triangles),
        1
    );
}

#[test]
fn test_extract_skips_non_triangle_topology() {
    let positions: Vec<[f32; 3]> = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]];
    let mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions);

    let mut triangles = Vec::new();
    assert_eq!(
        append_mesh_triangles(&mesh, &GlobalTransform::IDENTITY, &mut triangles),
        0
    );
}
