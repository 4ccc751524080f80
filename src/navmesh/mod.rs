//! Navmesh domain: the walkable surface and its ray queries.

mod extract;
mod surface;

#[cfg(test)]
mod tests;

pub use extract::append_mesh_triangles;
pub use surface::NavmeshSurface;
