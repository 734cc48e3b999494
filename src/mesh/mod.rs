mod normals;

pub use normals::compute_vertex_normals;

use crate::material::MaterialGroup;
use crate::math::{Point2, Point3, Vector3};

/// A finished plate mesh, ready for a renderer to consume.
///
/// An immutable value object: builders construct the complete arrays in one
/// pass and consumers replace whole meshes rather than patching buffers.
/// Normals are always computed from the assembled triangles, never authored.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions.
    pub positions: Vec<Point3>,
    /// Unit-length vertex normals, parallel to `positions`.
    pub normals: Vec<Vector3>,
    /// Texture coordinates, parallel to `positions`. Nominally in `[0, 1]`
    /// but deliberately pushed outside that range on the underside so
    /// clamped sampling shows the texture's edge color.
    pub uvs: Vec<Point2>,
    /// Flat triangle index buffer, three indices per triangle.
    pub indices: Vec<u32>,
    /// Contiguous material ranges covering `indices` exactly.
    pub groups: Vec<MaterialGroup>,
}

impl Mesh {
    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
