use crate::math::{Point3, Vector3, TOLERANCE};

/// Computes face-weighted averaged vertex normals.
///
/// Each triangle contributes its unnormalized cross product (proportional to
/// its area) to all three of its vertices; the accumulated sums are then
/// normalized. Larger faces therefore dominate shared vertices, which keeps
/// shading stable where the rim bulge meets the flatter regions.
///
/// Vertices referenced by no triangle (or only by degenerate ones) fall back
/// to the up axis.
#[must_use]
pub fn compute_vertex_normals(positions: &[Point3], indices: &[u32]) -> Vec<Vector3> {
    let mut accum = vec![Vector3::zeros(); positions.len()];

    for tri in indices.chunks_exact(3) {
        let a = positions[tri[0] as usize];
        let b = positions[tri[1] as usize];
        let c = positions[tri[2] as usize];
        let face = (b - a).cross(&(c - a));
        for &i in tri {
            accum[i as usize] += face;
        }
    }

    accum
        .into_iter()
        .map(|n| {
            let len = n.norm();
            if len < TOLERANCE {
                Vector3::y()
            } else {
                n / len
            }
        })
        .collect()
}
