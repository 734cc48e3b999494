use crate::config::{ShapeConfig, ShapeKind};
use crate::error::Result;
use crate::mesh::Mesh;
use crate::profile::ProfileParams;

use super::{RevolvePlate, SlumpParams, SlumpPlate};

/// Default angular resolution for the round plate's sweep.
pub const DEFAULT_RADIAL_SEGMENTS: usize = 128;

/// Builds a complete plate mesh for a shape configuration.
///
/// Pure and deterministic: identical configurations produce bit-identical
/// meshes, so callers are free to memoize on the configuration. The result
/// replaces any previous mesh wholesale; nothing is patched in place.
pub struct BuildPlate {
    config: ShapeConfig,
}

impl BuildPlate {
    /// Creates a new `BuildPlate` operation.
    #[must_use]
    pub fn new(config: ShapeConfig) -> Self {
        Self { config }
    }

    /// Executes the build, dispatching to the revolve or slump builder.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration's dimensions are degenerate.
    pub fn execute(&self) -> Result<Mesh> {
        match self.config.kind {
            ShapeKind::Round => {
                let params = ProfileParams::for_diameter(self.config.width)?;
                RevolvePlate::new(params, DEFAULT_RADIAL_SEGMENTS).execute()
            }
            ShapeKind::Square | ShapeKind::Rectangular => {
                let params = SlumpParams::for_kind(self.config.kind);
                SlumpPlate::new(self.config, params).execute()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::material::validate_coverage;

    fn build(kind: ShapeKind) -> Mesh {
        let config = ShapeConfig::new(kind, 1.0).unwrap();
        BuildPlate::new(config).execute().unwrap()
    }

    #[test]
    fn every_kind_builds_a_covered_mesh() {
        for kind in [ShapeKind::Round, ShapeKind::Square, ShapeKind::Rectangular] {
            let mesh = build(kind);
            assert!(!mesh.positions.is_empty());
            assert_eq!(mesh.normals.len(), mesh.vertex_count());
            assert_eq!(mesh.uvs.len(), mesh.vertex_count());
            validate_coverage(&mesh.groups, mesh.indices.len()).unwrap();
        }
    }

    #[test]
    fn round_vertex_count_matches_revolve_formula() {
        let params = ProfileParams::default();
        let mesh = build(ShapeKind::Round);
        let expected = params.point_count() * (DEFAULT_RADIAL_SEGMENTS + 1);
        assert_eq!(mesh.vertex_count(), expected);
    }

    #[test]
    fn rebuild_is_idempotent() {
        for kind in [ShapeKind::Round, ShapeKind::Square, ShapeKind::Rectangular] {
            assert_eq!(build(kind), build(kind));
        }
    }
}
