use std::f64::consts::TAU;

use crate::error::{ConfigError, Result};
use crate::material::{revolve_groups, validate_coverage};
use crate::math::{Point3, TOLERANCE};
use crate::mesh::{compute_vertex_normals, Mesh};
use crate::profile::{BuildProfile, ProfileParams};
use crate::uv::UvParametrizer;

/// Builds the round plate by sweeping the profile curve around the Y axis.
///
/// Each profile point becomes a ring of `radial_segments + 1` vertices (the
/// seam column is duplicated so texture coordinates stay monotonic around
/// the sweep), and adjacent rings are stitched with two triangles per quad.
/// Normals are computed from the assembled triangles because the rim bulge
/// and dome curvature interact; no analytic normal would be right.
pub struct RevolvePlate {
    params: ProfileParams,
    radial_segments: usize,
}

impl RevolvePlate {
    /// Creates a new `RevolvePlate` operation.
    #[must_use]
    pub fn new(params: ProfileParams, radial_segments: usize) -> Self {
        Self {
            params,
            radial_segments,
        }
    }

    /// Executes the sweep, returning the finished plate mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile parameters fail validation or the
    /// radial segment count is below 3.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<Mesh> {
        if self.radial_segments < 3 {
            return Err(ConfigError::TooFewSegments {
                name: "radial_segments",
                min: 3,
                value: self.radial_segments,
            }
            .into());
        }

        let profile = BuildProfile::new(self.params).execute()?;
        let parametrizer = UvParametrizer::new(&profile);

        let cols = self.radial_segments + 1;
        let vertex_count = profile.points.len() * cols;
        let mut positions = Vec::with_capacity(vertex_count);
        let mut uvs = Vec::with_capacity(vertex_count);

        for (ring, point) in profile.points.iter().enumerate() {
            for s in 0..cols {
                let angle = TAU * s as f64 / self.radial_segments as f64;
                let position = Point3::new(
                    point.radius * angle.cos(),
                    point.height,
                    point.radius * angle.sin(),
                );
                uvs.push(parametrizer.uv_for(ring, &position));
                positions.push(position);
            }
        }

        let bands = profile.points.len() - 1;
        let mut indices = Vec::with_capacity(bands * self.radial_segments * 6);
        for band in 0..bands {
            let ring0 = (band * cols) as u32;
            let ring1 = ((band + 1) * cols) as u32;
            for s in 0..self.radial_segments as u32 {
                let a = ring0 + s;
                let b = ring1 + s;
                let c = ring0 + s + 1;
                let d = ring1 + s + 1;
                indices.extend_from_slice(&[a, c, d, a, d, b]);
            }
        }

        let mut normals = compute_vertex_normals(&positions, &indices);

        // The duplicated seam columns sample the same surface point, so
        // average their accumulated normals to keep shading continuous
        // across the seam.
        for ring in 0..profile.points.len() {
            let first = ring * cols;
            let last = first + self.radial_segments;
            let merged = normals[first] + normals[last];
            let len = merged.norm();
            if len > TOLERANCE {
                let merged = merged / len;
                normals[first] = merged;
                normals[last] = merged;
            }
        }

        let groups = revolve_groups(&self.params, self.radial_segments);
        validate_coverage(&groups, indices.len())?;

        Ok(Mesh {
            positions,
            normals,
            uvs,
            indices,
            groups,
        })
    }
}
