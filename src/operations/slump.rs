use crate::config::{ShapeConfig, ShapeKind};
use crate::error::{ConfigError, Result};
use crate::material::{validate_coverage, MaterialGroup, MaterialSlot};
use crate::math::{Point2, Point3, Vector3};
use crate::mesh::{compute_vertex_normals, Mesh};

/// Parameters for the square/rectangular slump displacement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlumpParams {
    /// Subdivision count for the top and bottom face grids.
    pub grid_segments: usize,
    /// Fraction of the shorter half-dimension that stays perfectly flat.
    pub flat_ratio: f64,
    /// Vertical lift reached at the shorter dimension's edge.
    pub lift_height: f64,
    /// Vertical thickness of the prism before slumping.
    pub thickness: f64,
}

impl Default for SlumpParams {
    fn default() -> Self {
        Self {
            grid_segments: 64,
            flat_ratio: 0.6,
            lift_height: 0.08,
            thickness: 0.04,
        }
    }
}

impl SlumpParams {
    /// Default parameters tuned per shape kind.
    ///
    /// Rectangular platters use a smaller lift so they read as a shallower,
    /// wider dish than the square plate.
    #[must_use]
    pub fn for_kind(kind: ShapeKind) -> Self {
        let base = Self::default();
        match kind {
            ShapeKind::Rectangular => Self {
                lift_height: 0.05,
                ..base
            },
            ShapeKind::Round | ShapeKind::Square => base,
        }
    }

    /// Validates segment counts, ratios, and lengths.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is too coarse, the flat ratio leaves no
    /// rim to lift, or any length is non-positive.
    pub fn validate(&self) -> Result<()> {
        if self.grid_segments < 2 {
            return Err(ConfigError::TooFewSegments {
                name: "grid_segments",
                min: 2,
                value: self.grid_segments,
            }
            .into());
        }
        if !(self.flat_ratio > 0.0 && self.flat_ratio < 1.0) {
            return Err(ConfigError::RatioOutOfRange {
                name: "flat_ratio",
                value: self.flat_ratio,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
        if self.thickness <= 0.0 || !self.thickness.is_finite() {
            return Err(ConfigError::NonPositive {
                name: "thickness",
                value: self.thickness,
            }
            .into());
        }
        if self.lift_height < 0.0 || !self.lift_height.is_finite() {
            return Err(ConfigError::NonPositive {
                name: "lift_height",
                value: self.lift_height,
            }
            .into());
        }
        Ok(())
    }
}

/// Builds the square or rectangular plate by slumping a subdivided prism.
///
/// Starts from a flat box with densely subdivided top and bottom faces,
/// then lifts every vertex whose planar distance from the center axis
/// exceeds the flat radius. The lift is quadratic in the overshoot, which
/// gives a dead-flat center and a smoothly accelerating raised rim.
pub struct SlumpPlate {
    config: ShapeConfig,
    params: SlumpParams,
}

impl SlumpPlate {
    /// Creates a new `SlumpPlate` operation.
    #[must_use]
    pub fn new(config: ShapeConfig, params: SlumpParams) -> Self {
        Self { config, params }
    }

    /// Executes the build, returning the finished plate mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions or slump parameters fail
    /// validation.
    pub fn execute(&self) -> Result<Mesh> {
        self.params.validate()?;
        let (w, d) = (self.config.width, self.config.depth);
        for (name, value) in [("width", w), ("depth", d)] {
            if value <= 0.0 || !value.is_finite() {
                return Err(ConfigError::NonPositive { name, value }.into());
            }
        }
        let t = self.params.thickness;
        let n = self.params.grid_segments;

        let mut builder = PrismBuilder::default();

        // Top face carries the pattern; everything else is base finish.
        // Each face owns a contiguous index range, so the six box faces
        // map directly onto material groups.
        builder.grid_face(
            Point3::new(-w / 2.0, 0.0, -d / 2.0),
            Vector3::new(w, 0.0, 0.0),
            Vector3::new(0.0, 0.0, d),
            n,
            n,
            MaterialSlot::Pattern,
        );
        builder.grid_face(
            Point3::new(-w / 2.0, -t, -d / 2.0),
            Vector3::new(0.0, 0.0, d),
            Vector3::new(w, 0.0, 0.0),
            n,
            n,
            MaterialSlot::Base,
        );
        builder.grid_face(
            Point3::new(-w / 2.0, 0.0, d / 2.0),
            Vector3::new(w, 0.0, 0.0),
            Vector3::new(0.0, -t, 0.0),
            n,
            1,
            MaterialSlot::Base,
        );
        builder.grid_face(
            Point3::new(w / 2.0, 0.0, -d / 2.0),
            Vector3::new(-w, 0.0, 0.0),
            Vector3::new(0.0, -t, 0.0),
            n,
            1,
            MaterialSlot::Base,
        );
        builder.grid_face(
            Point3::new(w / 2.0, 0.0, d / 2.0),
            Vector3::new(0.0, 0.0, -d),
            Vector3::new(0.0, -t, 0.0),
            n,
            1,
            MaterialSlot::Base,
        );
        builder.grid_face(
            Point3::new(-w / 2.0, 0.0, -d / 2.0),
            Vector3::new(0.0, 0.0, d),
            Vector3::new(0.0, -t, 0.0),
            n,
            1,
            MaterialSlot::Base,
        );

        let PrismBuilder {
            mut positions,
            uvs,
            indices,
            groups,
        } = builder;

        let half_min = w.min(d) / 2.0;
        let flat_radius = self.params.flat_ratio * half_min;
        for position in &mut positions {
            let dist = position.x.hypot(position.z);
            position.y += rim_lift(dist, flat_radius, half_min, self.params.lift_height);
        }

        let normals = compute_vertex_normals(&positions, &indices);
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

/// Quadratic rim lift: zero inside the flat radius, accelerating smoothly
/// out to `lift_height` at the shorter dimension's half-width and beyond it
/// toward the corners.
fn rim_lift(dist: f64, flat_radius: f64, half_min: f64, lift_height: f64) -> f64 {
    if dist <= flat_radius {
        return 0.0;
    }
    let s = (dist - flat_radius) / (half_min - flat_radius);
    s * s * lift_height
}

/// Accumulates per-face vertex grids into shared mesh buffers.
#[derive(Default)]
struct PrismBuilder {
    positions: Vec<Point3>,
    uvs: Vec<Point2>,
    indices: Vec<u32>,
    groups: Vec<MaterialGroup>,
}

impl PrismBuilder {
    /// Adds one face as a `cols x rows` vertex grid spanned by `du` and
    /// `dv` from `origin`. Winding is chosen so the outward face normal is
    /// `dv x du`.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn grid_face(
        &mut self,
        origin: Point3,
        du: Vector3,
        dv: Vector3,
        cols: usize,
        rows: usize,
        slot: MaterialSlot,
    ) {
        let base = self.positions.len() as u32;
        let group_start = self.indices.len() as u32;

        for j in 0..=rows {
            let fv = j as f64 / rows as f64;
            for i in 0..=cols {
                let fu = i as f64 / cols as f64;
                self.positions.push(origin + du * fu + dv * fv);
                self.uvs.push(Point2::new(fu, fv));
            }
        }

        let stride = (cols + 1) as u32;
        for j in 0..rows as u32 {
            for i in 0..cols as u32 {
                let a = base + j * stride + i;
                let b = a + 1;
                let c = a + stride;
                let d = c + 1;
                self.indices.extend_from_slice(&[a, c, d, a, d, b]);
            }
        }

        self.groups.push(MaterialGroup {
            start: group_start,
            count: self.indices.len() as u32 - group_start,
            slot,
        });
    }
}
