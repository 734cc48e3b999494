use crate::error::{ConfigError, Result};
use crate::math::CENTER_EPSILON;

/// Parameters for the round plate's revolve profile.
///
/// Every tuning constant is exposed here rather than hardcoded; the defaults
/// describe a shallow dinner plate with a half-unit radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileParams {
    /// Plate radius at the rim.
    pub radius: f64,
    /// Height of the rim above the center of the top surface.
    pub rim_height: f64,
    /// Vertical thickness of the plate body.
    pub thickness: f64,
    /// Outward bulge of the rim edge, mimicking a rounded glaze edge.
    pub rim_bulge: f64,
    /// Extra UV radius pushed past the texture edge for the underside.
    pub bottom_uv_margin: f64,
    /// Sample count for the top (domed) region.
    pub top_segments: usize,
    /// Sample count for the rim wrap.
    pub rim_segments: usize,
    /// Sample count for the underside.
    pub bottom_segments: usize,
}

impl Default for ProfileParams {
    fn default() -> Self {
        Self {
            radius: 0.5,
            rim_height: 0.06,
            thickness: 0.04,
            rim_bulge: 0.01,
            bottom_uv_margin: 0.025,
            top_segments: 64,
            rim_segments: 8,
            bottom_segments: 48,
        }
    }
}

impl ProfileParams {
    /// Derives round-plate parameters for a target diameter, scaling every
    /// default length proportionally.
    ///
    /// # Errors
    ///
    /// Returns an error if the derived radius is not strictly positive.
    pub fn for_diameter(diameter: f64) -> Result<Self> {
        let base = Self::default();
        let scale = diameter / (2.0 * base.radius);
        let params = Self {
            radius: diameter / 2.0,
            rim_height: base.rim_height * scale,
            thickness: base.thickness * scale,
            rim_bulge: base.rim_bulge * scale,
            bottom_uv_margin: base.bottom_uv_margin * scale,
            ..base
        };
        params.validate()?;
        Ok(params)
    }

    /// Validates all lengths and segment counts.
    ///
    /// # Errors
    ///
    /// Returns an error if any length is non-positive, any ratio is
    /// non-finite, or any segment count is too small.
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("radius", self.radius),
            ("rim_height", self.rim_height),
            ("thickness", self.thickness),
        ];
        for (name, value) in lengths {
            if value <= 0.0 || !value.is_finite() {
                return Err(ConfigError::NonPositive { name, value }.into());
            }
        }
        if self.rim_bulge < 0.0 || self.bottom_uv_margin < 0.0 {
            return Err(ConfigError::NonPositive {
                name: "rim_bulge/bottom_uv_margin",
                value: self.rim_bulge.min(self.bottom_uv_margin),
            }
            .into());
        }
        let counts = [
            ("top_segments", self.top_segments),
            ("rim_segments", self.rim_segments),
            ("bottom_segments", self.bottom_segments),
        ];
        for (name, value) in counts {
            if value < 2 {
                return Err(ConfigError::TooFewSegments {
                    name,
                    min: 2,
                    value,
                }
                .into());
            }
        }
        Ok(())
    }

    /// Total number of profile points produced by [`BuildProfile`].
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.top_segments + self.rim_segments + self.bottom_segments + 1
    }
}

/// Which part of the plate a profile point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The domed top surface, center pole to rim start.
    Top,
    /// The rounded rim edge wrapping down the thickness.
    Rim,
    /// The underside, rim back to the center pole.
    Bottom,
}

/// A single point on the 2D revolve cross-section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    /// Radial distance from the revolve axis.
    pub radius: f64,
    /// Height along the revolve axis.
    pub height: f64,
}

/// The full revolve cross-section plus its texture parametrization data.
///
/// Points run from the top center pole, out over the dome, around the rim,
/// and back under to the pole. `uv_radii` is parallel to `points` and holds
/// the synthetic arc-length radius used for polar texture mapping; it is
/// decoupled from the physical radius so the pattern neither compresses on
/// the curved rim nor re-wraps upside-down on the underside.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCurve {
    /// Ordered cross-section points.
    pub points: Vec<ProfilePoint>,
    /// Parallel synthetic UV radii, one per point.
    pub uv_radii: Vec<f64>,
    /// Index of the last top-region point (the top/rim boundary ring).
    pub top_end: usize,
    /// Index of the last rim-region point.
    pub rim_end: usize,
    /// Total Euclidean arc length accumulated around the rim.
    pub rim_arc_length: f64,
}

impl ProfileCurve {
    /// The region a point index belongs to.
    #[must_use]
    pub fn region(&self, index: usize) -> Region {
        if index <= self.top_end {
            Region::Top
        } else if index <= self.rim_end {
            Region::Rim
        } else {
            Region::Bottom
        }
    }
}

/// Builds the round plate's three-region revolve profile.
pub struct BuildProfile {
    params: ProfileParams,
}

impl BuildProfile {
    /// Creates a new `BuildProfile` operation.
    #[must_use]
    pub fn new(params: ProfileParams) -> Self {
        Self { params }
    }

    /// Executes the build, returning the profile curve.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters fail validation.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<ProfileCurve> {
        self.params.validate()?;
        let p = &self.params;

        let mut points = Vec::with_capacity(p.point_count());
        let mut uv_radii = Vec::with_capacity(p.point_count());

        // Top: continuous parabolic dome from the center pole to the rim.
        // The pole sits at CENTER_EPSILON, not zero, so its ring vertices
        // stay distinct and keep per-column UV indexing intact.
        for i in 0..=p.top_segments {
            let t = i as f64 / p.top_segments as f64;
            let x = (t * p.radius).max(CENTER_EPSILON);
            let y = t * t * p.rim_height;
            points.push(ProfilePoint {
                radius: x,
                height: y,
            });
            uv_radii.push(x);
        }

        // Rim: wrap down by the plate thickness, bulging slightly outward.
        // The running Euclidean arc length (offset by the plate radius)
        // becomes each point's UV radius, so the texture spreads over the
        // curved edge at true surface distance instead of compressing.
        let mut rim_arc = 0.0;
        let mut prev = points[p.top_segments];
        for j in 1..=p.rim_segments {
            let t = j as f64 / p.rim_segments as f64;
            let x = p.radius + (t * std::f64::consts::PI).sin() * p.rim_bulge;
            let y = p.rim_height - t * p.thickness;
            let point = ProfilePoint {
                radius: x,
                height: y,
            };
            rim_arc += (point.radius - prev.radius).hypot(point.height - prev.height);
            points.push(point);
            uv_radii.push(p.radius + rim_arc);
            prev = point;
        }

        // Bottom: back to the pole, mirroring the top's parabolic shape one
        // thickness lower. UV radii keep growing past the real maximum so
        // underside sampling clamps to the texture's edge color.
        for k in 1..=p.bottom_segments {
            let t = k as f64 / p.bottom_segments as f64;
            let x = (p.radius * (1.0 - t)).max(CENTER_EPSILON);
            let s = x / p.radius;
            let y = s * s * p.rim_height - p.thickness;
            points.push(ProfilePoint {
                radius: x,
                height: y,
            });
            uv_radii.push(p.radius + rim_arc + (p.radius - x) + p.bottom_uv_margin);
        }

        Ok(ProfileCurve {
            points,
            uv_radii,
            top_end: p.top_segments,
            rim_end: p.top_segments + p.rim_segments,
            rim_arc_length: rim_arc,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn build_default() -> ProfileCurve {
        BuildProfile::new(ProfileParams::default()).execute().unwrap()
    }

    // ── Structure ──────────────────────────────────────────────

    #[test]
    fn point_count_matches_segment_sum() {
        let p = ProfileParams::default();
        let curve = build_default();
        assert_eq!(curve.points.len(), p.point_count());
        assert_eq!(curve.uv_radii.len(), curve.points.len());
    }

    #[test]
    fn region_boundaries() {
        let p = ProfileParams::default();
        let curve = build_default();
        assert_eq!(curve.top_end, p.top_segments);
        assert_eq!(curve.rim_end, p.top_segments + p.rim_segments);
        assert_eq!(curve.region(0), Region::Top);
        assert_eq!(curve.region(curve.top_end), Region::Top);
        assert_eq!(curve.region(curve.top_end + 1), Region::Rim);
        assert_eq!(curve.region(curve.rim_end + 1), Region::Bottom);
    }

    #[test]
    fn starts_and_ends_at_the_center_pole() {
        let curve = build_default();
        assert!((curve.points[0].radius - crate::math::CENTER_EPSILON).abs() < 1e-15);
        let last = curve.points[curve.points.len() - 1];
        assert!((last.radius - crate::math::CENTER_EPSILON).abs() < 1e-15);
    }

    #[test]
    fn top_follows_parabola() {
        let p = ProfileParams::default();
        let curve = build_default();
        // Quarter of the way out: height = (1/4)^2 * rim_height.
        let i = p.top_segments / 4;
        let expected = 0.25 * 0.25 * p.rim_height;
        assert!((curve.points[i].height - expected).abs() < 1e-12);
    }

    #[test]
    fn rim_drops_by_thickness() {
        let p = ProfileParams::default();
        let curve = build_default();
        let rim_last = curve.points[curve.rim_end];
        assert!((rim_last.height - (p.rim_height - p.thickness)).abs() < 1e-12);
        // Bulge returns to the plain radius at the rim's end.
        assert!((rim_last.radius - p.radius).abs() < 1e-12);
    }

    #[test]
    fn rim_bulges_outward() {
        let p = ProfileParams::default();
        let curve = build_default();
        let mid = curve.top_end + p.rim_segments / 2;
        assert!(curve.points[mid].radius > p.radius);
    }

    // ── UV radii ───────────────────────────────────────────────

    #[test]
    fn uv_radius_at_boundary_equals_plate_radius() {
        let p = ProfileParams::default();
        let curve = build_default();
        assert!((curve.uv_radii[curve.top_end] - p.radius).abs() < 1e-12);
    }

    #[test]
    fn uv_radii_are_non_decreasing() {
        let curve = build_default();
        for w in curve.uv_radii.windows(2) {
            assert!(w[1] >= w[0], "uv radii must not shrink: {} -> {}", w[0], w[1]);
        }
    }

    #[test]
    fn bottom_uv_radii_exceed_real_maximum() {
        let p = ProfileParams::default();
        let curve = build_default();
        let real_max = p.radius + curve.rim_arc_length;
        for i in (curve.rim_end + 1)..curve.points.len() {
            assert!(curve.uv_radii[i] > real_max);
        }
    }

    #[test]
    fn rim_arc_length_exceeds_thickness() {
        let p = ProfileParams::default();
        let curve = build_default();
        // The rim wraps down the full thickness while bulging, so its arc
        // length is at least the straight drop.
        assert!(curve.rim_arc_length >= p.thickness);
    }

    // ── Validation ─────────────────────────────────────────────

    #[test]
    fn non_positive_radius_is_rejected() {
        let params = ProfileParams {
            radius: 0.0,
            ..ProfileParams::default()
        };
        assert!(BuildProfile::new(params).execute().is_err());
    }

    #[test]
    fn negative_thickness_is_rejected() {
        let params = ProfileParams {
            thickness: -0.1,
            ..ProfileParams::default()
        };
        assert!(BuildProfile::new(params).execute().is_err());
    }

    #[test]
    fn tiny_segment_counts_are_rejected() {
        let params = ProfileParams {
            rim_segments: 1,
            ..ProfileParams::default()
        };
        assert!(BuildProfile::new(params).execute().is_err());
    }

    #[test]
    fn for_diameter_scales_lengths() {
        let params = ProfileParams::for_diameter(2.0).unwrap();
        let base = ProfileParams::default();
        assert!((params.radius - 1.0).abs() < 1e-12);
        let scale = 1.0 / base.radius;
        assert!((params.rim_height - base.rim_height * scale).abs() < 1e-12);
        assert!(ProfileParams::for_diameter(0.0).is_err());
    }
}
