use std::str::FromStr;

use crate::error::{ConfigError, Result};

/// The closed set of supported plate shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Round plate built as a surface of revolution.
    Round,
    /// Square plate built by slumping a subdivided box.
    Square,
    /// Rectangular platter: wider footprint, shallower rim than square.
    Rectangular,
}

impl ShapeKind {
    /// Footprint multipliers `(width, depth)` applied to the base size.
    #[must_use]
    pub fn footprint(self) -> (f64, f64) {
        match self {
            ShapeKind::Round | ShapeKind::Square => (1.0, 1.0),
            ShapeKind::Rectangular => (1.5, 0.75),
        }
    }
}

impl FromStr for ShapeKind {
    type Err = ConfigError;

    /// Parses a shape selector string.
    ///
    /// The selector comes from a closed enumeration upstream, so anything
    /// unrecognized is an error rather than a silent default.
    fn from_str(s: &str) -> std::result::Result<Self, ConfigError> {
        match s.to_ascii_lowercase().as_str() {
            "round" => Ok(ShapeKind::Round),
            "square" => Ok(ShapeKind::Square),
            "rectangular" => Ok(ShapeKind::Rectangular),
            _ => Err(ConfigError::UnknownShape(s.to_string())),
        }
    }
}

/// Immutable per-build shape configuration.
///
/// Width and depth are derived from a single base size and the kind's
/// footprint multipliers; a mesh is rebuilt wholesale whenever this changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeConfig {
    /// Which builder to use.
    pub kind: ShapeKind,
    /// World-space extent along X.
    pub width: f64,
    /// World-space extent along Z.
    pub depth: f64,
}

impl ShapeConfig {
    /// Creates a configuration from a shape kind and base size.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_size` is not strictly positive.
    pub fn new(kind: ShapeKind, base_size: f64) -> Result<Self> {
        if base_size <= 0.0 || !base_size.is_finite() {
            return Err(ConfigError::NonPositive {
                name: "base_size",
                value: base_size,
            }
            .into());
        }
        let (wx, wz) = kind.footprint();
        Ok(Self {
            kind,
            width: base_size * wx,
            depth: base_size * wz,
        })
    }

    /// World-space aspect ratio `width / depth`.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.width / self.depth
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // ── Selector parsing ───────────────────────────────────────

    #[test]
    fn parses_known_selectors() {
        assert_eq!(ShapeKind::from_str("round").unwrap(), ShapeKind::Round);
        assert_eq!(ShapeKind::from_str("square").unwrap(), ShapeKind::Square);
        assert_eq!(
            ShapeKind::from_str("Rectangular").unwrap(),
            ShapeKind::Rectangular
        );
    }

    #[test]
    fn unknown_selector_is_an_error() {
        let err = ShapeKind::from_str("oval");
        assert!(matches!(err, Err(ConfigError::UnknownShape(_))));
    }

    // ── Dimensions ─────────────────────────────────────────────

    #[test]
    fn rectangular_is_wider_and_shallower_than_square() {
        let square = ShapeConfig::new(ShapeKind::Square, 1.0).unwrap();
        let rect = ShapeConfig::new(ShapeKind::Rectangular, 1.0).unwrap();
        assert!(rect.width > square.width);
        assert!(rect.depth < square.depth);
        assert!(rect.aspect() > 1.0);
    }

    #[test]
    fn round_footprint_is_square() {
        let cfg = ShapeConfig::new(ShapeKind::Round, 0.8).unwrap();
        assert!((cfg.width - cfg.depth).abs() < 1e-12);
        assert!((cfg.aspect() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn non_positive_base_size_is_rejected() {
        assert!(ShapeConfig::new(ShapeKind::Round, 0.0).is_err());
        assert!(ShapeConfig::new(ShapeKind::Square, -1.0).is_err());
    }
}
