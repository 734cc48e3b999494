/// A 2D scale and offset applied to texture coordinates at sample time.
///
/// Produced by [`cover_fit`]; the renderer applies it to the patterned
/// surface's sampler. It owns no other state and is recomputed whenever the
/// source image or the plate's world aspect changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverTransform {
    /// Horizontal repeat factor.
    pub scale_u: f64,
    /// Vertical repeat factor.
    pub scale_v: f64,
    /// Horizontal offset centering the crop.
    pub offset_u: f64,
    /// Vertical offset centering the crop.
    pub offset_v: f64,
}

impl CoverTransform {
    /// The identity fit: no scaling, no offset.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            scale_u: 1.0,
            scale_v: 1.0,
            offset_u: 0.0,
            offset_v: 0.0,
        }
    }
}

/// Computes a centered, aspect-preserving "cover" fit of an image onto the
/// plate's patterned surface.
///
/// A relatively wider plate crops the image top and bottom to fill the
/// width; a relatively taller plate crops left and right to fill the
/// height. Either way the image is never stretched.
///
/// `image_size` is the decoded pixel size, if available. Missing or
/// zero-sized images fall back to a 1:1 aspect so rendering proceeds with a
/// visually neutral fit instead of propagating NaN.
#[must_use]
pub fn cover_fit(plate_aspect: f64, image_size: Option<(u32, u32)>) -> CoverTransform {
    let image_aspect = match image_size {
        Some((w, h)) if w > 0 && h > 0 => f64::from(w) / f64::from(h),
        _ => 1.0,
    };

    if plate_aspect > image_aspect {
        let scale = image_aspect / plate_aspect;
        CoverTransform {
            scale_u: 1.0,
            scale_v: scale,
            offset_u: 0.0,
            offset_v: (1.0 - scale) / 2.0,
        }
    } else {
        let scale = plate_aspect / image_aspect;
        CoverTransform {
            scale_u: scale,
            scale_v: 1.0,
            offset_u: (1.0 - scale) / 2.0,
            offset_v: 0.0,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ── Crop direction ─────────────────────────────────────────

    #[test]
    fn wider_plate_crops_vertically() {
        let fit = cover_fit(1.6, Some((100, 100)));
        assert_relative_eq!(fit.scale_u, 1.0);
        assert_relative_eq!(fit.scale_v, 0.625);
        assert_relative_eq!(fit.offset_u, 0.0);
        assert_relative_eq!(fit.offset_v, 0.1875);
    }

    #[test]
    fn taller_plate_crops_horizontally() {
        let fit = cover_fit(0.9, Some((200, 200)));
        assert_relative_eq!(fit.scale_u, 0.9);
        assert_relative_eq!(fit.scale_v, 1.0);
        assert_relative_eq!(fit.offset_u, 0.05);
        assert_relative_eq!(fit.offset_v, 0.0);
    }

    #[test]
    fn matching_aspects_are_identity() {
        let fit = cover_fit(1.5, Some((300, 200)));
        assert_eq!(fit, CoverTransform::identity());
    }

    #[test]
    fn landscape_image_on_square_plate() {
        let fit = cover_fit(1.0, Some((200, 100)));
        assert_relative_eq!(fit.scale_u, 0.5);
        assert_relative_eq!(fit.offset_u, 0.25);
        assert_relative_eq!(fit.scale_v, 1.0);
    }

    // ── Degenerate input ───────────────────────────────────────

    #[test]
    fn missing_image_falls_back_to_square_aspect() {
        assert_eq!(cover_fit(1.0, None), CoverTransform::identity());
        let fit = cover_fit(1.6, None);
        assert_relative_eq!(fit.scale_v, 0.625);
    }

    #[test]
    fn zero_sized_image_falls_back_to_square_aspect() {
        assert_eq!(cover_fit(1.0, Some((0, 100))), CoverTransform::identity());
        assert_eq!(cover_fit(1.0, Some((100, 0))), CoverTransform::identity());
    }

    #[test]
    fn crop_is_centered() {
        let fit = cover_fit(2.0, Some((100, 100)));
        assert_relative_eq!(fit.offset_v * 2.0 + fit.scale_v, 1.0);
    }
}
