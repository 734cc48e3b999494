use crate::error::{GeometryError, Result};
use crate::profile::ProfileParams;

/// Material slot identifiers resolved to shaded materials by the renderer.
///
/// Plain data only: the core never touches colors, roughness, or shading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialSlot {
    /// The decorated surface carrying the user's pattern texture.
    Pattern,
    /// The plain base finish (underside, skirt).
    Base,
}

/// A contiguous range of the flat index buffer tagged with a material slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialGroup {
    /// First index of the range.
    pub start: u32,
    /// Number of indices in the range (a multiple of 3).
    pub count: u32,
    /// Material slot for every triangle in the range.
    pub slot: MaterialSlot,
}

/// Partitions a revolve mesh's index buffer into pattern and base ranges.
///
/// The split point is derived from the same segment counts that built the
/// profile curve, so the boundary always lands on the top/rim-to-bottom
/// transition band no matter how the constants are tuned.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn revolve_groups(params: &ProfileParams, radial_segments: usize) -> Vec<MaterialGroup> {
    let indices_per_band = radial_segments * 6;
    let split = (params.top_segments + params.rim_segments) * indices_per_band;
    let total =
        (params.top_segments + params.rim_segments + params.bottom_segments) * indices_per_band;

    vec![
        MaterialGroup {
            start: 0,
            count: split as u32,
            slot: MaterialSlot::Pattern,
        },
        MaterialGroup {
            start: split as u32,
            count: (total - split) as u32,
            slot: MaterialSlot::Base,
        },
    ]
}

/// Checks that groups are sorted, contiguous, non-overlapping, and cover the
/// index buffer exactly once.
///
/// # Errors
///
/// Returns an error describing the first gap, overlap, or length mismatch.
pub fn validate_coverage(groups: &[MaterialGroup], index_count: usize) -> Result<()> {
    let mut cursor: u32 = 0;
    for (i, group) in groups.iter().enumerate() {
        if group.start != cursor {
            return Err(GeometryError::GroupCoverage(format!(
                "group {i} starts at {} but the previous range ends at {cursor}",
                group.start
            ))
            .into());
        }
        if group.count == 0 || group.count % 3 != 0 {
            return Err(GeometryError::GroupCoverage(format!(
                "group {i} has count {} (must be a positive multiple of 3)",
                group.count
            ))
            .into());
        }
        cursor += group.count;
    }
    if cursor as usize != index_count {
        return Err(GeometryError::GroupCoverage(format!(
            "groups cover {cursor} indices but the buffer holds {index_count}"
        ))
        .into());
    }
    Ok(())
}
