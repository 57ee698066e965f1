//! # Face Vertices
//!
//! A face slot such as `3/1/2`, `3//2` or `-1` names a position, an optional
//! texture coordinate and an optional normal. Once resolved against the
//! attribute counts seen so far it becomes the deduplication key for output
//! vertices.

/// Attribute counts at the point a face is read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttributeCounts {
    /// Positions (`v`) read so far.
    pub positions: usize,
    /// Texture coordinates (`vt`) read so far.
    pub tex_coords: usize,
    /// Normals (`vn`) read so far.
    pub normals: usize,
}

/// Resolved, zero-based attribute indices of one face slot.
///
/// `None` marks a missing or unresolvable texture coordinate or normal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaceVertex {
    /// Position index.
    pub vi: u32,
    /// Texture coordinate index.
    pub ti: Option<u32>,
    /// Normal index.
    pub ni: Option<u32>,
}

impl FaceVertex {
    /// Parses and resolves a face slot.
    ///
    /// Returns `None` when the position cannot be resolved, in which case the
    /// whole face is abandoned.
    #[must_use]
    pub fn parse(token: &str, counts: AttributeCounts) -> Option<Self> {
        let mut parts = token.split('/');

        let vi = resolve(parts.next()?, counts.positions)?;
        let ti = parts.next().and_then(|t| resolve(t, counts.tex_coords));
        let ni = parts.next().and_then(|n| resolve(n, counts.normals));

        Some(Self { vi, ti, ni })
    }
}

/// Converts a 1-based (or negative, relative) index to a zero-based one.
///
/// Positive indices count from the start, negative ones from the end of the
/// `count` entries read so far. Zero, empty, non-numeric and out-of-range
/// tokens resolve to `None`.
#[must_use]
pub fn resolve(token: &str, count: usize) -> Option<u32> {
    let raw: i64 = token.parse().ok()?;
    let count = i64::try_from(count).ok()?;

    let resolved = match raw {
        0 => return None,
        r if r < 0 => count + r,
        r => r - 1,
    };

    if (0..count).contains(&resolved) {
        u32::try_from(resolved).ok()
    } else {
        None
    }
}
