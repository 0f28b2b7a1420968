//! Error types for badge lookup and cropping

use crate::frame::Frame;

/// Errors that can occur while resolving or cropping a badge
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SpriteError {
    /// Density string matched none of the canonical tags
    #[error("unknown density: '{0}' (expected ldpi, mdpi, hdpi, xhdpi, xxhdpi or xxxhdpi)")]
    UnknownDensity(String),

    /// Size string is neither a size code nor an integer ordinal
    #[error("unknown size: '{0}' (expected small, medium, large, xlarge, badge_60 or an ordinal)")]
    UnknownSize(String),

    /// Resolved frame does not fit inside the supplied sprite sheet
    #[error("frame {frame} lies outside the {width}x{height} sprite sheet")]
    FrameOutOfBounds { frame: Frame, width: u32, height: u32 },

    /// Requested output surface has a zero dimension
    #[error("invalid destination size {width}x{height}")]
    EmptyDestination { width: u32, height: u32 },
}
