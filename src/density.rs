//! Screen density buckets

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::SpriteError;

/// Screen pixel density classification used to pick pre-scaled art
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Ldpi,
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    /// Every bucket, in table column order
    pub const ALL: [Density; 6] = [
        Density::Ldpi,
        Density::Mdpi,
        Density::Hdpi,
        Density::Xhdpi,
        Density::Xxhdpi,
        Density::Xxxhdpi,
    ];

    /// Canonical tag, as reported by the platform
    pub const fn tag(self) -> &'static str {
        match self {
            Density::Ldpi => "ldpi",
            Density::Mdpi => "mdpi",
            Density::Hdpi => "hdpi",
            Density::Xhdpi => "xhdpi",
            Density::Xxhdpi => "xxhdpi",
            Density::Xxxhdpi => "xxxhdpi",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Resolve a density tag to its bucket.
///
/// Matching is exact: no case folding, no trimming.
///
/// # Examples
///
/// ```
/// use badgesprite::density::{parse_density, Density};
///
/// assert_eq!(parse_density("xxhdpi").unwrap(), Density::Xxhdpi);
/// assert!(parse_density("retina").is_err());
/// ```
pub fn parse_density(tag: &str) -> Result<Density, SpriteError> {
    Density::ALL
        .into_iter()
        .find(|density| density.tag() == tag)
        .ok_or_else(|| SpriteError::UnknownDensity(tag.to_string()))
}

impl FromStr for Density {
    type Err = SpriteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_density(s)
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
