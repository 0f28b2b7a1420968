//! Badgesprite - Library for extracting badge icons from a sprite sheet
//!
//! This library provides functionality to:
//! - Look up a badge's frame by size, screen density and theme
//! - Crop and stretch that frame onto an output surface
//! - Derive stable cache identities for each crop

pub mod cli;
pub mod config;
pub mod density;
pub mod error;
pub mod frame;
pub mod output;
pub mod size;
pub mod table;
pub mod transform;

pub use density::{parse_density, Density};
pub use error::SpriteError;
pub use frame::{Frame, FrameSet};
pub use size::Size;
pub use table::resolve;
pub use transform::{crop, identity, BadgeSpriteTransform};
