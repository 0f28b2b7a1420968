//! Rectangles within the sprite sheet

use serde::Serialize;
use std::fmt;

/// A badge's position and size within the sprite sheet.
///
/// Origin is top-left. Every frame in the lookup table is a literal constant
/// with non-zero width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Frame {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Frame {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Edge coordinates of this frame, right and bottom exclusive.
    pub fn to_bounds(&self) -> Bounds {
        Bounds {
            left: self.x,
            top: self.y,
            right: self.x + self.width,
            bottom: self.y + self.height,
        }
    }

    /// Whether the frame lies entirely inside an image of the given size.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        let bounds = self.to_bounds();
        bounds.right <= width && bounds.bottom <= height
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// Edge form of a [`Frame`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

/// The same badge rendered once for each theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameSet {
    pub light: Frame,
    pub dark: Frame,
}

impl FrameSet {
    pub const fn new(light: Frame, dark: Frame) -> Self {
        Self { light, dark }
    }

    /// Pick the frame for the requested theme.
    pub fn select(&self, is_dark: bool) -> Frame {
        if is_dark {
            self.dark
        } else {
            self.light
        }
    }
}
