//! Badge coordinates within the shipped sprite sheet
//!
//! One row per [`Size`], one column per [`Density`]. Indexing by variant makes
//! the table total over both enumerations.

use crate::density::Density;
use crate::frame::{Frame, FrameSet};
use crate::size::Size;

/// Bump whenever any coordinate below changes; cached crops keyed on the
/// old identity become unreachable.
pub const VERSION: u32 = 2;

const fn set(light: Frame, dark: Frame) -> FrameSet {
    FrameSet::new(light, dark)
}

const fn f(x: u32, y: u32, width: u32, height: u32) -> Frame {
    Frame::new(x, y, width, height)
}

/// Same frame for both themes
const fn same(frame: Frame) -> FrameSet {
    FrameSet::new(frame, frame)
}

#[rustfmt::skip]
static FRAMES: [[FrameSet; 6]; 5] = [
    // Small
    [
        set(f(124, 1, 13, 13),  f(145, 31, 13, 13)),
        set(f(163, 1, 16, 16),  f(189, 39, 16, 16)),
        set(f(244, 1, 25, 25),  f(283, 58, 25, 25)),
        set(f(323, 1, 32, 32),  f(373, 75, 32, 32)),
        set(f(483, 1, 48, 48),  f(557, 111, 48, 48)),
        set(f(643, 1, 64, 64),  f(741, 147, 64, 64)),
    ],
    // Medium
    [
        set(f(124, 16, 19, 19), f(160, 31, 19, 19)),
        set(f(163, 19, 24, 24), f(207, 39, 24, 24)),
        set(f(244, 28, 37, 37), f(310, 58, 37, 37)),
        set(f(323, 35, 48, 48), f(407, 75, 48, 48)),
        set(f(483, 51, 72, 72), f(607, 111, 72, 72)),
        set(f(643, 67, 96, 96), f(807, 147, 96, 96)),
    ],
    // Large
    [
        set(f(145, 1, 28, 28),   f(124, 46, 28, 28)),
        set(f(189, 1, 36, 36),   f(163, 57, 36, 36)),
        set(f(283, 1, 55, 55),   f(244, 85, 55, 55)),
        set(f(373, 1, 72, 72),   f(323, 109, 72, 72)),
        set(f(557, 1, 108, 108), f(483, 161, 108, 108)),
        set(f(741, 1, 144, 144), f(643, 213, 144, 144)),
    ],
    // ExtraLarge
    [
        same(f(1, 1, 121, 121)),
        same(f(1, 1, 160, 160)),
        same(f(1, 1, 241, 241)),
        same(f(1, 1, 320, 320)),
        same(f(1, 1, 480, 480)),
        same(f(1, 1, 640, 640)),
    ],
    // Badge60
    [
        same(f(124, 76, 45, 45)),
        same(f(163, 101, 60, 60)),
        same(f(244, 151, 90, 90)),
        same(f(323, 201, 120, 120)),
        same(f(483, 301, 180, 180)),
        same(f(643, 401, 240, 240)),
    ],
];

/// Both theme frames for a size and density.
pub fn frame_set(size: Size, density: Density) -> &'static FrameSet {
    &FRAMES[size.index()][density.index()]
}

/// Source frame for a size, density and theme.
///
/// # Examples
///
/// ```
/// use badgesprite::density::Density;
/// use badgesprite::frame::Frame;
/// use badgesprite::size::Size;
/// use badgesprite::table::resolve;
///
/// assert_eq!(resolve(Size::Small, Density::Ldpi, false), Frame::new(124, 1, 13, 13));
/// ```
pub fn resolve(size: Size, density: Density, is_dark: bool) -> Frame {
    let frame = frame_set(size, density).select(is_dark);
    tracing::debug!(%size, %density, is_dark, %frame, "resolved badge frame");
    frame
}

/// Every (size, density) pair with its frames, row by row.
pub fn entries() -> impl Iterator<Item = (Size, Density, &'static FrameSet)> {
    Size::ALL.into_iter().flat_map(|size| {
        Density::ALL
            .into_iter()
            .map(move |density| (size, density, frame_set(size, density)))
    })
}
