//! Badge crop transform
//!
//! Cuts the badge for a size, density and theme out of the sprite sheet and
//! stretches it over the requested output surface. Two transforms with the
//! same identity string produce the same output and are interchangeable as
//! cache keys.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use sha2::{Digest, Sha256};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::density::parse_density;
use crate::error::SpriteError;
use crate::size::Size;
use crate::table::{resolve, VERSION};

/// Transform name embedded in every identity string
const KIND: &str = "BadgeSpriteTransformation";

/// Source of destination surfaces.
///
/// Returned surfaces must be `width` x `height` and fully transparent. The
/// caller owns the surface once the transform hands it back.
pub trait SurfacePool {
    fn get(&mut self, width: u32, height: u32) -> RgbaImage;
}

/// Pool that allocates a fresh surface for every request
#[derive(Debug, Default, Clone, Copy)]
pub struct AllocatingPool;

impl SurfacePool for AllocatingPool {
    fn get(&mut self, width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]))
    }
}

/// Cache identity for a crop with the given parameters.
///
/// # Examples
///
/// ```
/// use badgesprite::size::Size;
/// use badgesprite::transform::identity;
///
/// assert_eq!(
///     identity(Size::Small, "mdpi", true),
///     "BadgeSpriteTransformation(small,mdpi,true).2"
/// );
/// ```
pub fn identity(size: Size, density: &str, is_dark: bool) -> String {
    format!("{}({},{},{}).{}", KIND, size.code(), density, is_dark, VERSION)
}

/// Crop a badge into a freshly allocated surface.
pub fn crop(
    source: &RgbaImage,
    out_width: u32,
    out_height: u32,
    size: Size,
    density: &str,
    is_dark: bool,
) -> Result<RgbaImage, SpriteError> {
    BadgeSpriteTransform::new(size, density, is_dark).transform(
        &mut AllocatingPool,
        source,
        out_width,
        out_height,
    )
}

/// A configured badge crop.
///
/// The density tag is kept as supplied and only checked when the transform
/// runs, so construction never fails.
#[derive(Debug, Clone)]
pub struct BadgeSpriteTransform {
    size: Size,
    density: String,
    is_dark: bool,
    id: String,
}

impl BadgeSpriteTransform {
    pub fn new(size: Size, density: impl Into<String>, is_dark: bool) -> Self {
        let density = density.into();
        let id = identity(size, &density, is_dark);
        Self {
            size,
            density,
            is_dark,
            id,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn density(&self) -> &str {
        &self.density
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Feed the identity into a disk cache key digest.
    pub fn update_disk_cache_key<D: Digest>(&self, digest: &mut D) {
        digest.update(self.id.as_bytes());
    }

    /// Lowercase hex SHA-256 of the identity.
    pub fn disk_cache_key(&self) -> String {
        let mut hasher = Sha256::new();
        self.update_disk_cache_key(&mut hasher);
        format!("{:x}", hasher.finalize())
    }

    /// Copy this transform's frame out of `source`, stretched to fill an
    /// `out_width` x `out_height` surface taken from `pool`.
    ///
    /// Stretching is nearest-neighbour. A frame that matches the output size
    /// is copied as is.
    pub fn transform<P: SurfacePool + ?Sized>(
        &self,
        pool: &mut P,
        source: &RgbaImage,
        out_width: u32,
        out_height: u32,
    ) -> Result<RgbaImage, SpriteError> {
        if out_width == 0 || out_height == 0 {
            return Err(SpriteError::EmptyDestination {
                width: out_width,
                height: out_height,
            });
        }

        let density = parse_density(&self.density)?;
        let frame = resolve(self.size, density, self.is_dark);
        let (sheet_width, sheet_height) = source.dimensions();
        if !frame.fits_within(sheet_width, sheet_height) {
            return Err(SpriteError::FrameOutOfBounds {
                frame,
                width: sheet_width,
                height: sheet_height,
            });
        }

        let region =
            imageops::crop_imm(source, frame.x, frame.y, frame.width, frame.height).to_image();
        let stretched = if region.dimensions() == (out_width, out_height) {
            region
        } else {
            imageops::resize(&region, out_width, out_height, FilterType::Nearest)
        };

        let mut surface = pool.get(out_width, out_height);
        imageops::replace(&mut surface, &stretched, 0, 0);

        tracing::debug!(
            id = %self.id,
            %frame,
            out_width,
            out_height,
            "cropped badge"
        );
        Ok(surface)
    }
}

impl PartialEq for BadgeSpriteTransform {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for BadgeSpriteTransform {}

impl Hash for BadgeSpriteTransform {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for BadgeSpriteTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::density::Density;
    use crate::frame::Frame;
    use std::collections::HashSet;

    const SHEET_WIDTH: u32 = 200;
    const SHEET_HEIGHT: u32 = 60;

    fn checker(frame: Frame) -> impl Fn(u32, u32) -> Rgba<u8> {
        move |x, y| {
            let dx = (x - frame.x) as u8;
            let dy = (y - frame.y) as u8;
            Rgba([dx * 10, dy * 10, 200, 255])
        }
    }

    /// Sprite sheet that is grey everywhere except a gradient marker at `frame`
    fn sheet_with_marker(frame: Frame) -> RgbaImage {
        let marker = checker(frame);
        let bounds = frame.to_bounds();
        RgbaImage::from_fn(SHEET_WIDTH, SHEET_HEIGHT, |x, y| {
            if x >= bounds.left && x < bounds.right && y >= bounds.top && y < bounds.bottom {
                marker(x, y)
            } else {
                Rgba([128, 128, 128, 255])
            }
        })
    }

    #[test]
    fn test_identity_format() {
        assert_eq!(
            identity(Size::Badge60, "xxxhdpi", false),
            "BadgeSpriteTransformation(badge_60,xxxhdpi,false).2"
        );
    }

    #[test]
    fn test_identity_is_deterministic() {
        let a = identity(Size::Large, "hdpi", true);
        let b = identity(Size::Large, "hdpi", true);
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_identity_is_injective() {
        let mut seen = HashSet::new();
        for size in Size::ALL {
            for density in Density::ALL {
                for is_dark in [false, true] {
                    assert!(seen.insert(identity(size, density.tag(), is_dark)));
                }
            }
        }
        assert_eq!(seen.len(), 60);
    }

    #[test]
    fn test_identity_differs_by_theme_and_size() {
        assert_ne!(identity(Size::Small, "mdpi", false), identity(Size::Small, "mdpi", true));
        assert_ne!(identity(Size::Small, "mdpi", false), identity(Size::Medium, "mdpi", false));
    }

    #[test]
    fn test_identity_carries_version() {
        assert!(identity(Size::Small, "mdpi", false).ends_with(&format!(".{}", VERSION)));
    }

    #[test]
    fn test_equality_and_hash_follow_identity() {
        let a = BadgeSpriteTransform::new(Size::Medium, "xhdpi", true);
        let b = BadgeSpriteTransform::new(Size::Medium, String::from("xhdpi"), true);
        let c = BadgeSpriteTransform::new(Size::Medium, "xhdpi", false);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<BadgeSpriteTransform> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_disk_cache_key() {
        let a = BadgeSpriteTransform::new(Size::Small, "ldpi", false);
        let b = BadgeSpriteTransform::new(Size::Small, "ldpi", true);
        let key = a.disk_cache_key();
        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(key, a.clone().disk_cache_key());
        assert_ne!(key, b.disk_cache_key());

        let mut hasher = Sha256::new();
        hasher.update(a.id().as_bytes());
        assert_eq!(key, format!("{:x}", hasher.finalize()));
    }

    #[test]
    fn test_crop_same_size_copies_marker() {
        let frame = Frame::new(124, 1, 13, 13);
        let sheet = sheet_with_marker(frame);
        let out = crop(&sheet, 13, 13, Size::Small, "ldpi", false).unwrap();

        let marker = checker(frame);
        assert_eq!(out.dimensions(), (13, 13));
        for (x, y, pixel) in out.enumerate_pixels() {
            assert_eq!(*pixel, marker(frame.x + x, frame.y + y), "pixel ({}, {})", x, y);
        }
    }

    #[test]
    fn test_crop_stretches_marker() {
        let frame = Frame::new(124, 1, 13, 13);
        let sheet = sheet_with_marker(frame);
        let out = crop(&sheet, 26, 26, Size::Small, "ldpi", false).unwrap();

        let marker = checker(frame);
        assert_eq!(out.dimensions(), (26, 26));
        for (x, y, pixel) in out.enumerate_pixels() {
            assert_eq!(*pixel, marker(frame.x + x / 2, frame.y + y / 2), "pixel ({}, {})", x, y);
        }
    }

    #[test]
    fn test_crop_dark_theme_uses_dark_frame() {
        let frame = Frame::new(145, 31, 13, 13);
        let sheet = sheet_with_marker(frame);
        let out = crop(&sheet, 13, 13, Size::Small, "ldpi", true).unwrap();
        assert_eq!(*out.get_pixel(0, 0), checker(frame)(frame.x, frame.y));
        assert_eq!(*out.get_pixel(12, 12), checker(frame)(frame.x + 12, frame.y + 12));
    }

    #[test]
    fn test_crop_unknown_density() {
        let sheet = RgbaImage::new(SHEET_WIDTH, SHEET_HEIGHT);
        assert_eq!(
            crop(&sheet, 10, 10, Size::Small, "retina", false),
            Err(SpriteError::UnknownDensity("retina".to_string()))
        );
    }

    #[test]
    fn test_crop_frame_out_of_bounds() {
        let sheet = RgbaImage::new(100, 100);
        let err = crop(&sheet, 10, 10, Size::Small, "ldpi", false).unwrap_err();
        assert_eq!(
            err,
            SpriteError::FrameOutOfBounds {
                frame: Frame::new(124, 1, 13, 13),
                width: 100,
                height: 100,
            }
        );
    }

    #[test]
    fn test_crop_empty_destination() {
        let sheet = RgbaImage::new(SHEET_WIDTH, SHEET_HEIGHT);
        assert_eq!(
            crop(&sheet, 0, 10, Size::Small, "ldpi", false),
            Err(SpriteError::EmptyDestination { width: 0, height: 10 })
        );
    }

    #[derive(Default)]
    struct CountingPool {
        requests: Vec<(u32, u32)>,
    }

    impl SurfacePool for CountingPool {
        fn get(&mut self, width: u32, height: u32) -> RgbaImage {
            self.requests.push((width, height));
            RgbaImage::new(width, height)
        }
    }

    #[test]
    fn test_transform_draws_from_pool() {
        let frame = Frame::new(124, 1, 13, 13);
        let sheet = sheet_with_marker(frame);
        let mut pool = CountingPool::default();
        let transform = BadgeSpriteTransform::new(Size::Small, "ldpi", false);

        let out = transform.transform(&mut pool, &sheet, 39, 39).unwrap();
        assert_eq!(out.dimensions(), (39, 39));
        assert_eq!(pool.requests, vec![(39, 39)]);
    }

    #[test]
    fn test_failed_transform_leaves_pool_untouched() {
        let sheet = RgbaImage::new(SHEET_WIDTH, SHEET_HEIGHT);
        let mut pool = CountingPool::default();
        let transform = BadgeSpriteTransform::new(Size::Small, "nodpi", false);

        assert!(transform.transform(&mut pool, &sheet, 13, 13).is_err());
        assert!(pool.requests.is_empty());
    }
}
