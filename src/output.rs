//! PNG output and file path generation

use image::RgbaImage;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::transform::BadgeSpriteTransform;

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Save an RGBA image to a PNG file, creating parent directories as needed.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    image.save(path)?;
    Ok(())
}

/// Generate the output path for a cropped badge.
///
/// | Scenario | Output |
/// |----------|--------|
/// | No `-o` | `{sheet}_{size}_{density}.png` (`_dark` appended for dark theme) |
/// | With `-o badge.png` | `badge.png` |
/// | With `-o dir/` | `dir/{size}_{density}.png` |
pub fn generate_output_path(
    sheet: &Path,
    transform: &BadgeSpriteTransform,
    output_arg: Option<&Path>,
) -> PathBuf {
    let theme = if transform.is_dark() { "_dark" } else { "" };
    let badge_name = format!("{}_{}{}", transform.size().code(), transform.density(), theme);

    match output_arg {
        Some(out) if is_directory_arg(out) => out.join(format!("{}.png", badge_name)),
        Some(out) => out.to_path_buf(),
        None => {
            let stem = sheet.file_stem().and_then(|s| s.to_str()).unwrap_or("sheet");
            let file_name = format!("{}_{}.png", stem, badge_name);
            match sheet.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.join(file_name),
                _ => PathBuf::from(file_name),
            }
        }
    }
}

fn is_directory_arg(path: &Path) -> bool {
    path.to_string_lossy().ends_with('/') || path.is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::Size;
    use image::Rgba;
    use tempfile::TempDir;

    #[test]
    fn test_default_output_path() {
        let transform = BadgeSpriteTransform::new(Size::Small, "mdpi", false);
        let path = generate_output_path(Path::new("assets/badges.png"), &transform, None);
        assert_eq!(path, PathBuf::from("assets/badges_small_mdpi.png"));
    }

    #[test]
    fn test_default_output_path_dark() {
        let transform = BadgeSpriteTransform::new(Size::Badge60, "xhdpi", true);
        let path = generate_output_path(Path::new("badges.png"), &transform, None);
        assert_eq!(path, PathBuf::from("badges_badge_60_xhdpi_dark.png"));
    }

    #[test]
    fn test_explicit_file() {
        let transform = BadgeSpriteTransform::new(Size::Small, "mdpi", false);
        let path =
            generate_output_path(Path::new("badges.png"), &transform, Some(Path::new("out.png")));
        assert_eq!(path, PathBuf::from("out.png"));
    }

    #[test]
    fn test_explicit_directory() {
        let transform = BadgeSpriteTransform::new(Size::Large, "hdpi", true);
        let path =
            generate_output_path(Path::new("badges.png"), &transform, Some(Path::new("out/")));
        assert_eq!(path, PathBuf::from("out/large_hdpi_dark.png"));
    }

    #[test]
    fn test_save_png_creates_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("badge.png");
        let image = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255]));

        save_png(&image, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded, image);
    }
}
