//! Geometry repairs applied by the normalizer.

use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, ImageFormat, RgbaImage};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Centers `img` on a fully transparent square canvas.
///
/// The canvas edge is the larger of width and height. Offsets are
/// `floor((edge - width) / 2)` and `floor((edge - height) / 2)`.
/// Square inputs are returned unchanged.
#[must_use]
pub fn pad_to_square(img: &DynamicImage) -> DynamicImage {
    let (width, height) = img.dimensions();
    if width == height {
        return img.clone();
    }

    let edge = width.max(height);
    let left = (edge - width) / 2;
    let top = (edge - height) / 2;

    let mut canvas = RgbaImage::new(edge, edge);
    imageops::replace(&mut canvas, &img.to_rgba8(), i64::from(left), i64::from(top));
    DynamicImage::ImageRgba8(canvas)
}

/// Scales `img` to fit inside `size`×`size`, preserving aspect ratio, and
/// centers the result on a transparent `size`×`size` canvas.
#[must_use]
pub fn fit_contain(img: &DynamicImage, size: u32) -> DynamicImage {
    let scaled = img.resize(size, size, FilterType::Lanczos3).to_rgba8();
    let (width, height) = scaled.dimensions();
    if width == size && height == size {
        return DynamicImage::ImageRgba8(scaled);
    }

    let mut canvas = RgbaImage::new(size, size);
    let left = (size - width.min(size)) / 2;
    let top = (size - height.min(size)) / 2;
    imageops::replace(&mut canvas, &scaled, i64::from(left), i64::from(top));
    DynamicImage::ImageRgba8(canvas)
}

/// Path the replacement is staged at before it is swapped in.
#[must_use]
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut staged = OsString::from(path.as_os_str());
    staged.push(".tmp");
    PathBuf::from(staged)
}

/// Replaces the file at `path` with `img` encoded as PNG.
///
/// The image is written to `<path>.tmp`, the original is deleted and the
/// temp file renamed into place. A crash between the delete and the rename
/// leaves only the temp file behind.
pub fn replace_file(path: &Path, img: &DynamicImage) -> Result<()> {
    let staged = temp_path_for(path);

    img.save_with_format(&staged, ImageFormat::Png)
        .context(format!("Failed to write temp image: {}", staged.display()))?;

    fs::remove_file(path).context(format!("Failed to remove original: {}", path.display()))?;

    fs::rename(&staged, path).context(format!(
        "Failed to rename temp image to: {}",
        path.display()
    ))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::TempDir;

    fn solid(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255])))
    }

    #[test]
    fn test_pad_to_square_landscape() {
        let padded = pad_to_square(&solid(100, 60)).to_rgba8();
        assert_eq!(padded.dimensions(), (100, 100));

        // Original occupies rows 20..80
        assert_eq!(padded.get_pixel(0, 19)[3], 0);
        assert_eq!(*padded.get_pixel(0, 20), Rgba([255, 0, 0, 255]));
        assert_eq!(*padded.get_pixel(99, 79), Rgba([255, 0, 0, 255]));
        assert_eq!(padded.get_pixel(99, 80)[3], 0);
    }

    #[test]
    fn test_pad_to_square_odd_difference_floors() {
        let padded = pad_to_square(&solid(10, 15)).to_rgba8();
        assert_eq!(padded.dimensions(), (15, 15));

        // floor(5 / 2) = 2 transparent columns on the left, 3 on the right
        assert_eq!(padded.get_pixel(1, 0)[3], 0);
        assert_eq!(padded.get_pixel(2, 0)[3], 255);
        assert_eq!(padded.get_pixel(11, 0)[3], 255);
        assert_eq!(padded.get_pixel(12, 0)[3], 0);
    }

    #[test]
    fn test_pad_to_square_keeps_square() {
        let padded = pad_to_square(&solid(48, 48));
        assert_eq!(padded.dimensions(), (48, 48));
    }

    #[test]
    fn test_fit_contain_scales_square() {
        assert_eq!(fit_contain(&solid(20, 20), 128).dimensions(), (128, 128));
        assert_eq!(fit_contain(&solid(300, 300), 128).dimensions(), (128, 128));
    }

    #[test]
    fn test_fit_contain_pads_non_square() {
        let fitted = fit_contain(&solid(400, 200), 100).to_rgba8();
        assert_eq!(fitted.dimensions(), (100, 100));
        assert_eq!(fitted.get_pixel(50, 0)[3], 0);
        assert_eq!(fitted.get_pixel(50, 50)[3], 255);
    }

    #[test]
    fn test_replace_file_swaps_in_place() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("icon.png");
        solid(10, 10).save(&path).unwrap();

        replace_file(&path, &solid(64, 64)).unwrap();

        assert_eq!(image::image_dimensions(&path).unwrap(), (64, 64));
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_temp_path_appends_suffix() {
        assert_eq!(
            temp_path_for(Path::new("icons/app.png")),
            PathBuf::from("icons/app.png.tmp")
        );
    }
}
