//! Decodes an image file just far enough to report its size and pixel layout.

use super::error::BackendError;
use std::fmt;
use std::path::Path;
use stb_image::image::LoadResult;

/// Pixel data layouts, numbered like the graphics library's pixel format enum.
#[repr(i32)]
#[derive(Debug, Default, Copy, Clone, Hash, PartialEq, Eq)]
pub enum PixelFormat {
    /// Nothing was loaded
    #[default]
    Unknown = 0,
    /// 8 bit per pixel (no alpha)
    UncompressedGrayscale = 1,
    /// 8*2 bpp (2 channels)
    UncompressedGrayAlpha = 2,
    /// 16 bpp
    UncompressedR5G6B5 = 3,
    /// 24 bpp
    UncompressedR8G8B8 = 4,
    /// 16 bpp (1 bit alpha)
    UncompressedR5G5B5A1 = 5,
    /// 16 bpp (4 bit alpha)
    UncompressedR4G4B4A4 = 6,
    /// 32 bpp
    UncompressedR8G8B8A8 = 7,
    /// 32 bpp (1 channel - float)
    UncompressedR32 = 8,
    /// 32*3 bpp (3 channels - float)
    UncompressedR32G32B32 = 9,
    /// 32*4 bpp (4 channels - float)
    UncompressedR32G32B32A32 = 10,
}

impl PixelFormat {
    /// Format of a decoded 8-bit image with `channels` components per pixel.
    pub fn from_u8_channels(channels: usize) -> Option<PixelFormat> {
        match channels {
            1 => Some(PixelFormat::UncompressedGrayscale),
            2 => Some(PixelFormat::UncompressedGrayAlpha),
            3 => Some(PixelFormat::UncompressedR8G8B8),
            4 => Some(PixelFormat::UncompressedR8G8B8A8),
            _ => None,
        }
    }

    /// Format of a decoded floating point (HDR) image.
    pub fn from_f32_channels(channels: usize) -> Option<PixelFormat> {
        match channels {
            1 => Some(PixelFormat::UncompressedR32),
            3 => Some(PixelFormat::UncompressedR32G32B32),
            4 => Some(PixelFormat::UncompressedR32G32B32A32),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Dimensions and layout of a decoded image.
///
/// A failed load is represented by the zeroed value, as the graphics library does.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: i32,
    pub height: i32,
    pub format: PixelFormat,
}

impl ImageInfo {
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0 && self.format != PixelFormat::Unknown
    }
}

impl fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "width: {}, height: {}, format: {}",
            self.width,
            self.height,
            self.format.code()
        )
    }
}

fn info_from_result(source: &str, result: LoadResult) -> Result<ImageInfo, BackendError> {
    let (width, height, format) = match result {
        LoadResult::ImageU8(img) => (
            img.width,
            img.height,
            PixelFormat::from_u8_channels(img.depth),
        ),
        LoadResult::ImageF32(img) => (
            img.width,
            img.height,
            PixelFormat::from_f32_channels(img.depth),
        ),
        LoadResult::Error(e) => {
            return Err(BackendError::Image {
                path: source.to_string(),
                reason: e,
            })
        }
    };
    // pixel data is dropped here; only the metadata leaves this function
    let format = format.ok_or_else(|| BackendError::Image {
        path: source.to_string(),
        reason: "unsupported channel count".to_string(),
    })?;
    let dim = |v: usize| {
        i32::try_from(v).map_err(|_| BackendError::Image {
            path: source.to_string(),
            reason: format!("dimension {} out of range", v),
        })
    };
    Ok(ImageInfo {
        width: dim(width)?,
        height: dim(height)?,
        format,
    })
}

pub fn try_load_image_info<P: AsRef<Path>>(path: P) -> Result<ImageInfo, BackendError> {
    let path = path.as_ref();
    let info = info_from_result(&path.display().to_string(), stb_image::image::load(path))?;
    log::info!(
        "IMAGE: [{}] Data loaded successfully ({}x{} | format {})",
        path.display(),
        info.width,
        info.height,
        info.format.code()
    );
    Ok(info)
}

pub fn image_info_from_memory(bytes: &[u8]) -> Result<ImageInfo, BackendError> {
    info_from_result("<memory>", stb_image::image::load_from_memory(bytes))
}

/// Never fails: a missing or undecodable file is logged and reported as the
/// zeroed `ImageInfo` so the caller carries on.
pub fn load_image_info<P: AsRef<Path>>(path: P) -> ImageInfo {
    match try_load_image_info(path) {
        Ok(info) => info,
        Err(e) => {
            log::warn!("IMAGE: Failed to load image data: {}", e);
            ImageInfo::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 3x2 8-bit RGB
    const PNG_RGB_3X2: [u8; 71] = [
        0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x02, 0x08, 0x02, 0x00, 0x00, 0x00, 0x12,
        0x16, 0xf1, 0x4d, 0x00, 0x00, 0x00, 0x0e, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0x38,
        0x01, 0x03, 0x0c, 0x70, 0x16, 0x00, 0x8c, 0xb4, 0x0e, 0x11, 0x3c, 0x40, 0xa1, 0x0f, 0x00,
        0x00, 0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
    ];

    // 2x4 8-bit RGBA
    const PNG_RGBA_2X4: [u8; 71] = [
        0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x04, 0x08, 0x06, 0x00, 0x00, 0x00, 0xa4,
        0xef, 0xee, 0x39, 0x00, 0x00, 0x00, 0x0e, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0x38,
        0x01, 0x05, 0x0c, 0xb8, 0x19, 0x00, 0xc2, 0x33, 0x19, 0x01, 0xc6, 0x7b, 0x0d, 0x45, 0x00,
        0x00, 0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
    ];

    // 1x1 8-bit gray + alpha
    const PNG_GRAY_ALPHA_1X1: [u8; 68] = [
        0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x04, 0x00, 0x00, 0x00, 0xb5,
        0x1c, 0x0c, 0x02, 0x00, 0x00, 0x00, 0x0b, 0x49, 0x44, 0x41, 0x54, 0x78, 0xda, 0x63, 0x64,
        0x60, 0x00, 0x00, 0x00, 0x06, 0x00, 0x02, 0x30, 0x81, 0xd0, 0x2f, 0x00, 0x00, 0x00, 0x00,
        0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
    ];

    #[test]
    fn rgb_png_reports_r8g8b8() {
        let info = image_info_from_memory(&PNG_RGB_3X2).unwrap();
        assert_eq!(
            info,
            ImageInfo {
                width: 3,
                height: 2,
                format: PixelFormat::UncompressedR8G8B8,
            }
        );
        assert_eq!(info.to_string(), "width: 3, height: 2, format: 4");
    }

    #[test]
    fn rgba_png_reports_r8g8b8a8() {
        let info = image_info_from_memory(&PNG_RGBA_2X4).unwrap();
        assert_eq!((info.width, info.height), (2, 4));
        assert_eq!(info.format.code(), 7);
    }

    #[test]
    fn gray_alpha_png() {
        let info = image_info_from_memory(&PNG_GRAY_ALPHA_1X1).unwrap();
        assert_eq!(info.to_string(), "width: 1, height: 1, format: 2");
    }

    #[test]
    fn garbage_is_an_error() {
        let err = image_info_from_memory(&[1, 2, 3, 4]).unwrap_err();
        assert!(matches!(err, BackendError::Image { .. }));
    }

    #[test]
    fn missing_file_reports_zeroes() {
        let path = std::env::temp_dir().join("backend-image-info-does-not-exist.png");
        let info = load_image_info(&path);
        assert!(!info.is_valid());
        assert_eq!(info.to_string(), "width: 0, height: 0, format: 0");
    }

    #[test]
    fn probe_reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("backend-image-info-{}.png", std::process::id()));
        std::fs::write(&path, PNG_RGBA_2X4).unwrap();
        let info = load_image_info(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(info.is_valid());
        assert_eq!(info.to_string(), "width: 2, height: 4, format: 7");
    }

    #[test]
    fn channel_mapping() {
        assert_eq!(PixelFormat::from_u8_channels(1), Some(PixelFormat::UncompressedGrayscale));
        assert_eq!(PixelFormat::from_u8_channels(5), None);
        assert_eq!(PixelFormat::from_f32_channels(3).map(PixelFormat::code), Some(9));
        assert_eq!(PixelFormat::from_f32_channels(2), None);
    }
}
