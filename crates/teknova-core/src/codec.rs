use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageError, ImageFormat, ImageReader, RgbaImage};
use tracing::debug;

use crate::consts::{JPEG_QUALITY, RGBA_CHANNELS};
use crate::error::{Result, ViewerError};

/// A decoded image as tightly packed RGBA8 rows.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Wrap an RGBA buffer, checking that its length matches the dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        if pixels.len() != rgba_len(width, height) {
            return Err(ViewerError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }
}

/// Byte length of a tightly packed RGBA8 image.
pub fn rgba_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * RGBA_CHANNELS
}

/// Image formats the viewer can export to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
    Bmp,
    Tga,
}

impl ExportFormat {
    /// Pick the format from the text after the last `.` of the file name.
    ///
    /// Matching is case-sensitive: `out.PNG` is not recognized.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        let (_, ext) = name.rsplit_once('.')?;
        match ext {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "bmp" => Some(Self::Bmp),
            "tga" => Some(Self::Tga),
            _ => None,
        }
    }

    /// Extensions offered in save dialogs, one per format.
    pub fn dialog_extensions() -> &'static [&'static str] {
        &["png", "jpg", "bmp", "tga"]
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Png => write!(f, "PNG"),
            Self::Jpeg => write!(f, "JPEG"),
            Self::Bmp => write!(f, "BMP"),
            Self::Tga => write!(f, "TGA"),
        }
    }
}

pub trait ImageDecoder {
    /// Decode a file into RGBA8.
    fn decode(&self, path: &Path) -> Result<DecodedImage>;
}

pub trait ImageEncoder {
    /// Write an RGBA8 buffer to `path` in `format`.
    fn encode(
        &self,
        path: &Path,
        pixels: &[u8],
        width: u32,
        height: u32,
        format: ExportFormat,
    ) -> Result<()>;
}

/// Decoder and encoder backed by the `image` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageCodec;

impl ImageDecoder for ImageCodec {
    fn decode(&self, path: &Path) -> Result<DecodedImage> {
        let decode_err = |source: ImageError| ViewerError::Decode {
            path: path.to_path_buf(),
            source,
        };

        // Sniff the format from the content rather than trusting the extension.
        let reader = ImageReader::open(path)
            .and_then(|r| r.with_guessed_format())
            .map_err(|e| decode_err(ImageError::IoError(e)))?;
        let rgba = reader.decode().map_err(decode_err)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        debug!(path = %path.display(), width, height, "Decoded image");

        DecodedImage::new(width, height, rgba.into_raw())
    }
}

impl ImageEncoder for ImageCodec {
    fn encode(
        &self,
        path: &Path,
        pixels: &[u8],
        width: u32,
        height: u32,
        format: ExportFormat,
    ) -> Result<()> {
        if pixels.len() != rgba_len(width, height) {
            return Err(ViewerError::InvalidDimensions { width, height });
        }

        let encode_err = |source: ImageError| ViewerError::EncodeFailed {
            path: path.to_path_buf(),
            source,
        };

        let written = match format {
            ExportFormat::Png => save_rgba(path, pixels, width, height, ImageFormat::Png),
            ExportFormat::Bmp => save_rgba(path, pixels, width, height, ImageFormat::Bmp),
            ExportFormat::Tga => save_rgba(path, pixels, width, height, ImageFormat::Tga),
            ExportFormat::Jpeg => save_jpeg(path, pixels, width, height),
        };
        written.map_err(encode_err)?;

        debug!(path = %path.display(), %format, width, height, "Encoded image");
        Ok(())
    }
}

fn save_rgba(
    path: &Path,
    pixels: &[u8],
    width: u32,
    height: u32,
    format: ImageFormat,
) -> std::result::Result<(), ImageError> {
    image::save_buffer_with_format(path, pixels, width, height, ExtendedColorType::Rgba8, format)
}

/// JPEG has no alpha channel, so the buffer is flattened to RGB first.
fn save_jpeg(
    path: &Path,
    pixels: &[u8],
    width: u32,
    height: u32,
) -> std::result::Result<(), ImageError> {
    let rgba = RgbaImage::from_raw(width, height, pixels.to_vec()).ok_or_else(|| {
        ImageError::Parameter(image::error::ParameterError::from_kind(
            image::error::ParameterErrorKind::DimensionMismatch,
        ))
    })?;
    let rgb = image::DynamicImage::ImageRgba8(rgba).to_rgb8();

    let file = File::create(path)?;
    let mut encoder = JpegEncoder::new_with_quality(BufWriter::new(file), JPEG_QUALITY);
    encoder.encode(rgb.as_raw(), width, height, ExtendedColorType::Rgb8)
}
