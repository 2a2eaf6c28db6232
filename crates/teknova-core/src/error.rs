use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unrecognized export extension: {}", path.display())]
    UnknownExtension { path: PathBuf },

    #[error("Failed to encode {}: {source}", path.display())]
    EncodeFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Image {width}x{height} exceeds the maximum texture side of {max}")]
    TextureTooLarge { width: u32, height: u32, max: u32 },

    #[error("Texture {texture} could not be read back")]
    TextureReadback { texture: u64 },

    #[error("No image loaded")]
    NoImageLoaded,
}

pub type Result<T> = std::result::Result<T, ViewerError>;
