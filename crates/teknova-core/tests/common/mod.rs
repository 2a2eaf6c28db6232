#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use teknova_core::codec::{rgba_len, DecodedImage, ExportFormat, ImageDecoder, ImageEncoder};
use teknova_core::error::{Result, ViewerError};
use teknova_core::geometry::Vec2;
use teknova_core::render::{FilterMode, RenderBackend, TextureId};

/// One call made against the [`RecordingBackend`].
#[derive(Clone, Debug, PartialEq)]
pub enum BackendCall {
    Create {
        texture: TextureId,
        width: u32,
        height: u32,
        filter: FilterMode,
    },
    Update {
        texture: TextureId,
        filter: FilterMode,
    },
    Destroy {
        texture: TextureId,
    },
    Draw {
        texture: TextureId,
        position: Vec2,
        size: Vec2,
    },
}

/// Render backend that keeps textures in memory and logs every call.
#[derive(Default)]
pub struct RecordingBackend {
    pub calls: Vec<BackendCall>,
    pub textures: HashMap<TextureId, Vec<u8>>,
    pub reads: RefCell<usize>,
    /// Largest width or height accepted by `create_texture`.
    pub max_side: Option<u32>,
    /// Make every readback come back empty.
    pub lose_readback: bool,
    next_id: u64,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_side(max: u32) -> Self {
        Self {
            max_side: Some(max),
            ..Self::default()
        }
    }

    pub fn destroyed(&self) -> Vec<TextureId> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                BackendCall::Destroy { texture } => Some(*texture),
                _ => None,
            })
            .collect()
    }

    pub fn live_textures(&self) -> usize {
        self.textures.len()
    }
}

impl RenderBackend for RecordingBackend {
    fn create_texture(&mut self, image: &DecodedImage, filter: FilterMode) -> Result<TextureId> {
        if let Some(max) = self.max_side {
            if image.width > max || image.height > max {
                return Err(ViewerError::TextureTooLarge {
                    width: image.width,
                    height: image.height,
                    max,
                });
            }
        }

        self.next_id += 1;
        let texture = TextureId(self.next_id);
        self.textures.insert(texture, image.pixels.clone());
        self.calls.push(BackendCall::Create {
            texture,
            width: image.width,
            height: image.height,
            filter,
        });
        Ok(texture)
    }

    fn update_texture(&mut self, texture: TextureId, filter: FilterMode) {
        self.calls.push(BackendCall::Update { texture, filter });
    }

    fn destroy_texture(&mut self, texture: TextureId) {
        assert!(
            self.textures.remove(&texture).is_some(),
            "texture {texture:?} destroyed twice or never created"
        );
        self.calls.push(BackendCall::Destroy { texture });
    }

    fn read_texture(&self, texture: TextureId) -> Option<Vec<u8>> {
        *self.reads.borrow_mut() += 1;
        if self.lose_readback {
            return None;
        }
        self.textures.get(&texture).cloned()
    }

    fn draw_textured_quad(&mut self, texture: TextureId, position: Vec2, size: Vec2) {
        self.calls.push(BackendCall::Draw {
            texture,
            position,
            size,
        });
    }
}

/// One call made against the [`FakeCodec`] encoder.
#[derive(Clone, Debug, PartialEq)]
pub struct EncodeCall {
    pub path: PathBuf,
    pub len: usize,
    pub width: u32,
    pub height: u32,
    pub format: ExportFormat,
}

/// Codec that serves images by file name and records encodes.
#[derive(Default)]
pub struct FakeCodec {
    pub images: HashMap<PathBuf, (u32, u32)>,
    pub encodes: RefCell<Vec<EncodeCall>>,
    pub fail_encode: bool,
}

impl FakeCodec {
    pub fn with_image(mut self, path: &str, width: u32, height: u32) -> Self {
        self.images.insert(PathBuf::from(path), (width, height));
        self
    }

    pub fn failing_encode(mut self) -> Self {
        self.fail_encode = true;
        self
    }
}

impl ImageDecoder for FakeCodec {
    fn decode(&self, path: &Path) -> Result<DecodedImage> {
        match self.images.get(path) {
            Some(&(w, h)) => DecodedImage::new(w, h, gradient_rgba(w, h)),
            None => Err(ViewerError::Decode {
                path: path.to_path_buf(),
                source: image::ImageError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no such test image",
                )),
            }),
        }
    }
}

impl ImageEncoder for FakeCodec {
    fn encode(
        &self,
        path: &Path,
        pixels: &[u8],
        width: u32,
        height: u32,
        format: ExportFormat,
    ) -> Result<()> {
        self.encodes.borrow_mut().push(EncodeCall {
            path: path.to_path_buf(),
            len: pixels.len(),
            width,
            height,
            format,
        });
        if self.fail_encode {
            return Err(ViewerError::EncodeFailed {
                path: path.to_path_buf(),
                source: image::ImageError::IoError(std::io::Error::other("encoder refused")),
            });
        }
        Ok(())
    }
}

/// Deterministic RGBA test pattern.
pub fn gradient_rgba(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(rgba_len(width, height));
    for y in 0..height {
        for x in 0..width {
            pixels.push((x * 255 / width.max(1)) as u8);
            pixels.push((y * 255 / height.max(1)) as u8);
            pixels.push(128);
            pixels.push(255);
        }
    }
    pixels
}
