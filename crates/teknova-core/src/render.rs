use std::fmt;

use crate::codec::DecodedImage;
use crate::error::Result;
use crate::geometry::Vec2;

/// Opaque handle to a texture owned by a [`RenderBackend`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(pub u64);

/// Texture sampling policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterMode {
    /// Bilinear interpolation.
    #[default]
    Linear,
    /// Nearest-neighbour sampling.
    Nearest,
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Nearest => write!(f, "Nearest"),
        }
    }
}

pub const ALL_FILTER_MODES: &[FilterMode] = &[FilterMode::Linear, FilterMode::Nearest];

/// The graphics operations the viewer needs.
///
/// Implemented by the GUI on top of egui textures and by a recording fake in
/// tests.
pub trait RenderBackend {
    /// Upload an RGBA image as a new texture.
    ///
    /// Fails without side effects when the backend cannot hold the image.
    fn create_texture(&mut self, image: &DecodedImage, filter: FilterMode) -> Result<TextureId>;

    /// Re-apply the sampling mode to an existing texture.
    fn update_texture(&mut self, texture: TextureId, filter: FilterMode);

    fn destroy_texture(&mut self, texture: TextureId);

    /// Read back the full RGBA contents of a texture.
    fn read_texture(&self, texture: TextureId) -> Option<Vec<u8>>;

    /// Draw a texture as a quad with its top-left corner at `position`.
    fn draw_textured_quad(&mut self, texture: TextureId, position: Vec2, size: Vec2);
}
