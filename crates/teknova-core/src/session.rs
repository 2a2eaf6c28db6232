use std::path::Path;

use tracing::{debug, info};

use crate::codec::{ExportFormat, ImageDecoder, ImageEncoder};
use crate::error::{Result, ViewerError};
use crate::geometry::Vec2;
use crate::render::{FilterMode, RenderBackend, TextureId};

/// The image currently bound to a texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadedImage {
    pub texture: TextureId,
    pub width: u32,
    pub height: u32,
}

/// Owns the displayed texture and its sampling mode.
///
/// Starts empty. A successful [`load`](Self::load) installs a texture and
/// every later load replaces it; a failed load changes nothing.
#[derive(Debug, Default)]
pub struct ImageSession {
    loaded: Option<LoadedImage>,
    filter_mode: FilterMode,
}

impl ImageSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn loaded(&self) -> Option<&LoadedImage> {
        self.loaded.as_ref()
    }

    pub fn texture(&self) -> Option<TextureId> {
        self.loaded.map(|l| l.texture)
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.loaded.map(|l| (l.width, l.height))
    }

    /// Native image size as a vector, for layout.
    pub fn image_size(&self) -> Option<Vec2> {
        self.loaded.map(|l| Vec2::new(l.width as f32, l.height as f32))
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    /// Decode `path` and install it as the displayed image.
    pub fn load(
        &mut self,
        path: &Path,
        backend: &mut impl RenderBackend,
        decoder: &impl ImageDecoder,
    ) -> Result<()> {
        let image = decoder.decode(path)?;

        // Upload before releasing the old texture so a rejected image leaves
        // the current one in place.
        let texture = backend.create_texture(&image, self.filter_mode)?;

        if let Some(previous) = self.loaded.take() {
            backend.destroy_texture(previous.texture);
            debug!(texture = previous.texture.0, "Released previous texture");
        }

        self.loaded = Some(LoadedImage {
            texture,
            width: image.width,
            height: image.height,
        });

        info!(
            path = %path.display(),
            width = image.width,
            height = image.height,
            filter = %self.filter_mode,
            "Image loaded"
        );
        Ok(())
    }

    /// Change the sampling mode of the bound texture. Does nothing while empty.
    pub fn set_filter_mode(&mut self, mode: FilterMode, backend: &mut impl RenderBackend) {
        let Some(loaded) = self.loaded else {
            return;
        };
        self.filter_mode = mode;
        backend.update_texture(loaded.texture, mode);
    }

    /// Read the bound texture back and write it to `path`.
    ///
    /// The format comes from the path's suffix. An unrecognized suffix fails
    /// before any readback or write happens.
    pub fn export(
        &self,
        path: &Path,
        backend: &impl RenderBackend,
        encoder: &impl ImageEncoder,
    ) -> Result<()> {
        let loaded = self.loaded.ok_or(ViewerError::NoImageLoaded)?;
        let format = ExportFormat::from_path(path).ok_or_else(|| ViewerError::UnknownExtension {
            path: path.to_path_buf(),
        })?;

        let pixels = backend
            .read_texture(loaded.texture)
            .ok_or(ViewerError::TextureReadback {
                texture: loaded.texture.0,
            })?;
        encoder.encode(path, &pixels, loaded.width, loaded.height, format)?;

        info!(path = %path.display(), %format, "Image exported");
        Ok(())
    }

    /// Destroy the texture, returning the session to empty.
    pub fn release(&mut self, backend: &mut impl RenderBackend) {
        if let Some(loaded) = self.loaded.take() {
            backend.destroy_texture(loaded.texture);
        }
    }
}
