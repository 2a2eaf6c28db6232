use std::path::Path;

use tracing::warn;

use crate::codec::{ImageDecoder, ImageEncoder};
use crate::error::Result;
use crate::geometry::Vec2;
use crate::render::{FilterMode, RenderBackend};
use crate::session::ImageSession;
use crate::viewport::ViewState;

/// Input gathered for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Wheel movement in notches; positive zooms in.
    pub scroll_delta: f32,
    /// Whether the pan button is held and dragging.
    pub drag_active: bool,
    /// Pointer movement since the previous frame.
    pub drag_delta: Vec2,
    pub pointer: Option<Vec2>,
}

/// Application state: one view and one image session.
#[derive(Debug, Default)]
pub struct Viewer {
    pub view: ViewState,
    pub session: ImageSession,
}

impl Viewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an image and recentre the view on success.
    pub fn open_image(
        &mut self,
        path: &Path,
        backend: &mut impl RenderBackend,
        decoder: &impl ImageDecoder,
    ) -> Result<()> {
        self.session
            .load(path, backend, decoder)
            .inspect_err(|e| warn!(path = %path.display(), error = %e, "Load failed"))?;
        self.view.reset_offset();
        Ok(())
    }

    pub fn export_image(
        &self,
        path: &Path,
        backend: &impl RenderBackend,
        encoder: &impl ImageEncoder,
    ) -> Result<()> {
        self.session
            .export(path, backend, encoder)
            .inspect_err(|e| warn!(path = %path.display(), error = %e, "Export failed"))
    }

    pub fn set_filter_mode(&mut self, mode: FilterMode, backend: &mut impl RenderBackend) {
        self.session.set_filter_mode(mode, backend);
    }

    pub fn handle_input(&mut self, input: &FrameInput) {
        if input.scroll_delta != 0.0 {
            self.view.apply_scroll(input.scroll_delta);
        }

        if input.drag_active {
            if !self.view.is_panning {
                self.view.begin_pan(input.pointer.unwrap_or(self.view.pan_anchor));
            }
            self.view.update_pan(input.drag_delta);
        } else {
            self.view.end_pan();
        }
    }

    /// Issue this frame's draw. Returns the drawn size, or `None` when empty.
    ///
    /// `origin` is the layout cursor of the display region and `available`
    /// its size.
    pub fn render(
        &self,
        backend: &mut impl RenderBackend,
        origin: Vec2,
        available: Vec2,
    ) -> Option<Vec2> {
        let texture = self.session.texture()?;
        let image_size = self.session.image_size()?;

        let size = self.view.display_size(image_size, available);
        backend.draw_textured_quad(texture, self.view.draw_position(origin), size);
        Some(size)
    }

    pub fn shutdown(&mut self, backend: &mut impl RenderBackend) {
        self.session.release(backend);
    }
}
