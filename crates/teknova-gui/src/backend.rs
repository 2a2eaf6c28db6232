use std::collections::HashMap;

use teknova_core::codec::DecodedImage;
use teknova_core::error::{Result, ViewerError};
use teknova_core::geometry::Vec2;
use teknova_core::render::{FilterMode, RenderBackend, TextureId};

use crate::convert::{pos_to_egui, vec_to_egui};

fn texture_options(filter: FilterMode) -> egui::TextureOptions {
    match filter {
        FilterMode::Linear => egui::TextureOptions::LINEAR,
        FilterMode::Nearest => egui::TextureOptions::NEAREST,
    }
}

struct EguiTexture {
    handle: egui::TextureHandle,
    size: [usize; 2],
    /// egui cannot read textures back from the GPU, so the uploaded bytes
    /// are kept here for export.
    rgba: Vec<u8>,
}

impl EguiTexture {
    fn color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(self.size, &self.rgba)
    }
}

struct QuadDraw {
    texture: egui::TextureId,
    rect: egui::Rect,
}

/// [`RenderBackend`] over egui-managed textures.
///
/// Draws are queued during the frame and painted by [`EguiBackend::paint`].
pub struct EguiBackend {
    ctx: egui::Context,
    textures: HashMap<TextureId, EguiTexture>,
    next_id: u64,
    pending: Vec<QuadDraw>,
}

impl EguiBackend {
    pub fn new(ctx: &egui::Context) -> Self {
        Self {
            ctx: ctx.clone(),
            textures: HashMap::new(),
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Paint and clear all quads queued this frame.
    pub fn paint(&mut self, painter: &egui::Painter) {
        for draw in self.pending.drain(..) {
            painter.image(
                draw.texture,
                draw.rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
    }
}

impl RenderBackend for EguiBackend {
    fn create_texture(&mut self, image: &DecodedImage, filter: FilterMode) -> Result<TextureId> {
        // egui panics on uploads past the GPU limit.
        let max = self.ctx.input(|i| i.max_texture_side);
        if image.width as usize > max || image.height as usize > max {
            return Err(ViewerError::TextureTooLarge {
                width: image.width,
                height: image.height,
                max: u32::try_from(max).unwrap_or(u32::MAX),
            });
        }

        self.next_id += 1;
        let id = TextureId(self.next_id);

        let size = [image.width as usize, image.height as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &image.pixels);
        let handle = self.ctx.load_texture(
            format!("image-{}", id.0),
            color_image,
            texture_options(filter),
        );

        self.textures.insert(
            id,
            EguiTexture {
                handle,
                size,
                rgba: image.pixels.clone(),
            },
        );
        Ok(id)
    }

    fn update_texture(&mut self, texture: TextureId, filter: FilterMode) {
        if let Some(tex) = self.textures.get_mut(&texture) {
            let image = tex.color_image();
            tex.handle.set(image, texture_options(filter));
        }
    }

    fn destroy_texture(&mut self, texture: TextureId) {
        // Dropping the last handle frees the GPU texture.
        self.textures.remove(&texture);
    }

    fn read_texture(&self, texture: TextureId) -> Option<Vec<u8>> {
        self.textures.get(&texture).map(|t| t.rgba.clone())
    }

    fn draw_textured_quad(&mut self, texture: TextureId, position: Vec2, size: Vec2) {
        let Some(tex) = self.textures.get(&texture) else {
            return;
        };
        self.pending.push(QuadDraw {
            texture: tex.handle.id(),
            rect: egui::Rect::from_min_size(pos_to_egui(position), vec_to_egui(size)),
        });
    }
}
