use crate::consts::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
use crate::geometry::Vec2;

/// Zoom and pan state of the image viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    /// Multiplier on the image's native size. Always within [MIN_ZOOM, MAX_ZOOM].
    zoom: f32,
    /// Translation applied to the draw position. Never clamped.
    pub offset: Vec2,
    pub is_panning: bool,
    /// Pointer position when the current pan started.
    pub pan_anchor: Vec2,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            offset: Vec2::ZERO,
            is_panning: false,
            pan_anchor: Vec2::ZERO,
        }
    }
}

impl ViewState {
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Adjust zoom by `delta` wheel notches.
    pub fn apply_scroll(&mut self, delta: f32) {
        self.set_zoom(self.zoom + delta * ZOOM_STEP);
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        // NaN would slip through clamp.
        if zoom.is_nan() {
            return;
        }
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn begin_pan(&mut self, anchor: Vec2) {
        self.is_panning = true;
        self.pan_anchor = anchor;
    }

    /// Accumulate a drag delta into the offset. Ignored unless a pan is active.
    pub fn update_pan(&mut self, drag_delta: Vec2) {
        if self.is_panning {
            self.offset += drag_delta;
        }
    }

    pub fn end_pan(&mut self) {
        self.is_panning = false;
    }

    pub fn reset_offset(&mut self) {
        self.offset = Vec2::ZERO;
    }

    /// Where the image's top-left corner goes, given the layout cursor.
    pub fn draw_position(&self, cursor: Vec2) -> Vec2 {
        cursor + self.offset
    }

    /// Display size for an image at the current zoom.
    pub fn display_size(&self, image_size: Vec2, available: Vec2) -> Vec2 {
        compute_display_rect(image_size, available, self.zoom)
    }
}

/// Compute the on-screen size of an image inside `available`.
///
/// An image that fits at `zoom` is drawn at `image_size * zoom`. An image
/// that does not is first fitted to the available box with its aspect ratio
/// preserved, and the zoom is then applied on top of that fitted size, so an
/// oversized image ends up at fit-scale × zoom rather than zoom alone.
pub fn compute_display_rect(image_size: Vec2, available: Vec2, zoom: f32) -> Vec2 {
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return Vec2::ZERO;
    }

    let naive = image_size * zoom;
    if naive.fits_within(available) {
        return naive;
    }

    let aspect = image_size.x / image_size.y;
    let fitted = if available.x / aspect <= available.y {
        Vec2::new(available.x, available.x / aspect)
    } else {
        Vec2::new(available.y * aspect, available.y)
    };

    fitted * zoom
}
