/// Smallest zoom factor the viewport accepts.
pub const MIN_ZOOM: f32 = 0.1;

/// Largest zoom factor the viewport accepts.
pub const MAX_ZOOM: f32 = 10.0;

/// Zoom change per scroll-wheel notch.
pub const ZOOM_STEP: f32 = 0.1;

/// Zoom factor at startup.
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Channels per pixel of every decoded image (RGBA).
pub const RGBA_CHANNELS: usize = 4;

/// Fixed JPEG export quality (0-100).
pub const JPEG_QUALITY: u8 = 90;
