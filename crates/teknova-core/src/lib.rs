pub mod codec;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod render;
pub mod session;
pub mod viewer;
pub mod viewport;
