//! Raster frames and the working-directory frame store.

pub mod pixels;
pub mod store;
