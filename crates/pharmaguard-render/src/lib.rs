//! PharmaGuard Render - software rasterization of the hero particle field
//!
//! `RasterSurface` implements `RenderSurface` on top of an `image::RgbaImage`
//! so frames can be inspected or saved as PNG without a browser canvas.

mod raster;

pub use raster::RasterSurface;
