//! CPU raster surface backed by an RGBA image

use image::{Rgba, RgbaImage};
use pharmaguard_core::{HeroError, Result, Rgb, Vec2, ViewportSize};
use pharmaguard_particles::{ParticleColor, RenderSurface};
use std::path::Path;

/// Peak alpha of the glow halo relative to the particle's own opacity
const GLOW_STRENGTH: f32 = 0.35;

/// Paints particles into an RGBA buffer with source-over compositing.
///
/// The disc gets a one-pixel anti-aliased edge; the glow is a quadratic
/// falloff from the disc edge out to `glow_radius`.
pub struct RasterSurface {
    image: RgbaImage,
    palette: [Rgb; 2],
    background: Rgba<u8>,
}

impl RasterSurface {
    pub fn new(size: ViewportSize, palette: [Rgb; 2]) -> Self {
        let (width, height) = pixel_dims(size);
        Self {
            image: RgbaImage::new(width, height),
            palette,
            background: Rgba([0, 0, 0, 0]),
        }
    }

    /// Opaque backdrop painted on every clear instead of transparency
    pub fn with_background(mut self, color: Rgb) -> Self {
        self.background = Rgba([color.r, color.g, color.b, 255]);
        self.fill_background();
        self
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.image.save(path).map_err(|e| {
            HeroError::RenderError(format!("Failed to save PNG to {}: {}", path.display(), e))
        })
    }

    fn fill_background(&mut self) {
        let bg = self.background;
        for pixel in self.image.pixels_mut() {
            *pixel = bg;
        }
    }

    fn blend(&mut self, x: u32, y: u32, color: Rgb, alpha: f32) {
        if alpha <= 0.0 {
            return;
        }
        let dst = self.image.get_pixel(x, y).0;
        let sa = alpha.min(1.0);
        let da = dst[3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return;
        }

        let mix = |src: u8, dst: u8| -> u8 {
            let c = (src as f32 * sa + dst as f32 * da * (1.0 - sa)) / out_a;
            c.round().clamp(0.0, 255.0) as u8
        };

        self.image.put_pixel(
            x,
            y,
            Rgba([
                mix(color.r, dst[0]),
                mix(color.g, dst[1]),
                mix(color.b, dst[2]),
                (out_a * 255.0).round() as u8,
            ]),
        );
    }
}

impl RenderSurface for RasterSurface {
    fn clear(&mut self) {
        self.fill_background();
    }

    fn fill_circle_with_glow(
        &mut self,
        center: Vec2,
        radius: f64,
        color: ParticleColor,
        glow_radius: f64,
        opacity: f64,
    ) {
        let (width, height) = self.image.dimensions();
        if width == 0 || height == 0 || opacity <= 0.0 {
            return;
        }

        let rgb = self.palette[color.palette_index()];
        let reach = radius + glow_radius.max(0.0) + 1.0;
        let x0 = (center.x - reach).floor().max(0.0) as u32;
        let y0 = (center.y - reach).floor().max(0.0) as u32;
        let x1 = (center.x + reach).ceil().min(width as f64 - 1.0);
        let y1 = (center.y + reach).ceil().min(height as f64 - 1.0);
        if x1 < 0.0 || y1 < 0.0 {
            return;
        }
        let (x1, y1) = (x1 as u32, y1 as u32);

        let opacity = opacity as f32;
        let radius = radius as f32;
        let glow = glow_radius as f32;

        for y in y0..=y1 {
            for x in x0..=x1 {
                // Sample at the pixel center
                let dx = (x as f64 + 0.5 - center.x) as f32;
                let dy = (y as f64 + 0.5 - center.y) as f32;
                let d = (dx * dx + dy * dy).sqrt();

                let disc = (radius + 0.5 - d).clamp(0.0, 1.0);
                let halo = if glow > 0.0 && d > radius {
                    let t = (1.0 - (d - radius) / glow).clamp(0.0, 1.0);
                    t * t * GLOW_STRENGTH
                } else {
                    0.0
                };

                self.blend(x, y, rgb, opacity * disc.max(halo));
            }
        }
    }

    fn size(&self) -> ViewportSize {
        let (w, h) = self.image.dimensions();
        ViewportSize::new(w as f64, h as f64)
    }

    fn resize(&mut self, size: ViewportSize) {
        let (width, height) = pixel_dims(size);
        self.image = RgbaImage::new(width, height);
        self.fill_background();
    }
}

fn pixel_dims(size: ViewportSize) -> (u32, u32) {
    (
        size.width.max(0.0).round() as u32,
        size.height.max(0.0).round() as u32,
    )
}
