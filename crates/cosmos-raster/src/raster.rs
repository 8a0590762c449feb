//! Square RGBA rasters and the compositing operations between pipeline stages.
//!
//! Every transform consumes its input and returns a fresh raster, so a stage
//! that hands an image on can never observe later mutations of it.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::color::Color;
use crate::error::RasterError;
use crate::geometry::Disc;

/// A square RGBA raster, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    pixels: RgbaImage,
}

impl RasterImage {
    /// A fully transparent `size × size` raster.
    pub fn new(size: u32) -> Self {
        Self {
            pixels: RgbaImage::new(size, size),
        }
    }

    /// A transparent raster with the sphere disc filled with `color`.
    pub fn disc(size: u32, color: Color) -> Self {
        let disc = Disc::of(size);
        let fill = color.to_rgba();
        let pixels = RgbaImage::from_fn(size, size, |x, y| {
            if disc.contains(x, y) {
                fill
            } else {
                Rgba([0, 0, 0, 0])
            }
        });
        Self { pixels }
    }

    /// Wrap an existing `image` buffer. It must be square.
    pub fn from_rgba_image(pixels: RgbaImage) -> Result<Self, RasterError> {
        let (w, h) = pixels.dimensions();
        if w != h {
            return Err(RasterError::NotSquare {
                width: w,
                height: h,
            });
        }
        Ok(Self { pixels })
    }

    /// Side length in pixels.
    #[inline]
    pub fn size(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(x, y)
    }

    #[inline]
    pub fn put_pixel(&mut self, x: u32, y: u32, px: Rgba<u8>) {
        self.pixels.put_pixel(x, y, px);
    }

    pub fn as_rgba_image(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_rgba_image(self) -> RgbaImage {
        self.pixels
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Number of pixels with non-zero alpha.
    pub fn visible_pixel_count(&self) -> usize {
        self.pixels.pixels().filter(|px| px[3] > 0).count()
    }

    /// Alpha-composite `top` over this raster with its top-left corner at
    /// `(x, y)`. Parts of `top` falling outside are clipped.
    pub fn composite(mut self, top: &RasterImage, x: i64, y: i64) -> Self {
        imageops::overlay(&mut self.pixels, &top.pixels, x, y);
        self
    }

    /// Alpha-composite `top` centered over this raster.
    pub fn composite_centered(self, top: &RasterImage) -> Self {
        let offset = (i64::from(self.size()) - i64::from(top.size())) / 2;
        self.composite(top, offset, offset)
    }

    /// Place this raster centered on a transparent `canvas_size` canvas.
    pub fn centered_on_canvas(self, canvas_size: u32) -> Self {
        RasterImage::new(canvas_size).composite_centered(&self)
    }

    /// Resample to `size × size` with a Lanczos filter. Returns `self` when
    /// the size already matches.
    pub fn resize(self, size: u32) -> Self {
        if size == self.size() {
            return self;
        }
        Self {
            pixels: imageops::resize(&self.pixels, size, size, FilterType::Lanczos3),
        }
    }

    /// Gaussian blur with standard deviation `sigma` pixels.
    pub fn blur(self, sigma: f32) -> Self {
        if sigma <= 0.0 {
            return self;
        }
        Self {
            pixels: imageops::blur(&self.pixels, sigma),
        }
    }

    /// Apply `f(x, y, pixel)` to every pixel, producing a new raster.
    pub fn map_pixels<F>(self, f: F) -> Self
    where
        F: Fn(u32, u32, Rgba<u8>) -> Rgba<u8>,
    {
        let source = self.pixels;
        let size = source.width();
        Self {
            pixels: RgbaImage::from_fn(size, size, |x, y| f(x, y, *source.get_pixel(x, y))),
        }
    }
}
