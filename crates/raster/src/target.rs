//! Target image collaborator: decode a user-provided picture and blit it
//! onto the surface. The core only needs draw-into-rectangle; decode and
//! encode are delegated to the `image` crate.

use std::path::Path;

use glam::Vec2;
use image::RgbaImage;
use thiserror::Error;

use crate::surface::{Pixel, Surface};

#[derive(Debug, Error)]
pub enum TargetError {
    #[error("failed to decode target image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("target image has zero dimensions")]
    Empty,
}

/// A decoded, ready-to-draw bitmap.
#[derive(Debug, Clone)]
pub struct TargetImage {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl TargetImage {
    pub fn from_path(path: &Path) -> Result<Self, TargetError> {
        let decoded = image::open(path)?.to_rgba8();
        log::debug!(
            "decoded target image {:?} ({}x{})",
            path,
            decoded.width(),
            decoded.height()
        );
        Self::from_rgba(decoded)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TargetError> {
        let decoded = image::load_from_memory(bytes)?.to_rgba8();
        Self::from_rgba(decoded)
    }

    fn from_rgba(decoded: RgbaImage) -> Result<Self, TargetError> {
        let (width, height) = decoded.dimensions();
        if width == 0 || height == 0 {
            return Err(TargetError::Empty);
        }
        let pixels = decoded
            .pixels()
            .map(|p| Pixel::new(p.0[0], p.0[1], p.0[2], p.0[3]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Synthetic target from raw pixels (tests and the demo harness).
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self, TargetError> {
        if width == 0 || height == 0 || pixels.len() != (width * height) as usize {
            return Err(TargetError::Empty);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn sample(&self, u: f32, v: f32) -> Pixel {
        let x = ((u * self.width as f32) as u32).min(self.width - 1);
        let y = ((v * self.height as f32) as u32).min(self.height - 1);
        self.pixels[(y * self.width + x) as usize]
    }

    /// Aspect-fit blit: scale to fit inside the surface, centered, with
    /// letterbox bars left transparent. Nearest-neighbor sampling.
    pub fn blit_fit(&self, surface: &mut Surface) {
        if surface.is_empty() {
            return;
        }
        let (sw, sh) = (surface.width() as f32, surface.height() as f32);
        let img_aspect = self.width as f32 / self.height as f32;
        let surf_aspect = sw / sh;

        let (dw, dh) = if img_aspect > surf_aspect {
            (sw, sw / img_aspect)
        } else {
            (sh * img_aspect, sh)
        };
        let rect = FitRect {
            x: (sw - dw) / 2.0,
            y: (sh - dh) / 2.0,
            w: dw,
            h: dh,
        };

        let x0 = rect.x.floor() as u32;
        let y0 = rect.y.floor() as u32;
        let x1 = ((rect.x + rect.w).ceil() as u32).min(surface.width());
        let y1 = ((rect.y + rect.h).ceil() as u32).min(surface.height());
        for y in y0..y1 {
            for x in x0..x1 {
                let u = (x as f32 + 0.5 - rect.x) / rect.w;
                let v = (y as f32 + 0.5 - rect.y) / rect.h;
                if (0.0..1.0).contains(&u) && (0.0..1.0).contains(&v) {
                    surface.set_pixel(x, y, self.sample(u, v));
                }
            }
        }
    }

    /// Where the blit lands for a given surface size (the fit rectangle).
    pub fn fit_rect(&self, surface_w: u32, surface_h: u32) -> (Vec2, Vec2) {
        let (sw, sh) = (surface_w as f32, surface_h as f32);
        let img_aspect = self.width as f32 / self.height as f32;
        let (dw, dh) = if img_aspect > sw / sh {
            (sw, sw / img_aspect)
        } else {
            (sh * img_aspect, sh)
        };
        (
            Vec2::new((sw - dw) / 2.0, (sh - dh) / 2.0),
            Vec2::new(dw, dh),
        )
    }
}

struct FitRect {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

impl Surface {
    /// Write the surface out as a PNG (demo harness / debugging).
    pub fn save_png(&self, path: &Path) -> Result<(), TargetError> {
        if self.is_empty() {
            return Err(TargetError::Empty);
        }
        let mut img = RgbaImage::new(self.width(), self.height());
        for y in 0..self.height() {
            for x in 0..self.width() {
                img.put_pixel(x, y, image::Rgba(self.get_pixel(x, y).to_bytes()));
            }
        }
        img.save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(w: u32, h: u32) -> TargetImage {
        let pixels = (0..w * h)
            .map(|i| {
                let (x, y) = (i % w, i / w);
                if (x + y) % 2 == 0 {
                    Pixel::new(255, 255, 255, 255)
                } else {
                    Pixel::new(40, 40, 40, 255)
                }
            })
            .collect();
        TargetImage::from_pixels(w, h, pixels).unwrap()
    }

    #[test]
    fn from_pixels_rejects_mismatch() {
        assert!(TargetImage::from_pixels(2, 2, vec![Pixel::BLACK; 3]).is_err());
        assert!(TargetImage::from_pixels(0, 5, vec![]).is_err());
    }

    #[test]
    fn from_bytes_rejects_garbage() {
        assert!(TargetImage::from_bytes(&[1, 2, 3, 4]).is_err());
    }

    #[test]
    fn wide_image_letterboxes_top_and_bottom() {
        let img = checker(100, 50); // 2:1 into a 1:1 surface
        let mut s = Surface::new(80, 80);
        img.blit_fit(&mut s);
        // Bars above and below stay transparent; the band is painted.
        assert_eq!(s.get_pixel(40, 5), Pixel::TRANSPARENT);
        assert_eq!(s.get_pixel(40, 75), Pixel::TRANSPARENT);
        assert_ne!(s.get_pixel(40, 40), Pixel::TRANSPARENT);
    }

    #[test]
    fn tall_image_letterboxes_sides() {
        let img = checker(50, 100);
        let mut s = Surface::new(80, 80);
        img.blit_fit(&mut s);
        assert_eq!(s.get_pixel(5, 40), Pixel::TRANSPARENT);
        assert_eq!(s.get_pixel(75, 40), Pixel::TRANSPARENT);
        assert_ne!(s.get_pixel(40, 40), Pixel::TRANSPARENT);
    }

    #[test]
    fn fit_rect_matches_aspect() {
        let img = checker(100, 50);
        let (origin, size) = img.fit_rect(80, 80);
        assert_eq!(origin.x, 0.0);
        assert_eq!(size.x, 80.0);
        assert_eq!(size.y, 40.0);
        assert_eq!(origin.y, 20.0);
    }
}
