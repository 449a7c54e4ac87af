use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use egui::{Color32, Pos2, Vec2};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::error::{PaintError, PaintResult};
use crate::stroke::Segment;

/// The off-screen raster everything is drawn into.
///
/// This is the only drawing target: the on-screen widget shows a texture
/// projected from it (see [`crate::Renderer`]), and exports serialize it.
pub struct Canvas {
    image: RgbaImage,
    background: Color32,
    /// Bumped on every mutation so the renderer knows when to re-upload
    revision: u64,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("background", &self.background)
            .field("revision", &self.revision)
            .finish()
    }
}

impl Canvas {
    /// Allocates a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Color32) -> PaintResult<Self> {
        Ok(Self {
            image: Self::allocate(width, height, background)?,
            background,
            revision: 0,
        })
    }

    fn allocate(width: u32, height: u32, background: Color32) -> PaintResult<RgbaImage> {
        if width == 0 || height == 0 {
            return Err(PaintError::InvalidDimensions { width, height });
        }
        Ok(RgbaImage::from_pixel(width, height, to_rgba(background)))
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width() as f32, self.height() as f32)
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the buffer with a fresh one of the given size.
    ///
    /// On error the current buffer is kept as it was.
    pub fn clear(&mut self, width: u32, height: u32, background: Color32) -> PaintResult<()> {
        self.image = Self::allocate(width, height, background)?;
        self.background = background;
        self.revision += 1;
        Ok(())
    }

    /// Rasterizes a round-capped line by stamping discs along it.
    ///
    /// Pixels are overwritten, never blended, so redrawing the same segments
    /// always yields the same buffer.
    pub fn draw_segment(&mut self, segment: &Segment) {
        let start = segment.start();
        let end = segment.end();
        let color = to_rgba(segment.color());
        let radius = (segment.width().get() as f32 / 2.0).max(0.5);

        let delta = end - start;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as i32;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.stamp_disc(start + delta * t, radius, color);
        }
        self.revision += 1;
    }

    fn stamp_disc(&mut self, center: Pos2, radius: f32, color: Rgba<u8>) {
        let max_x = self.width() as i64 - 1;
        let max_y = self.height() as i64 - 1;
        let min_x = ((center.x - radius).floor() as i64).max(0);
        let min_y = ((center.y - radius).floor() as i64).max(0);
        let end_x = ((center.x + radius).ceil() as i64).min(max_x);
        let end_y = ((center.y + radius).ceil() as i64).min(max_y);
        let radius_sq = radius * radius;

        for y in min_y..=end_y {
            for x in min_x..=end_x {
                let dx = x as f32 - center.x;
                let dy = y as f32 - center.y;
                if dx * dx + dy * dy <= radius_sq {
                    self.image.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }

    /// Color of the pixel at `(x, y)`.
    pub fn pixel_at(&self, x: i64, y: i64) -> PaintResult<Color32> {
        let in_bounds = (0..self.width() as i64).contains(&x) && (0..self.height() as i64).contains(&y);
        if !in_bounds {
            return Err(PaintError::OutOfRange {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        let [r, g, b, _] = self.image.get_pixel(x as u32, y as u32).0;
        Ok(Color32::from_rgb(r, g, b))
    }

    /// Writes the raster as a PNG file without any metadata.
    pub fn export(&self, path: &Path) -> PaintResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        DynamicImage::ImageRgba8(self.image.clone())
            .to_rgb8()
            .write_to(&mut writer, ImageFormat::Png)?;
        writer.flush()?;
        log::info!(
            "Exported {}x{} canvas to {}",
            self.width(),
            self.height(),
            path.display()
        );
        Ok(())
    }

    /// Copy of the raster in the layout egui textures expect
    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(
            [self.width() as usize, self.height() as usize],
            self.image.as_raw(),
        )
    }
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba([color.r(), color.g(), color.b(), 255])
}
