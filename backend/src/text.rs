//! CPU side of text drawing: layout and rasterization of the built-in font
//! into an RGBA bitmap that the GL renderer uploads as a texture.

use crate::color::Color;
use crate::font::{self, GLYPH_HEIGHT, GLYPH_WIDTH};

/// Integer scale applied to the 8x8 glyphs for a given font size.
pub fn glyph_scale(font_size: i32) -> usize {
    (font_size / GLYPH_HEIGHT as i32).max(1) as usize
}

/// Horizontal gap between two glyphs, in pixels.
pub fn glyph_spacing(font_size: i32) -> usize {
    (font_size / 10).max(0) as usize
}

/// Size in pixels of `text` drawn at `font_size`.
pub fn measure_text(text: &str, font_size: i32) -> (usize, usize) {
    let count = text.chars().count();
    if count == 0 {
        return (0, 0);
    }
    let scale = glyph_scale(font_size);
    let advance = GLYPH_WIDTH * scale + glyph_spacing(font_size);
    (
        advance * count - glyph_spacing(font_size),
        GLYPH_HEIGHT * scale,
    )
}

/// Tightly packed RGBA8 pixels, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBitmap {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl TextBitmap {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn pixel(&self, x: usize, y: usize) -> Color {
        let i = (y * self.width + x) * 4;
        Color::new(
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        )
    }
}

/// Renders `text` with a transparent background.
pub fn rasterize(text: &str, font_size: i32, color: Color) -> TextBitmap {
    let (width, height) = measure_text(text, font_size);
    let mut pixels = vec![0u8; width * height * 4];
    let scale = glyph_scale(font_size);
    let advance = GLYPH_WIDTH * scale + glyph_spacing(font_size);
    let rgba = color.to_rgba_bytes();

    for (n, ch) in text.chars().enumerate() {
        let origin_x = n * advance;
        for row in 0..GLYPH_HEIGHT {
            for col in 0..GLYPH_WIDTH {
                if !font::pixel_set(ch, col, row) {
                    continue;
                }
                for dy in 0..scale {
                    let y = row * scale + dy;
                    let start = (y * width + origin_x + col * scale) * 4;
                    for px in pixels[start..start + scale * 4].chunks_exact_mut(4) {
                        px.copy_from_slice(&rgba);
                    }
                }
            }
        }
    }

    TextBitmap {
        width,
        height,
        pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_banner_at_size_20() {
        // scale 2, spacing 2: 16px glyphs with an 18px advance
        let (w, h) = measure_text("Congrats!", 20);
        assert_eq!(w, 9 * 18 - 2);
        assert_eq!(h, 16);
    }

    #[test]
    fn small_sizes_never_scale_below_one() {
        assert_eq!(glyph_scale(4), 1);
        assert_eq!(glyph_scale(0), 1);
        assert_eq!(glyph_spacing(-5), 0);
        assert_eq!(measure_text("ab", 8), (16, 8));
    }

    #[test]
    fn empty_text_is_empty_bitmap() {
        let bmp = rasterize("", 20, Color::BLACK);
        assert!(bmp.is_empty());
        assert!(bmp.pixels.is_empty());
    }

    #[test]
    fn background_stays_transparent() {
        let bmp = rasterize(" ", 20, Color::RED);
        assert_eq!(bmp.width, 16);
        assert!(bmp.pixels.chunks_exact(4).all(|px| px[3] == 0));
    }

    #[test]
    fn glyph_pixels_are_scaled_blocks() {
        let bmp = rasterize("!", 16, Color::LIGHTGRAY);
        // '!' row 0 has columns 3 and 4 set; at scale 2 that's x in 6..10, y in 0..2
        for y in 0..2 {
            for x in 6..10 {
                assert_eq!(bmp.pixel(x, y), Color::LIGHTGRAY);
            }
            assert_eq!(bmp.pixel(5, y), Color::BLANK);
            assert_eq!(bmp.pixel(10, y), Color::BLANK);
        }
        // row 5 is the gap above the dot
        assert_eq!(bmp.pixel(6, 10), Color::BLANK);
        assert_eq!(bmp.pixel(6, 12), Color::LIGHTGRAY);
    }

    #[test]
    fn second_glyph_starts_after_advance() {
        let bmp = rasterize(" !", 20, Color::WHITE);
        // advance is 18px, '!' column 3 at scale 2 begins 6px later
        assert_eq!(bmp.pixel(18 + 5, 0), Color::BLANK);
        assert_eq!(bmp.pixel(18 + 6, 0), Color::WHITE);
    }
}
