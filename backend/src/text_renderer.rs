use super::color::Color;
use super::error::BackendError;
use super::glutils::*;
use super::math::Mat4x4;
use super::shaders::Shaders;
use super::text;
use gl::*;
use std::collections::HashMap;

const VERTEX_SHADER_SRC: &str = r#"
#version 330 core
layout (location = 0) in vec2 a_pos;

uniform mat4 projection;
uniform vec4 rect;

out vec2 uv;

void main() {
    uv = a_pos;
    gl_Position = projection * vec4(rect.xy + a_pos * rect.zw, 0.0, 1.0);
}
"#;

const FRAGMENT_SHADER_SRC: &str = r#"
#version 330 core
in vec2 uv;

uniform sampler2D glyphs;
uniform vec4 tint;

out vec4 frag_color;

void main() {
    frag_color = texture(glyphs, uv) * tint;
}
"#;

// unit quad as a triangle strip; texture rows run top to bottom like the screen
const QUAD: [f32; 8] = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0];

struct CachedText {
    texture: u32,
    width: usize,
    height: usize,
}

/// Draws lines of text with the built-in bitmap font.
///
/// Each distinct (text, font size) pair is rasterized in white once and kept
/// as a texture; the color is applied as a tint at draw time.
pub struct TextRenderer {
    shaders: Shaders,
    vao: u32,
    vbo: u32,
    cache: HashMap<(String, i32), CachedText>,
}

impl TextRenderer {
    pub fn new() -> Result<TextRenderer, BackendError> {
        let shaders = Shaders::from_str(VERTEX_SHADER_SRC, FRAGMENT_SHADER_SRC)?;

        let mut vao = 0;
        let mut vbo = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);
            gl::BindVertexArray(vao);
            gl::BindBuffer(ARRAY_BUFFER, vbo);
        }
        gl_buffer_data_arr_stat(&QUAD);
        gl_vertex_attrib_ptr_enab(0, 2, 2, 0);
        unsafe { gl::BindVertexArray(0) };
        check_gl_err();

        Ok(TextRenderer {
            shaders,
            vao,
            vbo,
            cache: HashMap::new(),
        })
    }

    fn cached(&mut self, line: &str, font_size: i32) -> &CachedText {
        self.cache
            .entry((line.to_string(), font_size))
            .or_insert_with(|| {
                let bmp = text::rasterize(line, font_size, Color::WHITE);
                let texture = if bmp.is_empty() {
                    0
                } else {
                    upload_rgba_texture(bmp.width, bmp.height, &bmp.pixels)
                };
                log::trace!(
                    "TEXT: rasterized {:?} at size {} ({}x{})",
                    line,
                    font_size,
                    bmp.width,
                    bmp.height
                );
                CachedText {
                    texture,
                    width: bmp.width,
                    height: bmp.height,
                }
            })
    }

    /// Draws `line` with its top-left corner at (`x`, `y`) in window pixels.
    pub fn draw(
        &mut self,
        line: &str,
        x: i32,
        y: i32,
        font_size: i32,
        color: Color,
        screen: (usize, usize),
    ) {
        let (texture, width, height) = {
            let entry = self.cached(line, font_size);
            (entry.texture, entry.width, entry.height)
        };
        if texture == 0 {
            return;
        }

        let (r, g, b, a) = color.to_f32();
        unsafe {
            gl::Enable(BLEND);
            gl::BlendFunc(SRC_ALPHA, ONE_MINUS_SRC_ALPHA);
        }
        self.shaders.use_program();
        self.shaders
            .set_mat4fv("projection", &Mat4x4::screen(screen.0 as f32, screen.1 as f32));
        self.shaders
            .set_vec4("rect", x as f32, y as f32, width as f32, height as f32);
        self.shaders.set_vec4("tint", r, g, b, a);
        self.shaders.set_i32("glyphs", 0);

        unsafe {
            gl::ActiveTexture(TEXTURE0);
            gl::BindTexture(TEXTURE_2D, texture);
            gl::BindVertexArray(self.vao);
            gl::DrawArrays(TRIANGLE_STRIP, 0, 4);
            gl::BindVertexArray(0);
        }
        check_gl_err();
    }
}

impl Drop for TextRenderer {
    fn drop(&mut self) {
        for (_, entry) in self.cache.drain() {
            delete_texture(entry.texture);
        }
        unsafe {
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}
