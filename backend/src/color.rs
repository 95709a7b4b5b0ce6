/// 8-bit RGBA color.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const RED: Color = Color::new(230, 41, 55, 255);
    pub const LIGHTGRAY: Color = Color::new(200, 200, 200, 255);
    pub const RAYWHITE: Color = Color::new(245, 245, 245, 255);
    /// Fully transparent
    pub const BLANK: Color = Color::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Normalized components as expected by `gl::ClearColor` and shader uniforms.
    pub fn to_f32(self) -> (f32, f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            f32::from(self.a) / 255.0,
        )
    }

    pub fn to_rgba_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_f32_normalizes_components() {
        let (r, g, b, a) = Color::new(255, 0, 51, 255).to_f32();
        assert_eq!(r, 1.0);
        assert_eq!(g, 0.0);
        assert!((b - 0.2).abs() < f32::EPSILON);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn raywhite_is_slightly_off_white() {
        assert_eq!(Color::RAYWHITE.to_rgba_bytes(), [245, 245, 245, 255]);
        assert_ne!(Color::RAYWHITE, Color::WHITE);
    }

    #[test]
    fn blank_is_transparent() {
        assert_eq!(Color::BLANK.a, 0);
        assert_eq!(Color::default(), Color::BLANK);
    }
}
