use crate::color::Color;
use crate::logging::TraceLogLevel;

/// Image read by the probe, relative to the working directory.
pub const IMAGE_PROBE_PATH: &str = "mia.png";

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// 0 means uncapped
    pub target_fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            title: "Hello, World!".to_string(),
            target_fps: 60,
        }
    }
}

/// A single line of text drawn every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TextConfig {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub font_size: i32,
    pub color: Color,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            text: "Congrats! You created your first window!".to_string(),
            x: 10,
            y: 10,
            font_size: 20,
            color: Color::LIGHTGRAY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub background: Color,
    pub banner: TextConfig,
    pub log_level: TraceLogLevel,
}

impl DemoConfig {
    pub fn new() -> Self {
        Self {
            background: Color::RAYWHITE,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_defaults() {
        let cfg = DemoConfig::new();
        assert_eq!(cfg.window.width, 600);
        assert_eq!(cfg.window.height, 400);
        assert_eq!(cfg.window.title, "Hello, World!");
        assert_eq!(cfg.window.target_fps, 60);
        assert_eq!(cfg.background, Color::RAYWHITE);
        assert_eq!(cfg.log_level, TraceLogLevel::Info);
    }

    #[test]
    fn banner_defaults() {
        let banner = TextConfig::default();
        assert_eq!(banner.text, "Congrats! You created your first window!");
        assert_eq!((banner.x, banner.y), (10, 10));
        assert_eq!(banner.font_size, 20);
        assert_eq!(banner.color, Color::LIGHTGRAY);
    }
}
