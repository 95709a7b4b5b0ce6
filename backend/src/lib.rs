pub mod color;
pub mod config;
pub mod error;
pub mod font;
pub mod glutils;
pub mod image_info;
pub mod logging;
pub mod math;
pub mod shaders;
pub mod system;
pub mod text;
pub mod text_renderer;
pub mod timing;

pub use color::Color;
pub use config::{DemoConfig, TextConfig, WindowConfig, IMAGE_PROBE_PATH};
pub use error::BackendError;
pub use image_info::{ImageInfo, PixelFormat};
pub use logging::TraceLogLevel;
pub use system::System;

/// Runs the frame loop until the close signal: clear, draw the banner, present.
pub fn run_frame_loop(system: &mut System, config: &DemoConfig) {
    let banner = &config.banner;
    while !system.window_should_close() {
        system.clear_screen(config.background);
        system.draw_text(
            &banner.text,
            banner.x,
            banner.y,
            banner.font_size,
            banner.color,
        );
        system.draw_to_screen();
    }
    log::debug!("frame loop finished at {} fps", system.fps());
}
