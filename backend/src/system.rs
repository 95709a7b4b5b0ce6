use super::color::Color;
use super::config::WindowConfig;
use super::error::BackendError;
use super::glutils;
use super::text_renderer::TextRenderer;
use super::timing::FramePacer;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::video::GLProfile;

/// Window, GL context and event source for one demo run.
///
/// Field order is drop order: GL objects go before the context, the context
/// before the window.
pub struct System {
    pub w: usize,
    pub h: usize,
    text: TextRenderer,
    pacer: FramePacer,
    event_pump: sdl2::EventPump,
    _gl_ctx: sdl2::video::GLContext,
    window: sdl2::video::Window,
    _video_subsystem: sdl2::VideoSubsystem,
    _sdl_context: sdl2::Sdl,
    should_close: bool,
}

impl System {
    pub fn new(config: &WindowConfig) -> Result<System, BackendError> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(3, 3);

        let window = video_subsystem
            .window(&config.title, config.width, config.height)
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| BackendError::Window(e.to_string()))?;

        let gl_ctx = window
            .gl_create_context()
            .map_err(BackendError::GlContext)?;
        gl::load_with(|name| video_subsystem.gl_get_proc_address(name) as *const _);

        debug_assert_eq!(gl_attr.context_profile(), GLProfile::Core);
        debug_assert_eq!(gl_attr.context_version(), (3, 3));

        log::info!(
            "DISPLAY: Window {:?} initialized: {} x {}",
            config.title,
            config.width,
            config.height
        );
        glutils::log_opengl_info();

        let (fb_w, fb_h) = window.drawable_size();
        unsafe { gl::Viewport(0, 0, fb_w as i32, fb_h as i32) };

        let text = TextRenderer::new()?;
        let event_pump = sdl_context.event_pump()?;

        let mut system = System {
            w: config.width as usize,
            h: config.height as usize,
            text,
            pacer: FramePacer::new(0),
            event_pump,
            _gl_ctx: gl_ctx,
            window,
            _video_subsystem: video_subsystem,
            _sdl_context: sdl_context,
            should_close: false,
        };
        system.set_target_fps(config.target_fps);
        Ok(system)
    }

    /// Drains pending events. Returns `false` once a close signal was seen:
    /// the window close button, a quit request or the Escape key.
    pub fn process_io_events(&mut self) -> bool {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::Window {
                    win_event: WindowEvent::Close,
                    ..
                }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => self.should_close = true,
                _ => {}
            }
        }
        !self.should_close
    }

    pub fn window_should_close(&mut self) -> bool {
        !self.process_io_events()
    }

    pub fn clear_screen(&mut self, color: Color) {
        let (r, g, b, a) = color.to_f32();
        unsafe {
            gl::ClearColor(r, g, b, a);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    pub fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: i32, color: Color) {
        self.text.draw(text, x, y, font_size, color, (self.w, self.h));
    }

    /// Presents the frame and waits out the rest of the frame budget.
    pub fn draw_to_screen(&mut self) {
        self.window.gl_swap_window();
        self.pacer.wait();
    }

    pub fn set_target_fps(&mut self, fps: u32) {
        self.pacer.set_target_fps(fps);
    }

    pub fn fps(&self) -> u32 {
        self.pacer.fps()
    }
}

impl Drop for System {
    fn drop(&mut self) {
        log::info!("Window closed successfully");
    }
}
