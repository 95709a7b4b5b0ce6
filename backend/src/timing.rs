use std::time::{Duration, Instant};

/// Time one frame may take at `fps`; `None` when uncapped.
pub fn frame_budget(fps: u32) -> Option<Duration> {
    if fps == 0 {
        return None;
    }
    Some(Duration::from_secs_f64(1.0 / f64::from(fps)))
}

/// Caps the presentation rate and measures the achieved frames per second.
pub struct FramePacer {
    budget: Option<Duration>,
    frame_start: Instant,
    window_start: Instant,
    frames_in_window: u32,
    fps: u32,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        let now = Instant::now();
        Self {
            budget: frame_budget(target_fps),
            frame_start: now,
            window_start: now,
            frames_in_window: 0,
            fps: 0,
        }
    }

    pub fn set_target_fps(&mut self, fps: u32) {
        self.budget = frame_budget(fps);
        log::info!("TIMER: Target time per frame: {:?}", self.budget);
    }

    /// Sleeps for whatever is left of the current frame, then starts the next one.
    pub fn wait(&mut self) {
        if let Some(budget) = self.budget {
            let left = budget.saturating_sub(self.frame_start.elapsed());
            if !left.is_zero() {
                std::thread::sleep(left);
            }
        }
        let now = Instant::now();
        self.record_frame(now);
        self.frame_start = now;
    }

    fn record_frame(&mut self, now: Instant) {
        self.frames_in_window += 1;
        let window = now.duration_since(self.window_start);
        if window >= Duration::from_secs(1) {
            self.fps = (f64::from(self.frames_in_window) / window.as_secs_f64()).round() as u32;
            log::debug!("TIMER: {} fps", self.fps);
            self.frames_in_window = 0;
            self.window_start = now;
        }
    }

    /// Frames per second measured over the last full second; 0 before that.
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_fps_budget() {
        let budget = frame_budget(60).unwrap();
        assert!(budget > Duration::from_millis(16));
        assert!(budget < Duration::from_millis(17));
    }

    #[test]
    fn zero_means_uncapped() {
        assert_eq!(frame_budget(0), None);
    }

    #[test]
    fn fps_is_measured_per_second() {
        let mut pacer = FramePacer::new(0);
        let start = pacer.window_start;
        for i in 1..=30 {
            pacer.record_frame(start + Duration::from_millis(i * 20));
        }
        assert_eq!(pacer.fps(), 0);
        for i in 31..=50 {
            pacer.record_frame(start + Duration::from_millis(i * 20));
        }
        // 50 frames over exactly one second
        assert_eq!(pacer.fps(), 50);
        assert_eq!(pacer.frames_in_window, 0);
    }

    #[test]
    fn wait_respects_budget() {
        let mut pacer = FramePacer::new(100);
        let before = Instant::now();
        pacer.wait();
        assert!(before.elapsed() >= Duration::from_millis(9));
    }
}
