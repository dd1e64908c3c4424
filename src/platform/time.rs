//! Native frame clock

use std::time::{Duration, Instant};

use super::Clock;
use crate::Viewport;
use crate::consts::{FRAME_DT, MAX_FRAME_DT};

/// How the clock reports frame time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockMode {
    /// Wall-clock time between frames, capped at `MAX_FRAME_DT`
    Realtime,
    /// Constant step regardless of wall-clock time (headless runs, replays)
    Fixed(f32),
}

#[derive(Debug, Clone)]
pub struct FrameClock {
    mode: ClockMode,
    viewport: Viewport,
    last: Instant,
}

impl FrameClock {
    pub fn new(mode: ClockMode, viewport: Viewport) -> Self {
        Self {
            mode,
            viewport,
            last: Instant::now(),
        }
    }

    pub fn realtime(viewport: Viewport) -> Self {
        Self::new(ClockMode::Realtime, viewport)
    }

    /// Exactly one target frame per call
    pub fn fixed(viewport: Viewport) -> Self {
        Self::new(ClockMode::Fixed(FRAME_DT), viewport)
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Sleep off whatever is left of the current frame (realtime only)
    pub fn pace(&self) {
        if self.mode != ClockMode::Realtime {
            return;
        }
        let target = Duration::from_secs_f32(FRAME_DT);
        let spent = self.last.elapsed();
        if spent < target {
            std::thread::sleep(target - spent);
        }
    }
}

impl Clock for FrameClock {
    fn elapsed_since_last_frame(&mut self) -> f32 {
        let now = Instant::now();
        let real = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        match self.mode {
            ClockMode::Realtime => real.min(MAX_FRAME_DT),
            ClockMode::Fixed(dt) => dt,
        }
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}
