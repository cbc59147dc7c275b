//! Time management utilities

use std::time::Instant;

/// How a [`FrameClock`] produces its per-frame delta
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameStep {
    /// Every frame advances by the same number of seconds
    Fixed(f32),
    /// Delta is measured from the wall clock
    RealTime,
}

/// Frame timer driving the simulation tick
pub struct FrameClock {
    step: FrameStep,
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl FrameClock {
    /// Create a clock that advances by `dt` seconds every frame
    pub fn fixed(dt: f32) -> Self {
        Self::new(FrameStep::Fixed(dt))
    }

    /// Create a clock measuring real elapsed time between frames
    pub fn real_time() -> Self {
        Self::new(FrameStep::RealTime)
    }

    fn new(step: FrameStep) -> Self {
        Self {
            step,
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Advance one frame and return its delta in seconds
    pub fn advance(&mut self) -> f32 {
        let now = Instant::now();
        self.delta_time = match self.step {
            FrameStep::Fixed(dt) => dt,
            FrameStep::RealTime => now.duration_since(self.last_frame).as_secs_f32(),
        };
        self.last_frame = now;
        self.total_time += self.delta_time;
        self.frame_count += 1;
        self.delta_time
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total simulated time
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
