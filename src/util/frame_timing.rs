//! Per-frame delta time and smoothed FPS.

use web_time::{Duration, Instant};

/// Longest step handed to the simulation; longer stalls (debugger, window
/// drag) are clamped so the camera does not jump.
const MAX_DELTA: f32 = 0.25;

/// Frame timing with FPS calculation and optional frame limiting
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Seconds covered by the last completed frame
    delta: f32,
    /// Frames completed since construction
    frame_count: u64,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            delta: 0.0,
            frame_count: 0,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Call at the start of each frame. Returns true if enough time has
    /// passed to render.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Call after rendering. Returns the frame's delta time in seconds.
    pub fn end_frame(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.record(elapsed)
    }

    /// Account for a frame of known length (fixed-step and headless runs).
    pub fn record(&mut self, elapsed: Duration) -> f32 {
        let frame_time = elapsed.as_secs_f32();
        self.frame_count += 1;
        self.delta = frame_time.min(MAX_DELTA);
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        self.delta
    }

    /// Delta time of the last completed frame, in seconds.
    #[must_use]
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Frames completed so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new(0)
    }
}
