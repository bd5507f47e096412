//! Frame-counted gravity pacing for hosts.
//!
//! The engine has no clock. A host advances this counter once per polling
//! iteration and calls `soft_drop` whenever [`Gravity::tick`] says so, which
//! keeps gravity independent of how many input events arrive in between.

#[derive(Debug, Clone)]
pub struct Gravity {
    interval_frames: u32,
    elapsed: u32,
}

impl Gravity {
    /// An interval of 0 is treated as 1 (drop every frame).
    pub fn new(interval_frames: u32) -> Self {
        Self {
            interval_frames: interval_frames.max(1),
            elapsed: 0,
        }
    }

    pub fn interval_frames(&self) -> u32 {
        self.interval_frames
    }

    /// Advance one frame. Returns true when a gravity drop is due.
    pub fn tick(&mut self) -> bool {
        self.elapsed += 1;
        if self.elapsed >= self.interval_frames {
            self.elapsed = 0;
            return true;
        }
        false
    }

    /// Restart the count, e.g. after a restart or while paused.
    pub fn reset(&mut self) {
        self.elapsed = 0;
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_GRAVITY_FRAMES)
    }
}
