//! Playback clock for the lyrics player.
//!
//! Stands in for an audio element's `currentTime`: a monotonic anchor
//! plus an accumulated offset, scaled by the playback speed. Pausing,
//! seeking and speed changes all re-anchor so the reported time never
//! jumps.

use std::time::Instant;

/// Minimum playback speed multiplier.
pub const MIN_SPEED: f64 = 0.1;
/// Maximum playback speed multiplier.
pub const MAX_SPEED: f64 = 16.0;

/// Monotonic playback clock with pause, seek and variable speed.
#[derive(Debug)]
pub struct PlaybackClock {
    paused: bool,
    speed: f64,
    /// Wall clock anchor for the running segment
    anchor: Instant,
    /// Playback time at the anchor, in seconds
    time_offset: f64,
}

impl PlaybackClock {
    /// Create a running clock at time zero.
    pub fn new(speed: f64) -> Self {
        Self {
            paused: false,
            speed: speed.clamp(MIN_SPEED, MAX_SPEED),
            anchor: Instant::now(),
            time_offset: 0.0,
        }
    }

    /// Current playback time in seconds.
    pub fn current_time(&self) -> f64 {
        if self.paused {
            self.time_offset
        } else {
            self.time_offset + self.anchor.elapsed().as_secs_f64() * self.speed
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Freeze the clock at the current time.
    pub fn pause(&mut self) {
        if !self.paused {
            self.time_offset = self.current_time();
            self.paused = true;
        }
    }

    /// Resume from the frozen time.
    pub fn resume(&mut self) {
        if self.paused {
            self.anchor = Instant::now();
            self.paused = false;
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Jump to `time` (clamped at zero) without changing the pause state.
    pub fn seek(&mut self, time: f64) {
        self.time_offset = time.max(0.0);
        self.anchor = Instant::now();
    }

    /// Increase speed by a 1.5x step, up to [`MAX_SPEED`].
    pub fn speed_up(&mut self) {
        self.set_speed(self.speed * 1.5);
    }

    /// Decrease speed by a 1.5x step, down to [`MIN_SPEED`].
    pub fn speed_down(&mut self) {
        self.set_speed(self.speed / 1.5);
    }

    /// Change speed without disturbing the current time.
    pub fn set_speed(&mut self, speed: f64) {
        self.time_offset = self.current_time();
        self.anchor = Instant::now();
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clock_starts_at_zero() {
        let clock = PlaybackClock::new(1.0);
        assert!(!clock.is_paused());
        assert!(clock.current_time() < 0.1);
    }

    #[test]
    fn new_clock_clamps_speed() {
        assert_eq!(PlaybackClock::new(100.0).speed(), MAX_SPEED);
        assert_eq!(PlaybackClock::new(0.0).speed(), MIN_SPEED);
    }

    #[test]
    fn paused_clock_holds_time() {
        let mut clock = PlaybackClock::new(1.0);
        clock.seek(5.0);
        clock.pause();
        let frozen = clock.current_time();
        std::thread::sleep(std::time::Duration::from_millis(20));
        assert_eq!(clock.current_time(), frozen);
    }

    #[test]
    fn seek_moves_the_clock() {
        let mut clock = PlaybackClock::new(1.0);
        clock.pause();
        clock.seek(42.5);
        assert_eq!(clock.current_time(), 42.5);
    }

    #[test]
    fn seek_clamps_negative_to_zero() {
        let mut clock = PlaybackClock::new(1.0);
        clock.pause();
        clock.seek(-3.0);
        assert_eq!(clock.current_time(), 0.0);
    }

    #[test]
    fn toggle_pause_roundtrips() {
        let mut clock = PlaybackClock::new(1.0);
        clock.toggle_pause();
        assert!(clock.is_paused());
        clock.toggle_pause();
        assert!(!clock.is_paused());
    }

    #[test]
    fn resume_does_not_jump() {
        let mut clock = PlaybackClock::new(16.0);
        clock.seek(10.0);
        clock.pause();
        std::thread::sleep(std::time::Duration::from_millis(20));
        clock.resume();
        // At 16x, a jump would show up immediately; a fresh anchor keeps
        // the time close to the frozen value.
        assert!(clock.current_time() - 10.0 < 1.0);
    }

    #[test]
    fn speed_up_steps_and_clamps() {
        let mut clock = PlaybackClock::new(1.0);
        clock.speed_up();
        assert_eq!(clock.speed(), 1.5);
        clock.set_speed(15.0);
        clock.speed_up();
        assert_eq!(clock.speed(), MAX_SPEED);
    }

    #[test]
    fn speed_down_steps_and_clamps() {
        let mut clock = PlaybackClock::new(2.0);
        clock.speed_down();
        assert!((clock.speed() - 1.333).abs() < 0.01);
        clock.set_speed(0.15);
        clock.speed_down();
        assert_eq!(clock.speed(), MIN_SPEED);
    }

    #[test]
    fn speed_change_preserves_paused_time() {
        let mut clock = PlaybackClock::new(1.0);
        clock.pause();
        clock.seek(7.0);
        clock.speed_up();
        assert_eq!(clock.current_time(), 7.0);
    }
}
