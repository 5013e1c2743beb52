//! Timed resolution transitions for animated zooms.
//!
//! A [`ZoomTransition`] does not drive a frame loop. The view commits the
//! target resolution up front; the transition exposes [`sample`] so a render
//! loop can draw the eased intermediate resolutions until it finishes.
//!
//! [`sample`]: ZoomTransition::sample

use crate::animation::easing::{lerp, EasingType};
use instant::Instant;
use std::time::Duration;

/// State of a zoom transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomTransitionState {
    Running,
    Completed,
}

/// An eased interpolation between two view resolutions
#[derive(Debug, Clone)]
pub struct ZoomTransition {
    start_resolution: f64,
    target_resolution: f64,
    start_time: Instant,
    duration: Duration,
    easing: EasingType,
}

impl ZoomTransition {
    /// Starts a transition at the current instant
    pub fn new(
        start_resolution: f64,
        target_resolution: f64,
        duration: Duration,
        easing: EasingType,
    ) -> Self {
        Self {
            start_resolution,
            target_resolution,
            start_time: Instant::now(),
            duration,
            easing,
        }
    }

    pub fn start_resolution(&self) -> f64 {
        self.start_resolution
    }

    pub fn target_resolution(&self) -> f64 {
        self.target_resolution
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Normalized progress at `now`, clamped to [0.0, 1.0]
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = if now <= self.start_time {
            Duration::ZERO
        } else {
            now - self.start_time
        };
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// The eased resolution to draw at `now`
    pub fn sample(&self, now: Instant) -> f64 {
        let t = self.easing.apply(self.progress(now));
        lerp(self.start_resolution, self.target_resolution, t)
    }

    pub fn state(&self, now: Instant) -> ZoomTransitionState {
        if self.progress(now) >= 1.0 {
            ZoomTransitionState::Completed
        } else {
            ZoomTransitionState::Running
        }
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.state(now) == ZoomTransitionState::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition() -> ZoomTransition {
        ZoomTransition::new(
            1000.0,
            500.0,
            Duration::from_millis(250),
            EasingType::EaseOut,
        )
    }

    #[test]
    fn test_sample_endpoints() {
        let t = transition();
        let start = t.start_time;

        assert_eq!(t.sample(start), 1000.0);
        assert_eq!(t.sample(start + Duration::from_millis(250)), 500.0);
        // Past the end the target holds
        assert_eq!(t.sample(start + Duration::from_secs(5)), 500.0);
    }

    #[test]
    fn test_eased_midpoint_overshoots_linear() {
        let t = transition();
        let midpoint = t.sample(t.start_time + Duration::from_millis(125));
        // EaseOut has covered more than half the distance at half time
        assert!(midpoint < 750.0);
        assert!(midpoint > 500.0);
    }

    #[test]
    fn test_state_progression() {
        let t = transition();
        assert_eq!(t.state(t.start_time), ZoomTransitionState::Running);
        assert!(t.is_finished(t.start_time + Duration::from_millis(250)));
    }

    #[test]
    fn test_zero_duration_is_immediately_finished() {
        let t = ZoomTransition::new(10.0, 5.0, Duration::ZERO, EasingType::Linear);
        assert!(t.is_finished(t.start_time));
        assert_eq!(t.sample(t.start_time), 5.0);
    }
}
