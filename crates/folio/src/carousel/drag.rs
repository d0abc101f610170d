use super::{DRAG_DISTANCE_THRESHOLD, DRAG_VELOCITY_THRESHOLD, DRAG_VELOCITY_WINDOW};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    Advance,
    Retreat,
    SpringBack,
}

/// Horizontal displacement (px) and velocity (px/s) at the moment a drag ends.
/// Negative values point left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragRelease {
    pub offset: f64,
    pub velocity: f64,
}

impl DragRelease {
    pub fn new(offset: f64, velocity: f64) -> Self {
        Self { offset, velocity }
    }

    /// Leftward flicks advance, rightward flicks retreat. Both thresholds are strict.
    pub fn outcome(&self) -> DragOutcome {
        if self.offset < -DRAG_DISTANCE_THRESHOLD || self.velocity < -DRAG_VELOCITY_THRESHOLD {
            DragOutcome::Advance
        } else if self.offset > DRAG_DISTANCE_THRESHOLD
            || self.velocity > DRAG_VELOCITY_THRESHOLD
        {
            DragOutcome::Retreat
        } else {
            DragOutcome::SpringBack
        }
    }
}

/// Samples `(time, offset)` during a drag to estimate release velocity.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    samples: VecDeque<(f64, f64)>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, time: f64) {
        self.samples.clear();
        self.samples.push_back((time, 0.0));
    }

    pub fn sample(&mut self, time: f64, offset: f64) {
        self.samples.push_back((time, offset));
        while let Some(&(oldest, _)) = self.samples.front() {
            if time - oldest > DRAG_VELOCITY_WINDOW && self.samples.len() > 2 {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    pub fn release(&mut self, time: f64, offset: f64) -> DragRelease {
        self.sample(time, offset);
        let velocity = match (self.samples.front(), self.samples.back()) {
            (Some(&(t0, x0)), Some(&(t1, x1))) if t1 > t0 => (x1 - x0) / (t1 - t0),
            _ => 0.0,
        };
        self.samples.clear();
        DragRelease::new(offset, velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_threshold_is_strict() {
        assert_eq!(DragRelease::new(-50.0, 0.0).outcome(), DragOutcome::SpringBack);
        assert_eq!(DragRelease::new(-51.0, 0.0).outcome(), DragOutcome::Advance);
        assert_eq!(DragRelease::new(50.0, 0.0).outcome(), DragOutcome::SpringBack);
        assert_eq!(DragRelease::new(51.0, 0.0).outcome(), DragOutcome::Retreat);
    }

    #[test]
    fn test_velocity_threshold_is_strict() {
        assert_eq!(DragRelease::new(0.0, -500.0).outcome(), DragOutcome::SpringBack);
        assert_eq!(DragRelease::new(0.0, -501.0).outcome(), DragOutcome::Advance);
        assert_eq!(DragRelease::new(0.0, 500.0).outcome(), DragOutcome::SpringBack);
        assert_eq!(DragRelease::new(0.0, 501.0).outcome(), DragOutcome::Retreat);
    }

    #[test]
    fn test_leftward_check_wins_over_rightward() {
        // short drag right but flicked left on release
        assert_eq!(DragRelease::new(60.0, -800.0).outcome(), DragOutcome::Advance);
    }

    #[test]
    fn test_tracker_measures_recent_velocity() {
        let mut tracker = DragTracker::new();
        tracker.begin(0.0);
        // slow start, then a fast flick in the last 100ms
        tracker.sample(0.5, -10.0);
        tracker.sample(1.0, -20.0);
        tracker.sample(1.05, -60.0);
        let release = tracker.release(1.1, -100.0);

        assert_eq!(release.offset, -100.0);
        assert!((release.velocity - -800.0).abs() < 1e-6);
        assert_eq!(release.outcome(), DragOutcome::Advance);
    }

    #[test]
    fn test_tracker_without_motion_has_no_velocity() {
        let mut tracker = DragTracker::new();
        let release = tracker.release(2.0, 0.0);
        assert_eq!(release.velocity, 0.0);
        assert_eq!(release.outcome(), DragOutcome::SpringBack);
    }
}
