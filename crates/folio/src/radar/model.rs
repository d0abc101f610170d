use crate::geometry::{Point, Size, unit_clamp};
use crate::radar::{EDGE_MARGIN, LABEL_OFFSET, PROGRESS_STEP, START_OFFSET};
use crate::schedule::{FrameOutcome, FrameTask};
use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Deserializer, Serialize};
use std::f64::consts::TAU;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct AxisLabel(String);

crate::impl_string_newtype!(AxisLabel);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillAxis {
    pub label: AxisLabel,
    level: f64,
}

impl SkillAxis {
    pub fn new(label: impl Into<String>, level: f64) -> Self {
        Self {
            label: AxisLabel::new(label),
            level: unit_clamp(level),
        }
    }

    pub fn level(&self) -> f64 {
        self.level
    }
}

impl<'de> Deserialize<'de> for SkillAxis {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            label: String,
            level: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Self::new(raw.label, raw.level))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarGeometry {
    pub center: Point,
    pub max_radius: f64,
}

impl RadarGeometry {
    pub fn for_surface(size: Size) -> Self {
        let center = size.center();
        Self {
            center,
            max_radius: (center.x.min(center.y) - EDGE_MARGIN).max(0.0),
        }
    }

    /// Axes start at the top and run clockwise (screen y points down).
    pub fn axis_angle(index: usize, count: usize) -> f64 {
        START_OFFSET + index as f64 * TAU / count.max(1) as f64
    }

    pub fn axis_radius(&self, level: f64, progress: f64) -> f64 {
        self.max_radius * unit_clamp(level) * unit_clamp(progress)
    }

    pub fn ring_radius(&self, ring: usize, rings: usize) -> f64 {
        self.max_radius * ring as f64 / rings.max(1) as f64
    }

    pub fn spoke_end(&self, index: usize, count: usize) -> Point {
        self.center.polar(Self::axis_angle(index, count), self.max_radius)
    }

    pub fn axis_point(&self, index: usize, count: usize, level: f64, progress: f64) -> Point {
        self.center.polar(
            Self::axis_angle(index, count),
            self.axis_radius(level, progress),
        )
    }

    pub fn label_anchor(&self, index: usize, count: usize) -> Point {
        self.center.polar(
            Self::axis_angle(index, count),
            self.max_radius + LABEL_OFFSET,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationPhase {
    #[default]
    Idle,
    Running,
    Finished,
}

/// One-shot growth animation. Triggered the first time the chart is shown; advances a
/// fixed step per rendered frame and freezes at 1.0.
#[derive(Debug, Clone, Default)]
pub struct RadarAnimation {
    frames: u32,
    progress: f64,
    phase: AnimationPhase,
}

impl RadarAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true only for the trigger that actually starts the animation.
    pub fn trigger(&mut self) -> bool {
        if self.phase != AnimationPhase::Idle {
            return false;
        }
        self.phase = AnimationPhase::Running;
        true
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == AnimationPhase::Finished
    }

    /// Advances one frame. Stops once progress reaches 1.0.
    pub fn advance(&mut self) -> FrameOutcome {
        if self.phase != AnimationPhase::Running {
            return FrameOutcome::Stop;
        }

        // derived from the frame count so rounding never adds an extra frame
        self.frames += 1;
        self.progress = unit_clamp(f64::from(self.frames) * PROGRESS_STEP);
        if self.progress >= 1.0 {
            self.phase = AnimationPhase::Finished;
            return FrameOutcome::Stop;
        }
        FrameOutcome::Continue
    }
}

impl FrameTask for RadarAnimation {
    fn frame(&mut self) -> FrameOutcome {
        self.advance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::angle_difference;

    fn surface() -> RadarGeometry {
        RadarGeometry::for_surface(Size::new(300.0, 300.0))
    }

    #[test]
    fn test_axis_angles_start_at_top_and_run_clockwise() {
        for count in 1..=12 {
            for index in 0..count {
                let expected = (-90.0 + index as f64 * 360.0 / count as f64).to_radians();
                let actual = RadarGeometry::axis_angle(index, count);
                assert!(
                    angle_difference(actual, expected) < 1e-9,
                    "axis {index} of {count}"
                );
            }
        }
    }

    #[test]
    fn test_first_axis_points_straight_up() {
        let geometry = surface();
        let end = geometry.spoke_end(0, 6);
        assert!((end.x - 150.0).abs() < 1e-9);
        assert!((end.y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_max_radius_leaves_edge_margin() {
        assert_eq!(surface().max_radius, 130.0);
        assert_eq!(
            RadarGeometry::for_surface(Size::new(400.0, 100.0)).max_radius,
            30.0
        );
        assert_eq!(
            RadarGeometry::for_surface(Size::new(10.0, 10.0)).max_radius,
            0.0
        );
    }

    #[test]
    fn test_radius_grows_monotonically_to_level() {
        let geometry = surface();
        let level = 0.85;
        let mut last = 0.0;
        for step in 0..=100 {
            let radius = geometry.axis_radius(level, step as f64 / 100.0);
            assert!(radius >= last);
            last = radius;
        }
        assert_eq!(geometry.axis_radius(level, 1.0), 130.0 * level);
    }

    #[test]
    fn test_radius_clamps_overshoot() {
        let geometry = surface();
        assert_eq!(geometry.axis_radius(1.5, 1.0), 130.0);
        assert_eq!(geometry.axis_radius(0.5, 3.0), 65.0);
        assert_eq!(geometry.axis_radius(-1.0, 1.0), 0.0);
    }

    #[test]
    fn test_skill_axis_clamps_level() {
        assert_eq!(SkillAxis::new("Frontend", 1.4).level(), 1.0);
        let axis: SkillAxis =
            serde_json::from_str(r#"{"label": "Backend", "level": -0.3}"#).unwrap();
        assert_eq!(axis.level(), 0.0);
        assert_eq!(axis.label.as_str(), "Backend");
    }

    #[test]
    fn test_animation_needs_trigger() {
        let mut animation = RadarAnimation::new();
        assert_eq!(animation.advance(), FrameOutcome::Stop);
        assert_eq!(animation.progress(), 0.0);
    }

    #[test]
    fn test_animation_runs_once_to_completion() {
        let mut animation = RadarAnimation::new();
        assert!(animation.trigger());

        let mut frames = 1;
        while animation.advance() == FrameOutcome::Continue {
            frames += 1;
            assert!(frames <= 60, "animation never stopped");
        }

        assert_eq!(frames, 50);
        assert_eq!(animation.progress(), 1.0);
        assert!(animation.is_finished());

        assert!(!animation.trigger());
        assert_eq!(animation.advance(), FrameOutcome::Stop);
        assert_eq!(animation.progress(), 1.0);
    }

    #[test]
    fn test_progress_is_monotonic() {
        let mut animation = RadarAnimation::new();
        animation.trigger();
        let mut last = animation.progress();
        loop {
            let outcome = animation.advance();
            assert!(animation.progress() >= last);
            last = animation.progress();
            if outcome == FrameOutcome::Stop {
                break;
            }
        }
    }
}
