use super::drag::{DragOutcome, DragRelease};
use super::layout::{self, CardTransform, LayoutMode, Viewport};
use serde::{Deserialize, Serialize};
use strum::Display as StrumDisplay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay)]
pub enum AutoAdvance {
    #[default]
    Running,
    /// Terminal for the lifetime of the carousel.
    Suspended,
}

/// Whether manual navigation hands control to the visitor for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionPolicy {
    SuspendOnInteraction,
    #[default]
    KeepRunning,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselMsg {
    Tick,
    Next,
    Previous,
    Select(usize),
    DragStart,
    DragMove(f64),
    DragEnd(DragRelease),
    Resize(Viewport),
    Teardown,
}

impl CarouselMsg {
    fn is_drag(&self) -> bool {
        matches!(self, Self::DragStart | Self::DragMove(_) | Self::DragEnd(_))
    }

    fn is_manual(&self) -> bool {
        matches!(
            self,
            Self::Next | Self::Previous | Self::Select(_) | Self::DragEnd(_)
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselAction {
    pub should_redraw: bool,
    pub index_changed: bool,
}

impl CarouselAction {
    pub fn new(should_redraw: bool, index_changed: bool) -> Self {
        Self {
            should_redraw,
            index_changed,
        }
    }

    fn none() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone)]
pub struct Carousel {
    count: usize,
    active: usize,
    auto_advance: AutoAdvance,
    policy: InteractionPolicy,
    viewport: Viewport,
    drag_offset: Option<f64>,
    torn_down: bool,
}

impl Carousel {
    pub fn new(count: usize, policy: InteractionPolicy, viewport: Viewport) -> Self {
        Self {
            count,
            active: 0,
            auto_advance: AutoAdvance::Running,
            policy,
            viewport,
            drag_offset: None,
            torn_down: false,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn auto_advance(&self) -> AutoAdvance {
        self.auto_advance
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance == AutoAdvance::Running && !self.torn_down
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn mode(&self) -> LayoutMode {
        self.viewport.mode()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_offset.is_some()
    }

    pub fn layout(&self) -> Vec<CardTransform> {
        layout::layout(self.count, self.active, self.viewport, self.drag_offset)
    }

    /// Replaces the item count after a data reload, keeping the active index in range.
    pub fn set_len(&mut self, count: usize) {
        self.count = count;
        self.active = if count == 0 {
            0
        } else {
            self.active.min(count - 1)
        };
        self.drag_offset = None;
    }

    pub fn update(&mut self, msg: CarouselMsg) -> CarouselAction {
        if self.torn_down {
            return CarouselAction::none();
        }
        if let CarouselMsg::Teardown = msg {
            self.torn_down = true;
            self.drag_offset = None;
            return CarouselAction::none();
        }
        if let CarouselMsg::Resize(viewport) = msg {
            let changed = self.viewport != viewport;
            self.viewport = viewport;
            return CarouselAction::new(changed, false);
        }
        if self.count == 0 {
            return CarouselAction::none();
        }
        // only the strip can be dragged
        if msg.is_drag() && self.mode() == LayoutMode::Ring {
            self.drag_offset = None;
            return CarouselAction::none();
        }

        if msg.is_manual() {
            self.take_control();
        }

        let previous = self.active;
        let redraw = match msg {
            CarouselMsg::Tick => {
                if self.auto_advance == AutoAdvance::Suspended || self.is_dragging() {
                    return CarouselAction::none();
                }
                self.active = (self.active + 1) % self.count;
                true
            }
            CarouselMsg::Next => {
                self.step_forward();
                true
            }
            CarouselMsg::Previous => {
                self.step_back();
                true
            }
            CarouselMsg::Select(index) => {
                self.active = self.bound(index);
                true
            }
            CarouselMsg::DragStart => {
                self.drag_offset = Some(0.0);
                false
            }
            CarouselMsg::DragMove(offset) => {
                self.drag_offset = Some(offset);
                true
            }
            CarouselMsg::DragEnd(release) => {
                self.drag_offset = None;
                match release.outcome() {
                    DragOutcome::Advance => self.active = (self.active + 1).min(self.count - 1),
                    DragOutcome::Retreat => self.active = self.active.saturating_sub(1),
                    DragOutcome::SpringBack => {}
                }
                true
            }
            CarouselMsg::Resize(_) | CarouselMsg::Teardown => false,
        };

        let changed = self.active != previous;
        if changed {
            log::debug!("carousel active {} -> {}", previous, self.active);
        }
        CarouselAction::new(redraw || changed, changed)
    }

    fn take_control(&mut self) {
        if self.policy == InteractionPolicy::SuspendOnInteraction
            && self.auto_advance == AutoAdvance::Running
        {
            log::debug!("carousel auto-advance suspended by manual navigation");
            self.auto_advance = AutoAdvance::Suspended;
        }
    }

    /// The ring wraps around, the strip stops at either end.
    fn step_forward(&mut self) {
        self.active = match self.mode() {
            LayoutMode::Ring => (self.active + 1) % self.count,
            LayoutMode::Strip => (self.active + 1).min(self.count - 1),
        };
    }

    fn step_back(&mut self) {
        self.active = match self.mode() {
            LayoutMode::Ring => (self.active + self.count - 1) % self.count,
            LayoutMode::Strip => self.active.saturating_sub(1),
        };
    }

    fn bound(&self, index: usize) -> usize {
        match self.mode() {
            LayoutMode::Ring => index % self.count,
            LayoutMode::Strip => index.min(self.count - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: Viewport = Viewport { width: 1280.0 };
    const NARROW: Viewport = Viewport { width: 400.0 };

    fn ring(count: usize, policy: InteractionPolicy) -> Carousel {
        Carousel::new(count, policy, WIDE)
    }

    #[test]
    fn test_ring_navigation_wraps() {
        let mut carousel = ring(4, InteractionPolicy::KeepRunning);
        carousel.update(CarouselMsg::Previous);
        assert_eq!(carousel.active_index(), 3);
        carousel.update(CarouselMsg::Next);
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn test_ring_index_stays_in_range() {
        let mut carousel = ring(7, InteractionPolicy::KeepRunning);
        let script = [
            CarouselMsg::Next,
            CarouselMsg::Previous,
            CarouselMsg::Previous,
            CarouselMsg::Tick,
            CarouselMsg::Select(20),
            CarouselMsg::Next,
        ];
        for _ in 0..50 {
            for msg in script {
                carousel.update(msg);
                assert!(carousel.active_index() < 7);
            }
        }
    }

    #[test]
    fn test_strip_navigation_clamps() {
        let mut carousel = Carousel::new(3, InteractionPolicy::KeepRunning, NARROW);
        carousel.update(CarouselMsg::Previous);
        assert_eq!(carousel.active_index(), 0);

        carousel.update(CarouselMsg::Select(2));
        let action = carousel.update(CarouselMsg::Next);
        assert_eq!(carousel.active_index(), 2);
        assert!(!action.index_changed);

        carousel.update(CarouselMsg::Select(99));
        assert_eq!(carousel.active_index(), 2);
    }

    #[test]
    fn test_ticks_wrap_in_strip_mode() {
        let mut carousel = Carousel::new(3, InteractionPolicy::KeepRunning, NARROW);
        for _ in 0..3 {
            carousel.update(CarouselMsg::Tick);
        }
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn test_drag_release_moves_one_card() {
        let mut carousel = Carousel::new(3, InteractionPolicy::KeepRunning, NARROW);
        carousel.update(CarouselMsg::DragStart);
        assert!(carousel.update(CarouselMsg::DragMove(-80.0)).should_redraw);
        carousel.update(CarouselMsg::DragEnd(DragRelease::new(-80.0, 0.0)));
        assert_eq!(carousel.active_index(), 1);
        assert!(!carousel.is_dragging());

        carousel.update(CarouselMsg::DragEnd(DragRelease::new(0.0, -900.0)));
        carousel.update(CarouselMsg::DragEnd(DragRelease::new(0.0, -900.0)));
        assert_eq!(carousel.active_index(), 2);

        carousel.update(CarouselMsg::DragEnd(DragRelease::new(30.0, 100.0)));
        assert_eq!(carousel.active_index(), 2);

        carousel.update(CarouselMsg::DragEnd(DragRelease::new(51.0, 0.0)));
        assert_eq!(carousel.active_index(), 1);
    }

    #[test]
    fn test_drag_threshold_boundaries() {
        let cases = [
            (-50.0, 0.0, 1),
            (-51.0, 0.0, 2),
            (50.0, 0.0, 1),
            (51.0, 0.0, 0),
            (0.0, -500.0, 1),
            (0.0, -501.0, 2),
            (0.0, 500.0, 1),
            (0.0, 501.0, 0),
        ];
        for (offset, velocity, expected) in cases {
            let mut carousel = Carousel::new(3, InteractionPolicy::KeepRunning, NARROW);
            carousel.update(CarouselMsg::Select(1));
            carousel.update(CarouselMsg::DragEnd(DragRelease::new(offset, velocity)));
            assert_eq!(
                carousel.active_index(),
                expected,
                "offset {offset}, velocity {velocity}"
            );
        }
    }

    #[test]
    fn test_ticks_pause_while_dragging() {
        let mut carousel = Carousel::new(3, InteractionPolicy::KeepRunning, NARROW);
        carousel.update(CarouselMsg::DragStart);
        carousel.update(CarouselMsg::Tick);
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn test_technology_scenario_keeps_running() {
        let mut carousel = ring(10, InteractionPolicy::KeepRunning);
        for _ in 0..3 {
            carousel.update(CarouselMsg::Tick);
        }
        assert_eq!(carousel.active_index(), 3);

        carousel.update(CarouselMsg::Previous);
        assert_eq!(carousel.active_index(), 2);
        assert!(carousel.is_auto_advancing());

        carousel.update(CarouselMsg::Tick);
        assert_eq!(carousel.active_index(), 3);
    }

    #[test]
    fn test_testimonial_scenario_suspends() {
        let mut carousel = ring(10, InteractionPolicy::SuspendOnInteraction);
        for _ in 0..3 {
            carousel.update(CarouselMsg::Tick);
        }
        assert_eq!(carousel.active_index(), 3);

        carousel.update(CarouselMsg::Previous);
        assert_eq!(carousel.active_index(), 2);
        assert_eq!(carousel.auto_advance(), AutoAdvance::Suspended);

        for _ in 0..5 {
            let action = carousel.update(CarouselMsg::Tick);
            assert!(!action.should_redraw);
        }
        assert_eq!(carousel.active_index(), 2);

        // navigation still works once suspended
        carousel.update(CarouselMsg::Select(7));
        assert_eq!(carousel.active_index(), 7);
        assert!(!carousel.is_auto_advancing());
    }

    #[test]
    fn test_ring_ignores_drags() {
        let mut carousel = ring(5, InteractionPolicy::SuspendOnInteraction);
        carousel.update(CarouselMsg::DragStart);
        let action = carousel.update(CarouselMsg::DragEnd(DragRelease::new(-200.0, -900.0)));
        assert_eq!(action, CarouselAction::default());
        assert_eq!(carousel.active_index(), 0);
        assert!(carousel.is_auto_advancing());
    }

    #[test]
    fn test_drag_start_alone_does_not_suspend() {
        let mut carousel = Carousel::new(5, InteractionPolicy::SuspendOnInteraction, NARROW);
        carousel.update(CarouselMsg::DragStart);
        carousel.update(CarouselMsg::DragMove(-20.0));
        assert!(carousel.is_auto_advancing());
    }

    #[test]
    fn test_teardown_freezes_state() {
        let mut carousel = ring(10, InteractionPolicy::KeepRunning);
        carousel.update(CarouselMsg::Tick);
        carousel.update(CarouselMsg::Teardown);

        let msgs = [
            CarouselMsg::Tick,
            CarouselMsg::Next,
            CarouselMsg::Select(5),
            CarouselMsg::DragStart,
            CarouselMsg::Resize(NARROW),
        ];
        for msg in msgs {
            assert_eq!(carousel.update(msg), CarouselAction::default());
        }
        assert_eq!(carousel.active_index(), 1);
        assert_eq!(carousel.viewport(), WIDE);
        assert!(!carousel.is_auto_advancing());
    }

    #[test]
    fn test_empty_carousel_ignores_everything() {
        let mut carousel = ring(0, InteractionPolicy::SuspendOnInteraction);
        for msg in [CarouselMsg::Tick, CarouselMsg::Next, CarouselMsg::Select(3)] {
            assert_eq!(carousel.update(msg), CarouselAction::default());
        }
        assert_eq!(carousel.active_index(), 0);
        assert!(carousel.layout().is_empty());
    }

    #[test]
    fn test_resize_switches_mode() {
        let mut carousel = ring(5, InteractionPolicy::KeepRunning);
        assert!(carousel.update(CarouselMsg::Resize(NARROW)).should_redraw);
        assert_eq!(carousel.mode(), LayoutMode::Strip);
        assert!(!carousel.update(CarouselMsg::Resize(NARROW)).should_redraw);
    }

    #[test]
    fn test_set_len_keeps_index_in_range() {
        let mut carousel = ring(10, InteractionPolicy::KeepRunning);
        carousel.update(CarouselMsg::Select(8));
        carousel.set_len(4);
        assert_eq!(carousel.active_index(), 3);
        carousel.set_len(0);
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn test_policy_deserialization() {
        let policy: InteractionPolicy = serde_json::from_str("\"suspend-on-interaction\"").unwrap();
        assert_eq!(policy, InteractionPolicy::SuspendOnInteraction);
    }
}
