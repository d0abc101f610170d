use crate::config::RadarConfig;
use crate::gui::painter;
use cairo::Context;
use folio::geometry::Size;
use folio::radar::{self, RadarAnimation, RadarChart};
use folio::schedule::{CancellationToken, FrameLoop, FrameOutcome};

/// Skill radar plus its one-shot growth animation.
pub struct RadarView {
    chart: RadarChart,
    frames: FrameLoop<RadarAnimation>,
}

impl RadarView {
    pub fn new(config: &RadarConfig, token: CancellationToken) -> Self {
        Self {
            chart: Self::chart(config),
            frames: FrameLoop::new(RadarAnimation::new(), token),
        }
    }

    fn chart(config: &RadarConfig) -> RadarChart {
        RadarChart::new(config.axes.clone(), Size::new(config.size, config.size))
    }

    pub fn size(&self) -> i32 {
        (self.chart.geometry.center.x * 2.0).round() as i32
    }

    /// Keeps the animation where it is; only the data changes.
    pub fn reload(&mut self, config: &RadarConfig) {
        self.chart = Self::chart(config);
    }

    /// True when this call started the animation and a frame loop should be attached.
    pub fn trigger(&mut self) -> bool {
        self.frames.task_mut().trigger()
    }

    pub fn frame(&mut self) -> FrameOutcome {
        self.frames.tick()
    }

    pub fn progress(&self) -> f64 {
        self.frames.task().progress()
    }

    pub fn draw(&self, cr: &Context) -> Result<(), cairo::Error> {
        painter::replay(cr, &radar::draw(&self.chart, self.progress()))
    }
}
