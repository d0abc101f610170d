use std::f64::consts::PI;

pub mod model;
pub mod view;

pub use model::{AnimationPhase, AxisLabel, RadarAnimation, RadarGeometry, SkillAxis};
pub use view::{RadarChart, RadarStyle, draw};

pub const SURFACE_SIZE: f64 = 300.0;
pub const EDGE_MARGIN: f64 = 20.0; // gap between outer ring and surface edge
pub const LABEL_OFFSET: f64 = 30.0; // labels sit this far past the outer ring
pub const RING_COUNT: usize = 5;
pub const POINT_RADIUS: f64 = 4.0;
pub const LABEL_SIZE: f64 = 12.0;
pub const PROGRESS_STEP: f64 = 0.02;
pub const START_OFFSET: f64 = -PI / 2.0;
