use std::time::Duration;

pub mod drag;
pub mod layout;
pub mod model;

pub use drag::{DragOutcome, DragRelease, DragTracker};
pub use layout::{CardTransform, LayoutMode, Viewport, card_size, hit_test, layout};
pub use model::{AutoAdvance, Carousel, CarouselAction, CarouselMsg, InteractionPolicy};

pub const TECHNOLOGY_INTERVAL: Duration = Duration::from_secs(3);
pub const TESTIMONIAL_INTERVAL: Duration = Duration::from_secs(5);

// Viewport breakpoints
pub const STRIP_BREAKPOINT: f64 = 768.0; // narrower than this lays cards out as a strip
pub const RING_RADIUS_BREAKPOINT: f64 = 1024.0;
pub const RING_RADIUS_COMPACT: f64 = 150.0;
pub const RING_RADIUS_WIDE: f64 = 220.0;
pub const RING_FLATTENING: f64 = 0.7; // vertical squash turning the ring into an ellipse

pub const ACTIVE_SCALE: f64 = 1.2;
pub const INACTIVE_SCALE: f64 = 0.9;
pub const INACTIVE_OPACITY: f64 = 0.8;
pub const INACTIVE_BRIGHTNESS: f64 = 0.8;
pub const ACTIVE_Z: i32 = 10;
pub const INACTIVE_Z: i32 = 1;
pub const RING_CARD_WIDTH: f64 = 208.0;
pub const RING_CARD_HEIGHT: f64 = 256.0;

// Strip mode, as fractions of the viewport width
pub const STRIP_STRIDE: f64 = 0.8;
pub const STRIP_LEAD: f64 = 0.1;
pub const STRIP_CARD_WIDTH: f64 = 0.7;
pub const STRIP_CARD_HEIGHT: f64 = 380.0;
pub const STRIP_OPACITY_FALLOFF: f64 = 0.4;
pub const STRIP_INACTIVE_BRIGHTNESS: f64 = 0.7;

pub const DRAG_DISTANCE_THRESHOLD: f64 = 50.0; // px
pub const DRAG_VELOCITY_THRESHOLD: f64 = 500.0; // px/s
pub const DRAG_VELOCITY_WINDOW: f64 = 0.1; // s
