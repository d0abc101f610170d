use super::{
    ACTIVE_SCALE, ACTIVE_Z, INACTIVE_BRIGHTNESS, INACTIVE_OPACITY, INACTIVE_SCALE, INACTIVE_Z,
    RING_CARD_HEIGHT, RING_CARD_WIDTH, RING_FLATTENING, RING_RADIUS_BREAKPOINT,
    RING_RADIUS_COMPACT, RING_RADIUS_WIDE, STRIP_BREAKPOINT, STRIP_CARD_HEIGHT, STRIP_CARD_WIDTH,
    STRIP_INACTIVE_BRIGHTNESS, STRIP_LEAD, STRIP_OPACITY_FALLOFF, STRIP_STRIDE,
};
use crate::geometry::{Point, Size};
use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Cards orbit an ellipse, the active one rotated to the front.
    Ring,
    /// Cards sit side by side in a swipeable strip.
    Strip,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
}

impl Viewport {
    pub fn new(width: f64) -> Self {
        Self {
            width: width.max(0.0),
        }
    }

    pub fn mode(&self) -> LayoutMode {
        if self.width < STRIP_BREAKPOINT {
            LayoutMode::Strip
        } else {
            LayoutMode::Ring
        }
    }

    pub fn ring_radius(&self) -> f64 {
        if self.width < RING_RADIUS_BREAKPOINT {
            RING_RADIUS_COMPACT
        } else {
            RING_RADIUS_WIDE
        }
    }

    pub fn stride(&self) -> f64 {
        self.width * STRIP_STRIDE
    }

    /// Strip translation that centres `active`.
    pub fn rest_translation(&self, active: usize) -> f64 {
        -(active as f64) * self.stride() + self.width * STRIP_LEAD
    }

    /// Translation while dragging, bounded so the strip cannot be pulled past either
    /// end. The resting position is always inside the bounds.
    pub fn drag_translation(&self, active: usize, count: usize, drag_offset: f64) -> f64 {
        let rest = self.rest_translation(active);
        let left = (-(count as f64) * self.stride() + self.width).min(rest);
        let right = 0.0_f64.max(rest);
        (rest + drag_offset).clamp(left, right)
    }
}

/// Where and how to draw one card. `offset` is the card centre relative to the centre
/// of the carousel surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub index: usize,
    pub offset: Point,
    pub scale: f64,
    pub opacity: f64,
    pub z_index: i32,
    pub brightness: f64,
    pub active: bool,
}

pub fn card_size(mode: LayoutMode, viewport: Viewport) -> Size {
    match mode {
        LayoutMode::Ring => Size::new(RING_CARD_WIDTH, RING_CARD_HEIGHT),
        LayoutMode::Strip => Size::new(viewport.width * STRIP_CARD_WIDTH, STRIP_CARD_HEIGHT),
    }
}

pub fn ring_transform(index: usize, count: usize, active: usize, radius: f64) -> CardTransform {
    let step = TAU / count as f64;
    let theta = index as f64 * step - active as f64 * step;
    let is_active = index == active;

    CardTransform {
        index,
        offset: Point::new(
            radius * theta.cos(),
            RING_FLATTENING * radius * theta.sin(),
        ),
        scale: if is_active { ACTIVE_SCALE } else { INACTIVE_SCALE },
        opacity: if is_active { 1.0 } else { INACTIVE_OPACITY },
        z_index: if is_active { ACTIVE_Z } else { INACTIVE_Z },
        brightness: if is_active { 1.0 } else { INACTIVE_BRIGHTNESS },
        active: is_active,
    }
}

pub fn strip_transform(
    index: usize,
    active: usize,
    viewport: Viewport,
    translation: f64,
) -> CardTransform {
    let stride = viewport.stride();
    let is_active = index == active;
    let distance = index.abs_diff(active) as f64;

    CardTransform {
        index,
        offset: Point::new(
            translation + index as f64 * stride + stride / 2.0 - viewport.width / 2.0,
            0.0,
        ),
        scale: if is_active { 1.0 } else { INACTIVE_SCALE },
        opacity: (1.0 - distance * STRIP_OPACITY_FALLOFF).max(0.0),
        z_index: if is_active { ACTIVE_Z } else { INACTIVE_Z },
        brightness: if is_active {
            1.0
        } else {
            STRIP_INACTIVE_BRIGHTNESS
        },
        active: is_active,
    }
}

/// Transforms for every card. `drag_offset` only applies in strip mode.
pub fn layout(
    count: usize,
    active: usize,
    viewport: Viewport,
    drag_offset: Option<f64>,
) -> Vec<CardTransform> {
    if count == 0 {
        return Vec::new();
    }
    let active = active.min(count - 1);

    match viewport.mode() {
        LayoutMode::Ring => {
            let radius = viewport.ring_radius();
            (0..count)
                .map(|i| ring_transform(i, count, active, radius))
                .collect()
        }
        LayoutMode::Strip => {
            let translation = match drag_offset {
                Some(offset) => viewport.drag_translation(active, count, offset),
                None => viewport.rest_translation(active),
            };
            (0..count)
                .map(|i| strip_transform(i, active, viewport, translation))
                .collect()
        }
    }
}

/// Index of the topmost card under `point` (relative to the surface centre).
pub fn hit_test(transforms: &[CardTransform], card: Size, point: Point) -> Option<usize> {
    transforms
        .iter()
        .filter(|t| {
            let (half_w, half_h) = (card.width * t.scale / 2.0, card.height * t.scale / 2.0);
            (point.x - t.offset.x).abs() <= half_w && (point.y - t.offset.y).abs() <= half_h
        })
        .max_by_key(|t| t.z_index)
        .map(|t| t.index)
}
