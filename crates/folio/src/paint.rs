//! Display lists: ordered drawing instructions that a rendering surface replays.
//!
//! The core never touches a surface directly. Renderers build a `Vec<DrawOp>` and the
//! host replays it in order, so later operations layer over earlier ones.

use crate::geometry::Point;
use palette::Srgba;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    StrokeCircle {
        center: Point,
        radius: f64,
        color: Srgba<f64>,
        line_width: f64,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Srgba<f64>,
    },
    Line {
        from: Point,
        to: Point,
        color: Srgba<f64>,
        line_width: f64,
    },
    Polygon {
        points: Vec<Point>,
        stroke: Srgba<f64>,
        line_width: f64,
        fill: Srgba<f64>,
    },
    /// Text centred horizontally on `anchor`, baseline at `anchor.y`.
    Text {
        anchor: Point,
        text: String,
        size: f64,
        color: Srgba<f64>,
    },
}

impl DrawOp {
    pub fn kind(&self) -> DrawKind {
        match self {
            Self::StrokeCircle { .. } => DrawKind::StrokeCircle,
            Self::FillCircle { .. } => DrawKind::FillCircle,
            Self::Line { .. } => DrawKind::Line,
            Self::Polygon { .. } => DrawKind::Polygon,
            Self::Text { .. } => DrawKind::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawKind {
    StrokeCircle,
    FillCircle,
    Line,
    Polygon,
    Text,
}

/// 8-bit channels plus a float alpha, the way CSS `rgba()` spells colours.
pub fn rgba(r: u8, g: u8, b: u8, alpha: f64) -> Srgba<f64> {
    Srgba::new(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
        alpha,
    )
}

pub fn rgb(r: u8, g: u8, b: u8) -> Srgba<f64> {
    rgba(r, g, b, 1.0)
}
