use super::model::{RadarGeometry, SkillAxis};
use super::{LABEL_SIZE, POINT_RADIUS, RING_COUNT};
use crate::geometry::{Point, Size};
use crate::paint::{DrawOp, rgb, rgba};
use palette::Srgba;

#[derive(Debug, Clone, PartialEq)]
pub struct RadarStyle {
    pub ring: Srgba<f64>,
    pub ring_base_alpha: f64,
    pub ring_alpha_step: f64,
    pub spoke: Srgba<f64>,
    pub point: Srgba<f64>,
    pub outline: Srgba<f64>,
    pub outline_width: f64,
    pub fill: Srgba<f64>,
    pub label: Srgba<f64>,
}

impl Default for RadarStyle {
    fn default() -> Self {
        Self {
            ring: rgb(147, 51, 234),
            ring_base_alpha: 0.1,
            ring_alpha_step: 0.05,
            spoke: rgba(147, 51, 234, 0.2),
            point: rgb(139, 92, 246),
            outline: rgb(139, 92, 246),
            outline_width: 2.0,
            fill: rgba(139, 92, 246, 0.1),
            label: rgb(229, 231, 235),
        }
    }
}

impl RadarStyle {
    /// Outer rings are drawn more opaque than inner ones.
    fn ring_color(&self, ring: usize) -> Srgba<f64> {
        let mut color = self.ring;
        color.alpha = self.ring_base_alpha + ring as f64 * self.ring_alpha_step;
        color
    }
}

#[derive(Debug, Clone)]
pub struct RadarChart {
    pub axes: Vec<SkillAxis>,
    pub geometry: RadarGeometry,
    pub style: RadarStyle,
}

impl RadarChart {
    pub fn new(axes: Vec<SkillAxis>, surface: Size) -> Self {
        Self {
            axes,
            geometry: RadarGeometry::for_surface(surface),
            style: RadarStyle::default(),
        }
    }

    fn points(&self, progress: f64) -> Vec<Point> {
        let count = self.axes.len();
        self.axes
            .iter()
            .enumerate()
            .map(|(i, axis)| self.geometry.axis_point(i, count, axis.level(), progress))
            .collect()
    }
}

struct FrameBuilder<'a> {
    chart: &'a RadarChart,
    ops: Vec<DrawOp>,
}

impl<'a> FrameBuilder<'a> {
    fn new(chart: &'a RadarChart) -> Self {
        Self {
            chart,
            ops: Vec::new(),
        }
    }

    fn rings(mut self) -> Self {
        let (geometry, style) = (&self.chart.geometry, &self.chart.style);
        for ring in 1..=RING_COUNT {
            self.ops.push(DrawOp::StrokeCircle {
                center: geometry.center,
                radius: geometry.ring_radius(ring, RING_COUNT),
                color: style.ring_color(ring),
                line_width: 1.0,
            });
        }
        self
    }

    fn spokes(mut self) -> Self {
        let count = self.chart.axes.len();
        let geometry = &self.chart.geometry;
        for i in 0..count {
            self.ops.push(DrawOp::Line {
                from: geometry.center,
                to: geometry.spoke_end(i, count),
                color: self.chart.style.spoke,
                line_width: 1.0,
            });
        }
        self
    }

    fn points_and_outline(mut self, progress: f64) -> Self {
        let points = self.chart.points(progress);
        let style = &self.chart.style;

        self.ops.extend(points.iter().map(|&center| DrawOp::FillCircle {
            center,
            radius: POINT_RADIUS,
            color: style.point,
        }));

        self.ops.push(DrawOp::Polygon {
            points,
            stroke: style.outline,
            line_width: style.outline_width,
            fill: style.fill,
        });
        self
    }

    fn labels(mut self) -> Self {
        let count = self.chart.axes.len();
        for (i, axis) in self.chart.axes.iter().enumerate() {
            self.ops.push(DrawOp::Text {
                anchor: self.chart.geometry.label_anchor(i, count),
                text: axis.label.to_string(),
                size: LABEL_SIZE,
                color: self.chart.style.label,
            });
        }
        self
    }

    fn finish(self) -> Vec<DrawOp> {
        self.ops
    }
}

/// Builds one frame of the chart at `progress`. Layering order is fixed: reference
/// rings, spokes, points, outline polygon, labels.
pub fn draw(chart: &RadarChart, progress: f64) -> Vec<DrawOp> {
    if chart.axes.is_empty() {
        return Vec::new();
    }

    FrameBuilder::new(chart)
        .rings()
        .spokes()
        .points_and_outline(progress)
        .labels()
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::DrawKind;

    fn chart() -> RadarChart {
        let axes = [
            ("Frontend", 0.95),
            ("3D/Animation", 0.85),
            ("Backend", 0.85),
            ("Tooling", 0.9),
            ("Design", 0.8),
            ("Performance", 0.92),
        ]
        .into_iter()
        .map(|(label, level)| SkillAxis::new(label, level))
        .collect();
        RadarChart::new(axes, Size::new(300.0, 300.0))
    }

    #[test]
    fn test_empty_chart_draws_nothing() {
        let chart = RadarChart::new(Vec::new(), Size::new(300.0, 300.0));
        assert!(draw(&chart, 1.0).is_empty());
    }

    #[test]
    fn test_layers_are_drawn_in_order() {
        let kinds: Vec<DrawKind> = draw(&chart(), 0.5).iter().map(DrawOp::kind).collect();

        let mut expected = vec![DrawKind::StrokeCircle; 5];
        expected.extend([DrawKind::Line; 6]);
        expected.extend([DrawKind::FillCircle; 6]);
        expected.push(DrawKind::Polygon);
        expected.extend([DrawKind::Text; 6]);

        assert_eq!(kinds, expected);
    }

    #[test]
    fn test_rings_gain_opacity_outward() {
        let ops = draw(&chart(), 1.0);
        let alphas: Vec<f64> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::StrokeCircle { color, .. } => Some(color.alpha),
                _ => None,
            })
            .collect();

        assert_eq!(alphas.len(), 5);
        assert!(alphas.windows(2).all(|w| w[1] > w[0]));
        assert!((alphas[0] - 0.15).abs() < 1e-9);
        assert!((alphas[4] - 0.35).abs() < 1e-9);
    }

    #[test]
    fn test_polygon_reaches_target_levels_at_full_progress() {
        let chart = chart();
        let ops = draw(&chart, 1.0);
        let points = ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Polygon { points, .. } => Some(points.clone()),
                _ => None,
            })
            .unwrap();

        assert_eq!(points.len(), 6);
        for (point, axis) in points.iter().zip(&chart.axes) {
            let radius = chart.geometry.center.distance(*point);
            assert!((radius - 130.0 * axis.level()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_progress_collapses_polygon_to_center() {
        let chart = chart();
        for op in draw(&chart, 0.0) {
            if let DrawOp::FillCircle { center, .. } = op {
                assert_eq!(center, chart.geometry.center);
            }
        }
    }

    #[test]
    fn test_labels_sit_outside_outer_ring() {
        let chart = chart();
        let ops = draw(&chart, 1.0);
        let labels: Vec<(&Point, &String)> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { anchor, text, .. } => Some((anchor, text)),
                _ => None,
            })
            .collect();

        assert_eq!(labels[0].1, "Frontend");
        for (anchor, _) in labels {
            assert!((chart.geometry.center.distance(*anchor) - 160.0).abs() < 1e-9);
        }
    }
}
