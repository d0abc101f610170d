//! Replays core display lists onto a cairo context.

use cairo::Context;
use folio::geometry::Point;
use folio::paint::DrawOp;
use palette::Srgba;
use std::f64::consts::TAU;

pub const FONT_FAMILY: &str = "Sans";

pub fn set_color(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

/// Draws `text` centred horizontally on `anchor.x` with its baseline on `anchor.y`.
pub fn centered_text(
    cr: &Context,
    anchor: Point,
    text: &str,
    size: f64,
    weight: cairo::FontWeight,
) -> Result<(), cairo::Error> {
    cr.select_font_face(FONT_FAMILY, cairo::FontSlant::Normal, weight);
    cr.set_font_size(size);
    let ext = cr.text_extents(text)?;
    cr.move_to(anchor.x - ext.width() / 2.0 - ext.x_bearing(), anchor.y);
    cr.show_text(text)
}

fn trace_polygon(cr: &Context, points: &[Point]) {
    cr.new_path();
    for (i, p) in points.iter().enumerate() {
        if i == 0 {
            cr.move_to(p.x, p.y);
        } else {
            cr.line_to(p.x, p.y);
        }
    }
    cr.close_path();
}

fn paint_op(cr: &Context, op: &DrawOp) -> Result<(), cairo::Error> {
    match op {
        DrawOp::StrokeCircle {
            center,
            radius,
            color,
            line_width,
        } => {
            cr.new_path();
            cr.arc(center.x, center.y, *radius, 0.0, TAU);
            set_color(cr, *color);
            cr.set_line_width(*line_width);
            cr.stroke()
        }
        DrawOp::FillCircle {
            center,
            radius,
            color,
        } => {
            cr.new_path();
            cr.arc(center.x, center.y, *radius, 0.0, TAU);
            set_color(cr, *color);
            cr.fill()
        }
        DrawOp::Line {
            from,
            to,
            color,
            line_width,
        } => {
            cr.new_path();
            cr.move_to(from.x, from.y);
            cr.line_to(to.x, to.y);
            set_color(cr, *color);
            cr.set_line_width(*line_width);
            cr.stroke()
        }
        DrawOp::Polygon {
            points,
            stroke,
            line_width,
            fill,
        } => {
            if points.len() < 2 {
                return Ok(());
            }
            trace_polygon(cr, points);
            set_color(cr, *fill);
            cr.fill_preserve()?;
            set_color(cr, *stroke);
            cr.set_line_width(*line_width);
            cr.stroke()
        }
        DrawOp::Text {
            anchor,
            text,
            size,
            color,
        } => {
            set_color(cr, *color);
            centered_text(cr, *anchor, text, *size, cairo::FontWeight::Normal)
        }
    }
}

pub fn replay(cr: &Context, ops: &[DrawOp]) -> Result<(), cairo::Error> {
    for op in ops {
        paint_op(cr, op)?;
    }
    Ok(())
}

/// Rounded rectangle path with its top-left corner at `(x, y)`.
pub fn rounded_rect(cr: &Context, x: f64, y: f64, width: f64, height: f64, radius: f64) {
    let r = radius.min(width / 2.0).min(height / 2.0);
    cr.new_sub_path();
    cr.arc(x + width - r, y + r, r, -TAU / 4.0, 0.0);
    cr.arc(x + width - r, y + height - r, r, 0.0, TAU / 4.0);
    cr.arc(x + r, y + height - r, r, TAU / 4.0, TAU / 2.0);
    cr.arc(x + r, y + r, r, TAU / 2.0, 3.0 * TAU / 4.0);
    cr.close_path();
}
