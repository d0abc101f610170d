use std::f64::consts::{PI, TAU};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `distance` from `self` along `angle` (radians, y axis pointing down).
    pub fn polar(self, angle: f64, distance: f64) -> Self {
        Self::new(
            self.x + distance * angle.cos(),
            self.y + distance * angle.sin(),
        )
    }

    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn aspect(&self) -> f64 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// Clamps `value` into `[0, 1]`. NaN collapses to zero.
pub fn unit_clamp(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Shortest angular distance between two angles, in `[0, PI]`.
pub fn angle_difference(a: f64, b: f64) -> f64 {
    ((a - b + PI).rem_euclid(TAU) - PI).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_clamp() {
        assert_eq!(unit_clamp(-0.5), 0.0);
        assert_eq!(unit_clamp(0.25), 0.25);
        assert_eq!(unit_clamp(1.02), 1.0);
        assert_eq!(unit_clamp(f64::NAN), 0.0);
    }

    #[test]
    fn test_polar_offsets_follow_screen_axes() {
        let origin = Point::new(10.0, 10.0);
        let up = origin.polar(-PI / 2.0, 5.0);
        assert!((up.x - 10.0).abs() < 1e-9);
        assert!((up.y - 5.0).abs() < 1e-9);

        let right = origin.polar(0.0, 5.0);
        assert!((right.x - 15.0).abs() < 1e-9);
        assert!((origin.distance(right) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_angle_difference_wraps() {
        assert!((angle_difference(0.1, TAU - 0.1) - 0.2).abs() < 1e-9);
        assert!((angle_difference(PI, -PI)).abs() < 1e-9);
    }
}
