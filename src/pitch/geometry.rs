use serde::{Deserialize, Serialize};

/// Smallest and largest percent a dragged marker may reach on either axis,
/// so markers stay fully visible.
pub const MARKER_MARGIN_MIN: f64 = 5.0;
pub const MARKER_MARGIN_MAX: f64 = 95.0;

/// A point in client (screen) pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset_from(&self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// Bounding box of an element in client pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Convert a client point into percent of this rectangle.
    /// Degenerate (zero-sized) rectangles map everything to the centre.
    pub fn to_percent(&self, point: Point) -> (f64, f64) {
        (
            axis_percent(point.x, self.left, self.width),
            axis_percent(point.y, self.top, self.height),
        )
    }
}

fn axis_percent(value: f64, start: f64, length: f64) -> f64 {
    if length <= 0.0 || !length.is_finite() {
        return 50.0;
    }
    (value - start) / length * 100.0
}

/// Clamp a percent pair into the visible marker area.
pub fn clamp_to_pitch(x: f64, y: f64) -> (f64, f64) {
    (clamp_axis(x), clamp_axis(y))
}

fn clamp_axis(value: f64) -> f64 {
    if value.is_nan() {
        return 50.0;
    }
    value.clamp(MARKER_MARGIN_MIN, MARKER_MARGIN_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_percent() {
        let pitch = Rect::new(100.0, 50.0, 400.0, 600.0);
        assert_eq!(pitch.to_percent(Point::new(300.0, 350.0)), (50.0, 50.0));
        assert_eq!(pitch.to_percent(Point::new(100.0, 650.0)), (0.0, 100.0));
    }

    #[test]
    fn test_degenerate_rect_maps_to_centre() {
        let pitch = Rect::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(pitch.to_percent(Point::new(42.0, 7.0)), (50.0, 50.0));
    }

    #[test]
    fn test_clamp_keeps_margin() {
        assert_eq!(clamp_to_pitch(-30.0, 140.0), (5.0, 95.0));
        assert_eq!(clamp_to_pitch(42.5, 60.0), (42.5, 60.0));
        assert_eq!(clamp_to_pitch(f64::NAN, 5.0), (50.0, 5.0));
    }
}
