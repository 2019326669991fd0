//! Plain value types for diagram geometry and labels.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Position in diagram-local coordinates.
///
/// `x` is the distance along the member in model length units and `y` is the
/// (possibly scaled) result value measured from the baseline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiagramPoint {
    /// Distance along the member axis.
    pub x: f64,
    /// Ordinate measured from the baseline.
    pub y: f64,
}

impl DiagramPoint {
    /// Create a [`DiagramPoint`] with explicit coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a point on the baseline at station `x`.
    #[must_use]
    pub const fn on_baseline(x: f64) -> Self {
        Self { x, y: 0.0 }
    }
}

impl Default for DiagramPoint {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<Point2<f64>> for DiagramPoint {
    fn from(value: Point2<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<DiagramPoint> for Point2<f64> {
    fn from(value: DiagramPoint) -> Self {
        Point2::new(value.x, value.y)
    }
}

impl From<(f64, f64)> for DiagramPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Closed outline of one diagram region, starting and ending on the baseline.
pub type Polygon = Vec<DiagramPoint>;

/// Text placed next to a sampled value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// Formatted value.
    pub text: String,
    /// Anchor distance along the member.
    pub x: f64,
    /// Anchor ordinate after overlap adjustment.
    pub y: f64,
}

impl Label {
    /// Create a [`Label`] anchored at `(x, y)`.
    #[must_use]
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }

    /// Return the anchor as a point.
    #[must_use]
    pub fn anchor(&self) -> DiagramPoint {
        DiagramPoint::new(self.x, self.y)
    }
}

/// Convenience helper for creating [`DiagramPoint`] instances.
///
/// # Examples
/// ```
/// use diagramx::point;
///
/// let station = point(2.5, -4.0);
/// assert_eq!(station.x, 2.5);
/// ```
#[must_use]
pub const fn point(x: f64, y: f64) -> DiagramPoint {
    DiagramPoint::new(x, y)
}

/// Signed area enclosed by a polygon using the shoelace formula.
///
/// Regions above the baseline traced left to right come out negative, regions
/// below come out positive, so a renderer can pick a fill per region without
/// re-reading the ordinates.
///
/// # Examples
/// ```
/// use diagramx::{point, signed_area};
///
/// let region = [point(0.0, 0.0), point(0.0, -2.0), point(2.0, -2.0), point(2.0, 0.0)];
/// assert!((signed_area(&region) - 4.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn signed_area(polygon: &[DiagramPoint]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let twice_area: f64 = polygon
        .iter()
        .zip(polygon.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();
    twice_area / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn point_round_trips_through_nalgebra() {
        let original = point(1.5, -0.25);
        let algebraic: Point2<f64> = original.into();
        assert_eq!(DiagramPoint::from(algebraic), original);
    }

    #[test]
    fn point_defaults_to_origin() {
        assert_eq!(DiagramPoint::default(), DiagramPoint::on_baseline(0.0));
    }

    #[test]
    fn area_sign_follows_side_of_baseline() {
        let above = [point(0.0, 0.0), point(0.0, 1.0), point(1.0, 1.0), point(1.0, 0.0)];
        let below = [point(0.0, 0.0), point(0.0, -1.0), point(1.0, -1.0), point(1.0, 0.0)];
        assert_relative_eq!(signed_area(&above), -1.0);
        assert_relative_eq!(signed_area(&below), 1.0);
    }

    #[test]
    fn degenerate_polygon_has_no_area() {
        assert_eq!(signed_area(&[point(0.0, 0.0), point(1.0, 0.0)]), 0.0);
    }

    #[test]
    fn label_exposes_anchor() {
        let label = Label::new("+1.00", 2.0, 3.0);
        assert_eq!(label.anchor(), point(2.0, 3.0));
    }
}
