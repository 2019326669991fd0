//! Conversion of ordinate loops into closed diagram polygons.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::errors::{check_spacing, DiagramError};
use crate::geometry::{DiagramPoint, Polygon};
use crate::ordinates::{separates_ordinates, Sign};

/// Polygons of one member diagram together with the ordinates they were built from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberDiagram {
    /// One closed region per loop, in order along the member.
    pub polygons: Vec<Polygon>,
    /// Input values multiplied by the display scale.
    pub scaled_values: Vec<f64>,
}

/// Station of the `index`-th sample.
fn station(index: usize, dist: f64) -> f64 {
    index as f64 * dist
}

/// Distance along the member where the segment between two neighbouring samples
/// meets the baseline.
///
/// `x_prev` is the station of the sample holding `v_prev` and the next sample sits
/// `dist` further along. When both samples are zero the crossing is `x_prev`.
///
/// # Examples
/// ```
/// use diagramx::zero_crossing;
///
/// assert!((zero_crossing(2.0, 1.0, 3.0, -1.0) - 2.75).abs() < 1e-12);
/// ```
#[must_use]
pub fn zero_crossing(x_prev: f64, dist: f64, v_prev: f64, v_next: f64) -> f64 {
    let total = v_prev.abs() + v_next.abs();
    if total > 0.0 {
        x_prev + dist * v_prev.abs() / total
    } else {
        x_prev
    }
}

/// Whether the diagram passes strictly through zero between `a` and `b`.
fn changes_sign(a: f64, b: f64) -> bool {
    matches!((Sign::of(a), Sign::of(b)), (Some(first), Some(second)) if first != second)
}

/// Build one closed polygon per loop.
///
/// Samples are numbered across all loops so the `g`-th sample lies at `g * dist`.
/// Each polygon opens on the baseline, follows its samples and closes on the
/// baseline again. Between two loops the closing point of the first and the
/// opening point of the second are the same baseline point: the interpolated
/// zero crossing when the boundary samples have opposite signs, otherwise the
/// station of the last sample of the first loop. Empty loops produce no polygon.
///
/// # Errors
///
/// Returns [`DiagramError::NonPositiveSpacing`] when `dist` is not a positive,
/// finite number.
///
/// # Examples
/// ```
/// use diagramx::{generate_coordinates, point};
///
/// let polygons = generate_coordinates(&[vec![2.0], vec![-2.0]], 1.0).expect("valid spacing");
/// assert_eq!(
///     polygons[0],
///     vec![point(0.0, 0.0), point(0.0, 2.0), point(0.5, 0.0)]
/// );
/// assert_eq!(
///     polygons[1],
///     vec![point(0.5, 0.0), point(1.0, -2.0), point(1.0, 0.0)]
/// );
/// ```
pub fn generate_coordinates<L: AsRef<[f64]>>(
    loops: &[L],
    dist: f64,
) -> Result<Vec<Polygon>, DiagramError> {
    check_spacing(dist)?;

    let loops: Vec<&[f64]> = loops
        .iter()
        .map(AsRef::as_ref)
        .filter(|samples| !samples.is_empty())
        .collect();

    let mut polygons = Vec::with_capacity(loops.len());
    let mut first_index = 0;
    let mut start_x = 0.0;

    for (position, samples) in loops.iter().enumerate() {
        let mut polygon = Vec::with_capacity(samples.len() + 2);
        polygon.push(DiagramPoint::on_baseline(start_x));
        polygon.extend(samples.iter().enumerate().map(|(offset, value)| {
            DiagramPoint::new(station(first_index + offset, dist), *value)
        }));

        let last_x = station(first_index + samples.len() - 1, dist);
        let next_first = loops.get(position + 1).and_then(|next| next.first());
        let end_x = match (samples.last(), next_first) {
            (Some(&last), Some(&next)) if changes_sign(last, next) => {
                zero_crossing(last_x, dist, last, next)
            }
            _ => last_x,
        };
        polygon.push(DiagramPoint::on_baseline(end_x));
        trace!(
            loop_index = position,
            points = polygon.len(),
            start_x,
            end_x,
            "closed loop"
        );

        polygons.push(polygon);
        first_index += samples.len();
        start_x = end_x;
    }

    Ok(polygons)
}

/// Scale `values`, split them into loops and build the diagram polygons.
///
/// Any finite `scale` is accepted: a negative scale flips the diagram and zero
/// collapses every region onto the baseline.
///
/// # Errors
///
/// Returns [`DiagramError::NonPositiveSpacing`] when `dist` is not a positive,
/// finite number.
///
/// # Examples
/// ```
/// use diagramx::make_member_diagram_coords;
///
/// let diagram = make_member_diagram_coords(&[1.0, 2.0, 1.0], 0.5, 10.0).expect("valid spacing");
/// assert_eq!(diagram.scaled_values, vec![10.0, 20.0, 10.0]);
/// assert_eq!(diagram.polygons.len(), 1);
/// assert_eq!(diagram.polygons[0].len(), 5);
/// ```
pub fn make_member_diagram_coords(
    values: &[f64],
    dist: f64,
    scale: f64,
) -> Result<MemberDiagram, DiagramError> {
    check_spacing(dist)?;

    let scaled_values: Vec<f64> = values.iter().map(|value| value * scale).collect();
    let loops = separates_ordinates(&scaled_values);
    let polygons = generate_coordinates(&loops, dist)?;
    debug!(
        samples = values.len(),
        loops = loops.len(),
        dist,
        scale,
        "built member diagram"
    );

    Ok(MemberDiagram {
        polygons,
        scaled_values,
    })
}
