//! Characteristic stations of a sampled diagram.

use serde::{Deserialize, Serialize};

use crate::coordinates::zero_crossing;
use crate::errors::{check_spacing, DiagramError};
use crate::ordinates::Sign;

/// Sampled value together with its station.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Extreme {
    /// Distance along the member.
    pub x: f64,
    /// Sampled value.
    pub value: f64,
}

/// Peaks and baseline crossings of one diagram.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiagramSummary {
    /// Largest sample, first occurrence.
    pub maximum: Option<Extreme>,
    /// Smallest sample, first occurrence.
    pub minimum: Option<Extreme>,
    /// Interpolated stations where the diagram changes sign.
    pub zero_crossings: Vec<f64>,
}

impl DiagramSummary {
    /// Summarise `values` sampled every `dist`.
    ///
    /// Zero samples between two samples of opposite sign do not add crossings of
    /// their own; the crossing is interpolated across the whole run.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::NonPositiveSpacing`] when `dist` is not a positive,
    /// finite number.
    ///
    /// # Examples
    /// ```
    /// use diagramx::DiagramSummary;
    ///
    /// let summary = DiagramSummary::from_values(&[3.0, -1.0, -2.0], 2.0).expect("valid spacing");
    /// assert_eq!(summary.zero_crossings, vec![1.5]);
    /// assert_eq!(summary.minimum.map(|m| m.x), Some(4.0));
    /// ```
    pub fn from_values(values: &[f64], dist: f64) -> Result<Self, DiagramError> {
        check_spacing(dist)?;

        let mut maximum: Option<Extreme> = None;
        let mut minimum: Option<Extreme> = None;
        let mut zero_crossings = Vec::new();
        let mut previous: Option<(usize, f64, Sign)> = None;

        for (index, &value) in values.iter().enumerate() {
            let x = index as f64 * dist;
            if maximum.map_or(true, |peak| value > peak.value) {
                maximum = Some(Extreme { x, value });
            }
            if minimum.map_or(true, |low| value < low.value) {
                minimum = Some(Extreme { x, value });
            }

            if let Some(sign) = Sign::of(value) {
                if let Some((previous_index, previous_value, previous_sign)) = previous {
                    if previous_sign != sign {
                        let span = (index - previous_index) as f64 * dist;
                        let start = previous_index as f64 * dist;
                        zero_crossings.push(zero_crossing(start, span, previous_value, value));
                    }
                }
                previous = Some((index, value, sign));
            }
        }

        Ok(Self {
            maximum,
            minimum,
            zero_crossings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_values_have_no_extremes() {
        let summary = DiagramSummary::from_values(&[], 1.0).expect("valid spacing");
        assert_eq!(summary.maximum, None);
        assert_eq!(summary.minimum, None);
        assert!(summary.zero_crossings.is_empty());
    }

    #[test]
    fn finds_first_occurrence_of_each_extreme() {
        let summary =
            DiagramSummary::from_values(&[1.0, 4.0, 4.0, -2.0, -2.0], 0.5).expect("valid spacing");
        assert_eq!(summary.maximum, Some(Extreme { x: 0.5, value: 4.0 }));
        assert_eq!(summary.minimum, Some(Extreme { x: 1.5, value: -2.0 }));
    }

    #[test]
    fn crossing_through_zero_samples_lands_on_the_run() {
        let summary = DiagramSummary::from_values(&[2.0, 0.0, -2.0], 1.0).expect("valid spacing");
        assert_eq!(summary.zero_crossings, vec![1.0]);
    }

    #[test]
    fn every_sign_change_is_reported() {
        let values = [1.0, 0.5, 0.1, -0.1, -0.5, -1.0, -0.5, 0.1, 0.5, 1.0];
        let summary = DiagramSummary::from_values(&values, 1.0).expect("valid spacing");
        assert_eq!(summary.zero_crossings.len(), 2);
        assert_relative_eq!(summary.zero_crossings[0], 2.5);
        assert_relative_eq!(summary.zero_crossings[1], 6.0 + 0.5 / 0.6, epsilon = 1.0e-12);
    }

    #[test]
    fn touching_zero_is_not_a_crossing() {
        let summary = DiagramSummary::from_values(&[1.0, 0.0, 1.0], 1.0).expect("valid spacing");
        assert!(summary.zero_crossings.is_empty());
    }

    #[test]
    fn rejects_non_positive_spacing() {
        assert!(DiagramSummary::from_values(&[1.0], -0.5).is_err());
    }
}
