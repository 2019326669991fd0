//! Segmentation of sampled ordinates into renderable loops.
//!
//! A loop is a contiguous run of samples drawn as one filled region. The curve is
//! only cut where it leaves the sign of the current loop for good: a departure
//! across the baseline that later comes back keeps the loop open, while the last
//! departure of the sequence starts a new loop of the opposite sign.

use num::Float;

/// Side of the baseline a sample lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
    /// Strictly above zero.
    Positive,
    /// Strictly below zero.
    Negative,
}

impl Sign {
    /// Classify a value. Zero and NaN lie on neither side.
    pub fn of<T: Float>(value: T) -> Option<Self> {
        if value > T::zero() {
            Some(Self::Positive)
        } else if value < T::zero() {
            Some(Self::Negative)
        } else {
            None
        }
    }
}

/// Split `values` into loops.
///
/// Zeros never split a loop. Concatenating the returned loops reproduces `values`.
///
/// # Examples
/// ```
/// use diagramx::separates_ordinates;
///
/// // Crossing the baseline and coming back keeps a single region.
/// let loops = separates_ordinates(&[2.0, -1.0, 3.0]);
/// assert_eq!(loops, vec![vec![2.0, -1.0, 3.0]]);
///
/// // Leaving for good starts a new one.
/// let loops = separates_ordinates(&[2.0, 1.0, -1.0, -2.0]);
/// assert_eq!(loops, vec![vec![2.0, 1.0], vec![-1.0, -2.0]]);
/// ```
#[must_use]
pub fn separates_ordinates<T: Float>(values: &[T]) -> Vec<Vec<T>> {
    if values.is_empty() {
        return Vec::new();
    }

    // Last index holding a value of each sign.
    let mut last_positive = None;
    let mut last_negative = None;
    for (index, value) in values.iter().enumerate() {
        match Sign::of(*value) {
            Some(Sign::Positive) => last_positive = Some(index),
            Some(Sign::Negative) => last_negative = Some(index),
            None => {}
        }
    }
    let returns_after = |sign: Sign, index: usize| {
        let last = match sign {
            Sign::Positive => last_positive,
            Sign::Negative => last_negative,
        };
        last.map_or(false, |last| last > index)
    };

    let mut loops = Vec::new();
    let mut current = Vec::new();
    let mut loop_sign: Option<Sign> = None;
    let mut previous_sign: Option<Sign> = None;

    for (index, value) in values.iter().enumerate() {
        if let Some(sign) = Sign::of(*value) {
            let reversal = previous_sign.map_or(false, |previous| previous != sign);
            match loop_sign {
                None => loop_sign = Some(sign),
                Some(class) if reversal && sign != class && !returns_after(class, index) => {
                    loops.push(std::mem::take(&mut current));
                    loop_sign = Some(sign);
                }
                Some(_) => {}
            }
            previous_sign = Some(sign);
        }
        current.push(*value);
    }
    loops.push(current);
    loops
}
