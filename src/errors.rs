//! Error types produced while laying out member diagrams.

use std::convert::TryFrom;

use thiserror::Error;

/// Broad category of a [`DiagramError`].
///
/// Callers that only need to decide how to present a failure can match on the
/// kind instead of every individual variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A scalar argument lies outside its valid range.
    InvalidArgument,
    /// Two parallel sequences do not have the same length.
    ShapeMismatch,
}

/// Error returned when a diagram cannot be laid out from the supplied inputs.
///
/// Every variant is a precondition violation detected before any work is done, so
/// a failure never comes with a partial result.
///
/// # Examples
///
/// ```
/// use diagramx::{generate_coordinates, DiagramError, ErrorKind};
///
/// let error = generate_coordinates(&[vec![1.0, 2.0]], 0.0)
///     .expect_err("zero spacing is rejected");
/// assert_eq!(error, DiagramError::NonPositiveSpacing { dist: 0.0 });
/// assert_eq!(error.kind(), ErrorKind::InvalidArgument);
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum DiagramError {
    /// Returned when the sample spacing is zero, negative or not finite.
    #[error("sample spacing must be positive and finite (received {dist})")]
    NonPositiveSpacing {
        /// Rejected spacing in model length units.
        dist: f64,
    },
    /// Returned when a negative number of decimals is requested.
    #[error("precision must not be negative (received {precision})")]
    NegativePrecision {
        /// Rejected number of decimals.
        precision: i32,
    },
    /// Returned when scaled and original values are not parallel sequences.
    #[error("expected {original} scaled values to match the original values, received {scaled}")]
    ShapeMismatch {
        /// Number of scaled values supplied.
        scaled: usize,
        /// Number of original values supplied.
        original: usize,
    },
}

impl DiagramError {
    /// Return the category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NonPositiveSpacing { .. } | Self::NegativePrecision { .. } => {
                ErrorKind::InvalidArgument
            }
            Self::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
        }
    }
}

/// Error returned when a [`DiagramConfig`](crate::DiagramConfig) cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when the configuration document is not valid JSON for the schema.
    #[error("invalid diagram configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// Returned when a parsed setting is outside its valid range.
    #[error("invalid diagram setting: {0}")]
    Invalid(#[from] DiagramError),
}

/// Check that `dist` can be used as a sample spacing.
pub(crate) fn check_spacing(dist: f64) -> Result<(), DiagramError> {
    if dist.is_finite() && dist > 0.0 {
        Ok(())
    } else {
        Err(DiagramError::NonPositiveSpacing { dist })
    }
}

/// Convert a signed precision into a number of decimals.
pub(crate) fn check_precision(precision: i32) -> Result<usize, DiagramError> {
    usize::try_from(precision).map_err(|_| DiagramError::NegativePrecision { precision })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_must_be_positive_and_finite() {
        assert!(check_spacing(0.25).is_ok());
        assert_eq!(
            check_spacing(-1.0),
            Err(DiagramError::NonPositiveSpacing { dist: -1.0 })
        );
        assert!(check_spacing(f64::INFINITY).is_err());
        assert!(check_spacing(f64::NAN).is_err());
    }

    #[test]
    fn precision_must_not_be_negative() {
        assert_eq!(check_precision(3), Ok(3));
        let error = check_precision(-1).expect_err("negative precision is rejected");
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            error.to_string(),
            "precision must not be negative (received -1)"
        );
    }

    #[test]
    fn shape_mismatch_has_its_own_kind() {
        let error = DiagramError::ShapeMismatch {
            scaled: 2,
            original: 3,
        };
        assert_eq!(error.kind(), ErrorKind::ShapeMismatch);
    }
}
