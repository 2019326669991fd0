//! Display formatting of result values.
//!
//! The layout code never decides how a number is shown. It hands a value that
//! already follows the display sign convention, together with the kind of
//! result, to a [`ValueFormatter`]. Two formatters ship with the crate: a plain
//! numeric one and one that converts SI base values into a unit system with
//! `uom`.

use serde::{Deserialize, Serialize};
use uom::si::f64::{Force, Torque};
use uom::si::force::{kilonewton, kip, newton};
use uom::si::torque::{kilonewton_meter, newton_meter, pound_force_foot};

use crate::errors::{check_precision, DiagramError};

/// Factor applied to solver output before it is displayed.
///
/// The solver reports internal actions with the opposite sign to the one used
/// on the drawings (sagging moment, tension and clockwise shear are drawn
/// positive). Every label goes through [`display_value`] so the inversion is
/// applied exactly once.
pub const DISPLAY_SIGN: f64 = -1.0;

/// Magnitudes below this are shown as zero.
pub const ZERO_THRESHOLD: f64 = 1.0e-6;

/// Magnitudes below this get extra decimals.
const SMALL_MAGNITUDE: f64 = 0.1;

/// Magnitudes above this are shown with at most one decimal.
const LARGE_MAGNITUDE: f64 = 1000.0;

/// Largest number of decimals used for small values before switching to
/// scientific notation.
pub const MAX_SMALL_DECIMALS: usize = 4;

/// Convert a solver value into the value shown on a label.
#[must_use]
pub fn display_value(raw: f64) -> f64 {
    raw * DISPLAY_SIGN
}

/// Kind of internal action a diagram shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    /// Generic force.
    Force,
    /// Bending moment.
    #[default]
    Moment,
    /// Shear force.
    Shear,
    /// Axial force.
    Axial,
    /// Torsional moment.
    Torque,
}

impl ResultKind {
    /// Return `true` for results measured as force times length.
    #[must_use]
    pub fn is_moment(self) -> bool {
        matches!(self, Self::Moment | Self::Torque)
    }
}

/// Unit system used by [`UnitFormatter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// Kilonewtons and kilonewton metres.
    #[default]
    Si,
    /// Newtons and newton metres.
    SiBase,
    /// Kips and kip feet.
    UsCustomary,
}

impl UnitSystem {
    /// Convert a value in newtons (or newton metres for moments) into this
    /// system, returning the converted value and its unit symbol.
    #[must_use]
    pub fn convert(self, value: f64, kind: ResultKind) -> (f64, &'static str) {
        if kind.is_moment() {
            let torque = Torque::new::<newton_meter>(value);
            match self {
                Self::Si => (torque.get::<kilonewton_meter>(), "kN·m"),
                Self::SiBase => (torque.get::<newton_meter>(), "N·m"),
                Self::UsCustomary => (torque.get::<pound_force_foot>() / 1000.0, "kip·ft"),
            }
        } else {
            let force = Force::new::<newton>(value);
            match self {
                Self::Si => (force.get::<kilonewton>(), "kN"),
                Self::SiBase => (force.get::<newton>(), "N"),
                Self::UsCustomary => (force.get::<kip>(), "kip"),
            }
        }
    }
}

/// Collaborator that turns a displayed value into label text.
///
/// Implementations must start the text with the number so it stays parseable;
/// anything after it (a unit symbol, for instance) is free-form.
pub trait ValueFormatter {
    /// Format `value`, which already follows the display sign convention.
    fn format(&self, value: f64, kind: ResultKind) -> String;
}

impl<F> ValueFormatter for F
where
    F: Fn(f64, ResultKind) -> String,
{
    fn format(&self, value: f64, kind: ResultKind) -> String {
        self(value, kind)
    }
}

/// Format a number with decimals chosen from its magnitude.
///
/// Non-negative values carry a leading `+`. Values indistinguishable from zero
/// print as zero, small values get enough decimals for one significant digit
/// (or scientific notation past [`MAX_SMALL_DECIMALS`]), and large values are
/// cut to a single decimal.
///
/// # Examples
/// ```
/// use diagramx::format_magnitude;
///
/// assert_eq!(format_magnitude(12.346, 2), "+12.35");
/// assert_eq!(format_magnitude(-0.004, 2), "-0.004");
/// assert_eq!(format_magnitude(-2.0e-7, 2), "+0.00");
/// assert_eq!(format_magnitude(15_000.27, 3), "+15000.3");
/// ```
#[must_use]
pub fn format_magnitude(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{:+}", value);
    }

    let magnitude = value.abs();
    if magnitude < ZERO_THRESHOLD {
        format!("+{:.*}", decimals, 0.0)
    } else if magnitude < SMALL_MAGNITUDE {
        let needed = (-magnitude.log10()).ceil() as usize;
        if needed > decimals.max(MAX_SMALL_DECIMALS) {
            format!("{:+.*e}", decimals, value)
        } else {
            format!("{:+.*}", decimals.max(needed), value)
        }
    } else if magnitude <= LARGE_MAGNITUDE {
        format!("{:+.*}", decimals, value)
    } else {
        format!("{:+.*}", decimals.min(1), value)
    }
}

/// Formatter producing bare numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlainFormatter {
    /// Decimals used for ordinary magnitudes.
    decimals: usize,
}

impl PlainFormatter {
    /// Create a formatter printing `precision` decimals for ordinary magnitudes.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::NegativePrecision`] when `precision` is negative.
    pub fn new(precision: i32) -> Result<Self, DiagramError> {
        Ok(Self {
            decimals: check_precision(precision)?,
        })
    }
}

impl ValueFormatter for PlainFormatter {
    fn format(&self, value: f64, _kind: ResultKind) -> String {
        format_magnitude(value, self.decimals)
    }
}

/// Formatter converting SI base values into a [`UnitSystem`] and appending the
/// unit symbol.
///
/// # Examples
/// ```
/// use diagramx::{ResultKind, UnitFormatter, UnitSystem, ValueFormatter};
///
/// let formatter = UnitFormatter::new(UnitSystem::Si, 2).expect("valid precision");
/// assert_eq!(formatter.format(12_500.0, ResultKind::Moment), "+12.50 kN·m");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitFormatter {
    /// Target unit system.
    system: UnitSystem,
    /// Decimals used for ordinary magnitudes.
    decimals: usize,
}

impl UnitFormatter {
    /// Create a formatter for `system` printing `precision` decimals.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::NegativePrecision`] when `precision` is negative.
    pub fn new(system: UnitSystem, precision: i32) -> Result<Self, DiagramError> {
        Ok(Self {
            system,
            decimals: check_precision(precision)?,
        })
    }

    /// Return the target unit system.
    #[must_use]
    pub fn system(&self) -> UnitSystem {
        self.system
    }
}

impl ValueFormatter for UnitFormatter {
    fn format(&self, value: f64, kind: ResultKind) -> String {
        let (converted, symbol) = self.system.convert(value, kind);
        format!("{} {}", format_magnitude(converted, self.decimals), symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_threshold_hides_noise_of_either_sign() {
        assert_eq!(format_magnitude(9.0e-7, 2), "+0.00");
        assert_eq!(format_magnitude(-9.0e-7, 2), "+0.00");
        assert_eq!(format_magnitude(-0.0, 0), "+0");
    }

    #[test]
    fn ordinary_values_use_requested_precision() {
        assert_eq!(format_magnitude(0.1, 2), "+0.10");
        assert_eq!(format_magnitude(-3.14159, 3), "-3.142");
        assert_eq!(format_magnitude(1000.0, 2), "+1000.00");
    }

    #[test]
    fn large_values_drop_to_one_decimal() {
        assert_eq!(format_magnitude(-1234.567, 3), "-1234.6");
        assert_eq!(format_magnitude(25_000.0, 0), "+25000");
    }

    #[test]
    fn small_values_keep_a_significant_digit() {
        assert_eq!(format_magnitude(0.05, 2), "+0.05");
        assert_eq!(format_magnitude(0.0004, 2), "+0.0004");
        assert_eq!(format_magnitude(-0.003, 1), "-0.003");
    }

    #[test]
    fn tiny_values_switch_to_scientific() {
        assert_eq!(format_magnitude(0.00004, 2), "+4.00e-5");
        assert_eq!(format_magnitude(-1.5e-6, 1), "-1.5e-6");
    }

    #[test]
    fn display_value_inverts_solver_sign() {
        assert_eq!(display_value(12.0), -12.0);
        assert_eq!(display_value(-3.5), 3.5);
    }

    #[test]
    fn plain_formatter_rejects_negative_precision() {
        assert_eq!(
            PlainFormatter::new(-2),
            Err(DiagramError::NegativePrecision { precision: -2 })
        );
        let formatter = PlainFormatter::new(1).expect("valid precision");
        assert_eq!(formatter.format(2.26, ResultKind::Shear), "+2.3");
    }

    #[test]
    fn converts_forces_between_systems() {
        let (kilonewtons, symbol) = UnitSystem::Si.convert(4_500.0, ResultKind::Axial);
        assert_relative_eq!(kilonewtons, 4.5, epsilon = 1.0e-12);
        assert_eq!(symbol, "kN");

        let (kips, symbol) = UnitSystem::UsCustomary.convert(4_448.222, ResultKind::Shear);
        assert_relative_eq!(kips, 1.0, epsilon = 1.0e-6);
        assert_eq!(symbol, "kip");
    }

    #[test]
    fn converts_moments_between_systems() {
        let (newton_metres, symbol) = UnitSystem::SiBase.convert(-75.0, ResultKind::Torque);
        assert_relative_eq!(newton_metres, -75.0, epsilon = 1.0e-12);
        assert_eq!(symbol, "N·m");

        let (kip_feet, symbol) = UnitSystem::UsCustomary.convert(1_355.818, ResultKind::Moment);
        assert_relative_eq!(kip_feet, 1.0, epsilon = 1.0e-5);
        assert_eq!(symbol, "kip·ft");
    }

    #[test]
    fn unit_formatter_appends_symbol() {
        let formatter = UnitFormatter::new(UnitSystem::Si, 1).expect("valid precision");
        assert_eq!(formatter.format(-2_000.0, ResultKind::Shear), "-2.0 kN");
        assert_eq!(formatter.format(3.0e-7, ResultKind::Moment), "+0.0 kN·m");
        assert_eq!(formatter.system(), UnitSystem::Si);
    }

    #[test]
    fn closures_are_formatters() {
        let formatter = |value: f64, kind: ResultKind| format!("{value}:{kind:?}");
        assert_eq!(formatter.format(1.5, ResultKind::Force), "1.5:Force");
    }

    #[test]
    fn kinds_are_classified() {
        assert!(ResultKind::Moment.is_moment());
        assert!(ResultKind::Torque.is_moment());
        assert!(!ResultKind::Axial.is_moment());
        assert_eq!(ResultKind::default(), ResultKind::Moment);
    }
}
