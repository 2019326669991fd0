//! Display settings of a member diagram and the adapter that applies them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coordinates::make_member_diagram_coords;
use crate::errors::{check_precision, ConfigError, DiagramError};
use crate::geometry::{Label, Polygon};
use crate::labels::place_labels;
use crate::units::{PlainFormatter, ResultKind, UnitFormatter, UnitSystem, ValueFormatter};

/// Display settings for one diagram.
///
/// Every field is optional; unset fields fall back to the defaults exposed by
/// the accessor of the same name.
///
/// # Examples
/// ```
/// use diagramx::{DiagramConfig, ResultKind};
///
/// let config = DiagramConfig::from_json_str(r#"{ "scale": 0.01, "kind": "shear" }"#)
///     .expect("valid configuration");
/// assert_eq!(config.scale(), 0.01);
/// assert_eq!(config.kind(), ResultKind::Shear);
/// assert_eq!(config.precision(), DiagramConfig::DEFAULT_PRECISION);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiagramConfig {
    /// Factor applied to values before they are drawn.
    pub scale: Option<f64>,
    /// Label text height in diagram units.
    pub font_height: Option<f64>,
    /// Decimals shown for ordinary magnitudes.
    pub precision: Option<i32>,
    /// Result drawn by the diagram.
    pub kind: Option<ResultKind>,
    /// Unit system for labels; bare numbers when unset.
    pub unit_system: Option<UnitSystem>,
    /// Whether labels are produced at all.
    pub show_labels: Option<bool>,
}

impl DiagramConfig {
    /// Scale used when none is configured.
    pub const DEFAULT_SCALE: f64 = 1.0;
    /// Font height used when none is configured.
    pub const DEFAULT_FONT_HEIGHT: f64 = 10.0;
    /// Precision used when none is configured.
    pub const DEFAULT_PRECISION: i32 = 2;

    /// Parse a configuration from JSON and check its settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed documents or unknown fields and
    /// [`ConfigError::Invalid`] for settings outside their range.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configured settings are usable.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::NegativePrecision`] for a negative precision.
    pub fn validate(&self) -> Result<(), DiagramError> {
        check_precision(self.precision()).map(|_| ())
    }

    /// Configured scale or [`Self::DEFAULT_SCALE`].
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale.unwrap_or(Self::DEFAULT_SCALE)
    }

    /// Configured font height or [`Self::DEFAULT_FONT_HEIGHT`].
    #[must_use]
    pub fn font_height(&self) -> f64 {
        self.font_height.unwrap_or(Self::DEFAULT_FONT_HEIGHT)
    }

    /// Configured precision or [`Self::DEFAULT_PRECISION`].
    #[must_use]
    pub fn precision(&self) -> i32 {
        self.precision.unwrap_or(Self::DEFAULT_PRECISION)
    }

    /// Configured result kind, bending moment by default.
    #[must_use]
    pub fn kind(&self) -> ResultKind {
        self.kind.unwrap_or_default()
    }

    /// Whether labels are produced, `true` by default.
    #[must_use]
    pub fn show_labels(&self) -> bool {
        self.show_labels.unwrap_or(true)
    }

    /// Build the label formatter these settings describe.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::NegativePrecision`] for a negative precision.
    pub fn formatter(&self) -> Result<Box<dyn ValueFormatter>, DiagramError> {
        Ok(match self.unit_system {
            Some(system) => Box::new(UnitFormatter::new(system, self.precision())?),
            None => Box::new(PlainFormatter::new(self.precision())?),
        })
    }
}

/// Everything a renderer needs to draw one member diagram.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderedDiagram {
    /// Filled regions in order along the member.
    pub polygons: Vec<Polygon>,
    /// Value labels, empty when labels are switched off.
    pub labels: Vec<Label>,
    /// Input values multiplied by the configured scale.
    pub scaled_values: Vec<f64>,
}

/// Lay out polygons and labels for `values` sampled every `dist`.
///
/// # Errors
///
/// Returns [`DiagramError::NonPositiveSpacing`] for an unusable `dist` and
/// [`DiagramError::NegativePrecision`] when the configured precision is negative.
///
/// # Examples
/// ```
/// use diagramx::{render_member_diagram, DiagramConfig, UnitSystem};
///
/// let config = DiagramConfig {
///     unit_system: Some(UnitSystem::Si),
///     ..DiagramConfig::default()
/// };
/// let diagram = render_member_diagram(&[0.0, -5_000.0, 0.0], 1.0, &config).expect("valid");
/// assert_eq!(diagram.polygons.len(), 1);
/// assert_eq!(diagram.labels[1].text, "+5.00 kN·m");
/// ```
pub fn render_member_diagram(
    values: &[f64],
    dist: f64,
    config: &DiagramConfig,
) -> Result<RenderedDiagram, DiagramError> {
    config.validate()?;

    let diagram = make_member_diagram_coords(values, dist, config.scale())?;
    let labels = if config.show_labels() {
        let formatter = config.formatter()?;
        place_labels(
            &diagram.scaled_values,
            values,
            dist,
            config.font_height(),
            formatter.as_ref(),
            config.kind(),
        )?
    } else {
        Vec::new()
    };
    debug!(
        polygons = diagram.polygons.len(),
        labels = labels.len(),
        kind = ?config.kind(),
        "rendered member diagram"
    );

    Ok(RenderedDiagram {
        polygons: diagram.polygons,
        labels,
        scaled_values: diagram.scaled_values,
    })
}
