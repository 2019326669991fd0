/// Simply supported beam under a uniformly distributed load.
///
/// Closed-form internal actions are sampled at equal intervals and reported in
/// solver sign convention, which is the negative of the drawn convention, so the
/// demonstration exercises the same path as real analysis output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamSample {
    /// Span between the supports in metres.
    pub span: f64,
    /// Distributed load in newtons per metre, positive downwards.
    pub load: f64,
    /// Number of intervals the span is divided into.
    pub intervals: usize,
}

impl Default for BeamSample {
    fn default() -> Self {
        Self {
            span: 6.0,
            load: 12_000.0,
            intervals: 12,
        }
    }
}

impl BeamSample {
    /// Distance between two samples in metres.
    #[must_use]
    pub fn dist(&self) -> f64 {
        self.span / self.intervals as f64
    }

    /// Stations of every sample in metres.
    fn stations(&self) -> impl Iterator<Item = f64> {
        let dist = self.dist();
        (0..=self.intervals).map(move |index| index as f64 * dist)
    }

    /// Bending moment in newton metres, `M(x) = w x (L - x) / 2` drawn sagging positive.
    #[must_use]
    pub fn moments(&self) -> Vec<f64> {
        let Self { span, load, .. } = *self;
        self.stations()
            .map(|x| -(load * x * (span - x) / 2.0))
            .collect()
    }

    /// Shear force in newtons, `V(x) = w (L / 2 - x)`.
    #[must_use]
    pub fn shears(&self) -> Vec<f64> {
        let Self { span, load, .. } = *self;
        self.stations().map(|x| -(load * (span / 2.0 - x))).collect()
    }
}
