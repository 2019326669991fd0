//! Placement of value labels along a member diagram.
//!
//! Every sample gets one label anchored at its station and at its scaled
//! ordinate. Labels of nearby samples that would sit on top of each other are
//! spread vertically, then the text is produced by a [`ValueFormatter`] from the
//! unscaled value in display sign convention.

use tracing::{debug, trace};

use crate::errors::{check_spacing, DiagramError};
use crate::geometry::Label;
use crate::units::{display_value, PlainFormatter, ResultKind, ValueFormatter};

/// Minimum vertical distance between colliding labels, as a fraction of the
/// font height.
pub const LABEL_SPACING_FACTOR: f64 = 0.6;

/// Labels whose sample indices differ by at most this many positions can collide.
pub const LABEL_COLLISION_WINDOW: usize = 2;

/// Produce one plain numeric label per sample.
///
/// `scaled_values` position the labels, `original_values` provide the text. The
/// text shows the original value with the display sign applied, formatted with
/// `precision` decimals for ordinary magnitudes.
///
/// # Errors
///
/// Returns [`DiagramError::NegativePrecision`] for a negative `precision`,
/// [`DiagramError::NonPositiveSpacing`] for an unusable `dist` and
/// [`DiagramError::ShapeMismatch`] when the two value slices differ in length.
///
/// # Examples
/// ```
/// use diagramx::get_label_positions;
///
/// let labels = get_label_positions(&[20.0, -40.0], &[2.0, -4.0], 0.5, 1.0, 1)
///     .expect("valid label settings");
/// assert_eq!(labels[0].text, "-2.0");
/// assert_eq!(labels[1].text, "+4.0");
/// assert_eq!((labels[1].x, labels[1].y), (0.5, -40.0));
/// ```
pub fn get_label_positions(
    scaled_values: &[f64],
    original_values: &[f64],
    dist: f64,
    font_height: f64,
    precision: i32,
) -> Result<Vec<Label>, DiagramError> {
    let formatter = PlainFormatter::new(precision)?;
    place_labels(
        scaled_values,
        original_values,
        dist,
        font_height,
        &formatter,
        ResultKind::default(),
    )
}

/// Produce one label per sample with text from `formatter`.
///
/// # Errors
///
/// Returns [`DiagramError::NonPositiveSpacing`] for an unusable `dist` and
/// [`DiagramError::ShapeMismatch`] when the two value slices differ in length.
pub fn place_labels<F>(
    scaled_values: &[f64],
    original_values: &[f64],
    dist: f64,
    font_height: f64,
    formatter: &F,
    kind: ResultKind,
) -> Result<Vec<Label>, DiagramError>
where
    F: ValueFormatter + ?Sized,
{
    if scaled_values.len() != original_values.len() {
        return Err(DiagramError::ShapeMismatch {
            scaled: scaled_values.len(),
            original: original_values.len(),
        });
    }
    check_spacing(dist)?;

    let gap = (font_height * LABEL_SPACING_FACTOR).max(0.0);
    let heights = spread_label_heights(scaled_values, gap);
    let labels: Vec<Label> = original_values
        .iter()
        .zip(heights)
        .enumerate()
        .map(|(index, (original, y))| {
            let text = formatter.format(display_value(*original), kind);
            Label::new(text, index as f64 * dist, y)
        })
        .collect();

    debug!(labels = labels.len(), gap, ?kind, "placed labels");
    Ok(labels)
}

/// Spread label heights so that labels within [`LABEL_COLLISION_WINDOW`]
/// samples of each other end up at least `gap` apart.
///
/// Colliding labels form a group that is laid out symmetrically around the mean
/// of its candidate heights, one `gap` apart, keeping the vertical order of the
/// candidates (equal candidates keep sample order). Groups that collide once
/// spread are merged and laid out again. A non-positive `gap` leaves the
/// candidates untouched.
///
/// # Examples
/// ```
/// use diagramx::spread_label_heights;
///
/// let placed = spread_label_heights(&[1.0, 1.0, 40.0], 2.0);
/// assert_eq!(placed, vec![0.0, 2.0, 40.0]);
/// ```
#[must_use]
pub fn spread_label_heights(candidates: &[f64], gap: f64) -> Vec<f64> {
    let mut placed = candidates.to_vec();
    if !(gap > 0.0) || placed.len() < 2 {
        return placed;
    }

    let mut groups = Groups::new(placed.len());
    loop {
        let mut merged = false;
        for first in 0..placed.len() {
            let last = placed.len().min(first + LABEL_COLLISION_WINDOW + 1);
            for second in (first + 1)..last {
                if (placed[second] - placed[first]).abs() < gap && groups.union(first, second) {
                    merged = true;
                }
            }
        }
        if !merged {
            break;
        }

        for members in groups.members() {
            if members.len() > 1 {
                spread_group(candidates, &mut placed, members, gap);
            }
        }
    }
    placed
}

/// Lay out one group of colliding labels around the mean of its candidates.
fn spread_group(candidates: &[f64], placed: &mut [f64], mut members: Vec<usize>, gap: f64) {
    let total: f64 = members.iter().map(|&index| candidates[index]).sum();
    let mean = total / members.len() as f64;
    members.sort_by(|a, b| candidates[*a].total_cmp(&candidates[*b]).then(a.cmp(b)));

    let half = (members.len() - 1) as f64 / 2.0;
    for (rank, index) in members.iter().enumerate() {
        placed[*index] = mean + (rank as f64 - half) * gap;
    }
    trace!(members = members.len(), mean, "spread label group");
}

/// Disjoint sets of label indices.
struct Groups {
    /// Parent link of every index; roots point at themselves.
    parent: Vec<usize>,
}

impl Groups {
    /// Start with every index in a group of its own.
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    /// Representative of the group holding `index`.
    fn root(&mut self, mut index: usize) -> usize {
        while self.parent[index] != index {
            self.parent[index] = self.parent[self.parent[index]];
            index = self.parent[index];
        }
        index
    }

    /// Join the groups of `a` and `b`, returning `false` when already joined.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (root_a, root_b) = (self.root(a), self.root(b));
        if root_a == root_b {
            return false;
        }
        let (low, high) = (root_a.min(root_b), root_a.max(root_b));
        self.parent[high] = low;
        true
    }

    /// Indices of every group, each in ascending order.
    fn members(&mut self) -> Vec<Vec<usize>> {
        let mut members = vec![Vec::new(); self.parent.len()];
        for index in 0..self.parent.len() {
            let root = self.root(index);
            members[root].push(index);
        }
        members.retain(|group| !group.is_empty());
        members
    }
}
