//! Association measures between a predictor and a numeric outcome.
//!
//! - [`pearson`]: linear association between two numeric sequences
//! - [`correlation_ratio`]: association between a nominal grouping and a numeric sequence (eta)
//!
//! Both return `None` when the data cannot support the measure (too few
//! observations, a single group, or no variance). `None` means "insufficient
//! data", which is different from a zero association.

use std::collections::BTreeMap;

use crate::descriptive::{DescriptiveStats, mean};

/// Minimum number of paired observations required by every estimator.
pub const MIN_OBSERVATIONS: usize = 3;

/// Minimum number of distinct groups required by [`correlation_ratio`].
pub const MIN_GROUPS: usize = 2;

/// Pearson product-moment correlation coefficient.
///
/// # Arguments
///
/// * `x` - Predictor values
/// * `y` - Outcome values, paired index-wise with `x`
///
/// # Returns
///
/// * `Some(r)` - the signed coefficient in \[-1.0, 1.0\]
/// * `None` - if there are fewer than [`MIN_OBSERVATIONS`] pairs, or either
///   sequence has zero variance
///
/// # Panics
///
/// Panics if `x` and `y` have different lengths.
///
/// # Examples
///
/// ```
/// # use surveycorr_stats::correlation::pearson;
/// let x = [1.0, 2.0, 3.0, 4.0];
/// let r = pearson(&x, &[2.0, 4.0, 6.0, 8.0]).unwrap();
/// assert!((r - 1.0).abs() < 1e-12);
///
/// let r = pearson(&x, &[8.0, 6.0, 4.0, 2.0]).unwrap();
/// assert!((r + 1.0).abs() < 1e-12);
///
/// assert_eq!(pearson(&x, &[1.0, 1.0, 1.0, 1.0]), None);
/// ```
#[must_use]
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    assert_eq!(x.len(), y.len(), "paired sequences must have equal length");
    if x.len() < MIN_OBSERVATIONS {
        return None;
    }

    let x_stats = DescriptiveStats::new(x.iter().copied())?;
    let y_stats = DescriptiveStats::new(y.iter().copied())?;
    if x_stats.is_constant() || y_stats.is_constant() {
        return None;
    }

    let sxy = x
        .iter()
        .zip(y)
        .map(|(a, b)| (a - x_stats.mean) * (b - y_stats.mean))
        .sum::<f64>();
    let r = sxy / (x_stats.sum_sq_dev * y_stats.sum_sq_dev).sqrt();
    Some(r.clamp(-1.0, 1.0))
}

/// Correlation ratio (eta) of a numeric sequence grouped by nominal categories.
///
/// Computed as `sqrt(SS_between / SS_total)` around the grand mean. The result
/// has no direction because nominal categories have no order.
///
/// # Arguments
///
/// * `categories` - Group key of each observation
/// * `values` - Numeric value of each observation, paired index-wise with `categories`
///
/// # Returns
///
/// * `Some(eta)` - a value in \[0.0, 1.0\]
/// * `None` - if there are fewer than [`MIN_OBSERVATIONS`] observations, fewer
///   than [`MIN_GROUPS`] distinct categories, or zero total variance
///
/// # Panics
///
/// Panics if `categories` and `values` have different lengths.
///
/// # Examples
///
/// ```
/// # use surveycorr_stats::correlation::correlation_ratio;
/// // Groups are pure and separated: all variance is between groups.
/// let eta = correlation_ratio(&["a", "a", "b", "b"], &[1.0, 1.0, 3.0, 3.0]).unwrap();
/// assert!((eta - 1.0).abs() < 1e-12);
///
/// // Group means are equal: no variance is between groups.
/// let eta = correlation_ratio(&["a", "a", "b", "b"], &[1.0, 3.0, 1.0, 3.0]).unwrap();
/// assert!(eta.abs() < 1e-12);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn correlation_ratio<K>(categories: &[K], values: &[f64]) -> Option<f64>
where
    K: Ord,
{
    assert_eq!(
        categories.len(),
        values.len(),
        "paired sequences must have equal length"
    );
    if values.len() < MIN_OBSERVATIONS {
        return None;
    }

    let mut groups = BTreeMap::<&K, Vec<f64>>::new();
    for (category, value) in categories.iter().zip(values) {
        groups.entry(category).or_default().push(*value);
    }
    if groups.len() < MIN_GROUPS {
        return None;
    }

    let overall = DescriptiveStats::new(values.iter().copied())?;
    if overall.is_constant() {
        return None;
    }

    let ss_between = groups
        .values()
        .filter_map(|group| {
            let group_mean = mean(group)?;
            Some(group.len() as f64 * (group_mean - overall.mean).powi(2))
        })
        .sum::<f64>();
    let eta = (ss_between / overall.sum_sq_dev).sqrt();
    Some(eta.min(1.0))
}
