/// Descriptive statistics summarizing a dataset.
///
/// This structure contains the measures of central tendency and dispersion
/// that the association estimators build on.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// The number of values in the dataset.
    pub count: usize,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The sum of squared deviations from the mean.
    pub sum_sq_dev: f64,
    /// The population variance of the dataset (`sum_sq_dev / count`).
    pub variance: f64,
    /// The population standard deviation of the dataset.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from values in any order.
    ///
    /// # Arguments
    ///
    /// * `values` - An iterator over `f64` values.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use surveycorr_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.count, 5);
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.sum_sq_dev, 10.0);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        let n = count as f64;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.iter().sum::<f64>() / n;
        let sum_sq_dev = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
        let variance = sum_sq_dev / n;
        let std_dev = variance.sqrt();

        Some(Self {
            count,
            min,
            max,
            mean,
            sum_sq_dev,
            variance,
            std_dev,
        })
    }

    /// Returns `true` if every value in the dataset is identical.
    ///
    /// # Examples
    ///
    /// ```
    /// # use surveycorr_stats::descriptive::DescriptiveStats;
    /// assert!(DescriptiveStats::new([2.0, 2.0, 2.0]).unwrap().is_constant());
    /// assert!(!DescriptiveStats::new([1.0, 2.0]).unwrap().is_constant());
    /// ```
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.sum_sq_dev <= 0.0
    }
}

/// Arithmetic mean of `values`, or `None` when there are none.
///
/// # Examples
///
/// ```
/// # use surveycorr_stats::descriptive::mean;
/// assert_eq!(mean(&[1.0, 2.0, 6.0]), Some(3.0));
/// assert_eq!(mean(&[]), None);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        assert!(DescriptiveStats::new(Vec::<f64>::new()).is_none());
    }

    #[test]
    fn test_single_value() {
        let stats = DescriptiveStats::new([-2.0]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.min, -2.0);
        assert_eq!(stats.max, -2.0);
        assert_eq!(stats.mean, -2.0);
        assert_eq!(stats.variance, 0.0);
        assert!(stats.is_constant());
    }

    #[test]
    fn test_population_variance() {
        let stats = DescriptiveStats::new([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.sum_sq_dev, 32.0);
        assert_eq!(stats.variance, 4.0);
        assert_eq!(stats.std_dev, 2.0);
    }

    #[test]
    fn test_mean_of_centered_scale() {
        let values = [-2.0, -1.0, 0.0, 1.0, 2.0];
        assert_eq!(mean(&values), Some(0.0));
    }
}
