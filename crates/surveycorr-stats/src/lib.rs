//! Statistical estimators for survey association analysis.
//!
//! This crate provides the numeric building blocks used to measure how
//! strongly a survey question is associated with an outcome:
//!
//! - **Descriptive statistics**: count, mean, dispersion of a dataset
//! - **Pearson correlation**: signed linear association for ordinal/binary predictors
//! - **Correlation ratio (eta)**: unsigned association for nominal predictors
//!
//! Estimators return `Option<f64>`. `None` is the "insufficient data" sentinel
//! (too few observations, a single group, or zero variance) and is never
//! conflated with a zero association.
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`correlation`]: Pearson correlation and the correlation ratio
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use surveycorr_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Correlating an ordinal predictor with an outcome
//!
//! ```
//! use surveycorr_stats::correlation::pearson;
//!
//! let agreement = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let impact = [-2.0, -1.0, 0.0, 1.0, 2.0];
//! let r = pearson(&agreement, &impact).unwrap();
//! assert!((r - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Measuring a nominal predictor
//!
//! ```
//! use surveycorr_stats::correlation::correlation_ratio;
//!
//! let state = ["Utah", "Utah", "Texas", "Texas"];
//! let impact = [1.0, 1.0, -1.0, -1.0];
//! let eta = correlation_ratio(&state, &impact).unwrap();
//! assert!((eta - 1.0).abs() < 1e-12);
//! ```

pub mod correlation;
pub mod descriptive;
