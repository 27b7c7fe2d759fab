//! Cross-sectional association analysis of survey responses
//!
//! This crate screens raw survey responses, measures how strongly each survey
//! question is associated with a self-reported outcome, and ranks the results.
//! It works purely on in-memory records; loading files and rendering reports
//! belong to the CLI.
//!
//! # Overview
//!
//! 1. **Records** ([`record::ResponseRecord`]): one respondent's raw answers
//! 2. **Encoding** ([`encoding::EncodingTable`]): answer label to numeric code
//! 3. **Screening** ([`filter::ResponseFilter`]): select the main, graduate,
//!    and graduate-fallback samples
//! 4. **Registry** ([`predictor::Predictor`]): declarative list of questions
//!    to analyze and how to encode them
//! 5. **Association** ([`association::Association`]): Pearson's r for
//!    ordinal/binary predictors, the correlation ratio for nominal ones
//! 6. **Ranking** ([`ranking::rank`]): threshold on sample size, sort by strength
//! 7. **Group comparison** ([`group::GroupComparison`]): outcome mean and
//!    distribution per answer group
//!
//! [`survey::SurveyAnalysis::run`] chains all of the above with the thresholds
//! in [`config::AnalysisConfig`].
//!
//! # Examples
//!
//! ```
//! use surveycorr_analysis::{
//!     config::AnalysisConfig, filter::ResponseFilter, record::ResponseRecord,
//!     survey::SurveyAnalysis,
//! };
//!
//! let records: Vec<ResponseRecord> = (0..4)
//!     .map(|i| {
//!         let id = format!("R_{i}");
//!         let aware = if i < 2 { "Yes" } else { "No" };
//!         let impact = if i < 2 { "Increased desire" } else { "No change in desire" };
//!         [
//!             ("ResponseId", id.as_str()),
//!             ("Finished", "True"),
//!             ("Q61", "Yes"),
//!             ("Q53", aware),
//!             ("Q52", impact),
//!         ]
//!         .into_iter()
//!         .collect()
//!     })
//!     .collect();
//!
//! let analysis =
//!     SurveyAnalysis::run(&records, &ResponseFilter::default(), &AnalysisConfig::default());
//! assert_eq!(analysis.sample_sizes.main, 4);
//!
//! // Strength is computed, but 4 pairs is below the ranking threshold.
//! assert!(analysis.main.get("Q53").unwrap().strength.is_some());
//! assert!(analysis.main.ranked.is_empty());
//! ```

pub mod association;
pub mod config;
pub mod encoding;
pub mod filter;
pub mod group;
pub mod predictor;
pub mod ranking;
pub mod record;
pub mod survey;
