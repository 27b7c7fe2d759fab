//! Outcome summaries per answer group
//!
//! A [`GroupComparison`] partitions a sample by the answers to one grouping
//! question (e.g. awareness `Q53`, student status `Q27`) and summarizes the
//! outcome in each group: respondent count, mean outcome code, and the count
//! of each outcome label in canonical scale order.
//!
//! Groups are keyed by a `BTreeMap`, so iteration is in sorted label order and
//! reports built from it are reproducible.

use std::collections::BTreeMap;

use serde::Serialize;
use surveycorr_stats::descriptive::DescriptiveStats;

use crate::{predictor::Outcome, record::ResponseRecord};

/// Outcome summary for one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub label: String,
    pub n: usize,
    pub mean: f64,
    /// Count per outcome label, in canonical scale order. Zero counts included.
    pub distribution: Vec<(&'static str, usize)>,
}

impl GroupSummary {
    /// Fraction of the group giving an answer that occurs `count` times.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn share(&self, count: usize) -> f64 {
        if self.n == 0 {
            0.0
        } else {
            count as f64 / self.n as f64
        }
    }
}

/// Outcome summaries for every answer of one grouping column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupComparison {
    pub column: &'static str,
    pub groups: BTreeMap<String, GroupSummary>,
}

impl GroupComparison {
    /// Summarizes `outcome` over `records` grouped by the answer in `column`.
    ///
    /// Records with no answer in `column`, or no recognized outcome, are left out.
    #[must_use]
    pub fn summarize(records: &[&ResponseRecord], column: &'static str, outcome: &Outcome) -> Self {
        let mut partitions = BTreeMap::<&str, Vec<(&str, i32)>>::new();
        for record in records {
            let Some(group) = record.get(column) else {
                continue;
            };
            let Some(label) = record.get(outcome.column) else {
                continue;
            };
            let Some(code) = outcome.table.encode(label) else {
                continue;
            };
            partitions.entry(group).or_default().push((label, code));
        }

        let groups = partitions
            .into_iter()
            .filter_map(|(group, answers)| {
                let stats = DescriptiveStats::new(answers.iter().map(|(_, code)| f64::from(*code)))?;
                let distribution = outcome
                    .table
                    .labels()
                    .map(|label| {
                        let count = answers.iter().filter(|(answer, _)| *answer == label).count();
                        (label, count)
                    })
                    .collect();
                let summary = GroupSummary {
                    label: group.to_owned(),
                    n: stats.count,
                    mean: stats.mean,
                    distribution,
                };
                Some((group.to_owned(), summary))
            })
            .collect();

        Self { column, groups }
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&GroupSummary> {
        self.groups.get(label)
    }

    /// `mean(first) - mean(second)`, when both groups are present.
    #[must_use]
    pub fn mean_difference(&self, first: &str, second: &str) -> Option<f64> {
        Some(self.get(first)?.mean - self.get(second)?.mean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictor::PRIMARY_OUTCOME;

    fn record(group: &str, outcome: &str) -> ResponseRecord {
        [("Q53", group), ("Q52", outcome)].into_iter().collect()
    }

    #[test]
    fn test_summaries_per_group() {
        let records = vec![
            record("Yes", "Increased desire"),
            record("Yes", "Significantly increased desire"),
            record("Yes", "No change in desire"),
            record("No", "Decreased desire"),
            record("No", "No change in desire"),
            record("", "Increased desire"),
        ];
        let refs = records.iter().collect::<Vec<_>>();

        let comparison = GroupComparison::summarize(&refs, "Q53", &PRIMARY_OUTCOME);

        let labels = comparison.groups.keys().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(labels, ["No", "Yes"]);

        let yes = comparison.get("Yes").unwrap();
        assert_eq!(yes.n, 3);
        assert!((yes.mean - 1.0).abs() < 1e-12);
        assert_eq!(
            yes.distribution,
            [
                ("Significantly decreased desire", 0),
                ("Decreased desire", 0),
                ("No change in desire", 1),
                ("Increased desire", 1),
                ("Significantly increased desire", 1),
            ]
        );

        let no = comparison.get("No").unwrap();
        assert_eq!(no.n, 2);
        assert!((no.mean + 0.5).abs() < 1e-12);
        assert!((no.share(1) - 0.5).abs() < 1e-12);

        let diff = comparison.mean_difference("Yes", "No").unwrap();
        assert!((diff - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_mean_difference_needs_both_groups() {
        let records = vec![record("Yes", "Increased desire")];
        let refs = records.iter().collect::<Vec<_>>();
        let comparison = GroupComparison::summarize(&refs, "Q53", &PRIMARY_OUTCOME);
        assert_eq!(comparison.mean_difference("Yes", "No"), None);
    }

    #[test]
    fn test_unrecognized_outcome_is_skipped() {
        let records = vec![record("Yes", "Increased"), record("Yes", "Increased desire")];
        let refs = records.iter().collect::<Vec<_>>();
        let comparison = GroupComparison::summarize(&refs, "Q53", &PRIMARY_OUTCOME);
        assert_eq!(comparison.get("Yes").unwrap().n, 1);
    }
}
