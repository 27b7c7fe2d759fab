//! The full cross-sectional analysis over one set of survey responses

use serde::Serialize;
use tracing::info;

use crate::{
    association::Association,
    config::AnalysisConfig,
    filter::{AnalysisSamples, ResponseFilter},
    group::GroupComparison,
    predictor::{
        self, FALLBACK_OUTCOME, PRIMARY_OUTCOME, Predictor, graduate_fallback_predictors,
        graduate_predictors, main_predictors,
    },
    ranking,
    record::ResponseRecord,
};

/// Awareness of the alternative pathway before taking the survey.
pub const AWARENESS_COLUMN: &str = "Q53";

/// Sizes of the three qualifying samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampleSizes {
    pub main: usize,
    pub graduate: usize,
    pub graduate_fallback: usize,
}

/// Associations for one sample, both in registry order and ranked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssociationSet {
    pub all: Vec<Association>,
    pub ranked: Vec<Association>,
}

impl AssociationSet {
    fn compute(
        predictors: &[Predictor],
        records: &[&ResponseRecord],
        outcome: &predictor::Outcome,
        min_sample_size: usize,
    ) -> Self {
        let all = Association::compute_all(predictors, records, outcome);
        let ranked = ranking::rank(&all, min_sample_size);
        Self { all, ranked }
    }

    /// Looks up an association by predictor ID.
    #[must_use]
    pub fn get(&self, predictor_id: &str) -> Option<&Association> {
        self.all.iter().find(|a| a.predictor_id == predictor_id)
    }
}

/// Everything the report needs, computed from in-memory records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyAnalysis {
    pub config: AnalysisConfig,
    pub sample_sizes: SampleSizes,
    pub awareness: GroupComparison,
    pub student_status: GroupComparison,
    pub main: AssociationSet,
    pub graduate: AssociationSet,
    pub graduate_fallback: AssociationSet,
}

impl SurveyAnalysis {
    #[must_use]
    pub fn run(
        records: &[ResponseRecord],
        filter: &ResponseFilter,
        config: &AnalysisConfig,
    ) -> Self {
        let samples =
            AnalysisSamples::select(records, filter, &PRIMARY_OUTCOME, &FALLBACK_OUTCOME);
        let sample_sizes = SampleSizes {
            main: samples.main.len(),
            graduate: samples.graduate.len(),
            graduate_fallback: samples.graduate_fallback.len(),
        };
        info!(
            total = records.len(),
            main = sample_sizes.main,
            graduate = sample_sizes.graduate,
            graduate_fallback = sample_sizes.graduate_fallback,
            "selected analysis samples"
        );

        let awareness =
            GroupComparison::summarize(&samples.main, AWARENESS_COLUMN, &PRIMARY_OUTCOME);
        let student_status =
            GroupComparison::summarize(&samples.main, filter.status_column, &PRIMARY_OUTCOME);

        let main = AssociationSet::compute(
            &main_predictors(),
            &samples.main,
            &PRIMARY_OUTCOME,
            config.main_min_sample_size,
        );
        let graduate = AssociationSet::compute(
            &graduate_predictors(),
            &samples.graduate,
            &PRIMARY_OUTCOME,
            config.graduate_min_sample_size,
        );
        let graduate_fallback = AssociationSet::compute(
            &graduate_fallback_predictors(),
            &samples.graduate_fallback,
            &FALLBACK_OUTCOME,
            config.graduate_min_sample_size,
        );
        info!(
            main = main.ranked.len(),
            graduate = graduate.ranked.len(),
            graduate_fallback = graduate_fallback.ranked.len(),
            "ranked associations"
        );

        Self {
            config: config.clone(),
            sample_sizes,
            awareness,
            student_status,
            main,
            graduate,
            graduate_fallback,
        }
    }

    /// The strongest main-sample associations, at most `top_ranked` of them.
    #[must_use]
    pub fn top_ranked(&self) -> &[Association] {
        let len = self.main.ranked.len().min(self.config.top_ranked);
        &self.main.ranked[..len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictor::COMBINED_EARNINGS;

    fn respondent(
        id: usize,
        status: &'static str,
        aware: &'static str,
        impact: &'static str,
    ) -> ResponseRecord {
        let id = format!("R_{id}");
        [
            ("ResponseId", id.as_str()),
            ("Finished", "True"),
            ("Q61", "Yes"),
            ("Q28", "No"),
            ("Q27", status),
            ("Q53", aware),
            ("Q52", impact),
        ]
        .into_iter()
        .collect()
    }

    fn sample() -> Vec<ResponseRecord> {
        let impacts = [
            "Significantly increased desire",
            "Increased desire",
            "No change in desire",
            "Decreased desire",
        ];
        let mut records = (0..30)
            .map(|i| {
                let aware = if i % 2 == 0 { "Yes" } else { "No" };
                let impact = if aware == "Yes" {
                    impacts[i % 4 / 2]
                } else {
                    impacts[2 + i % 4 / 2]
                };
                respondent(i, "Undergraduate", aware, impact)
            })
            .collect::<Vec<_>>();
        records.push(
            [
                ("ResponseId", "Response ID"),
                ("Finished", "Finished"),
                ("Q52", "How did learning about the pathway impact you?"),
            ]
            .into_iter()
            .collect(),
        );
        records
    }

    #[test]
    fn test_run_on_undergraduate_sample() {
        let records = sample();
        let analysis =
            SurveyAnalysis::run(&records, &ResponseFilter::default(), &AnalysisConfig::default());

        assert_eq!(
            analysis.sample_sizes,
            SampleSizes {
                main: 30,
                graduate: 0,
                graduate_fallback: 0,
            }
        );
        assert!(analysis.student_status.get("Graduate").is_none());
        assert_eq!(analysis.student_status.get("Undergraduate").unwrap().n, 30);

        let diff = analysis.awareness.mean_difference("Yes", "No").unwrap();
        assert!(diff > 0.0);

        let awareness = analysis.main.get("Q53").unwrap();
        assert_eq!(awareness.n, 30);
        assert!(awareness.signed.unwrap() > 0.0);
        assert_eq!(analysis.top_ranked()[0].predictor_id, "Q53");

        assert!(analysis.main.get(COMBINED_EARNINGS).unwrap().strength.is_none());
        assert!(analysis.graduate.ranked.is_empty());
        assert!(analysis.graduate_fallback.ranked.is_empty());
    }

    #[test]
    fn test_top_ranked_is_capped() {
        let records = sample();
        let config = AnalysisConfig {
            top_ranked: 1,
            ..AnalysisConfig::default()
        };
        let analysis = SurveyAnalysis::run(&records, &ResponseFilter::default(), &config);
        assert_eq!(analysis.top_ranked().len(), 1);
    }

    #[test]
    fn test_run_is_deterministic() {
        let records = sample();
        let filter = ResponseFilter::default();
        let config = AnalysisConfig::default();
        assert_eq!(
            SurveyAnalysis::run(&records, &filter, &config),
            SurveyAnalysis::run(&records, &filter, &config)
        );
    }
}
