//! Markdown rendering of a [`SurveyAnalysis`]
//!
//! [`MarkdownReport`] implements `Display`, so the whole document is built in
//! memory and written to disk in one call.

use std::fmt;

use surveycorr_analysis::{
    association::{Association, Direction},
    group::{GroupComparison, GroupSummary},
    predictor::{PredictorGroup, ROI_FOCUS},
    ranking,
    survey::SurveyAnalysis,
};

const TITLE: &str = "RQ2 Cross-Sectional Analysis: Factors Associated with Self-Reported Impact on Desire to Pursue a Graduate Degree";

pub(crate) struct MarkdownReport<'a> {
    analysis: &'a SurveyAnalysis,
}

impl<'a> MarkdownReport<'a> {
    pub(crate) fn new(analysis: &'a SurveyAnalysis) -> Self {
        Self { analysis }
    }
}

impl fmt::Display for MarkdownReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.analysis;
        writeln!(f, "# {TITLE}")?;
        writeln!(f)?;
        write_scope(f, analysis.sample_sizes.main)?;
        write_outcome(f)?;
        writeln!(f, "## Required group comparisons")?;
        writeln!(f)?;
        write_awareness(f, &analysis.awareness)?;
        write_student_status(f, &analysis.student_status)?;
        write_overall_ranking(f, analysis.top_ranked())?;
        write_focus_sections(f, &analysis.main.all)?;
        write_graduate_sections(f, analysis)?;
        Ok(())
    }
}

fn write_scope(f: &mut fmt::Formatter<'_>, main_sample: usize) -> fmt::Result {
    writeln!(f, "## Scope and interpretation guardrails")?;
    writeln!(
        f,
        "- This is a **one-time cross-sectional survey**; results are described as factors **associated with / linked to / predictive of / correlated with** the outcome, not causal effects."
    )?;
    writeln!(
        f,
        "- The outcome uses respondents' wording of how the pathway **\"impacted\"** desire; this analysis treats that as **self-reported perceived impact**."
    )?;
    writeln!(
        f,
        "- Analysis sample: {main_sample} completed, consented, non-duplicate responses with non-missing outcome."
    )?;
    writeln!(f)
}

fn write_outcome(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "## Outcome variable")?;
    writeln!(
        f,
        "Outcome question: *How has the availability of (or knowledge about) the alternative pathway to CPA licensure impacted your desire to pursue a graduate degree (MAcc or MBA)?*"
    )?;
    writeln!(f)?;
    writeln!(
        f,
        "Outcome coding (for association metrics only): significantly decreased = -2, decreased = -1, no change = 0, increased = +1, significantly increased = +2."
    )?;
    writeln!(f)
}

fn write_awareness(f: &mut fmt::Formatter<'_>, awareness: &GroupComparison) -> fmt::Result {
    writeln!(f, "### Awareness before survey (Q53)")?;
    write_group_lines(f, awareness)?;
    if let Some(diff) = awareness.mean_difference("Yes", "No") {
        writeln!(f, "- Difference in means (Aware Yes - No): **{diff:.3}**.")?;
    }
    writeln!(f)
}

fn write_student_status(f: &mut fmt::Formatter<'_>, status: &GroupComparison) -> fmt::Result {
    writeln!(f, "### Undergraduate vs graduate status (Q27)")?;
    write_group_lines(f, status)?;
    if status.get("Graduate").is_none() {
        writeln!(
            f,
            "- **Data limitation:** no graduate respondents had non-missing data on the main outcome (Q52), likely due survey skip logic. Direct undergrad-vs-grad comparison on the exact outcome is therefore not estimable."
        )?;
    }
    writeln!(f)
}

fn write_group_lines(f: &mut fmt::Formatter<'_>, comparison: &GroupComparison) -> fmt::Result {
    for (label, summary) in &comparison.groups {
        writeln!(
            f,
            "- **{label}** (n={}): mean perceived-impact score = {:.3}. {}.",
            summary.n,
            summary.mean,
            distribution_text(summary)
        )?;
    }
    Ok(())
}

/// Nonzero outcome counts in scale order, e.g. `Increased desire: 3 (60.0%)`.
fn distribution_text(summary: &GroupSummary) -> String {
    summary
        .distribution
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|&(label, count)| {
            format!("{label}: {count} ({:.1}%)", summary.share(count) * 100.0)
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn write_overall_ranking(f: &mut fmt::Formatter<'_>, ranked: &[Association]) -> fmt::Result {
    writeln!(f, "## Overall ranked associations with the outcome")?;
    writeln!(
        f,
        "Metric shown = absolute association strength (|r| for ordinal/binary predictors, eta for nominal predictors). Sign indicates direction only when ordinal/binary coding is available."
    )?;
    writeln!(f)?;
    writeln!(f, "| Rank | Predictor | Type | n | Strength | Direction |")?;
    writeln!(f, "|---:|---|---|---:|---:|---|")?;
    for (rank, association) in (1..).zip(ranked) {
        let direction = association
            .direction()
            .map_or_else(|| "NA".to_owned(), |d| d.to_string());
        writeln!(
            f,
            "| {rank} | {} | {} | {} | {} | {direction} |",
            association.label,
            association.kind,
            association.n,
            Strength(association.strength),
        )?;
    }
    writeln!(f)?;

    writeln!(f, "### Key reading of strongest links")?;
    writeln!(
        f,
        "- Positive direction means higher predictor values align with reporting a higher (more increased) perceived impact on desire to pursue graduate school."
    )?;
    writeln!(
        f,
        "- Negative direction means higher predictor values align with reporting lower (more decreased) perceived impact."
    )?;
    writeln!(
        f,
        "- Direct item availability note: this dataset does not include a single explicit Likert item for \"graduate school is not worth the cost/time\" or a direct standalone item phrased as \"alternative pathway makes graduate school less necessary\"; nearest available indicators are ROI beliefs and the main outcome itself."
    )?;
    writeln!(f)
}

fn write_focus_sections(f: &mut fmt::Formatter<'_>, associations: &[Association]) -> fmt::Result {
    writeln!(f, "## Focus sections requested")?;

    writeln!(f, "### ROI belief items")?;
    for id in ROI_FOCUS {
        let Some(association) = associations
            .iter()
            .find(|a| a.predictor_id == id && a.strength.is_some())
        else {
            continue;
        };
        write_focus_line(f, association)?;
    }
    writeln!(f)?;

    writeln!(f, "### Graduate program quality importance items")?;
    let mut importance = associations
        .iter()
        .filter(|a| a.group == PredictorGroup::Importance && a.strength.is_some())
        .cloned()
        .collect::<Vec<_>>();
    ranking::sort_by_strength(&mut importance);
    for association in &importance {
        write_focus_line(f, association)?;
    }
    writeln!(f)
}

fn write_focus_line(f: &mut fmt::Formatter<'_>, association: &Association) -> fmt::Result {
    writeln!(
        f,
        "- {}: strength={}, direction={}, n={}.",
        association.label,
        Strength(association.strength),
        signed_direction(association),
        association.n
    )
}

fn write_graduate_sections(f: &mut fmt::Formatter<'_>, analysis: &SurveyAnalysis) -> fmt::Result {
    writeln!(f, "## Graduate-student-only version (recommended)")?;
    writeln!(
        f,
        "Using the exact main outcome (Q52), graduate-only sample is n={}.",
        analysis.sample_sizes.graduate
    )?;
    writeln!(f)?;
    write_graduate_table(f, &analysis.graduate.ranked)?;
    writeln!(f)?;

    writeln!(f, "### Graduate-only fallback outcome (Q35)")?;
    writeln!(
        f,
        "Because Q52 is missing for graduate respondents, this fallback uses graduate-only question Q35: *how likely they would have been to pursue a graduate degree if they had known about the alternative pathway before beginning*."
    )?;
    writeln!(
        f,
        "Grad fallback sample (Q35) n={}.",
        analysis.sample_sizes.graduate_fallback
    )?;
    writeln!(f)?;
    write_graduate_table(f, &analysis.graduate_fallback.ranked)?;
    writeln!(f)?;

    writeln!(f, "### Graduate-only interpretation highlights")?;
    writeln!(
        f,
        "- Treat estimates as descriptive associations only due to cross-sectional design and small grad-only sample size."
    )?;
    writeln!(
        f,
        "- Program-type/modality results are exploratory because nearly all grad respondents are in MAcc and mostly/fully online formats."
    )
}

fn write_graduate_table(f: &mut fmt::Formatter<'_>, ranked: &[Association]) -> fmt::Result {
    writeln!(f, "| Rank | Predictor | n | Strength | Direction |")?;
    writeln!(f, "|---:|---|---:|---:|---|")?;
    for (rank, association) in (1..).zip(ranked) {
        writeln!(
            f,
            "| {rank} | {} | {} | {} | {} |",
            association.label,
            association.n,
            Strength(association.strength),
            signed_direction(association),
        )?;
    }
    Ok(())
}

/// Direction where an undefined sign reads as `Negative`.
fn signed_direction(association: &Association) -> Direction {
    association.direction().unwrap_or(Direction::Negative)
}

/// Three decimals, or `NA` when undefined.
struct Strength(Option<f64>);

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value:.3}"),
            None => f.write_str("NA"),
        }
    }
}

#[cfg(test)]
mod tests {
    use surveycorr_analysis::{
        config::AnalysisConfig, filter::ResponseFilter, record::ResponseRecord,
    };

    use super::*;

    fn respondent(id: usize, pairs: &[(&'static str, &'static str)]) -> ResponseRecord {
        let id = format!("R_{id}");
        let mut record = vec![
            ("ResponseId", id.as_str()),
            ("Finished", "True"),
            ("Q61", "Yes"),
            ("Q28", "No"),
        ];
        record.extend_from_slice(pairs);
        record.into_iter().collect()
    }

    fn records() -> Vec<ResponseRecord> {
        let mut records = (0..24)
            .map(|i| {
                let (aware, impact, ladder) = match i % 3 {
                    0 => ("Yes", "Increased desire", "Somewhat agree"),
                    1 => ("Yes", "Significantly increased desire", "Strongly agree"),
                    _ => ("No", "No change in desire", "Somewhat disagree"),
                };
                respondent(
                    i,
                    &[
                        ("Q27", "Undergraduate"),
                        ("Q53", aware),
                        ("Q52", impact),
                        ("Q33", ladder),
                        ("Q39_1", "Very important"),
                    ],
                )
            })
            .collect::<Vec<_>>();
        records.extend((100..110).map(|i| {
            let (likely, satisfied) = if i % 2 == 0 {
                ("Extremely likely", "Extremely satisfied")
            } else {
                ("Somewhat unlikely", "Somewhat dissatisfied")
            };
            respondent(
                i,
                &[("Q27", "Graduate"), ("Q35", likely), ("Q37", satisfied)],
            )
        }));
        records
    }

    fn render() -> String {
        let analysis = SurveyAnalysis::run(
            &records(),
            &ResponseFilter::default(),
            &AnalysisConfig::default(),
        );
        MarkdownReport::new(&analysis).to_string()
    }

    #[test]
    fn test_sections_in_order() {
        let report = render();
        let headings = report
            .lines()
            .filter(|line| line.starts_with('#'))
            .collect::<Vec<_>>();
        assert_eq!(
            headings,
            [
                format!("# {TITLE}").as_str(),
                "## Scope and interpretation guardrails",
                "## Outcome variable",
                "## Required group comparisons",
                "### Awareness before survey (Q53)",
                "### Undergraduate vs graduate status (Q27)",
                "## Overall ranked associations with the outcome",
                "### Key reading of strongest links",
                "## Focus sections requested",
                "### ROI belief items",
                "### Graduate program quality importance items",
                "## Graduate-student-only version (recommended)",
                "### Graduate-only fallback outcome (Q35)",
                "### Graduate-only interpretation highlights",
            ]
        );
    }

    #[test]
    fn test_group_lines_and_limitation() {
        let report = render();
        assert!(report.contains(
            "- Analysis sample: 24 completed, consented, non-duplicate responses with non-missing outcome."
        ));
        assert!(report.contains(
            "- **No** (n=8): mean perceived-impact score = 0.000. No change in desire: 8 (100.0%)."
        ));
        assert!(report.contains(
            "- **Yes** (n=16): mean perceived-impact score = 1.500. Increased desire: 8 (50.0%); Significantly increased desire: 8 (50.0%)."
        ));
        assert!(report.contains("- Difference in means (Aware Yes - No): **1.500**."));
        assert!(report.contains("- **Data limitation:** no graduate respondents"));
        assert!(report.contains("graduate-only sample is n=0."));
        assert!(report.contains("Grad fallback sample (Q35) n=10."));
    }

    #[test]
    fn test_tables_and_focus_lines() {
        let report = render();
        assert!(report.contains(
            "| 1 | Agree grad degree helps move up career ladder faster | ordinal/binary | 24 | 0.982 | Positive |"
        ));
        assert!(report.contains(
            "| 2 | Aware of alternative pathway before survey | ordinal/binary | 24 | 0.866 | Positive |"
        ));
        assert!(report.contains(
            "- Agree grad degree helps move up career ladder faster: strength=0.982, direction=Positive, n=24."
        ));
        // constant predictor: strength undefined, so the item is not listed
        assert!(!report.contains("- Importance: CPA exam preparation:"));
        assert!(report.contains(
            "| 1 | Satisfaction with pursuing graduate degree | 10 | 1.000 | Positive |"
        ));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        assert_eq!(render(), render());
    }

    #[test]
    fn test_strength_format() {
        assert_eq!(Strength(Some(0.123_456)).to_string(), "0.123");
        assert_eq!(Strength(None).to_string(), "NA");
    }
}
