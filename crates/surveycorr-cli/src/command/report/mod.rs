//! Report command
//!
//! Loads the survey export, runs the cross-sectional analysis, and writes the
//! Markdown report (plus, optionally, every association as JSON).

mod markdown;

use std::path::PathBuf;

use clap::Args;
use surveycorr_analysis::{
    config::AnalysisConfig, filter::ResponseFilter, survey::SurveyAnalysis,
};
use tracing::info;

use crate::util::{self, Output};

use self::markdown::MarkdownReport;

pub(crate) const DEFAULT_INPUT: &str = "Alternative CPA Pathways Survey_December 31, 2025_09.45.csv";
pub(crate) const DEFAULT_OUTPUT: &str = "RQ2_cross_sectional_report.md";

#[derive(Debug, Clone, Args)]
pub(crate) struct ReportArg {
    /// Path to the survey export CSV
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// Path to write the Markdown report to
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// JSON file overriding the analysis thresholds
    #[arg(long)]
    config: Option<PathBuf>,
    /// Also write all association results as JSON to this path
    #[arg(long)]
    json_output: Option<PathBuf>,
}

impl Default for ReportArg {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            config: None,
            json_output: None,
        }
    }
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let ReportArg {
        input,
        output,
        config,
        json_output,
    } = arg;

    let config = match config {
        Some(path) => util::read_config_file(path)?,
        None => AnalysisConfig::default(),
    };
    let records = util::read_survey_csv(input)?;
    let analysis = SurveyAnalysis::run(&records, &ResponseFilter::default(), &config);

    let report = MarkdownReport::new(&analysis).to_string();
    Output::open(output.clone())?.write_text(&report)?;
    info!(path = %output.display(), "wrote report");

    if let Some(path) = json_output {
        Output::save_json(&analysis, Some(path.clone()))?;
        info!(path = %path.display(), "wrote association results");
    }

    println!(
        "Wrote {} with {} analysis rows.",
        output.display(),
        analysis.sample_sizes.main
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const SURVEY: &str = "\
ResponseId,Finished,Q61,Q28,Q27,Q53,Q52
Response ID,Finished,Consent,Duplicate,Status,Aware,Impact
R_1,True,Yes,No,Undergraduate,Yes,Increased desire
R_2,True,Yes,No,Undergraduate,No,Decreased desire
R_3,False,Yes,No,Undergraduate,No,Decreased desire
";

    #[test]
    fn test_run_writes_report_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("survey.csv");
        let output = dir.path().join("report.md");
        let json_output = dir.path().join("associations.json");
        fs::write(&input, SURVEY).unwrap();

        let arg = ReportArg {
            input,
            output: output.clone(),
            config: None,
            json_output: Some(json_output.clone()),
        };
        run(&arg).unwrap();

        let report = fs::read_to_string(&output).unwrap();
        assert!(report.starts_with("# RQ2 Cross-Sectional Analysis"));
        assert!(report.contains("- Analysis sample: 2 completed"));
        assert!(report.contains("- Difference in means (Aware Yes - No): **2.000**."));

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&json_output).unwrap()).unwrap();
        assert_eq!(json["sample_sizes"]["main"], 2);
        assert_eq!(json["config"]["top_ranked"], 15);
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.md");
        let arg = ReportArg {
            input: dir.path().join("missing.csv"),
            output: output.clone(),
            ..ReportArg::default()
        };
        assert!(run(&arg).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_default_paths() {
        let arg = ReportArg::default();
        assert_eq!(arg.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(arg.output, PathBuf::from(DEFAULT_OUTPUT));
    }
}
