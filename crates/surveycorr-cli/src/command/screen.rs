//! Screening command
//!
//! Prints how many responses each screening rule removed and the size of each
//! analysis sample, without running the analysis.

use std::{io::Write, path::PathBuf};

use anyhow::Context;
use clap::Args;
use surveycorr_analysis::{
    filter::{Exclusion, ResponseFilter, ScreeningReport},
    predictor::{FALLBACK_OUTCOME, PRIMARY_OUTCOME},
};

use crate::{
    command::report::DEFAULT_INPUT,
    util::{self, Output},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct ScreenArg {
    /// Path to the survey export CSV
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,
}

pub(crate) fn run(arg: &ScreenArg) -> anyhow::Result<()> {
    let records = util::read_survey_csv(&arg.input)?;
    let report = ScreeningReport::from_records(
        &records,
        &ResponseFilter::default(),
        &PRIMARY_OUTCOME,
        &FALLBACK_OUTCOME,
    );

    let mut output = Output::stdout();
    write_table(&mut output, &report)
        .with_context(|| format!("Failed to write to {}", output.display_path()))?;
    output.flush()?;
    Ok(())
}

fn write_table<W>(out: &mut W, report: &ScreeningReport) -> std::io::Result<()>
where
    W: Write,
{
    writeln!(out, "Screening Report")?;
    writeln!(out, "================")?;
    writeln!(out)?;
    writeln!(out, "  {:<28} {:>8}", "Rule", "Records")?;
    // label(28) + count(8) + space(1)
    writeln!(out, "  {}", "-".repeat(37))?;
    writeln!(out, "  {:<28} {:>8}", "Total rows", report.total)?;
    for exclusion in Exclusion::ALL {
        let label = format!("Excluded: {exclusion}");
        writeln!(out, "  {label:<28} {:>8}", report.excluded(exclusion))?;
    }
    writeln!(out)?;
    writeln!(out, "  {:<28} {:>8}", "Main sample", report.main)?;
    writeln!(out, "  {:<28} {:>8}", "Graduate sample", report.graduate)?;
    writeln!(
        out,
        "  {:<28} {:>8}",
        "Graduate fallback sample", report.graduate_fallback
    )?;
    Ok(())
}
