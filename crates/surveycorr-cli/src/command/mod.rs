use clap::{Parser, Subcommand};

use self::{report::ReportArg, screen::ScreenArg};

mod report;
mod screen;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Analyze the survey export and write the Markdown report
    Report(#[clap(flatten)] ReportArg),
    /// Show how many responses each screening rule removes
    Screen(#[clap(flatten)] ScreenArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Report(ReportArg::default())) {
        Mode::Report(arg) => report::run(&arg)?,
        Mode::Screen(arg) => screen::run(&arg)?,
    }
    Ok(())
}
