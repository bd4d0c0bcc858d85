use crate::cli::ReportArgs;
use crate::render::{render_section, Section};
use clap::Args;
use portfolio_analytics::analytics::{Clock, PortfolioAnalytics, PortfolioRecord};
use portfolio_analytics::config::{AppConfig, ReportFormat};
use portfolio_analytics::error::AppError;
use portfolio_analytics::input::{self, PortfolioInputError};
use std::io::Write;

const SAMPLE_PORTFOLIO: &str = include_str!("../data/sample_portfolio.json");

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Section of the analysis to print
    #[arg(long, value_enum, default_value_t = Section::Summary)]
    pub(crate) section: Section,
    #[command(flatten)]
    pub(crate) report: ReportArgs,
}

pub(crate) fn sample_record() -> Result<PortfolioRecord, PortfolioInputError> {
    input::from_reader(SAMPLE_PORTFOLIO.as_bytes())
}

pub(crate) fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    let clock = args.report.clock();
    let format = args.report.format(config);
    let mut analytics = PortfolioAnalytics::with_clock(clock);
    analytics.load(sample_record()?);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if format == ReportFormat::Text {
        writeln!(out, "Portfolio analytics demo (sample portfolio)")?;
        writeln!(out, "Evaluated as of {}\n", clock.now().date())?;
    }
    render_section(&mut out, &analytics, args.section, format)
}
