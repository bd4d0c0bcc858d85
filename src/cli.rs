use crate::demo::{run_demo, DemoArgs};
use crate::render::{render_section, Section};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use portfolio_analytics::analytics::{FixedClock, PortfolioAnalytics};
use portfolio_analytics::config::{AppConfig, ReportFormat};
use portfolio_analytics::error::AppError;
use portfolio_analytics::{input, telemetry};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "portfolio-analytics",
    about = "Summarize experience, skills, and a composite performance score for a portfolio",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze the bundled sample portfolio (default command)
    Demo(DemoArgs),
    /// Analyze a portfolio JSON file
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Path to the portfolio JSON document
    #[arg(long)]
    input: PathBuf,
    /// Section of the analysis to print
    #[arg(long, value_enum, default_value_t = Section::Summary)]
    section: Section,
    #[command(flatten)]
    report: ReportArgs,
}

/// Flags shared by every reporting command.
#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Evaluate in-progress roles as of this date (YYYY-MM-DD, defaults to now)
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Output format; overrides PORTFOLIO_REPORT_FORMAT
    #[arg(long, value_enum)]
    pub(crate) format: Option<ReportFormat>,
}

impl ReportArgs {
    pub(crate) fn clock(&self) -> FixedClock {
        match self.as_of {
            Some(date) => FixedClock::on(date),
            None => FixedClock::new(Local::now().naive_local()),
        }
    }

    pub(crate) fn format(&self, config: &AppConfig) -> ReportFormat {
        self.format.unwrap_or(config.report.format)
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Demo(args) => run_demo(args, &config),
        Command::Analyze(args) => run_analyze(args, &config),
    }
}

fn run_analyze(args: AnalyzeArgs, config: &AppConfig) -> Result<(), AppError> {
    let AnalyzeArgs {
        input: path,
        section,
        report,
    } = args;

    info!(path = %path.display(), environment = ?config.environment, "analyzing portfolio");
    let record = input::from_path(&path)?;

    let mut analytics = PortfolioAnalytics::with_clock(report.clock());
    analytics.load(record);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render_section(&mut out, &analytics, section, report.format(config))
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
