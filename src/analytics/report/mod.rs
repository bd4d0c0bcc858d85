mod insights;
mod scoring;
mod summary;
pub mod views;

pub use scoring::{ScoreComponent, ScoreFactor, ScoreWeights};
pub use views::PerformanceSummary;

pub(crate) use insights::generate_insights;
pub(crate) use summary::build_summary;
