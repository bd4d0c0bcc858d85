mod clock;
pub mod dates;
pub mod domain;
mod experience;
pub mod report;
mod skills;

pub use clock::{Clock, FixedClock, SystemClock};
pub use domain::{
    ExperienceEntry, Language, PortfolioRecord, ProgressionStep, Skill, SkillTier, SkillsRecord,
};
pub use experience::ExperienceMetrics;
pub use report::views::{ExperienceSummary, SkillsSummary};
pub use report::{PerformanceSummary, ScoreComponent, ScoreFactor, ScoreWeights};
pub use skills::{CoreSkillsAnalysis, LanguageAnalysis, SkillCategories, SkillsAnalysis};

use tracing::info;

/// Analytics session over one loaded portfolio record.
///
/// Every operation recomputes from the stored record and returns the type's
/// default when nothing has been loaded yet. None of them fail: malformed
/// dates only drop the affected entry from the aggregates.
#[derive(Debug, Clone)]
pub struct PortfolioAnalytics<C = SystemClock> {
    record: Option<PortfolioRecord>,
    clock: C,
    weights: ScoreWeights,
}

impl PortfolioAnalytics<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for PortfolioAnalytics<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> PortfolioAnalytics<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            record: None,
            clock,
            weights: ScoreWeights::default(),
        }
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Replaces any previously loaded record.
    pub fn load(&mut self, record: PortfolioRecord) {
        info!(
            roles = record.experience.len(),
            core_skills = record.skills.core.len(),
            "portfolio record loaded"
        );
        self.record = Some(record);
    }

    pub fn clear(&mut self) {
        self.record = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.record.is_some()
    }

    pub fn record(&self) -> Option<&PortfolioRecord> {
        self.record.as_ref()
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    pub fn experience_metrics(&self) -> ExperienceMetrics {
        match &self.record {
            Some(record) => experience::compute_metrics(&record.experience, self.clock.now()),
            None => ExperienceMetrics::default(),
        }
    }

    pub fn skills_distribution(&self) -> SkillsAnalysis {
        match &self.record {
            Some(record) => skills::analyze(&record.skills),
            None => SkillsAnalysis::default(),
        }
    }

    pub fn insights(&self) -> Vec<String> {
        if self.record.is_none() {
            return Vec::new();
        }
        report::generate_insights(&self.experience_metrics(), &self.skills_distribution())
    }

    pub fn performance_summary(&self) -> PerformanceSummary {
        if self.record.is_none() {
            return PerformanceSummary::default();
        }

        let experience = self.experience_metrics();
        let skills = self.skills_distribution();
        let insights = report::generate_insights(&experience, &skills);
        report::build_summary(&experience, &skills, insights, &self.weights)
    }
}

/// One decimal place, ties to even.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
