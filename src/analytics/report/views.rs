use super::scoring::ScoreComponent;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExperienceSummary {
    pub years: f64,
    pub roles: usize,
    pub promotions: usize,
    pub growth_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillsSummary {
    pub total_skills: usize,
    pub average_proficiency: f64,
    pub languages: usize,
    pub certifications: usize,
}

/// Combined report: condensed metrics, insights, and the 0-100 composite score.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PerformanceSummary {
    pub experience_summary: ExperienceSummary,
    pub skills_summary: SkillsSummary,
    pub key_insights: Vec<String>,
    pub performance_score: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub score_breakdown: Vec<ScoreComponent>,
}
