use super::super::experience::ExperienceMetrics;
use super::super::round_to_tenth;
use super::super::skills::SkillsAnalysis;
use super::scoring::{score_components, ScoreWeights};
use super::views::{ExperienceSummary, PerformanceSummary, SkillsSummary};

pub(crate) fn build_summary(
    experience: &ExperienceMetrics,
    skills: &SkillsAnalysis,
    key_insights: Vec<String>,
    weights: &ScoreWeights,
) -> PerformanceSummary {
    let score_breakdown = score_components(experience, skills, weights);
    let performance_score =
        round_to_tenth(score_breakdown.iter().map(|component| component.weighted).sum());

    PerformanceSummary {
        experience_summary: ExperienceSummary {
            years: experience.total_years,
            roles: experience.total_roles,
            promotions: experience.progression_count,
            growth_rate: experience.career_growth_rate,
        },
        skills_summary: SkillsSummary {
            total_skills: skills.core_skills.total_skills,
            average_proficiency: skills.core_skills.average_proficiency,
            languages: skills.languages.total_languages,
            certifications: skills.certifications_count,
        },
        key_insights,
        performance_score,
        score_breakdown,
    }
}
