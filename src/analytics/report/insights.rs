use super::super::experience::ExperienceMetrics;
use super::super::skills::SkillsAnalysis;

const SENIOR_YEARS: f64 = 10.0;
const GROWTH_PROMOTIONS: usize = 3;
const HIGH_PROFICIENCY: f64 = 85.0;
const MULTILINGUAL_LANGUAGES: usize = 3;
const CERTIFIED_COUNT: usize = 3;

pub(crate) fn generate_insights(
    experience: &ExperienceMetrics,
    skills: &SkillsAnalysis,
) -> Vec<String> {
    let mut insights = Vec::new();

    if experience.total_years >= SENIOR_YEARS {
        insights.push("Senior professional with over 10 years of experience".to_string());
    }

    if experience.progression_count >= GROWTH_PROMOTIONS {
        insights.push(format!(
            "Demonstrated career growth with {} promotions",
            experience.progression_count
        ));
    }

    if skills.core_skills.average_proficiency >= HIGH_PROFICIENCY {
        insights.push("High proficiency across core skills".to_string());
    }

    if let Some(top) = skills.top_skill() {
        insights.push(format!(
            "Expert in {} with {}% proficiency",
            top.name, top.level
        ));
    }

    let languages = skills.languages.total_languages;
    if languages >= MULTILINGUAL_LANGUAGES {
        insights.push(format!(
            "Multilingual professional with {languages} languages"
        ));
    }

    if skills.certifications_count >= CERTIFIED_COUNT {
        insights.push(format!(
            "Highly certified with {} professional certifications",
            skills.certifications_count
        ));
    }

    insights
}
