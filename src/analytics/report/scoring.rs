use super::super::experience::ExperienceMetrics;
use super::super::skills::SkillsAnalysis;
use serde::{Deserialize, Serialize};

const SUB_SCORE_CAP: f64 = 100.0;

/// Relative weight of each factor in the composite performance score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub experience: f64,
    pub skills: f64,
    pub languages: f64,
    pub growth: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            experience: 0.40,
            skills: 0.35,
            languages: 0.15,
            growth: 0.10,
        }
    }
}

impl ScoreWeights {
    pub fn weight(&self, factor: ScoreFactor) -> f64 {
        match factor {
            ScoreFactor::Experience => self.experience,
            ScoreFactor::Skills => self.skills,
            ScoreFactor::Languages => self.languages,
            ScoreFactor::Growth => self.growth,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Experience,
    Skills,
    Languages,
    Growth,
}

impl ScoreFactor {
    pub const fn ordered() -> [Self; 4] {
        [Self::Experience, Self::Skills, Self::Languages, Self::Growth]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Experience => "Experience",
            Self::Skills => "Skills",
            Self::Languages => "Languages",
            Self::Growth => "Career Growth",
        }
    }
}

/// One factor's contribution to the composite score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub sub_score: f64,
    pub weight: f64,
    pub weighted: f64,
    pub notes: String,
}

pub(crate) fn score_components(
    experience: &ExperienceMetrics,
    skills: &SkillsAnalysis,
    weights: &ScoreWeights,
) -> Vec<ScoreComponent> {
    ScoreFactor::ordered()
        .into_iter()
        .map(|factor| {
            let (raw, notes) = raw_sub_score(factor, experience, skills);
            let sub_score = raw.clamp(0.0, SUB_SCORE_CAP);
            let weight = weights.weight(factor);
            ScoreComponent {
                factor,
                sub_score,
                weight,
                weighted: sub_score * weight,
                notes,
            }
        })
        .collect()
}

fn raw_sub_score(
    factor: ScoreFactor,
    experience: &ExperienceMetrics,
    skills: &SkillsAnalysis,
) -> (f64, String) {
    match factor {
        ScoreFactor::Experience => {
            let years = experience.total_years;
            let promotions = experience.progression_count;
            (
                years * 5.0 + promotions as f64 * 10.0,
                format!("{years:.1} years and {promotions} promotion(s)"),
            )
        }
        ScoreFactor::Skills => {
            let average = skills.core_skills.average_proficiency;
            let certifications = skills.certifications_count;
            (
                average + certifications as f64 * 5.0,
                format!("{average:.1} average proficiency and {certifications} certification(s)"),
            )
        }
        ScoreFactor::Languages => {
            let languages = skills.languages.total_languages;
            (
                languages as f64 * 25.0,
                format!("{languages} language(s)"),
            )
        }
        ScoreFactor::Growth => {
            let rate = experience.career_growth_rate;
            (
                rate * 50.0,
                format!("{rate:.2} promotions per year"),
            )
        }
    }
}
