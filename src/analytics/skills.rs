use super::domain::{Language, Skill, SkillTier, SkillsRecord};
use serde::Serialize;

const TOP_SKILL_LIMIT: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillsAnalysis {
    pub core_skills: CoreSkillsAnalysis,
    pub languages: LanguageAnalysis,
    pub certifications_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CoreSkillsAnalysis {
    pub total_skills: usize,
    pub average_proficiency: f64,
    pub top_skills: Vec<Skill>,
    pub skill_categories: SkillCategories,
}

/// Core skill counts per tier; every skill lands in exactly one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SkillCategories {
    pub expert: usize,
    pub advanced: usize,
    pub intermediate: usize,
    pub beginner: usize,
}

impl SkillCategories {
    pub fn count(&self, tier: SkillTier) -> usize {
        match tier {
            SkillTier::Expert => self.expert,
            SkillTier::Advanced => self.advanced,
            SkillTier::Intermediate => self.intermediate,
            SkillTier::Beginner => self.beginner,
        }
    }

    pub fn total(&self) -> usize {
        self.expert + self.advanced + self.intermediate + self.beginner
    }

    fn record(&mut self, tier: SkillTier) {
        match tier {
            SkillTier::Expert => self.expert += 1,
            SkillTier::Advanced => self.advanced += 1,
            SkillTier::Intermediate => self.intermediate += 1,
            SkillTier::Beginner => self.beginner += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LanguageAnalysis {
    pub total_languages: usize,
    pub native_languages: usize,
    pub professional_languages: usize,
}

impl SkillsAnalysis {
    /// Highest-rated core skill, if any core skills exist.
    pub fn top_skill(&self) -> Option<&Skill> {
        self.core_skills.top_skills.first()
    }
}

pub(crate) fn analyze(skills: &SkillsRecord) -> SkillsAnalysis {
    SkillsAnalysis {
        core_skills: analyze_core(&skills.core),
        languages: analyze_languages(&skills.languages),
        certifications_count: skills.certifications.len(),
    }
}

fn analyze_core(core: &[Skill]) -> CoreSkillsAnalysis {
    let average_proficiency = if core.is_empty() {
        0.0
    } else {
        core.iter().map(|skill| f64::from(skill.level)).sum::<f64>() / core.len() as f64
    };

    // `sort_by` is stable, so equal levels keep their input order.
    let mut ranked = core.to_vec();
    ranked.sort_by(|a, b| b.level.cmp(&a.level));
    ranked.truncate(TOP_SKILL_LIMIT);

    let mut skill_categories = SkillCategories::default();
    for skill in core {
        skill_categories.record(SkillTier::from_level(skill.level));
    }

    CoreSkillsAnalysis {
        total_skills: core.len(),
        average_proficiency,
        top_skills: ranked,
        skill_categories,
    }
}

fn analyze_languages(languages: &[Language]) -> LanguageAnalysis {
    LanguageAnalysis {
        total_languages: languages.len(),
        native_languages: languages.iter().filter(|lang| lang.is_native()).count(),
        professional_languages: languages
            .iter()
            .filter(|lang| lang.is_professional())
            .count(),
    }
}
