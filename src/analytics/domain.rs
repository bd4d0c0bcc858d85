use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Portfolio document analyzed by the engine. Absent sections deserialize empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioRecord {
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub skills: SkillsRecord,
}

/// One role held at a company, with its textual `"<Month> <Year> - <Month> <Year>"` range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub progression: Vec<ProgressionStep>,
}

impl ExperienceEntry {
    /// Text before the `" - "` separator, or the whole duration when absent.
    pub fn start_text(&self) -> &str {
        match self.duration.split_once(RANGE_SEPARATOR) {
            Some((start, _)) => start,
            None => &self.duration,
        }
    }

    pub fn range(&self) -> Option<(&str, &str)> {
        self.duration.split_once(RANGE_SEPARATOR)
    }
}

/// A promotion or role change inside one employer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressionStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProgressionStep {
    pub fn range(&self) -> Option<(&str, &str)> {
        self.period.as_deref()?.split_once(RANGE_SEPARATOR)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillsRecord {
    #[serde(default)]
    pub core: Vec<Skill>,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

/// Named competency with a 0-100 proficiency level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: u32,
}

/// Spoken language; the name carries the fluency, e.g. `"Hindi (Native)"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: u32,
}

impl Language {
    pub fn is_native(&self) -> bool {
        self.name.contains("Native")
    }

    pub fn is_professional(&self) -> bool {
        self.name.contains("Professional")
    }
}

/// Proficiency bands used to bucket core skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillTier {
    Expert,
    Advanced,
    Intermediate,
    Beginner,
}

impl SkillTier {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Expert,
            Self::Advanced,
            Self::Intermediate,
            Self::Beginner,
        ]
    }

    pub const fn from_level(level: u32) -> Self {
        match level {
            90..=u32::MAX => Self::Expert,
            70..=89 => Self::Advanced,
            50..=69 => Self::Intermediate,
            _ => Self::Beginner,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Expert => "Expert",
            Self::Advanced => "Advanced",
            Self::Intermediate => "Intermediate",
            Self::Beginner => "Beginner",
        }
    }
}

pub(crate) const RANGE_SEPARATOR: &str = " - ";
