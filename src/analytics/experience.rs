use super::dates::{MonthStyle, MonthYear, MonthYearError};
use super::domain::{ExperienceEntry, ProgressionStep};
use super::round_to_tenth;
use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExperienceMetrics {
    pub total_years: f64,
    pub current_role: Option<ExperienceEntry>,
    pub total_roles: usize,
    pub progression_count: usize,
    pub career_growth_rate: f64,
}

pub(crate) fn compute_metrics(
    experience: &[ExperienceEntry],
    now: NaiveDateTime,
) -> ExperienceMetrics {
    let mut total_years = 0.0;
    let mut current_role = None;

    for entry in experience {
        if entry.current {
            current_role = Some(entry);
        }

        match entry_years(entry, now) {
            Ok(Some(years)) => total_years += years.max(0.0),
            Ok(None) => {
                debug!(
                    company = %entry.company,
                    duration = %entry.duration,
                    "duration has no range separator; skipping"
                );
            }
            Err(err) => {
                debug!(
                    company = %entry.company,
                    duration = %entry.duration,
                    error = %err,
                    "unparseable duration; skipping"
                );
            }
        }
    }

    let progression = experience
        .iter()
        .find(|entry| !entry.progression.is_empty())
        .map(|entry| entry.progression.as_slice())
        .unwrap_or_default();

    ExperienceMetrics {
        total_years: round_to_tenth(total_years),
        current_role: current_role.cloned(),
        total_roles: experience.len(),
        progression_count: progression.len(),
        career_growth_rate: growth_rate(progression),
    }
}

/// Years covered by one entry. `Ok(None)` when a completed role carries no range.
fn entry_years(
    entry: &ExperienceEntry,
    now: NaiveDateTime,
) -> Result<Option<f64>, MonthYearError> {
    if entry.current {
        let start = MonthYear::parse(entry.start_text(), MonthStyle::Full)?;
        return Ok(Some(start.years_until_moment(now)));
    }

    let Some((start, end)) = entry.range() else {
        return Ok(None);
    };
    let start = MonthYear::parse(start, MonthStyle::Full)?;
    let end = MonthYear::parse(end, MonthStyle::Full)?;
    Ok(Some(start.years_until(end)))
}

/// Promotions per year between the first step's start and the last step's end.
pub(crate) fn growth_rate(progression: &[ProgressionStep]) -> f64 {
    if progression.len() < 2 {
        return 0.0;
    }

    match progression_span(progression) {
        Some(years) if years > 0.0 => progression.len() as f64 / years,
        _ => 0.0,
    }
}

fn progression_span(progression: &[ProgressionStep]) -> Option<f64> {
    let (first, last) = (progression.first()?, progression.last()?);
    let (start, _) = first.range()?;
    let (_, end) = last.range()?;

    let parsed = MonthYear::parse(start, MonthStyle::Abbreviated).and_then(|start| {
        MonthYear::parse(end, MonthStyle::Abbreviated).map(|end| (start, end))
    });

    match parsed {
        Ok((start, end)) => Some(start.years_until(end)),
        Err(err) => {
            debug!(error = %err, "unparseable progression period; growth rate is zero");
            None
        }
    }
}
