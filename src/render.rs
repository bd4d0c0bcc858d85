use portfolio_analytics::analytics::{
    Clock, ExperienceMetrics, PerformanceSummary, PortfolioAnalytics, SkillTier, SkillsAnalysis,
};
use portfolio_analytics::config::ReportFormat;
use portfolio_analytics::error::AppError;
use std::io::Write;

/// Which analysis a command prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub(crate) enum Section {
    #[default]
    Summary,
    Experience,
    Skills,
    Insights,
}

pub(crate) fn render_section<C: Clock, W: Write>(
    out: &mut W,
    analytics: &PortfolioAnalytics<C>,
    section: Section,
    format: ReportFormat,
) -> Result<(), AppError> {
    match (section, format) {
        (Section::Summary, ReportFormat::Json) => {
            write_json(out, &analytics.performance_summary())
        }
        (Section::Experience, ReportFormat::Json) => {
            write_json(out, &analytics.experience_metrics())
        }
        (Section::Skills, ReportFormat::Json) => write_json(out, &analytics.skills_distribution()),
        (Section::Insights, ReportFormat::Json) => write_json(out, &analytics.insights()),
        (Section::Summary, ReportFormat::Text) => {
            render_summary(out, &analytics.performance_summary())
        }
        (Section::Experience, ReportFormat::Text) => {
            render_experience(out, &analytics.experience_metrics())
        }
        (Section::Skills, ReportFormat::Text) => {
            render_skills(out, &analytics.skills_distribution())
        }
        (Section::Insights, ReportFormat::Text) => render_insights(out, &analytics.insights()),
    }
}

fn write_json<W: Write, T: serde::Serialize>(out: &mut W, value: &T) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn render_summary<W: Write>(out: &mut W, summary: &PerformanceSummary) -> Result<(), AppError> {
    writeln!(out, "Performance summary")?;
    writeln!(out, "Score: {:.1} / 100", summary.performance_score)?;

    let experience = &summary.experience_summary;
    writeln!(out, "\nExperience")?;
    writeln!(out, "- Years: {:.1}", experience.years)?;
    writeln!(out, "- Roles: {}", experience.roles)?;
    writeln!(out, "- Promotions: {}", experience.promotions)?;
    writeln!(out, "- Growth rate: {:.2} promotions/year", experience.growth_rate)?;

    let skills = &summary.skills_summary;
    writeln!(out, "\nSkills")?;
    writeln!(
        out,
        "- Core skills: {} (average proficiency {:.1})",
        skills.total_skills, skills.average_proficiency
    )?;
    writeln!(out, "- Languages: {}", skills.languages)?;
    writeln!(out, "- Certifications: {}", skills.certifications)?;

    if !summary.score_breakdown.is_empty() {
        writeln!(out, "\nScore breakdown")?;
        for component in &summary.score_breakdown {
            writeln!(
                out,
                "- {}: {:.1} x {:.2} = {:.1} ({})",
                component.factor.label(),
                component.sub_score,
                component.weight,
                component.weighted,
                component.notes
            )?;
        }
    }

    render_insights(out, &summary.key_insights)
}

fn render_experience<W: Write>(out: &mut W, metrics: &ExperienceMetrics) -> Result<(), AppError> {
    writeln!(out, "Experience metrics")?;
    writeln!(out, "- Total years: {:.1}", metrics.total_years)?;
    match &metrics.current_role {
        Some(role) => writeln!(
            out,
            "- Current role: {} at {} ({})",
            role.position, role.company, role.duration
        )?,
        None => writeln!(out, "- Current role: none")?,
    }
    writeln!(out, "- Roles: {}", metrics.total_roles)?;
    writeln!(out, "- Promotions: {}", metrics.progression_count)?;
    writeln!(
        out,
        "- Growth rate: {:.2} promotions/year",
        metrics.career_growth_rate
    )?;
    Ok(())
}

fn render_skills<W: Write>(out: &mut W, analysis: &SkillsAnalysis) -> Result<(), AppError> {
    let core = &analysis.core_skills;
    writeln!(out, "Skills distribution")?;
    writeln!(
        out,
        "- Core skills: {} (average proficiency {:.1})",
        core.total_skills, core.average_proficiency
    )?;

    if !core.top_skills.is_empty() {
        writeln!(out, "\nTop skills")?;
        for skill in &core.top_skills {
            writeln!(out, "- {}: {}%", skill.name, skill.level)?;
        }
    }

    writeln!(out, "\nProficiency tiers")?;
    for tier in SkillTier::ordered() {
        writeln!(
            out,
            "- {}: {}",
            tier.label(),
            core.skill_categories.count(tier)
        )?;
    }

    let languages = &analysis.languages;
    writeln!(out, "\nLanguages")?;
    writeln!(
        out,
        "- {} total, {} native, {} professional",
        languages.total_languages, languages.native_languages, languages.professional_languages
    )?;
    writeln!(out, "\nCertifications: {}", analysis.certifications_count)?;
    Ok(())
}

fn render_insights<W: Write>(out: &mut W, insights: &[String]) -> Result<(), AppError> {
    if insights.is_empty() {
        writeln!(out, "\nKey insights: none")?;
        return Ok(());
    }

    writeln!(out, "\nKey insights")?;
    for insight in insights {
        writeln!(out, "- {insight}")?;
    }
    Ok(())
}
