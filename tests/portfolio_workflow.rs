use chrono::NaiveDate;
use portfolio_analytics::analytics::{
    ExperienceEntry, ExperienceMetrics, FixedClock, Language, PortfolioAnalytics, PortfolioRecord,
    ProgressionStep, ScoreFactor, Skill, SkillsRecord,
};
use portfolio_analytics::input;

const SAMPLE_PORTFOLIO: &str = include_str!("../data/sample_portfolio.json");

fn analytics_as_of(year: i32, month: u32, day: u32) -> PortfolioAnalytics<FixedClock> {
    let today = NaiveDate::from_ymd_opt(year, month, day).expect("valid evaluation date");
    PortfolioAnalytics::with_clock(FixedClock::on(today))
}

fn sample_record() -> PortfolioRecord {
    input::from_reader(SAMPLE_PORTFOLIO.as_bytes()).expect("sample portfolio parses")
}

fn role(company: &str, duration: &str, current: bool) -> ExperienceEntry {
    ExperienceEntry {
        company: company.to_string(),
        position: "Product Manager".to_string(),
        duration: duration.to_string(),
        current,
        ..Default::default()
    }
}

fn skill(name: &str, level: u32) -> Skill {
    Skill {
        name: name.to_string(),
        level,
    }
}

fn language(name: &str) -> Language {
    Language {
        name: name.to_string(),
        level: 90,
    }
}

#[test]
fn sample_portfolio_produces_full_summary() {
    let mut analytics = analytics_as_of(2024, 8, 1);
    analytics.load(sample_record());

    let metrics = analytics.experience_metrics();
    assert_eq!(metrics.total_years, 9.5);
    assert_eq!(metrics.total_roles, 4);
    assert_eq!(metrics.progression_count, 5);
    // Progression is listed newest first, so the measured span is negative.
    assert_eq!(metrics.career_growth_rate, 0.0);
    let current = metrics.current_role.expect("current role present");
    assert_eq!(current.company, "Lendingkart");
    assert_eq!(current.position, "Senior Product Manager");

    let skills = analytics.skills_distribution();
    assert_eq!(skills.core_skills.average_proficiency, 90.0);
    let top: Vec<&str> = skills
        .core_skills
        .top_skills
        .iter()
        .map(|skill| skill.name.as_str())
        .collect();
    assert_eq!(top, ["Product Management", "Microsoft Excel", "MySQL"]);
    assert_eq!(skills.certifications_count, 5);

    let summary = analytics.performance_summary();
    assert_eq!(
        summary.key_insights,
        [
            "Demonstrated career growth with 5 promotions",
            "High proficiency across core skills",
            "Expert in Product Management with 95% proficiency",
            "Multilingual professional with 3 languages",
            "Highly certified with 5 professional certifications",
        ]
    );
    // 97.5*0.40 + 100*0.35 + 75*0.15 + 0*0.10 = 85.25
    assert_eq!(summary.performance_score, 85.2);
    assert_eq!(summary.experience_summary.years, 9.5);
    assert_eq!(summary.experience_summary.promotions, 5);
    assert_eq!(summary.skills_summary.certifications, 5);

    let experience_component = summary
        .score_breakdown
        .iter()
        .find(|component| component.factor == ScoreFactor::Experience)
        .expect("experience component present");
    assert_eq!(experience_component.sub_score, 97.5);
}

#[test]
fn single_current_role_measures_one_year() {
    let mut analytics = analytics_as_of(2024, 8, 1);
    analytics.load(PortfolioRecord {
        experience: vec![role("Lendingkart", "August 2023 - Present", true)],
        ..Default::default()
    });

    assert_eq!(analytics.experience_metrics().total_years, 1.0);
}

#[test]
fn completed_role_contributes_its_span() {
    let mut analytics = analytics_as_of(2024, 8, 1);
    analytics.load(PortfolioRecord {
        experience: vec![role("Credlix", "January 2020 - January 2022", false)],
        ..Default::default()
    });

    let metrics = analytics.experience_metrics();
    assert_eq!(metrics.total_years, 2.0);
    assert!(metrics.current_role.is_none());
}

#[test]
fn core_skill_levels_split_into_tiers() {
    let mut analytics = analytics_as_of(2024, 8, 1);
    analytics.load(PortfolioRecord {
        skills: SkillsRecord {
            core: vec![
                skill("Product Management", 95),
                skill("MySQL", 85),
                skill("Microsoft Excel", 90),
            ],
            ..Default::default()
        },
        ..Default::default()
    });

    let core = analytics.skills_distribution().core_skills;
    assert_eq!(core.average_proficiency, 90.0);
    // 90 sits on the expert threshold.
    assert_eq!(core.skill_categories.expert, 2);
    assert_eq!(core.skill_categories.advanced, 1);
    assert_eq!(core.skill_categories.total(), core.total_skills);
}

#[test]
fn three_languages_trigger_multilingual_insight() {
    let mut analytics = analytics_as_of(2024, 8, 1);
    analytics.load(PortfolioRecord {
        skills: SkillsRecord {
            languages: vec![
                language("English (Full Professional)"),
                language("Hindi (Native)"),
                language("Gujarati (Native)"),
            ],
            ..Default::default()
        },
        ..Default::default()
    });

    let languages = analytics.skills_distribution().languages;
    assert_eq!(languages.total_languages, 3);
    assert_eq!(languages.native_languages, 2);
    assert_eq!(languages.professional_languages, 1);
    assert_eq!(
        analytics.insights(),
        ["Multilingual professional with 3 languages"]
    );
}

#[test]
fn garbage_duration_is_ignored() {
    let mut analytics = analytics_as_of(2024, 8, 1);
    analytics.load(PortfolioRecord {
        experience: vec![role("Nowhere", "garbage", false)],
        ..Default::default()
    });

    let metrics = analytics.experience_metrics();
    assert_eq!(metrics.total_years, 0.0);
    assert_eq!(metrics.total_roles, 1);
}

#[test]
fn empty_experience_yields_zero_metrics() {
    let mut analytics = analytics_as_of(2024, 8, 1);
    analytics.load(PortfolioRecord::default());

    assert_eq!(analytics.experience_metrics(), ExperienceMetrics::default());
    let summary = analytics.performance_summary();
    assert_eq!(summary.performance_score, 0.0);
    assert!(summary.key_insights.is_empty());
}

#[test]
fn repeated_calls_are_identical() {
    let mut analytics = analytics_as_of(2024, 8, 1);
    analytics.load(sample_record());

    assert_eq!(analytics.experience_metrics(), analytics.experience_metrics());
    assert_eq!(analytics.skills_distribution(), analytics.skills_distribution());
    assert_eq!(analytics.insights(), analytics.insights());
    assert_eq!(analytics.performance_summary(), analytics.performance_summary());
}

#[test]
fn scores_and_counts_stay_within_bounds() {
    let records = [
        PortfolioRecord::default(),
        sample_record(),
        PortfolioRecord {
            experience: vec![
                role("Acme", "January 1990 - January 2020", false),
                ExperienceEntry {
                    progression: vec![
                        ProgressionStep {
                            period: Some("Jan 2019 - Jun 2019".to_string()),
                            ..Default::default()
                        },
                        ProgressionStep {
                            period: Some("Jun 2019 - Dec 2019".to_string()),
                            ..Default::default()
                        },
                    ],
                    ..role("Initech", "January 2019 - Present", true)
                },
            ],
            skills: SkillsRecord {
                core: vec![skill("a", 100), skill("b", 0), skill("c", 55), skill("d", 75)],
                languages: vec![
                    language("English (Native, Professional)"),
                    language("French"),
                    language("German (Professional)"),
                    language("Spanish"),
                    language("Italian"),
                ],
                certifications: (0..12).map(|n| format!("Cert {n}")).collect(),
            },
        },
    ];

    for record in records {
        let mut analytics = analytics_as_of(2024, 8, 1);
        analytics.load(record);

        let skills = analytics.skills_distribution();
        assert_eq!(
            skills.core_skills.skill_categories.total(),
            skills.core_skills.total_skills
        );
        assert!(skills.languages.native_languages <= skills.languages.total_languages);
        assert!(skills.languages.professional_languages <= skills.languages.total_languages);

        let summary = analytics.performance_summary();
        assert!(
            (0.0..=100.0).contains(&summary.performance_score),
            "score {} out of range",
            summary.performance_score
        );
        assert!(summary.experience_summary.years >= 0.0);
    }
}

#[test]
fn saturated_portfolio_scores_one_hundred() {
    let mut analytics = analytics_as_of(2024, 8, 1);
    analytics.load(PortfolioRecord {
        experience: vec![ExperienceEntry {
            progression: vec![
                ProgressionStep {
                    period: Some("Jan 2019 - Jun 2019".to_string()),
                    ..Default::default()
                },
                ProgressionStep {
                    period: Some("Jun 2019 - Dec 2019".to_string()),
                    ..Default::default()
                },
            ],
            ..role("Acme", "January 1990 - January 2020", false)
        }],
        skills: SkillsRecord {
            core: vec![skill("Strategy", 100)],
            languages: (0..4).map(|n| language(&format!("Language {n}"))).collect(),
            certifications: Vec::new(),
        },
    });

    let summary = analytics.performance_summary();
    // 2 steps over 334 days is well above 2 promotions/year.
    assert!(summary.experience_summary.growth_rate > 2.0);
    assert_eq!(summary.performance_score, 100.0);
}
