use chrono::{Month, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

const DAYS_PER_YEAR: f64 = 365.25;

/// How the month token of a `"<Month> <Year>"` string must be spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStyle {
    /// `"August 2023"`, as used in experience durations.
    Full,
    /// `"Aug 2023"`, as used in progression periods.
    Abbreviated,
}

impl MonthStyle {
    const fn label(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Abbreviated => "abbreviated",
        }
    }

    fn accepts(self, token: &str, month: Month) -> bool {
        match self {
            Self::Full => token.eq_ignore_ascii_case(month.name()),
            Self::Abbreviated => token.len() == 3,
        }
    }
}

impl fmt::Display for MonthStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MonthYearError {
    #[error("expected '<month> <year>', got '{0}'")]
    Shape(String),
    #[error("unknown month name '{0}'")]
    UnknownMonth(String),
    #[error("month '{found}' is not written as a {expected} month name")]
    Style { found: String, expected: MonthStyle },
    #[error("year '{0}' must be four digits")]
    Year(String),
}

/// First day of a calendar month, parsed from text like `"January 2020"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthYear(NaiveDate);

impl MonthYear {
    pub fn parse(raw: &str, style: MonthStyle) -> Result<Self, MonthYearError> {
        let mut tokens = raw.split_whitespace();
        let (Some(month_token), Some(year_token), None) =
            (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(MonthYearError::Shape(raw.to_string()));
        };

        let month: Month = month_token
            .parse()
            .map_err(|_| MonthYearError::UnknownMonth(month_token.to_string()))?;
        if !style.accepts(month_token, month) {
            return Err(MonthYearError::Style {
                found: month_token.to_string(),
                expected: style,
            });
        }

        if year_token.len() != 4 || !year_token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MonthYearError::Year(year_token.to_string()));
        }
        let year: i32 = year_token
            .parse()
            .map_err(|_| MonthYearError::Year(year_token.to_string()))?;

        NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)
            .map(Self)
            .ok_or_else(|| MonthYearError::Year(year_token.to_string()))
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// Whole days from `self` to `end`, divided by the mean year length.
    pub fn years_until(self, end: MonthYear) -> f64 {
        (end.0 - self.0).num_days() as f64 / DAYS_PER_YEAR
    }

    pub fn years_until_moment(self, now: NaiveDateTime) -> f64 {
        (now - self.0.and_time(NaiveTime::MIN)).num_days() as f64 / DAYS_PER_YEAR
    }
}
