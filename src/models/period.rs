//! Calendar-relative periods and time windows
//!
//! `TransactionPeriod` buckets a timestamp relative to a reference "now" for
//! grouped display. `TimeWindow` is the look-back range used by analytics.
//! Both take the reference instant as an argument; nothing in this module
//! reads the clock.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// Recency bucket of a transaction, most recent first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TransactionPeriod {
    Today,
    Yesterday,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    EarlierThisYear,
    PreviousYears,
}

impl TransactionPeriod {
    /// All periods, most recent first
    pub const ALL: [TransactionPeriod; 8] = [
        TransactionPeriod::Today,
        TransactionPeriod::Yesterday,
        TransactionPeriod::ThisWeek,
        TransactionPeriod::LastWeek,
        TransactionPeriod::ThisMonth,
        TransactionPeriod::LastMonth,
        TransactionPeriod::EarlierThisYear,
        TransactionPeriod::PreviousYears,
    ];

    /// Classify `date` relative to `now`
    ///
    /// Checks run in a fixed order and the first match wins. Each check after
    /// `Yesterday` is a lower bound only, so the order is what keeps e.g. a
    /// same-day timestamp out of `ThisMonth`. Weeks start on Sunday.
    pub fn classify(date: NaiveDateTime, now: NaiveDateTime) -> Self {
        let day = date.date();
        let today = now.date();

        if day == today {
            return Self::Today;
        }
        if today.pred_opt() == Some(day) {
            return Self::Yesterday;
        }

        let this_week_start = start_of_week(today);
        if day >= this_week_start {
            return Self::ThisWeek;
        }
        if day >= this_week_start - Duration::days(7) {
            return Self::LastWeek;
        }

        let this_month_start = start_of_month(today);
        if day >= this_month_start {
            return Self::ThisMonth;
        }
        let last_month_start = this_month_start
            .checked_sub_months(Months::new(1))
            .unwrap_or(NaiveDate::MIN);
        if day >= last_month_start {
            return Self::LastMonth;
        }

        if day >= start_of_year(today) {
            return Self::EarlierThisYear;
        }

        Self::PreviousYears
    }

    /// The heading shown above a group of transactions
    pub fn label(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::ThisWeek => "This Week",
            Self::LastWeek => "Last Week",
            Self::ThisMonth => "This Month",
            Self::LastMonth => "Last Month",
            Self::EarlierThisYear => "Earlier This Year",
            Self::PreviousYears => "Previous Years",
        }
    }
}

impl fmt::Display for TransactionPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a transaction timestamp relative to a reference instant
pub fn transaction_period(date: NaiveDateTime, now: NaiveDateTime) -> TransactionPeriod {
    TransactionPeriod::classify(date, now)
}

/// Sunday on or before `date`
pub(crate) fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// First day of `date`'s month
pub(crate) fn start_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// January 1 of `date`'s year
pub(crate) fn start_of_year(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.ordinal0()))
}

/// Look-back range for analytics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    /// The last 7 days
    Week,
    /// The last calendar month
    #[default]
    Month,
    /// The last calendar year
    Year,
}

impl TimeWindow {
    /// Earliest instant included in the window ending at `now`
    ///
    /// Month and year subtract calendar fields, clamping to the last valid
    /// day (March 31 minus one month is February 28 or 29).
    pub fn cutoff(&self, now: NaiveDateTime) -> NaiveDateTime {
        let shifted = match self {
            Self::Week => now.checked_sub_signed(Duration::days(7)),
            Self::Month => now.checked_sub_months(Months::new(1)),
            Self::Year => now.checked_sub_months(Months::new(12)),
        };
        shifted.unwrap_or(NaiveDateTime::MIN)
    }

    /// Check if `date` falls in the window ending at `now`
    pub fn contains(&self, date: NaiveDateTime, now: NaiveDateTime) -> bool {
        date >= self.cutoff(now)
    }

    /// Short description of the window ("This month")
    pub fn description(&self) -> &'static str {
        match self {
            Self::Week => "This week",
            Self::Month => "This month",
            Self::Year => "This year",
        }
    }

    /// Description of the trend granularity for this window
    pub fn trend_description(&self) -> &'static str {
        match self {
            Self::Week => "Daily spending",
            Self::Month => "Weekly spending",
            Self::Year => "Monthly spending",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeWindow {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" | "w" => Ok(Self::Week),
            "month" | "m" => Ok(Self::Month),
            "year" | "y" => Ok(Self::Year),
            other => Err(TrackerError::Config(format!(
                "unknown time window '{}' (expected week, month or year)",
                other
            ))),
        }
    }
}
