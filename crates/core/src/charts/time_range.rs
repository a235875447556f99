//! Time range selection for the sales overview.

use serde::{Deserialize, Serialize};

/// Period the sales chart describes. Only affects labelling; changing it
/// never triggers a refetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    /// The current week.
    Week,
    /// The current month.
    #[default]
    Month,
    /// The current year.
    Year,
}

impl TimeRange {
    /// All ranges in menu order.
    pub const ALL: [Self; 3] = [Self::Week, Self::Month, Self::Year];

    /// Menu label, e.g. "This Week".
    #[must_use]
    pub const fn menu_label(self) -> &'static str {
        match self {
            Self::Week => "This Week",
            Self::Month => "This Month",
            Self::Year => "This Year",
        }
    }

    /// Phrase used in chart subtitles, e.g. "this week".
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::Week => "this week",
            Self::Month => "this month",
            Self::Year => "this year",
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
            Self::Year => write!(f, "year"),
        }
    }
}

impl std::str::FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            _ => Err(format!("Unknown time range: {s}")),
        }
    }
}
