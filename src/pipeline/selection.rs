use chrono::NaiveDate;
use serde::Serialize;

use crate::error::SelectionError;
use crate::pipeline::aggregate::week_start;
use crate::types::weekly::WeeklyAggregate;

/// How a clicked week is identified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekRef {
    /// Monday of the week.
    Start(NaiveDate),
    /// `dd/mm` label as drawn on the x axis.
    Label(String),
}

impl WeekRef {
    /// Accepts any date inside the week (normalized to its Monday) or a
    /// `dd/mm` axis label.
    pub fn parse(raw: &str) -> Result<Self, SelectionError> {
        let raw = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Ok(WeekRef::Start(week_start(date)));
        }
        // Leap year so 29/02 is accepted.
        if NaiveDate::parse_from_str(&format!("{raw}/2000"), "%d/%m/%Y").is_ok() {
            return Ok(WeekRef::Label(raw.to_string()));
        }
        Err(SelectionError::InvalidWeek(raw.to_string()))
    }

    fn matches(&self, week: &WeeklyAggregate) -> bool {
        match self {
            WeekRef::Start(start) => week.week_start == *start,
            WeekRef::Label(label) => week.label == *label,
        }
    }
}

/// Which week drives the detail panel.
///
/// `Default` always follows the most recent week. `Explicit` sticks to the
/// clicked week across re-renders until that week is no longer in the data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "week", rename_all = "snake_case")]
pub enum Selection {
    #[default]
    Default,
    Explicit(WeekRef),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedSelection {
    pub week: WeeklyAggregate,
    /// State after resolution, ready to carry into the next render.
    pub state: Selection,
    /// True when an explicit selection pointed at a week that no longer
    /// exists and fell back to the most recent one.
    pub reset: bool,
}

impl Selection {
    /// A `week` query parameter is a click on that week.
    pub fn from_query(raw: Option<&str>) -> Result<Self, SelectionError> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Ok(Selection::Default.click(WeekRef::parse(raw)?)),
            None => Ok(Selection::Default),
        }
    }

    /// A chart click moves to `Explicit` regardless of the current state.
    pub fn click(self, week: WeekRef) -> Self {
        Selection::Explicit(week)
    }

    /// Drops an explicit selection whose week is absent from `weeks`.
    pub fn settle(self, weeks: &[WeeklyAggregate]) -> Self {
        match self {
            Selection::Explicit(ref week) if !weeks.iter().any(|w| week.matches(w)) => Selection::Default,
            other => other,
        }
    }

    /// The selected week, or `None` when there are no weeks at all.
    pub fn resolve(&self, weeks: &[WeeklyAggregate]) -> Option<ResolvedSelection> {
        let last = weeks.last()?;
        let settled = self.clone().settle(weeks);
        let reset = settled != *self;
        if reset {
            tracing::debug!("Selected week {:?} not in data, using most recent", self);
        }

        match settled {
            Selection::Explicit(week_ref) => {
                let week = weeks.iter().find(|w| week_ref.matches(w)).unwrap_or(last);
                Some(ResolvedSelection {
                    week: week.clone(),
                    state: Selection::Explicit(WeekRef::Start(week.week_start)),
                    reset,
                })
            }
            Selection::Default => Some(ResolvedSelection {
                week: last.clone(),
                state: Selection::Default,
                reset,
            }),
        }
    }
}
