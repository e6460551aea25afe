use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub initial_weight: f64,
    pub goal_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub id: String,
    pub person_id: String,
    pub date: NaiveDate,
    pub weight: f64,
}

/// Per-person weight log, keyed by person id. Entries stay in insertion
/// order; at most one entry per calendar day is kept for each person.
pub type WeightHistory = BTreeMap<String, Vec<WeightEntry>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleMonth {
    pub year: i32,
    pub month: u32,
}

impl VisibleMonth {
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn label(self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => first.format("%B %Y").to_string(),
            None => format!("{}-{:02}", self.year, self.month),
        }
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppData {
    pub visible_month: VisibleMonth,
    pub persons: Vec<Person>,
    pub weight_history: WeightHistory,
}

impl Default for AppData {
    fn default() -> Self {
        Self {
            visible_month: VisibleMonth::current(),
            persons: Vec::new(),
            weight_history: WeightHistory::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddPersonRequest {
    pub name: String,
    pub initial_weight: f64,
    pub goal_weight: f64,
}

#[derive(Debug, Deserialize)]
pub struct LogWeightRequest {
    pub person_id: String,
    pub date: NaiveDate,
    pub weight: f64,
}

#[derive(Debug, Serialize)]
pub struct MonthInfo {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub days: u32,
}

#[derive(Debug, Serialize)]
pub struct LastEntryInfo {
    pub date: NaiveDate,
    pub weight: f64,
}

#[derive(Debug, Serialize)]
pub struct PersonSummary {
    pub id: String,
    pub name: String,
    pub initial_weight: f64,
    pub goal_weight: f64,
    pub last_entry: Option<LastEntryInfo>,
    pub progress_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub day: u32,
    pub weight: f64,
}

#[derive(Debug, Serialize)]
pub struct SeriesLine {
    pub person_id: String,
    pub name: String,
    pub points: Vec<SeriesPoint>,
}

#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub month: MonthInfo,
    pub persons: Vec<PersonSummary>,
    pub lines: Vec<SeriesLine>,
}
