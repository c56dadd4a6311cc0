//! Habit Entity
//!
//! A habit belongs to one user and carries a recurrence type, an active
//! window, and a per-day completion history.

use chrono::{DateTime, Utc};
use kernel::id::{HabitId, UserId};
use serde::{Deserialize, Serialize};

/// Recurrence cadence for a habit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitType {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

/// Day of week for scheduled habits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayOfWeek {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

/// One dated completion mark
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub completed: bool,
}

/// Habit record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub habit_id: HabitId,
    /// Owning user
    pub user_id: UserId,
    pub title: String,
    pub description: Option<String>,
    /// Target completions per period
    pub goal: u32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub streak: u32,
    pub habit_type: HabitType,
    pub history: Vec<HistoryEntry>,
    pub is_active: bool,
    pub days_of_week: Vec<DayOfWeek>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Habit {
    /// Create a new habit with default goal, empty history, active
    pub fn new(
        user_id: UserId,
        title: String,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();

        Self {
            habit_id: HabitId::new(),
            user_id,
            title,
            description: None,
            goal: 1,
            start_date,
            end_date,
            streak: 0,
            habit_type: HabitType::default(),
            history: Vec::new(),
            is_active: true,
            days_of_week: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
