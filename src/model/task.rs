/*
 *     Copyright (C) 2023  Fritz Ochsmann
 *
 *     This program is free software: you can redistribute it and/or modify
 *     it under the terms of the GNU Affero General Public License as published
 *     by the Free Software Foundation, either version 3 of the License, or
 *     (at your option) any later version.
 *
 *     This program is distributed in the hope that it will be useful,
 *     but WITHOUT ANY WARRANTY; without even the implied warranty of
 *     MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *     GNU Affero General Public License for more details.
 *
 *     You should have received a copy of the GNU Affero General Public License
 *     along with this program.  If not, see <http://www.gnu.org/licenses/>.
 */

use chrono::{DateTime, Utc};
use strum::AsRefStr;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    /// Ordering rank used for deadline tie-breaks, highest priority first.
    pub(crate) fn rank(&self) -> u8 {
        match self {
            TaskPriority::High => 1,
            TaskPriority::Medium => 2,
            TaskPriority::Low => 3,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Done,
    Rejected,
    Archived,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskGoalType {
    Open,
    Fixed,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskUnit {
    None,
    Hours,
    Meters,
    Kilometers,
    Liters,
    Kilograms,
    M2,
    M3,
    Loads,
    Plugs,
    Tons,
}

// The backend serves `deadline`, `scheduled_date` and `occurrence_date`
// either as plain `YYYY-MM-DD` strings or as full timestamps, so they stay
// untyped here and are resolved to calendar days by `view::date`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Getters)]
#[get = "pub"]
pub struct Task {
    task_id: String,
    created_by: String,
    title: String,
    description: String,
    priority: TaskPriority,
    status: TaskStatus,
    deadline: String,
    scheduled_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent_task_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unit: Option<TaskUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    goal_type: Option<TaskGoalType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target_quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    current_quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    recurring_template_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    occurrence_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    pub fn is_recurring(&self) -> bool {
        self.recurring_template_id.is_some()
    }
}

#[cfg(test)]
impl Task {
    pub fn with_goal_type(mut self, goal_type: TaskGoalType) -> Self {
        self.goal_type = Some(goal_type);
        self
    }
}
