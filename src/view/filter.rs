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

use crate::prelude::*;
use std::str::FromStr;
use strum::{AsRefStr, EnumString};

/// Secondary filter pills above the task list. Wire keys are the
/// camelCase identifiers the screens persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, AsRefStr)]
#[strum(serialize_all = "camelCase")]
pub enum TaskFilter {
    #[default]
    All,
    HighPriority,
    Pending,
    FixedGoal,
}

impl TaskFilter {
    /// Parses a persisted filter key. Unknown keys are rejected instead
    /// of silently widening to `All`.
    pub fn from_key(key: &str) -> Result<Self> {
        Self::from_str(key).map_err(|_| ClientError::InvalidFilterKind(key.to_owned()))
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::HighPriority => task.priority() == &TaskPriority::High,
            TaskFilter::Pending => {
                matches!(task.status(), TaskStatus::Pending | TaskStatus::InProgress)
            }
            TaskFilter::FixedGoal => task.goal_type() == &Some(TaskGoalType::Fixed),
        }
    }
}

/// Keeps the tasks matching the filter, in input order.
pub fn apply_filter(tasks: &[Task], filter: TaskFilter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| filter.matches(task))
        .cloned()
        .collect()
}
