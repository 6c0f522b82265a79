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

use crate::model::task::Task;
use chrono::{DateTime, Utc};

/// Reduced user shape embedded in assignment payloads.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Getters)]
#[get = "pub"]
pub struct UserSnapshot {
    user_id: String,
    name: String,
    email: String,
    #[serde(default)]
    position: String,
}

/// Links a user to a task. Assignments are created and completed
/// server-side; the client only ever reads them.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Getters)]
#[get = "pub"]
pub struct TaskAssignment {
    assignment_id: String,
    task_id: String,
    user_id: String,
    assigned_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    user: UserSnapshot,
    task: Task,
}

impl TaskAssignment {
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}
