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

use crate::format::format_quantity;
use crate::prelude::*;

/// Progress line of a task card: the quantity label and, when a target
/// exists, the fill percentage of the bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskProgress {
    pub label: String,
    pub percent: Option<u8>,
}

/// `None` unless the task tracks measurable progress, i.e. it has a
/// recorded quantity and a fixed goal.
///
/// The bar is clamped to [0, 100] even when the recorded quantity runs
/// past the target; the label keeps the raw numbers. A zero target
/// resolves to a full or empty bar instead of dividing by it.
pub fn compute_progress(task: &Task) -> Option<TaskProgress> {
    let current = (*task.current_quantity())?;
    if task.goal_type() != &Some(TaskGoalType::Fixed) {
        return None;
    }

    let suffix = task
        .unit()
        .map(|unit| unit.suffix())
        .filter(|suffix| !suffix.is_empty())
        .map(|suffix| format!(" {suffix}"))
        .unwrap_or_default();

    match *task.target_quantity() {
        Some(target) => {
            let percent = if target > 0.0 {
                ((current / target) * 100.0).round().clamp(0.0, 100.0) as u8
            } else if current > 0.0 {
                100
            } else {
                0
            };

            Some(TaskProgress {
                label: format!(
                    "{} / {}{suffix}",
                    format_quantity(current),
                    format_quantity(target)
                ),
                percent: Some(percent),
            })
        }
        None => Some(TaskProgress {
            label: format!("{}{suffix}", format_quantity(current)),
            percent: None,
        }),
    }
}
