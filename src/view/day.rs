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
use crate::view::date::{instant_date_key, local_date_key};
use chrono::NaiveDate;

/// Tasks relevant for a calendar day, in input order: scheduled on the
/// day, carried over from an earlier scheduled day while unfinished, due
/// on the day, or overdue and unfinished. A finished task stays visible
/// on the exact day it is scheduled or due.
pub fn select_tasks_for_date(tasks: &[Task], date: NaiveDate) -> Result<Vec<Task>> {
    let mut selected = Vec::new();

    for task in tasks {
        let scheduled = local_date_key(task.scheduled_date())?;
        let deadline = local_date_key(task.deadline())?;
        let done = task.is_done();

        let scheduled_today = scheduled == date;
        let carry_over = scheduled < date && !done;
        let due_today = deadline == date;
        let overdue = deadline < date && !done;

        if scheduled_today || carry_over || due_today || overdue {
            selected.push(task.clone());
        }
    }

    Ok(selected)
}

/// Tasks scheduled on exactly the given day, as shown in the calendar
/// grid's per-day list.
pub fn tasks_scheduled_on(tasks: &[Task], date: NaiveDate) -> Result<Vec<Task>> {
    let mut selected = Vec::new();

    for task in tasks {
        if local_date_key(task.scheduled_date())? == date {
            selected.push(task.clone());
        }
    }

    Ok(selected)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayAssignmentStats {
    pub assigned: usize,
    pub completed: usize,
}

/// Headline counters for the profile screen: assignments whose task is
/// scheduled on the day, and assignments completed on the day. Snapshots
/// with unreadable dates are skipped rather than failing the whole count.
pub fn assignment_stats_for(assignments: &[TaskAssignment], date: NaiveDate) -> DayAssignmentStats {
    let assigned = assignments
        .iter()
        .filter(|assignment| {
            local_date_key(assignment.task().scheduled_date()).is_ok_and(|day| day == date)
        })
        .count();
    let completed = assignments
        .iter()
        .filter(|assignment| {
            assignment
                .completed_at()
                .as_ref()
                .is_some_and(|instant| instant_date_key(instant) == date)
        })
        .count();

    DayAssignmentStats {
        assigned,
        completed,
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::tests::prelude::*;
    use crate::view::day::{assignment_stats_for, select_tasks_for_date, tasks_scheduled_on};
    use chrono::NaiveDate;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    #[test]
    fn test_carry_over_and_overdue() -> Result<()> {
        let tasks = vec![
            // scheduled yesterday, still pending: carried over
            task_with("carry", "2024-05-20", "2024-05-09", TaskPriority::Low, TaskStatus::Pending),
            // due yesterday, still pending: overdue
            task_with("late", "2024-05-09", "2024-05-01", TaskPriority::Low, TaskStatus::Pending),
            // both dates in the past but finished: dropped
            task_with("done", "2024-05-09", "2024-05-09", TaskPriority::Low, TaskStatus::Done),
        ];

        let selected = select_tasks_for_date(&tasks, reference())?;
        let ids: Vec<&str> = selected.iter().map(|task| task.task_id().as_str()).collect();
        assert_eq!(ids, vec!["carry", "late"]);

        Ok(())
    }

    #[test]
    fn test_done_task_still_visible_on_exact_day() -> Result<()> {
        let tasks = vec![
            task_with("due", "2024-05-10", "2024-05-01", TaskPriority::Low, TaskStatus::Done),
            task_with("planned", "2024-05-20", "2024-05-10", TaskPriority::Low, TaskStatus::Done),
        ];

        let selected = select_tasks_for_date(&tasks, reference())?;
        assert_eq!(selected.len(), 2);

        Ok(())
    }

    #[test]
    fn test_idempotent_for_fixed_date() -> Result<()> {
        let tasks = vec![
            task_with("a", "2024-05-10", "2024-05-09", TaskPriority::Low, TaskStatus::Pending),
            task_with("b", "2024-06-01", "2024-06-01", TaskPriority::Low, TaskStatus::Pending),
        ];

        let once = select_tasks_for_date(&tasks, reference())?;
        let twice = select_tasks_for_date(&once, reference())?;
        assert_eq!(once, twice);

        Ok(())
    }

    #[test]
    fn test_empty_input() -> Result<()> {
        assert!(select_tasks_for_date(&[], reference())?.is_empty());

        Ok(())
    }

    #[test]
    fn test_malformed_task_date() {
        let tasks = vec![task_with("broken", "sidste fredag", "2024-05-10", TaskPriority::Low, TaskStatus::Pending)];

        assert!(matches!(
            select_tasks_for_date(&tasks, reference()),
            Err(ClientError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_scheduled_on_exact_day_only() -> Result<()> {
        let tasks = vec![
            task_with("hit", "2024-05-20", "2024-05-10", TaskPriority::Low, TaskStatus::Pending),
            task_with("miss", "2024-05-10", "2024-05-09", TaskPriority::Low, TaskStatus::Pending),
        ];

        let scheduled = tasks_scheduled_on(&tasks, reference())?;
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0].task_id(), "hit");

        Ok(())
    }

    #[test]
    fn test_assignment_stats() {
        let assignments = vec![
            assignment_with(
                task_with("a", "2024-05-10", "2024-05-10", TaskPriority::Low, TaskStatus::Done),
                Some("2024-05-10"),
            ),
            assignment_with(
                task_with("b", "2024-05-10", "2024-05-10", TaskPriority::Low, TaskStatus::Pending),
                None,
            ),
            assignment_with(
                task_with("c", "2024-05-10", "2024-05-02", TaskPriority::Low, TaskStatus::Pending),
                None,
            ),
        ];

        let stats = assignment_stats_for(&assignments, reference());
        assert_eq!(stats.assigned, 2);
        assert_eq!(stats.completed, 1);
    }
}
