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
use crate::view::date::local_date_key;
use chrono::NaiveDate;

/// Stable sort by deadline day ascending, ties broken by priority
/// (high before low). Equal keys keep their input order.
pub fn sort_tasks(tasks: &[Task]) -> Result<Vec<Task>> {
    let mut keyed = tasks
        .iter()
        .map(|task| Ok((local_date_key(task.deadline())?, task.priority().rank(), task.clone())))
        .collect::<Result<Vec<(NaiveDate, u8, Task)>>>()?;

    keyed.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

    Ok(keyed.into_iter().map(|(_, _, task)| task).collect())
}
