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
use chrono::{Datelike, Duration, NaiveDate};

/// One cell of the month grid. Cells from the neighbouring months pad
/// the grid to full weeks and render dimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub current_month: bool,
}

/// Builds the Monday-first month grid: leading days from the previous
/// month, every day of the requested month, trailing days from the next
/// month up to a multiple of seven cells.
pub fn build_month_grid(year: i32, month: u32) -> Result<Vec<DayCell>> {
    let first = first_of_month(year, month)?;
    let (next_year, next_month) = shift_month(year, month, 1);
    let next_first = first_of_month(next_year, next_month)?;

    let leading = first.weekday().num_days_from_monday() as i64;
    let mut cells: Vec<DayCell> = (first - Duration::days(leading))
        .iter_days()
        .take_while(|date| *date < first)
        .map(|date| DayCell {
            date,
            current_month: false,
        })
        .collect();

    cells.extend(
        first
            .iter_days()
            .take_while(|date| *date < next_first)
            .map(|date| DayCell {
                date,
                current_month: true,
            }),
    );

    let trailing = (7 - cells.len() % 7) % 7;
    cells.extend(next_first.iter_days().take(trailing).map(|date| DayCell {
        date,
        current_month: false,
    }));

    Ok(cells)
}

/// Month arithmetic for the navigator arrows, rolling over the year in
/// both directions.
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let index = year * 12 + month as i32 - 1 + delta;

    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| ClientError::InvalidDate(format!("{year}-{month:02}-01")))
}
