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
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_i18n::t;

impl TaskPriority {
    /// Localized badge text, e.g. `HØJ`.
    pub fn label(&self) -> String {
        t!(format!("task.priority.{}", self.as_ref()).as_str())
    }
}

impl TaskStatus {
    /// Localized badge text, e.g. `I GANG`.
    pub fn label(&self) -> String {
        t!(format!("task.status.{}", self.as_ref()).as_str())
    }
}

impl TaskFilter {
    /// Localized pill caption above the task list.
    pub fn label(&self) -> String {
        t!(format!("filter.{}", self.as_ref()).as_str())
    }
}

impl TaskUnit {
    /// Display suffix appended to quantities. Units without an
    /// established abbreviation render as bare numbers.
    pub fn suffix(&self) -> String {
        match self {
            TaskUnit::Hours => t!("unit.hours"),
            TaskUnit::Meters => "m".to_owned(),
            TaskUnit::Kilometers => "km".to_owned(),
            TaskUnit::Liters => "l".to_owned(),
            TaskUnit::Kilograms => "kg".to_owned(),
            _ => String::new(),
        }
    }
}

/// Quantities arrive as floats but render without a trailing `.0`.
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Day label relative to a reference day: "I dag", "I morgen", "I går",
/// otherwise `10. maj` with the year appended when it differs from the
/// reference year.
pub fn format_relative_date(date: NaiveDate, reference: NaiveDate) -> String {
    match (date - reference).num_days() {
        0 => t!("date.today"),
        1 => t!("date.tomorrow"),
        -1 => t!("date.yesterday"),
        _ => {
            let month = t!(format!("date.month.{}", date.month()).as_str());

            if date.year() == reference.year() {
                format!("{}. {month}", date.day())
            } else {
                format!("{}. {month} {}", date.day(), date.year())
            }
        }
    }
}

/// Age of a comment: "Lige nu", then minutes, hours and days, falling
/// back to an absolute date after a week.
pub fn format_comment_age(timestamp: &DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(*timestamp);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        t!("date.just_now")
    } else if minutes < 60 {
        t!("date.minutes_ago", count = minutes)
    } else if hours < 24 {
        t!("date.hours_ago", count = hours)
    } else if days < 7 {
        if days == 1 {
            t!("date.day_ago", count = days)
        } else {
            t!("date.days_ago", count = days)
        }
    } else {
        let date = timestamp.date_naive();
        let month = t!(format!("date.month.{}", date.month()).as_str());

        if date.year() == now.year() {
            format!("{}. {month}", date.day())
        } else {
            format!("{}. {month} {}", date.day(), date.year())
        }
    }
}
