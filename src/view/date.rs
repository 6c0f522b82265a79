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
use chrono::{DateTime, Local, NaiveDate, Utc};

/// Resolves a wire date to the calendar day it falls on.
///
/// Date-only values (`2024-05-10`, with or without a trailing time
/// component) are taken verbatim; full timestamps are converted to the
/// device's local calendar day, so two instants on the same local day
/// always resolve to the same key.
pub fn local_date_key(input: &str) -> Result<NaiveDate> {
    let date_part = input.split('T').next().unwrap_or(input);

    if let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(input)
        .map(|instant| instant.with_timezone(&Local).date_naive())
        .map_err(|_| ClientError::InvalidDate(input.to_owned()))
}

/// Local calendar day of an instant, for completion timestamps.
pub fn instant_date_key(instant: &DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&Local).date_naive()
}
