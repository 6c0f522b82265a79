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

#[macro_use]
extern crate serde;
#[macro_use]
extern crate thiserror;
#[macro_use]
extern crate getset;
#[macro_use]
extern crate tracing;
#[macro_use]
extern crate serde_json;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub mod api;
pub mod error;
pub mod format;
pub mod model;
pub mod view;


rust_i18n::i18n!("locales");

/// Initializes the process-wide pieces: configuration, locale and the
/// tracing subscriber. Meant to be called once on app startup.
pub fn init() {
    lazy_static::initialize(&api::CONFIGURATION);
    rust_i18n::set_locale(api::CONFIGURATION.locale.as_str());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub mod prelude {
    pub use crate::api::session::Session;
    pub use crate::api::{ApiClient, Config, CONFIGURATION};
    pub use crate::error::*;
    pub use crate::model::assignment::{TaskAssignment, UserSnapshot};
    pub use crate::model::comment::TaskComment;
    pub use crate::model::stats::{UserStats, WeeklyStats};
    pub use crate::model::task::{Task, TaskGoalType, TaskPriority, TaskStatus, TaskUnit};
    pub use crate::model::user::{User, UserRole};
    pub use crate::view::calendar::DayCell;
    pub use crate::view::day::DayAssignmentStats;
    pub use crate::view::filter::TaskFilter;
    pub use crate::view::progress::TaskProgress;
}
