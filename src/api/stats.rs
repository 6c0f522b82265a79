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
use reqwest::Method;

impl ApiClient {
    /// Completion statistics of the session user, as rendered on the
    /// profile screen.
    #[instrument(skip_all)]
    pub async fn my_stats(&self) -> Result<UserStats> {
        self.execute(self.request(Method::GET, "/stats/me")).await
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::tests::prelude::*;

    #[tokio::test]
    async fn test_weekly_stats_optional() -> Result<()> {
        let mut suite = TestSuite::authorized().await?;
        suite
            .server_mut()
            .mock("GET", "/stats/me")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "success": true,
                    "data": {
                        "user_id": "u1",
                        "name": "Mette Kjær",
                        "assigned_tasks": 10,
                        "completed_tasks": 7,
                        "completion_rate": 0.7,
                        "overdue_tasks": 2,
                        "weekly_stats": {
                            "assigned_tasks": 3,
                            "completed_tasks": 3,
                            "completion_rate": 1.0
                        }
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let stats = suite.client().my_stats().await?;
        assert_eq!(stats.overdue_tasks(), &2);
        assert_eq!(
            stats.weekly_stats().as_ref().unwrap().completed_tasks(),
            &3
        );

        Ok(())
    }
}
