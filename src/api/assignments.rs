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
    /// Every assignment of the given user, each carrying its task
    /// snapshot. This is the feed both the task screen and the calendar
    /// derive their views from.
    #[instrument(skip(self))]
    pub async fn assignments(&self, user_id: &str) -> Result<Vec<TaskAssignment>> {
        self.execute(
            self.request(Method::GET, "/assignments")
                .query(&[("userId", user_id)]),
        )
        .await
    }

    /// Convenience for the common "my tasks" fetch: the tasks denormalized
    /// out of the session user's assignments.
    #[instrument(skip_all)]
    pub async fn my_tasks(&self) -> Result<Vec<Task>> {
        let session = self.session().as_ref().ok_or(ClientError::Unauthorized)?;
        let assignments = self.assignments(session.user().user_id()).await?;

        Ok(assignments
            .into_iter()
            .map(|assignment| assignment.task().clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::tests::prelude::*;

    #[tokio::test]
    async fn test_assignments_query() -> Result<()> {
        let mut suite = TestSuite::authorized().await?;
        let assignment = assignment_with(
            task_with("t1", "2024-05-10", "2024-05-09", TaskPriority::High, TaskStatus::Pending),
            None,
        );
        let mock = suite
            .server_mut()
            .mock("GET", "/assignments")
            .match_query(mockito::Matcher::UrlEncoded("userId".into(), "u1".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "success": true, "data": [assignment] }).to_string())
            .create_async()
            .await;

        let assignments = suite.client().assignments("u1").await?;
        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0].task().task_id(), "t1");
        assert!(!assignments[0].is_completed());
        mock.assert_async().await;

        Ok(())
    }

    #[tokio::test]
    async fn test_my_tasks_requires_session() -> Result<()> {
        let suite = TestSuite::init().await?;

        assert!(matches!(
            suite.client().my_tasks().await,
            Err(ClientError::Unauthorized)
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_my_tasks_denormalizes() -> Result<()> {
        let mut suite = TestSuite::authorized().await?;
        let assignments = vec![
            assignment_with(
                task_with("a", "2024-05-10", "2024-05-09", TaskPriority::High, TaskStatus::Pending),
                None,
            ),
            assignment_with(
                task_with("b", "2024-05-11", "2024-05-09", TaskPriority::Low, TaskStatus::Done),
                Some("2024-05-09"),
            ),
        ];
        suite
            .server_mut()
            .mock("GET", "/assignments")
            .match_query(mockito::Matcher::UrlEncoded("userId".into(), "u1".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "success": true, "data": assignments }).to_string())
            .create_async()
            .await;

        let tasks = suite.client().my_tasks().await?;
        let ids: Vec<&str> = tasks.iter().map(|task| task.task_id().as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);

        Ok(())
    }
}
