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
use std::future::{Future, IntoFuture};
use std::pin::Pin;

impl ApiClient {
    #[instrument(skip(self))]
    pub async fn task(&self, id: &str) -> Result<Task> {
        self.execute(self.request(Method::GET, &format!("/tasks/{id}")))
            .await
    }

    /// Partial update of a task. Only fields set on the builder are sent.
    pub fn update_task<'a>(&'a self, task_id: &'a str) -> UpdateTask<'a> {
        UpdateTask {
            client: self,
            task_id,
            title: None,
            description: None,
            priority: None,
            status: None,
            deadline: None,
            scheduled_date: None,
            unit: None,
            goal_type: None,
            target_quantity: None,
            current_quantity: None,
            assigned_users: None,
        }
    }

    /// Records progress on a fixed-goal task.
    pub fn add_progress<'a>(&'a self, task_id: &'a str, quantity_done: f64) -> AddProgress<'a> {
        AddProgress {
            client: self,
            task_id,
            quantity_done,
            unit: None,
            note: None,
        }
    }

    /// Flips a task between finished and pending, the toggle behind the
    /// details screen's completion button.
    #[instrument(skip(self))]
    pub async fn toggle_task_status(&self, task: &Task) -> Result<Task> {
        let status = if task.is_done() {
            TaskStatus::Pending
        } else {
            TaskStatus::Done
        };

        self.update_task(task.task_id())
            .set_status(Some(status))
            .to_owned()
            .await
    }
}

#[derive(Serialize, Debug, Clone, Setters)]
pub struct UpdateTask<'a> {
    #[serde(skip)]
    client: &'a ApiClient,
    #[serde(skip)]
    task_id: &'a str,
    #[set = "pub"]
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[set = "pub"]
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[set = "pub"]
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<TaskPriority>,
    #[set = "pub"]
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<TaskStatus>,
    #[set = "pub"]
    #[serde(skip_serializing_if = "Option::is_none")]
    deadline: Option<&'a str>,
    #[set = "pub"]
    #[serde(skip_serializing_if = "Option::is_none")]
    scheduled_date: Option<&'a str>,
    #[set = "pub"]
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<TaskUnit>,
    #[set = "pub"]
    #[serde(skip_serializing_if = "Option::is_none")]
    goal_type: Option<TaskGoalType>,
    #[set = "pub"]
    #[serde(skip_serializing_if = "Option::is_none")]
    target_quantity: Option<f64>,
    #[set = "pub"]
    #[serde(skip_serializing_if = "Option::is_none")]
    current_quantity: Option<f64>,
    #[set = "pub"]
    #[serde(skip_serializing_if = "Option::is_none")]
    assigned_users: Option<Vec<String>>,
}

impl<'a> IntoFuture for UpdateTask<'a> {
    type Output = Result<Task>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send + 'a>>;

    #[instrument(skip_all)]
    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move {
            let request = self
                .client
                .request(Method::PATCH, &format!("/tasks/{}", self.task_id))
                .json(&self);

            self.client.execute(request).await
        })
    }
}

#[derive(Serialize, Debug, Clone, Setters)]
pub struct AddProgress<'a> {
    #[serde(skip)]
    client: &'a ApiClient,
    #[serde(skip)]
    task_id: &'a str,
    quantity_done: f64,
    #[set = "pub"]
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<TaskUnit>,
    #[set = "pub"]
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<&'a str>,
}

impl<'a> IntoFuture for AddProgress<'a> {
    type Output = Result<()>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send + 'a>>;

    #[instrument(skip_all)]
    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move {
            let request = self
                .client
                .request(Method::POST, &format!("/tasks/{}/progress", self.task_id))
                .json(&self);

            self.client.execute_unit(request).await
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::tests::prelude::*;

    #[tokio::test]
    async fn test_get_task() -> Result<()> {
        let mut suite = TestSuite::authorized().await?;
        let task = task_with("t1", "2024-05-10", "2024-05-09", TaskPriority::High, TaskStatus::Pending);
        suite
            .server_mut()
            .mock("GET", "/tasks/t1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "success": true, "data": task }).to_string())
            .create_async()
            .await;

        let fetched = suite.client().task("t1").await?;
        assert_eq!(fetched, task);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_sends_only_set_fields() -> Result<()> {
        let mut suite = TestSuite::authorized().await?;
        let updated = task_with("t1", "2024-05-10", "2024-05-09", TaskPriority::High, TaskStatus::Done);
        let mock = suite
            .server_mut()
            .mock("PATCH", "/tasks/t1")
            .match_header("authorization", "Bearer test-token")
            .match_body(mockito::Matcher::Json(json!({ "status": "DONE" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "success": true, "data": updated }).to_string())
            .create_async()
            .await;

        let task = suite
            .client()
            .update_task("t1")
            .set_status(Some(TaskStatus::Done))
            .to_owned()
            .await?;
        assert!(task.is_done());
        mock.assert_async().await;

        Ok(())
    }

    #[tokio::test]
    async fn test_toggle_completion() -> Result<()> {
        let mut suite = TestSuite::authorized().await?;
        let done = task_with("t1", "2024-05-10", "2024-05-09", TaskPriority::High, TaskStatus::Done);
        let reopened = task_with("t1", "2024-05-10", "2024-05-09", TaskPriority::High, TaskStatus::Pending);
        let mock = suite
            .server_mut()
            .mock("PATCH", "/tasks/t1")
            .match_body(mockito::Matcher::Json(json!({ "status": "PENDING" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "success": true, "data": reopened }).to_string())
            .create_async()
            .await;

        let task = suite.client().toggle_task_status(&done).await?;
        assert!(!task.is_done());
        mock.assert_async().await;

        Ok(())
    }

    #[tokio::test]
    async fn test_add_progress() -> Result<()> {
        let mut suite = TestSuite::authorized().await?;
        let mock = suite
            .server_mut()
            .mock("POST", "/tasks/t1/progress")
            .match_body(mockito::Matcher::Json(json!({
                "quantity_done": 2.5,
                "unit": "HOURS",
                "note": "Gravet ved skel"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "success": true }).to_string())
            .create_async()
            .await;

        suite
            .client()
            .add_progress("t1", 2.5)
            .set_unit(Some(TaskUnit::Hours))
            .set_note(Some("Gravet ved skel"))
            .to_owned()
            .await?;
        mock.assert_async().await;

        Ok(())
    }
}
