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

#[derive(Serialize, Debug, Clone)]
struct CreateComment<'a> {
    message: &'a str,
}

impl ApiClient {
    #[instrument(skip(self))]
    pub async fn task_comments(&self, task_id: &str) -> Result<Vec<TaskComment>> {
        self.execute(self.request(Method::GET, &format!("/comments/task/{task_id}")))
            .await
    }

    #[instrument(skip(self, message))]
    pub async fn create_comment(&self, task_id: &str, message: &str) -> Result<TaskComment> {
        self.execute(
            self.request(Method::POST, &format!("/comments/task/{task_id}"))
                .json(&CreateComment { message }),
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete_comment(&self, comment_id: &str) -> Result<()> {
        self.execute_unit(self.request(Method::DELETE, &format!("/comments/{comment_id}")))
            .await
    }
}
