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
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// Starts a session. The returned handle is also attached to this
    /// client, so subsequent calls carry the bearer token.
    #[instrument(skip(self, password))]
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Session> {
        let request = self
            .request(Method::POST, "/auth/login")
            .json(&LoginRequest { email, password });
        let session: Session = self.execute(request).await?;

        info!("Started session for {}", session.user().user_id());
        self.session = Some(session.clone());

        Ok(session)
    }

    /// Revalidates a resumed session against the backend, returning the
    /// fresh account snapshot.
    #[instrument(skip_all)]
    pub async fn verify(&self) -> Result<User> {
        self.execute(self.request(Method::GET, "/auth/verify"))
            .await
    }
}
