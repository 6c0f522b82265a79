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
use lazy_static::lazy_static;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub mod assignments;
pub mod auth;
pub mod comments;
pub mod session;
pub mod stats;
pub mod tasks;
pub mod users;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_api_url() -> String {
    "http://localhost:9000/api".to_owned()
}

fn default_locale() -> String {
    "da".to_owned()
}

lazy_static! {
    pub static ref CONFIGURATION: Config = envy::from_env::<Config>().unwrap();
}

/// Every endpoint wraps its payload in this envelope.
#[derive(Deserialize, Debug, Clone)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

#[derive(Deserialize, Debug, Clone)]
struct ErrorBody {
    message: Option<String>,
}

/// Authenticated handle to the backend. The session is explicit state
/// of the client instance: attached after login, dropped on logout,
/// never a process-wide token.
#[derive(Debug, Clone, Getters)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    #[get = "pub"]
    session: Option<Session>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            session: None,
        })
    }

    /// Client against the configured backend.
    pub fn from_env() -> Result<Self> {
        Self::new(CONFIGURATION.api_url.as_str())
    }

    /// Resumes a previously stored session, e.g. after an app restart.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Drops the session handle. Further authenticated calls fail with
    /// `Unauthorized` server-side.
    #[instrument(skip_all)]
    pub fn logout(&mut self) {
        self.session = None;
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self
            .client
            .request(method, format!("{}{path}", self.base_url));

        if let Some(session) = &self.session {
            request = request.bearer_auth(session.token());
        }

        request
    }

    #[instrument(skip_all)]
    pub(crate) async fn execute<T>(&self, request: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = check(request.send().await?).await?;

        Ok(response.json::<Envelope<T>>().await?.data)
    }

    /// For endpoints that acknowledge without a payload.
    #[instrument(skip_all)]
    pub(crate) async fn execute_unit(&self, request: RequestBuilder) -> Result<()> {
        check(request.send().await?).await?;

        Ok(())
    }
}

async fn check(response: Response) -> Result<Response> {
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED {
        return Err(ClientError::Unauthorized);
    }

    if !status.is_success() {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| "request failed".to_owned());
        error!("Api error {}: {}", status.as_u16(), message);

        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(response)
}
