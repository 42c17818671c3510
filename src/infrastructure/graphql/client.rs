// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the photo server's GraphQL endpoint.

use super::queries;
use super::response::{decode_envelope, MyFacesData, RecognizeData, SetGroupLabelData};
use crate::application::port::{LabelUpdated, PortFuture, RemoteDataPort, RemoteError};
use crate::domain::people::{FaceGroup, FaceGroupId, JobId};
use futures_util::FutureExt;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Connection settings for [`GraphQlClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphQlSettings {
    /// Full URL of the GraphQL endpoint, e.g. `https://photos.example/api/graphql`.
    pub endpoint: String,
    /// Bearer token sent with every request.
    pub token: Option<String>,
    pub timeout: Duration,
}

/// [`RemoteDataPort`] implementation over GraphQL-over-HTTP.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    http: reqwest::Client,
    endpoint: Url,
    token: Option<String>,
}

impl GraphQlClient {
    /// Builds a client. Fails if the endpoint is not an absolute URL.
    pub fn new(settings: &GraphQlSettings) -> Result<Self, RemoteError> {
        let endpoint = Url::parse(&settings.endpoint).map_err(|e| {
            RemoteError::Transport(format!("invalid endpoint '{}': {e}", settings.endpoint))
        })?;

        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("PeopleLens/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            endpoint,
            token: settings.token.clone().filter(|token| !token.is_empty()),
        })
    }

    /// Returns the endpoint this client talks to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Resolves a possibly server-relative URL against the endpoint.
    #[must_use]
    pub fn resolve_url(&self, url: &str) -> String {
        resolve_against(&self.endpoint, url)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, RemoteError> {
        let body = serde_json::json!({
            "query": query,
            "operationName": operation,
            "variables": variables,
        });

        let mut request = self.http.post(self.endpoint.clone()).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        tracing::debug!(operation, "sending GraphQL request");
        let response = request.send().await.map_err(transport_error)?;
        let bytes = ensure_success(response)
            .await?
            .bytes()
            .await
            .map_err(transport_error)?;

        decode_envelope(&bytes)
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, RemoteError> {
        let mut request = self.http.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(transport_error)?;
        let bytes = ensure_success(response)
            .await?
            .bytes()
            .await
            .map_err(transport_error)?;
        Ok(bytes.to_vec())
    }
}

impl RemoteDataPort for GraphQlClient {
    fn my_faces(&self, limit: u32, offset: u32) -> PortFuture<Vec<FaceGroup>> {
        let client = self.clone();
        async move {
            let data: MyFacesData = client
                .execute(
                    queries::MY_FACES_OPERATION,
                    queries::MY_FACES_QUERY,
                    serde_json::json!({ "limit": limit, "offset": offset }),
                )
                .await?;

            let resolve = |url: &str| client.resolve_url(url);
            Ok(data
                .my_face_groups
                .into_iter()
                .map(|dto| dto.into_domain(&resolve))
                .collect())
        }
        .boxed()
    }

    fn set_group_label(
        &self,
        group_id: FaceGroupId,
        label: Option<String>,
    ) -> PortFuture<LabelUpdated> {
        let client = self.clone();
        async move {
            let data: SetGroupLabelData = client
                .execute(
                    queries::SET_GROUP_LABEL_OPERATION,
                    queries::SET_GROUP_LABEL_MUTATION,
                    serde_json::json!({ "groupID": group_id.as_str(), "label": label }),
                )
                .await?;
            Ok(data.into())
        }
        .boxed()
    }

    fn recognize_unlabeled_faces(&self) -> PortFuture<Vec<JobId>> {
        let client = self.clone();
        async move {
            let data: RecognizeData = client
                .execute(
                    queries::RECOGNIZE_UNLABELED_OPERATION,
                    queries::RECOGNIZE_UNLABELED_MUTATION,
                    serde_json::json!({}),
                )
                .await?;
            Ok(data.into())
        }
        .boxed()
    }

    fn fetch_thumbnail(&self, url: String) -> PortFuture<Vec<u8>> {
        let client = self.clone();
        async move { client.download(&url).await }.boxed()
    }
}

/// Fails with [`RemoteError::Status`] on a non-2xx response.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    tracing::warn!(status = status.as_u16(), url = %response.url(), "server returned error status");
    Err(RemoteError::Status(status.as_u16()))
}

fn transport_error(err: reqwest::Error) -> RemoteError {
    if err.is_timeout() {
        RemoteError::Transport("request timed out".to_string())
    } else {
        RemoteError::Transport(err.to_string())
    }
}

fn resolve_against(base: &Url, url: &str) -> String {
    if Url::parse(url).is_ok() {
        return url.to_string();
    }
    match base.join(url) {
        Ok(resolved) => resolved.to_string(),
        Err(err) => {
            tracing::debug!(url, error = %err, "could not resolve thumbnail URL");
            url.to_string()
        }
    }
}
