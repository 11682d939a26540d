use async_trait::async_trait;
use base64::prelude::*;
use rand::RngCore;

use okra_core::types::{
    Objective, ObjectiveDraft, ObjectiveId, ObjectivePatch, Role, RoleId, ViewRole,
};

use crate::transport::ObjectiveTransport;
use crate::wire::{
    DeleteResponse, HealthResponse, ObjectiveListResponse, ObjectiveQuery, ObjectiveResponse,
    RolesResponse,
};
use crate::ApiError;

/// reqwest-backed client for the objectives REST API.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    base_url: String,
    client: reqwest::Client,
    health_checked: bool,
}

impl HttpApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            health_checked: false,
        }
    }

    fn endpoint(&self, suffix: &str) -> String {
        format!("{}{}", self.base_url, suffix)
    }

    fn request(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        let mut builder = self.client.request(method.clone(), url);

        // Mutating requests carry an idempotency key so a retried submit
        // cannot double-apply on the server.
        if matches!(
            method,
            reqwest::Method::POST | reqwest::Method::PUT | reqwest::Method::DELETE
        ) {
            let mut bytes = [0_u8; 16];
            rand::thread_rng().fill_bytes(&mut bytes);
            let key = BASE64_URL_SAFE_NO_PAD.encode(bytes);
            builder = builder.header("idempotency-key", key);
        }

        builder
    }

    async fn ensure_health(&mut self) -> Result<(), ApiError> {
        if self.health_checked {
            return Ok(());
        }

        let url = self.endpoint("/health");
        let resp = self.request(reqwest::Method::GET, url).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::ConnectionFailed(format!(
                "health check failed: {}",
                resp.status()
            )));
        }

        let health: HealthResponse = resp.json().await?;
        tracing::debug!(status = %health.status, "server reachable");
        self.health_checked = true;
        Ok(())
    }
}

async fn checked(resp: reqwest::Response, what: &str) -> Result<reqwest::Response, ApiError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::RequestFailed(format!(
        "{what} failed: {status} body={body}"
    )))
}

fn rejection(error: Option<String>, what: &str) -> ApiError {
    ApiError::Rejected(error.unwrap_or_else(|| format!("{what} failed")))
}

#[async_trait]
impl ObjectiveTransport for HttpApiClient {
    async fn fetch_roles(&mut self) -> Result<Vec<Role>, ApiError> {
        self.ensure_health().await?;

        let url = self.endpoint("/roles");
        let resp = self.request(reqwest::Method::GET, url).send().await?;
        let body: RolesResponse = checked(resp, "roles fetch").await?.json().await?;
        if !body.success {
            return Err(rejection(body.error, "roles fetch"));
        }
        Ok(body.roles)
    }

    async fn fetch_all(&mut self, year: Option<i32>) -> Result<Vec<Objective>, ApiError> {
        self.ensure_health().await?;

        let url = self.endpoint("/objectives/all");
        let mut req = self.request(reqwest::Method::GET, url);
        if let Some(year) = year {
            req = req.query(&[("year", year)]);
        }

        let resp = req.send().await?;
        let body: ObjectiveListResponse = checked(resp, "objectives fetch").await?.json().await?;
        if !body.success {
            return Err(rejection(body.error, "objectives fetch"));
        }
        tracing::debug!(count = body.objectives.len(), "fetched objective set");
        Ok(body.objectives)
    }

    async fn fetch_filtered(
        &mut self,
        year: i32,
        user: &RoleId,
        view_as: ViewRole,
    ) -> Result<Vec<Objective>, ApiError> {
        self.ensure_health().await?;

        let query = match view_as {
            ViewRole::Assignee => ObjectiveQuery {
                year,
                assignee: Some(user.clone()),
                owner: None,
            },
            ViewRole::Owner => ObjectiveQuery {
                year,
                assignee: None,
                owner: Some(user.clone()),
            },
        };

        let url = self.endpoint("/objectives");
        let resp = self
            .request(reqwest::Method::POST, url)
            .json(&query)
            .send()
            .await?;
        let body: ObjectiveListResponse =
            checked(resp, "filtered objectives fetch").await?.json().await?;
        if !body.success {
            return Err(rejection(body.error, "filtered objectives fetch"));
        }
        Ok(body.objectives)
    }

    async fn create(&mut self, draft: &ObjectiveDraft) -> Result<Objective, ApiError> {
        self.ensure_health().await?;

        let url = self.endpoint("/objectives/create");
        let resp = self
            .request(reqwest::Method::POST, url)
            .json(draft)
            .send()
            .await?;
        let body: ObjectiveResponse = checked(resp, "objective create").await?.json().await?;
        if !body.success {
            return Err(rejection(body.error, "objective create"));
        }
        body.objective.ok_or_else(|| {
            ApiError::RequestFailed("create response carried no objective".to_string())
        })
    }

    async fn update(
        &mut self,
        id: ObjectiveId,
        patch: &ObjectivePatch,
    ) -> Result<Objective, ApiError> {
        self.ensure_health().await?;

        let url = self.endpoint(&format!("/objectives/update/{id}"));
        let resp = self
            .request(reqwest::Method::PUT, url)
            .json(patch)
            .send()
            .await?;
        let body: ObjectiveResponse = checked(resp, "objective update").await?.json().await?;
        if !body.success {
            return Err(rejection(body.error, "objective update"));
        }
        body.objective.ok_or_else(|| {
            ApiError::RequestFailed("update response carried no objective".to_string())
        })
    }

    async fn delete(&mut self, id: ObjectiveId) -> Result<(), ApiError> {
        self.ensure_health().await?;

        let url = self.endpoint(&format!("/objectives/delete/{id}"));
        let resp = self.request(reqwest::Method::DELETE, url).send().await?;
        let body: DeleteResponse = checked(resp, "objective delete").await?.json().await?;
        if !body.success {
            return Err(rejection(body.error, "objective delete"));
        }
        Ok(())
    }
}
