use crate::config::ApiContext;
use crate::domain::model::CreateResponse;
use crate::domain::ports::StorageApi;
use crate::utils::error::{ProvisionError, Result};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde_json::Value;

/// HTTP client for the storage service's v2 API.
#[derive(Debug, Clone)]
pub struct StorageServiceClient {
    context: ApiContext,
    client: Client,
}

impl StorageServiceClient {
    pub fn new(context: ApiContext) -> Self {
        Self {
            context,
            client: Client::new(),
        }
    }

    fn endpoint(&self, kind: &str) -> String {
        format!("{}/api/v2/{}/", self.context.base_url, kind)
    }

    fn auth_header(&self) -> String {
        format!(
            "ApiKey {}:{}",
            self.context.api_user, self.context.api_key
        )
    }

    async fn list_objects(&self, kind: &str) -> Result<Vec<Value>> {
        let url = self.endpoint(kind);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.auth_header())
            .send()
            .await?;
        tracing::debug!("API response status: {}", response.status());

        let body: Value = response.json().await?;
        match body.get("objects").and_then(Value::as_array) {
            Some(objects) => Ok(objects.clone()),
            None => Err(ProvisionError::ResponseError {
                message: format!("{} listing has no 'objects' array", kind),
            }),
        }
    }

    async fn create_object(&self, kind: &str, payload: &Value) -> Result<CreateResponse> {
        let url = self.endpoint(kind);
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.auth_header())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        Ok(CreateResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            body: response.text().await?,
        })
    }
}

#[async_trait]
impl StorageApi for StorageServiceClient {
    async fn list_spaces(&self) -> Result<Vec<Value>> {
        self.list_objects("space").await
    }

    async fn list_locations(&self) -> Result<Vec<Value>> {
        self.list_objects("location").await
    }

    async fn list_pipelines(&self) -> Result<Vec<Value>> {
        self.list_objects("pipeline").await
    }

    async fn create_space(&self, payload: &Value) -> Result<CreateResponse> {
        self.create_object("space", payload).await
    }

    async fn create_location(&self, payload: &Value) -> Result<CreateResponse> {
        self.create_object("location", payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn test_client(server: &MockServer) -> StorageServiceClient {
        StorageServiceClient::new(ApiContext::new(&server.base_url(), "test", "test"))
    }

    #[tokio::test]
    async fn test_list_spaces_sends_api_key_header() {
        let server = MockServer::start();

        let list_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v2/space/")
                .header("Authorization", "ApiKey test:test");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "meta": {"total_count": 1},
                    "objects": [{"access_protocol": "FS", "resource_uri": "/api/v2/space/aaa/"}]
                }));
        });

        let spaces = test_client(&server).list_spaces().await.unwrap();

        list_mock.assert();
        assert_eq!(spaces.len(), 1);
        assert_eq!(spaces[0]["access_protocol"], "FS");
    }

    #[tokio::test]
    async fn test_listing_without_objects_is_an_error() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/api/v2/pipeline/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"detail": "unexpected shape"}));
        });

        let result = test_client(&server).list_pipelines().await;

        assert!(matches!(
            result,
            Err(ProvisionError::ResponseError { .. })
        ));
    }

    #[tokio::test]
    async fn test_create_space_captures_failure_verbatim() {
        let server = MockServer::start();

        let create_mock = server.mock(|when, then| {
            when.method(POST).path("/api/v2/space/");
            then.status(400)
                .header("Content-Type", "application/json")
                .body("{\"access_protocol\": [\"invalid choice\"]}");
        });

        let payload = serde_json::json!({"access_protocol": "NOPE"});
        let response = test_client(&server)
            .create_space(&payload)
            .await
            .unwrap();

        create_mock.assert();
        assert!(!response.is_success());
        assert_eq!(response.status, 400);
        assert_eq!(response.reason, "Bad Request");
        assert_eq!(response.body, "{\"access_protocol\": [\"invalid choice\"]}");
    }
}
