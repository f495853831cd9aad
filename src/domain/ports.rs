use crate::domain::model::CreateResponse;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Seam between the provisioning procedure and the storage service API.
/// Listings return the raw objects from the service's `objects` array.
#[async_trait]
pub trait StorageApi: Send + Sync {
    async fn list_spaces(&self) -> Result<Vec<Value>>;
    async fn list_locations(&self) -> Result<Vec<Value>>;
    async fn list_pipelines(&self) -> Result<Vec<Value>>;
    async fn create_space(&self, payload: &Value) -> Result<CreateResponse>;
    async fn create_location(&self, payload: &Value) -> Result<CreateResponse>;
}
