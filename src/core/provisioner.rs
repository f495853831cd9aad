use crate::domain::model::{
    CreateResponse, EnsureOutcome, LocationSpec, Report, ResourceSpec, SpaceSpec,
};
use crate::domain::ports::StorageApi;
use crate::utils::error::{ProvisionError, Result};
use serde_json::{json, Value};

/// Applies resource specs to the storage service, creating whatever is
/// missing. One pass, no retries; the remote service is the source of truth.
pub struct Provisioner<A: StorageApi> {
    api: A,
    pipeline_uuid: Option<String>,
}

impl<A: StorageApi> Provisioner<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            pipeline_uuid: None,
        }
    }

    pub fn new_with_pipeline(api: A, pipeline_uuid: Option<String>) -> Self {
        Self { api, pipeline_uuid }
    }

    pub async fn run(&self, specs: &[ResourceSpec]) -> Result<Report> {
        let mut report = Report::new();

        for spec in specs {
            tracing::debug!("Checking {}", spec.label());
            let outcome = self.ensure_resource(spec).await?;

            for line in outcome.status_lines(spec.label()) {
                println!("{}", line);
            }
            report.push(spec.label().to_string(), outcome);
        }

        Ok(report)
    }

    pub async fn ensure_resource(&self, spec: &ResourceSpec) -> Result<EnsureOutcome> {
        match spec {
            ResourceSpec::Space(spec) => self.ensure_space(spec).await,
            ResourceSpec::Location(spec) => self.ensure_location(spec).await,
        }
    }

    async fn ensure_space(&self, spec: &SpaceSpec) -> Result<EnsureOutcome> {
        let spaces = self.api.list_spaces().await?;

        // 相同協議的 space 已存在就不再建立
        if spaces
            .iter()
            .any(|space| space["access_protocol"] == spec.access_protocol.as_str())
        {
            return Ok(EnsureOutcome::AlreadyExists);
        }

        let response = self.api.create_space(&spec.payload).await?;
        Ok(outcome_from(response))
    }

    async fn ensure_location(&self, spec: &LocationSpec) -> Result<EnsureOutcome> {
        let locations = self.api.list_locations().await?;

        if locations
            .iter()
            .any(|location| location["path"] == spec.path.as_str())
        {
            return Ok(EnsureOutcome::AlreadyExists);
        }

        // 只有真的要建立時才解析 pipeline / space 的 resource_uri
        let pipeline_uri = self.resolve_pipeline_uri().await?;
        let space_uri = self.resolve_space_uri(&spec.space_protocol).await?;

        let payload = json!({
            "pipeline": [pipeline_uri],
            "purpose": spec.purpose.code(),
            "relative_path": spec.relative_path,
            "description": spec.description,
            "space": space_uri,
        });

        let response = self.api.create_location(&payload).await?;
        Ok(outcome_from(response))
    }

    /// Pipelines carry no type, so selection is by UUID when one is
    /// configured; otherwise exactly one registered pipeline is required.
    async fn resolve_pipeline_uri(&self) -> Result<String> {
        let pipelines = self.api.list_pipelines().await?;

        let pipeline = match &self.pipeline_uuid {
            Some(uuid) => pipelines
                .iter()
                .find(|p| p["uuid"] == uuid.as_str())
                .ok_or_else(|| ProvisionError::ResponseError {
                    message: format!("no pipeline with UUID '{}' is registered", uuid),
                })?,
            None => match pipelines.as_slice() {
                [] => {
                    return Err(ProvisionError::ResponseError {
                        message: "no pipeline is registered".to_string(),
                    })
                }
                [pipeline] => pipeline,
                _ => {
                    return Err(ProvisionError::ResponseError {
                        message: format!(
                            "found {} pipelines, expected exactly one (specify a pipeline UUID)",
                            pipelines.len()
                        ),
                    })
                }
            },
        };

        resource_uri(pipeline, "pipeline")
    }

    async fn resolve_space_uri(&self, protocol: &str) -> Result<String> {
        let spaces = self.api.list_spaces().await?;

        let space = spaces
            .iter()
            .find(|space| space["access_protocol"] == protocol)
            .ok_or_else(|| ProvisionError::ResponseError {
                message: format!("no space with access protocol '{}' exists", protocol),
            })?;

        resource_uri(space, "space")
    }
}

fn outcome_from(response: CreateResponse) -> EnsureOutcome {
    if response.is_success() {
        EnsureOutcome::Created
    } else {
        EnsureOutcome::Failed {
            status: response.status,
            reason: response.reason,
            body: response.body,
        }
    }
}

fn resource_uri(object: &Value, kind: &str) -> Result<String> {
    object["resource_uri"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ProvisionError::ResponseError {
            message: format!("{} object has no 'resource_uri'", kind),
        })
}
