use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// S3 後端的連線參數，對應 space 建立時的欄位
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3StoreSettings {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub path: String,
    pub region: String,
    pub endpoint_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationPurpose {
    AipStorage,
    TransferSource,
}

impl LocationPurpose {
    pub fn code(&self) -> &'static str {
        match self {
            LocationPurpose::AipStorage => "AS",
            LocationPurpose::TransferSource => "TS",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpaceSpec {
    pub label: String,
    /// Matching predicate: a space with this access protocol already counts
    /// as provisioned.
    pub access_protocol: String,
    /// Creation payload posted verbatim to the space endpoint.
    pub payload: Value,
}

#[derive(Debug, Clone)]
pub struct LocationSpec {
    pub label: String,
    /// Matching predicate: a location with this full path already counts as
    /// provisioned.
    pub path: String,
    pub purpose: LocationPurpose,
    pub relative_path: String,
    pub description: String,
    /// Access protocol of the space the location is created in.
    pub space_protocol: String,
}

#[derive(Debug, Clone)]
pub enum ResourceSpec {
    Space(SpaceSpec),
    Location(LocationSpec),
}

impl ResourceSpec {
    pub fn label(&self) -> &str {
        match self {
            ResourceSpec::Space(spec) => &spec.label,
            ResourceSpec::Location(spec) => &spec.label,
        }
    }

    pub fn s3_space(settings: &S3StoreSettings) -> Self {
        ResourceSpec::Space(SpaceSpec {
            label: "S3 space".to_string(),
            access_protocol: "S3".to_string(),
            payload: json!({
                "access_key_id": settings.access_key_id,
                "access_protocol": "S3",
                "endpoint_url": settings.endpoint_url,
                "path": settings.path,
                "staging_path": settings.path,
                "region": settings.region,
                "secret_access_key": settings.secret_access_key,
                "size": "",
            }),
        })
    }

    /// AIP Store location inside the S3 space, under `<s3_path>/s3-aipstore`.
    pub fn s3_aip_store(s3_path: &str) -> Self {
        ResourceSpec::Location(LocationSpec {
            label: "Location for S3 AIP Store".to_string(),
            path: format!("{}/s3-aipstore", s3_path),
            purpose: LocationPurpose::AipStorage,
            relative_path: "s3-aipstore".to_string(),
            description: "s3-aipstore".to_string(),
            space_protocol: "S3".to_string(),
        })
    }

    /// Transfer Source location in the local filesystem space.
    pub fn transfer_source(description: &str, path: &str) -> Self {
        ResourceSpec::Location(LocationSpec {
            label: format!("Location for {}", description),
            path: path.to_string(),
            purpose: LocationPurpose::TransferSource,
            relative_path: path.trim_start_matches('/').to_string(),
            description: description.to_string(),
            space_protocol: "FS".to_string(),
        })
    }
}

/// Raw result of a create POST, kept verbatim for reporting.
#[derive(Debug, Clone)]
pub struct CreateResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

impl CreateResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnsureOutcome {
    Created,
    AlreadyExists,
    Failed {
        status: u16,
        reason: String,
        body: String,
    },
}

impl EnsureOutcome {
    /// Status lines printed for a resource, matching the wording operators
    /// already grep their provisioning logs for.
    pub fn status_lines(&self, label: &str) -> Vec<String> {
        match self {
            EnsureOutcome::Created => vec![format!("{} created.", label)],
            EnsureOutcome::AlreadyExists => vec![format!("{} already exists.", label)],
            EnsureOutcome::Failed {
                status,
                reason,
                body,
            } => vec![format!("{} {}", status, reason), body.clone()],
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportEntry {
    pub label: String,
    pub outcome: EnsureOutcome,
}

#[derive(Debug, Clone, Default)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: String, outcome: EnsureOutcome) {
        self.entries.push(ReportEntry { label, outcome });
    }

    pub fn created(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.outcome == EnsureOutcome::Created)
            .count()
    }

    pub fn has_failures(&self) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e.outcome, EnsureOutcome::Failed { .. }))
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .flat_map(|e| e.outcome.status_lines(&e.label))
            .collect()
    }
}
