use crate::config::ApiContext;
use crate::domain::model::{ResourceSpec, S3StoreSettings};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "ss-provision")]
#[command(about = "Creates the S3 space and its AIP Store location in the storage service")]
pub struct S3CliConfig {
    #[arg(long, help = "Base URL of Storage Service API to use")]
    pub base_url: String,

    #[arg(long, help = "Username to use when authenticating with the API")]
    pub api_user: String,

    #[arg(long, help = "Key to use when authenticating with the API")]
    pub api_key: String,

    #[arg(long, help = "S3 Access key ID")]
    pub s3_access_key_id: String,

    #[arg(long, help = "S3 Secret Access Key")]
    pub s3_secret_access_key: String,

    #[arg(long, help = "S3 bucket path")]
    pub s3_path: String,

    #[arg(long, help = "S3 region")]
    pub s3_region: String,

    #[arg(long, help = "S3 endpoint URL")]
    pub s3_endpoint_url: String,

    #[arg(
        long,
        help = "UUID of the pipeline that owns new locations, required when several pipelines are registered"
    )]
    pub pipeline_uuid: Option<String>,

    #[arg(long, help = "Exit non-zero when any resource fails to create")]
    pub strict: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl S3CliConfig {
    pub fn api_context(&self) -> ApiContext {
        ApiContext::new(&self.base_url, &self.api_user, &self.api_key)
    }

    pub fn s3_settings(&self) -> S3StoreSettings {
        S3StoreSettings {
            access_key_id: self.s3_access_key_id.clone(),
            secret_access_key: self.s3_secret_access_key.clone(),
            path: self.s3_path.clone(),
            region: self.s3_region.clone(),
            endpoint_url: self.s3_endpoint_url.clone(),
        }
    }

    pub fn resource_specs(&self) -> Vec<ResourceSpec> {
        vec![
            ResourceSpec::s3_space(&self.s3_settings()),
            ResourceSpec::s3_aip_store(&self.s3_path),
        ]
    }
}

impl Validate for S3CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_url("s3_endpoint_url", &self.s3_endpoint_url)?;
        validate_non_empty_string("api_user", &self.api_user)?;
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_non_empty_string("s3_access_key_id", &self.s3_access_key_id)?;
        validate_non_empty_string("s3_secret_access_key", &self.s3_secret_access_key)?;
        validate_non_empty_string("s3_path", &self.s3_path)?;
        validate_non_empty_string("s3_region", &self.s3_region)?;
        Ok(())
    }
}

/// Flags for the transfer-locations binary. The defaults are the values of
/// the single-host deployment this tool provisions.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "transfer-locations")]
#[command(about = "Creates the automated and interactive Transfer Source locations")]
pub struct TransferCliConfig {
    #[arg(
        long,
        default_value = "http://localhost:8000",
        help = "Base URL of Storage Service API to use"
    )]
    pub base_url: String,

    #[arg(
        long,
        default_value = "test",
        help = "Username to use when authenticating with the API"
    )]
    pub api_user: String,

    #[arg(
        long,
        default_value = "test",
        help = "Key to use when authenticating with the API"
    )]
    pub api_key: String,

    #[arg(
        long,
        help = "UUID of the pipeline that owns new locations, required when several pipelines are registered"
    )]
    pub pipeline_uuid: Option<String>,

    #[arg(long, help = "Exit non-zero when any resource fails to create")]
    pub strict: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl TransferCliConfig {
    pub fn api_context(&self) -> ApiContext {
        ApiContext::new(&self.base_url, &self.api_user, &self.api_key)
    }

    pub fn resource_specs(&self) -> Vec<ResourceSpec> {
        vec![
            ResourceSpec::transfer_source("automated workflow", "/home/automated"),
            ResourceSpec::transfer_source("interactive workflow", "/home/interactive"),
        ]
    }
}

impl Validate for TransferCliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("api_user", &self.api_user)?;
        validate_non_empty_string("api_key", &self.api_key)?;
        Ok(())
    }
}
