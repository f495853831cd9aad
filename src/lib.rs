pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::{S3CliConfig, TransferCliConfig};
pub use config::ApiContext;
pub use core::{client::StorageServiceClient, provisioner::Provisioner};
pub use domain::model::{EnsureOutcome, Report, ResourceSpec, S3StoreSettings};
pub use utils::error::{ProvisionError, Result};
