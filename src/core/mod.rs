pub mod client;
pub mod provisioner;

pub use crate::domain::model::{EnsureOutcome, Report, ResourceSpec};
pub use crate::domain::ports::StorageApi;
pub use crate::utils::error::Result;
