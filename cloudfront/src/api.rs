use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

mod aws_cli;

pub use aws_cli::AwsCliDistributionApi;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source:  std::io::Error,
    },
    /// The remote call itself failed. Carries the error text exactly as reported.
    #[error("{0}")]
    Remote(String),
    #[error("unexpected response: {0}")]
    Response(#[from] serde_json::Error),
}

/// The parts of an updated distribution worth telling the operator about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct UpdatedDistribution {
    pub id:          String,
    pub status:      String,
    pub domain_name: String,
}

/// Body returned by UpdateDistribution; anything besides these fields is ignored.
#[derive(Debug, Deserialize)]
pub struct UpdateDistributionOutput {
    #[serde(rename = "ETag")]
    pub e_tag:        Option<String>,
    #[serde(rename = "Distribution")]
    pub distribution: UpdatedDistribution,
}

/// The three CloudFront management calls a reconcile needs.
#[async_trait]
pub trait DistributionApi: Send + Sync {
    /// Current ETag of the distribution config.
    async fn get_config_etag(&self, distribution_id: &str) -> Result<String, ApiError>;

    /// Current distribution config, as the JSON text of the `DistributionConfig` object.
    async fn get_config(&self, distribution_id: &str) -> Result<String, ApiError>;

    /// Replace the distribution config with the JSON document at `config_file`.
    /// Rejected remotely if `etag` is no longer current.
    async fn update_config(
        &self,
        distribution_id: &str,
        etag: &str,
        config_file: &Path,
    ) -> Result<UpdatedDistribution, ApiError>;
}
