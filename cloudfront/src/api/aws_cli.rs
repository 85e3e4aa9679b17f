use std::path::Path;

use async_trait::async_trait;
use backend_proxy_aws_core::util::trimmed_output;
use tokio::process::Command;

use crate::config::CloudFrontProxyConfig;

use super::{ApiError, DistributionApi, UpdateDistributionOutput, UpdatedDistribution};

/// Talks to CloudFront through the `aws` command line client.
#[derive(Debug, Clone)]
pub struct AwsCliDistributionApi {
    program: String,
    profile: Option<String>,
}

impl AwsCliDistributionApi {
    pub fn new(program: impl Into<String>, profile: Option<String>) -> Self {
        Self {
            program: program.into(),
            profile,
        }
    }

    pub fn from_config(config: &CloudFrontProxyConfig) -> Self {
        Self::new(
            config.aws_cli.clone().unwrap_or_else(|| String::from("aws")),
            config.profile.clone(),
        )
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.program);
        if let Some(profile) = &self.profile {
            cmd.arg("--profile").arg(profile);
        }
        cmd.arg("cloudfront").args(args);
        cmd
    }

    /// Run `aws cloudfront <args>` to completion and return its trimmed stdout.
    async fn run(&self, args: &[&str]) -> Result<String, ApiError> {
        tracing::debug!("{} cloudfront {}", self.program, args.join(" "));

        let output = self.command(args).output().await.map_err(|e| ApiError::Spawn {
            program: self.program.clone(),
            source:  e,
        })?;

        if !output.status.success() {
            return Err(ApiError::Remote(trimmed_output(&output.stderr)));
        }

        Ok(trimmed_output(&output.stdout))
    }
}

#[async_trait]
impl DistributionApi for AwsCliDistributionApi {
    async fn get_config_etag(&self, distribution_id: &str) -> Result<String, ApiError> {
        self.run(&[
            "get-distribution-config",
            "--id",
            distribution_id,
            "--query",
            "ETag",
            "--output",
            "text",
        ])
        .await
    }

    async fn get_config(&self, distribution_id: &str) -> Result<String, ApiError> {
        self.run(&[
            "get-distribution-config",
            "--id",
            distribution_id,
            "--query",
            "DistributionConfig",
            "--output",
            "json",
        ])
        .await
    }

    async fn update_config(
        &self,
        distribution_id: &str,
        etag: &str,
        config_file: &Path,
    ) -> Result<UpdatedDistribution, ApiError> {
        let config_arg = format!("file://{}", config_file.display());
        let stdout = self
            .run(&[
                "update-distribution",
                "--id",
                distribution_id,
                "--if-match",
                etag,
                "--distribution-config",
                &config_arg,
            ])
            .await?;

        let output: UpdateDistributionOutput = serde_json::from_str(&stdout)?;
        if let Some(e_tag) = &output.e_tag {
            tracing::debug!("Distribution {} now at ETag {}", output.distribution.id, e_tag);
        }
        Ok(output.distribution)
    }
}
