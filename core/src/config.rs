use std::path::Path;

use anyhow::bail;
use aws_config::{BehaviorVersion, Region, meta::region::RegionProviderChain};
use serde::{Deserialize, Serialize};

use crate::util::RON;

/// Settings shared by every tool in this workspace, read from `aws/config.ron`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AwsConfig {
    /// When set, credentials must resolve to this account before anything is changed.
    pub account_id: Option<String>,
    /// Named profile handed to both the SDK and the `aws` executable.
    pub profile:    Option<String>,
    pub sts_region: String,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            account_id: Default::default(),
            profile:    Default::default(),
            sts_region: String::from("us-east-1"),
        }
    }
}

impl AwsConfig {
    pub fn try_load(prefix: &Path) -> anyhow::Result<AwsConfig> {
        let config_path = prefix.join("aws/config.ron");
        if config_path.is_file() {
            tracing::info!("Loading AWS config file at {:?}", config_path);
            let config: AwsConfig = RON.from_str(&std::fs::read_to_string(config_path)?)?;
            Ok(config)
        } else {
            tracing::info!("AWS config file at {:?} not present, using defaults.", config_path);
            Ok(AwsConfig::default())
        }
    }
}

/// Resolve the caller identity and, if `account_id` is given, check the credentials belong to it.
/// Returns the account the credentials resolved to.
pub async fn verify_sts_account_id(
    sts_region: String,
    profile: Option<String>,
    account_id: Option<String>,
) -> anyhow::Result<String> {
    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).region(RegionProviderChain::first_try(Region::new(sts_region)));
    if let Some(profile) = profile {
        loader = loader.profile_name(profile);
    }
    let sts_config = loader.load().await;

    let sts_client = aws_sdk_sts::Client::new(&sts_config);
    let caller_identity = sts_client.get_caller_identity().send().await;

    match caller_identity {
        Ok(caller_identity) => {
            let Some(caller_account_id) = caller_identity.account else {
                bail!("Failed to get current account ID!");
            };

            if let Some(account_id) = account_id
                && caller_account_id != account_id
            {
                bail!(
                    "AWS: Account ID mismatch. Configured to use account ID {account_id}, \nbut credentials provided are for account ID {caller_account_id}."
                )
            }
            Ok(caller_account_id)
        }
        Err(e) => {
            tracing::error!("Failed to call sts:GetCallerIdentity: {}", e);
            Err(e.into())
        }
    }
}

pub trait AwsServiceConfig: From<AwsConfig> {
    async fn try_load(prefix: &Path) -> anyhow::Result<Self>;
    async fn verify_sts(&self) -> anyhow::Result<String>;
}

/// Implements `From<AwsConfig>`, `Default` and `AwsServiceConfig` for a per-tool config struct.
///
/// The struct must carry `account_id`, `profile` and `sts_region`; any further fields are
/// listed after the path and start out as `Default::default()` when falling back to the
/// shared `aws/config.ron`.
#[macro_export]
macro_rules! impl_aws_config {
    ($type:ty, $path:expr $(, $extra:ident)* $(,)?) => {
        impl From<$crate::config::AwsConfig> for $type {
            fn from(value: $crate::config::AwsConfig) -> Self {
                Self {
                    account_id: value.account_id,
                    profile:    value.profile,
                    sts_region: value.sts_region,
                    $($extra: Default::default(),)*
                }
            }
        }

        impl Default for $type {
            fn default() -> Self {
                Self::from($crate::config::AwsConfig::default())
            }
        }

        impl $crate::config::AwsServiceConfig for $type {
            async fn try_load(prefix: &std::path::Path) -> anyhow::Result<Self> {
                let config_path = prefix.join($path);
                if config_path.is_file() {
                    let config: $type = $crate::util::RON.from_str(&std::fs::read_to_string(config_path)?)?;
                    Ok(config)
                } else {
                    Ok(<$type>::from($crate::config::AwsConfig::try_load(prefix)?))
                }
            }

            async fn verify_sts(&self) -> anyhow::Result<String> {
                $crate::config::verify_sts_account_id(
                    self.sts_region.clone(),
                    self.profile.clone(),
                    self.account_id.clone(),
                )
                .await
            }
        }
    };
}
