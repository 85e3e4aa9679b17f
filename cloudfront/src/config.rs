use backend_proxy_aws_core::impl_aws_config;
use serde::{Deserialize, Serialize};

/// Read from `aws/cloudfront/config.ron`, falling back to the shared `aws/config.ron`.
///
/// Only controls how CloudFront is reached; the distribution and backend being reconciled are
/// fixed in [`crate::addr`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CloudFrontProxyConfig {
    pub account_id: Option<String>,
    pub profile:    Option<String>,
    pub sts_region: String,
    /// Path to the `aws` executable. Looked up on `PATH` when unset.
    pub aws_cli:    Option<String>,
}

impl_aws_config!(CloudFrontProxyConfig, "aws/cloudfront/config.ron", aws_cli);
