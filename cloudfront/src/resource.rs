use serde::{Deserialize, Serialize};

use crate::addr::{
    API_PATH_PATTERN, BACKEND_DOMAIN, BACKEND_ORIGIN_ID, CACHING_DISABLED_POLICY_ID, FORWARD_ORIGIN_POLICY_ID,
};

/// CloudFront's `{ Quantity, Items }` list wrapper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Counted<T> {
    pub quantity: usize,
    pub items:    Vec<T>,
}

impl<T> Counted<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            quantity: items.len(),
            items,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Toggle {
    pub enabled: bool,
}

/// Signer restrictions carry a quantity but no items list when disabled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SignerRestriction {
    pub enabled:  bool,
    pub quantity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CustomOriginConfig {
    #[serde(rename = "HTTPPort")]
    pub http_port: u16,
    #[serde(rename = "HTTPSPort")]
    pub https_port: u16,
    pub origin_protocol_policy: String,
    pub origin_ssl_protocols: Counted<String>,
    pub origin_read_timeout: u32,
    pub origin_keepalive_timeout: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CustomHeader {
    pub header_name:  String,
    pub header_value: String,
}

/// An entry in `DistributionConfig.Origins.Items`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Origin {
    pub id: String,
    pub domain_name: String,
    pub custom_origin_config: CustomOriginConfig,
    pub connection_attempts: u32,
    pub connection_timeout: u32,
    pub origin_path: String,
    pub custom_headers: Counted<CustomHeader>,
    pub origin_shield: Toggle,
}

impl Origin {
    /// The load balancer origin: plain HTTP to the ALB, TLS 1.2 if it ever speaks HTTPS.
    pub fn backend() -> Self {
        Self {
            id: BACKEND_ORIGIN_ID.to_string(),
            domain_name: BACKEND_DOMAIN.to_string(),
            custom_origin_config: CustomOriginConfig {
                http_port: 80,
                https_port: 443,
                origin_protocol_policy: String::from("http-only"),
                origin_ssl_protocols: Counted::new(vec![String::from("TLSv1.2")]),
                origin_read_timeout: 30,
                origin_keepalive_timeout: 5,
            },
            connection_attempts: 3,
            connection_timeout: 10,
            origin_path: String::new(),
            custom_headers: Counted::empty(),
            origin_shield: Toggle { enabled: false },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct AllowedMethods {
    pub quantity: usize,
    pub items: Vec<String>,
    pub cached_methods: Counted<String>,
}

/// An entry in `DistributionConfig.CacheBehaviors.Items`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CacheBehavior {
    pub path_pattern: String,
    pub target_origin_id: String,
    pub viewer_protocol_policy: String,
    pub allowed_methods: AllowedMethods,
    pub compress: bool,
    pub cache_policy_id: String,
    pub origin_request_policy_id: String,
    pub trusted_signers: SignerRestriction,
    pub trusted_key_groups: SignerRestriction,
    pub smooth_streaming: bool,
    pub lambda_function_associations: Counted<serde_json::Value>,
    pub function_associations: Counted<serde_json::Value>,
    pub field_level_encryption_id: String,
    pub grpc_config: Toggle,
}

fn methods(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl CacheBehavior {
    /// Uncached pass-through of every method under `/api/*` to the backend origin.
    pub fn api() -> Self {
        let items = methods(&["DELETE", "GET", "HEAD", "OPTIONS", "PATCH", "POST", "PUT"]);
        Self {
            path_pattern: API_PATH_PATTERN.to_string(),
            target_origin_id: BACKEND_ORIGIN_ID.to_string(),
            viewer_protocol_policy: String::from("redirect-to-https"),
            allowed_methods: AllowedMethods {
                quantity: items.len(),
                items,
                cached_methods: Counted::new(methods(&["GET", "HEAD"])),
            },
            compress: true,
            cache_policy_id: CACHING_DISABLED_POLICY_ID.to_string(),
            origin_request_policy_id: FORWARD_ORIGIN_POLICY_ID.to_string(),
            trusted_signers: SignerRestriction {
                enabled:  false,
                quantity: 0,
            },
            trusted_key_groups: SignerRestriction {
                enabled:  false,
                quantity: 0,
            },
            smooth_streaming: false,
            lambda_function_associations: Counted::empty(),
            function_associations: Counted::empty(),
            field_level_encryption_id: String::new(),
            grpc_config: Toggle { enabled: false },
        }
    }
}
