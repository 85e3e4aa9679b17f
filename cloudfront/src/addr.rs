//! Fixed identifiers this tool reconciles against. These are deliberately not configurable.

/// The CloudFront distribution fronting the admin panel.
pub const DISTRIBUTION_ID: &str = "E3B2N2LVRXNG4J";

/// Load balancer that serves the API.
pub const BACKEND_DOMAIN: &str = "lifeset-production-alb-1834668951.ap-south-1.elb.amazonaws.com";

/// `Id` reserved for the backend origin inside the distribution's origin list.
pub const BACKEND_ORIGIN_ID: &str = "BackendAPIOrigin";

/// Cache behaviors are keyed by their path pattern; this is the one we own.
pub const API_PATH_PATTERN: &str = "/api/*";

/// Managed-CachingDisabled.
pub const CACHING_DISABLED_POLICY_ID: &str = "4135ea2d-6df8-44a3-9df3-4b5a84be39ad";

/// Custom origin request policy forwarding the `Origin` header so CORS works behind the CDN.
pub const FORWARD_ORIGIN_POLICY_ID: &str = "f8cdde0a-09eb-4a25-a047-3b46bad525d3";

pub fn console_url(distribution_id: &str) -> String {
    format!("https://console.aws.amazon.com/cloudfront/v3/home#/distributions/{distribution_id}")
}
