use serde_json::Value;

use crate::{
    addr::{API_PATH_PATTERN, BACKEND_DOMAIN, BACKEND_ORIGIN_ID, FORWARD_ORIGIN_POLICY_ID},
    document::{DistributionConfigDocument, DocumentError},
    resource::{CacheBehavior, Origin},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginChange {
    Added,
    /// Left exactly as found. Existing origin settings are never refreshed.
    AlreadyPresent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BehaviorChange {
    Added,
    /// Only `OriginRequestPolicyId` was rewritten on the existing behavior.
    PolicyRefreshed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingChanges {
    pub origin:   OriginChange,
    pub behavior: BehaviorChange,
}

pub fn ensure_backend_origin(document: &mut DistributionConfigDocument) -> Result<OriginChange, DocumentError> {
    if document.has_origin(BACKEND_ORIGIN_ID)? {
        tracing::warn!("Origin {} already exists, leaving it untouched", BACKEND_ORIGIN_ID);
        return Ok(OriginChange::AlreadyPresent);
    }

    tracing::info!("Adding origin {} -> {}", BACKEND_ORIGIN_ID, BACKEND_DOMAIN);
    document.push_origin(&Origin::backend())?;
    Ok(OriginChange::Added)
}

pub fn ensure_api_behavior(document: &mut DistributionConfigDocument) -> Result<BehaviorChange, DocumentError> {
    document.ensure_cache_behaviors()?;

    if let Some(behavior) = document.cache_behavior_mut(API_PATH_PATTERN)? {
        tracing::warn!(
            "Cache behavior for {} already exists, refreshing its origin request policy",
            API_PATH_PATTERN
        );
        behavior.insert(
            String::from("OriginRequestPolicyId"),
            Value::from(FORWARD_ORIGIN_POLICY_ID),
        );
        return Ok(BehaviorChange::PolicyRefreshed);
    }

    tracing::info!("Adding cache behavior for {}", API_PATH_PATTERN);
    document.push_cache_behavior(&CacheBehavior::api())?;
    Ok(BehaviorChange::Added)
}

/// Route `/api/*` to the backend: origin first, then the behavior that targets it.
pub fn apply_backend_routing(document: &mut DistributionConfigDocument) -> Result<RoutingChanges, DocumentError> {
    let origin = ensure_backend_origin(document)?;
    let behavior = ensure_api_behavior(document)?;
    Ok(RoutingChanges { origin, behavior })
}
