use crate::{
    addr::DISTRIBUTION_ID,
    api::{DistributionApi, UpdatedDistribution},
    document::DistributionConfigDocument,
    error::ReconcileError,
};

mod merge;
mod stage;

pub use merge::{BehaviorChange, OriginChange, RoutingChanges, apply_backend_routing};

/// What a successful reconcile did and where the distribution ended up.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconcileOutcome {
    pub distribution: UpdatedDistribution,
    pub origin:       OriginChange,
    pub behavior:     BehaviorChange,
}

/// Points the fixed distribution's `/api/*` traffic at the backend load balancer.
pub struct DistributionConfigurator<A> {
    api: A,
    distribution_id: String,
}

impl<A: DistributionApi> DistributionConfigurator<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            distribution_id: DISTRIBUTION_ID.to_string(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn distribution_id(&self) -> &str {
        &self.distribution_id
    }

    /// Fetch the config, add or refresh the backend origin and `/api/*` behavior, and submit it
    /// back under the ETag read at the start.
    ///
    /// Nothing is written remotely unless every earlier step succeeded, and a concurrent change
    /// to the distribution is left for CloudFront to reject via the ETag.
    pub async fn reconcile(&self) -> Result<ReconcileOutcome, ReconcileError> {
        let distribution_id = self.distribution_id.as_str();

        tracing::info!("Fetching current configuration of distribution {}", distribution_id);
        let etag = self
            .api
            .get_config_etag(distribution_id)
            .await
            .map_err(ReconcileError::FetchETag)?;

        let raw = self
            .api
            .get_config(distribution_id)
            .await
            .map_err(ReconcileError::FetchConfig)?;

        let mut document = DistributionConfigDocument::from_json(&raw)?;
        let changes = apply_backend_routing(&mut document)?;

        let staged = stage::stage_config(&document)?;

        tracing::info!("Updating distribution {}", distribution_id);
        let distribution = self
            .api
            .update_config(distribution_id, &etag, staged.path())
            .await
            .map_err(ReconcileError::Update)?;

        Ok(ReconcileOutcome {
            distribution,
            origin: changes.origin,
            behavior: changes.behavior,
        })
    }
}
