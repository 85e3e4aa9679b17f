//! In-memory CloudFront used by the reconcile tests.

use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use async_trait::async_trait;
use backend_proxy_aws_cloudfront::{
    addr::DISTRIBUTION_ID,
    api::{ApiError, DistributionApi, UpdatedDistribution},
};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    GetConfigEtag,
    GetConfig,
    UpdateConfig,
}

struct State {
    config: Value,
    version: u64,
    calls: Vec<Call>,
    staged: Vec<PathBuf>,
    fail_at: Option<Call>,
    concurrent_edit: bool,
}

/// Holds one distribution config and enforces ETags like CloudFront does.
pub struct MockDistributionApi {
    state: Mutex<State>,
}

#[allow(dead_code)]
impl MockDistributionApi {
    pub fn new(config: Value) -> Self {
        Self {
            state: Mutex::new(State {
                config,
                version: 1,
                calls: Vec::new(),
                staged: Vec::new(),
                fail_at: None,
                concurrent_edit: false,
            }),
        }
    }

    /// Make `call` fail with a remote error.
    pub fn failing_at(self, call: Call) -> Self {
        self.state.lock().unwrap().fail_at = Some(call);
        self
    }

    /// Simulate someone else saving the distribution right after we read its config.
    pub fn with_concurrent_edit(self) -> Self {
        self.state.lock().unwrap().concurrent_edit = true;
        self
    }

    pub fn config(&self) -> Value {
        self.state.lock().unwrap().config.clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn staged_paths(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().staged.clone()
    }

    pub fn remote_error(call: Call) -> String {
        format!("An error occurred (AccessDenied) when calling {call:?}")
    }

    fn begin(&self, call: Call, distribution_id: &str) -> Result<std::sync::MutexGuard<'_, State>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.fail_at == Some(call) {
            return Err(ApiError::Remote(Self::remote_error(call)));
        }
        if distribution_id != DISTRIBUTION_ID {
            return Err(ApiError::Remote(format!(
                "An error occurred (NoSuchDistribution): {distribution_id}"
            )));
        }
        Ok(state)
    }
}

fn etag(version: u64) -> String {
    format!("ETAG{version}")
}

#[async_trait]
impl DistributionApi for MockDistributionApi {
    async fn get_config_etag(&self, distribution_id: &str) -> Result<String, ApiError> {
        let state = self.begin(Call::GetConfigEtag, distribution_id)?;
        Ok(etag(state.version))
    }

    async fn get_config(&self, distribution_id: &str) -> Result<String, ApiError> {
        let mut state = self.begin(Call::GetConfig, distribution_id)?;
        let body = serde_json::to_string_pretty(&state.config)?;
        if state.concurrent_edit {
            state.version += 1;
        }
        Ok(body)
    }

    async fn update_config(
        &self,
        distribution_id: &str,
        if_match: &str,
        config_file: &Path,
    ) -> Result<UpdatedDistribution, ApiError> {
        self.state.lock().unwrap().staged.push(config_file.to_path_buf());
        let mut state = self.begin(Call::UpdateConfig, distribution_id)?;

        if if_match != etag(state.version) {
            return Err(ApiError::Remote(String::from(
                "An error occurred (PreconditionFailed) when calling the UpdateDistribution operation",
            )));
        }

        let body = std::fs::read_to_string(config_file)
            .map_err(|e| ApiError::Remote(format!("Error parsing parameter '--distribution-config': {e}")))?;
        state.config = serde_json::from_str(&body)?;
        state.version += 1;

        Ok(UpdatedDistribution {
            id:          distribution_id.to_string(),
            status:      String::from("InProgress"),
            domain_name: String::from("d111111abcdef8.cloudfront.net"),
        })
    }
}
