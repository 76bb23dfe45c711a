//! Instance settings operations

use serde_json::Value;

use crate::transport::EvolutionApi;

/// Settings façade
#[derive(Clone)]
pub struct SettingsService {
    api: EvolutionApi,
}

impl SettingsService {
    /// Create a new settings service
    #[must_use]
    pub fn new(api: EvolutionApi) -> Self {
        Self { api }
    }

    /// Apply a settings mapping to an instance
    ///
    /// The mapping is sent as the request body verbatim; the gateway
    /// defines the accepted keys (`rejectCall`, `groupsIgnore`,
    /// `alwaysOnline`, ...).
    pub async fn set_settings(&self, instance: &str, settings: &Value) -> Value {
        self.api.post(&format!("/settings/set/{instance}"), settings).await
    }

    /// Fetch the instance's current settings
    pub async fn find_settings(&self, instance: &str) -> Value {
        self.api.get(&format!("/settings/find/{instance}"), &[]).await
    }
}
