//! Top-level client
//!
//! [`EvolutionClient`] bundles one transport client with accessors for each
//! resource service. Construction is explicit, from an
//! [`EvolutionConfig`] or from the environment. The client can be cloned
//! and shared freely; every service handed out reuses the same connection
//! pool.

use crate::config::EvolutionConfig;
use crate::error::Result;
use crate::group::GroupService;
use crate::instance::InstanceService;
use crate::message::MessageService;
use crate::profile::ProfileService;
use crate::settings::SettingsService;
use crate::transport::EvolutionApi;

/// Entry point bundling the transport client and resource services
#[derive(Clone)]
pub struct EvolutionClient {
    api: EvolutionApi,
}

impl EvolutionClient {
    /// Create a client from a configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &EvolutionConfig) -> Result<Self> {
        Ok(Self {
            api: EvolutionApi::new(config)?,
        })
    }

    /// Create a client from `EVOLUTION_API_URL` / `EVOLUTION_API_KEY`
    pub fn from_env() -> Result<Self> {
        Self::new(&EvolutionConfig::from_env()?)
    }

    /// The underlying transport client
    #[must_use]
    pub fn api(&self) -> &EvolutionApi {
        &self.api
    }

    /// Instance management operations
    #[must_use]
    pub fn instances(&self) -> InstanceService {
        InstanceService::new(self.api.clone())
    }

    /// Group administration operations
    #[must_use]
    pub fn groups(&self) -> GroupService {
        GroupService::new(self.api.clone())
    }

    /// Message sending operations
    #[must_use]
    pub fn messages(&self) -> MessageService {
        MessageService::new(self.api.clone())
    }

    /// Settings operations
    #[must_use]
    pub fn settings(&self) -> SettingsService {
        SettingsService::new(self.api.clone())
    }

    /// Profile operations, bound to `instance`
    #[must_use]
    pub fn profile(&self, instance: impl Into<String>) -> ProfileService {
        ProfileService::new(self.api.clone(), instance)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn services_share_the_configured_transport() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/instance/fetchInstances"))
            .and(header("apikey", "test-api-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let config = EvolutionConfig::new(server.uri(), "test-api-key");
        let client = EvolutionClient::new(&config).expect("client");

        assert_eq!(client.instances().fetch_instances().await, json!([]));
    }
}
