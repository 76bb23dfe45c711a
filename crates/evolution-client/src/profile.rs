//! Profile lookups, bound to a single instance

use serde_json::Value;

use crate::transport::EvolutionApi;

/// Profile façade for one instance
#[derive(Clone)]
pub struct ProfileService {
    api: EvolutionApi,
    instance: String,
}

impl ProfileService {
    /// Create a profile service bound to `instance`
    #[must_use]
    pub fn new(api: EvolutionApi, instance: impl Into<String>) -> Self {
        Self {
            api,
            instance: instance.into(),
        }
    }

    /// Fetch the bound instance's profile
    pub async fn fetch_profile(&self) -> Value {
        self.api.get(&format!("/chat/fetchProfile/{}", self.instance), &[]).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::EvolutionConfig;

    #[tokio::test]
    async fn fetch_profile_uses_the_bound_instance() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/chat/fetchProfile/test-instance"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "Bot" })))
            .expect(1)
            .mount(&server)
            .await;

        let config = EvolutionConfig::new(server.uri(), "test-api-key");
        let service = ProfileService::new(
            EvolutionApi::new(&config).expect("transport client"),
            "test-instance",
        );

        assert_eq!(service.fetch_profile().await, json!({ "name": "Bot" }));
    }
}
