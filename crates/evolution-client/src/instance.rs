//! Instance lifecycle operations
//!
//! An instance is one named session the gateway manages (one WhatsApp
//! connection). This service covers creation, pairing, presence, state
//! polling, and teardown.

use serde_json::{json, Value};

use crate::transport::EvolutionApi;

/// Instance management façade
#[derive(Clone)]
pub struct InstanceService {
    api: EvolutionApi,
}

impl InstanceService {
    /// Create a new instance service
    #[must_use]
    pub fn new(api: EvolutionApi) -> Self {
        Self { api }
    }

    /// Create a named instance
    ///
    /// `integration` selects the gateway backend, e.g. `WHATSAPP-BAILEYS`.
    pub async fn create_instance(
        &self,
        instance_name: &str,
        qrcode: bool,
        integration: &str,
    ) -> Value {
        let body = json!({
            "instanceName": instance_name,
            "qrcode": qrcode,
            "integration": integration,
        });

        self.api.post("/instance/create", &body).await
    }

    /// List all instances known to the gateway
    pub async fn fetch_instances(&self) -> Value {
        self.api.get("/instance/fetchInstances", &[]).await
    }

    /// Start connecting an instance (returns pairing data such as a QR code)
    pub async fn connect_instance(&self, instance: &str) -> Value {
        self.api.get(&format!("/instance/connect/{instance}"), &[]).await
    }

    /// Restart an instance
    pub async fn restart_instance(&self, instance: &str) -> Value {
        self.api.post(&format!("/instance/restart/{instance}"), &json!({})).await
    }

    /// Set the instance presence (e.g. `available`, `unavailable`)
    pub async fn set_presence(&self, instance: &str, presence: &str) -> Value {
        let body = json!({ "presence": presence });

        self.api.post(&format!("/instance/setPresence/{instance}"), &body).await
    }

    /// Fetch the current connection state of an instance
    pub async fn connection_state(&self, instance: &str) -> Value {
        self.api.get(&format!("/instance/connectionState/{instance}"), &[]).await
    }

    /// Log the instance out of its session
    pub async fn logout_instance(&self, instance: &str) -> Value {
        self.api.delete(&format!("/instance/logout/{instance}"), &json!({})).await
    }

    /// Delete an instance from the gateway
    pub async fn delete_instance(&self, instance: &str) -> Value {
        self.api.delete(&format!("/instance/delete/{instance}"), &json!({})).await
    }
}
