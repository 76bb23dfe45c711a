//! Message sending operations
//!
//! Every send operation takes the destination number, the medium-specific
//! required fields, and a free-form [`SendOptions`] map. The options are
//! merged into the payload last, so gateway extension fields (`delay`,
//! `quoted`, `mentionsEveryOne`, ...) pass through without code changes,
//! and a colliding key overrides the named field.

use serde_json::{json, Map, Value};

use crate::transport::EvolutionApi;

/// Free-form extension fields merged into a send payload
pub type SendOptions = Map<String, Value>;

/// Merge options into a payload object; options win on key collision
fn merge(base: Value, options: SendOptions) -> Value {
    match base {
        Value::Object(mut fields) => {
            fields.extend(options);
            Value::Object(fields)
        }
        other => other,
    }
}

/// Message sending façade
#[derive(Clone)]
pub struct MessageService {
    api: EvolutionApi,
}

impl MessageService {
    /// Create a new message service
    #[must_use]
    pub fn new(api: EvolutionApi) -> Self {
        Self { api }
    }

    /// Send a plain text message
    pub async fn send_text(
        &self,
        instance: &str,
        number: &str,
        text: &str,
        options: SendOptions,
    ) -> Value {
        let body = merge(json!({ "number": number, "text": text }), options);

        self.api.post(&format!("/message/sendText/{instance}"), &body).await
    }

    /// Send media (image, video, or document)
    ///
    /// `media` is a URL or base64 payload, passed through as-is.
    pub async fn send_media(
        &self,
        instance: &str,
        number: &str,
        media: &str,
        media_type: &str,
        mime_type: &str,
        caption: &str,
        options: SendOptions,
    ) -> Value {
        let body = merge(
            json!({
                "number": number,
                "media": media,
                "mediatype": media_type,
                "mimetype": mime_type,
                "caption": caption,
            }),
            options,
        );

        self.api.post(&format!("/message/sendMedia/{instance}"), &body).await
    }

    /// Send a voice-note style audio message
    pub async fn send_audio(
        &self,
        instance: &str,
        number: &str,
        audio: &str,
        options: SendOptions,
    ) -> Value {
        let body = merge(json!({ "number": number, "audio": audio }), options);

        self.api.post(&format!("/message/sendWhatsAppAudio/{instance}"), &body).await
    }

    /// Send a sticker
    pub async fn send_sticker(
        &self,
        instance: &str,
        number: &str,
        sticker: &str,
        options: SendOptions,
    ) -> Value {
        let body = merge(json!({ "number": number, "sticker": sticker }), options);

        self.api.post(&format!("/message/sendSticker/{instance}"), &body).await
    }

    /// Send a location pin
    pub async fn send_location(
        &self,
        instance: &str,
        number: &str,
        name: &str,
        address: &str,
        latitude: f64,
        longitude: f64,
        options: SendOptions,
    ) -> Value {
        let body = merge(
            json!({
                "number": number,
                "name": name,
                "address": address,
                "latitude": latitude,
                "longitude": longitude,
            }),
            options,
        );

        self.api.post(&format!("/message/sendLocation/{instance}"), &body).await
    }

    /// Send one or more contact cards
    ///
    /// `contacts` carries name/phone entries in the gateway's contact
    /// shape, forwarded under the `contact` body field.
    pub async fn send_contact(
        &self,
        instance: &str,
        number: &str,
        contacts: &Value,
        options: SendOptions,
    ) -> Value {
        let body = merge(json!({ "number": number, "contact": contacts }), options);

        self.api.post(&format!("/message/sendContact/{instance}"), &body).await
    }

    /// Send a poll
    pub async fn send_poll(
        &self,
        instance: &str,
        number: &str,
        name: &str,
        selectable_count: u32,
        values: &[&str],
        options: SendOptions,
    ) -> Value {
        let body = merge(
            json!({
                "number": number,
                "name": name,
                "selectableCount": selectable_count,
                "values": values,
            }),
            options,
        );

        self.api.post(&format!("/message/sendPoll/{instance}"), &body).await
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::EvolutionConfig;

    fn service_for(server: &MockServer) -> MessageService {
        let config = EvolutionConfig::new(server.uri(), "test-api-key");
        MessageService::new(EvolutionApi::new(&config).expect("transport client"))
    }

    fn options(entries: &[(&str, Value)]) -> SendOptions {
        entries.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[tokio::test]
    async fn send_text_merges_options_into_the_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/message/sendText/inst1"))
            .and(body_json(json!({
                "number": "5511999999999",
                "text": "hi",
                "delay": 100,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "sent" })))
            .expect(1)
            .mount(&server)
            .await;

        let response = service_for(&server)
            .send_text("inst1", "5511999999999", "hi", options(&[("delay", json!(100))]))
            .await;

        assert_eq!(response, json!({ "status": "sent" }));
    }

    #[tokio::test]
    async fn send_text_without_options_sends_only_named_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/message/sendText/inst1"))
            .and(body_json(json!({ "number": "5511999999999", "text": "hi" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        service_for(&server)
            .send_text("inst1", "5511999999999", "hi", SendOptions::new())
            .await;
    }

    #[tokio::test]
    async fn colliding_option_overrides_the_named_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/message/sendText/inst1"))
            .and(body_json(json!({ "number": "5511999999999", "text": "override" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        service_for(&server)
            .send_text(
                "inst1",
                "5511999999999",
                "hi",
                options(&[("text", json!("override"))]),
            )
            .await;
    }

    #[tokio::test]
    async fn send_media_posts_all_named_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/message/sendMedia/inst1"))
            .and(body_json(json!({
                "number": "5511999999999",
                "media": "https://example.com/cat.png",
                "mediatype": "image",
                "mimetype": "image/png",
                "caption": "a cat",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        service_for(&server)
            .send_media(
                "inst1",
                "5511999999999",
                "https://example.com/cat.png",
                "image",
                "image/png",
                "a cat",
                SendOptions::new(),
            )
            .await;
    }

    #[tokio::test]
    async fn send_audio_uses_the_whatsapp_audio_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/message/sendWhatsAppAudio/inst1"))
            .and(body_json(json!({
                "number": "5511999999999",
                "audio": "https://example.com/note.ogg",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        service_for(&server)
            .send_audio("inst1", "5511999999999", "https://example.com/note.ogg", SendOptions::new())
            .await;
    }

    #[tokio::test]
    async fn send_location_posts_coordinates_as_numbers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/message/sendLocation/inst1"))
            .and(body_json(json!({
                "number": "5511999999999",
                "name": "Office",
                "address": "Av. Paulista, 1000",
                "latitude": -23.5614,
                "longitude": -46.6558,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        service_for(&server)
            .send_location(
                "inst1",
                "5511999999999",
                "Office",
                "Av. Paulista, 1000",
                -23.5614,
                -46.6558,
                SendOptions::new(),
            )
            .await;
    }

    #[tokio::test]
    async fn send_poll_posts_prompt_count_and_values() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/message/sendPoll/inst1"))
            .and(body_json(json!({
                "number": "5511999999999",
                "name": "Lunch?",
                "selectableCount": 1,
                "values": ["Pizza", "Sushi"],
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        service_for(&server)
            .send_poll(
                "inst1",
                "5511999999999",
                "Lunch?",
                1,
                &["Pizza", "Sushi"],
                SendOptions::new(),
            )
            .await;
    }

    #[test]
    fn merge_keeps_non_object_payloads_untouched() {
        let merged = merge(json!("scalar"), options(&[("delay", json!(100))]));
        assert_eq!(merged, json!("scalar"));
    }
}
