//! Delivery tests with real HTTP assertions.
//!
//! Uses wiremock to intercept Discord API calls via serenity's `HttpBuilder::proxy()`.
//! Each test verifies the HTTP method, path, and body sent to Discord. The
//! mock answers 204, so the send itself reports a decode error which the
//! tests ignore.

#[cfg(test)]
mod tests {
    use crate::outbound::deliver;
    use serenity::http::Http;
    use serenity::model::id::{ChannelId, MessageId};
    use solarian_types::{Embed, EmbedField, Reply};
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

    const CHANNEL: u64 = 100;
    const ORIGIN: u64 = 555;
    const MESSAGES_PATH: &str = "/api/v10/channels/100/messages";

    /// Create an Http client that routes all Discord API calls to a local wiremock server.
    fn proxy_http(proxy_url: &str) -> Http {
        serenity::http::HttpBuilder::new("fake-token")
            .proxy(proxy_url)
            .ratelimiter_disabled(true)
            .build()
    }

    /// Body must not thread the message onto another one.
    struct NotThreaded;

    impl Match for NotThreaded {
        fn matches(&self, request: &Request) -> bool {
            !String::from_utf8_lossy(&request.body).contains("message_reference")
        }
    }

    async fn send(server: &MockServer, reply: &Reply) {
        let http = proxy_http(&server.uri());
        let _ = deliver(
            &http,
            ChannelId::new(CHANNEL),
            MessageId::new(ORIGIN),
            reply,
        )
        .await;
    }

    fn card() -> Embed {
        Embed {
            title: "Solarian Solarian #1".to_string(),
            image_url: Some("http://inventory.test/render/abc.gif".to_string()),
            fields: vec![
                EmbedField::inline("NAME", "Zork"),
                EmbedField::inline("MOUTH", "Grin | 3.5%"),
            ],
        }
    }

    // ── plain text ────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_text_reply_is_plain_channel_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(MESSAGES_PATH))
            .and(body_string_contains("Hello there!"))
            .and(NotThreaded)
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        send(&server, &Reply::text("Hello there!")).await;
        server.verify().await;
    }

    // ── threaded replies ──────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_reply_references_origin_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(MESSAGES_PATH))
            .and(body_string_contains("Could not find solarian match"))
            .and(body_string_contains("message_reference"))
            .and(body_string_contains("555"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        send(&server, &Reply::reply("Could not find solarian match")).await;
        server.verify().await;
    }

    // ── embeds ────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_embed_reply_carries_card() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(MESSAGES_PATH))
            .and(body_string_contains("Solarian Solarian #1"))
            .and(body_string_contains("http://inventory.test/render/abc.gif"))
            .and(body_string_contains("MOUTH"))
            .and(body_string_contains("Grin | 3.5%"))
            .and(body_string_contains("\"inline\":true"))
            .and(body_string_contains("message_reference"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        send(&server, &Reply::embed(card())).await;
        server.verify().await;
    }

    #[tokio::test]
    async fn test_embed_without_image() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(MESSAGES_PATH))
            .and(body_string_contains("No picture"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let embed = Embed {
            title: "No picture".to_string(),
            image_url: None,
            fields: vec![],
        };
        send(&server, &Reply::embed(embed)).await;
        server.verify().await;
    }

    // ── failures ──────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_rejected_send_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(MESSAGES_PATH))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "message": "Missing Permissions",
                "code": 50013
            })))
            .expect(1)
            .mount(&server)
            .await;

        let http = proxy_http(&server.uri());
        let result = deliver(
            &http,
            ChannelId::new(CHANNEL),
            MessageId::new(ORIGIN),
            &Reply::text("hi"),
        )
        .await;
        let err = result.unwrap_err();
        assert_eq!(
            crate::errors::classify(&err),
            crate::errors::SendOutcome::Permanent
        );
        server.verify().await;
    }
}
