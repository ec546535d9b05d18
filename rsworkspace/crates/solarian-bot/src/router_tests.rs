#[cfg(test)]
mod tests {
    use crate::commands::{build_router, Command, CommandInfo, HelloCommand};
    use crate::config::Config;
    use crate::errors::{CommandError, Upstream};
    use crate::router::{CommandRouter, Invocation};
    use serenity::async_trait;
    use solarian_types::Reply;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Always fails as if its upstream were down; counts calls.
    struct BrokenCommand {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Command for BrokenCommand {
        fn info(&self) -> CommandInfo {
            CommandInfo {
                name: "broken",
                description: "Always fails",
                usage: "broken",
                example: "broken",
            }
        }

        async fn execute(&self, _args: &[String]) -> Result<Reply, CommandError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(CommandError::Status {
                service: Upstream::Giphy,
                status: 500,
            })
        }
    }

    /// Echoes its arguments back.
    struct EchoCommand;

    #[async_trait]
    impl Command for EchoCommand {
        fn info(&self) -> CommandInfo {
            CommandInfo {
                name: "echo",
                description: "Echoes arguments",
                usage: "echo <words>",
                example: "echo hi",
            }
        }

        async fn execute(&self, args: &[String]) -> Result<Reply, CommandError> {
            Ok(Reply::text(args.join(",")))
        }
    }

    fn router() -> CommandRouter {
        CommandRouter::new("!")
            .register(HelloCommand)
            .register(EchoCommand)
            .with_help()
    }

    fn config(giphy: &str, inventory: &str) -> Config {
        serde_json::from_value(serde_json::json!({
            "token": "TOKEN",
            "giphyAPIKey": "KEY",
            "giphyBaseUrl": giphy,
            "inventoryBaseUrl": inventory,
            "httpTimeoutSecs": 2
        }))
        .unwrap()
    }

    // ── parse ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_parse_name_and_args() {
        assert_eq!(
            router().parse("!solarian 42 extra"),
            Some(Invocation {
                name: "solarian".to_string(),
                args: vec!["42".to_string(), "extra".to_string()],
            })
        );
    }

    #[test]
    fn test_parse_collapses_whitespace() {
        let inv = router().parse("  !echo   a \t b  ").unwrap();
        assert_eq!(inv.name, "echo");
        assert_eq!(inv.args, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_requires_prefix() {
        let r = router();
        assert!(r.parse("hello").is_none());
        assert!(r.parse("?hello").is_none());
        assert!(r.parse("").is_none());
        assert!(r.parse("!").is_none());
        assert!(r.parse("! hello").is_none());
    }

    #[test]
    fn test_parse_multichar_prefix() {
        let r = CommandRouter::new("sol!").register(HelloCommand);
        assert_eq!(r.parse("sol!hello").unwrap().name, "hello");
        assert!(r.parse("!hello").is_none());
    }

    // ── dispatch ──────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_dispatch_hello_any_case() {
        let r = router();
        for content in ["!hello", "!HELLO", "!Hello there", "!hello a b c"] {
            let handled = r.dispatch(content).await.unwrap();
            assert_eq!(handled.command, "hello");
            assert_eq!(handled.reply, Reply::text("Hello there!"));
            assert!(!handled.failed);
        }
    }

    #[tokio::test]
    async fn test_dispatch_passes_arguments() {
        let handled = router().dispatch("!echo one two").await.unwrap();
        assert_eq!(handled.reply.content_str(), "one,two");
    }

    #[tokio::test]
    async fn test_dispatch_ignores_unknown_and_plain_text() {
        let r = router();
        assert!(r.dispatch("!nope").await.is_none());
        assert!(r.dispatch("hello").await.is_none());
        assert!(r.dispatch("just chatting").await.is_none());
    }

    #[tokio::test]
    async fn test_failing_command_replies_and_router_survives() {
        let calls = Arc::new(AtomicUsize::new(0));
        let r = CommandRouter::new("!")
            .register(BrokenCommand {
                calls: calls.clone(),
            })
            .register(HelloCommand);

        let handled = r.dispatch("!broken").await.unwrap();
        assert!(handled.failed);
        assert!(handled.reply.reply_to_origin);
        assert_eq!(
            handled.reply.content_str(),
            "Sorry, Giphy is not answering right now. Try again later."
        );

        let again = r.dispatch("!broken").await.unwrap();
        assert!(again.failed);
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        let hello = r.dispatch("!hello").await.unwrap();
        assert_eq!(hello.reply.content_str(), "Hello there!");
    }

    #[tokio::test]
    async fn test_help_lists_registered_commands() {
        let handled = router().dispatch("!help").await.unwrap();
        let text = handled.reply.content_str();
        assert!(text.contains("`!hello`"));
        assert!(text.contains("`!echo <words>` - Echoes arguments"));
        assert!(text.contains("`!help`"));
    }

    #[test]
    fn test_catalog_in_registration_order() {
        let names: Vec<&str> = router().catalog().iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["hello", "echo", "help"]);
    }

    // ── full router against mocked upstreams ──────────────────────────────────

    #[tokio::test]
    async fn test_build_router_registers_all_commands() {
        let r = build_router(&config("http://127.0.0.1:1", "http://127.0.0.1:1")).unwrap();
        let names: Vec<&str> = r.catalog().iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["hello", "robot", "solarian", "help"]);
        assert_eq!(r.prefix(), "!");
    }

    #[tokio::test]
    async fn test_solarian_rejection_is_not_a_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let r = build_router(&config(&server.uri(), &server.uri())).unwrap();
        let handled = r.dispatch("!solarian notavalidtoken").await.unwrap();
        assert!(!handled.failed);
        assert!(handled.reply.reply_to_origin);
        assert_eq!(
            handled.reply.content_str(),
            "That is not a valid mint number or mint hash"
        );
        server.verify().await;
    }

    #[tokio::test]
    async fn test_solarian_not_found_reply() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/mints"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let r = build_router(&config(&server.uri(), &server.uri())).unwrap();
        let handled = r.dispatch("!solarian 1").await.unwrap();
        assert!(!handled.failed);
        assert!(handled.reply.embed.is_none());
        assert_eq!(handled.reply.content_str(), "Could not find solarian match");
    }

    #[tokio::test]
    async fn test_robot_upstream_down_then_hello_still_works() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/gifs/random"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let r = build_router(&config(&server.uri(), &server.uri())).unwrap();
        let handled = r.dispatch("!robot").await.unwrap();
        assert!(handled.failed);
        assert!(handled.reply.content_str().contains("Giphy"));

        let hello = r.dispatch("!hello").await.unwrap();
        assert_eq!(hello.reply.content_str(), "Hello there!");
    }
}
