use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use erudite_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::Value;
use test_context::AsyncTestContext;

/// A server backed by a fresh in-memory store.
pub struct ApiContext {
    pub server: TestServer,
}

impl ApiContext {
    pub async fn with_args(args: &[&str]) -> Self {
        let args = Args::parse_from(
            ["erudite-api", "--database-backend", "memory"]
                .iter()
                .chain(args.iter())
                .copied(),
        );
        let state = state(Arc::new(args))
            .await
            .expect("in-memory state should build");
        let server = TestServer::new(router(state).expect("router should build"))
            .expect("test server should start");

        Self { server }
    }

    /// Creates a document and returns its identifier.
    pub async fn create(&self, path: &str, body: Value) -> String {
        let response = self.server.post(path).json(&body).await;
        response.assert_status(axum::http::StatusCode::CREATED);

        response.json::<Value>()["data"]["id"]
            .as_str()
            .expect("created document should carry an id")
            .to_string()
    }
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        ApiContext::with_args(&[]).await
    }
}
