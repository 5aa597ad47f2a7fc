//! Wiremock server driven from synchronous tests.
//!
//! The Tidelift client is blocking, so the server lives on its own runtime
//! and requests are made outside of it.

use serde_json::Value;
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer, Request};

pub struct CatalogServer {
    // Declared first so it is dropped (and verified) before the runtime
    server: MockServer,
    runtime: Runtime,
}

impl CatalogServer {
    pub fn start() -> Self {
        let runtime = Runtime::new().unwrap();
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    pub fn received_requests(&self) -> Vec<Request> {
        self.runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }

    pub fn received_paths(&self) -> Vec<String> {
        self.received_requests()
            .iter()
            .map(|r| r.url.path().to_string())
            .collect()
    }
}

/// The `purls` array of a lookup request body
pub fn requested_purls(request: &Request) -> Vec<String> {
    let body: Value = request.body_json().unwrap();
    body["purls"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}
