#![allow(dead_code)]

use base64::{Engine as _, engine::general_purpose::STANDARD};
use httpmock::MockServer;
use ns_api_rs::NsClient;
use std::{fs, path::Path};
use url::Url;

pub const USERNAME: &str = "api-user";
pub const PASSWORD: &str = "api-pass";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// Client pointed at the mock server, with the shared test credentials.
pub fn client_for(server: &MockServer) -> NsClient {
    NsClient::builder(USERNAME, PASSWORD)
        .base_url(Url::parse(&server.base_url()).unwrap())
        .build()
        .unwrap()
}

pub fn fixture(name: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let path = dir.join(format!("{name}.xml"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// The Authorization header value every request must carry.
pub fn basic_auth_header() -> String {
    let encoded = STANDARD.encode(format!("{USERNAME}:{PASSWORD}"));
    format!("Basic {encoded}")
}
