#![allow(unused, dead_code)]

use std::path::Path;

use harvest_api::{config::Config, Client, ACCOUNT_ID_HEADER};
use httpmock::{prelude::*, Mock};

pub type TestResult = std::result::Result<(), Box<dyn std::error::Error + 'static + Send + Sync>>;

pub const ACCOUNT_ID: &str = "123456";
pub const TOKEN: &str = "Bearer test-token";

pub struct TestingEnv {
    server: MockServer,
}

impl std::fmt::Debug for TestingEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestingEnv").finish()
    }
}

impl TestingEnv {
    pub fn new() -> Self {
        let server = MockServer::start();
        Self { server }
    }

    pub fn config(&self) -> Config {
        Config::builder()
            .account_id(ACCOUNT_ID)
            .token(TOKEN)
            .base_url(self.server.base_url())
            .build()
            .unwrap()
    }

    pub fn client(&self) -> Client {
        Client::from_config(self.config())
    }

    /// Environment variables pointing a `harvest` process at this server
    pub fn vars(&self) -> Vec<(&'static str, String)> {
        vec![
            ("HARVEST_ACCOUNT_ID", ACCOUNT_ID.to_string()),
            ("ACCESS_TOKEN", TOKEN.to_string()),
            ("HARVEST_API_URL", self.server.base_url()),
        ]
    }

    /// Serve `body` for an authenticated GET on `path`
    pub fn get_json(&self, path: &str, body: impl Into<String>) -> Mock {
        let body = body.into();
        self.mock(|when, then| {
            when.method(GET)
                .path(path)
                .header(ACCOUNT_ID_HEADER, ACCOUNT_ID)
                .header("Authorization", TOKEN);
            then.status(200)
                .header("content-type", "application/json")
                .body(body);
        })
    }

    pub fn get_json_from_file(&self, path: &str, file: impl AsRef<Path>) -> Mock {
        let file = std::fs::read_to_string(file).unwrap();
        self.get_json(path, file)
    }
}

impl std::ops::Deref for TestingEnv {
    type Target = MockServer;

    fn deref(&self) -> &Self::Target {
        &self.server
    }
}

impl Default for TestingEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// A client whose base URL refuses connections
pub fn unreachable_client() -> Client {
    let config = Config::builder()
        .account_id(ACCOUNT_ID)
        .token(TOKEN)
        .base_url("http://127.0.0.1:9/v2/")
        .build()
        .unwrap();

    Client::from_config(config)
}
