//! Shared test utilities for paramstore CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading and
//!   host configuration leakage.
//! - Emulate the store's JSON protocol with wiremock.
//!
//! Invariants / Assumptions:
//! - The SDK default chain resolves to static dummy credentials from env vars,
//!   never to instance metadata or the host's shared files.

use assert_cmd::Command;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockBuilder, ResponseTemplate};

/// Returns a hermetic `paramstore` command for integration testing.
pub fn paramstore_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("paramstore");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    for var in [
        "PARAMSTORE_BACKEND",
        "PARAMSTORE_ORDER",
        "PARAMSTORE_PROFILE_SEPARATOR",
        "PARAMSTORE_PATH_PREFIX",
        "PARAMSTORE_REGION",
        "PARAMSTORE_AWS_PROFILE",
        "PARAMSTORE_ENDPOINT_URL",
        "PARAMSTORE_CONFIG_TOKEN",
        "AWS_PROFILE",
        "AWS_SESSION_TOKEN",
        "AWS_ENDPOINT_URL",
        "PARAMSTORE_CONFIG_PATH",
    ] {
        cmd.env_remove(var);
    }

    // Never read the host's config file or AWS shared files
    cmd.env("XDG_CONFIG_HOME", "/nonexistent/paramstore-test")
        .env("AWS_CONFIG_FILE", "/nonexistent/aws/config")
        .env("AWS_SHARED_CREDENTIALS_FILE", "/nonexistent/aws/credentials")
        .env("AWS_EC2_METADATA_DISABLED", "true")
        .env("AWS_ACCESS_KEY_ID", "env-access-key")
        .env("AWS_SECRET_ACCESS_KEY", "env-secret-key")
        .env("AWS_REGION", "us-east-1");

    cmd
}

/// Matcher base for a by-path listing request.
#[allow(dead_code)]
pub fn by_path_request() -> MockBuilder {
    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("x-amz-target", "AmazonSSM.GetParametersByPath"))
}

/// An SSM JSON protocol response.
#[allow(dead_code)]
pub fn amz_json(status: u16, body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body.to_string(), "application/x-amz-json-1.1")
}
