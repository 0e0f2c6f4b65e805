//! Common test utilities for integration tests.
//!
//! # What this does NOT handle
//! - Mock server expectations (use wiremock directly in tests)

#[allow(unused_imports)]
pub use paramstore_repository::testing::{InMemoryParameterStore, load_fixture, sample_config_token};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use aws_sdk_ssm::Client;
use aws_sdk_ssm::config::retry::RetryConfig;
use aws_sdk_ssm::config::{BehaviorVersion, Credentials, Region};
use paramstore_config::RepositoryConfig;
use paramstore_repository::SsmParameterStore;
use wiremock::matchers::{header, method, path};

/// SSM JSON protocol target for the by-path listing.
pub const GET_PARAMETERS_BY_PATH: &str = "AmazonSSM.GetParametersByPath";

/// Content type of SSM JSON protocol requests and responses.
pub const AMZ_JSON: &str = "application/x-amz-json-1.1";

/// Access key the static test client signs with.
#[allow(dead_code)]
pub const CLIENT_ACCESS_KEY: &str = "client-access-key";

/// A store whose SDK client talks to `server` with static credentials.
#[allow(dead_code)]
pub fn store_for(server: &MockServer) -> SsmParameterStore {
    let config = aws_sdk_ssm::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .endpoint_url(server.uri())
        .credentials_provider(Credentials::new(
            CLIENT_ACCESS_KEY,
            "client-secret-key",
            None,
            None,
            "test",
        ))
        .retry_config(RetryConfig::disabled())
        .build();
    SsmParameterStore::new(Client::from_conf(config))
}

/// Repository settings pointing at `server`.
#[allow(dead_code)]
pub fn config_for(server: &MockServer) -> RepositoryConfig {
    RepositoryConfig {
        region: Some("us-east-1".to_string()),
        endpoint_url: Some(server.uri()),
        ..RepositoryConfig::default()
    }
}

/// Matcher base for a by-path listing request.
#[allow(dead_code)]
pub fn by_path_request() -> wiremock::MockBuilder {
    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("x-amz-target", GET_PARAMETERS_BY_PATH))
}

/// A successful SSM JSON response with the given body.
#[allow(dead_code)]
pub fn amz_json(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_string(), AMZ_JSON)
}

/// An SSM JSON error response.
#[allow(dead_code)]
pub fn amz_error(status: u16, body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body.to_string(), AMZ_JSON)
}
