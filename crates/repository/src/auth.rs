//! Credential resolution for store requests.
//!
//! Responsibilities:
//! - Decode the caller-supplied config token (base64 JSON session credentials).
//! - Choose the credential source for a request: caller token, named local
//!   profile, or the SDK default chain, in that order.
//!
//! Does NOT handle:
//! - Loading credentials from profiles or the default chain (delegated to the SDK).
//! - Caching: resolution runs for every fetch because the caller token may differ per call.
//!
//! Invariants:
//! - Secret material is held in `SecretString` and never appears in `Debug` output.
//! - A blank or absent token is not an error; a present but malformed one is.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::error::{RepositoryError, Result};

/// Standard alphabet. Encodes with padding, decodes with or without it.
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Temporary session credentials supplied by the caller.
///
/// The JSON form uses exactly the keys `AccessKeyId`, `SecretAccessKey` and
/// `SessionToken`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CredentialToken {
    #[serde(rename = "AccessKeyId")]
    pub access_key_id: String,
    #[serde(rename = "SecretAccessKey", with = "secret_string")]
    pub secret_access_key: SecretString,
    #[serde(rename = "SessionToken", with = "secret_string")]
    pub session_token: SecretString,
}

impl CredentialToken {
    /// Create a token from its three parts.
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: impl Into<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: SecretString::new(secret_access_key.into().into()),
            session_token: SecretString::new(session_token.into().into()),
        }
    }

    /// Decode a base64-encoded JSON token.
    pub fn decode(encoded: &str) -> Result<Self> {
        let json = TOKEN_ENGINE
            .decode(encoded.trim())
            .map_err(|e| RepositoryError::CredentialParse {
                message: format!("invalid base64: {e}"),
            })?;

        // serde_json messages can quote input values; report position only.
        serde_json::from_slice(&json).map_err(|e| RepositoryError::CredentialParse {
            message: format!(
                "invalid credential JSON ({:?} error at line {} column {})",
                e.classify(),
                e.line(),
                e.column()
            ),
        })
    }

    /// Encode the token in the form accepted by [`CredentialToken::decode`].
    pub fn encode(&self) -> Result<String> {
        let json = serde_json::to_vec(self).map_err(|e| RepositoryError::CredentialParse {
            message: format!("unable to serialize credentials: {e}"),
        })?;
        Ok(TOKEN_ENGINE.encode(json))
    }

    /// Convert into SDK credentials for request signing.
    pub(crate) fn to_sdk_credentials(&self) -> aws_sdk_ssm::config::Credentials {
        aws_sdk_ssm::config::Credentials::new(
            self.access_key_id.clone(),
            self.secret_access_key.expose_secret().to_string(),
            Some(self.session_token.expose_secret().to_string()),
            None,
            "paramstore-config-token",
        )
    }
}

/// Where the credentials for one store request come from.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    /// Temporary credentials supplied with the request.
    CallerToken(CredentialToken),
    /// A named profile from the local shared config/credentials files.
    LocalProfile(String),
    /// The SDK default chain (env vars, instance metadata, shared config).
    DefaultChain,
}

impl CredentialSource {
    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            CredentialSource::CallerToken(_) => "caller_token",
            CredentialSource::LocalProfile(_) => "local_profile",
            CredentialSource::DefaultChain => "default_chain",
        }
    }
}

/// Resolves the credential source for each request.
#[derive(Debug, Clone, Default)]
pub struct CredentialsResolver {
    local_profile_name: Option<String>,
}

impl CredentialsResolver {
    /// Create a resolver that falls back to the given named profile.
    pub fn new(local_profile_name: Option<String>) -> Self {
        Self {
            local_profile_name: local_profile_name.filter(|name| !name.trim().is_empty()),
        }
    }

    /// Pick the credential source for a request.
    ///
    /// # Errors
    /// Returns [`RepositoryError::CredentialParse`] if a non-blank token is
    /// supplied but cannot be decoded.
    pub fn resolve(&self, config_token: Option<&SecretString>) -> Result<CredentialSource> {
        if let Some(token) = config_token.map(|t| t.expose_secret())
            && !token.trim().is_empty()
        {
            return CredentialToken::decode(token).map(CredentialSource::CallerToken);
        }

        Ok(match &self.local_profile_name {
            Some(name) => CredentialSource::LocalProfile(name.clone()),
            None => CredentialSource::DefaultChain,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN_JSON: &str =
        r#"{"AccessKeyId":"accessKey","SecretAccessKey":"secretKey","SessionToken":"sessionToken"}"#;

    use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};

    fn encoded(json: &str) -> SecretString {
        SecretString::new(STANDARD.encode(json).into())
    }

    #[test]
    fn test_caller_token_wins_over_local_profile() {
        let resolver = CredentialsResolver::new(Some("customProfile".to_string()));
        let source = resolver.resolve(Some(&encoded(TOKEN_JSON))).unwrap();

        match source {
            CredentialSource::CallerToken(token) => {
                assert_eq!(token.access_key_id, "accessKey");
                assert_eq!(token.secret_access_key.expose_secret(), "secretKey");
                assert_eq!(token.session_token.expose_secret(), "sessionToken");
            }
            other => panic!("expected caller token, got {other:?}"),
        }
    }

    #[test]
    fn test_local_profile_without_token() {
        let resolver = CredentialsResolver::new(Some("customProfile".to_string()));
        let source = resolver.resolve(None).unwrap();
        assert!(matches!(source, CredentialSource::LocalProfile(ref n) if n == "customProfile"));
    }

    #[test]
    fn test_default_chain_without_token_or_profile() {
        let resolver = CredentialsResolver::new(None);
        assert!(matches!(
            resolver.resolve(None).unwrap(),
            CredentialSource::DefaultChain
        ));
    }

    #[test]
    fn test_blank_token_falls_through() {
        let resolver = CredentialsResolver::new(None);
        let blank = SecretString::new("   ".to_string().into());
        assert!(matches!(
            resolver.resolve(Some(&blank)).unwrap(),
            CredentialSource::DefaultChain
        ));
    }

    #[test]
    fn test_blank_profile_name_is_ignored() {
        let resolver = CredentialsResolver::new(Some(String::new()));
        assert!(matches!(
            resolver.resolve(None).unwrap(),
            CredentialSource::DefaultChain
        ));
    }

    #[test]
    fn test_invalid_base64_is_credential_error() {
        let resolver = CredentialsResolver::new(None);
        let bad = SecretString::new("%%%not-base64%%%".to_string().into());
        let err = resolver.resolve(Some(&bad)).unwrap_err();
        assert!(err.is_credential_error());
    }

    #[test]
    fn test_missing_field_is_credential_error() {
        let resolver = CredentialsResolver::new(None);
        let token = encoded(r#"{"AccessKeyId":"a","SecretAccessKey":"b"}"#);
        let err = resolver.resolve(Some(&token)).unwrap_err();
        assert!(matches!(err, RepositoryError::CredentialParse { .. }));
    }

    #[test]
    fn test_unknown_field_is_credential_error() {
        let token = encoded(
            r#"{"AccessKeyId":"a","SecretAccessKey":"b","SessionToken":"c","Expiration":"x"}"#,
        );
        assert!(CredentialToken::decode(token.expose_secret()).is_err());
    }

    const SHORT_TOKEN_JSON: &str =
        r#"{"AccessKeyId":"ak","SecretAccessKey":"sk","SessionToken":"st1"}"#;

    #[test]
    fn test_unpadded_token_decodes() {
        let unpadded = STANDARD_NO_PAD.encode(SHORT_TOKEN_JSON);
        assert_eq!(
            unpadded,
            "eyJBY2Nlc3NLZXlJZCI6ImFrIiwiU2VjcmV0QWNjZXNzS2V5Ijoic2siLCJTZXNzaW9uVG9rZW4iOiJzdDEifQ"
        );

        let token = CredentialToken::decode(&unpadded).unwrap();
        assert_eq!(token.access_key_id, "ak");
        assert_eq!(token.secret_access_key.expose_secret(), "sk");
        assert_eq!(token.session_token.expose_secret(), "st1");
    }

    #[test]
    fn test_padded_token_still_decodes() {
        let token = encoded(SHORT_TOKEN_JSON);
        assert!(token.expose_secret().ends_with("=="));
        assert!(CredentialToken::decode(token.expose_secret()).is_ok());
    }

    #[test]
    fn test_serialization_uses_fixed_field_names() {
        let token = CredentialToken::new("accessKey", "secretKey", "sessionToken");
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, TOKEN_JSON);
    }

    #[test]
    fn test_encode_decode_inverse() {
        let token = CredentialToken::new("accessKey", "secretKey", "sessionToken");
        let decoded = CredentialToken::decode(&token.encode().unwrap()).unwrap();
        assert_eq!(decoded.access_key_id, "accessKey");
        assert_eq!(decoded.session_token.expose_secret(), "sessionToken");
    }

    #[test]
    fn test_sdk_credentials_carry_session_token() {
        let token = CredentialToken::new("accessKey", "secretKey", "sessionToken");
        let creds = token.to_sdk_credentials();
        assert_eq!(creds.access_key_id(), "accessKey");
        assert_eq!(creds.secret_access_key(), "secretKey");
        assert_eq!(creds.session_token(), Some("sessionToken"));
    }

    // ============================================================================
    // Security-focused tests for secret handling
    // ============================================================================

    #[test]
    fn test_secrets_not_exposed_in_debug() {
        let token = CredentialToken::new("accessKey", "secret-key-12345", "session-token-67890");
        let debug_output = format!("{:?}", CredentialSource::CallerToken(token));

        assert!(!debug_output.contains("secret-key-12345"));
        assert!(!debug_output.contains("session-token-67890"));
        assert!(debug_output.contains("accessKey"));
    }

    #[test]
    fn test_parse_error_does_not_echo_token() {
        let secret = "super-secret-session-material";
        let token = encoded(&format!(r#"{{"AccessKeyId":"{secret}"#));
        let err = CredentialToken::decode(token.expose_secret()).unwrap_err();
        assert!(!err.to_string().contains(secret));
    }

    #[test]
    fn test_json_string_payload_is_not_echoed() {
        let secret = "secret-session-material";
        let token = encoded(&format!(r#""{secret}""#));
        let err = CredentialToken::decode(token.expose_secret()).unwrap_err();

        assert!(err.is_credential_error());
        let message = err.to_string();
        assert!(!message.contains(secret), "leaked: {message}");
        assert!(message.contains("line 1"));
    }

    #[test]
    fn test_wrong_value_type_is_not_echoed() {
        let secret = "hidden-value-42";
        let token = encoded(&format!(
            r#"{{"AccessKeyId":["{secret}"],"SecretAccessKey":"b","SessionToken":"c"}}"#
        ));
        let err = CredentialToken::decode(token.expose_secret()).unwrap_err();
        assert!(!err.to_string().contains(secret));
    }
}
