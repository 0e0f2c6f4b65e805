//! Store path construction.
//!
//! The path built here is also the literal prefix stripped from every fetched
//! parameter name, so both sides must use the same string.

use paramstore_config::RepositoryConfig;
use paramstore_config::constants::{
    DEFAULT_PATH_PREFIX, DEFAULT_PROFILE_SEPARATOR, PATH_SEPARATOR,
};

/// Build the store path for one application/profile pair.
///
/// `prefix + application + separator + profile + "/"`. An empty profile is not
/// elided, and no character validation is performed.
pub fn resolve_path(config: &RepositoryConfig, application: &str, profile: &str) -> String {
    let prefix = or_default(&config.path_prefix, DEFAULT_PATH_PREFIX);
    let separator = or_default(&config.profile_separator, DEFAULT_PROFILE_SEPARATOR);

    let mut path = String::with_capacity(
        prefix.len() + application.len() + separator.len() + profile.len() + 1,
    );
    path.push_str(prefix);
    path.push_str(application);
    path.push_str(separator);
    path.push_str(profile);
    path.push_str(PATH_SEPARATOR);
    path
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(prefix: &str, separator: &str) -> RepositoryConfig {
        RepositoryConfig {
            path_prefix: prefix.to_string(),
            profile_separator: separator.to_string(),
            ..RepositoryConfig::default()
        }
    }

    #[test]
    fn test_default_profile() {
        let path = resolve_path(&RepositoryConfig::default(), "app", "default");
        assert_eq!(path, "/app/default/");
    }

    #[test]
    fn test_custom_profile_separator() {
        let path = resolve_path(&config("/", "--"), "app", "profile1");
        assert_eq!(path, "/app--profile1/");
    }

    #[test]
    fn test_custom_path_prefix() {
        let path = resolve_path(&config("/config/", "/"), "app", "profile1");
        assert_eq!(path, "/config/app/profile1/");
    }

    #[test]
    fn test_empty_profile_is_not_elided() {
        let path = resolve_path(&RepositoryConfig::default(), "app", "");
        assert_eq!(path, "/app//");
    }

    #[test]
    fn test_empty_settings_use_defaults() {
        let path = resolve_path(&config("", ""), "app", "dev");
        assert_eq!(path, "/app/dev/");
    }
}
