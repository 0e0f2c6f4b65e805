//! Flattening fetched parameters into a named property source.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{RepositoryError, Result};
use crate::store::Parameter;

/// Prefix of every property source name; the store path follows it.
pub const NAME_PREFIX: &str = "aws:ssm:parameter:";

/// A named, flat set of properties from one store path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySource {
    pub name: String,
    pub source: BTreeMap<String, String>,
}

impl PropertySource {
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.source.get(key).map(String::as_str)
    }
}

/// Build the property source for `path` from the parameters fetched under it.
///
/// Keys are the parameter names with the literal `path` removed and every `/`
/// replaced by `.`. Later parameters overwrite earlier ones with the same key.
///
/// # Errors
/// Returns [`RepositoryError::MalformedParameterName`] for a parameter whose
/// name does not start with `path`.
pub fn build_property_source(path: &str, parameters: Vec<Parameter>) -> Result<PropertySource> {
    let mut source = BTreeMap::new();

    for Parameter { name, value } in parameters {
        let key = flatten_key(path, &name)?;
        source.insert(key, value);
    }

    Ok(PropertySource {
        name: format!("{NAME_PREFIX}{path}"),
        source,
    })
}

/// Flat property key for a parameter name under `path`.
pub fn flatten_key(path: &str, name: &str) -> Result<String> {
    let relative = name
        .strip_prefix(path)
        .ok_or_else(|| RepositoryError::MalformedParameterName {
            path: path.to_string(),
            name: name.to_string(),
        })?;
    Ok(relative.replace('/', "."))
}
