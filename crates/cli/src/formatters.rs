//! Output formatters for CLI commands.

use anyhow::Result;
use clap::ValueEnum;
use paramstore_repository::Environment;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Render an environment in the configuration server's wire shape.
pub fn format_environment(env: &Environment, format: OutputFormat) -> Result<String> {
    let mut out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(env)?,
        OutputFormat::Yaml => serde_yaml::to_string(env)?,
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

/// One path per line.
pub fn format_paths(paths: &[String]) -> String {
    let mut out = String::new();
    for path in paths {
        out.push_str(path);
        out.push('\n');
    }
    out
}
