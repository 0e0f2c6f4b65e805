//! Paths command implementation.

use paramstore_config::Config;
use paramstore_repository::profile_paths;

use crate::formatters::format_paths;

pub fn run(config: &Config, application: &str, profile: &str) {
    let paths = profile_paths(&config.repository, application, profile);
    print!("{}", format_paths(&paths));
}
