// Centralized environment variable keys to avoid repeated string literals.

pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_LOG_FILE: &str = "LOG_FILE";
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_TESTER_BASE_DIR: &str = "TESTER_BASE_DIR";

/// Name of the optional environment-definition file inside the base directory.
pub const ENV_FILE_NAME: &str = ".env";
