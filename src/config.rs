//! Environment variables the tool reads.
//!
//! All of them are optional; an empty value is treated the same as an unset
//! one, which is how the Actions runner exposes variables it doesn't provide.

pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";
pub const STEP_SUMMARY_VAR: &str = "GITHUB_STEP_SUMMARY";
pub const API_URL_VAR: &str = "GITHUB_API_URL";

/// Used when `GITHUB_STEP_SUMMARY` is not set.
pub const DEFAULT_OUTPUT: &str = "/dev/stdout";

/// Returns the value of `name`, or `None` if it is unset, empty or not UTF-8.
pub fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
