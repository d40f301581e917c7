//! Environment variable helpers for the configuration layer.
//!
//! # Example
//!
//! ```
//! use earpack_types::env_utils::{env_bool, env_string, env_var};
//!
//! let threads: Option<usize> = env_var("EARPACK_THREADS");
//! let main_id: Option<String> = env_string("EARPACK_MAIN_ARTIFACT_ID");
//! let verbose = env_bool("EARPACK_VERBOSE");
//! ```

use std::str::FromStr;

/// Parse an environment variable into a type that implements `FromStr`.
///
/// Returns `None` if the variable is not set or cannot be parsed.
pub fn env_var<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Raw string value of an environment variable.
///
/// A variable set to the empty string is returned as `Some("")`: an empty
/// main artifact id is a meaningful setting.
pub fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// True if the variable is set to "1", "true", "yes" or "on" (case-insensitive).
pub fn env_bool(key: &str) -> bool {
    std::env::var(key)
        .ok()
        .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_parsing() {
        std::env::set_var("EARPACK_TEST_USIZE", " 4 ");
        let val: Option<usize> = env_var("EARPACK_TEST_USIZE");
        assert_eq!(val, Some(4));

        std::env::set_var("EARPACK_TEST_BAD_USIZE", "four");
        let bad: Option<usize> = env_var("EARPACK_TEST_BAD_USIZE");
        assert_eq!(bad, None);

        let missing: Option<usize> = env_var("EARPACK_TEST_MISSING_1");
        assert_eq!(missing, None);

        std::env::remove_var("EARPACK_TEST_USIZE");
        std::env::remove_var("EARPACK_TEST_BAD_USIZE");
    }

    #[test]
    fn test_env_string_keeps_empty_value() {
        std::env::set_var("EARPACK_TEST_EMPTY", "");
        assert_eq!(env_string("EARPACK_TEST_EMPTY"), Some(String::new()));
        assert_eq!(env_string("EARPACK_TEST_MISSING_2"), None);
        std::env::remove_var("EARPACK_TEST_EMPTY");
    }

    #[test]
    fn test_env_bool() {
        std::env::set_var("EARPACK_TEST_BOOL_YES", "YES");
        std::env::set_var("EARPACK_TEST_BOOL_OFF", "off");

        assert!(env_bool("EARPACK_TEST_BOOL_YES"));
        assert!(!env_bool("EARPACK_TEST_BOOL_OFF"));
        assert!(!env_bool("EARPACK_TEST_MISSING_3"));

        std::env::remove_var("EARPACK_TEST_BOOL_YES");
        std::env::remove_var("EARPACK_TEST_BOOL_OFF");
    }
}
