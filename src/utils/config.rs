/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The default value to use if the environment variable is not found or cannot be parsed
///
/// # Returns
///
/// The parsed value of the environment variable or the default value
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Gets an environment variable and parses it, returning None if not found or invalid
///
/// # Arguments
/// * `env_var` - Name of the environment variable
///
/// # Returns
/// Parsed value if found and valid, None otherwise
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().ok(),
        Err(_) => None,
    }
}

/// Reads a textual boolean environment variable
///
/// The backends write `"True"`/`"False"` as well as `"true"`/`"false"` into
/// deployment env files, so both spellings are accepted.
///
/// # Arguments
/// * `env_var` - Name of the environment variable
///
/// # Returns
/// `Some(true)`/`Some(false)` for recognized values, None when unset or unrecognized
pub fn get_env_bool(env_var: &str) -> Option<bool> {
    match env::var(env_var) {
        Ok(val) => match val.as_str() {
            "True" | "true" => Some(true),
            "False" | "false" => Some(false),
            _ => None,
        },
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_or_default_falls_back() {
        let value: u32 = get_env_or_default("ZE_CLIENT_TEST_MISSING_VAR", 42);
        assert_eq!(value, 42);
    }

    #[test]
    fn env_bool_recognizes_both_spellings() {
        // SAFETY: test-local variable names, no other thread reads them
        unsafe {
            env::set_var("ZE_CLIENT_TEST_BOOL_UPPER", "True");
            env::set_var("ZE_CLIENT_TEST_BOOL_LOWER", "false");
            env::set_var("ZE_CLIENT_TEST_BOOL_JUNK", "yes");
        }
        assert_eq!(get_env_bool("ZE_CLIENT_TEST_BOOL_UPPER"), Some(true));
        assert_eq!(get_env_bool("ZE_CLIENT_TEST_BOOL_LOWER"), Some(false));
        assert_eq!(get_env_bool("ZE_CLIENT_TEST_BOOL_JUNK"), None);
        assert_eq!(get_env_bool("ZE_CLIENT_TEST_BOOL_UNSET"), None);
    }
}
