/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads and parses an environment variable, falling back to `default`
///
/// An unset variable yields the default silently; a value that fails to parse
/// is reported at error level before the default is used.
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - Value used when the variable is unset or invalid
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|e| {
            error!("Failed to parse {}={:?}: {:?}, using default", env_var, val, e);
            default
        }),
        Err(_) => default,
    }
}

/// Reads and parses an environment variable
///
/// Empty values count as unset so that `FIRESTORE_PROXY=` in a `.env` file
/// disables the setting.
///
/// # Returns
/// Parsed value if the variable is set, non-empty and valid, `None` otherwise
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var)
        .ok()
        .filter(|val| !val.trim().is_empty())
        .and_then(|val| val.parse::<T>().ok())
}

/// Reads a boolean switch such as `FIRESTORE_ACCEPT_INVALID_CERTS`
///
/// Accepts `true/false`, `1/0`, `yes/no` and `on/off`, case-insensitively.
/// Unset or empty variables give `default`; anything else is reported at
/// error level and gives `default` as well.
pub fn get_env_flag(env_var: &str, default: bool) -> bool {
    let Some(val) = get_env_or_none::<String>(env_var) else {
        return default;
    };
    match val.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => true,
        "false" | "0" | "no" | "off" => false,
        _ => {
            error!("Failed to parse {}={:?} as a flag, using default", env_var, val);
            default
        }
    }
}
