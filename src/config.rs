use std::env;
use std::fmt;

use crate::cli::Args;
use crate::error::{Error, Result};

/// Everything needed to open a session on one container.
#[derive(Clone)]
pub struct SwiftConfig {
    pub user: String,
    pub key: String,
    pub auth_url: String,
    pub container: String,
}

impl fmt::Debug for SwiftConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwiftConfig")
            .field("user", &self.user)
            .field("key", &"<redacted>")
            .field("auth_url", &self.auth_url)
            .field("container", &self.container)
            .finish()
    }
}

/// Load the configuration from command-line flags, falling back to the
/// process environment.
pub fn load_swift_config(args: &Args) -> Result<SwiftConfig> {
    resolve_swift_config(args, |key| env::var(key).ok())
}

/// Resolve the configuration with an explicit environment lookup.
///
/// Flags win over the environment. The key falls back to `PASSWORD`, then
/// `ST_KEY`. Empty values count as missing.
pub fn resolve_swift_config<F>(args: &Args, lookup: F) -> Result<SwiftConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let user = flag_or_env(args.user.as_deref(), &["ST_USER"], &lookup, "USER")?;
    let key = flag_or_env(
        args.key.as_deref(),
        &["PASSWORD", "ST_KEY"],
        &lookup,
        "KEY",
    )?;
    let auth_url = flag_or_env(args.auth_url.as_deref(), &["ST_AUTH"], &lookup, "AUTHURL")?;
    let container = flag_or_env(args.container.as_deref(), &[], &lookup, "CONTAINER")?;

    Ok(SwiftConfig {
        user,
        key,
        auth_url,
        container,
    })
}

// Helper function to reduce repetitive flag/environment fallback logic.
fn flag_or_env<F>(flag: Option<&str>, env_keys: &[&str], lookup: &F, name: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    flag.map(str::to_string)
        .into_iter()
        .chain(env_keys.iter().filter_map(|&key| lookup(key)))
        .find(|value| !value.is_empty())
        .ok_or_else(|| Error::MissingConfig {
            key: name.to_string(),
        })
}
