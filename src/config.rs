//! Backend configuration baked in at build time.
//!
//! The browser has no process environment, so `SUPABASE_URL` and
//! `SUPABASE_ANON_KEY` are read with `option_env!` when the crate is compiled.
//! Parsing lives in [`WorkhubConfig::from_values`] so it can be tested.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const URL_VAR: &str = "SUPABASE_URL";
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

/// Errors produced while reading configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable was absent or blank.
    #[error("missing config: {var} not set")]
    Missing { var: &'static str },

    /// A variable was present but unusable.
    #[error("invalid config: {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Connection settings for the Supabase project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkhubConfig {
    /// Project base URL without a trailing slash.
    pub url: String,
    /// Public anon key sent as the `apikey` header.
    pub anon_key: String,
    /// First host label of `url`, used to namespace stored sessions.
    pub project_ref: String,
}

impl WorkhubConfig {
    /// Build config from values captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either variable was missing or malformed
    /// when the crate was built.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("SUPABASE_URL"), option_env!("SUPABASE_ANON_KEY"))
    }

    /// Build config from raw optional values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] for absent or blank values and
    /// [`ConfigError::Invalid`] for a URL without an `http(s)://` scheme or host.
    pub fn from_values(url: Option<&str>, anon_key: Option<&str>) -> Result<Self, ConfigError> {
        let raw_url = required(URL_VAR, url)?;
        let anon_key = required(ANON_KEY_VAR, anon_key)?.to_owned();
        let project_ref = parse_project_ref(raw_url)?;
        let url = raw_url.trim_end_matches('/').to_owned();
        Ok(Self { url, anon_key, project_ref })
    }
}

fn required<'a>(var: &'static str, raw: Option<&'a str>) -> Result<&'a str, ConfigError> {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::Missing { var }),
    }
}

fn parse_project_ref(url: &str) -> Result<String, ConfigError> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| ConfigError::Invalid { var: URL_VAR, reason: "expected http:// or https:// URL".into() })?;
    let host = rest.split(['/', ':']).next().unwrap_or_default();
    let label = host.split('.').next().unwrap_or_default();
    if label.is_empty() {
        return Err(ConfigError::Invalid { var: URL_VAR, reason: "missing host".into() });
    }
    Ok(label.to_owned())
}
