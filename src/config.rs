//! Credential resolution.
//!
//! Each key is looked up on the command line, then in the optional JSON
//! configuration file, then in the environment. Empty values count as unset.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, ReportError};
use crate::rpc::AuthContext;

pub const VAULT_TOKEN_KEY: &str = "vault-token";
pub const VAULT_TOKEN_ENV: &str = "VAULT_TOKEN";
pub const FIBER_OPERATOR_ID_KEY: &str = "fiber-operator-id";
pub const FIBER_OPERATOR_ID_ENV: &str = "FIBER_OPERATOR_ID";

/// Contents of the `--config` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    #[serde(default)]
    pub vault_token: Option<String>,
    #[serde(default)]
    pub fiber_operator_id: Option<String>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|error| match error.kind() {
            io::ErrorKind::NotFound => ReportError::MissingConfig(path.to_path_buf()),
            _ => ReportError::Io(error),
        })?;
        Ok(serde_json::from_str(&data)?)
    }
}

/// Credentials given explicitly on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialFlags {
    pub vault_token: Option<String>,
    pub fiber_operator_id: Option<String>,
}

/// Reads a variable from the process environment.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Resolves the auth context, failing when either credential is unset.
pub fn resolve_auth<E>(
    flags: &CredentialFlags,
    file: Option<&ConfigFile>,
    env: E,
) -> Result<AuthContext>
where
    E: Fn(&str) -> Option<String>,
{
    let token = resolve(
        flags.vault_token.as_deref(),
        file.and_then(|file| file.vault_token.as_deref()),
        &env,
        VAULT_TOKEN_KEY,
        VAULT_TOKEN_ENV,
    )?;
    let operator_id = resolve(
        flags.fiber_operator_id.as_deref(),
        file.and_then(|file| file.fiber_operator_id.as_deref()),
        &env,
        FIBER_OPERATOR_ID_KEY,
        FIBER_OPERATOR_ID_ENV,
    )?;
    Ok(AuthContext::fiber_operator(token, operator_id))
}

fn resolve<E>(
    flag: Option<&str>,
    file: Option<&str>,
    env: &E,
    key: &'static str,
    env_key: &'static str,
) -> Result<String>
where
    E: Fn(&str) -> Option<String>,
{
    if let Some(value) = non_empty(flag) {
        debug!(key, "credential taken from command line");
        return Ok(value.to_string());
    }
    if let Some(value) = non_empty(file) {
        debug!(key, "credential taken from configuration file");
        return Ok(value.to_string());
    }
    match env(env_key).filter(|value| !value.is_empty()) {
        Some(value) => {
            debug!(key, env = env_key, "credential taken from environment");
            Ok(value)
        }
        None => Err(ReportError::MissingCredential { key, env: env_key }),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
