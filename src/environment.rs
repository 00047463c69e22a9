//! Access to environment variables.
//!
//! `EnvSource` abstracts over where variables come from so configuration
//! loading and the `/env` listing can be driven by a fixed set of variables
//! in tests. `filtered` produces the listing exposed over HTTP, with any
//! variable whose name looks sensitive removed.

use std::collections::BTreeMap;

/// Substrings that mark a variable name as sensitive (matched case-insensitively).
pub const SENSITIVE_NAME_TOKENS: [&str; 4] = ["password", "secret", "key", "token"];

/// A read-only view of a set of environment variables.
pub trait EnvSource: Send + Sync {
    /// Value of a single variable, if set and valid Unicode.
    fn get(&self, name: &str) -> Option<String>;

    /// All variables with valid Unicode names and values.
    fn vars(&self) -> Vec<(String, String)>;
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn vars(&self) -> Vec<(String, String)> {
        // vars() panics on non-Unicode entries, so go through vars_os and skip them
        std::env::vars_os()
            .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }
}

/// A fixed set of variables, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    vars: BTreeMap<String, String>,
}

impl StaticEnv {
    pub fn new<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for StaticEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

/// Whether a variable name contains any sensitive token, ignoring case.
///
/// Only the name is inspected. A secret stored under an innocuous name
/// passes through.
pub fn is_sensitive_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    SENSITIVE_NAME_TOKENS
        .iter()
        .any(|token| lower.contains(token))
}

/// Variables from `source` with sensitive names removed, sorted by name.
pub fn filtered(source: &dyn EnvSource) -> BTreeMap<String, String> {
    source
        .vars()
        .into_iter()
        .filter(|(name, _)| !is_sensitive_name(name))
        .collect()
}
