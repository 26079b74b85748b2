//! Environment provider for the custom endpoint override.
//!
//! The override can come from the process environment (`WS_URL`) or from a
//! global-object env container (`process_env.WS_URL`). [`resolve_env`] builds
//! the provider once at startup; the builder only sees [`EnvProvider`].

use std::collections::HashMap;

use serde_json::Value;

use crate::config::{GLOBAL_ENV_OBJECT, WS_URL_VAR};
use crate::error::Result;

/// Source of the custom environment endpoint.
pub trait EnvProvider {
    /// The override address, or `None` when unset or empty.
    fn ws_url(&self) -> Option<String>;
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Reads `WS_URL` from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvProvider for ProcessEnv {
    fn ws_url(&self) -> Option<String> {
        non_empty(std::env::var(WS_URL_VAR).ok())
    }
}

/// Env container attached to a global object, e.g. `{"WS_URL": "ws://..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalEnv {
    vars: HashMap<String, String>,
}

impl GlobalEnv {
    pub fn new(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }

    pub fn with_ws_url(url: impl Into<String>) -> Self {
        let mut vars = HashMap::new();
        vars.insert(WS_URL_VAR.to_string(), url.into());
        Self { vars }
    }

    /// Parse a global object carrying an optional `process_env` member.
    pub fn from_global_json(raw: &str) -> Result<Self> {
        let mut global: serde_json::Map<String, Value> = serde_json::from_str(raw)?;
        let vars = match global.remove(GLOBAL_ENV_OBJECT) {
            None | Some(Value::Null) => HashMap::new(),
            Some(container) => serde_json::from_value(container)?,
        };
        Ok(Self { vars })
    }
}

impl EnvProvider for GlobalEnv {
    fn ws_url(&self) -> Option<String> {
        non_empty(self.vars.get(WS_URL_VAR).cloned())
    }
}

/// A fixed override, or none at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticEnv(pub Option<String>);

impl StaticEnv {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn some(url: impl Into<String>) -> Self {
        Self(Some(url.into()))
    }
}

impl EnvProvider for StaticEnv {
    fn ws_url(&self) -> Option<String> {
        non_empty(self.0.clone())
    }
}

/// Tries each provider in order; the first non-empty value wins.
#[derive(Default)]
pub struct ChainedEnv {
    providers: Vec<Box<dyn EnvProvider>>,
}

impl ChainedEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, provider: impl EnvProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }
}

impl EnvProvider for ChainedEnv {
    fn ws_url(&self) -> Option<String> {
        self.providers.iter().find_map(|p| p.ws_url())
    }
}

/// Startup provider: process environment first, then the global object.
pub fn resolve_env(global: Option<GlobalEnv>) -> ChainedEnv {
    let chain = ChainedEnv::new().push(ProcessEnv);
    match global {
        Some(global) => chain.push(global),
        None => chain,
    }
}
