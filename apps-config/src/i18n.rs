//! Localization capability.
//!
//! Labels are produced through [`Translate`], which maps a key, its default
//! text, a namespace and optional `{{var}}` interpolation values to a display
//! string. Lookups never fail: a miss falls back to the default text.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Namespace and interpolation values for a single lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TOptions {
    pub ns: String,
    pub replace: BTreeMap<String, String>,
}

impl TOptions {
    pub fn ns(ns: impl Into<String>) -> Self {
        Self {
            ns: ns.into(),
            replace: BTreeMap::new(),
        }
    }

    /// Add an interpolation value for `{{name}}`.
    pub fn replace(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.replace.insert(name.into(), value.into());
        self
    }
}

/// Maps `(key, default text, options)` to a localized string.
pub trait Translate {
    fn t(&self, key: &str, default: &str, opts: &TOptions) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str, &str, &TOptions) -> String,
{
    fn t(&self, key: &str, default: &str, opts: &TOptions) -> String {
        self(key, default, opts)
    }
}

/// Replace `{{name}}` placeholders with values from `vars`.
///
/// Whitespace inside the braces is ignored. Unknown placeholders and
/// unterminated braces are kept verbatim.
pub fn interpolate(template: &str, vars: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let name = after[..end].trim();
                match vars.get(name) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(&rest[start..start + 2 + end + 2]),
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

/// Returns the default text with interpolation applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTranslator;

impl Translate for DefaultTranslator {
    fn t(&self, _key: &str, default: &str, opts: &TOptions) -> String {
        interpolate(default, &opts.replace)
    }
}

/// Translation table loaded from JSON: `{ "<namespace>": { "<key>": "<template>" } }`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    namespaces: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    pub fn from_json(raw: &str) -> Result<Self> {
        let namespaces = serde_json::from_str(raw)?;
        Ok(Self { namespaces })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn insert(
        &mut self,
        ns: impl Into<String>,
        key: impl Into<String>,
        template: impl Into<String>,
    ) {
        self.namespaces
            .entry(ns.into())
            .or_default()
            .insert(key.into(), template.into());
    }

    pub fn get(&self, ns: &str, key: &str) -> Option<&str> {
        self.namespaces
            .get(ns)
            .and_then(|keys| keys.get(key))
            .map(String::as_str)
    }
}

impl Translate for Catalog {
    fn t(&self, key: &str, default: &str, opts: &TOptions) -> String {
        let template = match self.get(&opts.ns, key) {
            Some(template) => template,
            None => {
                debug!(ns = %opts.ns, key, "translation missing, using default");
                default
            }
        };
        interpolate(template, &opts.replace)
    }
}
