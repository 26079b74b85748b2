//! Persistent key-value storage and the user's custom endpoint list.
//!
//! The custom endpoints live under [`CUSTOM_ENDPOINT_KEY`] as a JSON array of
//! address strings, e.g. `["ws://example.com:9944"]`.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};
use url::Url;

use crate::config::CUSTOM_ENDPOINT_KEY;
use crate::error::{ConfigError, Result};

/// Read side of a browser-style key-value store.
pub trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;
}

/// Write side of a key-value store.
pub trait StorageMut: Storage {
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with a single item already set.
    pub fn with_item(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut items = HashMap::new();
        items.insert(key.into(), value.into());
        Self { items }
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }
}

impl StorageMut for MemoryStorage {
    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }
}

/// Key-value store persisted as a JSON object file.
///
/// A missing file reads as an empty store. Every write replaces the file
/// atomically.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStorage {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let items = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "storage file not found, starting empty");
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, items })
    }

    /// Replace the file atomically: write a sibling temp file, then rename it over.
    fn save(&self) -> Result<()> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, &self.items)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }
}

impl StorageMut for FileStorage {
    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        self.save()
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        self.save()
    }
}

/// Decode the stored custom endpoint list.
///
/// # Errors
///
/// Returns `ConfigError::Decode` unless `raw` is a JSON array of strings.
pub fn decode_custom_endpoints(raw: &str) -> Result<Vec<String>> {
    Ok(serde_json::from_str(raw)?)
}

/// The stored custom endpoints; absent key reads as empty.
pub fn load_custom_endpoints<S: Storage + ?Sized>(storage: &S) -> Result<Vec<String>> {
    match storage.get_item(CUSTOM_ENDPOINT_KEY) {
        Some(raw) => decode_custom_endpoints(&raw),
        None => Ok(Vec::new()),
    }
}

/// Check that `endpoint` is a websocket URL with a host.
pub fn validate_endpoint(endpoint: &str) -> Result<()> {
    let url = Url::parse(endpoint)
        .map_err(|e| ConfigError::InvalidEndpoint(format!("{endpoint}: {e}")))?;

    if !matches!(url.scheme(), "ws" | "wss") {
        return Err(ConfigError::InvalidEndpoint(format!(
            "{endpoint}: expected ws:// or wss://, got {}://",
            url.scheme()
        )));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(ConfigError::InvalidEndpoint(format!("{endpoint}: missing host")));
    }

    Ok(())
}

/// Append a custom endpoint. Returns `false` if it was already stored.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEndpoint` for non-websocket addresses and
/// `ConfigError::Decode` if the existing list is malformed; the stored value
/// is left untouched in both cases.
pub fn add_custom_endpoint<S: StorageMut + ?Sized>(storage: &mut S, endpoint: &str) -> Result<bool> {
    let endpoint = endpoint.trim();
    validate_endpoint(endpoint)?;

    let mut endpoints = load_custom_endpoints(&*storage)?;
    if endpoints.iter().any(|e| e == endpoint) {
        debug!(endpoint, "custom endpoint already stored");
        return Ok(false);
    }

    endpoints.push(endpoint.to_string());
    storage.set_item(CUSTOM_ENDPOINT_KEY, &serde_json::to_string(&endpoints)?)?;
    info!(endpoint, total = endpoints.len(), "custom endpoint added");
    Ok(true)
}

/// Remove a custom endpoint. Returns `false` if it was not stored.
///
/// The key is cleared once the list becomes empty.
pub fn remove_custom_endpoint<S: StorageMut + ?Sized>(storage: &mut S, endpoint: &str) -> Result<bool> {
    let endpoint = endpoint.trim();
    let mut endpoints = load_custom_endpoints(&*storage)?;
    let before = endpoints.len();
    endpoints.retain(|e| e != endpoint);

    if endpoints.len() == before {
        return Ok(false);
    }

    if endpoints.is_empty() {
        storage.remove_item(CUSTOM_ENDPOINT_KEY)?;
    } else {
        storage.set_item(CUSTOM_ENDPOINT_KEY, &serde_json::to_string(&endpoints)?)?;
    }
    info!(endpoint, total = endpoints.len(), "custom endpoint removed");
    Ok(true)
}
