pub mod config;
pub mod endpoints;
pub mod env;
pub mod error;
pub mod i18n;
pub mod storage;
pub mod types;

// ---- Top-level re-exports for ergonomic usage ----

// Builder
pub use endpoints::create;

// Option shape
pub use types::EndpointOption;

// Capabilities
pub use env::{resolve_env, ChainedEnv, EnvProvider, GlobalEnv, ProcessEnv, StaticEnv};
pub use i18n::{Catalog, DefaultTranslator, TOptions, Translate};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageMut};

// Custom endpoint management
pub use storage::{add_custom_endpoint, decode_custom_endpoints, remove_custom_endpoint};

pub use config::CUSTOM_ENDPOINT_KEY;
pub use error::{ConfigError, Result};
