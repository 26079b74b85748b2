//! Fixed keys and names shared by the endpoint settings.

/// Translation namespace for every endpoint label.
pub const NAMESPACE: &str = "apps-config";

/// Storage key holding the user's custom endpoints as a JSON array of strings.
pub const CUSTOM_ENDPOINT_KEY: &str = "polkadot-app-custom-endpoints";

/// Variable carrying the custom environment endpoint override.
pub const WS_URL_VAR: &str = "WS_URL";

/// Name of the global-object env container (`process_env.WS_URL`).
pub const GLOBAL_ENV_OBJECT: &str = "process_env";
