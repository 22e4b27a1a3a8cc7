//! Configuration loading and credential handling.

mod auth;
mod credentials;
mod loader;
mod types;

pub use auth::{build_auth_headers, AuthHeader};
pub use credentials::SecureString;
pub use loader::{ConfigError, ANON_KEY_ENV_VAR, URL_ENV_VAR};
pub use types::{BackendConfig, Config, HttpConfig, StorageConfig};
