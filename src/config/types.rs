use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Connection settings for the hosted backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Project URL (e.g., "https://abcd.supabase.co").
    pub url: String,
    /// Public anon key sent as `apikey` on every request.
    #[serde(default)]
    pub anon_key: Option<String>,
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Total request timeout in seconds. Unset means requests may wait indefinitely.
    #[serde(default)]
    pub timeout_seconds: Option<u32>,
}

/// Object storage bucket names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_orphanage_images_bucket")]
    pub orphanage_images_bucket: String,
    #[serde(default = "default_avatars_bucket")]
    pub avatars_bucket: String,
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_backend_url() -> String {
    "http://127.0.0.1:54321".to_string()
}

fn default_orphanage_images_bucket() -> String {
    "orphanage-images".to_string()
}

fn default_avatars_bucket() -> String {
    "avatars".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            anon_key: None,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_seconds: default_connect_timeout(),
            timeout_seconds: None,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            orphanage_images_bucket: default_orphanage_images_bucket(),
            avatars_bucket: default_avatars_bucket(),
        }
    }
}
