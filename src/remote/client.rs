//! The long-lived remote client handle.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Url};
use tokio::time::timeout;

use crate::config::{build_auth_headers, Config, SecureString};
use crate::remote::auth::AuthClient;
use crate::remote::error::RemoteError;
use crate::remote::storage::StorageClient;
use crate::remote::table::TableClient;
use crate::session::SessionContext;

/// Handle to the hosted backend.
///
/// Cheap to clone; all clones share one connection pool and one
/// [`SessionContext`]. Holds no per-request state, so it can be shared by
/// every repository.
#[derive(Clone)]
pub struct RemoteClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: Client,
    base_url: String,
    anon_key: SecureString,
    session: SessionContext,
    request_timeout: Option<Duration>,
}

impl RemoteClient {
    /// Build a client from validated configuration.
    pub fn new(config: &Config, session: SessionContext) -> Result<Self, RemoteError> {
        let anon_key = SecureString::new(config.backend.anon_key.clone().unwrap_or_default());
        Self::builder(&config.backend.url, anon_key)
            .connect_timeout(Duration::from_secs(u64::from(config.http.connect_timeout_seconds)))
            .request_timeout(
                config
                    .http
                    .timeout_seconds
                    .map(|s| Duration::from_secs(u64::from(s))),
            )
            .session(session)
            .build()
    }

    pub fn builder(base_url: &str, anon_key: SecureString) -> RemoteClientBuilder {
        RemoteClientBuilder {
            base_url: base_url.to_string(),
            anon_key,
            session: SessionContext::new(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: None,
        }
    }

    /// Table-scoped operations on `name`.
    pub fn table(&self, name: &str) -> TableClient {
        TableClient::new(self.clone(), name)
    }

    pub fn auth(&self) -> AuthClient {
        AuthClient::new(self.clone())
    }

    pub fn storage(&self) -> StorageClient {
        StorageClient::new(self.clone())
    }

    pub fn session(&self) -> &SessionContext {
        &self.inner.session
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Absolute URL for a path below the project URL.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, RemoteError> {
        let raw = format!("{}/{}", self.inner.base_url, path.trim_start_matches('/'));
        Url::parse(&raw).map_err(|e| RemoteError::InvalidUrl(format!("{}: {}", raw, e)))
    }

    /// Request builder carrying the `apikey` and bearer headers.
    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let token = self.inner.session.access_token();
        let mut builder = self.inner.http.request(method, url);
        for (name, value) in build_auth_headers(&self.inner.anon_key, token.as_ref()) {
            builder = builder.header(name, value);
        }
        builder
    }

    /// Send a request and return the body of a successful response.
    ///
    /// Non-2xx responses become [`RemoteError::Api`] with the backend's message.
    pub(crate) async fn execute(&self, builder: RequestBuilder) -> Result<String, RemoteError> {
        match self.inner.request_timeout {
            Some(limit) => match timeout(limit, Self::send(builder)).await {
                Ok(result) => result,
                Err(_) => Err(RemoteError::Timeout {
                    duration: limit.as_secs(),
                }),
            },
            None => Self::send(builder).await,
        }
    }

    async fn send(builder: RequestBuilder) -> Result<String, RemoteError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "backend returned an error");
            return Err(RemoteError::from_response(status.as_u16(), &body));
        }

        Ok(body)
    }
}

impl std::fmt::Debug for RemoteClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteClient")
            .field("base_url", &self.inner.base_url)
            .field("session", &self.inner.session)
            .finish()
    }
}

/// Builder for [`RemoteClient`].
pub struct RemoteClientBuilder {
    base_url: String,
    anon_key: SecureString,
    session: SessionContext,
    connect_timeout: Duration,
    request_timeout: Option<Duration>,
}

impl RemoteClientBuilder {
    pub fn session(mut self, session: SessionContext) -> Self {
        self.session = session;
        self
    }

    pub fn connect_timeout(mut self, duration: Duration) -> Self {
        self.connect_timeout = duration;
        self
    }

    pub fn request_timeout(mut self, duration: Option<Duration>) -> Self {
        self.request_timeout = duration;
        self
    }

    pub fn build(self) -> Result<RemoteClient, RemoteError> {
        let base_url = self.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| RemoteError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let http = Client::builder()
            .connect_timeout(self.connect_timeout)
            .build()?;

        Ok(RemoteClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                anon_key: self.anon_key,
                session: self.session,
                request_timeout: self.request_timeout,
            }),
        })
    }
}
