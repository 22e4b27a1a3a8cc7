//! Client for the hosted backend: tables, auth and object storage.
//!
//! ```text
//! RemoteClient ──┬── table(name) ─→ TableClient   (select / insert / update / delete)
//!                ├── auth()       ─→ AuthClient    (sign up / in / out, user, recover)
//!                └── storage()    ─→ StorageClient (upload / public url / list / remove)
//! ```

mod auth;
mod client;
mod error;
mod query;
mod storage;
mod table;

pub use auth::{AuthClient, AuthUser, SignUpResponse, TokenResponse};
pub use client::{RemoteClient, RemoteClientBuilder};
pub use error::RemoteError;
pub use query::{Order, Query, SortDirection};
pub use storage::{StorageClient, StorageObject, LIST_LIMIT};
pub use table::TableClient;
