//! Client library connecting donors with orphanages over a hosted backend.
//!
//! ```text
//! viewmodel ──→ repository ──→ remote ──→ backend (tables / auth / storage)
//!     │              │
//!     └── domain ←── dto
//! ```

pub mod config;
pub mod domain;
pub mod dto;
pub mod logging;
pub mod remote;
pub mod repository;
pub mod session;
pub mod viewmodel;
