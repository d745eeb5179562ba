/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! # Ze Client
//!
//! Async client SDK for the Ze backend services. It wraps two remote HTTP
//! services behind typed method calls:
//!
//! - the **data service**: generic CRUD and query operations over named
//!   resource routes, authenticated with a bearer token obtained from ZeAuth
//!   ([`DataClient`](data::DataClient));
//! - the **file service** (ZeCommon): binary asset upload/download with no
//!   authentication step ([`FilesClient`](files::FilesClient)).
//!
//! Authentication is lazy: a [`DataClient`](data::DataClient) logs in against
//! ZeAuth on its first call and caches the token for the lifetime of the
//! instance. Each instance keeps its own token; nothing is shared process-wide.
//!
//! # Example
//! ```ignore
//! use ze_client::prelude::*;
//!
//! let config = Config::new();
//! let users = DataClient::new("user", config);
//!
//! // First call logs in transparently
//! let page = users.list(1, 20).await?;
//! ```

/// Per-instance lazy token acquisition against the ZeAuth login endpoint
pub mod auth;
/// Configuration loaded from environment variables and `.env`
pub mod config;
/// Crate-wide constants (user agent, wire field names, defaults)
pub mod constants;
/// Authenticated CRUD client for the data service
pub mod data;
/// Error types for the library
pub mod error;
/// Anonymous asset client for the file service
pub mod files;
/// Commonly used types and traits
pub mod prelude;
/// Utility modules (env helpers, logging)
pub mod utils;

/// Library version, taken from Cargo metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version as a string
pub fn version() -> &'static str {
    VERSION
}
