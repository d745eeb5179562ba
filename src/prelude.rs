/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! # Ze Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types from the Ze client library.
//!
//! ## Usage
//!
//! ```rust
//! use ze_client::prelude::*;
//!
//! let config = Config::with_values(
//!     "svc@example.com",
//!     "secret",
//!     "http://localhost:8080",
//!     "http://localhost:8081",
//!     "http://localhost:8082",
//! );
//! let users = DataClient::new("user", config);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Ze backend services
pub use crate::config::{Config, Credentials};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENTS
// ============================================================================

/// Authenticated CRUD client for the data service
pub use crate::data::DataClient;

/// Anonymous asset client for the ZeCommon file service
pub use crate::files::FilesClient;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup helper
pub use crate::utils::logger::setup_logger;

/// Environment variable helpers
pub use crate::utils::config::{get_env_bool, get_env_or_default, get_env_or_none};
