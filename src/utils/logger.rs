/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

use tracing_subscriber::EnvFilter;

/// Initializes a tracing subscriber for binaries and tests
///
/// Honors `RUST_LOG`, defaulting to `info` when unset. Safe to call more than
/// once; subsequent calls are no-ops.
pub fn setup_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
