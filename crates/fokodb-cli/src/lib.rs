//! fokodb-cli
//! ==========
//!
//! Command-line interface for the `fokodb-core` hierarchy search.
//!
//! The binary (`fokodb`) is the primary deliverable. This library target holds
//! the argument definitions and logging setup so they can be tested on their
//! own.
//!
//! Basic usage:
//!
//! ```text
//! fokodb --help
//! fokodb stats
//! fokodb search ambohimanambola
//! fokodb search antsirabe --level commune --json
//! fokodb context alasora
//! fokodb tree avaradrano --limit 5
//! ```
//!
//! For programmatic access, use [`fokodb-core`] directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` wins when set; otherwise `verbosity` picks the level:
/// 0 = warn, 1 = info, 2 and above = debug.
pub fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
