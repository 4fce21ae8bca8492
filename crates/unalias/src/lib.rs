//! Alias resolution.
//!
//! Expands user-facing group names into the concrete values they stand for.
//! An [`AliasTable`] maps each alias to a list of tokens; a token is a
//! terminal value, another alias, or an exclusion (`-name`). Resolving a
//! request flattens every alias into its terminal values, drops duplicates
//! and removes everything reached through an exclusion.
//!
//! ```text
//! alias1 -> [alias2, value1, value2]
//! alias2 -> [value3, alias3]
//! alias3 -> [value4]
//! alias4 -> [alias1, -value1]
//!
//! resolve_one("alias4") == [value3, value4, value2]
//! ```
//!
//! # Guarantees
//!
//! - Results keep first-discovery order and contain no duplicates.
//! - Exclusion wins over inclusion, whatever the token order.
//! - Resolution always terminates: self-loops resolve to the alias name,
//!   indirect cycles are cut at the first revisit.
//! - No input is an error. Unknown names are terminal values.
//!
//! # Logging
//!
//! Resolution emits `tracing` spans and events under the `unalias` target.
//! Embedders with their own subscriber get them for free; otherwise call
//! [`init_tracing`] and set `RUST_LOG=unalias=trace`.

mod resolve;
mod resolver;
mod table;
mod token;

pub use resolve::resolve_tokens;
pub use resolver::Resolver;
pub use table::AliasTable;
pub use token::{Polarity, Token, EXCLUDE_PREFIX};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a fmt subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set, or if a global subscriber is
/// already installed. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
            if installed.is_err() {
                tracing::debug!("global subscriber already set, keeping it");
            }
        }
    });
}
