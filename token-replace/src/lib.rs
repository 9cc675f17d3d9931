//! Replaces literal tokens in a text file with values given on the command line.
//!
//! ```sh
//! token-replace config.txt DB_HOST=localhost GREETING="hello world"
//! ```
//!
//! Each `TOKEN=VALUE` argument is split at its first `=`. Matching is plain
//! substring matching, with no regex and no word boundaries, applied line by
//! line. Substitutions run in argument order by default, so a value that
//! contains a later token is rewritten again by that token's pass; pass
//! `--longest-first` to apply longer tokens before shorter ones instead.
//!
//! The file is rewritten through a temporary file in the same directory which
//! replaces the original with a single rename, so an interrupted or failed
//! run never leaves the target half-written.

pub mod error;
pub mod logging;
pub mod rewrite;
pub mod substitution;

pub use error::Error;
pub use rewrite::{RewriteStats, replace_in_file, rewrite_lines};
pub use substitution::{ReplaceOrder, Substitution, SubstitutionMap};
