//! Cryptographically secure password generation.
//!
//! Passwords are drawn character by character from a fixed [`Alphabet`], with
//! every index produced by [`IndexSampler`]: the minimal number of bytes is read
//! from the entropy source, surplus bits are shifted away, and out-of-range
//! values are rejected and redrawn. The result is exactly uniform over the
//! alphabet, with no modulo bias.
//!
//! # Alphabets
//!
//! - [`Alphabet::Standard`]: `0-9`, `a-z`, `A-Z` (62 characters)
//! - [`Alphabet::Extended`]: the standard set plus `$%&_-.,:;<>*+/?!=#` (80 characters)
//!
//! # Usage
//!
//! ```sh
//! passgen 20
//! passgen 32 --extended
//! ```
//!
//! The password is the only thing written to stdout, followed by a newline.
//! Diagnostics go to stderr and are controlled by `RUST_LOG`.
//!
//! ```
//! use passgen::{Alphabet, generate_password};
//!
//! let password = generate_password(20, Alphabet::Standard).unwrap();
//! assert_eq!(password.len(), 20);
//! ```

pub mod alphabet;
pub mod error;
pub mod generator;
pub mod logging;
pub mod random;

pub use alphabet::Alphabet;
pub use error::Error;
pub use generator::{generate_password, generate_password_with, parse_length};
pub use random::{IndexSampler, MAX_DRAW_ATTEMPTS, random_index};
