//! Immutable URI values with containment, resolution and relativization.
//!
//! # Overview
//!
//! A [`UriValue`] is parsed once from a string and split into its
//! components:
//!
//! ```text
//! [scheme:][//[username[:password]@]host[:port]]path[?query][#fragment]
//! ```
//!
//! Absent components are empty strings. The original text is kept verbatim,
//! so `UriValue::parse(s)?.to_string() == s` for every accepted `s`.
//!
//! A URI is *relative* when it has no host and its path does not start with
//! `/`. On top of that classification the crate offers three operations:
//!
//! - [`UriValue::is_under`]: is this URI inside a base URI?
//! - [`UriValue::absolute_uri`]: resolve a relative URI against a base.
//! - [`UriValue::relative_uri`]: express an absolute URI relative to a base.
//!
//! # Quick Start
//!
//! ```rust
//! use uri_value::UriValue;
//!
//! let base = UriValue::parse("/home/john").unwrap();
//!
//! let file = UriValue::parse("path/to/file").unwrap();
//! let absolute = file.absolute_uri(&base).unwrap();
//! assert_eq!(absolute.as_str(), "/home/john/path/to/file");
//!
//! assert!(absolute.is_under(&base));
//! assert_eq!(absolute.relative_uri(&base).unwrap(), file);
//! ```
//!
//! # Parsing
//!
//! Splitting is lenient: no percent-decoding, no case folding and no
//! scheme-specific rules. Only an authority that cannot be split (an empty
//! host, or a bad port) is rejected with a [`ParseError`].
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`UriValue`] as a string.
//! - `log`: emit [`log`](https://docs.rs/log) records from the relational
//!   operations.
//! - `kani`: proof harnesses for the Kani model checker.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod constants;
mod error;
#[cfg(kani)]
mod kani_impls;
mod log;
pub mod prelude;
mod splitter;
mod uri;

pub use constants::MAX_PORT_DIGITS;
pub use error::{ParseError, ParseErrorKind, UriError};
pub use uri::UriValue;
