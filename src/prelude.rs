//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use uri_value::prelude::*;
//!
//! let uri = UriValue::parse("http://hostname.com/root").unwrap();
//! assert!(uri.is_absolute());
//! ```

pub use crate::{
    // Core type
    UriValue,
    // Errors
    ParseError, ParseErrorKind, UriError,
    // Constants
    MAX_PORT_DIGITS,
};
