//! Constants for URI splitting.

/// Maximum number of characters accepted after the port colon.
pub const MAX_PORT_DIGITS: usize = 5;

/// Largest port number the splitter accepts.
pub(crate) const MAX_PORT: u16 = u16::MAX;

/// Characters that end the authority component.
pub(crate) const AUTHORITY_TERMINATORS: &[u8] = b"/?#";

/// Replacement for ASCII control characters found in a component.
pub(crate) const CONTROL_REPLACEMENT: char = '_';
