use base64::{Engine, engine::general_purpose::STANDARD};
use log::warn;

use crate::connection_error::ConnectionError;

const ARRAY_CONNECTION_PREFIX: &str = "arrayconnection:";

/// Opaque cursor addressing a position in an ordered list.
///
/// The wire format is the padded base64 encoding of `arrayconnection:<offset>`.
/// Consumers outside this crate only ever see the encoded string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ArrayCursor(usize);

impl ArrayCursor {
    /// Creates the cursor of the item at `offset`.
    pub fn new(offset: usize) -> Self {
        Self(offset)
    }

    /// Zero-based position this cursor addresses.
    pub(crate) fn offset(&self) -> usize {
        self.0
    }

    /// Encodes the cursor into its opaque string form.
    pub fn encode(&self) -> String {
        STANDARD.encode(format!("{}{}", ARRAY_CONNECTION_PREFIX, self.0))
    }

    /// Decodes a cursor previously produced by `encode`.
    ///
    /// * `cursor` - Opaque cursor string received from a client.
    pub fn decode(cursor: &str) -> Result<Self, ConnectionError> {
        let invalid = || {
            warn!("Rejected cursor `{}`.", cursor);
            ConnectionError::InvalidCursor(cursor.to_string())
        };
        let bytes = STANDARD.decode(cursor).map_err(|_| invalid())?;
        let text = String::from_utf8(bytes).map_err(|_| invalid())?;
        let offset = text
            .strip_prefix(ARRAY_CONNECTION_PREFIX)
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(invalid)?;
        offset.parse::<usize>().map(Self).map_err(|_| invalid())
    }
}

/// Shortcut for `ArrayCursor::new(offset).encode()`.
pub fn encode(offset: usize) -> String {
    ArrayCursor::new(offset).encode()
}

/// Shortcut for `ArrayCursor::decode(cursor)` yielding the raw offset.
pub fn decode(cursor: &str) -> Result<usize, ConnectionError> {
    ArrayCursor::decode(cursor).map(|cursor| cursor.offset())
}
