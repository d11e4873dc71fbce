//! # Hex Encoding Helpers
//!
//! Rendering helpers for addresses and hashes in log output and error
//! messages. Wire encoding never goes through these; they are display-only.

/// Render bytes as a full `0x`-prefixed hex string.
pub fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Render bytes as an abbreviated `0x1234..abcd` hex string.
///
/// Used for addresses in tracing output where the full 40 hex chars drown
/// the line. Inputs of 4 bytes or fewer are rendered in full.
pub fn short_hex(bytes: &[u8]) -> String {
    if bytes.len() <= 4 {
        return to_hex(bytes);
    }
    format!(
        "0x{}..{}",
        hex::encode(&bytes[..2]),
        hex::encode(&bytes[bytes.len() - 2..])
    )
}
