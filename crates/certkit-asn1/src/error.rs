//! ASN.1 codec errors.

/// Errors raised while decoding or encoding DER data.
///
/// All variants are terminal; malformed input is never retried.
/// Offsets are absolute byte positions into the input (or the output
/// produced so far, for encoding failures).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Asn1Error {
    #[error("unexpected end of data at offset {offset}")]
    UnexpectedEnd { offset: usize },
    #[error("invalid length encoding at offset {offset}")]
    InvalidLength { offset: usize },
    #[error("invalid identifier at offset {offset}")]
    InvalidIdentifier { offset: usize },
    #[error("invalid boolean at offset {offset}")]
    InvalidBoolean { offset: usize },
    #[error("invalid string data at offset {offset}")]
    InvalidString { offset: usize },
    #[error("constructed values nested too deep at offset {offset}")]
    NestingTooDeep { offset: usize },
    #[error("trailing data at offset {offset}")]
    TrailingData { offset: usize },
}
