//! Certificate decoding errors.

use certkit_asn1::{Asn1Error, Tlv};

/// Errors raised while mapping decoded ASN.1 onto the certificate
/// model.
///
/// Structural variants carry the offending element so diagnostics can
/// point at the exact DER node that failed. All errors are terminal:
/// a missing field or tag mismatch aborts the whole decode and no
/// partially populated model is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum X509Error {
    #[error("invalid certificate structure: {0}")]
    InvalidX509(Tlv),
    #[error("invalid ASN.1 structure: {0}")]
    InvalidStructure(Tlv),
    #[error("invalid version: {0}")]
    InvalidVersion(Tlv),
    #[error("invalid serial number: {0}")]
    InvalidSerialNumber(Tlv),
    #[error("invalid algorithm identifier: {0}")]
    InvalidAlgorithm(Tlv),
    #[error("unimplemented algorithm: {0}")]
    UnimplementedAlgorithm(String),
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
    #[error("invalid signature: {0}")]
    InvalidSignature(Tlv),
    #[error("invalid name: {0}")]
    InvalidName(Tlv),
    #[error("invalid relative distinguished name: {0}")]
    InvalidRelativeDistinguishedName(Tlv),
    #[error("invalid validity: {0}")]
    InvalidValidity(Tlv),
    #[error("invalid time: {0}")]
    InvalidTime(Tlv),
    #[error("invalid public key: {0}")]
    InvalidPublicKey(Tlv),
    #[error("invalid extensions: {0}")]
    InvalidExtensions(Tlv),
    #[error("invalid extension: {0}")]
    InvalidExtension(Tlv),
    #[error("unimplemented extension: {0}")]
    UnimplementedExtension(String),
    #[error("invalid general name: {0}")]
    InvalidGeneralName(Tlv),
    #[error("unimplemented construct: {0}")]
    Unimplemented(Tlv),
    #[error("asn1: {0}")]
    Asn1(#[from] Asn1Error),
}
