//! TBSCertificate and its scalar fields.

use certkit_asn1::{Content, Integer, Tlv};

use crate::algorithm::AlgorithmIdentifier;
use crate::error::X509Error;
use crate::extensions::Extensions;
use crate::name::Name;
use crate::public_key::PublicKey;
use crate::time::Time;

/// Certificate version. Only v3 (encoded as INTEGER 2) is accepted;
/// v1/v2 certificates cannot carry the extensions this decoder
/// requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    V3,
}

impl Version {
    /// Decode the `[0] EXPLICIT INTEGER` version field.
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        let sequence = tlv
            .sequence_value()
            .ok_or_else(|| X509Error::InvalidVersion(tlv.clone()))?;
        if sequence.len() != 1 {
            return Err(X509Error::InvalidVersion(tlv.clone()));
        }
        match sequence[0].integer_value() {
            Some(2) => Ok(Version::V3),
            _ => Err(X509Error::InvalidVersion(tlv.clone())),
        }
    }
}

/// CertificateSerialNumber ::= INTEGER
///
/// Kept as exact big-endian bytes; serial numbers are compared and
/// hashed, never used arithmetically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialNumber {
    pub bytes: Vec<u8>,
}

impl SerialNumber {
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        match &tlv.content {
            Content::Integer(Integer::Insane(bytes)) if !bytes.is_empty() => Ok(Self {
                bytes: bytes.clone(),
            }),
            Content::Integer(integer @ Integer::Sane(_)) => Ok(Self {
                bytes: integer.to_bytes(),
            }),
            _ => Err(X509Error::InvalidSerialNumber(tlv.clone())),
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.is_empty() {
            return None;
        }
        Some(Self {
            bytes: bytes.to_vec(),
        })
    }
}

/// Validity ::= SEQUENCE { notBefore Time, notAfter Time }
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validity {
    pub not_before: Time,
    pub not_after: Time,
}

impl Validity {
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        let sequence = tlv
            .sequence_value()
            .ok_or_else(|| X509Error::InvalidValidity(tlv.clone()))?;
        if sequence.len() != 2 {
            return Err(X509Error::InvalidValidity(tlv.clone()));
        }
        Ok(Self {
            not_before: Time::from_tlv(&sequence[0])?,
            not_after: Time::from_tlv(&sequence[1])?,
        })
    }
}

/// The to-be-signed certificate body (RFC 5280 section 4.1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TbsCertificate {
    pub version: Version,
    pub serial_number: SerialNumber,
    pub signature: AlgorithmIdentifier,
    pub issuer: Name,
    pub validity: Validity,
    pub subject: Name,
    pub public_key: PublicKey,
    pub extensions: Extensions,
}

impl TbsCertificate {
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        let sequence = tlv
            .sequence_value()
            .ok_or_else(|| X509Error::InvalidStructure(tlv.clone()))?;
        if sequence.len() < 8 {
            return Err(X509Error::InvalidStructure(tlv.clone()));
        }

        Ok(Self {
            version: Version::from_tlv(&sequence[0])?,
            serial_number: SerialNumber::from_tlv(&sequence[1])?,
            signature: AlgorithmIdentifier::from_tlv(&sequence[2])?,
            issuer: Name::from_tlv(&sequence[3])?,
            validity: Validity::from_tlv(&sequence[4])?,
            subject: Name::from_tlv(&sequence[5])?,
            public_key: PublicKey::from_tlv(&sequence[6])?,
            extensions: Extensions::from_tlv(&sequence[7])?,
        })
    }
}
