//! SubjectPublicKeyInfo decoding.

use certkit_asn1::Tlv;

use crate::algorithm::{Algorithm, AlgorithmIdentifier};
use crate::bit_string::BitString;
use crate::error::X509Error;

/// The subject's public key. Only RSA keys are cryptographically
/// supported; other recognized algorithms fail with
/// `UnsupportedAlgorithm`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKey {
    Rsa(RsaPublicKey),
}

/// RSAPublicKey ::= SEQUENCE { modulus INTEGER, publicExponent INTEGER }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    /// Big-endian modulus bytes, exactly as encoded.
    pub modulus: Vec<u8>,
    pub exponent: i64,
}

impl PublicKey {
    /// Decode a SubjectPublicKeyInfo:
    /// `SEQUENCE { algorithm AlgorithmIdentifier, subjectPublicKey BIT STRING }`.
    /// The BIT STRING payload is itself DER and is re-decoded.
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        let sequence = tlv
            .sequence_value()
            .ok_or_else(|| X509Error::InvalidPublicKey(tlv.clone()))?;
        if sequence.len() != 2 {
            return Err(X509Error::InvalidPublicKey(tlv.clone()));
        }

        let algorithm = AlgorithmIdentifier::from_tlv(&sequence[0])?;
        match algorithm.algorithm {
            Algorithm::RsaEncryption => {}
            other => return Err(X509Error::UnsupportedAlgorithm(other.to_string())),
        }

        let bits = BitString::from_tlv(&sequence[1])
            .map_err(|_| X509Error::InvalidPublicKey(tlv.clone()))?;
        let key = Tlv::from_der(&bits.bytes)?;
        Ok(PublicKey::Rsa(RsaPublicKey::from_tlv(&key)?))
    }
}

impl RsaPublicKey {
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        let sequence = tlv
            .sequence_value()
            .ok_or_else(|| X509Error::InvalidPublicKey(tlv.clone()))?;
        if sequence.len() != 2 {
            return Err(X509Error::InvalidPublicKey(tlv.clone()));
        }
        let modulus = sequence[0]
            .insane_integer_value()
            .ok_or_else(|| X509Error::InvalidPublicKey(tlv.clone()))?
            .to_vec();
        let exponent = sequence[1]
            .integer_value()
            .ok_or_else(|| X509Error::InvalidPublicKey(tlv.clone()))?;
        Ok(Self { modulus, exponent })
    }
}
