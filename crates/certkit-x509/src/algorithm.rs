//! AlgorithmIdentifier decoding.

use std::fmt;

use certkit_asn1::{Content, ObjectIdentifier, Tag, Tlv};

use crate::error::X509Error;

/// The closed set of algorithms the decoder recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    RsaEncryption,
    Sha256WithRsaEncryption,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::RsaEncryption => "rsaEncryption",
            Algorithm::Sha256WithRsaEncryption => "sha256WithRSAEncryption",
        })
    }
}

/// AlgorithmIdentifier ::= SEQUENCE {
///   algorithm    OBJECT IDENTIFIER,
///   parameters   ANY DEFINED BY algorithm OPTIONAL }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmIdentifier {
    pub algorithm: Algorithm,
    /// Raw parameter bytes; `None` for an ASN.1 NULL.
    pub parameters: Option<Vec<u8>>,
}

impl AlgorithmIdentifier {
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        let sequence = tlv
            .sequence_value()
            .ok_or_else(|| X509Error::InvalidAlgorithm(tlv.clone()))?;
        if sequence.len() != 2 {
            return Err(X509Error::InvalidAlgorithm(tlv.clone()));
        }

        let oid = sequence[0]
            .object_identifier_value()
            .ok_or_else(|| X509Error::InvalidAlgorithm(tlv.clone()))?;
        let algorithm = match oid {
            ObjectIdentifier::RsaEncryption => Algorithm::RsaEncryption,
            ObjectIdentifier::Sha256WithRsaEncryption => Algorithm::Sha256WithRsaEncryption,
            other => return Err(X509Error::UnimplementedAlgorithm(other.to_dot_string())),
        };

        let parameters = if sequence[1].identifier.tag == Tag::Null {
            None
        } else {
            match &sequence[1].content {
                Content::Data(bytes) => Some(bytes.clone()),
                _ => None,
            }
        };

        Ok(Self {
            algorithm,
            parameters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_with_rsa() {
        let tlv = Tlv::sequence(vec![
            Tlv::object_identifier(ObjectIdentifier::Sha256WithRsaEncryption),
            Tlv::null(),
        ]);
        let alg = AlgorithmIdentifier::from_tlv(&tlv).unwrap();
        assert_eq!(alg.algorithm, Algorithm::Sha256WithRsaEncryption);
        assert_eq!(alg.parameters, None);
    }

    #[test]
    fn test_unknown_algorithm() {
        let tlv = Tlv::sequence(vec![
            Tlv::object_identifier(ObjectIdentifier::Other(vec![0x2a, 0x03])),
            Tlv::null(),
        ]);
        assert_eq!(
            AlgorithmIdentifier::from_tlv(&tlv),
            Err(X509Error::UnimplementedAlgorithm("1.2.3".into()))
        );
    }

    #[test]
    fn test_missing_parameters() {
        let tlv = Tlv::sequence(vec![Tlv::object_identifier(ObjectIdentifier::RsaEncryption)]);
        assert!(matches!(
            AlgorithmIdentifier::from_tlv(&tlv),
            Err(X509Error::InvalidAlgorithm(_))
        ));
    }
}
