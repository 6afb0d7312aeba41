//! Extended Key Usage extension (RFC 5280 section 4.2.1.12).

use certkit_asn1::oid::{KeyPurpose, ObjectIdentifier, Pkix};
use certkit_asn1::Tlv;

use crate::error::X509Error;

/// ExtKeyUsageSyntax ::= SEQUENCE SIZE (1..MAX) OF KeyPurposeId
///
/// Known purposes classify to `ServerAuth`/`ClientAuth`; anything else
/// is kept as `Other` with its OID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedKeyUsage {
    pub key_purpose_ids: Vec<KeyPurpose>,
}

impl ExtendedKeyUsage {
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        let sequence = tlv
            .sequence_value()
            .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?;
        if sequence.is_empty() {
            return Err(X509Error::InvalidExtension(tlv.clone()));
        }
        let key_purpose_ids = sequence
            .iter()
            .map(|item| {
                let oid = item
                    .object_identifier_value()
                    .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?;
                Ok(match oid {
                    ObjectIdentifier::Pkix(Some(Pkix::KeyPurpose(purpose))) => purpose.clone(),
                    other => KeyPurpose::Other(Box::new(other.clone())),
                })
            })
            .collect::<Result<_, X509Error>>()?;
        Ok(Self { key_purpose_ids })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_server_and_client_auth() {
        let der = hex!("30 14 06 08 2b 06 01 05 05 07 03 01 06 08 2b 06 01 05 05 07 03 02");
        let tlv = Tlv::from_der(&der).unwrap();
        let eku = ExtendedKeyUsage::from_tlv(&tlv).unwrap();
        assert_eq!(
            eku.key_purpose_ids,
            vec![KeyPurpose::ServerAuth, KeyPurpose::ClientAuth]
        );
    }

    #[test]
    fn test_unknown_purpose_kept_as_other() {
        // 1.3.6.1.5.5.7.3.8 (timeStamping key purpose, not in the registry)
        let der = hex!("30 0a 06 08 2b 06 01 05 05 07 03 08");
        let tlv = Tlv::from_der(&der).unwrap();
        let eku = ExtendedKeyUsage::from_tlv(&tlv).unwrap();
        assert_eq!(eku.key_purpose_ids.len(), 1);
        assert!(matches!(eku.key_purpose_ids[0], KeyPurpose::Other(_)));
    }

    #[test]
    fn test_empty_rejected() {
        let tlv = Tlv::from_der(&[0x30, 0x00]).unwrap();
        assert!(ExtendedKeyUsage::from_tlv(&tlv).is_err());
    }

    #[test]
    fn test_non_oid_entry_rejected() {
        let tlv = Tlv::from_der(&[0x30, 0x03, 0x02, 0x01, 0x01]).unwrap();
        assert!(ExtendedKeyUsage::from_tlv(&tlv).is_err());
    }
}
