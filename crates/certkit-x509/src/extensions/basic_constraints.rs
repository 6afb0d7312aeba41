//! BasicConstraints extension (RFC 5280 section 4.2.1.9).

use certkit_asn1::Tlv;

use crate::error::X509Error;

/// BasicConstraints ::= SEQUENCE {
///   cA                 BOOLEAN DEFAULT FALSE,
///   pathLenConstraint  INTEGER (0..MAX) OPTIONAL }
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicConstraints {
    pub is_ca: bool,
    pub path_len: Option<i64>,
}

impl BasicConstraints {
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        let sequence = tlv
            .sequence_value()
            .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?;
        if sequence.len() > 2 {
            return Err(X509Error::InvalidExtension(tlv.clone()));
        }

        let is_ca = match sequence.first() {
            Some(item) => item
                .boolean_value()
                .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?,
            None => false,
        };

        let path_len = match sequence.get(1) {
            Some(item) => Some(
                item.integer_value()
                    .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?,
            ),
            None => None,
        };

        Ok(Self { is_ca, path_len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_defaults() {
        let tlv = Tlv::from_der(&[0x30, 0x00]).unwrap();
        assert_eq!(
            BasicConstraints::from_tlv(&tlv).unwrap(),
            BasicConstraints {
                is_ca: false,
                path_len: None
            }
        );
    }

    #[test]
    fn test_ca_with_path_len() {
        let tlv = Tlv::from_der(&[0x30, 0x06, 0x01, 0x01, 0xff, 0x02, 0x01, 0x03]).unwrap();
        assert_eq!(
            BasicConstraints::from_tlv(&tlv).unwrap(),
            BasicConstraints {
                is_ca: true,
                path_len: Some(3)
            }
        );
    }

    #[test]
    fn test_ca_without_path_len() {
        let tlv = Tlv::from_der(&[0x30, 0x03, 0x01, 0x01, 0xff]).unwrap();
        assert_eq!(
            BasicConstraints::from_tlv(&tlv).unwrap(),
            BasicConstraints {
                is_ca: true,
                path_len: None
            }
        );
    }

    #[test]
    fn test_too_many_elements_rejected() {
        let tlv =
            Tlv::from_der(&[0x30, 0x09, 0x01, 0x01, 0xff, 0x02, 0x01, 0x03, 0x02, 0x01, 0x00])
                .unwrap();
        assert!(BasicConstraints::from_tlv(&tlv).is_err());
    }

    #[test]
    fn test_wrong_leading_type_rejected() {
        let tlv = Tlv::from_der(&[0x30, 0x03, 0x02, 0x01, 0x03]).unwrap();
        assert!(BasicConstraints::from_tlv(&tlv).is_err());
    }
}
