//! BIT STRING payload splitting.

use certkit_asn1::{Tag, Tlv};

use crate::error::X509Error;

/// A decoded BIT STRING: the unused-bits count octet plus the payload.
///
/// The count is kept verbatim and not validated against 0..=7; every
/// consumer here treats the remaining bytes as the payload regardless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitString {
    pub padding: u8,
    pub bytes: Vec<u8>,
}

impl BitString {
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        if tlv.identifier.tag != Tag::BitString {
            return Err(X509Error::InvalidStructure(tlv.clone()));
        }
        let data = tlv
            .data_value()
            .ok_or_else(|| X509Error::InvalidStructure(tlv.clone()))?;
        let Some((&padding, bytes)) = data.split_first() else {
            return Err(X509Error::InvalidStructure(tlv.clone()));
        };
        Ok(Self {
            padding,
            bytes: bytes.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        let tlv = Tlv::from_der(&[0x03, 0x03, 0x05, 0xa0, 0x01]).unwrap();
        let bits = BitString::from_tlv(&tlv).unwrap();
        assert_eq!(bits.padding, 5);
        assert_eq!(bits.bytes, vec![0xa0, 0x01]);
    }

    #[test]
    fn test_empty_rejected() {
        let tlv = Tlv::from_der(&[0x03, 0x00]).unwrap();
        assert!(BitString::from_tlv(&tlv).is_err());
    }

    #[test]
    fn test_wrong_tag_rejected() {
        let tlv = Tlv::from_der(&[0x04, 0x02, 0x00, 0x01]).unwrap();
        assert!(BitString::from_tlv(&tlv).is_err());
    }
}
