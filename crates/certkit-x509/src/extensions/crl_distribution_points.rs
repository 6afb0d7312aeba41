//! CRL Distribution Points extension (RFC 5280 section 4.2.1.13).

use certkit_asn1::{Class, Tlv};

use crate::error::X509Error;
use crate::general_name::{decode_general_names, GeneralNames};
use crate::name::RelativeDistinguishedName;

/// CRLDistributionPoints ::= SEQUENCE SIZE (1..MAX) OF DistributionPoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrlDistributionPoints {
    pub distribution_points: Vec<DistributionPoint>,
}

/// DistributionPoint ::= SEQUENCE {
///   distributionPoint  [0] DistributionPointName OPTIONAL,
///   reasons            [1] ReasonFlags OPTIONAL,
///   cRLIssuer          [2] GeneralNames OPTIONAL }
///
/// `[0]` is EXPLICIT (its child is the CHOICE); `[1]` and `[2]` are
/// IMPLICIT and read directly from the context node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DistributionPoint {
    pub name: Option<DistributionPointName>,
    pub reasons: Option<ReasonFlags>,
    pub crl_issuer: Option<GeneralNames>,
}

/// DistributionPointName ::= CHOICE {
///   fullName                [0] GeneralNames,
///   nameRelativeToCRLIssuer [1] RelativeDistinguishedName }
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistributionPointName {
    Full(GeneralNames),
    RelativeToCrlIssuer(RelativeDistinguishedName),
}

/// ReasonFlags ::= BIT STRING, nine flags numbered MSB-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReasonFlags(pub u16);

impl ReasonFlags {
    pub const UNUSED: u16 = 1 << 15;
    pub const KEY_COMPROMISE: u16 = 1 << 14;
    pub const CA_COMPROMISE: u16 = 1 << 13;
    pub const AFFILIATION_CHANGED: u16 = 1 << 12;
    pub const SUPERSEDED: u16 = 1 << 11;
    pub const CESSATION_OF_OPERATION: u16 = 1 << 10;
    pub const CERTIFICATE_HOLD: u16 = 1 << 9;
    pub const PRIVILEGE_WITHDRAWN: u16 = 1 << 8;
    pub const AA_COMPROMISE: u16 = 1 << 7;

    pub fn contains(&self, flags: u16) -> bool {
        self.0 & flags == flags
    }

    /// Build from raw BIT STRING content: one unused-bits octet, then
    /// one or two payload bytes.
    fn from_bit_bytes(data: &[u8], origin: &Tlv) -> Result<Self, X509Error> {
        match data {
            [_, first] => Ok(Self(u16::from(*first) << 8)),
            [_, first, second] => Ok(Self(u16::from(*first) << 8 | u16::from(*second))),
            _ => Err(X509Error::InvalidExtension(origin.clone())),
        }
    }
}

impl CrlDistributionPoints {
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        let sequence = tlv
            .sequence_value()
            .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?;
        if sequence.is_empty() {
            return Err(X509Error::InvalidExtension(tlv.clone()));
        }
        let distribution_points = sequence
            .iter()
            .map(DistributionPoint::from_tlv)
            .collect::<Result<_, _>>()?;
        Ok(Self {
            distribution_points,
        })
    }
}

impl DistributionPoint {
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        let sequence = tlv
            .sequence_value()
            .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?;
        if sequence.len() > 3 {
            return Err(X509Error::InvalidExtension(tlv.clone()));
        }

        let mut result = Self::default();
        for item in sequence {
            if item.identifier.class != Class::ContextSpecific {
                return Err(X509Error::InvalidExtension(item.clone()));
            }
            match item.identifier.tag.number() {
                0 => {
                    let inner = item
                        .sequence_value()
                        .and_then(<[Tlv]>::first)
                        .ok_or_else(|| X509Error::InvalidExtension(item.clone()))?;
                    result.name = Some(DistributionPointName::from_tlv(inner)?);
                }
                1 => {
                    let data = item
                        .data_value()
                        .ok_or_else(|| X509Error::InvalidExtension(item.clone()))?;
                    result.reasons = Some(ReasonFlags::from_bit_bytes(data, item)?);
                }
                2 => result.crl_issuer = Some(decode_general_names(item)?),
                _ => return Err(X509Error::InvalidExtension(item.clone())),
            }
        }
        Ok(result)
    }
}

impl DistributionPointName {
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        if tlv.identifier.class != Class::ContextSpecific {
            return Err(X509Error::InvalidExtension(tlv.clone()));
        }
        match tlv.identifier.tag.number() {
            0 => Ok(DistributionPointName::Full(decode_general_names(tlv)?)),
            1 => {
                let items = tlv
                    .sequence_value()
                    .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?;
                Ok(DistributionPointName::RelativeToCrlIssuer(
                    RelativeDistinguishedName::from_items(items, tlv)?,
                ))
            }
            _ => Err(X509Error::InvalidExtension(tlv.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::general_name::GeneralName;

    #[test]
    fn test_full_name_uri() {
        // SEQUENCE { SEQUENCE { [0] { [0] { [6] "http://crl.example/ca.crl" } } } }
        let uri = b"http://crl.example/ca.crl";
        let mut der = vec![
            0x30,
            (uri.len() + 8) as u8,
            0x30,
            (uri.len() + 6) as u8,
            0xa0,
            (uri.len() + 4) as u8,
            0xa0,
            (uri.len() + 2) as u8,
            0x86,
            uri.len() as u8,
        ];
        der.extend_from_slice(uri);
        let tlv = Tlv::from_der(&der).unwrap();
        let cdp = CrlDistributionPoints::from_tlv(&tlv).unwrap();
        assert_eq!(cdp.distribution_points.len(), 1);
        assert_eq!(
            cdp.distribution_points[0].name,
            Some(DistributionPointName::Full(vec![
                GeneralName::UniformResourceIdentifier("http://crl.example/ca.crl".into())
            ]))
        );
        assert_eq!(cdp.distribution_points[0].reasons, None);
        assert_eq!(cdp.distribution_points[0].crl_issuer, None);
    }

    #[test]
    fn test_reasons_flags() {
        // SEQUENCE { SEQUENCE { [1] BIT-STRING-content } }
        let der = [0x30, 0x06, 0x30, 0x04, 0x81, 0x02, 0x01, 0x60];
        let tlv = Tlv::from_der(&der).unwrap();
        let cdp = CrlDistributionPoints::from_tlv(&tlv).unwrap();
        let reasons = cdp.distribution_points[0].reasons.unwrap();
        assert!(reasons.contains(ReasonFlags::KEY_COMPROMISE));
        assert!(reasons.contains(ReasonFlags::CA_COMPROMISE));
        assert!(!reasons.contains(ReasonFlags::UNUSED));
    }

    #[test]
    fn test_nine_reason_flags() {
        let der = [0x30, 0x07, 0x30, 0x05, 0x81, 0x03, 0x07, 0xff, 0x80];
        let tlv = Tlv::from_der(&der).unwrap();
        let cdp = CrlDistributionPoints::from_tlv(&tlv).unwrap();
        let reasons = cdp.distribution_points[0].reasons.unwrap();
        for flag in [
            ReasonFlags::UNUSED,
            ReasonFlags::KEY_COMPROMISE,
            ReasonFlags::CA_COMPROMISE,
            ReasonFlags::AFFILIATION_CHANGED,
            ReasonFlags::SUPERSEDED,
            ReasonFlags::CESSATION_OF_OPERATION,
            ReasonFlags::CERTIFICATE_HOLD,
            ReasonFlags::PRIVILEGE_WITHDRAWN,
            ReasonFlags::AA_COMPROMISE,
        ] {
            assert!(reasons.contains(flag));
        }
    }

    #[test]
    fn test_empty_list_rejected() {
        let tlv = Tlv::from_der(&[0x30, 0x00]).unwrap();
        assert!(CrlDistributionPoints::from_tlv(&tlv).is_err());
    }

    #[test]
    fn test_empty_distribution_point() {
        let tlv = Tlv::from_der(&[0x30, 0x02, 0x30, 0x00]).unwrap();
        let cdp = CrlDistributionPoints::from_tlv(&tlv).unwrap();
        assert_eq!(cdp.distribution_points[0], DistributionPoint::default());
    }
}
