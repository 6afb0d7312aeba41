//! Netscape certificate extensions.

use certkit_asn1::Tlv;

use crate::bit_string::BitString;
use crate::error::X509Error;

/// The Netscape vendor extensions this decoder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetscapeExtension {
    CertificateType(CertificateType),
}

/// CertificateType ::= BIT STRING {
///   sslClient (0), sslServer (1), smime (2), objectSigning (3),
///   reserved (4), sslCA (5), smimeCA (6), objectSigningCA (7) }
///
/// The padding octet is kept alongside the flag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CertificateType {
    pub padding: u8,
    pub bits: u8,
}

impl CertificateType {
    pub const SSL_CLIENT: u8 = 1 << 7;
    pub const SSL_SERVER: u8 = 1 << 6;
    pub const SMIME: u8 = 1 << 5;
    pub const OBJECT_SIGNING: u8 = 1 << 4;
    pub const SSL_CA: u8 = 1 << 2;
    pub const SMIME_CA: u8 = 1 << 1;
    pub const OBJECT_SIGNING_CA: u8 = 1 << 0;

    pub fn contains(&self, flags: u8) -> bool {
        self.bits & flags == flags
    }

    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        let bits =
            BitString::from_tlv(tlv).map_err(|_| X509Error::InvalidExtension(tlv.clone()))?;
        match bits.bytes.as_slice() {
            [value] => Ok(Self {
                padding: bits.padding,
                bits: *value,
            }),
            _ => Err(X509Error::InvalidExtension(tlv.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ssl_server() {
        let tlv = Tlv::from_der(&[0x03, 0x02, 0x06, 0x40]).unwrap();
        let cert_type = CertificateType::from_tlv(&tlv).unwrap();
        assert_eq!(cert_type.padding, 6);
        assert!(cert_type.contains(CertificateType::SSL_SERVER));
        assert!(!cert_type.contains(CertificateType::SSL_CLIENT));
        assert!(!cert_type.contains(CertificateType::SSL_CA));
    }

    #[test]
    fn test_ca_flags() {
        let tlv = Tlv::from_der(&[0x03, 0x02, 0x00, 0x07]).unwrap();
        let cert_type = CertificateType::from_tlv(&tlv).unwrap();
        assert!(cert_type.contains(CertificateType::SSL_CA));
        assert!(cert_type.contains(CertificateType::SMIME_CA));
        assert!(cert_type.contains(CertificateType::OBJECT_SIGNING_CA));
    }

    #[test]
    fn test_wrong_width_rejected() {
        let tlv = Tlv::from_der(&[0x03, 0x03, 0x00, 0x40, 0x00]).unwrap();
        assert!(CertificateType::from_tlv(&tlv).is_err());
    }
}
