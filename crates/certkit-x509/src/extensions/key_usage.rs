//! KeyUsage extension (RFC 5280 section 4.2.1.3).

use certkit_asn1::Tlv;

use crate::bit_string::BitString;
use crate::error::X509Error;

/// KeyUsage ::= BIT STRING, nine flags numbered MSB-first.
///
/// The mask keeps the first payload byte in the high half, so bit `n`
/// of the BIT STRING maps to `1 << (15 - n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyUsage(pub u16);

impl KeyUsage {
    pub const DIGITAL_SIGNATURE: u16 = 1 << 15;
    pub const NON_REPUDIATION: u16 = 1 << 14;
    pub const KEY_ENCIPHERMENT: u16 = 1 << 13;
    pub const DATA_ENCIPHERMENT: u16 = 1 << 12;
    pub const KEY_AGREEMENT: u16 = 1 << 11;
    pub const KEY_CERT_SIGN: u16 = 1 << 10;
    pub const CRL_SIGN: u16 = 1 << 9;
    pub const ENCIPHER_ONLY: u16 = 1 << 8;
    pub const DECIPHER_ONLY: u16 = 1 << 7;

    pub fn contains(&self, flags: u16) -> bool {
        self.0 & flags == flags
    }

    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        let bits =
            BitString::from_tlv(tlv).map_err(|_| X509Error::InvalidExtension(tlv.clone()))?;
        match bits.bytes.as_slice() {
            [first] => Ok(Self(u16::from(*first) << 8)),
            [first, second] => Ok(Self(u16::from(*first) << 8 | u16::from(*second))),
            _ => Err(X509Error::InvalidExtension(tlv.clone())),
        }
    }
}
