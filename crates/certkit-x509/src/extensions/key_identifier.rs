//! Key identifier extensions (RFC 5280 sections 4.2.1.1 and 4.2.1.2).

use certkit_asn1::{Class, Tlv};

use crate::error::X509Error;
use crate::general_name::{decode_general_names, GeneralNames};
use crate::tbs::SerialNumber;

/// KeyIdentifier ::= OCTET STRING
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyIdentifier(pub Vec<u8>);

/// SubjectKeyIdentifier ::= KeyIdentifier
pub type SubjectKeyIdentifier = KeyIdentifier;

impl KeyIdentifier {
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        let bytes = tlv
            .data_value()
            .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?;
        Ok(Self(bytes.to_vec()))
    }
}

/// AuthorityKeyIdentifier ::= SEQUENCE {
///   keyIdentifier             [0] KeyIdentifier           OPTIONAL,
///   authorityCertIssuer       [1] GeneralNames            OPTIONAL,
///   authorityCertSerialNumber [2] CertificateSerialNumber OPTIONAL }
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthorityKeyIdentifier {
    pub key_identifier: Option<KeyIdentifier>,
    pub authority_cert_issuer: Option<GeneralNames>,
    pub authority_cert_serial_number: Option<SerialNumber>,
}

impl AuthorityKeyIdentifier {
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
                0 => result.key_identifier = Some(KeyIdentifier::from_tlv(item)?),
                1 => result.authority_cert_issuer = Some(decode_general_names(item)?),
                2 => {
                    let bytes = item
                        .data_value()
                        .ok_or_else(|| X509Error::InvalidExtension(item.clone()))?;
                    let serial = SerialNumber::from_bytes(bytes)
                        .ok_or_else(|| X509Error::InvalidExtension(item.clone()))?;
                    result.authority_cert_serial_number = Some(serial);
                }
                _ => return Err(X509Error::InvalidExtension(item.clone())),
            }
        }
        Ok(result)
    }
}
