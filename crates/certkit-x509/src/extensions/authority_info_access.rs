//! Authority Information Access extension (RFC 5280 section 4.2.2.1).

use certkit_asn1::{ObjectIdentifier, Tlv};

use crate::error::X509Error;
use crate::general_name::GeneralName;

/// AuthorityInfoAccessSyntax ::= SEQUENCE SIZE (1..MAX) OF AccessDescription
pub type AuthorityInfoAccess = Vec<AccessDescription>;

/// AccessDescription ::= SEQUENCE {
///   accessMethod    OBJECT IDENTIFIER,
///   accessLocation  GeneralName }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDescription {
    pub method: ObjectIdentifier,
    pub location: GeneralName,
}

pub(crate) fn decode_authority_info_access(
    tlv: &Tlv,
) -> Result<AuthorityInfoAccess, X509Error> {
    let sequence = tlv
        .sequence_value()
        .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?;
    if sequence.is_empty() {
        return Err(X509Error::InvalidExtension(tlv.clone()));
    }
    sequence.iter().map(AccessDescription::from_tlv).collect()
}

impl AccessDescription {
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        let sequence = tlv
            .sequence_value()
            .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?;
        if sequence.len() != 2 {
            return Err(X509Error::InvalidExtension(tlv.clone()));
        }
        let method = sequence[0]
            .object_identifier_value()
            .cloned()
            .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?;
        let location = GeneralName::from_tlv(&sequence[1])?;
        Ok(Self { method, location })
    }
}
