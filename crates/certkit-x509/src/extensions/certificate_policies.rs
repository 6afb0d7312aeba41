//! Certificate Policies extension (RFC 5280 section 4.2.1.4).

use certkit_asn1::oid::{ObjectIdentifier, Pkix, PolicyQualifier};
use certkit_asn1::{Tag, Tlv};

use crate::error::X509Error;
use crate::general_name::text_value;

/// certificatePolicies ::= SEQUENCE SIZE (1..MAX) OF PolicyInformation
pub type CertificatePolicies = Vec<PolicyInformation>;

/// PolicyInformation ::= SEQUENCE {
///   policyIdentifier  CertPolicyId,
///   policyQualifiers  SEQUENCE SIZE (1..MAX) OF PolicyQualifierInfo OPTIONAL }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyInformation {
    pub identifier: ObjectIdentifier,
    pub qualifiers: Vec<PolicyQualifierInfo>,
}

/// Qualifier ::= CHOICE { cPSuri IA5String, userNotice UserNotice }
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyQualifierInfo {
    Cps(String),
    Unotice(UserNotice),
}

/// UserNotice ::= SEQUENCE {
///   noticeRef     NoticeReference OPTIONAL,
///   explicitText  DisplayText OPTIONAL }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserNotice {
    pub reference: Option<NoticeReference>,
    pub explicit_text: Option<DisplayText>,
}

/// NoticeReference ::= SEQUENCE {
///   organization   DisplayText,
///   noticeNumbers  SEQUENCE OF INTEGER }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeReference {
    pub organization: DisplayText,
    pub notice_numbers: Vec<i64>,
}

/// DisplayText ::= CHOICE of four string forms, SIZE (1..200).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayText {
    Ia5String(String),
    VisibleString(String),
    BmpString(String),
    Utf8String(String),
}

pub(crate) fn decode_certificate_policies(
    tlv: &Tlv,
) -> Result<CertificatePolicies, X509Error> {
    let sequence = tlv
        .sequence_value()
        .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?;
    if sequence.is_empty() {
        return Err(X509Error::InvalidExtension(tlv.clone()));
    }
    sequence.iter().map(PolicyInformation::from_tlv).collect()
}

impl PolicyInformation {
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        let sequence = tlv
            .sequence_value()
            .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?;
        if sequence.is_empty() || sequence.len() > 2 {
            return Err(X509Error::InvalidExtension(tlv.clone()));
        }
        let identifier = sequence[0]
            .object_identifier_value()
            .cloned()
            .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?;
        let qualifiers = match sequence.get(1) {
            Some(list) => decode_qualifiers(list)?,
            None => Vec::new(),
        };
        Ok(Self {
            identifier,
            qualifiers,
        })
    }
}

fn decode_qualifiers(tlv: &Tlv) -> Result<Vec<PolicyQualifierInfo>, X509Error> {
    let sequence = tlv
        .sequence_value()
        .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?;
    if sequence.is_empty() {
        return Err(X509Error::InvalidExtension(tlv.clone()));
    }
    sequence.iter().map(PolicyQualifierInfo::from_tlv).collect()
}

impl PolicyQualifierInfo {
    /// PolicyQualifierInfo ::= SEQUENCE {
    ///   policyQualifierId  OBJECT IDENTIFIER (id-qt-cps | id-qt-unotice),
    ///   qualifier          ANY DEFINED BY policyQualifierId }
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        let sequence = tlv
            .sequence_value()
            .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?;
        if sequence.len() != 2 {
            return Err(X509Error::InvalidExtension(tlv.clone()));
        }
        let id = sequence[0]
            .object_identifier_value()
            .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?;
        let ObjectIdentifier::Pkix(Some(Pkix::PolicyQualifier(qualifier))) = id else {
            return Err(X509Error::InvalidExtension(tlv.clone()));
        };
        match qualifier {
            PolicyQualifier::Cps => {
                let uri = text_value(&sequence[1])
                    .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?;
                Ok(PolicyQualifierInfo::Cps(uri))
            }
            PolicyQualifier::Unotice => {
                Ok(PolicyQualifierInfo::Unotice(UserNotice::from_tlv(
                    &sequence[1],
                )?))
            }
        }
    }
}

impl UserNotice {
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        let sequence = tlv
            .sequence_value()
            .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?;
        match sequence {
            [] => Ok(Self {
                reference: None,
                explicit_text: None,
            }),
            // a single element is a NoticeReference if it is itself a
            // sequence, otherwise the explicit text
            [only] if only.sequence_value().is_some() => Ok(Self {
                reference: Some(NoticeReference::from_tlv(only)?),
                explicit_text: None,
            }),
            [only] => Ok(Self {
                reference: None,
                explicit_text: Some(DisplayText::from_tlv(only)?),
            }),
            [reference, explicit_text] => Ok(Self {
                reference: Some(NoticeReference::from_tlv(reference)?),
                explicit_text: Some(DisplayText::from_tlv(explicit_text)?),
            }),
            _ => Err(X509Error::InvalidExtension(tlv.clone())),
        }
    }
}

impl NoticeReference {
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        let sequence = tlv
            .sequence_value()
            .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?;
        if sequence.len() != 2 {
            return Err(X509Error::InvalidExtension(tlv.clone()));
        }
        let organization = DisplayText::from_tlv(&sequence[0])?;
        let numbers = sequence[1]
            .sequence_value()
            .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?;
        let notice_numbers = numbers
            .iter()
            .map(|item| {
                item.integer_value()
                    .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))
            })
            .collect::<Result<_, _>>()?;
        Ok(Self {
            organization,
            notice_numbers,
        })
    }
}

impl DisplayText {
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        let text = match tlv.identifier.tag {
            Tag::BmpString => tlv
                .data_value()
                .and_then(crate::name::utf16_be)
                .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?,
            _ => text_value(tlv).ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?,
        };
        if text.is_empty() || text.len() > 200 {
            return Err(X509Error::InvalidExtension(tlv.clone()));
        }
        match tlv.identifier.tag {
            Tag::Ia5String => Ok(DisplayText::Ia5String(text)),
            Tag::VisibleString => Ok(DisplayText::VisibleString(text)),
            Tag::BmpString => Ok(DisplayText::BmpString(text)),
            Tag::Utf8String => Ok(DisplayText::Utf8String(text)),
            _ => Err(X509Error::InvalidExtension(tlv.clone())),
        }
    }
}
