//! Distinguished names: RDN sequences and their attributes.

use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use certkit_asn1::{ObjectIdentifier, Tag, Tlv};

use crate::error::X509Error;

/// Name ::= CHOICE { rdnSequence RDNSequence }
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Name {
    RdnSequence(RdnSequence),
}

/// RDNSequence ::= SEQUENCE OF RelativeDistinguishedName
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RdnSequence(pub Vec<RelativeDistinguishedName>);

/// RelativeDistinguishedName ::= SET SIZE (1..MAX) OF AttributeTypeAndValue
///
/// Component order is semantically insignificant, hence the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeDistinguishedName(pub HashSet<AttributeTypeAndValue>);

/// AttributeTypeAndValue ::= SEQUENCE { type OBJECT IDENTIFIER, value ANY }
///
/// Hashing keys off the type only; set membership within one RDN is
/// effectively per-type. Equality still compares both fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeTypeAndValue {
    pub attr_type: ObjectIdentifier,
    pub value: Tlv,
}

impl Hash for AttributeTypeAndValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.attr_type.hash(state);
    }
}

impl Name {
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        if tlv.identifier.tag != Tag::Sequence {
            return Err(X509Error::InvalidName(tlv.clone()));
        }
        Ok(Name::RdnSequence(RdnSequence::from_tlv(tlv)?))
    }
}

impl RdnSequence {
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        let sequence = tlv
            .sequence_value()
            .ok_or_else(|| X509Error::InvalidName(tlv.clone()))?;
        let items = sequence
            .iter()
            .map(RelativeDistinguishedName::from_tlv)
            .collect::<Result<_, _>>()?;
        Ok(RdnSequence(items))
    }
}

impl RelativeDistinguishedName {
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        let items = tlv
            .set_value()
            .ok_or_else(|| X509Error::InvalidRelativeDistinguishedName(tlv.clone()))?;
        Self::from_items(items, tlv)
    }

    /// Build from a raw component list, for callers holding an
    /// IMPLICIT-tagged RDN whose SET identifier was replaced.
    pub(crate) fn from_items(items: &[Tlv], origin: &Tlv) -> Result<Self, X509Error> {
        if items.is_empty() {
            return Err(X509Error::InvalidRelativeDistinguishedName(origin.clone()));
        }
        let mut components = HashSet::new();
        for item in items {
            components.insert(AttributeTypeAndValue::from_tlv(item)?);
        }
        Ok(RelativeDistinguishedName(components))
    }
}

impl AttributeTypeAndValue {
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        let sequence = tlv
            .sequence_value()
            .ok_or_else(|| X509Error::InvalidName(tlv.clone()))?;
        if sequence.len() != 2 {
            return Err(X509Error::InvalidName(tlv.clone()));
        }
        let attr_type = sequence[0]
            .object_identifier_value()
            .cloned()
            .ok_or_else(|| X509Error::InvalidName(tlv.clone()))?;
        Ok(Self {
            attr_type,
            value: sequence[1].clone(),
        })
    }
}

/// DirectoryString ::= CHOICE of the five X.520 string forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryString {
    TeletexString(String),
    PrintableString(String),
    UniversalString(String),
    Utf8String(String),
    BmpString(String),
}

impl DirectoryString {
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        match tlv.identifier.tag {
            Tag::PrintableString => {
                let value = tlv
                    .string_value()
                    .ok_or_else(|| X509Error::InvalidName(tlv.clone()))?;
                Ok(DirectoryString::PrintableString(value.to_string()))
            }
            Tag::Utf8String => {
                let value = tlv
                    .string_value()
                    .ok_or_else(|| X509Error::InvalidName(tlv.clone()))?;
                Ok(DirectoryString::Utf8String(value.to_string()))
            }
            Tag::TeletexString => {
                // T.61 in practice carries Latin-1
                let bytes = tlv
                    .data_value()
                    .ok_or_else(|| X509Error::InvalidName(tlv.clone()))?;
                Ok(DirectoryString::TeletexString(
                    bytes.iter().map(|&b| b as char).collect(),
                ))
            }
            Tag::BmpString => {
                let bytes = tlv
                    .data_value()
                    .ok_or_else(|| X509Error::InvalidName(tlv.clone()))?;
                let value =
                    utf16_be(bytes).ok_or_else(|| X509Error::InvalidName(tlv.clone()))?;
                Ok(DirectoryString::BmpString(value))
            }
            Tag::UniversalString => Err(X509Error::Unimplemented(tlv.clone())),
            _ => Err(X509Error::InvalidName(tlv.clone())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DirectoryString::TeletexString(value)
            | DirectoryString::PrintableString(value)
            | DirectoryString::UniversalString(value)
            | DirectoryString::Utf8String(value)
            | DirectoryString::BmpString(value) => value,
        }
    }
}

pub(crate) fn utf16_be(bytes: &[u8]) -> Option<String> {
    if bytes.len() % 2 != 0 {
        return None;
    }
    let units: Vec<u16> = bytes
        .chunks(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).ok()
}
