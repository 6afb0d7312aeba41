//! GeneralName CHOICE decoding.

use certkit_asn1::{Class, Content, ObjectIdentifier, Tlv};

use crate::error::X509Error;
use crate::name::{DirectoryString, Name};

/// GeneralName ::= CHOICE {
///   otherName                 [0] OtherName,
///   rfc822Name                [1] IA5String,
///   dNSName                   [2] IA5String,
///   x400Address               [3] ORAddress,
///   directoryName             [4] EXPLICIT Name,
///   ediPartyName              [5] EDIPartyName,
///   uniformResourceIdentifier [6] IA5String,
///   iPAddress                 [7] OCTET STRING,
///   registeredID              [8] OBJECT IDENTIFIER }
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneralName {
    OtherName(OtherName),
    Rfc822Name(String),
    DnsName(String),
    X400Address(OrAddress),
    DirectoryName(Name),
    EdiPartyName(EdiPartyName),
    UniformResourceIdentifier(String),
    /// Raw address octets; length is not validated against IPv4/IPv6.
    IpAddress(Vec<u8>),
    RegisteredId(ObjectIdentifier),
}

pub type GeneralNames = Vec<GeneralName>;

/// OtherName ::= SEQUENCE {
///   type-id  OBJECT IDENTIFIER,
///   value    [0] EXPLICIT ANY DEFINED BY type-id }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherName {
    pub type_id: ObjectIdentifier,
    pub value: Tlv,
}

/// EDIPartyName ::= SEQUENCE {
///   nameAssigner  [0] DirectoryString OPTIONAL,
///   partyName     [1] DirectoryString }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdiPartyName {
    pub name_assigner: Option<DirectoryString>,
    pub party_name: DirectoryString,
}

/// X.400 OR-addresses are not decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrAddress;

impl OrAddress {
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        Err(X509Error::Unimplemented(tlv.clone()))
    }
}

impl GeneralName {
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        if tlv.identifier.class != Class::ContextSpecific {
            return Err(X509Error::InvalidGeneralName(tlv.clone()));
        }
        match tlv.identifier.tag.number() {
            0 => Ok(GeneralName::OtherName(OtherName::from_tlv(tlv)?)),
            1 => text_value(tlv)
                .map(GeneralName::Rfc822Name)
                .ok_or_else(|| X509Error::InvalidGeneralName(tlv.clone())),
            2 => text_value(tlv)
                .map(GeneralName::DnsName)
                .ok_or_else(|| X509Error::InvalidGeneralName(tlv.clone())),
            3 => Ok(GeneralName::X400Address(OrAddress::from_tlv(tlv)?)),
            4 => {
                // [4] is EXPLICIT: the single child is the Name
                let sequence = tlv
                    .sequence_value()
                    .ok_or_else(|| X509Error::InvalidGeneralName(tlv.clone()))?;
                if sequence.len() != 1 {
                    return Err(X509Error::InvalidGeneralName(tlv.clone()));
                }
                Ok(GeneralName::DirectoryName(Name::from_tlv(&sequence[0])?))
            }
            5 => Ok(GeneralName::EdiPartyName(EdiPartyName::from_tlv(tlv)?)),
            6 => text_value(tlv)
                .map(GeneralName::UniformResourceIdentifier)
                .ok_or_else(|| X509Error::InvalidGeneralName(tlv.clone())),
            7 => tlv
                .data_value()
                .map(|bytes| GeneralName::IpAddress(bytes.to_vec()))
                .ok_or_else(|| X509Error::InvalidGeneralName(tlv.clone())),
            8 => tlv
                .data_value()
                .map(|bytes| GeneralName::RegisteredId(ObjectIdentifier::classify(bytes)))
                .ok_or_else(|| X509Error::InvalidGeneralName(tlv.clone())),
            _ => Err(X509Error::InvalidGeneralName(tlv.clone())),
        }
    }
}

/// GeneralNames ::= SEQUENCE SIZE (1..MAX) OF GeneralName
pub fn decode_general_names(tlv: &Tlv) -> Result<GeneralNames, X509Error> {
    let sequence = tlv
        .sequence_value()
        .ok_or_else(|| X509Error::InvalidGeneralName(tlv.clone()))?;
    if sequence.is_empty() {
        return Err(X509Error::InvalidGeneralName(tlv.clone()));
    }
    sequence.iter().map(GeneralName::from_tlv).collect()
}

impl OtherName {
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        let sequence = tlv
            .sequence_value()
            .ok_or_else(|| X509Error::InvalidGeneralName(tlv.clone()))?;
        if sequence.len() != 2 {
            return Err(X509Error::InvalidGeneralName(tlv.clone()));
        }
        let type_id = sequence[0]
            .object_identifier_value()
            .cloned()
            .ok_or_else(|| X509Error::InvalidGeneralName(tlv.clone()))?;
        Ok(Self {
            type_id,
            value: sequence[1].clone(),
        })
    }
}

impl EdiPartyName {
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        let sequence = tlv
            .sequence_value()
            .ok_or_else(|| X509Error::InvalidGeneralName(tlv.clone()))?;
        match sequence {
            [party_name] => Ok(Self {
                name_assigner: None,
                party_name: directory_string_field(party_name)?,
            }),
            [name_assigner, party_name] => Ok(Self {
                name_assigner: Some(directory_string_field(name_assigner)?),
                party_name: directory_string_field(party_name)?,
            }),
            _ => Err(X509Error::InvalidGeneralName(tlv.clone())),
        }
    }
}

/// Unwrap an EXPLICIT context wrapper around a DirectoryString if one
/// is present; a bare string decodes directly.
fn directory_string_field(tlv: &Tlv) -> Result<DirectoryString, X509Error> {
    if tlv.identifier.class == Class::ContextSpecific && tlv.identifier.is_constructed {
        let sequence = tlv
            .sequence_value()
            .ok_or_else(|| X509Error::InvalidGeneralName(tlv.clone()))?;
        if sequence.len() != 1 {
            return Err(X509Error::InvalidGeneralName(tlv.clone()));
        }
        return DirectoryString::from_tlv(&sequence[0]);
    }
    DirectoryString::from_tlv(tlv)
}

/// Textual content of a node: decoded string content, or raw bytes
/// that are valid UTF-8 (IA5String payloads under an IMPLICIT tag
/// arrive as raw data).
pub(crate) fn text_value(tlv: &Tlv) -> Option<String> {
    match &tlv.content {
        Content::String(value) => Some(value.clone()),
        Content::Data(bytes) => String::from_utf8(bytes.clone()).ok(),
        _ => None,
    }
}
