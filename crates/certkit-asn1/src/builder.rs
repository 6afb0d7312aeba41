//! Convenience constructors for building `Tlv` trees programmatically.
//!
//! Decoding is one way to obtain a `Tlv`; these are the symmetric
//! entry points for code that assembles DER structures by hand, such
//! as tests and certificate builders. Every constructor pairs the
//! content with an identifier the encoder accepts.

use crate::oid::ObjectIdentifier;
use crate::{Class, Content, Identifier, Integer, Tag, Tlv};

fn universal(is_constructed: bool, tag: Tag, content: Content) -> Tlv {
    Tlv {
        identifier: Identifier {
            is_constructed,
            class: Class::Universal,
            tag,
        },
        content,
    }
}

impl Tlv {
    pub fn boolean(value: bool) -> Self {
        universal(false, Tag::Boolean, Content::Boolean(value))
    }

    pub fn integer(value: i64) -> Self {
        universal(false, Tag::Integer, Content::Integer(Integer::Sane(value)))
    }

    /// An INTEGER wider than a machine word, from big-endian bytes.
    pub fn big_integer(bytes: &[u8]) -> Self {
        universal(
            false,
            Tag::Integer,
            Content::Integer(Integer::Insane(bytes.to_vec())),
        )
    }

    pub fn enumerated(value: i64) -> Self {
        universal(
            false,
            Tag::Enumerated,
            Content::Integer(Integer::Sane(value)),
        )
    }

    pub fn null() -> Self {
        universal(false, Tag::Null, Content::Data(vec![]))
    }

    pub fn printable_string(text: &str) -> Self {
        universal(
            false,
            Tag::PrintableString,
            Content::String(text.to_string()),
        )
    }

    pub fn utf8_string(text: &str) -> Self {
        universal(false, Tag::Utf8String, Content::String(text.to_string()))
    }

    pub fn octet_string(bytes: &[u8]) -> Self {
        universal(false, Tag::OctetString, Content::Data(bytes.to_vec()))
    }

    /// A BIT STRING from its unused-bits count and payload.
    pub fn bit_string(padding: u8, bytes: &[u8]) -> Self {
        let mut content = vec![padding];
        content.extend_from_slice(bytes);
        universal(false, Tag::BitString, Content::Data(content))
    }

    pub fn object_identifier(oid: ObjectIdentifier) -> Self {
        universal(
            false,
            Tag::ObjectIdentifier,
            Content::ObjectIdentifier(oid),
        )
    }

    pub fn utc_time(text: &str) -> Self {
        universal(false, Tag::UtcTime, Content::Data(text.as_bytes().to_vec()))
    }

    pub fn generalized_time(text: &str) -> Self {
        universal(
            false,
            Tag::GeneralizedTime,
            Content::Data(text.as_bytes().to_vec()),
        )
    }

    pub fn sequence(items: Vec<Tlv>) -> Self {
        universal(true, Tag::Sequence, Content::Sequence(items))
    }

    pub fn set(items: Vec<Tlv>) -> Self {
        universal(true, Tag::Set, Content::Sequence(items))
    }

    /// A constructed context-specific value, as used for EXPLICIT tags.
    pub fn context(number: u32, items: Vec<Tlv>) -> Self {
        Tlv {
            identifier: Identifier {
                is_constructed: true,
                class: Class::ContextSpecific,
                tag: Tag::from_number(number),
            },
            content: Content::Sequence(items),
        }
    }

    /// A primitive context-specific value, as used for IMPLICIT tags.
    pub fn context_primitive(number: u32, bytes: &[u8]) -> Self {
        Tlv {
            identifier: Identifier {
                is_constructed: false,
                class: Class::ContextSpecific,
                tag: Tag::from_number(number),
            },
            content: Content::Data(bytes.to_vec()),
        }
    }
}
