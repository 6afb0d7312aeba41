//! Human-readable rendering for decoded elements.
//!
//! Error types embed the offending element, so the rendering aims at
//! diagnostics: compact, single line, nested brackets for sequences.

use std::fmt;

use crate::{Class, Content, Identifier, Integer, Tag, Tlv};

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Class::Universal => "universal",
            Class::Application => "application",
            Class::ContextSpecific => "context-specific",
            Class::Private => "private",
        })
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::EndOfContent => f.write_str("end-of-content"),
            Tag::Boolean => f.write_str("boolean"),
            Tag::Integer => f.write_str("integer"),
            Tag::BitString => f.write_str("bit-string"),
            Tag::OctetString => f.write_str("octet-string"),
            Tag::Null => f.write_str("null"),
            Tag::ObjectIdentifier => f.write_str("object-identifier"),
            Tag::ObjectDescriptor => f.write_str("object-descriptor"),
            Tag::External => f.write_str("external"),
            Tag::Real => f.write_str("real"),
            Tag::Enumerated => f.write_str("enumerated"),
            Tag::EmbeddedPdv => f.write_str("embedded-pdv"),
            Tag::Utf8String => f.write_str("utf8-string"),
            Tag::RelativeOid => f.write_str("relative-oid"),
            Tag::Sequence => f.write_str("sequence"),
            Tag::Set => f.write_str("set"),
            Tag::NumericString => f.write_str("numeric-string"),
            Tag::PrintableString => f.write_str("printable-string"),
            Tag::TeletexString => f.write_str("teletex-string"),
            Tag::VideotexString => f.write_str("videotex-string"),
            Tag::Ia5String => f.write_str("ia5-string"),
            Tag::UtcTime => f.write_str("utc-time"),
            Tag::GeneralizedTime => f.write_str("generalized-time"),
            Tag::GraphicString => f.write_str("graphic-string"),
            Tag::VisibleString => f.write_str("visible-string"),
            Tag::GeneralString => f.write_str("general-string"),
            Tag::UniversalString => f.write_str("universal-string"),
            Tag::CharacterString => f.write_str("character-string"),
            Tag::BmpString => f.write_str("bmp-string"),
            Tag::Raw(number) => write!(f, "tag({number})"),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let form = if self.is_constructed {
            "constructed"
        } else {
            "primitive"
        };
        write!(f, "[{} {} {}]", self.class, form, self.tag)
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Boolean(value) => write!(f, "boolean({value})"),
            Content::Integer(Integer::Sane(value)) => write!(f, "integer({value})"),
            Content::Integer(Integer::Insane(bytes)) => {
                write!(f, "integer(")?;
                write_hex(f, bytes)?;
                f.write_str(")")
            }
            Content::String(value) => write!(f, "string({value:?})"),
            Content::Data(bytes) => {
                f.write_str("data(")?;
                write_hex(f, bytes)?;
                f.write_str(")")
            }
            Content::Sequence(items) => {
                f.write_str("{")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("}")
            }
            Content::ObjectIdentifier(oid) => write!(f, "oid({oid})"),
        }
    }
}

impl fmt::Display for Tlv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.identifier, self.content)
    }
}

fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    const LIMIT: usize = 16;
    for byte in bytes.iter().take(LIMIT) {
        write!(f, "{byte:02x}")?;
    }
    if bytes.len() > LIMIT {
        write!(f, "..{} bytes", bytes.len())?;
    }
    Ok(())
}
