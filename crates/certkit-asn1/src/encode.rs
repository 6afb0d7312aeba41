//! TLV encoder.

use crate::error::Asn1Error;
use crate::length::Length;
use crate::writer::Writer;
use crate::{Class, Content, Identifier, Tag, Tlv};

impl Tlv {
    /// Encode this element to canonical DER bytes.
    pub fn to_der(&self) -> Result<Vec<u8>, Asn1Error> {
        let mut writer = Writer::new();
        self.encode(&mut writer)?;
        Ok(writer.into_bytes())
    }

    /// Encode this element into `writer`.
    ///
    /// The only structural validation is the content/identifier
    /// cross-check: a content variant paired with a tag it cannot
    /// represent fails with `InvalidIdentifier` rather than being
    /// silently reinterpreted.
    pub fn encode(&self, writer: &mut Writer) -> Result<(), Asn1Error> {
        self.identifier.encode(writer)?;

        match &self.content {
            Content::Sequence(children) if self.identifier.is_constructed => {
                writer.write_with_length(|w| {
                    for child in children {
                        child.encode(w)?;
                    }
                    Ok(())
                })
            }
            Content::Boolean(value)
                if is_universal_primitive(&self.identifier, Tag::Boolean) =>
            {
                Length(1).encode(writer)?;
                writer.write_u8(if *value { 0xff } else { 0x00 });
                Ok(())
            }
            Content::Integer(value)
                if is_universal_primitive(&self.identifier, Tag::Integer)
                    || is_universal_primitive(&self.identifier, Tag::Enumerated) =>
            {
                write_length_prefixed(writer, &value.to_bytes())
            }
            Content::String(value)
                if is_universal_primitive(&self.identifier, Tag::PrintableString)
                    || is_universal_primitive(&self.identifier, Tag::Utf8String) =>
            {
                write_length_prefixed(writer, value.as_bytes())
            }
            Content::ObjectIdentifier(oid)
                if is_universal_primitive(&self.identifier, Tag::ObjectIdentifier) =>
            {
                write_length_prefixed(writer, &oid.to_bytes())
            }
            Content::Data(bytes) if data_compatible(&self.identifier) => {
                write_length_prefixed(writer, bytes)
            }
            _ => Err(Asn1Error::InvalidIdentifier {
                offset: writer.len(),
            }),
        }
    }
}

fn is_universal_primitive(identifier: &Identifier, tag: Tag) -> bool {
    !identifier.is_constructed && identifier.class == Class::Universal && identifier.tag == tag
}

/// Raw data pairs with any primitive identifier the decoder would not
/// have interpreted itself.
fn data_compatible(identifier: &Identifier) -> bool {
    if identifier.is_constructed {
        return false;
    }
    if identifier.class != Class::Universal {
        return true;
    }
    !matches!(
        identifier.tag,
        Tag::Boolean
            | Tag::Integer
            | Tag::Enumerated
            | Tag::PrintableString
            | Tag::Utf8String
            | Tag::ObjectIdentifier
    )
}

fn write_length_prefixed(writer: &mut Writer, bytes: &[u8]) -> Result<(), Asn1Error> {
    Length(bytes.len()).encode(writer)?;
    writer.write_bytes(bytes);
    Ok(())
}
