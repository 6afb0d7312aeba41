//! Recursive TLV decoder.

use crate::error::Asn1Error;
use crate::length::Length;
use crate::oid::ObjectIdentifier;
use crate::reader::Reader;
use crate::{Class, Content, Identifier, Integer, Tag, Tlv};

/// Hard cap on constructed-value nesting. Hostile input could
/// otherwise exhaust the call stack.
const MAX_DEPTH: usize = 32;

impl Tlv {
    /// Decode exactly one TLV element from `data`.
    pub fn from_der(data: &[u8]) -> Result<Self, Asn1Error> {
        let mut reader = Reader::new(data);
        let tlv = Self::decode(&mut reader)?;
        if !reader.is_empty() {
            return Err(Asn1Error::TrailingData {
                offset: reader.offset(),
            });
        }
        Ok(tlv)
    }

    /// Decode the next TLV element from the reader.
    pub fn decode(reader: &mut Reader) -> Result<Self, Asn1Error> {
        decode_at_depth(reader, 0)
    }
}

fn decode_at_depth(reader: &mut Reader, depth: usize) -> Result<Tlv, Asn1Error> {
    if depth > MAX_DEPTH {
        return Err(Asn1Error::NestingTooDeep {
            offset: reader.offset(),
        });
    }

    let identifier = Identifier::decode(reader)?;

    let content = if identifier.is_constructed {
        let length = Length::decode(reader)?;
        let mut body = reader.sub_reader(length.0)?;
        let mut children = Vec::new();
        while !body.is_empty() {
            children.push(decode_at_depth(&mut body, depth + 1)?);
        }
        Content::Sequence(children)
    } else if identifier.class == Class::Universal {
        match identifier.tag {
            Tag::Boolean => decode_boolean(reader)?,
            Tag::Integer | Tag::Enumerated => Content::Integer(decode_integer(reader)?),
            Tag::PrintableString | Tag::Utf8String => decode_string(reader)?,
            Tag::ObjectIdentifier => {
                let bytes = decode_data(reader)?;
                Content::ObjectIdentifier(ObjectIdentifier::classify(&bytes))
            }
            _ => Content::Data(decode_data(reader)?),
        }
    } else {
        // The universal interpretation of a context-specific,
        // application, or private tag number depends on the enclosing
        // type; keep the raw bytes for the caller to reinterpret.
        Content::Data(decode_data(reader)?)
    };

    Ok(Tlv {
        identifier,
        content,
    })
}

fn decode_boolean(reader: &mut Reader) -> Result<Content, Asn1Error> {
    let offset = reader.offset();
    let length = Length::decode(reader)?;
    if length.0 != 1 {
        return Err(Asn1Error::InvalidBoolean { offset });
    }
    Ok(Content::Boolean(reader.read_u8()? != 0))
}

fn decode_integer(reader: &mut Reader) -> Result<Integer, Asn1Error> {
    let length = Length::decode(reader)?;
    let bytes = reader.read(length.0)?;
    match bytes.len() {
        1 | 2 | 3 | 4 | 8 => {
            // Big-endian two's complement of the exact content width.
            let mut value: i64 = if bytes[0] & 0x80 != 0 { -1 } else { 0 };
            for &byte in bytes {
                value = value << 8 | i64::from(byte);
            }
            Ok(Integer::Sane(value))
        }
        _ => Ok(Integer::Insane(bytes.to_vec())),
    }
}

fn decode_string(reader: &mut Reader) -> Result<Content, Asn1Error> {
    let offset = reader.offset();
    let length = Length::decode(reader)?;
    let bytes = reader.read(length.0)?;
    let text = String::from_utf8(bytes.to_vec())
        .map_err(|_| Asn1Error::InvalidString { offset })?;
    Ok(Content::String(text))
}

fn decode_data(reader: &mut Reader) -> Result<Vec<u8>, Asn1Error> {
    let length = Length::decode(reader)?;
    Ok(reader.read(length.0)?.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_boolean() {
        let truthy = Tlv::from_der(&[0x01, 0x01, 0xff]).unwrap();
        let falsy = Tlv::from_der(&[0x01, 0x01, 0x00]).unwrap();
        assert_eq!(truthy.content, Content::Boolean(true));
        assert_eq!(falsy.content, Content::Boolean(false));
        assert_eq!(truthy.identifier.tag, Tag::Boolean);
        // any nonzero octet is true, not just 0xFF
        let nonzero = Tlv::from_der(&[0x01, 0x01, 0x01]).unwrap();
        assert_eq!(nonzero.content, Content::Boolean(true));
    }

    #[test]
    fn test_boolean_wrong_length() {
        assert_eq!(
            Tlv::from_der(&[0x01, 0x02, 0x00, 0x00]),
            Err(Asn1Error::InvalidBoolean { offset: 1 })
        );
    }

    #[test]
    fn test_enumerated_zero() {
        let tlv = Tlv::from_der(&[0x0a, 0x01, 0x00]).unwrap();
        assert_eq!(tlv.identifier.tag, Tag::Enumerated);
        assert_eq!(tlv.content, Content::Integer(Integer::Sane(0)));
    }

    #[test]
    fn test_integer_widths_sign_extend() {
        let one = Tlv::from_der(&[0x02, 0x01, 0x2a]).unwrap();
        assert_eq!(one.integer_value(), Some(42));

        let negative = Tlv::from_der(&[0x02, 0x01, 0x80]).unwrap();
        assert_eq!(negative.integer_value(), Some(-128));

        let two = Tlv::from_der(&[0x02, 0x02, 0x00, 0xff]).unwrap();
        assert_eq!(two.integer_value(), Some(255));

        let three = Tlv::from_der(&[0x02, 0x03, 0x01, 0x00, 0x01]).unwrap();
        assert_eq!(three.integer_value(), Some(65537));

        let four = Tlv::from_der(&[0x02, 0x04, 0x7f, 0xff, 0xff, 0xff]).unwrap();
        assert_eq!(four.integer_value(), Some(i64::from(i32::MAX)));

        let eight =
            Tlv::from_der(&hex!("02 08 7fffffffffffffff")).unwrap();
        assert_eq!(eight.integer_value(), Some(i64::MAX));
    }

    #[test]
    fn test_integer_odd_width_is_insane() {
        let serial = hex!("02 10 00112233445566778899aabbccddeeff");
        let tlv = Tlv::from_der(&serial).unwrap();
        assert_eq!(
            tlv.insane_integer_value(),
            Some(&serial[2..])
        );
    }

    #[test]
    fn test_printable_string() {
        let tlv = Tlv::from_der(&[0x13, 0x02, b'R', b'U']).unwrap();
        assert_eq!(tlv.identifier.tag, Tag::PrintableString);
        assert_eq!(tlv.string_value(), Some("RU"));
    }

    #[test]
    fn test_utf8_string() {
        let mut der = vec![0x0c, 0x19];
        der.extend_from_slice(b"Certum Validation Service");
        let tlv = Tlv::from_der(&der).unwrap();
        assert_eq!(tlv.string_value(), Some("Certum Validation Service"));
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        assert_eq!(
            Tlv::from_der(&[0x0c, 0x02, 0xff, 0xfe]),
            Err(Asn1Error::InvalidString { offset: 1 })
        );
    }

    #[test]
    fn test_utc_time_decodes_as_data() {
        let der = hex!("17 0d 313630353133313231393135 5a");
        let tlv = Tlv::from_der(&der).unwrap();
        assert_eq!(tlv.identifier.tag, Tag::UtcTime);
        assert_eq!(tlv.data_value(), Some(&der[2..]));
    }

    #[test]
    fn test_object_identifier() {
        let der = hex!("06 09 2a 86 48 86 f7 0d 01 01 0b");
        let tlv = Tlv::from_der(&der).unwrap();
        assert_eq!(
            tlv.object_identifier_value(),
            Some(&ObjectIdentifier::Sha256WithRsaEncryption)
        );
    }

    #[test]
    fn test_sequence_of_enumerated() {
        let der = hex!("30 06 0a 01 00 0a 01 00");
        let tlv = Tlv::from_der(&der).unwrap();
        assert!(tlv.identifier.is_constructed);
        assert_eq!(tlv.identifier.class, Class::Universal);
        assert_eq!(tlv.identifier.tag, Tag::Sequence);
        let children = tlv.sequence_value().unwrap();
        assert_eq!(children.len(), 2);
        for child in children {
            assert_eq!(child.identifier.tag, Tag::Enumerated);
            assert_eq!(child.content, Content::Integer(Integer::Sane(0)));
        }
    }

    #[test]
    fn test_context_specific_primitive_keeps_raw_bytes() {
        // [2] IMPLICIT IA5String "example.com" as seen in SubjectAltName
        let mut der = vec![0x82, 0x0b];
        der.extend_from_slice(b"example.com");
        let tlv = Tlv::from_der(&der).unwrap();
        assert_eq!(tlv.identifier.class, Class::ContextSpecific);
        assert_eq!(tlv.identifier.tag.number(), 2);
        assert_eq!(tlv.data_value(), Some(&b"example.com"[..]));
    }

    #[test]
    fn test_constructed_length_mismatch() {
        // sequence claims 4 content bytes but the inner boolean only
        // spans 3, leaving a truncated element
        assert!(Tlv::from_der(&[0x30, 0x04, 0x01, 0x01, 0xff, 0x01]).is_err());
    }

    #[test]
    fn test_trailing_data_rejected() {
        assert_eq!(
            Tlv::from_der(&[0x05, 0x00, 0x00]),
            Err(Asn1Error::TrailingData { offset: 2 })
        );
    }

    #[test]
    fn test_nesting_limit() {
        // 40 nested sequences, each wrapping the next
        let mut der = vec![0x05, 0x00];
        for _ in 0..40 {
            let mut outer = vec![0x30, der.len() as u8];
            outer.extend_from_slice(&der);
            der = outer;
        }
        assert!(matches!(
            Tlv::from_der(&der),
            Err(Asn1Error::NestingTooDeep { .. })
        ));
    }

    #[test]
    fn test_indefinite_length_rejected() {
        assert_eq!(
            Tlv::from_der(&[0x30, 0x80, 0x01, 0x01, 0xff, 0x00, 0x00]),
            Err(Asn1Error::InvalidLength { offset: 1 })
        );
    }
}
