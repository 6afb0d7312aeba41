//! Identifier octet codec.

use crate::error::Asn1Error;
use crate::reader::Reader;
use crate::writer::Writer;
use crate::{Class, Identifier, Tag};

impl Identifier {
    /// Decode an identifier, including the multi-octet
    /// high-tag-number form signalled by low bits 0x1F.
    pub fn decode(reader: &mut Reader) -> Result<Self, Asn1Error> {
        let offset = reader.offset();
        let first = reader.read_u8()?;

        let class = match first >> 6 {
            0b00 => Class::Universal,
            0b01 => Class::Application,
            0b10 => Class::ContextSpecific,
            _ => Class::Private,
        };
        let is_constructed = first & 0x20 != 0;

        let low_bits = u32::from(first & 0x1f);
        let number = if low_bits < 0x1f {
            low_bits
        } else {
            // Base-128 continuation: accumulate low 7 bits per octet,
            // terminating on the first octet with a clear high bit.
            let mut number: u32 = 0;
            loop {
                let byte = reader.read_u8()?;
                if number > u32::MAX >> 7 {
                    return Err(Asn1Error::InvalidIdentifier { offset });
                }
                number = number << 7 | u32::from(byte & 0x7f);
                if byte & 0x80 == 0 {
                    break;
                }
            }
            number
        };

        Ok(Identifier {
            is_constructed,
            class,
            tag: Tag::from_number(number),
        })
    }

    /// Encode the identifier as a single octet. Tag numbers above 30
    /// fail; the certificate grammar never produces them.
    pub fn encode(&self, writer: &mut Writer) -> Result<(), Asn1Error> {
        let number = self.tag.number();
        if number > 0x1e {
            return Err(Asn1Error::InvalidIdentifier {
                offset: writer.len(),
            });
        }
        let class_bits = match self.class {
            Class::Universal => 0x00,
            Class::Application => 0x40,
            Class::ContextSpecific => 0x80,
            Class::Private => 0xc0,
        };
        let constructed_bit = if self.is_constructed { 0x20 } else { 0x00 };
        writer.write_u8(class_bits | constructed_bit | number as u8);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(bytes: &[u8]) -> Result<Identifier, Asn1Error> {
        Identifier::decode(&mut Reader::new(bytes))
    }

    #[test]
    fn test_universal_sequence() {
        let identifier = decode(&[0x30]).unwrap();
        assert!(identifier.is_constructed);
        assert_eq!(identifier.class, Class::Universal);
        assert_eq!(identifier.tag, Tag::Sequence);
    }

    #[test]
    fn test_context_specific_zero() {
        let identifier = decode(&[0xa0]).unwrap();
        assert!(identifier.is_constructed);
        assert_eq!(identifier.class, Class::ContextSpecific);
        assert_eq!(identifier.tag, Tag::EndOfContent);
        assert_eq!(identifier.tag.number(), 0);
    }

    #[test]
    fn test_primitive_integer() {
        let identifier = decode(&[0x02]).unwrap();
        assert!(!identifier.is_constructed);
        assert_eq!(identifier.class, Class::Universal);
        assert_eq!(identifier.tag, Tag::Integer);
    }

    #[test]
    fn test_private_class() {
        let identifier = decode(&[0xc1]).unwrap();
        assert_eq!(identifier.class, Class::Private);
        assert_eq!(identifier.tag, Tag::Boolean);
    }

    #[test]
    fn test_high_tag_number_form() {
        // 0x1F marker, then 0x81 0x23 = (1 << 7) | 0x23 = 163
        let identifier = decode(&[0x5f, 0x81, 0x23]).unwrap();
        assert_eq!(identifier.class, Class::Application);
        assert_eq!(identifier.tag, Tag::Raw(163));
    }

    #[test]
    fn test_high_tag_number_truncated() {
        assert!(decode(&[0x5f, 0x81]).is_err());
    }

    #[test]
    fn test_high_tag_number_overflow() {
        assert_eq!(
            decode(&[0x5f, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f]),
            Err(Asn1Error::InvalidIdentifier { offset: 0 })
        );
    }

    #[test]
    fn test_encode_single_octet() {
        let identifier = Identifier {
            is_constructed: true,
            class: Class::ContextSpecific,
            tag: Tag::from_number(3),
        };
        let mut writer = Writer::new();
        identifier.encode(&mut writer).unwrap();
        assert_eq!(writer.into_bytes(), vec![0xa3]);
    }

    #[test]
    fn test_encode_roundtrip() {
        let identifier = Identifier {
            is_constructed: false,
            class: Class::Universal,
            tag: Tag::Utf8String,
        };
        let mut writer = Writer::new();
        identifier.encode(&mut writer).unwrap();
        let bytes = writer.into_bytes();
        assert_eq!(decode(&bytes).unwrap(), identifier);
    }

    #[test]
    fn test_encode_rejects_multi_octet_tags() {
        let identifier = Identifier {
            is_constructed: false,
            class: Class::Universal,
            tag: Tag::Raw(31),
        };
        let mut writer = Writer::new();
        assert!(identifier.encode(&mut writer).is_err());
    }
}
