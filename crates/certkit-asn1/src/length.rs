//! DER length octets.

use crate::error::Asn1Error;
use crate::reader::Reader;
use crate::writer::Writer;

/// A definite DER length.
///
/// The long form supports 1, 2, or 4 length octets on both sides of
/// the codec; the 3-octet form and the indefinite form (0x80) are
/// rejected. Lengths above `u32::MAX` do not encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Length(pub usize);

impl Length {
    pub fn decode(reader: &mut Reader) -> Result<Self, Asn1Error> {
        let offset = reader.offset();
        let first = reader.read_u8()?;
        if first & 0x80 == 0 {
            return Ok(Length(first as usize));
        }
        let count = match first & 0x7f {
            // 0x80 is the indefinite form; DER requires definite lengths
            1 => 1,
            2 => 2,
            4 => 4,
            _ => return Err(Asn1Error::InvalidLength { offset }),
        };
        let mut value: usize = 0;
        for &byte in reader.read(count)? {
            value = value << 8 | byte as usize;
        }
        Ok(Length(value))
    }

    pub fn encode(&self, writer: &mut Writer) -> Result<(), Asn1Error> {
        match self.0 {
            0..=0x7f => writer.write_u8(self.0 as u8),
            0x80..=0xff => {
                writer.write_u8(0x81);
                writer.write_u8(self.0 as u8);
            }
            0x100..=0xffff => {
                writer.write_u8(0x82);
                writer.write_u8((self.0 >> 8) as u8);
                writer.write_u8(self.0 as u8);
            }
            0x1_0000..=0xffff_ffff => {
                writer.write_u8(0x84);
                writer.write_u8((self.0 >> 24) as u8);
                writer.write_u8((self.0 >> 16) as u8);
                writer.write_u8((self.0 >> 8) as u8);
                writer.write_u8(self.0 as u8);
            }
            _ => {
                return Err(Asn1Error::InvalidLength {
                    offset: writer.len(),
                })
            }
        }
        Ok(())
    }
}
