//! Byte sink used by the encoder.

use crate::error::Asn1Error;
use crate::length::Length;

/// A growable byte sink with a length-prefixed sub-stream helper.
#[derive(Debug, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn write_u8(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Run `body` against a scratch writer, then emit the DER length of
    /// what it produced followed by the bytes themselves.
    pub fn write_with_length(
        &mut self,
        body: impl FnOnce(&mut Writer) -> Result<(), Asn1Error>,
    ) -> Result<(), Asn1Error> {
        let mut scratch = Writer::new();
        body(&mut scratch)?;
        Length(scratch.len()).encode(self)?;
        self.write_bytes(&scratch.buf);
        Ok(())
    }

    /// Consume the writer and return the bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
