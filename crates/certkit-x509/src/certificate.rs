//! Top-level certificate decoding.

use certkit_asn1::{Asn1Error, Class, Content, Identifier, Length, Reader, Tag, Tlv};
use tracing::debug;

use crate::algorithm::AlgorithmIdentifier;
use crate::bit_string::BitString;
use crate::error::X509Error;
use crate::extensions::{BasicConstraints, ExtensionValue, KeyUsage};
use crate::general_name::GeneralNames;
use crate::tbs::TbsCertificate;

/// Certificate ::= SEQUENCE {
///   tbsCertificate      TBSCertificate,
///   signatureAlgorithm  AlgorithmIdentifier,
///   signatureValue      BIT STRING }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    pub tbs_certificate: TbsCertificate,
    pub signature_algorithm: AlgorithmIdentifier,
    pub signature_value: BitString,
    tbs_raw: Vec<u8>,
}

impl Certificate {
    /// Decode one DER-encoded certificate.
    ///
    /// The raw TBSCertificate byte span is captured before structural
    /// decoding so signature verification can run over the exact
    /// original bytes.
    pub fn from_der(data: &[u8]) -> Result<Self, X509Error> {
        let mut reader = Reader::new(data);

        let identifier = Identifier::decode(&mut reader)?;
        let length = Length::decode(&mut reader)?;
        let mut body = reader.sub_reader(length.0)?;
        if !reader.is_empty() {
            return Err(Asn1Error::TrailingData {
                offset: reader.offset(),
            }
            .into());
        }
        if !identifier.is_constructed
            || identifier.class != Class::Universal
            || identifier.tag != Tag::Sequence
        {
            return Err(X509Error::InvalidX509(Tlv {
                identifier,
                content: Content::Data(body.remaining().to_vec()),
            }));
        }

        let tbs_start = body.offset();
        let tbs_tlv = Tlv::decode(&mut body)?;
        let tbs_raw = data[tbs_start..body.offset()].to_vec();

        let algorithm_tlv = Tlv::decode(&mut body)?;
        let signature_tlv = Tlv::decode(&mut body)?;
        if !body.is_empty() {
            return Err(Asn1Error::TrailingData {
                offset: body.offset(),
            }
            .into());
        }

        let tbs_certificate = TbsCertificate::from_tlv(&tbs_tlv)?;
        let signature_algorithm = AlgorithmIdentifier::from_tlv(&algorithm_tlv)?;
        let signature_value = BitString::from_tlv(&signature_tlv)
            .map_err(|_| X509Error::InvalidSignature(signature_tlv.clone()))?;

        debug!(
            extensions = tbs_certificate.extensions.items.len(),
            "decoded certificate"
        );

        Ok(Self {
            tbs_certificate,
            signature_algorithm,
            signature_value,
            tbs_raw,
        })
    }

    /// The exact DER bytes of the TBSCertificate, as they appeared in
    /// the input. Signature verification must hash these.
    pub fn tbs_raw(&self) -> &[u8] {
        &self.tbs_raw
    }

    /// The BasicConstraints extension, if present.
    pub fn basic_constraints(&self) -> Option<&BasicConstraints> {
        self.tbs_certificate.extensions.items.iter().find_map(|e| match &e.value {
            ExtensionValue::BasicConstraints(value) => Some(value),
            _ => None,
        })
    }

    /// The KeyUsage extension, if present.
    pub fn key_usage(&self) -> Option<KeyUsage> {
        self.tbs_certificate.extensions.items.iter().find_map(|e| match &e.value {
            ExtensionValue::KeyUsage(value) => Some(*value),
            _ => None,
        })
    }

    /// The SubjectAltName entries, if present.
    pub fn subject_alt_name(&self) -> Option<&GeneralNames> {
        self.tbs_certificate.extensions.items.iter().find_map(|e| match &e.value {
            ExtensionValue::SubjectAltName(value) => Some(value),
            _ => None,
        })
    }

    /// True if BasicConstraints is present with `cA` set.
    pub fn is_ca(&self) -> bool {
        self.basic_constraints().is_some_and(|bc| bc.is_ca)
    }
}
