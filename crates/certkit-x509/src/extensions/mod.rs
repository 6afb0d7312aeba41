//! Certificate extensions and the per-OID dispatch.

mod authority_info_access;
mod basic_constraints;
mod certificate_policies;
mod crl_distribution_points;
mod ext_key_usage;
mod key_identifier;
mod key_usage;
mod netscape;

pub use authority_info_access::{AccessDescription, AuthorityInfoAccess};
pub use basic_constraints::BasicConstraints;
pub use certificate_policies::{
    CertificatePolicies, DisplayText, NoticeReference, PolicyInformation, PolicyQualifierInfo,
    UserNotice,
};
pub use crl_distribution_points::{
    CrlDistributionPoints, DistributionPoint, DistributionPointName, ReasonFlags,
};
pub use ext_key_usage::ExtendedKeyUsage;
pub use key_identifier::{AuthorityKeyIdentifier, KeyIdentifier, SubjectKeyIdentifier};
pub use key_usage::KeyUsage;
pub use netscape::{CertificateType, NetscapeExtension};

use certkit_asn1::oid::{self, ObjectIdentifier};
use certkit_asn1::Tlv;
use tracing::trace;

use crate::error::X509Error;
use crate::general_name::{decode_general_names, GeneralNames};

/// Extensions ::= SEQUENCE SIZE (1..MAX) OF Extension, carried inside
/// the `[3]` EXPLICIT wrapper of the TBSCertificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extensions {
    pub items: Vec<Extension>,
}

/// Extension ::= SEQUENCE {
///   extnID     OBJECT IDENTIFIER,
///   critical   BOOLEAN DEFAULT FALSE,
///   extnValue  OCTET STRING }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    pub id: ObjectIdentifier,
    pub is_critical: bool,
    pub value: ExtensionValue,
}

/// The closed set of extensions this decoder understands. An OID
/// outside this set is a hard `UnimplementedExtension` error, never a
/// silent drop: an unrecognized critical extension must reach the
/// caller to decide trust policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionValue {
    SubjectKeyIdentifier(SubjectKeyIdentifier),
    KeyUsage(KeyUsage),
    SubjectAltName(GeneralNames),
    ExtKeyUsage(ExtendedKeyUsage),
    BasicConstraints(BasicConstraints),
    CrlDistributionPoints(CrlDistributionPoints),
    AuthorityKeyIdentifier(AuthorityKeyIdentifier),
    CertificatePolicies(CertificatePolicies),
    AuthorityInfoAccess(AuthorityInfoAccess),
    Netscape(NetscapeExtension),
}

impl Extensions {
    /// Decode from the `[3]` context node, whose single child is the
    /// extension list.
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        let wrapper = tlv
            .sequence_value()
            .ok_or_else(|| X509Error::InvalidExtensions(tlv.clone()))?;
        let container = wrapper
            .first()
            .ok_or_else(|| X509Error::InvalidExtensions(tlv.clone()))?;
        let sequence = container
            .sequence_value()
            .ok_or_else(|| X509Error::InvalidExtensions(tlv.clone()))?;
        let items = sequence
            .iter()
            .map(Extension::from_tlv)
            .collect::<Result<_, _>>()?;
        Ok(Self { items })
    }
}

impl Extension {
    pub fn from_tlv(tlv: &Tlv) -> Result<Self, X509Error> {
        let sequence = tlv
            .sequence_value()
            .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?;
        if !(2..=3).contains(&sequence.len()) {
            return Err(X509Error::InvalidExtension(tlv.clone()));
        }

        let id = sequence[0]
            .object_identifier_value()
            .cloned()
            .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?;

        // critical BOOLEAN DEFAULT FALSE
        let is_critical = if sequence.len() == 3 {
            sequence[1]
                .boolean_value()
                .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?
        } else {
            false
        };

        // extnValue OCTET STRING contains the DER encoding of the
        // extension-specific value; re-decode it as a nested element.
        let payload_bytes = sequence[sequence.len() - 1]
            .data_value()
            .ok_or_else(|| X509Error::InvalidExtension(tlv.clone()))?;
        let payload = Tlv::from_der(payload_bytes)?;

        trace!(oid = %id, critical = is_critical, "decoding extension");

        let value = match &id {
            ObjectIdentifier::CertificateExtension(Some(extension)) => match extension {
                oid::CertificateExtension::SubjectKeyIdentifier => {
                    ExtensionValue::SubjectKeyIdentifier(KeyIdentifier::from_tlv(&payload)?)
                }
                oid::CertificateExtension::KeyUsage => {
                    ExtensionValue::KeyUsage(KeyUsage::from_tlv(&payload)?)
                }
                oid::CertificateExtension::SubjectAltName => {
                    ExtensionValue::SubjectAltName(decode_general_names(&payload)?)
                }
                oid::CertificateExtension::ExtKeyUsage => {
                    ExtensionValue::ExtKeyUsage(ExtendedKeyUsage::from_tlv(&payload)?)
                }
                oid::CertificateExtension::BasicConstraints => {
                    ExtensionValue::BasicConstraints(BasicConstraints::from_tlv(&payload)?)
                }
                oid::CertificateExtension::CrlDistributionPoints => {
                    ExtensionValue::CrlDistributionPoints(CrlDistributionPoints::from_tlv(
                        &payload,
                    )?)
                }
                oid::CertificateExtension::AuthorityKeyIdentifier => {
                    ExtensionValue::AuthorityKeyIdentifier(AuthorityKeyIdentifier::from_tlv(
                        &payload,
                    )?)
                }
                oid::CertificateExtension::CertificatePolicies(_) => {
                    ExtensionValue::CertificatePolicies(
                        certificate_policies::decode_certificate_policies(&payload)?,
                    )
                }
            },
            ObjectIdentifier::Pkix(Some(oid::Pkix::Extension(
                oid::PkixExtension::AuthorityInfoAccessSyntax,
            ))) => ExtensionValue::AuthorityInfoAccess(
                authority_info_access::decode_authority_info_access(&payload)?,
            ),
            ObjectIdentifier::Netscape(Some(oid::Netscape::CertificateExtension(
                oid::NetscapeCertificateExtension::CertificateType,
            ))) => ExtensionValue::Netscape(NetscapeExtension::CertificateType(
                CertificateType::from_tlv(&payload)?,
            )),
            other => return Err(X509Error::UnimplementedExtension(other.to_dot_string())),
        };

        Ok(Self {
            id,
            is_critical,
            value,
        })
    }
}
