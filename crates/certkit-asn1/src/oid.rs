//! Object identifier classification and codec.
//!
//! Known OIDs classify into a closed hierarchy mirroring the arcs the
//! certificate decoder cares about: X.520 directory attributes
//! (`id-at-*`), certificate extensions (`id-ce-*`), the PKIX arc
//! (`1.3.6.1.5.5.7.*`), and the Netscape certificate extension arc.
//! Everything else round-trips verbatim through `Other`.

use std::fmt;

/// A classified object identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectIdentifier {
    Sha256WithRsaEncryption,
    RsaEncryption,
    /// id-at-* directory attributes; `None` is the bare arc.
    Attribute(Option<Attribute>),
    /// id-ce-* certificate extensions; `None` is the bare arc.
    CertificateExtension(Option<CertificateExtension>),
    /// id-pkix-* arcs; `None` is the bare arc.
    Pkix(Option<Pkix>),
    /// Netscape arcs; `None` is the bare arc.
    Netscape(Option<Netscape>),
    /// Unrecognized OID, kept as raw DER value bytes.
    Other(Vec<u8>),
}

/// X.520 naming attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Name,
    Surname,
    GivenName,
    Initials,
    GenerationQualifier,
    CommonName,
    LocalityName,
    StateOrProvinceName,
    OrganizationName,
    OrganizationalUnitName,
    Title,
    DnQualifier,
    CountryName,
    SerialNumber,
    Pseudonym,
}

/// RFC 5280 certificate extension identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CertificateExtension {
    SubjectKeyIdentifier,
    KeyUsage,
    SubjectAltName,
    BasicConstraints,
    CrlDistributionPoints,
    CertificatePolicies(Option<CertificatePolicy>),
    AuthorityKeyIdentifier,
    ExtKeyUsage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CertificatePolicy {
    Any,
}

/// Arcs under id-pkix (1.3.6.1.5.5.7).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pkix {
    Extension(PkixExtension),
    PolicyQualifier(PolicyQualifier),
    KeyPurpose(KeyPurpose),
    AccessDescription(AccessDescription),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PkixExtension {
    AuthorityInfoAccessSyntax,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyQualifier {
    Cps,
    Unotice,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyPurpose {
    ServerAuth,
    ClientAuth,
    Other(Box<ObjectIdentifier>),
}

/// id-ad access methods (1.3.6.1.5.5.7.48).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessDescription {
    /// id-ad-ocsp itself, or one of its sub-arcs.
    Ocsp(Option<Ocsp>),
    CaIssuers,
    TimeStamping,
    CaRepository,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ocsp {
    BasicResponse,
    Nonce,
    CrlReference,
    Nocheck,
}

/// Netscape vendor arcs (2.16.840.1.113730).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Netscape {
    CertificateExtension(NetscapeCertificateExtension),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetscapeCertificateExtension {
    CertificateType,
}

// ---------------------------------------------------------------------------
// Raw DER value bytes for the well-known arcs
// ---------------------------------------------------------------------------

mod raw {
    // 1.2.840.113549.1.1.11
    pub const SHA256_WITH_RSA_ENCRYPTION: &[u8] =
        &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x0b];
    // 1.2.840.113549.1.1.1
    pub const RSA_ENCRYPTION: &[u8] = &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01];

    // id-at OBJECT IDENTIFIER ::= { joint-iso-ccitt(2) ds(5) 4 }
    pub mod attribute {
        pub const OBJECT_ID: &[u8] = &[0x55, 0x04];
        pub const NAME: &[u8] = &[0x55, 0x04, 0x29];
        pub const SURNAME: &[u8] = &[0x55, 0x04, 0x04];
        pub const GIVEN_NAME: &[u8] = &[0x55, 0x04, 0x2a];
        pub const INITIALS: &[u8] = &[0x55, 0x04, 0x2b];
        pub const GENERATION_QUALIFIER: &[u8] = &[0x55, 0x04, 0x2c];
        pub const COMMON_NAME: &[u8] = &[0x55, 0x04, 0x03];
        pub const LOCALITY_NAME: &[u8] = &[0x55, 0x04, 0x07];
        pub const STATE_OR_PROVINCE_NAME: &[u8] = &[0x55, 0x04, 0x08];
        pub const ORGANIZATION_NAME: &[u8] = &[0x55, 0x04, 0x0a];
        pub const ORGANIZATIONAL_UNIT_NAME: &[u8] = &[0x55, 0x04, 0x0b];
        pub const TITLE: &[u8] = &[0x55, 0x04, 0x0c];
        pub const DN_QUALIFIER: &[u8] = &[0x55, 0x04, 0x2e];
        pub const COUNTRY_NAME: &[u8] = &[0x55, 0x04, 0x06];
        pub const SERIAL_NUMBER: &[u8] = &[0x55, 0x04, 0x05];
        pub const PSEUDONYM: &[u8] = &[0x55, 0x04, 0x41];
    }

    // id-ce OBJECT IDENTIFIER ::= { joint-iso-ccitt(2) ds(5) 29 }
    pub mod certificate_extension {
        pub const OBJECT_ID: &[u8] = &[0x55, 0x1d];
        pub const SUBJECT_KEY_IDENTIFIER: &[u8] = &[0x55, 0x1d, 0x0e];
        pub const KEY_USAGE: &[u8] = &[0x55, 0x1d, 0x0f];
        pub const SUBJECT_ALT_NAME: &[u8] = &[0x55, 0x1d, 0x11];
        pub const BASIC_CONSTRAINTS: &[u8] = &[0x55, 0x1d, 0x13];
        pub const CRL_DISTRIBUTION_POINTS: &[u8] = &[0x55, 0x1d, 0x1f];
        pub const AUTHORITY_KEY_IDENTIFIER: &[u8] = &[0x55, 0x1d, 0x23];
        pub const EXT_KEY_USAGE: &[u8] = &[0x55, 0x1d, 0x25];

        pub mod certificate_policies {
            pub const OBJECT_ID: &[u8] = &[0x55, 0x1d, 0x20];
            pub const ANY: &[u8] = &[0x55, 0x1d, 0x20, 0x00];
        }
    }

    // id-pkix OBJECT IDENTIFIER ::= 1.3.6.1.5.5.7
    pub mod pkix {
        pub const OBJECT_ID: &[u8] = &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07];

        pub mod extension {
            // 1.3.6.1.5.5.7.1.1
            pub const AUTHORITY_INFO_ACCESS_SYNTAX: &[u8] =
                &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x01, 0x01];
        }

        pub mod policy_qualifier {
            // 1.3.6.1.5.5.7.2.*
            pub const CPS: &[u8] = &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x02, 0x01];
            pub const UNOTICE: &[u8] = &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x02, 0x02];
        }

        pub mod key_purpose {
            // 1.3.6.1.5.5.7.3.*
            pub const SERVER_AUTH: &[u8] = &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x03, 0x01];
            pub const CLIENT_AUTH: &[u8] = &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x03, 0x02];
        }

        pub mod access_description {
            // 1.3.6.1.5.5.7.48.*
            pub const CA_ISSUERS: &[u8] = &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x30, 0x02];
            pub const TIME_STAMPING: &[u8] = &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x30, 0x03];
            pub const CA_REPOSITORY: &[u8] = &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x30, 0x05];

            pub mod ocsp {
                // 1.3.6.1.5.5.7.48.1, also the id-ad-ocsp access method
                pub const OBJECT_ID: &[u8] = &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x30, 0x01];
                pub const BASIC_RESPONSE: &[u8] =
                    &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x30, 0x01, 0x01];
                pub const NONCE: &[u8] =
                    &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x30, 0x01, 0x02];
                pub const CRL_REFERENCE: &[u8] =
                    &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x30, 0x01, 0x03];
                pub const NOCHECK: &[u8] =
                    &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x30, 0x01, 0x05];
            }
        }
    }

    // 2.16.840.1.113730 (netscape)
    pub mod netscape {
        pub const OBJECT_ID: &[u8] = &[0x60, 0x86, 0x48, 0x01, 0x86, 0xf8, 0x42];

        pub mod certificate_extension {
            // 2.16.840.1.113730.1 (cert-ext)
            pub const OBJECT_ID: &[u8] = &[0x60, 0x86, 0x48, 0x01, 0x86, 0xf8, 0x42, 0x01];
            // 2.16.840.1.113730.1.1 (cert-type)
            pub const CERTIFICATE_TYPE: &[u8] =
                &[0x60, 0x86, 0x48, 0x01, 0x86, 0xf8, 0x42, 0x01, 0x01];
        }
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

impl ObjectIdentifier {
    /// Classify raw OID value bytes.
    ///
    /// Exact matches come first, then category prefixes. A recognized
    /// prefix with an unknown leaf falls back to `Other` so that
    /// `to_bytes` stays the exact inverse for arbitrary input.
    pub fn classify(bytes: &[u8]) -> Self {
        if bytes == raw::SHA256_WITH_RSA_ENCRYPTION {
            ObjectIdentifier::Sha256WithRsaEncryption
        } else if bytes == raw::RSA_ENCRYPTION {
            ObjectIdentifier::RsaEncryption
        } else if bytes.starts_with(raw::attribute::OBJECT_ID) {
            match Attribute::from_bytes(bytes) {
                Some(value) => ObjectIdentifier::Attribute(Some(value)),
                None => ObjectIdentifier::Other(bytes.to_vec()),
            }
        } else if bytes.starts_with(raw::certificate_extension::OBJECT_ID) {
            match CertificateExtension::from_bytes(bytes) {
                Some(value) => ObjectIdentifier::CertificateExtension(Some(value)),
                None => ObjectIdentifier::Other(bytes.to_vec()),
            }
        } else if bytes.starts_with(raw::pkix::OBJECT_ID) {
            match Pkix::from_bytes(bytes) {
                Some(value) => ObjectIdentifier::Pkix(Some(value)),
                None => ObjectIdentifier::Other(bytes.to_vec()),
            }
        } else if bytes.starts_with(raw::netscape::OBJECT_ID) {
            match Netscape::from_bytes(bytes) {
                Some(value) => ObjectIdentifier::Netscape(Some(value)),
                None => ObjectIdentifier::Other(bytes.to_vec()),
            }
        } else {
            ObjectIdentifier::Other(bytes.to_vec())
        }
    }

    /// The raw DER value bytes of this identifier.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            ObjectIdentifier::Sha256WithRsaEncryption => {
                raw::SHA256_WITH_RSA_ENCRYPTION.to_vec()
            }
            ObjectIdentifier::RsaEncryption => raw::RSA_ENCRYPTION.to_vec(),
            ObjectIdentifier::Attribute(None) => raw::attribute::OBJECT_ID.to_vec(),
            ObjectIdentifier::Attribute(Some(value)) => value.to_bytes(),
            ObjectIdentifier::CertificateExtension(None) => {
                raw::certificate_extension::OBJECT_ID.to_vec()
            }
            ObjectIdentifier::CertificateExtension(Some(value)) => value.to_bytes(),
            ObjectIdentifier::Pkix(None) => raw::pkix::OBJECT_ID.to_vec(),
            ObjectIdentifier::Pkix(Some(value)) => value.to_bytes(),
            ObjectIdentifier::Netscape(None) => raw::netscape::OBJECT_ID.to_vec(),
            ObjectIdentifier::Netscape(Some(value)) => value.to_bytes(),
            ObjectIdentifier::Other(bytes) => bytes.clone(),
        }
    }

    /// Dotted-decimal form, e.g. `1.2.840.113549.1.1.1`.
    ///
    /// The first octet packs the first two arcs as `40 * arc0 + arc1`;
    /// subsequent arcs are base-128 big-endian with a continuation bit.
    pub fn to_dot_string(&self) -> String {
        let bytes = self.to_bytes();
        let Some((&first, rest)) = bytes.split_first() else {
            return String::new();
        };
        let mut out = format!("{}.{}", first / 40, first % 40);
        let mut arc: u64 = 0;
        for &byte in rest {
            arc = arc << 7 | u64::from(byte & 0x7f);
            if byte & 0x80 == 0 {
                out.push('.');
                out.push_str(&arc.to_string());
                arc = 0;
            }
        }
        out
    }
}

impl fmt::Display for ObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dot_string())
    }
}

impl Attribute {
    fn from_bytes(bytes: &[u8]) -> Option<Self> {
        use raw::attribute as a;
        match bytes {
            _ if bytes == a::NAME => Some(Attribute::Name),
            _ if bytes == a::SURNAME => Some(Attribute::Surname),
            _ if bytes == a::GIVEN_NAME => Some(Attribute::GivenName),
            _ if bytes == a::INITIALS => Some(Attribute::Initials),
            _ if bytes == a::GENERATION_QUALIFIER => Some(Attribute::GenerationQualifier),
            _ if bytes == a::COMMON_NAME => Some(Attribute::CommonName),
            _ if bytes == a::LOCALITY_NAME => Some(Attribute::LocalityName),
            _ if bytes == a::STATE_OR_PROVINCE_NAME => Some(Attribute::StateOrProvinceName),
            _ if bytes == a::ORGANIZATION_NAME => Some(Attribute::OrganizationName),
            _ if bytes == a::ORGANIZATIONAL_UNIT_NAME => {
                Some(Attribute::OrganizationalUnitName)
            }
            _ if bytes == a::TITLE => Some(Attribute::Title),
            _ if bytes == a::DN_QUALIFIER => Some(Attribute::DnQualifier),
            _ if bytes == a::COUNTRY_NAME => Some(Attribute::CountryName),
            _ if bytes == a::SERIAL_NUMBER => Some(Attribute::SerialNumber),
            _ if bytes == a::PSEUDONYM => Some(Attribute::Pseudonym),
            _ => None,
        }
    }

    fn to_bytes(self) -> Vec<u8> {
        use raw::attribute as a;
        match self {
            Attribute::Name => a::NAME,
            Attribute::Surname => a::SURNAME,
            Attribute::GivenName => a::GIVEN_NAME,
            Attribute::Initials => a::INITIALS,
            Attribute::GenerationQualifier => a::GENERATION_QUALIFIER,
            Attribute::CommonName => a::COMMON_NAME,
            Attribute::LocalityName => a::LOCALITY_NAME,
            Attribute::StateOrProvinceName => a::STATE_OR_PROVINCE_NAME,
            Attribute::OrganizationName => a::ORGANIZATION_NAME,
            Attribute::OrganizationalUnitName => a::ORGANIZATIONAL_UNIT_NAME,
            Attribute::Title => a::TITLE,
            Attribute::DnQualifier => a::DN_QUALIFIER,
            Attribute::CountryName => a::COUNTRY_NAME,
            Attribute::SerialNumber => a::SERIAL_NUMBER,
            Attribute::Pseudonym => a::PSEUDONYM,
        }
        .to_vec()
    }
}

impl CertificateExtension {
    fn from_bytes(bytes: &[u8]) -> Option<Self> {
        use raw::certificate_extension as ce;
        match bytes {
            _ if bytes == ce::SUBJECT_KEY_IDENTIFIER => {
                Some(CertificateExtension::SubjectKeyIdentifier)
            }
            _ if bytes == ce::KEY_USAGE => Some(CertificateExtension::KeyUsage),
            _ if bytes == ce::SUBJECT_ALT_NAME => Some(CertificateExtension::SubjectAltName),
            _ if bytes == ce::BASIC_CONSTRAINTS => Some(CertificateExtension::BasicConstraints),
            _ if bytes == ce::CRL_DISTRIBUTION_POINTS => {
                Some(CertificateExtension::CrlDistributionPoints)
            }
            _ if bytes == ce::certificate_policies::OBJECT_ID => {
                Some(CertificateExtension::CertificatePolicies(None))
            }
            _ if bytes == ce::certificate_policies::ANY => Some(
                CertificateExtension::CertificatePolicies(Some(CertificatePolicy::Any)),
            ),
            _ if bytes == ce::AUTHORITY_KEY_IDENTIFIER => {
                Some(CertificateExtension::AuthorityKeyIdentifier)
            }
            _ if bytes == ce::EXT_KEY_USAGE => Some(CertificateExtension::ExtKeyUsage),
            _ => None,
        }
    }

    fn to_bytes(self) -> Vec<u8> {
        use raw::certificate_extension as ce;
        match self {
            CertificateExtension::SubjectKeyIdentifier => ce::SUBJECT_KEY_IDENTIFIER,
            CertificateExtension::KeyUsage => ce::KEY_USAGE,
            CertificateExtension::SubjectAltName => ce::SUBJECT_ALT_NAME,
            CertificateExtension::BasicConstraints => ce::BASIC_CONSTRAINTS,
            CertificateExtension::CrlDistributionPoints => ce::CRL_DISTRIBUTION_POINTS,
            CertificateExtension::CertificatePolicies(None) => {
                ce::certificate_policies::OBJECT_ID
            }
            CertificateExtension::CertificatePolicies(Some(CertificatePolicy::Any)) => {
                ce::certificate_policies::ANY
            }
            CertificateExtension::AuthorityKeyIdentifier => ce::AUTHORITY_KEY_IDENTIFIER,
            CertificateExtension::ExtKeyUsage => ce::EXT_KEY_USAGE,
        }
        .to_vec()
    }
}

impl Pkix {
    fn from_bytes(bytes: &[u8]) -> Option<Self> {
        use raw::pkix as p;
        match bytes {
            _ if bytes == p::extension::AUTHORITY_INFO_ACCESS_SYNTAX => {
                Some(Pkix::Extension(PkixExtension::AuthorityInfoAccessSyntax))
            }
            _ if bytes == p::policy_qualifier::CPS => {
                Some(Pkix::PolicyQualifier(PolicyQualifier::Cps))
            }
            _ if bytes == p::policy_qualifier::UNOTICE => {
                Some(Pkix::PolicyQualifier(PolicyQualifier::Unotice))
            }
            _ if bytes == p::key_purpose::SERVER_AUTH => {
                Some(Pkix::KeyPurpose(KeyPurpose::ServerAuth))
            }
            _ if bytes == p::key_purpose::CLIENT_AUTH => {
                Some(Pkix::KeyPurpose(KeyPurpose::ClientAuth))
            }
            _ if bytes == p::access_description::ocsp::OBJECT_ID => {
                Some(Pkix::AccessDescription(AccessDescription::Ocsp(None)))
            }
            _ if bytes == p::access_description::ocsp::BASIC_RESPONSE => Some(
                Pkix::AccessDescription(AccessDescription::Ocsp(Some(Ocsp::BasicResponse))),
            ),
            _ if bytes == p::access_description::ocsp::NONCE => Some(Pkix::AccessDescription(
                AccessDescription::Ocsp(Some(Ocsp::Nonce)),
            )),
            _ if bytes == p::access_description::ocsp::CRL_REFERENCE => Some(
                Pkix::AccessDescription(AccessDescription::Ocsp(Some(Ocsp::CrlReference))),
            ),
            _ if bytes == p::access_description::ocsp::NOCHECK => Some(
                Pkix::AccessDescription(AccessDescription::Ocsp(Some(Ocsp::Nocheck))),
            ),
            _ if bytes == p::access_description::CA_ISSUERS => {
                Some(Pkix::AccessDescription(AccessDescription::CaIssuers))
            }
            _ if bytes == p::access_description::TIME_STAMPING => {
                Some(Pkix::AccessDescription(AccessDescription::TimeStamping))
            }
            _ if bytes == p::access_description::CA_REPOSITORY => {
                Some(Pkix::AccessDescription(AccessDescription::CaRepository))
            }
            _ => None,
        }
    }

    fn to_bytes(&self) -> Vec<u8> {
        use raw::pkix as p;
        match self {
            Pkix::Extension(PkixExtension::AuthorityInfoAccessSyntax) => {
                p::extension::AUTHORITY_INFO_ACCESS_SYNTAX.to_vec()
            }
            Pkix::PolicyQualifier(PolicyQualifier::Cps) => p::policy_qualifier::CPS.to_vec(),
            Pkix::PolicyQualifier(PolicyQualifier::Unotice) => {
                p::policy_qualifier::UNOTICE.to_vec()
            }
            Pkix::KeyPurpose(KeyPurpose::ServerAuth) => p::key_purpose::SERVER_AUTH.to_vec(),
            Pkix::KeyPurpose(KeyPurpose::ClientAuth) => p::key_purpose::CLIENT_AUTH.to_vec(),
            Pkix::KeyPurpose(KeyPurpose::Other(oid)) => oid.to_bytes(),
            Pkix::AccessDescription(AccessDescription::Ocsp(None)) => {
                p::access_description::ocsp::OBJECT_ID.to_vec()
            }
            Pkix::AccessDescription(AccessDescription::Ocsp(Some(Ocsp::BasicResponse))) => {
                p::access_description::ocsp::BASIC_RESPONSE.to_vec()
            }
            Pkix::AccessDescription(AccessDescription::Ocsp(Some(Ocsp::Nonce))) => {
                p::access_description::ocsp::NONCE.to_vec()
            }
            Pkix::AccessDescription(AccessDescription::Ocsp(Some(Ocsp::CrlReference))) => {
                p::access_description::ocsp::CRL_REFERENCE.to_vec()
            }
            Pkix::AccessDescription(AccessDescription::Ocsp(Some(Ocsp::Nocheck))) => {
                p::access_description::ocsp::NOCHECK.to_vec()
            }
            Pkix::AccessDescription(AccessDescription::CaIssuers) => {
                p::access_description::CA_ISSUERS.to_vec()
            }
            Pkix::AccessDescription(AccessDescription::TimeStamping) => {
                p::access_description::TIME_STAMPING.to_vec()
            }
            Pkix::AccessDescription(AccessDescription::CaRepository) => {
                p::access_description::CA_REPOSITORY.to_vec()
            }
        }
    }
}

impl Netscape {
    fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes == raw::netscape::certificate_extension::CERTIFICATE_TYPE {
            Some(Netscape::CertificateExtension(
                NetscapeCertificateExtension::CertificateType,
            ))
        } else {
            None
        }
    }

    fn to_bytes(self) -> Vec<u8> {
        match self {
            Netscape::CertificateExtension(NetscapeCertificateExtension::CertificateType) => {
                raw::netscape::certificate_extension::CERTIFICATE_TYPE.to_vec()
            }
        }
    }
}
