//! Integration tests for certkit.
//! Builds complete certificates with the encoder and decodes them back.

#[cfg(test)]
mod tests {
    use certkit_asn1::oid::{Attribute, CertificateExtension};
    use certkit_asn1::{ObjectIdentifier, Tlv};
    use certkit_x509::extensions::{ExtensionValue, KeyUsage};
    use certkit_x509::general_name::GeneralName;
    use certkit_x509::{Algorithm, Certificate, Name, PublicKey, Version, X509Error};

    // -------------------------------------------------------
    // Certificate assembly
    // -------------------------------------------------------

    const MODULUS: &[u8] = &[
        0x00, 0xc1, 0x5a, 0x9b, 0x3c, 0x44, 0xd5, 0xe6, 0x07, 0x18, 0x29, 0x3a, 0x4b,
    ];

    fn single_cn_name(common_name: &str) -> Tlv {
        Tlv::sequence(vec![Tlv::set(vec![Tlv::sequence(vec![
            Tlv::object_identifier(ObjectIdentifier::Attribute(Some(Attribute::CommonName))),
            Tlv::printable_string(common_name),
        ])])])
    }

    fn algorithm_identifier(value: ObjectIdentifier) -> Tlv {
        Tlv::sequence(vec![Tlv::object_identifier(value), Tlv::null()])
    }

    fn subject_public_key_info() -> Tlv {
        let rsa_key = Tlv::sequence(vec![Tlv::big_integer(MODULUS), Tlv::integer(65537)])
            .to_der()
            .unwrap();
        Tlv::sequence(vec![
            algorithm_identifier(ObjectIdentifier::RsaEncryption),
            Tlv::bit_string(0, &rsa_key),
        ])
    }

    fn extension(id: ObjectIdentifier, critical: Option<bool>, payload: &[u8]) -> Tlv {
        let mut items = vec![Tlv::object_identifier(id)];
        if let Some(value) = critical {
            items.push(Tlv::boolean(value));
        }
        items.push(Tlv::octet_string(payload));
        Tlv::sequence(items)
    }

    fn san_extension() -> Tlv {
        let san = Tlv::sequence(vec![Tlv::context_primitive(2, b"example.com")])
            .to_der()
            .unwrap();
        extension(
            ObjectIdentifier::CertificateExtension(Some(CertificateExtension::SubjectAltName)),
            None,
            &san,
        )
    }

    fn certificate_der(extensions: Vec<Tlv>) -> Vec<u8> {
        let tbs = Tlv::sequence(vec![
            Tlv::context(0, vec![Tlv::integer(2)]),
            Tlv::integer(0x1001),
            algorithm_identifier(ObjectIdentifier::Sha256WithRsaEncryption),
            single_cn_name("Example CA"),
            Tlv::sequence(vec![
                Tlv::utc_time("260101000000Z"),
                Tlv::utc_time("270101000000Z"),
            ]),
            single_cn_name("example.com"),
            subject_public_key_info(),
            Tlv::context(3, vec![Tlv::sequence(extensions)]),
        ]);
        let certificate = Tlv::sequence(vec![
            tbs,
            algorithm_identifier(ObjectIdentifier::Sha256WithRsaEncryption),
            Tlv::bit_string(0, &[0xab; 64]),
        ]);
        certificate.to_der().unwrap()
    }

    // -------------------------------------------------------
    // 1. Minimal v3 certificate with one SubjectAltName entry
    // -------------------------------------------------------
    #[test]
    fn test_minimal_certificate_roundtrip() {
        let der = certificate_der(vec![san_extension()]);
        let certificate = Certificate::from_der(&der).unwrap();

        let tbs = &certificate.tbs_certificate;
        assert_eq!(tbs.version, Version::V3);
        assert_eq!(tbs.serial_number.bytes, vec![0x10, 0x01]);
        assert_eq!(
            tbs.signature.algorithm,
            Algorithm::Sha256WithRsaEncryption
        );
        assert_eq!(
            certificate.signature_algorithm.algorithm,
            Algorithm::Sha256WithRsaEncryption
        );

        let Name::RdnSequence(issuer) = &tbs.issuer;
        let issuer_cn = issuer.0[0].0.iter().next().unwrap();
        assert_eq!(issuer_cn.value.string_value(), Some("Example CA"));

        assert!(tbs.validity.not_before.timestamp() < tbs.validity.not_after.timestamp());

        let PublicKey::Rsa(rsa) = &tbs.public_key;
        assert_eq!(rsa.modulus, MODULUS);
        assert_eq!(rsa.exponent, 65537);

        assert_eq!(tbs.extensions.items.len(), 1);
        assert_eq!(
            tbs.extensions.items[0].value,
            ExtensionValue::SubjectAltName(vec![GeneralName::DnsName("example.com".into())])
        );
        assert_eq!(
            certificate.subject_alt_name(),
            Some(&vec![GeneralName::DnsName("example.com".into())])
        );

        assert_eq!(certificate.signature_value.padding, 0);
        assert_eq!(certificate.signature_value.bytes, vec![0xab; 64]);
    }

    // -------------------------------------------------------
    // 2. Raw TBS span capture
    // -------------------------------------------------------
    #[test]
    fn test_tbs_raw_span() {
        let der = certificate_der(vec![san_extension()]);
        let certificate = Certificate::from_der(&der).unwrap();

        let tbs_raw = certificate.tbs_raw();
        assert_eq!(tbs_raw[0], 0x30);
        // the span starts right after the outer sequence header
        let start = der.len() - {
            let mut reader = certkit_asn1::Reader::new(&der);
            reader.read_u8().unwrap();
            certkit_asn1::Length::decode(&mut reader).unwrap().0
        };
        assert_eq!(&der[start..start + tbs_raw.len()], tbs_raw);
        // re-encoding the decoded tree reproduces the same span
        let outer = Tlv::from_der(&der).unwrap();
        let tbs_tlv = &outer.sequence_value().unwrap()[0];
        assert_eq!(tbs_tlv.to_der().unwrap(), tbs_raw);
    }

    // -------------------------------------------------------
    // 3. Extension handling across the full certificate
    // -------------------------------------------------------
    #[test]
    fn test_multiple_extensions() {
        let basic_constraints = Tlv::sequence(vec![Tlv::boolean(true), Tlv::integer(3)])
            .to_der()
            .unwrap();
        let key_usage = Tlv::bit_string(1, &[0x06]).to_der().unwrap();
        let der = certificate_der(vec![
            extension(
                ObjectIdentifier::CertificateExtension(Some(
                    CertificateExtension::BasicConstraints,
                )),
                Some(true),
                &basic_constraints,
            ),
            extension(
                ObjectIdentifier::CertificateExtension(Some(CertificateExtension::KeyUsage)),
                Some(true),
                &key_usage,
            ),
            san_extension(),
        ]);

        let certificate = Certificate::from_der(&der).unwrap();
        assert_eq!(certificate.tbs_certificate.extensions.items.len(), 3);
        assert!(certificate.is_ca());
        assert_eq!(certificate.basic_constraints().unwrap().path_len, Some(3));
        let usage = certificate.key_usage().unwrap();
        assert!(usage.contains(KeyUsage::KEY_CERT_SIGN));
        assert!(usage.contains(KeyUsage::CRL_SIGN));
        assert!(certificate.tbs_certificate.extensions.items[0].is_critical);
        assert!(!certificate.tbs_certificate.extensions.items[2].is_critical);
    }

    // -------------------------------------------------------
    // 4. Unknown extensions are hard errors
    // -------------------------------------------------------
    #[test]
    fn test_unknown_extension_rejected() {
        let payload = Tlv::null().to_der().unwrap();
        let der = certificate_der(vec![
            san_extension(),
            extension(
                ObjectIdentifier::Other(vec![0x2a, 0x03, 0x7f]),
                None,
                &payload,
            ),
        ]);
        assert_eq!(
            Certificate::from_der(&der),
            Err(X509Error::UnimplementedExtension("1.2.3.127".into()))
        );
    }

    // -------------------------------------------------------
    // 5. Byte-level strictness
    // -------------------------------------------------------
    #[test]
    fn test_trailing_bytes_rejected() {
        let mut der = certificate_der(vec![san_extension()]);
        der.push(0x00);
        assert!(Certificate::from_der(&der).is_err());
    }

    #[test]
    fn test_truncated_input_rejected() {
        let der = certificate_der(vec![san_extension()]);
        assert!(Certificate::from_der(&der[..der.len() - 1]).is_err());
    }

    #[test]
    fn test_whole_certificate_tlv_roundtrip() {
        let der = certificate_der(vec![san_extension()]);
        let tlv = Tlv::from_der(&der).unwrap();
        assert_eq!(tlv.to_der().unwrap(), der);
    }
}
