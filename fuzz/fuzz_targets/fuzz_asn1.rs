#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(tlv) = certkit_asn1::Tlv::from_der(data) {
        // anything that decodes must re-encode
        let _ = tlv.to_der();
    }
});
