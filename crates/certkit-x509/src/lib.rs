#![forbid(unsafe_code)]
#![doc = "X.509 certificate decoding on top of certkit-asn1."]

pub mod algorithm;
pub mod bit_string;
pub mod certificate;
pub mod error;
pub mod extensions;
pub mod general_name;
pub mod name;
pub mod public_key;
pub mod tbs;
pub mod time;

pub use algorithm::{Algorithm, AlgorithmIdentifier};
pub use bit_string::BitString;
pub use certificate::Certificate;
pub use error::X509Error;
pub use extensions::{Extension, ExtensionValue, Extensions};
pub use general_name::{GeneralName, GeneralNames};
pub use name::{
    AttributeTypeAndValue, DirectoryString, Name, RdnSequence, RelativeDistinguishedName,
};
pub use public_key::{PublicKey, RsaPublicKey};
pub use tbs::{SerialNumber, TbsCertificate, Validity, Version};
pub use time::Time;
