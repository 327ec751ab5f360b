//! Strict decoding of the X.509 signature `AlgorithmIdentifier`.
//!
//! A certificate validator must not treat two different byte strings as the
//! same signature algorithm, so only exact DER is accepted: DEFAULT values
//! must be omitted, NULL parameters must be where the scheme allows them and
//! nowhere else, and nothing may follow the identifier.
//!
//! ```
//! use {der::Decode, x509_signature_algorithm::asn1::{DigestAlgorithm, SignatureAlgorithm}};
//!
//! // sha256WithRSAEncryption, NULL parameters
//! let der = [
//!     0x30, 0x0d, 0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x0b, 0x05, 0x00,
//! ];
//! let algorithm = SignatureAlgorithm::from_der(&der).unwrap();
//! assert_eq!(algorithm, SignatureAlgorithm::rsa_pkcs1(DigestAlgorithm::Sha256));
//! assert!(algorithm.params_for_rsa_pss().is_none());
//! ```

pub mod asn1;

pub use self::asn1::{
    DigestAlgorithm, RsaPssParameters, SignatureAlgorithm, SignatureAlgorithmId,
};

/// Like `anyhow::ensure!`, but returns the given error value as-is.
#[macro_export]
macro_rules! ensure_err {
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err($err);
        }
    };
}
