//! ASN.1 types for signature `AlgorithmIdentifier`s.
//!
//! Decoding is strict DER throughout. Where the standard allows more than
//! one encoding of "no parameters", the accepted ones are listed per scheme
//! on [`SignatureAlgorithm`]. Everything else is rejected, including DEFAULT
//! values that are spelled out and any bytes after the identifier.
//!
//! Encoding always produces the canonical form, so a decoded value encodes
//! to bytes that decode back to the same value.

mod digest_algorithm;
pub mod oid;
mod rsa_pss_parameters;
mod signature_algorithm_identifier;

pub use self::{
    digest_algorithm::{DigestAlgorithm, DigestIdentifier, Parameters},
    rsa_pss_parameters::RsaPssParameters,
    signature_algorithm_identifier::{SignatureAlgorithm, SignatureAlgorithmId},
};
