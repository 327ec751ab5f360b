//! Object identifiers and the fixed lookup tables.
//!
//! Lookups compare the DER encoding of the OID exactly. An OID that is not in
//! the table consulted is rejected, whether it is unsupported or malformed.

use {
    super::{DigestAlgorithm, SignatureAlgorithmId},
    der::asn1::ObjectIdentifier as Oid,
};

/// md2WithRSAEncryption OBJECT IDENTIFIER ::= { pkcs-1 2 }
pub const MD2_WITH_RSA_ENCRYPTION: Oid = Oid::new_unwrap("1.2.840.113549.1.1.2");

/// md4WithRSAEncryption OBJECT IDENTIFIER ::= { pkcs-1 3 }
pub const MD4_WITH_RSA_ENCRYPTION: Oid = Oid::new_unwrap("1.2.840.113549.1.1.3");

/// md5WithRSAEncryption OBJECT IDENTIFIER ::= { pkcs-1 4 }
pub const MD5_WITH_RSA_ENCRYPTION: Oid = Oid::new_unwrap("1.2.840.113549.1.1.4");

/// sha1WithRSAEncryption OBJECT IDENTIFIER ::= { pkcs-1 5 }
pub const SHA1_WITH_RSA_ENCRYPTION: Oid = Oid::new_unwrap("1.2.840.113549.1.1.5");

/// sha-1WithRSASignature OBJECT IDENTIFIER ::= {
///     iso(1) identified-organization(3) oiw(14) secsig(3) algorithms(2) 29 }
///
/// Obsolete OIW spelling of [`SHA1_WITH_RSA_ENCRYPTION`], still found in old
/// certificates.
pub const SHA1_WITH_RSA_SIGNATURE: Oid = Oid::new_unwrap("1.3.14.3.2.29");

/// sha256WithRSAEncryption OBJECT IDENTIFIER ::= { pkcs-1 11 }
pub const SHA256_WITH_RSA_ENCRYPTION: Oid = Oid::new_unwrap("1.2.840.113549.1.1.11");

/// sha384WithRSAEncryption OBJECT IDENTIFIER ::= { pkcs-1 12 }
pub const SHA384_WITH_RSA_ENCRYPTION: Oid = Oid::new_unwrap("1.2.840.113549.1.1.12");

/// sha512WithRSAEncryption OBJECT IDENTIFIER ::= { pkcs-1 13 }
pub const SHA512_WITH_RSA_ENCRYPTION: Oid = Oid::new_unwrap("1.2.840.113549.1.1.13");

/// id-RSASSA-PSS OBJECT IDENTIFIER ::= { pkcs-1 10 }
pub const ID_RSASSA_PSS: Oid = Oid::new_unwrap("1.2.840.113549.1.1.10");

/// id-mgf1 OBJECT IDENTIFIER ::= { pkcs-1 8 }
pub const ID_MGF1: Oid = Oid::new_unwrap("1.2.840.113549.1.1.8");

/// ecdsa-with-SHA1 OBJECT IDENTIFIER ::= {
///     iso(1) member-body(2) us(840) ansi-X9-62(10045) signatures(4) 1 }
pub const ECDSA_WITH_SHA1: Oid = Oid::new_unwrap("1.2.840.10045.4.1");

/// ecdsa-with-SHA256 OBJECT IDENTIFIER ::= {
///     iso(1) member-body(2) us(840) ansi-X9-62(10045) signatures(4)
///     ecdsa-with-SHA2(3) 2 }
pub const ECDSA_WITH_SHA256: Oid = Oid::new_unwrap("1.2.840.10045.4.3.2");

/// ecdsa-with-SHA384 OBJECT IDENTIFIER ::= { ecdsa-with-SHA2 3 }
pub const ECDSA_WITH_SHA384: Oid = Oid::new_unwrap("1.2.840.10045.4.3.3");

/// ecdsa-with-SHA512 OBJECT IDENTIFIER ::= { ecdsa-with-SHA2 4 }
pub const ECDSA_WITH_SHA512: Oid = Oid::new_unwrap("1.2.840.10045.4.3.4");

/// id-dsa-with-sha1 OBJECT IDENTIFIER ::= {
///     iso(1) member-body(2) us(840) x9-57(10040) x9algorithm(4) 3 }
pub const DSA_WITH_SHA1: Oid = Oid::new_unwrap("1.2.840.10040.4.3");

/// id-dsa-with-sha256 OBJECT IDENTIFIER ::= {
///     joint-iso-ccitt(2) country(16) us(840) organization(1) gov(101)
///     csor(3) algorithms(4) id-dsa-with-sha2(3) 2 }
pub const DSA_WITH_SHA256: Oid = Oid::new_unwrap("2.16.840.1.101.3.4.3.2");

/// id-sha1 OBJECT IDENTIFIER ::= {
///     iso(1) identified-organization(3) oiw(14) secsig(3) algorithms(2) 26 }
///
/// The RSASSA-PSS default hash. Not a table entry: it is never valid when
/// spelled out.
pub const ID_SHA1: Oid = Oid::new_unwrap("1.3.14.3.2.26");

/// id-sha256 OBJECT IDENTIFIER ::= { hashAlgs 1 }
pub const ID_SHA256: Oid = Oid::new_unwrap("2.16.840.1.101.3.4.2.1");

/// id-sha384 OBJECT IDENTIFIER ::= { hashAlgs 2 }
pub const ID_SHA384: Oid = Oid::new_unwrap("2.16.840.1.101.3.4.2.2");

/// id-sha512 OBJECT IDENTIFIER ::= { hashAlgs 3 }
pub const ID_SHA512: Oid = Oid::new_unwrap("2.16.840.1.101.3.4.2.3");

/// What an entry of [`SIGNATURE_ALGORITHMS`] resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignatureOid {
    /// The OID names both the scheme and the digest.
    Combined(SignatureAlgorithmId, DigestAlgorithm),

    /// The digest is carried in the RSASSA-PSS parameters.
    RsaPss,
}

/// Combined Signature OID Table.
///
/// sha224WithRSAEncryption is intentionally not listed.
pub const SIGNATURE_ALGORITHMS: &[(Oid, SignatureOid)] = {
    use {
        DigestAlgorithm::{Md2, Md4, Md5, Sha1, Sha256, Sha384, Sha512},
        SignatureAlgorithmId::{Dsa, Ecdsa, RsaPkcs1},
        SignatureOid::{Combined, RsaPss},
    };
    &[
        (SHA1_WITH_RSA_ENCRYPTION, Combined(RsaPkcs1, Sha1)),
        (SHA1_WITH_RSA_SIGNATURE, Combined(RsaPkcs1, Sha1)),
        (SHA256_WITH_RSA_ENCRYPTION, Combined(RsaPkcs1, Sha256)),
        (SHA384_WITH_RSA_ENCRYPTION, Combined(RsaPkcs1, Sha384)),
        (SHA512_WITH_RSA_ENCRYPTION, Combined(RsaPkcs1, Sha512)),
        (MD5_WITH_RSA_ENCRYPTION, Combined(RsaPkcs1, Md5)),
        (MD4_WITH_RSA_ENCRYPTION, Combined(RsaPkcs1, Md4)),
        (MD2_WITH_RSA_ENCRYPTION, Combined(RsaPkcs1, Md2)),
        (ID_RSASSA_PSS, RsaPss),
        (ECDSA_WITH_SHA1, Combined(Ecdsa, Sha1)),
        (ECDSA_WITH_SHA256, Combined(Ecdsa, Sha256)),
        (ECDSA_WITH_SHA384, Combined(Ecdsa, Sha384)),
        (ECDSA_WITH_SHA512, Combined(Ecdsa, Sha512)),
        (DSA_WITH_SHA1, Combined(Dsa, Sha1)),
        (DSA_WITH_SHA256, Combined(Dsa, Sha256)),
    ]
};

/// Digest OID Table, for the hashes nested in RSASSA-PSS parameters.
///
/// Only the NIST SHA-2 arc: RSASSA-PSS is supported with SHA-256/384/512 only.
pub const PSS_DIGEST_ALGORITHMS: &[(Oid, DigestAlgorithm)] = &[
    (ID_SHA256, DigestAlgorithm::Sha256),
    (ID_SHA384, DigestAlgorithm::Sha384),
    (ID_SHA512, DigestAlgorithm::Sha512),
];

/// Exact-match lookup in one of the tables.
pub fn lookup<T: Copy>(table: &[(Oid, T)], oid: &Oid) -> Option<T> {
    table
        .iter()
        .find_map(|(key, value)| (key == oid).then_some(*value))
}

/// First OID in [`SIGNATURE_ALGORITHMS`] for a scheme/digest pair.
pub fn signature_oid(algorithm: SignatureAlgorithmId, digest: DigestAlgorithm) -> Option<Oid> {
    SIGNATURE_ALGORITHMS
        .iter()
        .find_map(|(oid, entry)| match *entry {
            SignatureOid::Combined(a, d) if a == algorithm && d == digest => Some(*oid),
            SignatureOid::RsaPss if algorithm == SignatureAlgorithmId::RsaPss => Some(*oid),
            _ => None,
        })
}

/// OID of a digest usable inside RSASSA-PSS parameters.
pub fn pss_digest_oid(digest: DigestAlgorithm) -> Option<Oid> {
    PSS_DIGEST_ALGORITHMS
        .iter()
        .find_map(|(oid, d)| (*d == digest).then_some(*oid))
}

#[cfg(test)]
mod tests {
    use {super::*, der::Encode, hex_literal::hex};

    #[test]
    fn test_tables_are_disjoint() {
        for (oid, _) in PSS_DIGEST_ALGORITHMS {
            assert!(lookup(SIGNATURE_ALGORITHMS, oid).is_none());
        }
        for (oid, _) in SIGNATURE_ALGORITHMS {
            assert!(lookup(PSS_DIGEST_ALGORITHMS, oid).is_none());
        }
    }

    #[test]
    fn test_no_duplicate_oids() {
        for (i, (a, _)) in SIGNATURE_ALGORITHMS.iter().enumerate() {
            for (b, _) in &SIGNATURE_ALGORITHMS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_sha1_and_sha224_absent() {
        assert_eq!(lookup(PSS_DIGEST_ALGORITHMS, &ID_SHA1), None);
        let sha224_with_rsa = Oid::new_unwrap("1.2.840.113549.1.1.14");
        assert_eq!(lookup(SIGNATURE_ALGORITHMS, &sha224_with_rsa), None);
    }

    #[test]
    fn test_der_bytes() {
        assert_eq!(
            SHA1_WITH_RSA_ENCRYPTION.to_der().unwrap(),
            hex!("06092a864886f70d010105")
        );
        assert_eq!(
            ECDSA_WITH_SHA256.to_der().unwrap(),
            hex!("06082a8648ce3d040302")
        );
        assert_eq!(ID_SHA1.to_der().unwrap(), hex!("06052b0e03021a"));
        assert_eq!(
            ID_SHA512.to_der().unwrap(),
            hex!("0609608648016503040203")
        );
    }

    #[test]
    fn test_reverse_lookup_prefers_pkcs1_spelling() {
        assert_eq!(
            signature_oid(SignatureAlgorithmId::RsaPkcs1, DigestAlgorithm::Sha1),
            Some(SHA1_WITH_RSA_ENCRYPTION)
        );
        assert_eq!(
            signature_oid(SignatureAlgorithmId::Ecdsa, DigestAlgorithm::Md5),
            None
        );
        assert_eq!(
            signature_oid(SignatureAlgorithmId::Dsa, DigestAlgorithm::Sha384),
            None
        );
        assert_eq!(pss_digest_oid(DigestAlgorithm::Sha1), None);
        assert_eq!(pss_digest_oid(DigestAlgorithm::Sha384), Some(ID_SHA384));
    }
}
