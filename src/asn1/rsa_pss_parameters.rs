//! RSASSA-PSS parameters.
//!
//! RFC 4055 3.1:
//! ```text
//! RSASSA-PSS-params  ::=  SEQUENCE  {
//!     hashAlgorithm      [0] HashAlgorithm DEFAULT
//!                               sha1Identifier,
//!     maskGenAlgorithm   [1] MaskGenAlgorithm DEFAULT
//!                               mgf1SHA1Identifier,
//!     saltLength         [2] INTEGER DEFAULT 20,
//!     trailerField       [3] INTEGER DEFAULT 1
//!  }
//! ```
//!
//! DER forbids encoding a DEFAULT value, so each field equal to its default
//! is rejected. Only SHA-256, SHA-384 and SHA-512 are supported. The MGF1
//! hash must equal the message hash, and the salt must be as long as the
//! hash output.

use {
    super::{
        digest_algorithm::{DigestAlgorithm, DigestIdentifier},
        oid::{pss_digest_oid, ID_MGF1, PSS_DIGEST_ALGORITHMS},
    },
    crate::ensure_err,
    der::{
        asn1::{ContextSpecificRef, ObjectIdentifier as Oid},
        Decode, DecodeValue, Encode, EncodeValue, Error, ErrorKind, Header, Length, Reader,
        Result, Sequence, Tag, TagMode, TagNumber, Writer,
    },
    tracing::debug,
};

const DEFAULT_SALT_LENGTH: u32 = 20;
const DEFAULT_TRAILER_FIELD: u32 = 1;

const HASH_ALGORITHM: TagNumber = TagNumber::N0;
const MASK_GEN_ALGORITHM: TagNumber = TagNumber::N1;
const SALT_LENGTH: TagNumber = TagNumber::N2;
const TRAILER_FIELD: TagNumber = TagNumber::N3;

/// Validated RSASSA-PSS parameters.
///
/// Only produced by decoding. The message hash equals [`Self::mgf1_hash`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RsaPssParameters {
    mgf1_hash:   DigestAlgorithm,
    salt_length: u32,
}

/// ```text
/// MaskGenAlgorithm ::= AlgorithmIdentifier { id-mgf1, HashAlgorithm }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Sequence)]
struct MaskGenAlgorithm {
    algorithm:  Oid,
    parameters: DigestIdentifier,
}

impl RsaPssParameters {
    /// Hash used both for the message and for the MGF1 mask.
    pub const fn mgf1_hash(&self) -> DigestAlgorithm {
        self.mgf1_hash
    }

    /// Salt length in bytes.
    pub const fn salt_length(&self) -> u32 {
        self.salt_length
    }

    fn hash_identifier(&self) -> Result<DigestIdentifier> {
        pss_digest_oid(self.mgf1_hash)
            .map(DigestIdentifier)
            .ok_or_else(|| Error::new(ErrorKind::Value { tag: Tag::ObjectIdentifier }, Length::ZERO))
    }
}

/// Reads the next element if and only if it is `[number]` (explicit),
/// and requires the tagged content to be exactly one `T`.
fn read_explicit<'a, R: Reader<'a>, T: Decode<'a>>(
    reader: &mut R,
    number: TagNumber,
) -> Result<Option<T>> {
    let expected = Tag::ContextSpecific {
        constructed: true,
        number,
    };
    match reader.peek_byte() {
        Some(byte) if Tag::try_from(byte)? == expected => {}
        _ => return Ok(None),
    }
    let header = Header::decode(reader)?;
    reader
        .read_nested(header.length, |reader| T::decode(reader))
        .map(Some)
}

fn explicit<T>(tag_number: TagNumber, value: &T) -> ContextSpecificRef<'_, T> {
    ContextSpecificRef {
        tag_number,
        tag_mode: TagMode::Explicit,
        value,
    }
}

fn noncanonical(number: TagNumber) -> ErrorKind {
    ErrorKind::Noncanonical {
        tag: Tag::ContextSpecific {
            constructed: true,
            number,
        },
    }
}

fn invalid(number: TagNumber) -> ErrorKind {
    ErrorKind::Value {
        tag: Tag::ContextSpecific {
            constructed: true,
            number,
        },
    }
}

impl Sequence<'_> for RsaPssParameters {}

impl<'a> DecodeValue<'a> for RsaPssParameters {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> Result<Self> {
        reader.read_nested(header.length, |reader| {
            // Fields are taken in tag order. Anything else, including a
            // repeated or out of order tag, is left over and rejected when
            // the nested reader finishes.
            let hash: Option<DigestIdentifier> = read_explicit(reader, HASH_ALGORITHM)?;
            let mask_gen: Option<MaskGenAlgorithm> = read_explicit(reader, MASK_GEN_ALGORITHM)?;
            let salt_length: Option<u32> = read_explicit(reader, SALT_LENGTH)?;
            let trailer_field: Option<u32> = read_explicit(reader, TRAILER_FIELD)?;

            let hash = match hash {
                Some(id) => {
                    if id.is_sha1() {
                        debug!("RSASSA-PSS hashAlgorithm explicitly encodes the SHA-1 default");
                        return Err(reader.error(noncanonical(HASH_ALGORITHM)));
                    }
                    id.resolve(PSS_DIGEST_ALGORITHMS).inspect_err(|_| {
                        debug!(oid = %id.0, "unsupported RSASSA-PSS hashAlgorithm");
                    })?
                }
                None => DigestAlgorithm::Sha1,
            };

            let mgf1_hash = match mask_gen {
                Some(mask_gen) => {
                    if mask_gen.algorithm != ID_MGF1 {
                        debug!(oid = %mask_gen.algorithm, "unsupported RSASSA-PSS maskGenAlgorithm");
                        return Err(reader.error(ErrorKind::OidUnknown {
                            oid: mask_gen.algorithm,
                        }));
                    }
                    if mask_gen.parameters.is_sha1() {
                        debug!("RSASSA-PSS maskGenAlgorithm explicitly encodes the MGF1-SHA-1 default");
                        return Err(reader.error(noncanonical(MASK_GEN_ALGORITHM)));
                    }
                    mask_gen
                        .parameters
                        .resolve(PSS_DIGEST_ALGORITHMS)
                        .inspect_err(|_| {
                            debug!(oid = %mask_gen.parameters.0, "unsupported MGF1 hash");
                        })?
                }
                None => DigestAlgorithm::Sha1,
            };

            if salt_length == Some(DEFAULT_SALT_LENGTH) {
                debug!("RSASSA-PSS saltLength explicitly encodes the default of 20");
                return Err(reader.error(noncanonical(SALT_LENGTH)));
            }
            let salt_length = salt_length.unwrap_or(DEFAULT_SALT_LENGTH);

            if let Some(trailer_field) = trailer_field {
                let kind = if trailer_field == DEFAULT_TRAILER_FIELD {
                    debug!("RSASSA-PSS trailerField explicitly encodes the default of 1");
                    noncanonical(TRAILER_FIELD)
                } else {
                    debug!(trailer_field, "unsupported RSASSA-PSS trailerField");
                    invalid(TRAILER_FIELD)
                };
                return Err(reader.error(kind));
            }

            if hash == DigestAlgorithm::Sha1 {
                debug!("RSASSA-PSS with SHA-1 is not supported");
                return Err(reader.error(invalid(HASH_ALGORITHM)));
            }
            if mgf1_hash != hash {
                debug!(%hash, %mgf1_hash, "RSASSA-PSS MGF1 hash differs from message hash");
                return Err(reader.error(invalid(MASK_GEN_ALGORITHM)));
            }
            let matches_hash = usize::try_from(salt_length).is_ok_and(|len| len == hash.output_len());
            ensure_err!(matches_hash, {
                debug!(salt_length, %hash, "RSASSA-PSS salt length differs from hash length");
                reader.error(invalid(SALT_LENGTH))
            });

            Ok(Self {
                mgf1_hash,
                salt_length,
            })
        })
    }
}

/// Encodes `[0]`, `[1]` and `[2]`. None of them can equal its default, and
/// `[3]` always does.
impl EncodeValue for RsaPssParameters {
    fn value_len(&self) -> Result<Length> {
        let hash = self.hash_identifier()?;
        let mask_gen = MaskGenAlgorithm {
            algorithm:  ID_MGF1,
            parameters: hash,
        };
        [
            explicit(HASH_ALGORITHM, &hash).encoded_len()?,
            explicit(MASK_GEN_ALGORITHM, &mask_gen).encoded_len()?,
            explicit(SALT_LENGTH, &self.salt_length).encoded_len()?,
        ]
        .into_iter()
        .try_fold(Length::ZERO, |sum, len| sum + len)
    }

    fn encode_value(&self, writer: &mut impl Writer) -> Result<()> {
        let hash = self.hash_identifier()?;
        let mask_gen = MaskGenAlgorithm {
            algorithm:  ID_MGF1,
            parameters: hash,
        };
        explicit(HASH_ALGORITHM, &hash).encode(writer)?;
        explicit(MASK_GEN_ALGORITHM, &mask_gen).encode(writer)?;
        explicit(SALT_LENGTH, &self.salt_length).encode(writer)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, hex_literal::hex};

    // SEQUENCE { [0] sha256, [1] mgf1(sha256), [2] INTEGER 32 }
    const SHA256_PARAMS: [u8; 54] = hex!(
        "3034"
        "a00f300d06096086480165030402010500"
        "a11c301a06092a864886f70d010108300d06096086480165030402010500"
        "a203020120"
    );

    #[test]
    fn test_decode_sha256() {
        let params = RsaPssParameters::from_der(&SHA256_PARAMS).unwrap();
        assert_eq!(params.mgf1_hash(), DigestAlgorithm::Sha256);
        assert_eq!(params.salt_length(), 32);
    }

    #[test]
    fn test_encode_is_canonical() {
        let params = RsaPssParameters::from_der(&SHA256_PARAMS).unwrap();
        assert_eq!(params.to_der().unwrap(), SHA256_PARAMS);
    }

    #[test]
    fn test_empty_is_sha1() {
        assert!(RsaPssParameters::from_der(&hex!("3000")).is_err());
    }

    #[test]
    fn test_primitive_context_tag_rejected() {
        // [2] IMPLICIT INTEGER 32 instead of EXPLICIT
        assert!(RsaPssParameters::from_der(&hex!("3003820120")).is_err());
    }

    #[test]
    fn test_out_of_order_rejected() {
        // [1] before [0]
        let data = hex!(
            "3034"
            "a11c301a06092a864886f70d010108300d06096086480165030402010500"
            "a00f300d06096086480165030402010500"
            "a203020120"
        );
        assert!(RsaPssParameters::from_der(&data).is_err());
    }

    #[test]
    fn test_duplicate_rejected() {
        let data = hex!(
            "3045"
            "a00f300d06096086480165030402010500"
            "a00f300d06096086480165030402010500"
            "a11c301a06092a864886f70d010108300d06096086480165030402010500"
            "a203020120"
        );
        assert!(RsaPssParameters::from_der(&data).is_err());
    }

    #[test]
    fn test_negative_salt_rejected() {
        // [2] INTEGER -32
        let data = hex!(
            "3034"
            "a00f300d06096086480165030402010500"
            "a11c301a06092a864886f70d010108300d06096086480165030402010500"
            "a2030201e0"
        );
        assert!(RsaPssParameters::from_der(&data).is_err());
    }

    #[test]
    fn test_noncanonical_salt_integer_rejected() {
        // [2] INTEGER 32 with a redundant leading zero
        let data = hex!(
            "3035"
            "a00f300d06096086480165030402010500"
            "a11c301a06092a864886f70d010108300d06096086480165030402010500"
            "a20402020020"
        );
        assert!(RsaPssParameters::from_der(&data).is_err());
    }

    #[test]
    fn test_error_kinds() {
        // [2] INTEGER 20
        let err = RsaPssParameters::from_der(&hex!("3005a203020114")).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Noncanonical { .. }));

        // [2] INTEGER 21, hash defaults to SHA-1
        let err = RsaPssParameters::from_der(&hex!("3005a203020115")).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Value { .. }));
    }
}
