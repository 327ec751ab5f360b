use {
    super::{
        digest_algorithm::{DigestAlgorithm, Parameters},
        oid::{self, SignatureOid, SIGNATURE_ALGORITHMS},
        rsa_pss_parameters::RsaPssParameters,
    },
    der::{
        asn1::{Null, ObjectIdentifier as Oid},
        Decode, DecodeValue, Encode, EncodeValue, Error, ErrorKind, Header, Length, Reader, Result,
        Sequence, Tag, Writer,
    },
    std::fmt::{self, Display, Formatter},
    tracing::debug,
};

/// Signature scheme family, independent of the digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SignatureAlgorithmId {
    RsaPkcs1,
    RsaPss,
    Ecdsa,
    Dsa,
}

/// A resolved signature `AlgorithmIdentifier`.
///
/// ```text
/// AlgorithmIdentifier  ::=  SEQUENCE  {
///     algorithm               OBJECT IDENTIFIER,
///     parameters              ANY DEFINED BY algorithm OPTIONAL  }
/// ```
///
/// Decoding accepts the following parameters per family:
///
/// | family    | parameters                      |
/// |-----------|---------------------------------|
/// | RSA PKCS1 | absent or NULL                  |
/// | DSA       | absent or NULL                  |
/// | ECDSA     | absent                          |
/// | RSA PSS   | [`RsaPssParameters`], mandatory |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignatureAlgorithm {
    RsaPkcs1(DigestAlgorithm),
    RsaPss(RsaPssParameters),
    Ecdsa(DigestAlgorithm),
    Dsa(DigestAlgorithm),
}

impl SignatureAlgorithm {
    pub const fn rsa_pkcs1(digest: DigestAlgorithm) -> Self {
        Self::RsaPkcs1(digest)
    }

    pub const fn ecdsa(digest: DigestAlgorithm) -> Self {
        Self::Ecdsa(digest)
    }

    pub const fn dsa(digest: DigestAlgorithm) -> Self {
        Self::Dsa(digest)
    }

    pub const fn algorithm(&self) -> SignatureAlgorithmId {
        match self {
            Self::RsaPkcs1(_) => SignatureAlgorithmId::RsaPkcs1,
            Self::RsaPss(_) => SignatureAlgorithmId::RsaPss,
            Self::Ecdsa(_) => SignatureAlgorithmId::Ecdsa,
            Self::Dsa(_) => SignatureAlgorithmId::Dsa,
        }
    }

    /// The digest the signature is computed over. For RSASSA-PSS this is also
    /// the MGF1 hash.
    pub const fn digest(&self) -> DigestAlgorithm {
        match self {
            Self::RsaPkcs1(digest) | Self::Ecdsa(digest) | Self::Dsa(digest) => *digest,
            Self::RsaPss(params) => params.mgf1_hash(),
        }
    }

    pub const fn params_for_rsa_pss(&self) -> Option<&RsaPssParameters> {
        match self {
            Self::RsaPss(params) => Some(params),
            _ => None,
        }
    }

    /// The OID this value encodes with. Where several OIDs decode to the same
    /// value, the first in [`SIGNATURE_ALGORITHMS`] is used.
    pub fn oid(&self) -> Result<Oid> {
        oid::signature_oid(self.algorithm(), self.digest()).ok_or_else(|| {
            Error::new(
                ErrorKind::Value {
                    tag: Tag::ObjectIdentifier,
                },
                Length::ZERO,
            )
        })
    }
}

impl Display for SignatureAlgorithmId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::RsaPkcs1 => "RSASSA-PKCS1-v1_5",
            Self::RsaPss => "RSASSA-PSS",
            Self::Ecdsa => "ECDSA",
            Self::Dsa => "DSA",
        })
    }
}

impl Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} with {}", self.algorithm(), self.digest())?;
        if let Self::RsaPss(params) = self {
            write!(
                f,
                " (MGF1 {}, salt length {})",
                params.mgf1_hash(),
                params.salt_length()
            )?;
        }
        Ok(())
    }
}

impl Sequence<'_> for SignatureAlgorithm {}

impl<'a> DecodeValue<'a> for SignatureAlgorithm {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> Result<Self> {
        reader
            .read_nested(header.length, |reader| {
                let oid = Oid::decode(reader)?;
                let Some(entry) = oid::lookup(SIGNATURE_ALGORITHMS, &oid) else {
                    debug!(%oid, "unsupported signature algorithm");
                    return Err(reader.error(ErrorKind::OidUnknown { oid }));
                };
                Ok(match entry {
                    SignatureOid::Combined(SignatureAlgorithmId::RsaPkcs1, digest) => {
                        Parameters::NullOrAbsent.decode(reader)?;
                        Self::RsaPkcs1(digest)
                    }
                    // Unlike ECDSA, DSA tolerates an explicit NULL.
                    SignatureOid::Combined(SignatureAlgorithmId::Dsa, digest) => {
                        Parameters::NullOrAbsent.decode(reader)?;
                        Self::Dsa(digest)
                    }
                    SignatureOid::Combined(SignatureAlgorithmId::Ecdsa, digest) => {
                        Parameters::Absent.decode(reader)?;
                        Self::Ecdsa(digest)
                    }
                    SignatureOid::Combined(SignatureAlgorithmId::RsaPss, _) | SignatureOid::RsaPss => {
                        Self::RsaPss(RsaPssParameters::decode(reader)?)
                    }
                })
            })
            .inspect_err(|error| debug!(%error, "rejected signature AlgorithmIdentifier"))
    }
}

impl EncodeValue for SignatureAlgorithm {
    fn value_len(&self) -> Result<Length> {
        let oid_len = self.oid()?.encoded_len()?;
        match self {
            Self::RsaPkcs1(_) => oid_len + Null.encoded_len()?,
            Self::RsaPss(params) => oid_len + params.encoded_len()?,
            Self::Ecdsa(_) | Self::Dsa(_) => Ok(oid_len),
        }
    }

    fn encode_value(&self, writer: &mut impl Writer) -> Result<()> {
        self.oid()?.encode(writer)?;
        match self {
            Self::RsaPkcs1(_) => Null.encode(writer),
            Self::RsaPss(params) => params.encode(writer),
            Self::Ecdsa(_) | Self::Dsa(_) => Ok(()),
        }
    }
}
