use {
    super::oid::{self, ID_SHA1},
    der::{
        asn1::{Null, ObjectIdentifier as Oid},
        Decode, DecodeValue, Encode, EncodeValue, Error, ErrorKind, Header, Length, Reader,
        Result, Sequence, Writer,
    },
    sha2::Digest,
    std::fmt::{self, Display, Formatter},
};

/// Hash function a signature is computed over.
///
/// SHA-224 is not represented: no identifier that resolves to it is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DigestAlgorithm {
    Md2,
    Md4,
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl DigestAlgorithm {
    /// Output size in bytes.
    pub fn output_len(self) -> usize {
        match self {
            Self::Md2 | Self::Md4 | Self::Md5 => 16,
            Self::Sha1 => sha1::Sha1::output_size(),
            Self::Sha256 => sha2::Sha256::output_size(),
            Self::Sha384 => sha2::Sha384::output_size(),
            Self::Sha512 => sha2::Sha512::output_size(),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Md2 => "MD2",
            Self::Md4 => "MD4",
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
        }
    }
}

impl Display for DigestAlgorithm {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allowed encodings of an AlgorithmIdentifier `parameters` field that
/// carries no information.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parameters {
    /// Either a zero-length NULL or nothing at all.
    NullOrAbsent,

    /// Nothing at all.
    Absent,
}

impl Parameters {
    /// Consumes the parameters, if any are allowed.
    ///
    /// Anything not consumed is left for the enclosing nested reader, which
    /// rejects it as trailing data.
    pub fn decode<'a, R: Reader<'a>>(self, reader: &mut R) -> Result<()> {
        if self == Self::NullOrAbsent && !reader.is_finished() {
            Null::decode(reader)?;
        }
        Ok(())
    }
}

/// The `AlgorithmIdentifier` of a hash function.
///
/// ```text
/// HashAlgorithm ::= AlgorithmIdentifier { OID, NULL OPTIONAL }
/// ```
///
/// Decoding only checks the structure. The OID is resolved separately with
/// [`DigestIdentifier::resolve`] against whichever table applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DigestIdentifier(pub Oid);

impl DigestIdentifier {
    pub fn resolve(&self, table: &[(Oid, DigestAlgorithm)]) -> Result<DigestAlgorithm> {
        oid::lookup(table, &self.0)
            .ok_or_else(|| Error::new(ErrorKind::OidUnknown { oid: self.0 }, Length::ZERO))
    }

    pub fn is_sha1(&self) -> bool {
        self.0 == ID_SHA1
    }
}

impl Sequence<'_> for DigestIdentifier {}

impl<'a> DecodeValue<'a> for DigestIdentifier {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> Result<Self> {
        reader.read_nested(header.length, |reader| {
            let oid = Oid::decode(reader)?;
            Parameters::NullOrAbsent.decode(reader)?;
            Ok(Self(oid))
        })
    }
}

/// Always encodes the NULL, which is how RFC 4055 writes hash identifiers.
impl EncodeValue for DigestIdentifier {
    fn value_len(&self) -> Result<Length> {
        self.0.encoded_len()? + Null.encoded_len()?
    }

    fn encode_value(&self, writer: &mut impl Writer) -> Result<()> {
        self.0.encode(writer)?;
        Null.encode(writer)
    }
}
