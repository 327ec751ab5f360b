
use {
    anyhow::{ensure, Result},
    dataset::{COMBINED_NO_PARAMS, COMBINED_NULL_PARAMS, PSS},
    der::{Decode, Encode},
    x509_signature_algorithm::{DigestAlgorithm, SignatureAlgorithm, SignatureAlgorithmId},
};

#[test]
fn test_encode_decoded_roundtrips() -> Result<()> {
    let valid = COMBINED_NO_PARAMS
        .iter()
        .chain(COMBINED_NULL_PARAMS)
        .map(|case| case.der)
        .chain(PSS.iter().map(|case| case.der));
    for data in valid {
        let algorithm = SignatureAlgorithm::from_der(data)?;
        let encoded = algorithm.to_der()?;
        ensure!(
            SignatureAlgorithm::from_der(&encoded)? == algorithm,
            "{algorithm} from {data:02x?}"
        );
        // Encoding is a fixed point after one pass.
        ensure!(SignatureAlgorithm::from_der(&encoded)?.to_der()? == encoded);
    }
    Ok(())
}

#[test]
fn test_encode_rsa_pss_canonical() -> Result<()> {
    for case in PSS.iter().filter(|case| case.canonical) {
        let encoded = SignatureAlgorithm::from_der(case.der)?.to_der()?;
        ensure!(encoded == case.der, "{}", case.name);
    }
    Ok(())
}

#[test]
fn test_encode_families() -> Result<()> {
    // RSASSA-PKCS1-v1_5 always carries NULL, ECDSA and DSA never do.
    for case in COMBINED_NULL_PARAMS
        .iter()
        .filter(|case| case.algorithm == SignatureAlgorithmId::RsaPkcs1)
        .filter(|case| case.name != "sha1WithRSASignature")
    {
        let encoded = SignatureAlgorithm::from_der(case.der)?.to_der()?;
        ensure!(encoded == case.der, "{}", case.name);
    }
    for case in COMBINED_NO_PARAMS
        .iter()
        .filter(|case| case.algorithm != SignatureAlgorithmId::RsaPkcs1)
    {
        let encoded = SignatureAlgorithm::from_der(case.der)?.to_der()?;
        ensure!(encoded == case.der, "{}", case.name);
    }
    Ok(())
}

#[test]
fn test_encode_direct_constructors() -> Result<()> {
    use DigestAlgorithm::{Md2, Md4, Md5, Sha1, Sha256, Sha384, Sha512};

    let algorithms = [Md2, Md4, Md5, Sha1, Sha256, Sha384, Sha512]
        .into_iter()
        .map(SignatureAlgorithm::rsa_pkcs1)
        .chain([Sha1, Sha256, Sha384, Sha512].map(SignatureAlgorithm::ecdsa))
        .chain([Sha1, Sha256].map(SignatureAlgorithm::dsa));
    for algorithm in algorithms {
        let decoded = SignatureAlgorithm::from_der(&algorithm.to_der()?)?;
        ensure!(decoded == algorithm, "{algorithm}");
    }
    Ok(())
}

#[test]
fn test_encode_unsupported_combination() -> Result<()> {
    for algorithm in [
        SignatureAlgorithm::ecdsa(DigestAlgorithm::Md5),
        SignatureAlgorithm::dsa(DigestAlgorithm::Sha512),
    ] {
        ensure!(algorithm.oid().is_err(), "{algorithm}");
        ensure!(algorithm.to_der().is_err(), "{algorithm}");
    }
    Ok(())
}
