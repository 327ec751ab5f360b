//! Resolve DER signature `AlgorithmIdentifier`s from the command line.
//!
//! ```text
//! sigalg 300d06092a864886f70d01010b0500
//! sigalg --json --base64 MA0GCSqGSIb3DQEBCwUA
//! sigalg --file signature_algorithm.der
//! RUST_LOG=debug sigalg 300c06082a8648ce3d0403020500
//! ```

use {
    anyhow::{Context, Result},
    argh::FromArgs,
    base64::{engine::general_purpose::STANDARD as BASE64, Engine},
    der::{asn1::ObjectIdentifier as Oid, Decode},
    serde_json::{json, Value},
    std::{fs, process::ExitCode},
    tracing::{debug, info},
    tracing_subscriber::EnvFilter,
    x509_signature_algorithm::SignatureAlgorithm,
};

/// Resolve DER-encoded signature AlgorithmIdentifiers.
#[derive(FromArgs)]
struct Args {
    /// inputs are base64 instead of hex
    #[argh(switch)]
    base64: bool,

    /// inputs are paths to files holding raw DER
    #[argh(switch)]
    file: bool,

    /// print one JSON object per input
    #[argh(switch)]
    json: bool,

    /// the encoded identifiers
    #[argh(positional)]
    inputs: Vec<String>,
}

impl Args {
    fn read_input(&self, input: &str) -> Result<Vec<u8>> {
        if self.file {
            fs::read(input).with_context(|| format!("reading {input}"))
        } else if self.base64 {
            BASE64.decode(input.trim()).context("invalid base64")
        } else {
            hex::decode(input.trim()).context("invalid hex")
        }
    }
}

fn describe(input: &str, result: &der::Result<SignatureAlgorithm>) -> Value {
    match result {
        Ok(algorithm) => {
            let params = algorithm.params_for_rsa_pss();
            json!({
                "input": input,
                "algorithm": algorithm.algorithm().to_string(),
                "digest": algorithm.digest().to_string(),
                "mgf1_hash": params.map(|p| p.mgf1_hash().to_string()),
                "salt_length": params.map(|p| p.salt_length()),
            })
        }
        Err(error) => json!({
            "input": input,
            "error": error.to_string(),
        }),
    }
}

/// Logs the registered name of the leading OID, if it parses, to help
/// diagnose unsupported algorithms.
fn log_oid_name(bytes: &[u8]) {
    let Ok(oid) = der::SliceReader::new(bytes).and_then(|mut reader| {
        der::Header::decode(&mut reader)?;
        Oid::decode(&mut reader)
    }) else {
        return;
    };
    match const_oid::db::DB.by_oid(&oid) {
        Some(name) => debug!(%oid, name, "algorithm OID"),
        None => debug!(%oid, "algorithm OID not in registry"),
    }
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Args = argh::from_env();
    let mut rejected = 0_usize;

    for input in &args.inputs {
        let bytes = args.read_input(input)?;
        log_oid_name(&bytes);
        let result = SignatureAlgorithm::from_der(&bytes);
        if result.is_err() {
            rejected += 1;
        }

        if args.json {
            println!("{}", describe(input, &result));
        } else {
            match &result {
                Ok(algorithm) => println!("{input}: {algorithm}"),
                Err(error) => println!("{input}: rejected ({error})"),
            }
        }
    }

    info!(total = args.inputs.len(), rejected, "done");
    Ok(if rejected == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
