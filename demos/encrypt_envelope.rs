use rand::{SeedableRng, rngs::StdRng};
use tracing::info;
use tracing_subscriber::fmt;

use tpke::{
    Aes256CbcEncryption, AggregatedCommitment, ConsensusParameters, CurvePoint, DecryptionShare,
    Encryptor, Envelope, FieldElement, Fr, G1, HybridCiphertext, PublicKey, ScalerCache,
    SymmetricEncryption, scaled_lagrange_coefficients,
};

const PARTIES: usize = 10;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_span_events(fmt::format::FmtSpan::ENTER | fmt::format::FmtSpan::CLOSE)
        .with_target(false)
        .with_ansi(false)
        .init();

    let mut rng = StdRng::seed_from_u64(42);

    let params = ConsensusParameters::from_consensus_size(PARTIES)?;
    info!(
        parties = params.parties,
        threshold = params.threshold,
        "starting envelope example"
    );

    // Stand-in for the DKG: a dealer polynomial whose constant term is the committee secret
    let coeffs: Vec<Fr> = (0..params.threshold)
        .map(|_| <Fr as FieldElement>::random(&mut rng))
        .collect();
    let commitment = AggregatedCommitment::from_point(&G1::generator().mul_scalar(&coeffs[0]));

    let pk = PublicKey::from_aggregated_commitment(commitment.as_bytes(), &params)?;
    info!(public_key = %pk, "derived threshold public key");

    let message = b"transfer 100 tokens to validator 3";
    let ciphertext = Encryptor::new().encrypt(&mut rng, &pk, message)?;
    let wire = Envelope::to_bytes(&ciphertext, true);
    info!(envelope_len = wire.len(), "encrypted envelope");

    // Decryption side: the last `threshold` members cooperate
    let parsed: HybridCiphertext = Envelope::from_bytes(&wire)?;
    let quorum: Vec<u64> = ((PARTIES - params.threshold + 1) as u64..=PARTIES as u64).collect();
    let shares: Vec<DecryptionShare> = quorum
        .iter()
        .map(|&id| {
            let x = Fr::from_u64(id);
            let secret_share = coeffs.iter().rev().fold(Fr::zero(), |acc, c| acc * x + c);
            DecryptionShare {
                participant_id: id,
                share: parsed.key.r1.mul_scalar(&secret_share),
            }
        })
        .collect();

    let scaler = ScalerCache::global().get_or_solve(&params)?;
    let weights = scaled_lagrange_coefficients(&quorum, &scaler)?;
    let mask = shares
        .iter()
        .zip(&weights)
        .fold(G1::identity(), |acc, (share, w)| {
            acc.add(&share.share.mul_scalar(&Fr::from_bigint(w)))
        });
    let ephemeral = parsed.key.c.sub(&mask);

    let plain =
        Aes256CbcEncryption::new().decrypt(&ephemeral.encode_uncompressed(), &parsed.payload)?;
    info!(
        scaler = %scaler,
        matches = (plain == message),
        "quorum recovered plaintext"
    );

    Ok(())
}
