use rand::{SeedableRng, rngs::StdRng};

use tpke::{
    Aes256CbcEncryption, AggregatedCommitment, ConsensusParameters, CurvePoint, DecryptionShare,
    Encryptor, Envelope, Error, FieldElement, Fr, G1, HybridCiphertext, PublicKey, ScalerCache,
    SymmetricEncryption, scaled_lagrange_coefficients,
};

const COMMITMENT_N7: &str = "0000000000000000000000000000000004f1c7e8d68052701518e38b4b64a55e1ce35392f13b773bcda20a54a386e83a47641b98c7abf3d8212061c16604ca9100000000000000000000000000000000071f445019d9e972465b04eee6cc5e842829f4103eeabe0e814c997034efbf4082f7505a53a39edf8efc61157bf4de66";
const PUBLIC_KEY_N7: &str = "84c7a302bd8fdd14c297c82f57db8788038489c8325574dad73cc4ceea2f30c673fe3558b3ef5df28d87f4ef4fd18c36";
const PUBLIC_KEY_RAW: &str = "a5aa188d1c60a7173e59fe49b68b969999e70aa4c1acb76c5a3dd2ad0d19a859b1a2759e3995ce1ceccdea5a57fbf637";

#[test]
fn aggregated_commitment_for_seven_validators() {
    let commitment = hex::decode(COMMITMENT_N7).unwrap();
    let pk = PublicKey::from_consensus_commitment(&commitment, 7).unwrap();
    assert_eq!(hex::encode(pk.to_bytes()), PUBLIC_KEY_N7);
    assert_eq!(pk.to_string(), PUBLIC_KEY_N7);

    let explicit =
        PublicKey::from_aggregated_commitment(&commitment, &ConsensusParameters::new(7, 5).unwrap())
            .unwrap();
    assert_eq!(explicit, pk);
}

#[test]
fn public_key_bytes_roundtrip() {
    let raw = hex::decode(PUBLIC_KEY_RAW).unwrap();
    let pk = PublicKey::from_bytes(&raw).unwrap();
    assert_eq!(pk.to_bytes(), raw);
}

#[test]
fn malformed_commitments_are_rejected() {
    let commitment = hex::decode(COMMITMENT_N7).unwrap();
    assert!(matches!(
        PublicKey::from_consensus_commitment(&commitment[..127], 7),
        Err(Error::InvalidInput(_))
    ));

    let mut corrupted = commitment.clone();
    corrupted[127] ^= 0x01;
    assert!(matches!(
        PublicKey::from_consensus_commitment(&corrupted, 7),
        Err(Error::Decode(_))
    ));
}

#[test]
fn encrypting_under_known_key() {
    let mut rng = StdRng::seed_from_u64(0x7e57);
    let pk = PublicKey::from_bytes(&hex::decode(PUBLIC_KEY_N7).unwrap()).unwrap();
    let message = b"a signed transaction that should stay private until inclusion";

    let ct = Encryptor::new().encrypt(&mut rng, &pk, message).unwrap();
    assert_eq!(ct.key.to_bytes().len(), 192);
    assert_eq!(ct.payload.len(), 64);

    let wire = Envelope::to_bytes(&ct, true);
    assert_eq!(wire.len(), 4 + 192 + 64);
    let parsed: HybridCiphertext = Envelope::from_bytes(&wire).unwrap();
    assert_eq!(parsed, ct);
}

/// Evaluates `coeffs[0] + coeffs[1] x + ...` at `x`.
fn evaluate(coeffs: &[Fr], x: u64) -> Fr {
    let x = Fr::from_u64(x);
    coeffs.iter().rev().fold(Fr::zero(), |acc, c| acc * x + c)
}

#[test]
fn quorum_decrypts_with_scaled_lagrange_coefficients() {
    let mut rng = StdRng::seed_from_u64(0x5ca1e);
    let params = ConsensusParameters::from_consensus_size(7).unwrap();

    // dealer polynomial of degree t - 1; members hold f(i), the DKG publishes f(0) * G1
    let coeffs: Vec<Fr> = (0..params.threshold)
        .map(|_| <Fr as FieldElement>::random(&mut rng))
        .collect();
    let commitment = AggregatedCommitment::from_point(&G1::generator().mul_scalar(&coeffs[0]));
    let pk = PublicKey::from_aggregated_commitment(commitment.as_bytes(), &params).unwrap();

    let message = b"only five of seven can read this";
    let ct = Encryptor::new().encrypt(&mut rng, &pk, message).unwrap();

    let quorum = [2u64, 3, 5, 6, 7];
    let shares: Vec<DecryptionShare> = quorum
        .iter()
        .map(|&id| DecryptionShare {
            participant_id: id,
            share: ct.key.r1.mul_scalar(&evaluate(&coeffs, id)),
        })
        .collect();

    let scaler = ScalerCache::global().get_or_solve(&params).unwrap();
    let weights = scaled_lagrange_coefficients(&quorum, &scaler).unwrap();

    // sum of w_i * f(i) * R1 = D * f(0) * r * G1 = r * pk
    let mask = shares
        .iter()
        .zip(&weights)
        .fold(G1::identity(), |acc, (share, w)| {
            acc.add(&share.share.mul_scalar(&Fr::from_bigint(w)))
        });
    let ephemeral = ct.key.c.sub(&mask);

    let plaintext = Aes256CbcEncryption::new()
        .decrypt(&ephemeral.encode_uncompressed(), &ct.payload)
        .unwrap();
    assert_eq!(plaintext, message);
}
