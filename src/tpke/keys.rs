use core::fmt;

use tracing::{debug, instrument};

use crate::{
    ConsensusParameters, CurveBackend, CurvePoint, DefaultBackend, G1, Scaler, ScalerCache,
    errors::Error,
};

const COMMITMENT_SIZE: usize = 128;
const WORD: usize = 64;
const COORDINATE: usize = 48;
const PAD: usize = WORD - COORDINATE;

/// Raw aggregated commitment published by the DKG.
///
/// The 128-byte layout stores each 48-byte big-endian coordinate of a G1
/// point right-aligned in a 64-byte word:
///
/// ```text
/// [0, 16)    padding
/// [16, 64)   x
/// [64, 80)   padding
/// [80, 128)  y
/// ```
///
/// Padding bytes are ignored on decode.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct AggregatedCommitment([u8; COMMITMENT_SIZE]);

impl AggregatedCommitment {
    /// Encoded length in bytes.
    pub const SIZE: usize = COMMITMENT_SIZE;

    /// Lays out a G1 point with zeroed padding.
    pub fn from_point(point: &G1) -> Self {
        let raw = point.encode_uncompressed();
        let (x, y) = raw.split_at(COORDINATE);

        let mut bytes = [0u8; COMMITMENT_SIZE];
        bytes[PAD..WORD].copy_from_slice(x);
        bytes[WORD + PAD..].copy_from_slice(y);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; COMMITMENT_SIZE] {
        &self.0
    }

    /// The `x || y` uncompressed point encoding with padding stripped.
    pub fn coordinates(&self) -> [u8; 2 * COORDINATE] {
        let mut out = [0u8; 2 * COORDINATE];
        out[..COORDINATE].copy_from_slice(&self.0[PAD..WORD]);
        out[COORDINATE..].copy_from_slice(&self.0[WORD + PAD..]);
        out
    }

    /// Decodes the committed point, validating curve and subgroup membership.
    pub fn decode_point<B: CurveBackend>(&self) -> Result<B::G1, Error> {
        Ok(B::G1::decode_uncompressed(&self.coordinates())?)
    }
}

impl TryFrom<&[u8]> for AggregatedCommitment {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; COMMITMENT_SIZE] = bytes.try_into().map_err(|_| {
            Error::InvalidInput(format!(
                "aggregated commitment must be {} bytes, got {}",
                Self::SIZE,
                bytes.len()
            ))
        })?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for AggregatedCommitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AggregatedCommitment(")?;
        write_hex(f, &self.0)?;
        write!(f, ")")
    }
}

/// Public key that encryptions target.
///
/// Wraps the DKG's aggregated commitment multiplied by the integer scaler, so
/// that a committee combining shares with the scaled Lagrange coefficients of
/// [`scaled_lagrange_coefficients`](crate::scaled_lagrange_coefficients)
/// recovers the matching secret.
///
/// # Example
///
/// ```rust
/// use tpke::PublicKey;
///
/// let raw = [
///     0xa5, 0xaa, 0x18, 0x8d, 0x1c, 0x60, 0xa7, 0x17, 0x3e, 0x59, 0xfe, 0x49, 0xb6, 0x8b, 0x96,
///     0x99, 0x99, 0xe7, 0x0a, 0xa4, 0xc1, 0xac, 0xb7, 0x6c, 0x5a, 0x3d, 0xd2, 0xad, 0x0d, 0x19,
///     0xa8, 0x59, 0xb1, 0xa2, 0x75, 0x9e, 0x39, 0x95, 0xce, 0x1c, 0xec, 0xcd, 0xea, 0x5a, 0x57,
///     0xfb, 0xf6, 0x37,
/// ];
/// let key = PublicKey::from_bytes(&raw)?;
/// assert_eq!(key.to_bytes(), raw);
/// # Ok::<(), tpke::Error>(())
/// ```
pub struct ThresholdPublicKey<B: CurveBackend = DefaultBackend> {
    point: B::G1,
}

impl<B: CurveBackend> ThresholdPublicKey<B> {
    /// Wraps an already scaled key point.
    pub fn from_point(point: B::G1) -> Self {
        Self { point }
    }

    pub fn point(&self) -> &B::G1 {
        &self.point
    }

    /// Decodes a compressed G1 encoding.
    pub fn from_bytes(raw: &[u8]) -> Result<Self, Error> {
        let point = B::G1::decode_compressed(raw)?;
        Ok(Self { point })
    }

    /// Compressed G1 encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.point.encode_compressed()
    }

    /// Derives the encryption key from a raw aggregated commitment.
    ///
    /// The commitment is decoded and multiplied by the scaler for `params`,
    /// which is taken from the process-wide [`ScalerCache`] and solved on a
    /// miss.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] if `commitment` is not 128 bytes
    /// - [`Error::Decode`] if the coordinates are not a valid G1 point
    /// - [`Error::InvalidConfig`] if `params` is inconsistent
    #[instrument(
        level = "info",
        skip_all,
        fields(parties = params.parties, threshold = params.threshold)
    )]
    pub fn from_aggregated_commitment(
        commitment: &[u8],
        params: &ConsensusParameters,
    ) -> Result<Self, Error> {
        let commitment = AggregatedCommitment::try_from(commitment)?;
        let point = commitment.decode_point::<B>()?;
        params.validate()?;
        let scaler = ScalerCache::global().get_or_solve(params)?;
        debug!(
            scaler = %scaler,
            bft_quorum = params.is_consensus_quorum(),
            "scaling aggregated commitment"
        );
        Ok(Self::scaled(point, &scaler))
    }

    /// Same as [`Self::from_aggregated_commitment`] with a caller-provided scaler.
    pub fn from_aggregated_commitment_with_scaler(
        commitment: &[u8],
        scaler: &Scaler,
    ) -> Result<Self, Error> {
        let commitment = AggregatedCommitment::try_from(commitment)?;
        let point = commitment.decode_point::<B>()?;
        Ok(Self::scaled(point, scaler))
    }

    /// Uses the BFT threshold `n - floor((n - 1) / 3)` for `parties` nodes.
    pub fn from_consensus_commitment(commitment: &[u8], parties: usize) -> Result<Self, Error> {
        let params = ConsensusParameters::from_consensus_size(parties)?;
        Self::from_aggregated_commitment(commitment, &params)
    }

    fn scaled(point: B::G1, scaler: &Scaler) -> Self {
        Self {
            point: point.mul_scalar(&scaler.to_field::<B::Scalar>()),
        }
    }
}

impl<B: CurveBackend> Clone for ThresholdPublicKey<B> {
    fn clone(&self) -> Self {
        Self { point: self.point }
    }
}

impl<B: CurveBackend> PartialEq for ThresholdPublicKey<B> {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl<B: CurveBackend> Eq for ThresholdPublicKey<B> {}

impl<B: CurveBackend> fmt::Debug for ThresholdPublicKey<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ThresholdPublicKey({self})")
    }
}

/// Lowercase hex of the compressed encoding.
impl<B: CurveBackend> fmt::Display for ThresholdPublicKey<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.to_bytes())
    }
}

fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    bytes.iter().try_for_each(|b| write!(f, "{b:02x}"))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{FieldElement, Fr, PublicKey};

    fn random_point(seed: u64) -> G1 {
        let mut rng = StdRng::seed_from_u64(seed);
        G1::generator().mul_scalar(&<Fr as FieldElement>::random(&mut rng))
    }

    #[test]
    fn commitment_layout_places_coordinates() {
        let point = random_point(3);
        let commitment = AggregatedCommitment::from_point(&point);
        let raw = point.encode_uncompressed();

        let bytes = commitment.as_bytes();
        assert!(bytes[..16].iter().all(|b| *b == 0));
        assert!(bytes[64..80].iter().all(|b| *b == 0));
        assert_eq!(&bytes[16..64], &raw[..48]);
        assert_eq!(&bytes[80..], &raw[48..]);
        assert_eq!(commitment.decode_point::<DefaultBackend>().unwrap(), point);
    }

    #[test]
    fn commitment_padding_is_ignored() {
        let point = random_point(4);
        let mut bytes = *AggregatedCommitment::from_point(&point).as_bytes();
        bytes[0] = 0xaa;
        bytes[70] = 0x55;
        let commitment = AggregatedCommitment::try_from(&bytes[..]).unwrap();
        assert_eq!(commitment.decode_point::<DefaultBackend>().unwrap(), point);
    }

    #[test]
    fn commitment_length_is_checked() {
        let err = PublicKey::from_aggregated_commitment(
            &[0u8; 127],
            &ConsensusParameters::new(4, 3).unwrap(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(matches!(
            AggregatedCommitment::try_from(&[0u8; 129][..]),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn invalid_commitment_point_is_a_decode_error() {
        let mut bytes = [0u8; 128];
        bytes[63] = 1;
        bytes[127] = 1;
        let err =
            PublicKey::from_aggregated_commitment(&bytes, &ConsensusParameters::new(4, 3).unwrap())
                .unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn key_is_commitment_times_scaler() {
        let point = random_point(5);
        let commitment = AggregatedCommitment::from_point(&point);
        let params = ConsensusParameters::new(5, 3).unwrap();

        let key = PublicKey::from_aggregated_commitment(commitment.as_bytes(), &params).unwrap();
        assert_eq!(*key.point(), point.mul_scalar(&Fr::from_u64(24)));

        let scaler = Scaler::new(24u32.into()).unwrap();
        let same =
            PublicKey::from_aggregated_commitment_with_scaler(commitment.as_bytes(), &scaler)
                .unwrap();
        assert_eq!(key, same);
    }

    #[test]
    fn consensus_commitment_uses_bft_threshold() {
        let commitment = AggregatedCommitment::from_point(&random_point(6));
        let a = PublicKey::from_consensus_commitment(commitment.as_bytes(), 7).unwrap();
        let b = PublicKey::from_aggregated_commitment(
            commitment.as_bytes(),
            &ConsensusParameters::new(7, 5).unwrap(),
        )
        .unwrap();
        assert_eq!(a, b);
        assert!(PublicKey::from_consensus_commitment(commitment.as_bytes(), 0).is_err());
    }

    #[test]
    fn bytes_roundtrip_and_display() {
        let key = PublicKey::from_point(random_point(7));
        let bytes = key.to_bytes();
        assert_eq!(bytes.len(), 48);
        assert_eq!(PublicKey::from_bytes(&bytes).unwrap(), key);

        let hex = key.to_string();
        assert_eq!(hex.len(), 96);
        assert_eq!(hex, hex.to_lowercase());
        assert!(PublicKey::from_bytes(&bytes[..47]).is_err());
    }
}
