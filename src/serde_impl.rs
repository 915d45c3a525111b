//! Serde serialization support for keys, ciphertexts and scalers.
//!
//! # Serialization Strategy
//!
//! - **Curve Points** (G1, G2): compressed encodings via
//!   [`CurvePoint::encode_compressed`], validated on the way back in
//! - **Public keys**: a single byte string (the compressed G1 encoding)
//! - **Scalers**: decimal strings, since they routinely exceed `u64`
//!
//! # Example
//!
//! ```rust
//! use tpke::{CurvePoint, G1, PublicKey};
//!
//! let pk = PublicKey::from_point(G1::generator());
//! let json = serde_json::to_string(&pk).unwrap();
//! let back: PublicKey = serde_json::from_str(&json).unwrap();
//! assert_eq!(back, pk);
//! ```

use num_bigint::BigUint;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    CurveBackend, DecryptionShare, HybridCiphertext, KeyCiphertext, Scaler, ThresholdPublicKey,
    arith::{CurvePoint, FieldElement},
};

fn curve_point_from_bytes<C, F, E>(bytes: &[u8]) -> Result<C, E>
where
    C: CurvePoint<F>,
    F: FieldElement,
    E: de::Error,
{
    C::decode_compressed(bytes).map_err(E::custom)
}

impl<B: CurveBackend> Serialize for ThresholdPublicKey<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.to_bytes())
    }
}

impl<'de, B: CurveBackend> Deserialize<'de> for ThresholdPublicKey<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        let point = curve_point_from_bytes::<B::G1, B::Scalar, D::Error>(&bytes)?;
        Ok(ThresholdPublicKey::from_point(point))
    }
}

impl<B: CurveBackend> Serialize for KeyCiphertext<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("KeyCiphertext", 3)?;
        state.serialize_field("c", &self.c.encode_compressed())?;
        state.serialize_field("r1", &self.r1.encode_compressed())?;
        state.serialize_field("r2", &self.r2.encode_compressed())?;
        state.end()
    }
}

impl<'de, B: CurveBackend> Deserialize<'de> for KeyCiphertext<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct KeyCiphertextHelper {
            c: Vec<u8>,
            r1: Vec<u8>,
            r2: Vec<u8>,
        }

        let helper = KeyCiphertextHelper::deserialize(deserializer)?;

        Ok(KeyCiphertext {
            c: curve_point_from_bytes::<B::G1, B::Scalar, D::Error>(&helper.c)?,
            r1: curve_point_from_bytes::<B::G1, B::Scalar, D::Error>(&helper.r1)?,
            r2: curve_point_from_bytes::<B::G2, B::Scalar, D::Error>(&helper.r2)?,
        })
    }
}

impl<B: CurveBackend> Serialize for HybridCiphertext<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("HybridCiphertext", 2)?;
        state.serialize_field("key", &self.key)?;
        state.serialize_field("payload", &self.payload)?;
        state.end()
    }
}

impl<'de, B: CurveBackend> Deserialize<'de> for HybridCiphertext<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(bound(deserialize = ""))]
        struct HybridCiphertextHelper<B: CurveBackend> {
            key: KeyCiphertext<B>,
            payload: Vec<u8>,
        }

        let helper = HybridCiphertextHelper::<B>::deserialize(deserializer)?;
        Ok(HybridCiphertext {
            key: helper.key,
            payload: helper.payload,
        })
    }
}

impl<B: CurveBackend> Serialize for DecryptionShare<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("DecryptionShare", 2)?;
        state.serialize_field("participant_id", &self.participant_id)?;
        state.serialize_field("share", &self.share.encode_compressed())?;
        state.end()
    }
}

impl<'de, B: CurveBackend> Deserialize<'de> for DecryptionShare<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct DecryptionShareHelper {
            participant_id: u64,
            share: Vec<u8>,
        }

        let helper = DecryptionShareHelper::deserialize(deserializer)?;
        Ok(DecryptionShare {
            participant_id: helper.participant_id,
            share: curve_point_from_bytes::<B::G1, B::Scalar, D::Error>(&helper.share)?,
        })
    }
}

impl Serialize for Scaler {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.value().to_str_radix(10))
    }
}

impl<'de> Deserialize<'de> for Scaler {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        let value = BigUint::parse_bytes(text.as_bytes(), 10)
            .ok_or_else(|| de::Error::custom("scaler is not a decimal integer"))?;
        Scaler::new(value).map_err(de::Error::custom)
    }
}
