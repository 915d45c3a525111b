//! Curve arithmetic abstractions and the blstrs implementation.
//!
//! This module provides trait abstractions for the group operations the
//! encryption scheme relies on, so that keys and ciphertexts are written
//! against traits rather than a concrete curve library.
//!
//! # Architecture
//!
//! - **[`field`]**: Scalar field operations (Fr) - sampling, encoding, reduction of exact integers
//! - **[`group`]**: Elliptic curve point operations (G1, G2) - addition, negation, scalar
//!   multiplication and canonical encodings
//! - **[`backend`]**: The [`CurveBackend`] trait bundling Fr, G1 and G2
//!
//! # Backend Support
//!
//! | Backend | Curve | Status |
//! |---------|-------|--------|
//! | blstrs  | BLS12-381 | Stable |
//!
//! # Example
//!
//! ```rust
//! use rand::thread_rng;
//! use tpke::{CurveBackend, CurvePoint, DefaultBackend, FieldElement};
//!
//! let mut rng = thread_rng();
//! let scalar = <DefaultBackend as CurveBackend>::Scalar::random(&mut rng);
//!
//! type G1 = <DefaultBackend as CurveBackend>::G1;
//! let point = G1::generator().mul_scalar(&scalar);
//! assert_ne!(point, G1::identity());
//! ```

mod field;
pub use field::*;

mod group;
pub use group::*;

mod backend;
pub use backend::*;
