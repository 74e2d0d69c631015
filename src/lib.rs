//! Reed-Solomon forward error correction over binary Galois fields
//!
//! This crate implements the algebraic engine of a Reed-Solomon codec:
//! a GF(2^m) field with a table/on-the-fly arithmetic strategy, polynomial
//! algebra over that field, a Gauss-Jordan solver, and a systematic
//! RS(n, k) encoder/decoder correcting up to `t = (n - k) / 2` symbol
//! errors per block.
//!
//! There is deliberately no transport, storage or CLI surface here; the
//! codec is consumed as a library by whatever layer moves the blocks.
//!
//! # Example
//!
//! ```
//! use rsfec::{GaloisField, ReedSolomonCodec};
//!
//! // GF(16) with fx = X^4 + X + 1, RS(15, 9): corrects up to 3 errors
//! let gf = GaloisField::new(4, 0b10011).unwrap();
//! let codec = ReedSolomonCodec::new(gf, 9);
//!
//! let message = vec![3, 7, 0, 1, 14, 2, 5, 8, 9];
//! let mut block = codec.encode(&message).unwrap();
//! block[4] ^= 0b1010; // corrupt one symbol in transit
//!
//! let decoded = codec.decode(&block).unwrap();
//! assert_eq!(decoded.message, message);
//! assert_eq!(decoded.errors_found, 1);
//! assert_eq!(decoded.error_locations, vec![4]);
//! ```

pub mod codec;
pub mod error;
pub mod galois;
pub mod matrix;
pub mod poly;

pub use codec::{Decoded, ReedSolomonCodec};
pub use error::{CodecError, CodecResult, FieldError, FieldResult};
pub use galois::GaloisField;
