//! Systematic Reed-Solomon encoding and bounded-distance decoding
//!
//! ## Overview
//!
//! An RS(n, k) code over GF(2^m) with n = 2^m - 1 carries k message
//! symbols per codeword and corrects up to t = (n - k) / 2 corrupted
//! symbols. Codewords are systematic: the low n - k positions hold the
//! parity remainder, the high k positions hold the message unchanged.
//!
//! Decoding runs the classic pipeline: syndrome evaluation, the extended
//! Euclidean key-equation solver for the error-locator polynomial, a
//! brute-force root search over the field for the error positions, and a
//! Gauss-Jordan solve of the syndrome system for the error magnitudes.
//!
//! ## Limits
//!
//! A block with more than t corrupted symbols is beyond the design
//! distance. Decoding then either fails with an error or converges on a
//! *different* nearby codeword and returns a wrong message with no
//! indication beyond `errors_found`. That silent miscorrection is
//! inherent to bounded-distance decoding.

use log::{debug, trace};

use crate::error::{CodecError, CodecResult};
use crate::galois::GaloisField;
use crate::matrix::Matrix;
use crate::poly;

/// Outcome of a successful decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The corrected k message symbols.
    pub message: Vec<u32>,
    /// Number of symbol errors located and repaired.
    pub errors_found: usize,
    /// Codeword positions that were repaired.
    pub error_locations: Vec<usize>,
}

/// A Reed-Solomon encoder/decoder bound to one field and message length.
///
/// Immutable after construction; decode diagnostics travel in the
/// [`Decoded`] result, so one codec can be shared freely.
pub struct ReedSolomonCodec {
    gf: GaloisField,
    n: usize,
    k: usize,
    t: usize,
    gx: Vec<u32>,
}

impl ReedSolomonCodec {
    /// Build the codec for messages of `k` symbols over `gf`.
    ///
    /// The generator polynomial `gx = Π (X + α^i)` for i in [1, n - k]
    /// is monic of degree n - k and has the first n - k powers of α as
    /// roots.
    ///
    /// # Panics
    ///
    /// Panics if `k >= n`; a code with no parity symbols is a
    /// configuration error, not a runtime condition.
    pub fn new(gf: GaloisField, k: usize) -> Self {
        let n = gf.n();
        assert!(k < n, "message length {k} must be below the block length {n}");
        let t = (n - k) / 2;

        let mut gx = vec![gf.alpha_to(1), 1];
        for i in 2..=(n - k) as i64 {
            gx = poly::mul(&gf, &gx, &[gf.alpha_to(i), 1]);
        }
        debug!(
            "RS({n},{k}) over GF(2^{}): t = {t}, generator degree {}",
            gf.m(),
            poly::degree(&gx)
        );

        Self { gf, n, k, t, gx }
    }

    /// Codeword length n.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Message length k.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Maximum number of correctable symbol errors.
    pub fn t(&self) -> usize {
        self.t
    }

    /// The generator polynomial, lowest degree first.
    pub fn generator(&self) -> &[u32] {
        &self.gx
    }

    /// The underlying field.
    pub fn field(&self) -> &GaloisField {
        &self.gf
    }

    /// Encode up to k message symbols into an n-symbol codeword.
    ///
    /// The message is shifted up by n - k positions and its remainder
    /// modulo the generator becomes the parity block, so the returned
    /// codeword is a multiple of `gx`.
    pub fn encode(&self, mx: &[u32]) -> CodecResult<Vec<u32>> {
        if mx.len() > self.k {
            return Err(CodecError::MessageTooLong {
                len: mx.len(),
                max: self.k,
            });
        }

        let shifted = poly::mul_by_monomial(&self.gf, mx, 1, self.n - self.k);
        let parity = poly::rem(&self.gf, &shifted, &self.gx)?;

        let mut cx = vec![0u32; self.n];
        cx[..shifted.len()].copy_from_slice(&shifted);
        cx[..parity.len()].copy_from_slice(&parity);
        Ok(cx)
    }

    /// Decode a received block of at most n symbols, correcting up to t
    /// symbol errors. Shorter blocks are treated as having zero
    /// high-order coefficients.
    pub fn decode(&self, rx: &[u32]) -> CodecResult<Decoded> {
        if rx.len() > self.n {
            return Err(CodecError::BlockTooLong {
                len: rx.len(),
                max: self.n,
            });
        }
        let mut block: Vec<u32> = rx.iter().map(|&c| self.gf.reduce(c)).collect();
        block.resize(self.n, 0);

        // Syndrome components S_i = Rx(α^(i+1)); all zero means the block
        // is already a codeword.
        let syndromes: Vec<u32> = (0..self.n - self.k)
            .map(|i| poly::eval(&self.gf, &block, self.gf.alpha_to(i as i64 + 1)))
            .collect();
        if syndromes.iter().all(|&s| s == 0) {
            trace!("all syndromes zero, no correction needed");
            return Ok(Decoded {
                message: block[self.n - self.k..].to_vec(),
                errors_found: 0,
                error_locations: Vec::new(),
            });
        }

        let locator = self.solve_key_equation(&syndromes)?;
        let errors = poly::degree(&locator);
        trace!("error locator degree {errors}");
        if errors == 0 || errors > self.t {
            // A nonzero syndrome with a degenerate locator means the
            // block is corrupted beyond the design distance
            debug!("locator degree {errors} unusable for t = {}", self.t);
            return Err(crate::error::FieldError::NonSolvableSystem.into());
        }

        // Roots of the reciprocal locator mark the error positions:
        // rev(α^i) = 0 puts an error at codeword position i.
        let mut rev: Vec<u32> = locator[..=errors].to_vec();
        rev.reverse();
        let mut locations = Vec::with_capacity(errors);
        let mut locators = Vec::with_capacity(errors);
        for i in 0..self.n {
            let z = self.gf.alpha_to(i as i64);
            if poly::eval(&self.gf, &rev, z) == 0 {
                locations.push(i);
                locators.push(z);
                if locations.len() == errors {
                    break;
                }
            }
        }
        if locations.len() != errors {
            debug!(
                "locator degree {errors} but only {} roots in the field",
                locations.len()
            );
            return Err(crate::error::FieldError::NonSolvableSystem.into());
        }

        // Magnitudes y_j from the syndrome equations
        // S_i = Σ_j y_j * z_j^(i+1), one row per i in [0, errors).
        let mut system = Matrix::zero(errors, errors + 1);
        for i in 0..errors {
            for (j, &z) in locators.iter().enumerate() {
                system.set(i, j, self.gf.pow(z, i as i64 + 1));
            }
            system.set(i, errors, syndromes[i]);
        }
        let magnitudes = system.solve(&self.gf)?;

        // XOR the error polynomial into the received block
        for (&pos, &y) in locations.iter().zip(&magnitudes) {
            block[pos] = self.gf.add(block[pos], y);
        }
        debug!("corrected {errors} symbol error(s) at positions {locations:?}");

        Ok(Decoded {
            message: block[self.n - self.k..].to_vec(),
            errors_found: errors,
            error_locations: locations,
        })
    }

    /// Extended Euclidean solver for the key equation
    /// `o(x) * S(x) ≡ r(x) (mod X^2t)`.
    ///
    /// Starts from `r_old = X^2t`, `r = S(x)` and iterates
    /// `(r_old, r) <- (r, r_old mod r)` while tracking the Bézout
    /// coefficient of S; iteration continues while `degree(r) >= t`, so
    /// it stops at the first remainder of degree below t and the final
    /// `o` is (up to a scalar) the error-locator polynomial. The `>= t`
    /// boundary keeps patterns with exactly t errors correctable.
    fn solve_key_equation(&self, syndromes: &[u32]) -> CodecResult<Vec<u32>> {
        let mut r_old = vec![0u32; 2 * self.t + 1];
        r_old[2 * self.t] = 1;
        let mut r = syndromes.to_vec();

        let mut o_old: Vec<u32> = vec![0];
        let mut o: Vec<u32> = vec![1];

        while !poly::is_zero(&r) && poly::degree(&r) >= self.t {
            let (q, remainder) = poly::div_rem(&self.gf, &r_old, &r)?;
            r_old = std::mem::replace(&mut r, remainder);
            let next = poly::add(&self.gf, &o_old, &poly::mul(&self.gf, &q, &o));
            o_old = std::mem::replace(&mut o, next);
        }
        Ok(o)
    }
}
