//! Polynomial algebra over GF(2^m)
//!
//! Polynomials are slices of field elements, lowest-degree coefficient
//! first: `p[i]` is the coefficient of `X^i`. Terms whose index would
//! reach `n` wrap around to index mod n, since `X^n = 1` over the nonzero
//! elements of the field.
//!
//! Quotients and remainders come back trimmed to `degree + 1`
//! coefficients; a zero polynomial is the single coefficient `[0]`.

use crate::error::{FieldError, FieldResult};
use crate::galois::GaloisField;

/// Degree of the polynomial: index of the highest nonzero coefficient,
/// 0 for the zero polynomial.
pub fn degree(p: &[u32]) -> usize {
    p.iter().rposition(|&c| c != 0).unwrap_or(0)
}

/// True when every coefficient is zero.
pub fn is_zero(p: &[u32]) -> bool {
    p.iter().all(|&c| c == 0)
}

/// Elementwise field addition. Result length is the longer input, capped
/// at n; indexes past n fold back modulo n.
pub fn add(gf: &GaloisField, p: &[u32], q: &[u32]) -> Vec<u32> {
    let len = p.len().max(q.len()).min(gf.n());
    let mut out = vec![0u32; len];
    for term in [p, q] {
        for (i, &c) in term.iter().enumerate() {
            let i = if i >= gf.n() { i % gf.n() } else { i };
            out[i] = gf.add(out[i], c);
        }
    }
    out
}

/// Full convolution product. Result length `len(p) + len(q) - 1`, capped
/// at n with wrapped indexes folded in.
pub fn mul(gf: &GaloisField, p: &[u32], q: &[u32]) -> Vec<u32> {
    if p.is_empty() || q.is_empty() {
        return vec![0];
    }
    let len = (p.len() + q.len() - 1).min(gf.n());
    let mut out = vec![0u32; len];
    for (i, &a) in p.iter().enumerate() {
        if a == 0 {
            continue;
        }
        for (j, &b) in q.iter().enumerate() {
            if b == 0 {
                continue;
            }
            let idx = (i + j) % gf.n();
            out[idx] = gf.add(out[idx], gf.mul(a, b));
        }
    }
    out
}

/// Multiply `p` by the monomial `coef * X^shift` — a shifted, scaled
/// copy, used to align terms during long division and systematic
/// encoding.
pub fn mul_by_monomial(gf: &GaloisField, p: &[u32], coef: u32, shift: usize) -> Vec<u32> {
    let len = (p.len() + shift).min(gf.n());
    let mut out = vec![0u32; len.max(1)];
    for (i, &a) in p.iter().enumerate() {
        if a == 0 {
            continue;
        }
        let idx = (i + shift) % gf.n();
        out[idx] = gf.add(out[idx], gf.mul(a, coef));
    }
    out
}

/// Long division of `p` by `d`: repeatedly cancel the highest-degree term
/// of the running remainder with a scaled, shifted copy of the divisor.
/// Returns (quotient, remainder), both trimmed. Fails with `DivideByZero`
/// when the divisor is the zero polynomial.
pub fn div_rem(gf: &GaloisField, p: &[u32], d: &[u32]) -> FieldResult<(Vec<u32>, Vec<u32>)> {
    if is_zero(d) {
        return Err(FieldError::DivideByZero);
    }
    let dd = degree(d);
    let lead = d[dd];

    // Normalizing through add() folds any over-length input back under n
    let mut r = add(gf, p, &[]);
    let dr = degree(&r);
    let mut q = vec![0u32; dr.saturating_sub(dd) + 1];

    while !is_zero(&r) {
        let dr = degree(&r);
        if dr < dd {
            break;
        }
        // Quotient term that cancels the leading coefficient of r
        let term = gf.div(r[dr], lead)?;
        q[dr - dd] = gf.add(q[dr - dd], term);
        let cancel = mul_by_monomial(gf, d, term, dr - dd);
        r = add(gf, &r, &cancel);
    }

    trim(&mut q);
    trim(&mut r);
    Ok((q, r))
}

/// Quotient of polynomial long division.
pub fn div(gf: &GaloisField, p: &[u32], d: &[u32]) -> FieldResult<Vec<u32>> {
    Ok(div_rem(gf, p, d)?.0)
}

/// Remainder of polynomial long division.
pub fn rem(gf: &GaloisField, p: &[u32], d: &[u32]) -> FieldResult<Vec<u32>> {
    Ok(div_rem(gf, p, d)?.1)
}

/// Horner evaluation of `p` at the point `x`.
pub fn eval(gf: &GaloisField, p: &[u32], x: u32) -> u32 {
    let mut acc = 0u32;
    for &c in p.iter().rev() {
        acc = gf.add(gf.mul(acc, x), c);
    }
    acc
}

/// Drop trailing zero coefficients down to `degree + 1` entries.
fn trim(p: &mut Vec<u32>) {
    p.truncate(degree(p) + 1);
    if p.is_empty() {
        p.push(0);
    }
}
