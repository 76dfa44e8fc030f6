// RSA Big Integer Operations
// Number theory over num-bigint: modular arithmetic, primality, random draws

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::{One, Zero};
use num_integer::Integer;
use rand::Rng;

use crate::error::{CryptoError, Result};

/// Modular exponentiation: base^exp mod modulus
/// Square-and-multiply; modulus must be nonzero, result is in [0, modulus)
pub fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_one() {
        return BigUint::zero();
    }

    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}

/// Extended Euclidean Algorithm
/// Returns (g, x, y) such that a*x + b*y = g = gcd(a, b)
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if a.is_zero() {
        return (b.clone(), BigInt::zero(), BigInt::one());
    }

    let (g, x1, y1) = extended_gcd(&(b % a), a);
    let x = &y1 - (b / a) * &x1;

    (g, x, x1)
}

/// Compute the modular inverse: e^(-1) mod phi
/// Fails with NoInverse when gcd(e, phi) != 1
pub fn mod_inverse(e: &BigUint, phi: &BigUint) -> Result<BigUint> {
    let e = BigInt::from(e.clone());
    let phi = BigInt::from(phi.clone());

    let (g, x, _) = extended_gcd(&e, &phi);
    if !g.is_one() {
        return Err(CryptoError::NoInverse);
    }

    // Normalize the Bezout coefficient into [0, phi)
    let inv = ((x % &phi) + &phi) % &phi;
    inv.to_biguint().ok_or(CryptoError::NoInverse)
}

/// Fermat primality test with `rounds` random witnesses
///
/// Each round draws a witness a in [2, n-2] and requires a^(n-1) = 1 (mod n).
/// Carmichael numbers can pass every round, so the false-positive rate is
/// bounded by the witness count, not eliminated; `rounds` is the accuracy
/// knob.
pub fn is_probable_prime<R: Rng>(rng: &mut R, n: &BigUint, rounds: u32) -> bool {
    let two = BigUint::from(2u8);
    let three = BigUint::from(3u8);

    if n <= &BigUint::one() {
        return false;
    }
    // 3 is prime but leaves an empty witness range
    if n == &two || n == &three {
        return true;
    }
    if n.is_even() {
        return false;
    }

    let n_minus_one = n - 1u8;
    for _ in 0..rounds {
        // gen_biguint_range is half-open, so the bound n-1 yields [2, n-2]
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        if !mod_pow(&a, &n_minus_one, n).is_one() {
            return false;
        }
    }

    true
}

/// Random integer of exactly `bits` bits
/// Uniform draw with bit bits-1 forced to 1 to fix the magnitude
pub fn random_bits<R: Rng>(rng: &mut R, bits: u64) -> BigUint {
    rng.gen_biguint(bits) | (BigUint::one() << (bits - 1))
}

/// Big-endian encoding left-padded with zeros to exactly `width` bytes
/// Caller guarantees x < 256^width
pub fn to_fixed_bytes_be(x: &BigUint, width: usize) -> Vec<u8> {
    let bytes = x.to_bytes_be();
    let mut out = vec![0u8; width];
    let start = width.saturating_sub(bytes.len());
    out[start..].copy_from_slice(&bytes);
    out
}
