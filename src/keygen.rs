// RSA Key Generation
// Prime search, exponent selection, and the key pair types

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use rand::Rng;

use crate::bigint::{is_probable_prime, mod_inverse, random_bits};
use crate::error::{CryptoError, Result};

/// Fermat rounds per prime candidate
const PRIME_TEST_ROUNDS: u32 = 5;

/// One half of an RSA key pair: an (exponent, modulus) pair
///
/// Encryption consumes the public half and decryption the private half;
/// both have the same shape and the block engine accepts either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKey {
    pub exponent: BigUint,
    pub modulus: BigUint,
}

/// RSA key pair
///
/// Invariants established by `generate_keypair`: n = p*q for two distinct
/// primes, e*d = 1 (mod phi(n)), gcd(e, phi(n)) = 1.
#[derive(Debug, Clone)]
pub struct KeyPair {
    pub public: RsaKey,
    pub private: RsaKey,
}

impl RsaKey {
    /// Bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.modulus.bits()
    }

    /// Plaintext and ciphertext block widths in bytes
    ///
    /// Plaintext blocks are floor(bits/8) wide so block integers stay below
    /// the modulus whenever the bit length is not a multiple of 8;
    /// ciphertext blocks are ceil(bits/8) wide to hold any value below it.
    pub fn block_widths(&self) -> Result<(usize, usize)> {
        let bits = self.bit_length();
        let plain = (bits / 8) as usize;
        let cipher = ((bits + 7) / 8) as usize;
        if plain == 0 {
            return Err(CryptoError::ModulusTooSmall);
        }
        Ok((plain, cipher))
    }

    /// Encrypt a byte buffer under this key
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        crate::encrypt::encrypt_bytes(plaintext, self)
    }

    /// Decrypt a byte buffer under this key
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        crate::decrypt::decrypt_bytes(ciphertext, self)
    }
}

// Decimal interchange form: "<exponent> <modulus>"
impl fmt::Display for RsaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.exponent, self.modulus)
    }
}

impl FromStr for RsaKey {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace();
        let exponent = parts.next().and_then(|t| BigUint::from_str(t).ok());
        let modulus = parts.next().and_then(|t| BigUint::from_str(t).ok());
        match (exponent, modulus, parts.next()) {
            (Some(exponent), Some(modulus), None) => Ok(RsaKey { exponent, modulus }),
            _ => Err(CryptoError::MalformedKeyText),
        }
    }
}

/// Generate an RSA key pair with the requested modulus bit length
///
/// `bits` must be even and at least 16 so the two prime halves are
/// non-degenerate.
pub fn generate_keypair<R: Rng>(rng: &mut R, bits: u32) -> Result<KeyPair> {
    if bits < 16 || bits % 2 != 0 {
        return Err(CryptoError::InvalidKeyLength { bits });
    }

    let half_bits = u64::from(bits / 2);

    // Step 1: two distinct primes of bits/2 each
    let p = generate_prime(rng, half_bits);
    let mut q = generate_prime(rng, half_bits);
    while q == p {
        q = generate_prime(rng, half_bits);
    }

    // Step 2: modulus and totient
    let n = &p * &q;
    let phi = (&p - 1u8) * (&q - 1u8);

    // Step 3: public exponent
    let e = select_public_exponent(&phi)?;

    // Step 4: private exponent
    let d = mod_inverse(&e, &phi)?;

    Ok(KeyPair {
        public: RsaKey {
            exponent: e,
            modulus: n.clone(),
        },
        private: RsaKey {
            exponent: d,
            modulus: n,
        },
    })
}

/// Rejection-sample a probable prime of exactly `bits` bits
fn generate_prime<R: Rng>(rng: &mut R, bits: u64) -> BigUint {
    loop {
        let mut candidate = random_bits(rng, bits);
        if candidate.is_even() {
            candidate += 1u8;
        }
        if is_probable_prime(rng, &candidate, PRIME_TEST_ROUNDS) {
            return candidate;
        }
    }
}

/// 65537 when coprime with phi, otherwise the smallest coprime odd value
///
/// The scan is bounded by phi so exhaustion is a reported error rather
/// than a hang.
fn select_public_exponent(phi: &BigUint) -> Result<BigUint> {
    let e = BigUint::from(65_537u32);
    if e.gcd(phi).is_one() {
        return Ok(e);
    }

    let mut i = BigUint::from(3u8);
    while &i < phi {
        if i.gcd(phi).is_one() {
            return Ok(i);
        }
        i += 2u8;
    }

    Err(CryptoError::NoCoprimeExponentFound)
}
