// RSA Engine - Main module file
// Arbitrary-precision key generation, Fermat primality testing, and
// block-oriented encryption/decryption keyed on an (exponent, modulus) pair

pub mod bigint;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod keygen;
pub mod padding;
pub mod rng;

pub use decrypt::decrypt_bytes;
pub use encrypt::encrypt_bytes;
pub use error::{CryptoError, Result};
pub use keygen::{generate_keypair, KeyPair, RsaKey};
pub use rng::EngineRng;

/// Direction of a `process` run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

/// Transform a byte buffer under `key` in the given direction
///
/// File I/O stays with the caller; the engine only maps buffers to buffers.
pub fn process(input: &[u8], key: &RsaKey, mode: Mode) -> Result<Vec<u8>> {
    match mode {
        Mode::Encrypt => encrypt_bytes(input, key),
        Mode::Decrypt => decrypt_bytes(input, key),
    }
}
