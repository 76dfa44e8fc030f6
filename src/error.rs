// Engine Errors
// Every failure the engine reports to its caller

use thiserror::Error;

/// Errors reported by the RSA engine
///
/// All variants are recoverable at the caller's file-processing boundary;
/// on failure mid-stream the whole output buffer is invalid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// The exponent has no inverse modulo phi(n)
    #[error("modular inverse does not exist")]
    NoInverse,

    /// Trailing padding bytes inconsistent, or pad length out of range
    #[error("invalid padding")]
    InvalidPadding,

    /// A block integer is not strictly less than the modulus
    #[error("block value exceeds modulus")]
    BlockTooLarge,

    /// Ciphertext length is not a whole number of ciphertext blocks
    #[error("ciphertext length {len} is not a multiple of block width {width}")]
    MisalignedCiphertext { len: usize, width: usize },

    /// The bounded exponent scan found no odd value below phi coprime with it
    #[error("no coprime public exponent found")]
    NoCoprimeExponentFound,

    /// Requested key size cannot produce two equal prime halves
    #[error("key bit length {bits} must be even and at least 16")]
    InvalidKeyLength { bits: u32 },

    /// The modulus is too small to hold even a one-byte plaintext block
    #[error("modulus too small for block processing")]
    ModulusTooSmall,

    /// Key text did not parse as decimal `exponent modulus`
    #[error("malformed key text")]
    MalformedKeyText,
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, CryptoError>;
