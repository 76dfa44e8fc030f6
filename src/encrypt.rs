// RSA Encryption
// Streams plaintext through the modulus as fixed-width big-endian blocks

use num_bigint::BigUint;

use crate::bigint::{mod_pow, to_fixed_bytes_be};
use crate::error::{CryptoError, Result};
use crate::keygen::RsaKey;
use crate::padding::add_padding;

/// Encrypt `plaintext` under `key`, returning concatenated ciphertext blocks
///
/// The input is padded to a whole number of plaintext blocks first, so the
/// output always holds at least one ciphertext block.
pub fn encrypt_bytes(plaintext: &[u8], key: &RsaKey) -> Result<Vec<u8>> {
    let (plain_width, cipher_width) = key.block_widths()?;

    let padded = add_padding(plaintext, plain_width);
    let mut out = Vec::with_capacity(padded.len() / plain_width * cipher_width);

    for block in padded.chunks(plain_width) {
        let m = BigUint::from_bytes_be(block);
        if m >= key.modulus {
            return Err(CryptoError::BlockTooLarge);
        }
        let c = mod_pow(&m, &key.exponent, &key.modulus);
        out.extend_from_slice(&to_fixed_bytes_be(&c, cipher_width));
    }

    Ok(out)
}
