// RSA Decryption
// Reverses the block stream, then strips padding once at the end

use num_bigint::BigUint;

use crate::bigint::{mod_pow, to_fixed_bytes_be};
use crate::error::{CryptoError, Result};
use crate::keygen::RsaKey;
use crate::padding::remove_padding;

/// Decrypt concatenated ciphertext blocks produced by `encrypt_bytes`
///
/// The padding spans only the final plaintext block, so it is removed once
/// over the accumulated buffer rather than per block.
pub fn decrypt_bytes(ciphertext: &[u8], key: &RsaKey) -> Result<Vec<u8>> {
    let (plain_width, cipher_width) = key.block_widths()?;

    if ciphertext.len() % cipher_width != 0 {
        return Err(CryptoError::MisalignedCiphertext {
            len: ciphertext.len(),
            width: cipher_width,
        });
    }

    let mut buf = Vec::with_capacity(ciphertext.len() / cipher_width * plain_width);
    for block in ciphertext.chunks(cipher_width) {
        let c = BigUint::from_bytes_be(block);
        if c >= key.modulus {
            return Err(CryptoError::BlockTooLarge);
        }
        let m = mod_pow(&c, &key.exponent, &key.modulus);
        // A block that never came from encrypt_bytes can decrypt to a value
        // wider than the plaintext block; report it instead of truncating
        if m.bits() > plain_width as u64 * 8 {
            return Err(CryptoError::BlockTooLarge);
        }
        buf.extend_from_slice(&to_fixed_bytes_be(&m, plain_width));
    }

    remove_padding(&buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keygen::generate_keypair;
    use crate::rng;
    use crate::{process, Mode};

    // p = 151, q = 157: n = 23707 (15 bits), phi = 23400, e = 7, d = 3343
    fn fixed_private_key() -> RsaKey {
        RsaKey {
            exponent: BigUint::from(3343u32),
            modulus: BigUint::from(23707u32),
        }
    }

    #[test]
    fn test_known_answer() {
        let plaintext = decrypt_bytes(&hex::decode("160c0001").unwrap(), &fixed_private_key());
        assert_eq!(plaintext.unwrap(), b"A");
    }

    #[test]
    fn test_empty_ciphertext_yields_empty_plaintext() {
        assert_eq!(decrypt_bytes(b"", &fixed_private_key()).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_rejects_misaligned_ciphertext() {
        assert_eq!(
            decrypt_bytes(&[0u8; 3], &fixed_private_key()),
            Err(CryptoError::MisalignedCiphertext { len: 3, width: 2 })
        );
    }

    #[test]
    fn test_rejects_cipher_block_not_below_modulus() {
        assert_eq!(
            decrypt_bytes(&[0xFF, 0xFF], &fixed_private_key()),
            Err(CryptoError::BlockTooLarge)
        );
    }

    #[test]
    fn test_rejects_foreign_ciphertext_block() {
        // 18747 = 300^7 mod 23707; 300 does not fit the 1-byte plaintext
        // width, so this block cannot have come from encrypt_bytes
        assert_eq!(
            decrypt_bytes(&hex::decode("493b").unwrap(), &fixed_private_key()),
            Err(CryptoError::BlockTooLarge)
        );
    }

    #[test]
    fn test_roundtrip_with_generated_keys() {
        let mut rng = rng::from_seed(5);

        // The floor plaintext width guarantees block < modulus only when the
        // bit length is not a multiple of 8; regenerate until that holds
        let pair = loop {
            let pair = generate_keypair(&mut rng, 32).unwrap();
            if pair.public.bit_length() % 8 != 0 {
                break pair;
            }
        };

        let (plain_width, _) = pair.public.block_widths().unwrap();
        for len in [0, 1, 2, plain_width, 3 * plain_width + 1, 10 * plain_width - 1] {
            let message: Vec<u8> = (0..len).map(|i| (i * 37 % 256) as u8).collect();
            let ciphertext = pair.public.encrypt(&message).unwrap();
            assert_eq!(
                pair.private.decrypt(&ciphertext).unwrap(),
                message,
                "len {}",
                len
            );
        }
    }

    #[test]
    fn test_process_dispatch() {
        let public = RsaKey {
            exponent: BigUint::from(7u32),
            modulus: BigUint::from(23707u32),
        };
        let message = b"mode dispatch";
        let ciphertext = process(message, &public, Mode::Encrypt).unwrap();
        let plaintext = process(&ciphertext, &fixed_private_key(), Mode::Decrypt).unwrap();
        assert_eq!(plaintext, message);
    }
}
