// Block Padding
// Length-valued trailing padding to a block boundary

use crate::error::{CryptoError, Result};

/// Pad `data` to a multiple of `block_size`
///
/// The pad length is always in [1, block_size]: already-aligned input gains
/// a full extra block so removal is unambiguous. Every pad byte holds the
/// pad length itself.
pub fn add_padding(data: &[u8], block_size: usize) -> Vec<u8> {
    // The pad length must fit one byte
    debug_assert!((1..=255).contains(&block_size));

    let pad_len = block_size - (data.len() % block_size);
    let mut padded = data.to_vec();
    padded.resize(data.len() + pad_len, pad_len as u8);
    padded
}

/// Strip the trailing padding written by `add_padding`
///
/// Empty input passes through unchanged.
pub fn remove_padding(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let last = data[data.len() - 1];
    let pad_len = last as usize;
    if pad_len == 0 || pad_len > data.len() {
        return Err(CryptoError::InvalidPadding);
    }

    let (body, tail) = data.split_at(data.len() - pad_len);
    if tail.iter().any(|&b| b != last) {
        return Err(CryptoError::InvalidPadding);
    }

    Ok(body.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_short_block() {
        let padded = add_padding(b"TEST", 8);
        assert_eq!(padded.len(), 8);
        assert_eq!(&padded[..4], b"TEST");
        assert_eq!(&padded[4..], &[4, 4, 4, 4]);

        assert_eq!(remove_padding(&padded).unwrap(), b"TEST");
    }

    #[test]
    fn test_aligned_input_gains_full_block() {
        let padded = add_padding(&[9, 9, 9, 9], 4);
        assert_eq!(padded, vec![9, 9, 9, 9, 4, 4, 4, 4]);
    }

    #[test]
    fn test_roundtrip() {
        for block_size in [1usize, 3, 5, 8, 16] {
            for len in 0..3 * block_size {
                let data: Vec<u8> = (0..len).map(|i| (i * 31 % 251) as u8).collect();
                let padded = add_padding(&data, block_size);
                assert_eq!(padded.len() % block_size, 0);
                assert_eq!(remove_padding(&padded).unwrap(), data, "len {}", len);
            }
        }
    }

    #[test]
    fn test_empty_input_passes_through() {
        assert_eq!(remove_padding(&[]).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_rejects_zero_pad_byte() {
        assert_eq!(remove_padding(&[1, 2, 0]), Err(CryptoError::InvalidPadding));
    }

    #[test]
    fn test_rejects_overlong_pad() {
        assert_eq!(remove_padding(&[5]), Err(CryptoError::InvalidPadding));
        assert_eq!(remove_padding(&[1, 9]), Err(CryptoError::InvalidPadding));
    }

    #[test]
    fn test_rejects_inconsistent_tail() {
        assert_eq!(
            remove_padding(&[1, 2, 3]),
            Err(CryptoError::InvalidPadding)
        );
        assert_eq!(
            remove_padding(&[7, 2, 3, 3, 2, 3]),
            Err(CryptoError::InvalidPadding)
        );
    }
}
