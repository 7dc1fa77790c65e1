//! Arithmetic shared by the encoder and the decoder.
//!
//! A group is four bytes read as a big-endian `u32` on one side and five
//! base-85 digits, most significant first, on the other.

pub const RADIX: u64 = 85;

/// Digit used to fill the missing positions of a short tail before decoding.
///
/// Filling with the largest digit rounds the tail value up, so that truncating
/// the decoded group gives back exactly the bytes the encoder zero-padded.
pub const MAX_DIGIT: u8 = 84;

pub fn encode_group(bytes: [u8; 4]) -> [u8; 5] {
    let mut value = u32::from_be_bytes(bytes) as u64;
    let mut digits = [0u8; 5];
    for digit in digits.iter_mut().rev() {
        *digit = (value % RADIX) as u8;
        value /= RADIX;
    }
    digits
}

/// Returns `None` when the digits describe a value above `u32::MAX`.
pub fn decode_group(digits: [u8; 5]) -> Option<u32> {
    let value = digits.iter().fold(0u64, |value, &digit| value * RADIX + digit as u64);
    u32::try_from(value).ok()
}

/// Number of characters produced for `len` bytes without zero-group compression.
pub const fn encoded_len(len: usize) -> usize {
    let tail = len % 4;
    (len / 4) * 5 + if tail == 0 { 0 } else { tail + 1 }
}

/// Number of bytes produced for `len` characters containing no zero-group marker.
pub const fn decoded_len(len: usize) -> usize {
    let tail = len % 5;
    (len / 5) * 4 + if tail == 0 { 0 } else { tail - 1 }
}
