//! Base85: every four bytes become five characters from an 85-character alphabet.
//!
//! The alphabet is an explicit value handed to [`Encoder`] and [`Decoder`]. The
//! free functions use [`ALPHABET`] (classic Ascii85, `!` through `u`) with zero
//! group compression turned off. A tail of `r` bytes encodes to `r + 1`
//! characters; nothing else is added to the output.

mod chunks;
pub mod decode;
pub mod encode;
pub mod group;

pub use decode::{decode, decode_into, Decoder};
pub use encode::{encode, encode_into, Encoder};

pub type Alphabet = crate::base_common::Alphabet<85>;

pub const ASCII85: Alphabet = match Alphabet::new(
    b"!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstu",
) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

/// ZeroMQ's Z85, safe inside source code string literals.
pub const Z85: Alphabet = match Alphabet::new(b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub const RFC1924: Alphabet = match Alphabet::new(b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%&()*+-;<=>?@^_`{|}~") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub const ALPHABET: Alphabet = ASCII85;

/// Conventional Ascii85 marker for a group of four zero bytes.
pub const ZERO_GROUP: u8 = b'z';
