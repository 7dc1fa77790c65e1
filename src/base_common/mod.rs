pub mod alphabet;

pub use alphabet::{Alphabet, DecodeError, InvalidAlphabet};
