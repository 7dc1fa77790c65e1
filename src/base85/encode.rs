use super::{
    group::{encode_group, encoded_len},
    Alphabet, ALPHABET,
};
use crate::base_common::InvalidAlphabet;
use std::{convert::Infallible, error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The output buffer was too small to contain the entire input.
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Encoder<'a> {
    pub(super) alphabet: &'a Alphabet,
    pub(super) zero_group: Option<u8>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet, zero_group: None }
    }

    /// Emits `marker` instead of five digits for every full group of four zero bytes.
    pub const fn compress_zero_groups(self, marker: u8) -> Result<Self, InvalidAlphabet> {
        match self.alphabet.reserve(marker) {
            Ok(marker) => Ok(Self {
                alphabet: self.alphabet,
                zero_group: Some(marker),
            }),
            Err(error) => Err(error),
        }
    }

    fn encode_groups<E>(&self, input: &[u8], mut emit: impl FnMut(&[u8]) -> Result<(), E>) -> Result<(), E> {
        let chunks = input.chunks_exact(4);
        let tail = chunks.remainder();
        let mut characters = [0u8; 5];

        for chunk in chunks {
            let group = [chunk[0], chunk[1], chunk[2], chunk[3]];
            match self.zero_group {
                Some(marker) if group == [0; 4] => emit(&[marker])?,
                _ => {
                    for (character, digit) in characters.iter_mut().zip(encode_group(group)) {
                        *character = self.alphabet.encode(digit as usize);
                    }
                    emit(&characters)?;
                }
            }
        }

        if !tail.is_empty() {
            let mut group = [0u8; 4];
            group[..tail.len()].copy_from_slice(tail);
            for (character, digit) in characters.iter_mut().zip(encode_group(group)) {
                *character = self.alphabet.encode(digit as usize);
            }
            emit(&characters[..tail.len() + 1])?;
        }
        Ok(())
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let output = output.as_mut();
        let mut index = 0;
        self.encode_groups(input.as_ref(), |characters| {
            let end = index + characters.len();
            output
                .get_mut(index..end)
                .ok_or(Error::BufferTooSmall)?
                .copy_from_slice(characters);
            index = end;
            Ok(())
        })?;
        Ok(index)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let input = input.as_ref();
        let mut output = String::with_capacity(encoded_len(input.len()));
        let result = self.encode_groups::<Infallible>(input, |characters| {
            output.extend(characters.iter().map(|&character| character as char));
            Ok(())
        });
        match result {
            Ok(()) => output,
            Err(never) => match never {},
        }
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET);

pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}
