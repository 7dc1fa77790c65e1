use super::{
    group::{decode_group, decoded_len, MAX_DIGIT},
    Alphabet, ALPHABET,
};
use crate::base_common::{alphabet, InvalidAlphabet};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    /// A character outside the alphabet, at byte offset `index`.
    InvalidCharacter { character: u8, index: usize },
    /// Group number `group` decodes to a value above `u32::MAX`.
    Overflow { group: usize },
    /// The input ends with a single character, which cannot carry a byte.
    TruncatedInput { length: usize },
}

impl Error {
    pub(super) fn shift(self, groups: usize) -> Self {
        match self {
            Self::Overflow { group } => Self::Overflow { group: group + groups },
            error => error,
        }
    }
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "Output buffer too small"),
            Self::InvalidCharacter { character, index } => {
                write!(f, "{}", alphabet::DecodeError { character: *character, index: *index })
            }
            Self::Overflow { group } => write!(f, "Group {} exceeds 32 bits", group),
            Self::TruncatedInput { length } => write!(f, "Input of length {} ends with a lone character", length),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        Error::InvalidCharacter {
            character: error.character,
            index: error.index,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Decoder<'a> {
    pub(super) alphabet: &'a Alphabet,
    pub(super) zero_group: Option<u8>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet, zero_group: None }
    }

    /// Accepts `marker` at a group boundary as four zero bytes.
    pub const fn compress_zero_groups(self, marker: u8) -> Result<Self, InvalidAlphabet> {
        match self.alphabet.reserve(marker) {
            Ok(marker) => Ok(Self {
                alphabet: self.alphabet,
                zero_group: Some(marker),
            }),
            Err(error) => Err(error),
        }
    }

    /// Checks every character and the length of the tail without doing any arithmetic.
    pub fn validate(&self, input: impl AsRef<[u8]>) -> Result<(), Error> {
        let input = input.as_ref();
        let mut pending = 0;
        for (index, &character) in input.iter().enumerate() {
            if pending == 0 && Some(character) == self.zero_group {
                continue;
            }
            self.alphabet.decode(character, index)?;
            pending = (pending + 1) % 5;
        }
        if pending == 1 {
            return Err(Error::TruncatedInput { length: input.len() });
        }
        Ok(())
    }

    fn decode_groups(&self, input: &[u8], mut emit: impl FnMut(&[u8]) -> Result<(), Error>) -> Result<(), Error> {
        self.validate(input)?;

        let mut digits = [0u8; 5];
        let mut pending = 0;
        let mut group = 0;

        for (index, &character) in input.iter().enumerate() {
            if pending == 0 && Some(character) == self.zero_group {
                emit(&[0; 4])?;
                group += 1;
                continue;
            }
            digits[pending] = self.alphabet.decode(character, index)?;
            pending += 1;
            if pending == 5 {
                let value = decode_group(digits).ok_or(Error::Overflow { group })?;
                emit(&value.to_be_bytes())?;
                pending = 0;
                group += 1;
            }
        }

        if pending > 1 {
            digits[pending..].fill(MAX_DIGIT);
            let value = decode_group(digits).ok_or(Error::Overflow { group })?;
            emit(&value.to_be_bytes()[..pending - 1])?;
        }
        Ok(())
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let output = output.as_mut();
        let mut index = 0;
        self.decode_groups(input.as_ref(), |bytes| {
            let end = index + bytes.len();
            output.get_mut(index..end).ok_or(Error::BufferTooSmall)?.copy_from_slice(bytes);
            index = end;
            Ok(())
        })?;
        Ok(index)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        let mut output = Vec::with_capacity(decoded_len(input.len()));
        self.decode_groups(input, |bytes| {
            output.extend_from_slice(bytes);
            Ok(())
        })?;
        Ok(output)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET);

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}

#[cfg(test)]
mod tests {
    use super::{Decoder, Error};
    use crate::base85::{ASCII85, RFC1924, Z85, ZERO_GROUP};

    #[test]
    fn decode() {
        assert_eq!(super::decode(""), Ok(vec![]));
        assert_eq!(super::decode("9`"), Ok(b"M".to_vec()));
        assert_eq!(super::decode("9jn"), Ok(b"Ma".to_vec()));
        assert_eq!(super::decode("9jqo"), Ok(b"Man".to_vec()));
        assert_eq!(super::decode("9jqo^"), Ok(b"Man ".to_vec()));
        assert_eq!(super::decode("9jqo^=9"), Ok(b"Man X".to_vec()));
        assert_eq!(super::decode("rr"), Ok(vec![0xff]));
        assert_eq!(super::decode("!!!!!"), Ok(vec![0x00; 4]));
        assert_eq!(super::decode("s8W-!"), Ok(vec![0xff; 4]));
        assert_eq!(super::decode("!!!#B"), Ok(203u32.to_be_bytes().to_vec()));
        assert_eq!(
            super::decode("<+ohcEHPu*CER),Dg-(AAoDo:C3=B4F!,CEATAo8BOr<&@=!2AA8c)f"),
            Ok(b"The quick brown fox jumps over the lazy dog\n".to_vec())
        );
    }

    #[test]
    fn decode_z85() {
        let decoder = Decoder::new(&Z85);
        assert_eq!(decoder.decode("HelloWorld"), Ok(vec![0x86, 0x4f, 0xd2, 0x6f, 0xb5, 0x59, 0xf7, 0x5b]));
        assert_eq!(decoder.decode("@@"), Ok(vec![0xff]));
    }

    #[test]
    fn decode_rfc1924() {
        let decoder = Decoder::new(&RFC1924);
        assert_eq!(decoder.decode("O<`^z"), Ok(b"Man ".to_vec()));
        assert_eq!(decoder.decode("Xk~0{Zv"), Ok(b"hello".to_vec()));
        assert_eq!(decoder.decode("|NsC0"), Ok(vec![0xff; 4]));
    }

    #[test]
    fn decode_zero_groups() {
        let decoder = Decoder::new(&ASCII85).compress_zero_groups(ZERO_GROUP).unwrap();
        assert_eq!(decoder.decode("z"), Ok(vec![0x00; 4]));
        assert_eq!(decoder.decode("zzzz"), Ok(vec![0x00; 16]));
        assert_eq!(decoder.decode("z@:B"), Ok(vec![0, 0, 0, 0, b'a', b'b']));
        assert_eq!(decoder.decode("!!!!!z"), Ok(vec![0x00; 8]));
        assert_eq!(
            decoder.decode("9jqo^z=9"),
            Ok(vec![b'M', b'a', b'n', b' ', 0, 0, 0, 0, b'X'])
        );
        // the marker only stands for a group at a group boundary
        assert_eq!(
            decoder.decode("9jzqo"),
            Err(Error::InvalidCharacter { character: b'z', index: 2 })
        );
        assert_eq!(decoder.decode("zz9"), Err(Error::TruncatedInput { length: 3 }));
    }

    #[test]
    fn marker_without_compression() {
        assert_eq!(super::decode("z"), Err(Error::InvalidCharacter { character: b'z', index: 0 }));
    }

    #[test]
    fn invalid_character() {
        assert_eq!(super::decode("9jqo^ =9"), Err(Error::InvalidCharacter { character: b' ', index: 5 }));
        assert_eq!(super::decode("9jqo~"), Err(Error::InvalidCharacter { character: b'~', index: 4 }));
        assert_eq!(super::decode("9jqé"), Err(Error::InvalidCharacter { character: 0xc3, index: 3 }));
        // characters are checked before any group is decoded
        assert_eq!(super::decode("uuuuu~"), Err(Error::InvalidCharacter { character: b'~', index: 5 }));
    }

    #[test]
    fn overflow() {
        assert_eq!(super::decode("s8W-\""), Err(Error::Overflow { group: 0 }));
        assert_eq!(super::decode("uuuuu"), Err(Error::Overflow { group: 0 }));
        assert_eq!(super::decode("9jqo^9jqo^uuuuu9jqo^"), Err(Error::Overflow { group: 2 }));
        assert_eq!(super::decode("9jqo^uu"), Err(Error::Overflow { group: 1 }));

        let decoder = Decoder::new(&ASCII85).compress_zero_groups(ZERO_GROUP).unwrap();
        assert_eq!(decoder.decode("zzuuuuu"), Err(Error::Overflow { group: 2 }));
    }

    #[test]
    fn truncated_input() {
        assert_eq!(super::decode("9"), Err(Error::TruncatedInput { length: 1 }));
        assert_eq!(super::decode("9jqo^9"), Err(Error::TruncatedInput { length: 6 }));
        for groups in 0..8 {
            let input = "9jqo^".repeat(groups) + "!";
            assert_eq!(super::decode(&input), Err(Error::TruncatedInput { length: 5 * groups + 1 }));
        }
    }

    #[test]
    fn decode_into() {
        let mut output = [0u8; 5];
        assert_eq!(super::decode_into("9jqo^=9", &mut output), Ok(5));
        assert_eq!(&output, b"Man X");

        let mut output = [0u8; 4];
        assert_eq!(super::decode_into("9jqo^=9", &mut output), Err(Error::BufferTooSmall));
    }

    #[test]
    fn display() {
        assert_eq!(
            Error::InvalidCharacter { character: b'~', index: 4 }.to_string(),
            "Invalid character '~' at index 4"
        );
        assert_eq!(Error::Overflow { group: 3 }.to_string(), "Group 3 exceeds 32 bits");
        assert_eq!(
            Error::TruncatedInput { length: 6 }.to_string(),
            "Input of length 6 ends with a lone character"
        );
    }
}
