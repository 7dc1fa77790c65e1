use std::{error, fmt, str::FromStr};

fn describe(character: u8) -> String {
    if character.is_ascii_graphic() {
        format!("'{}'", character as char)
    } else {
        format!("{:#04x}", character)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InvalidAlphabet {
    WrongLength { expected: usize, actual: usize },
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonPrintableCharacter { character: u8, index: usize },
    ReservedCharacter { character: u8 },
}

/// Lookup failure for a single character, carrying its position in the input.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DecodeError {
    pub character: u8,
    pub index: usize,
}

impl error::Error for InvalidAlphabet {}

impl fmt::Display for InvalidAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "Alphabet must have {} characters, got {}", expected, actual)
            }
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonPrintableCharacter { character, index } => {
                write!(f, "Non-printable character {} at index {}", describe(*character), index)
            }
            Self::ReservedCharacter { character } => {
                write!(f, "Character {} cannot be reserved as a marker", describe(*character))
            }
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid character {} at index {}", describe(self.character), self.index)
    }
}

/// An ordered set of `N` distinct printable ASCII characters.
///
/// Position in the set is the digit value. The reverse table is filled once in
/// [`Alphabet::new`] and never changes afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Alphabet<const N: usize> {
    encode: [u8; N],
    decode: [Option<u8>; 128],
}

impl<const N: usize> Alphabet<N> {
    pub fn encode(&self, value: usize) -> u8 {
        self.encode[value]
    }

    pub fn decode(&self, value: u8, index: usize) -> Result<u8, DecodeError> {
        match self.decode.get(value as usize) {
            Some(&Some(value)) => Ok(value),
            _ => Err(DecodeError { character: value, index }),
        }
    }

    pub const fn contains(&self, value: u8) -> bool {
        value < 128 && self.decode[value as usize].is_some()
    }

    /// Checks that `marker` can stand outside the alphabet as a special symbol.
    pub const fn reserve(&self, marker: u8) -> Result<u8, InvalidAlphabet> {
        if !marker.is_ascii_graphic() || self.contains(marker) {
            return Err(InvalidAlphabet::ReservedCharacter { character: marker });
        }
        Ok(marker)
    }

    /// There are 94 printable ASCII characters, so any larger `N` ends in a
    /// `DuplicateCharacter` error.
    pub const fn new(characters: &[u8; N]) -> Result<Self, InvalidAlphabet> {
        let mut encode = [0u8; N];
        let mut decode: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < encode.len() {
            let character = characters[index];
            if !character.is_ascii_graphic() {
                return Err(InvalidAlphabet::NonPrintableCharacter { index, character });
            }
            if let Some(v) = decode[character as usize] {
                return Err(InvalidAlphabet::DuplicateCharacter {
                    character: character as char,
                    first: v as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    pub const fn len(&self) -> usize {
        self.encode.len()
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.encode
    }
}

impl<const N: usize> FromStr for Alphabet<N> {
    type Err = InvalidAlphabet;

    fn from_str(characters: &str) -> Result<Self, Self::Err> {
        let characters = characters.as_bytes();
        if let Some(index) = characters.iter().position(|character| !character.is_ascii_graphic()) {
            return Err(InvalidAlphabet::NonPrintableCharacter {
                character: characters[index],
                index,
            });
        }
        let characters: &[u8; N] = characters.try_into().map_err(|_| InvalidAlphabet::WrongLength {
            expected: N,
            actual: characters.len(),
        })?;
        Self::new(characters)
    }
}

#[cfg(test)]
mod tests {
    use super::{Alphabet, DecodeError, InvalidAlphabet};

    #[test]
    fn lookup() {
        let alphabet = Alphabet::new(b"abcd").unwrap();
        assert_eq!(alphabet.len(), 4);
        assert_eq!(alphabet.encode(0), b'a');
        assert_eq!(alphabet.encode(3), b'd');
        assert_eq!(alphabet.decode(b'c', 7), Ok(2));
        assert_eq!(alphabet.decode(b'e', 7), Err(DecodeError { character: b'e', index: 7 }));
        assert_eq!(alphabet.decode(0xc3, 2), Err(DecodeError { character: 0xc3, index: 2 }));
        assert!(alphabet.contains(b'b'));
        assert!(!alphabet.contains(b'B'));
        assert!(!alphabet.contains(0xff));
    }

    #[test]
    fn new() {
        assert_eq!(
            Alphabet::new(b"abca"),
            Err(InvalidAlphabet::DuplicateCharacter {
                character: 'a',
                first: 0,
                second: 3
            })
        );
        assert_eq!(
            Alphabet::new(b"ab c"),
            Err(InvalidAlphabet::NonPrintableCharacter { character: b' ', index: 2 })
        );
        assert_eq!(
            Alphabet::new(b"ab\x80c"),
            Err(InvalidAlphabet::NonPrintableCharacter { character: 0x80, index: 2 })
        );
    }

    #[test]
    fn new_oversized() {
        let mut characters = [b'!'; 95];
        for (index, character) in characters.iter_mut().take(94).enumerate() {
            *character = 0x21 + index as u8;
        }
        assert_eq!(
            Alphabet::new(&characters),
            Err(InvalidAlphabet::DuplicateCharacter {
                character: '!',
                first: 0,
                second: 94
            })
        );
    }

    #[test]
    fn from_str() {
        assert_eq!("abcd".parse::<Alphabet<4>>(), Alphabet::new(b"abcd"));
        assert_eq!(
            "abc".parse::<Alphabet<4>>(),
            Err(InvalidAlphabet::WrongLength { expected: 4, actual: 3 })
        );
        assert_eq!(
            "abcde".parse::<Alphabet<4>>(),
            Err(InvalidAlphabet::WrongLength { expected: 4, actual: 5 })
        );
        assert_eq!(
            "abcé".parse::<Alphabet<4>>(),
            Err(InvalidAlphabet::NonPrintableCharacter { character: 0xc3, index: 3 })
        );
    }

    #[test]
    fn reserve() {
        let alphabet = Alphabet::new(b"abcd").unwrap();
        assert_eq!(alphabet.reserve(b'z'), Ok(b'z'));
        assert_eq!(alphabet.reserve(b'a'), Err(InvalidAlphabet::ReservedCharacter { character: b'a' }));
        assert_eq!(alphabet.reserve(b'\n'), Err(InvalidAlphabet::ReservedCharacter { character: b'\n' }));
    }

    #[test]
    fn display() {
        assert_eq!(
            InvalidAlphabet::WrongLength { expected: 85, actual: 84 }.to_string(),
            "Alphabet must have 85 characters, got 84"
        );
        assert_eq!(DecodeError { character: b'~', index: 4 }.to_string(), "Invalid character '~' at index 4");
        assert_eq!(DecodeError { character: 0x0a, index: 9 }.to_string(), "Invalid character 0x0a at index 9");
    }
}
