use crate::{base85, base_common::InvalidAlphabet};
use std::{error, fmt, io};

/// Failure of the command line driver, reduced to a message.
#[derive(Debug)]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", &self.message)
    }
}

impl error::Error for Error {}

impl From<InvalidAlphabet> for Error {
    fn from(error: InvalidAlphabet) -> Self {
        Self::new(format!("Invalid alphabet: {}", error))
    }
}

impl From<base85::decode::Error> for Error {
    fn from(error: base85::decode::Error) -> Self {
        Self::new(format!("Could not decode: {}", error))
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::new(format!("I/O error: {}", error))
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::new(format!("Invalid variant file: {}", error))
    }
}
