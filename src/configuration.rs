use crate::{
    base85::{self, Alphabet},
    Error,
};
use serde::Deserialize;
use std::{env, error, fs, str::FromStr, thread};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Mode {
    Encode,
    Decode,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "encode" => Ok(Self::Encode),
            "decode" => Ok(Self::Decode),
            _ => Err(Error::new(format!("Unknown mode {}", value))),
        }
    }
}

/// One of the shipped alphabets.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Variant {
    Ascii85,
    Z85,
    Rfc1924,
}

impl Variant {
    pub fn alphabet(self) -> Alphabet {
        match self {
            Self::Ascii85 => base85::ASCII85,
            Self::Z85 => base85::Z85,
            Self::Rfc1924 => base85::RFC1924,
        }
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ascii85" => Ok(Self::Ascii85),
            "z85" => Ok(Self::Z85),
            "rfc1924" => Ok(Self::Rfc1924),
            _ => Err(Error::new(format!("Unknown variant {}", value))),
        }
    }
}

/// Contents of `VARIANT_FILE`, e.g. `{"alphabet": "...", "zero_group": "z"}`.
#[derive(Debug, Deserialize)]
struct VariantFile {
    alphabet: String,
    #[serde(default)]
    zero_group: Option<char>,
}

#[derive(Debug, Clone)]
pub struct Configuration {
    mode: Mode,
    alphabet: Alphabet,
    zero_group: Option<u8>,
    threads: usize,
    chunk_groups: usize,
    log_interval: usize,
}

fn var(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: Option<String>) -> Result<String, Error> {
    match lookup(key) {
        Some(value) => Ok(value),
        None => default.ok_or_else(|| Error::new(format!("Missing {}", key))),
    }
}

fn var_map<T, E: error::Error>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    mut f: impl FnMut(&str) -> Result<T, E>,
    default: Option<T>,
) -> Result<T, Error> {
    match var(lookup, key, None) {
        Ok(value) => f(&value).map_err(|_| Error::new(format!("Invalid {} {}", key, value))),
        Err(err) => default.ok_or(err),
    }
}

fn marker(key: &str, value: char) -> Result<u8, Error> {
    u8::try_from(value).map_err(|_| Error::new(format!("Invalid {} {}", key, value)))
}

fn default_threads() -> usize {
    thread::available_parallelism().map(|threads| threads.get()).unwrap_or(1)
}

impl Configuration {
    pub fn new() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let mode = var_map(&lookup, "MODE", |mode| mode.parse(), Some(Mode::Encode))?;
        let variant = var_map(&lookup, "VARIANT", |variant| variant.parse(), Some(Variant::Ascii85))?;
        let compress_zero_groups = var_map(&lookup, "COMPRESS_ZERO_GROUPS", |flag| flag.parse(), Some(false))?;
        let zero_group = var_map(&lookup, "ZERO_GROUP", |marker| marker.parse(), Some('z'))?;
        let threads = var_map(&lookup, "THREADS", |threads| threads.parse(), Some(default_threads()))?;
        let chunk_groups = var_map(&lookup, "CHUNK_GROUPS", |groups| groups.parse(), Some(1 << 16))?;
        let log_interval = var_map(&lookup, "LOG_INTERVAL", |interval| interval.parse(), Some(16))?;

        let mut zero_group = if compress_zero_groups {
            Some(marker("ZERO_GROUP", zero_group)?)
        } else {
            None
        };

        let alphabet = match (lookup("VARIANT_FILE"), lookup("ALPHABET")) {
            (Some(path), _) => {
                let file: VariantFile = serde_json::from_str(&fs::read_to_string(&path)?)?;
                if let Some(value) = file.zero_group {
                    zero_group = Some(marker("zero_group", value)?);
                }
                file.alphabet.parse()?
            }
            (None, Some(alphabet)) => alphabet.parse()?,
            (None, None) => variant.alphabet(),
        };

        if let Some(marker) = zero_group {
            alphabet.reserve(marker)?;
        }

        if threads == 0 || chunk_groups == 0 {
            return Err(Error::new("THREADS and CHUNK_GROUPS must be positive"));
        }

        Ok(Self {
            mode,
            alphabet,
            zero_group,
            threads,
            chunk_groups,
            log_interval,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn zero_group(&self) -> Option<u8> {
        self.zero_group
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn chunk_groups(&self) -> usize {
        self.chunk_groups
    }

    pub fn log_interval(&self) -> usize {
        self.log_interval
    }
}
