//! Base85 binary-to-text codec with explicit, swappable alphabets.
//!
//! ```
//! use base85_codec::base85::{Decoder, Encoder, Z85};
//!
//! let encoded = Encoder::new(&Z85).encode([0x86, 0x4f, 0xd2, 0x6f, 0xb5, 0x59, 0xf7, 0x5b]);
//! assert_eq!(encoded, "HelloWorld");
//! assert_eq!(Decoder::new(&Z85).decode(&encoded).unwrap().len(), 8);
//! ```

pub mod base85;
pub mod base_common;
pub mod chronometer;
pub mod configuration;
pub mod error;
pub mod logger;
pub mod sequential_thread_pool;
pub mod thread_pool;

pub use self::{
    chronometer::Chronometer,
    configuration::{Configuration, Mode},
    error::Error,
    logger::{Logger, PartialLogger},
    sequential_thread_pool::SequentialThreadPool,
    thread_pool::ThreadPool,
};
