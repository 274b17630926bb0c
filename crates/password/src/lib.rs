#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
//! Password generation and strength estimation for the
//! passgen browser UI.
//!
//! The UI builds a [`Configuration`], passes it to [`generate`]
//! together with a [`RandomSource`] and then scores the result
//! with [`estimate`].

mod config;
mod error;
pub mod generator;
mod memorable;
pub mod random;
pub mod strength;

pub use config::{
    Configuration, CustomElements, MemorableOptions, Mode, RandomOptions,
};
pub use error::Error;
pub use generator::{
    generate, generate_many, generate_secure, GeneratedPassword,
};
pub use memorable::WORD_LIST;
pub use random::{RandomSource, SecureRandom, SeededRandom};
pub use strength::{
    estimate, estimate_with, measure_entropy, Strength, StrengthConfig,
    StrengthLabel,
};

pub use zxcvbn;

/// Default cryptographically secure RNG.
pub(crate) fn csprng() -> impl rand::CryptoRng + rand::Rng {
    rand::rngs::OsRng
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Uppercase roman letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase roman letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Numerical digits.
pub const DIGITS: &str = "0123456789";

/// Punctuation characters used for the symbols class.
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Shortest password length offered by the UI.
pub const MIN_LENGTH: usize = 4;

/// Longest password length offered by the UI.
pub const MAX_LENGTH: usize = 64;

/// Fewest words offered for memorable passwords.
pub const MIN_WORD_COUNT: usize = 3;

/// Most words offered for memorable passwords.
pub const MAX_WORD_COUNT: usize = 7;
