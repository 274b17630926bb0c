use thiserror::Error;

/// Errors generated by the library.
///
/// Both variants are validation failures for random passwords;
/// callers should clear any previous password and show the message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Error generated when no character class is selected and
    /// no custom elements can fill the password.
    #[error(
        "select at least one character type or add custom elements that fill the whole length"
    )]
    NoCharacterSource,

    /// Error generated when the custom elements do not fit
    /// in the requested length.
    #[error(
        "password length must be at least {required} to include all custom elements"
    )]
    LengthTooShort {
        /// Combined length of the enabled custom elements.
        required: usize,
    },
}
