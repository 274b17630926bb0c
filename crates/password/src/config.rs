//! Options describing the password to generate.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    Error, Result, DIGITS, LOWERCASE, MAX_LENGTH, MAX_WORD_COUNT,
    MIN_LENGTH, MIN_WORD_COUNT, SYMBOLS, UPPERCASE,
};

/// Kind of password to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    /// Characters drawn from the selected classes.
    Random,
    /// Words drawn from the built-in word list.
    Memorable,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::Memorable => write!(f, "memorable"),
        }
    }
}

/// Configuration for a single password.
///
/// Serialized as a JSON object with a `mode` tag, for example
/// `{"mode": "random", "length": 12, "symbols": false}`;
/// omitted fields take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum Configuration {
    /// Random characters with optional custom elements.
    Random(RandomOptions),
    /// Words joined by a separator.
    Memorable(MemorableOptions),
}

impl Configuration {
    /// Default configuration for a mode.
    pub fn default_for(mode: Mode) -> Self {
        match mode {
            Mode::Random => Self::Random(Default::default()),
            Mode::Memorable => Self::Memorable(Default::default()),
        }
    }

    /// Generation mode.
    pub fn mode(&self) -> Mode {
        match self {
            Self::Random(_) => Mode::Random,
            Self::Memorable(_) => Mode::Memorable,
        }
    }

    /// Determine if any custom element is switched on.
    pub fn has_custom_elements(&self) -> bool {
        match self {
            Self::Random(options) => options.has_custom_elements(),
            Self::Memorable(options) => options.has_custom_elements(),
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::default_for(Mode::Random)
    }
}

impl From<RandomOptions> for Configuration {
    fn from(value: RandomOptions) -> Self {
        Self::Random(value)
    }
}

impl From<MemorableOptions> for Configuration {
    fn from(value: MemorableOptions) -> Self {
        Self::Memorable(value)
    }
}

/// Group of custom elements sharing a toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomElements {
    /// Whether the group is switched on.
    pub enabled: bool,
    /// Values in the order they were entered.
    pub values: Vec<String>,
}

impl CustomElements {
    /// Create an enabled group.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: true,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Trimmed, non-empty values when the group is enabled.
    pub fn fragments(&self) -> impl Iterator<Item = &str> {
        self.values
            .iter()
            .filter(move |_| self.enabled)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }
}

/// Options for random passwords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RandomOptions {
    /// Length of the password in characters.
    pub length: usize,
    /// Use uppercase roman letters.
    pub uppercase: bool,
    /// Use lowercase roman letters.
    pub lowercase: bool,
    /// Use numeric digits.
    pub digits: bool,
    /// Use punctuation symbols.
    pub symbols: bool,
    /// Words inserted verbatim.
    pub custom_words: CustomElements,
    /// Numbers inserted verbatim.
    pub custom_numbers: CustomElements,
    /// Symbol sequences inserted verbatim.
    pub custom_symbols: CustomElements,
}

impl Default for RandomOptions {
    fn default() -> Self {
        Self::new(16).upper().lower().numeric().symbols()
    }
}

impl RandomOptions {
    /// Create options without any character classes.
    ///
    /// The length is clamped to the range offered by the UI.
    pub fn new(length: usize) -> Self {
        Self {
            length: length.clamp(MIN_LENGTH, MAX_LENGTH),
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
            custom_words: Default::default(),
            custom_numbers: Default::default(),
            custom_symbols: Default::default(),
        }
    }

    /// Create with numeric digits, uppercase and lowercase
    /// roman letters.
    pub fn new_alpha_numeric(length: usize) -> Self {
        Self::new(length).upper().lower().numeric()
    }

    /// Options for the minimal generator: letters always,
    /// digits and symbols on request.
    pub fn new_basic(length: usize, digits: bool, symbols: bool) -> Self {
        let mut options = Self::new(length).upper().lower();
        options.digits = digits;
        options.symbols = symbols;
        options
    }

    /// Use uppercase roman letters.
    pub fn upper(mut self) -> Self {
        self.uppercase = true;
        self
    }

    /// Use lowercase roman letters.
    pub fn lower(mut self) -> Self {
        self.lowercase = true;
        self
    }

    /// Use numeric digits.
    pub fn numeric(mut self) -> Self {
        self.digits = true;
        self
    }

    /// Use punctuation symbols.
    pub fn symbols(mut self) -> Self {
        self.symbols = true;
        self
    }

    /// Insert custom words.
    pub fn custom_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_words = CustomElements::new(words);
        self
    }

    /// Insert custom numbers.
    pub fn custom_numbers<I, S>(mut self, numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_numbers = CustomElements::new(numbers);
        self
    }

    /// Insert custom symbol sequences.
    pub fn custom_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_symbols = CustomElements::new(symbols);
        self
    }

    /// Characters of the enabled classes in the order
    /// uppercase, lowercase, digits, symbols.
    pub fn charset(&self) -> String {
        [
            (self.uppercase, UPPERCASE),
            (self.lowercase, LOWERCASE),
            (self.digits, DIGITS),
            (self.symbols, SYMBOLS),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, chars)| chars)
        .collect()
    }

    /// Custom fragments in insertion order: words, numbers
    /// then symbols.
    pub fn fragments(&self) -> Vec<&str> {
        self.custom_words
            .fragments()
            .chain(self.custom_numbers.fragments())
            .chain(self.custom_symbols.fragments())
            .collect()
    }

    /// Combined length in characters of all custom fragments.
    pub fn custom_len(&self) -> usize {
        self.fragments().iter().map(|s| s.chars().count()).sum()
    }

    /// Determine if any custom element group is switched on.
    pub fn has_custom_elements(&self) -> bool {
        self.custom_words.enabled
            || self.custom_numbers.enabled
            || self.custom_symbols.enabled
    }

    /// Check the options can produce a password.
    pub fn validate(&self) -> Result<()> {
        let no_classes =
            !(self.uppercase || self.lowercase || self.digits || self.symbols);
        if no_classes && !self.has_custom_elements() {
            return Err(Error::NoCharacterSource);
        }

        let required = self.custom_len();
        if self.length < required {
            return Err(Error::LengthTooShort { required });
        }

        // Custom elements alone must fill the whole password.
        if no_classes && self.length > required {
            return Err(Error::NoCharacterSource);
        }

        Ok(())
    }
}

/// Options for memorable passwords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemorableOptions {
    /// Number of words.
    pub word_count: usize,
    /// Separator placed between words, may be empty.
    pub separator: String,
    /// Uppercase the first letter of each word.
    pub capitalize: bool,
    /// Append a random digit to each word.
    pub append_digit: bool,
    /// Word placed before the first word.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_word: Option<String>,
    /// Number appended to the end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix_number: Option<String>,
    /// Symbols appended after the number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix_symbol: Option<String>,
}

impl Default for MemorableOptions {
    fn default() -> Self {
        Self::new(4).capitalize().append_digit()
    }
}

impl MemorableOptions {
    /// Create options for lowercase words joined by a hyphen.
    ///
    /// The word count is clamped to the range offered by the UI.
    pub fn new(word_count: usize) -> Self {
        Self {
            word_count: word_count.clamp(MIN_WORD_COUNT, MAX_WORD_COUNT),
            separator: String::from("-"),
            capitalize: false,
            append_digit: false,
            prefix_word: None,
            suffix_number: None,
            suffix_symbol: None,
        }
    }

    /// Set the separator.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Capitalize each word.
    pub fn capitalize(mut self) -> Self {
        self.capitalize = true;
        self
    }

    /// Append a digit to each word.
    pub fn append_digit(mut self) -> Self {
        self.append_digit = true;
        self
    }

    /// Set the prefix word.
    pub fn prefix_word(mut self, word: impl Into<String>) -> Self {
        self.prefix_word = Some(word.into());
        self
    }

    /// Set the suffix number.
    pub fn suffix_number(mut self, number: impl Into<String>) -> Self {
        self.suffix_number = Some(number.into());
        self
    }

    /// Set the suffix symbol.
    pub fn suffix_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.suffix_symbol = Some(symbol.into());
        self
    }

    /// Determine if a prefix or suffix is switched on.
    pub fn has_custom_elements(&self) -> bool {
        self.prefix_word.is_some()
            || self.suffix_number.is_some()
            || self.suffix_symbol.is_some()
    }
}
