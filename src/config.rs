use crate::error::{Error, Result};

pub const DEFAULT_DELIMITER: char = ',';
pub const DEFAULT_QUOTE: char = '"';

/// Delimiter and quote characters for a parser, validated once at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    delimiter: char,
    quote: char,
    strict: bool,
}

impl Config {
    /// Build a configuration from textual arguments.
    ///
    /// Each argument must be exactly one character occupying a single UTF-16
    /// code unit, and the delimiter and quote must differ.
    ///
    /// ```
    /// use csvscan::Config;
    ///
    /// let config = Config::new(";", "'").unwrap();
    /// assert_eq!(config.delimiter(), ';');
    /// assert!(Config::new(",,", "\"").is_err());
    /// ```
    pub fn new(delimiter: &str, quote: &str) -> Result<Self> {
        let delimiter = single_char("delimiter", delimiter)?;
        let quote = single_char("quote", quote)?;
        Self::from_chars(delimiter, quote)
    }

    /// Build a configuration from characters, with the same checks as [`Config::new`]
    pub fn from_chars(delimiter: char, quote: char) -> Result<Self> {
        check_code_unit("delimiter", delimiter)?;
        check_code_unit("quote", quote)?;

        if delimiter == quote {
            return Err(Error::configuration(format!(
                "delimiter and quote must differ, both are {:?}",
                delimiter
            )));
        }

        Ok(Self {
            delimiter,
            quote,
            strict: false,
        })
    }

    /// Report unterminated quoted fields as errors instead of skipping past them (builder pattern)
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn quote(&self) -> char {
        self.quote
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            quote: DEFAULT_QUOTE,
            strict: false,
        }
    }
}

fn single_char(name: &str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        (None, _) => Err(Error::configuration(format!("{} must not be empty", name))),
        _ => Err(Error::configuration(format!(
            "{} must be a single character, got {:?}",
            name, value
        ))),
    }
}

fn check_code_unit(name: &str, ch: char) -> Result<()> {
    if ch.len_utf16() != 1 {
        return Err(Error::configuration(format!(
            "{} {:?} is outside the basic multilingual plane",
            name, ch
        )));
    }
    Ok(())
}
