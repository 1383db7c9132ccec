mod field;

use field::Field;

use log::{debug, trace};

use crate::config::Config;
use crate::error::{Error, Result, SourceLocation};

/// One line of delimited text, as an ordered list of unescaped field values
pub type Record = Vec<String>;

/// Delimited-text parser bound to one validated [`Config`].
///
/// The parser keeps no state between calls, so a single instance can be
/// shared across threads and reused for any number of inputs.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: Config,
}

impl Parser {
    /// Create a parser from delimiter and quote arguments, see [`Config::new`]
    pub fn new(delimiter: &str, quote: &str) -> Result<Self> {
        Ok(Self::with_config(Config::new(delimiter, quote)?))
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse `text` into records.
    ///
    /// Every CR, LF or CRLF ends a record outside quoted fields, and the text
    /// after the last terminator always forms a final record, even when empty.
    /// Only strict mode can fail, on an unterminated quoted field.
    ///
    /// ```
    /// use csvscan::Parser;
    ///
    /// let parser = Parser::default();
    /// let records = parser.parse("a,\"b\"\"c\"\r\nd,").unwrap();
    /// assert_eq!(records, vec![vec!["a", "b\"c"], vec!["d", ""]]);
    /// ```
    pub fn parse(&self, text: &str) -> Result<Vec<Record>> {
        let records = Scanner::new(text, &self.config).run()?;
        debug!("parsed {} records from {} bytes", records.len(), text.len());
        Ok(records)
    }

    /// Parse raw bytes, which must be valid UTF-8
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<Record>> {
        let text = std::str::from_utf8(bytes)?;
        self.parse(text)
    }
}

/// Single left-to-right pass over one input text
struct Scanner<'a> {
    text: &'a str,
    pos: usize,
    delimiter: char,
    quote: char,
    strict: bool,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str, config: &Config) -> Self {
        Self {
            text,
            pos: 0,
            delimiter: config.delimiter(),
            quote: config.quote(),
            strict: config.is_strict(),
        }
    }

    fn run(mut self) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        let mut record = Record::new();

        while let Some(current) = self.peek_char() {
            match current {
                '\r' | '\n' => {
                    self.close_trailing_delimiter(&mut record);
                    records.push(std::mem::take(&mut record));
                    self.pos += if self.text[self.pos..].starts_with("\r\n") {
                        2
                    } else {
                        1
                    };
                }
                ch if ch == self.quote => {
                    match field::quoted(self.text, self.pos, self.delimiter, self.quote) {
                        Some(field) => self.accept(&mut record, field),
                        None if self.strict => {
                            let location = SourceLocation::of_offset(self.text, self.pos);
                            return Err(Error::unterminated_quote(location));
                        }
                        None => {
                            trace!("skipping unterminated quote at byte {}", self.pos);
                            self.pos += ch.len_utf8();
                        }
                    }
                }
                _ => {
                    let field = field::unquoted(self.text, self.pos, self.delimiter);
                    self.accept(&mut record, field);
                }
            }
        }

        self.close_trailing_delimiter(&mut record);
        records.push(record);
        Ok(records)
    }

    fn peek_char(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn accept(&mut self, record: &mut Record, field: Field) {
        record.push(field.value);
        self.pos = field.end;
    }

    /// A delimiter right before a line end (or end of text) leaves an empty final field
    fn close_trailing_delimiter(&self, record: &mut Record) {
        if self.text[..self.pos].ends_with(self.delimiter) {
            record.push(String::new());
        }
    }
}

/// Parse `text` with the default dialect: `,` delimiter and `"` quote
pub fn parse(text: &str) -> Vec<Record> {
    // Lenient mode never reports an error
    Parser::default().parse(text).unwrap_or_default()
}
