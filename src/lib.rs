//! csvscan - a tolerant scanner for CSV-like delimited text
//!
//! This crate turns a complete in-memory text into records of fields. Quoted
//! and unquoted fields may be mixed freely, quoted fields may span lines and
//! escape the quote character by doubling it, and CR, LF and CRLF line endings
//! may all appear in the same input.
//!
//! # Example
//!
//! ```
//! use csvscan::Parser;
//!
//! let parser = Parser::new(",", "\"").unwrap();
//! let records = parser.parse("name,quote\r\nAda,\"said \"\"hi\"\"\nthen left\"").unwrap();
//!
//! assert_eq!(records, vec![
//!     vec!["name", "quote"],
//!     vec!["Ada", "said \"hi\"\nthen left"],
//! ]);
//! ```
//!
//! # Custom Dialect Example
//!
//! ```
//! use csvscan::{Config, Parser};
//!
//! let config = Config::new(";", "'").unwrap();
//! let parser = Parser::with_config(config);
//!
//! let records = parser.parse("'a;b';c;\nd").unwrap();
//! assert_eq!(records, vec![vec!["a;b", "c", ""], vec!["d"]]);
//! ```
//!
//! # Strict Mode Example
//!
//! ```
//! use csvscan::{Config, Error, Parser};
//!
//! // By default an unterminated quote is skipped over
//! assert_eq!(csvscan::parse("\"abc"), vec![vec!["abc"]]);
//!
//! let parser = Parser::with_config(Config::default().strict(true));
//! assert!(matches!(parser.parse("\"abc"), Err(Error::UnterminatedQuote { .. })));
//! ```

pub mod config;
pub mod error;
pub mod scanner;

pub use config::{Config, DEFAULT_DELIMITER, DEFAULT_QUOTE};
pub use error::{Error, Result, SourceLocation};
pub use scanner::{Parser, Record, parse};
