//! lines - select lines from a stream with a tiny command language
//!
//! A program is an ordered list of [`Command`]s. The [`Interpreter`] walks the
//! input one line at a time and the command list in lockstep, emitting each
//! line only while the pass state is on. Once every command has been
//! satisfied, the remaining lines follow the last pass state.
//!
//! # Example
//!
//! ```
//! use lines::{Command, CommandTable, Interpreter};
//! use std::io::Cursor;
//!
//! // Skip two lines, then echo the rest
//! let table = CommandTable::new(vec![Command::MoveTo(2), Command::Pass]);
//! let mut interpreter = Interpreter::new(&table);
//! let mut output = Vec::new();
//! interpreter.run(Cursor::new("a\nb\nc\nd\n"), &mut output).unwrap();
//!
//! assert_eq!(String::from_utf8(output).unwrap(), "c\nd\n");
//! ```
//!
//! # Tag Search Example
//!
//! ```
//! use lines::{Command, CommandTable, Interpreter};
//! use std::io::Cursor;
//!
//! // Print the body between two markers, markers excluded
//! let table = CommandTable::new(vec![
//!     Command::skip("BEGIN"),
//!     Command::Pass,
//!     Command::find("END"),
//!     Command::Reject,
//! ]);
//! let mut interpreter = Interpreter::new(&table);
//! let mut output = Vec::new();
//! interpreter
//!     .run(Cursor::new("head\nBEGIN\nbody\nEND\ntail\n"), &mut output)
//!     .unwrap();
//!
//! assert_eq!(String::from_utf8(output).unwrap(), "body\n");
//! ```
//!
//! # Command Line Example
//!
//! ```
//! use lines::{Interpreter, Parser};
//! use std::io::Cursor;
//!
//! // Lines 2 through 3, like `lines --left 2 --right 3`
//! let invocation = Parser::new(["--left", "2", "--right", "3"]).parse().unwrap();
//! let mut interpreter = Interpreter::new(&invocation.commands);
//! let mut output = Vec::new();
//! interpreter.run(Cursor::new("1\n2\n3\n4\n"), &mut output).unwrap();
//!
//! assert_eq!(String::from_utf8(output).unwrap(), "2\n3\n");
//! ```

pub mod command;
pub mod error;
pub mod interpreter;
pub mod parser;
pub mod reader;

pub use command::{Command, CommandTable};
pub use error::{Error, Result};
pub use interpreter::{Interpreter, RunStats};
pub use parser::{Action, Input, Invocation, LineRange, Parser};
pub use reader::{Line, LineReader};
