//! Text rendering and parsing of money values.

pub mod formatter;
pub mod options;
pub mod parser;

pub use formatter::to_string;
pub use options::{FormatOptions, FormatOverrides};
pub use parser::parse;
