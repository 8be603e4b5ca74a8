pub mod error;
pub mod parser;

pub use error::{report_errors, ParseError};
pub use parser::{dims, int_list, marks, menu_choice, name, parse_line};

#[cfg(test)]
mod tests;
