//! Pure algorithm library behind the lab menus: dense integer matrices,
//! textbook sorts and searches over a bounded array, and the fixed-capacity
//! student roster. No I/O lives here; the REPL apps own all prompting and
//! printing.

pub mod matrix;
pub mod records;
pub mod sort;

#[cfg(test)]
mod tests;
