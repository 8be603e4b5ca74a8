use chumsky::error::Simple;
use chumsky::Parser;
use command::{parse_line, report_errors};
use scan::token::Token;
use std::io::{self, BufRead, Write};

/// One interactive run: a reader for console lines and a writer for
/// everything the tool prints. Tests substitute in-memory ends.
pub struct Session<R, W> {
    input: R,
    pub out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W) -> Session<R, W> {
        Session { input, out }
    }

    /// Print one line of output.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Prompt and parse one line, reporting failures and re-prompting until
    /// the line parses. Returns None on end of input, which every menu
    /// treats as exit.
    pub fn read<T>(
        &mut self,
        prompt: &str,
        parser: &impl Parser<Token, T, Error = Simple<Token>>,
    ) -> io::Result<Option<T>> {
        loop {
            write!(self.out, "{}", prompt)?;
            self.out.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim_end_matches(['\r', '\n']);
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(line, parser) {
                Ok(value) => return Ok(Some(value)),
                Err(errors) => report_errors(&mut self.out, line, &errors)?,
            }
        }
    }
}
