pub mod token;

use logos::Logos;
use std::ops::Range;
use token::Token;

#[cfg(test)]
mod tests;

/// Tokenize an input line and return a Vec of tokens, dropping anything
/// unrecognizable.
pub fn lex(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|t| t.ok())
        .collect()
}

/// Tokenize an input line, keeping the byte span of each token so parse
/// diagnostics can point back into the line.
///
/// Returns `Err` with the span of the first chunk the lexer could not
/// recognize (stray punctuation, an integer that overflows i64, ...).
pub fn lex_spanned(source: &str) -> Result<Vec<(Token, Range<usize>)>, Range<usize>> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => return Err(lexer.span()),
        }
    }
    Ok(tokens)
}
