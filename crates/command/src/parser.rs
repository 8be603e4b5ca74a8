use chumsky::prelude::*;
use chumsky::Stream;
use scan::token::Token;

/// A single integer token
fn integer() -> impl Parser<Token, i64, Error = Simple<Token>> {
    select! { Token::Int(v) => v }
}

/// One menu selection: a lone integer on the line
pub fn menu_choice() -> impl Parser<Token, i64, Error = Simple<Token>> {
    integer().then_ignore(end())
}

/// Exactly `n` integers on the line (array elements, matrix rows)
pub fn int_list(n: usize) -> impl Parser<Token, Vec<i64>, Error = Simple<Token>> {
    integer().repeated().exactly(n).then_ignore(end())
}

/// A dimension pair: two non-negative counts (rows, columns)
pub fn dims() -> impl Parser<Token, (usize, usize), Error = Simple<Token>> {
    let count = || {
        integer().try_map(|v, span| {
            usize::try_from(v).map_err(|_| Simple::custom(span, "count cannot be negative"))
        })
    };
    count().then(count()).then_ignore(end())
}

/// A student name: one bare word on the line
pub fn name() -> impl Parser<Token, String, Error = Simple<Token>> {
    select! { Token::Word(w) => w }.then_ignore(end())
}

/// The five subject marks of one student
pub fn marks() -> impl Parser<Token, [i64; 5], Error = Simple<Token>> {
    integer()
        .repeated()
        .exactly(5)
        .then_ignore(end())
        .map(|v: Vec<i64>| [v[0], v[1], v[2], v[3], v[4]])
}

/// Lex one input line and run `parser` over it.
///
/// Token spans are byte ranges into `line`, so the `Simple` errors coming out
/// of here can be rendered directly against the line the user typed.
pub fn parse_line<T>(
    line: &str,
    parser: &impl Parser<Token, T, Error = Simple<Token>>,
) -> Result<T, Vec<Simple<Token>>> {
    let tokens = match scan::lex_spanned(line) {
        Ok(tokens) => tokens,
        Err(span) => return Err(vec![Simple::custom(span, "unrecognized input")]),
    };
    let eoi = line.len()..line.len() + 1;
    parser.parse(Stream::from_iter(eoi, tokens.into_iter()))
}
