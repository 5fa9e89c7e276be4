use chumsky::prelude::*;

use crate::tokens::{DirectiveToken, MetaToken};

type Spanned<T> = (T, std::ops::Range<usize>);

fn ident() -> impl Parser<char, String, Error = Simple<char>> + Clone {
    filter(|c: &char| c.is_ascii_alphabetic())
        .then(filter(|c: &char| c.is_ascii_alphanumeric() || *c == '_').repeated())
        .map(|(first, rest)| std::iter::once(first).chain(rest).collect::<String>())
        .labelled("identifier")
}

/// One decoded character of a quoted string and the source text it came from.
type Piece = (char, String);

fn digits(
    radix: u32,
    count: usize,
) -> impl Parser<char, String, Error = Simple<char>> + Clone {
    filter(move |c: &char| c.is_digit(radix))
        .repeated()
        .exactly(count)
        .collect::<String>()
}

/// `\uXXXX`, `\UXXXXXXXX`, `\xXX` or `\ooo`, decoded to the code point they name.
fn numeric_escape(
    tag: Option<char>,
    radix: u32,
    count: usize,
) -> impl Parser<char, Piece, Error = Simple<char>> + Clone {
    let prefix = match tag {
        Some(tag) => just(tag).to(Some(tag)).boxed(),
        None => empty().to(None).boxed(),
    };
    prefix
        .then(digits(radix, count))
        .try_map(move |(tag, text), span| {
            u32::from_str_radix(&text, radix)
                .ok()
                .filter(|code| tag.is_some() || *code <= 0o377)
                .and_then(char::from_u32)
                .map(|c| {
                    let source = tag.map(String::from).unwrap_or_default() + &text;
                    (c, source)
                })
                .ok_or_else(|| Simple::custom(span, "invalid numeric escape"))
        })
}

fn string_literal() -> impl Parser<char, MetaToken, Error = Simple<char>> + Clone {
    let named = any().map(|c| {
        let decoded = match c {
            'a' => '\u{07}',
            'b' => '\u{08}',
            'f' => '\u{0c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\u{0b}',
            other => other,
        };
        (decoded, c.to_string())
    });

    let escape = just('\\')
        .ignore_then(choice((
            numeric_escape(Some('u'), 16, 4),
            numeric_escape(Some('U'), 16, 8),
            numeric_escape(Some('x'), 16, 2),
            numeric_escape(None, 8, 3),
            named,
        )))
        .map(|(c, source)| (c, format!("\\{}", source)));

    let plain = filter(|c: &char| *c != '"' && *c != '\\').map(|c| (c, c.to_string()));

    just('"')
        .ignore_then(plain.or(escape).repeated())
        .then_ignore(just('"').labelled("closing quote"))
        .map(|pieces: Vec<Piece>| {
            let mut value = String::new();
            let mut literal = String::from("\"");
            for (c, source) in pieces {
                value.push(c);
                literal.push_str(&source);
            }
            literal.push('"');
            MetaToken::Str { value, literal }
        })
}

pub(crate) fn metadata_lexer() -> impl Parser<char, Vec<Spanned<MetaToken>>, Error = Simple<char>>
{
    let token = choice::<_, Simple<char>>((
        ident().map(MetaToken::Ident),
        string_literal(),
        just(':').to(MetaToken::Colon),
    ))
    .map_with_span(|tok, span| (tok, span));

    text::whitespace()
        .ignore_then(token.padded().repeated())
        .then_ignore(end())
}

pub(crate) fn directive_lexer(
) -> impl Parser<char, Vec<Spanned<DirectiveToken>>, Error = Simple<char>> {
    let token = choice::<_, Simple<char>>((
        ident().map(DirectiveToken::Ident),
        just('+').to(DirectiveToken::Plus),
        just('-').to(DirectiveToken::Minus),
        just(':').to(DirectiveToken::Colon),
        just(',').to(DirectiveToken::Comma),
    ))
    .map_with_span(|tok, span| (tok, span));

    text::whitespace()
        .ignore_then(token.padded().repeated())
        .then_ignore(end())
}
