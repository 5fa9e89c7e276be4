use chumsky::prelude::*;
use chumsky::Stream;

use crate::ast::*;
use crate::errors::{to_parse_error, ParseError, TagError};
use crate::lexer::{directive_lexer, metadata_lexer};
use crate::tokens::{DirectiveToken, MetaToken};

/// Parses a whitespace-separated `key:"value"` metadata string.
///
/// Surrounding backticks are trimmed first, so both `json:"a"` and
/// `` `json:"a"` `` are accepted. Spans in errors refer to the trimmed input.
pub fn parse_metadata(raw: &str) -> Result<Metadata, TagError> {
    let source = raw.trim_matches('`');
    let fail = |errors: Vec<ParseError>| TagError::MetadataSyntax {
        raw: raw.to_string(),
        errors,
    };

    let (tokens, lex_errs) = metadata_lexer().parse_recovery(source);
    if !lex_errs.is_empty() {
        return Err(fail(collect_errors(lex_errs, source.len())));
    }

    let tokens = tokens.unwrap_or_default();
    let span_end = source.len()..source.len() + 1;
    let stream = Stream::from_iter(span_end, tokens.into_iter());

    let key = select! { MetaToken::Ident(k) => k }.labelled("metadata key");
    let value = select! { MetaToken::Str { value, literal } => (value, literal) }
        .labelled("quoted value");
    let entry = key
        .then_ignore(just(MetaToken::Colon))
        .then(value)
        .map(|(key, (value, literal))| MetadataEntry::new(key, value).with_literal(literal));

    let (parsed, parse_errs) = entry
        .repeated()
        .then_ignore(end())
        .parse_recovery(stream);
    if !parse_errs.is_empty() {
        return Err(fail(collect_errors(parse_errs, source.len())));
    }

    Ok(Metadata::new(parsed.unwrap_or_default()))
}

/// Parses a variant directive value such as `-Person,APerson,+BPerson:CPerson`.
///
/// An empty or whitespace-only value is an empty list.
pub fn parse_directives(raw: &str) -> Result<Vec<Directive>, TagError> {
    let fail = |errors: Vec<ParseError>| TagError::DirectiveSyntax {
        raw: raw.to_string(),
        errors,
    };

    let (tokens, lex_errs) = directive_lexer().parse_recovery(raw);
    if !lex_errs.is_empty() {
        return Err(fail(collect_errors(lex_errs, raw.len())));
    }

    let tokens = tokens.unwrap_or_default();
    let span_end = raw.len()..raw.len() + 1;
    let stream = Stream::from_iter(span_end, tokens.into_iter());

    let ident = select! { DirectiveToken::Ident(s) => s }.labelled("variant name");
    let sign = choice::<_, Simple<DirectiveToken>>((
        just(DirectiveToken::Plus).to(Sign::Positive),
        just(DirectiveToken::Minus).to(Sign::Negative),
    ))
    .or_not()
    .map(|sign| sign.unwrap_or(Sign::Unsigned));

    let directive = sign
        .then(ident.clone())
        .then(just(DirectiveToken::Colon).ignore_then(ident).or_not())
        .map(|((sign, variant), rename_as)| Directive {
            sign,
            variant,
            rename_as,
        });

    let (parsed, parse_errs) = directive
        .separated_by(just(DirectiveToken::Comma))
        .then_ignore(end())
        .parse_recovery(stream);
    if !parse_errs.is_empty() {
        return Err(fail(collect_errors(parse_errs, raw.len())));
    }

    Ok(parsed.unwrap_or_default())
}

/// Returns the directive list carried by `metadata` under `key`, if any.
pub fn directives_for(metadata: &Metadata, key: &str) -> Result<Vec<Directive>, TagError> {
    match metadata.get(key) {
        Some(value) => parse_directives(value),
        None => Ok(Vec::new()),
    }
}

fn collect_errors<T>(errs: Vec<Simple<T>>, input_len: usize) -> Vec<ParseError>
where
    T: std::fmt::Display + std::hash::Hash + Eq,
{
    errs.into_iter()
        .map(|e| to_parse_error(e, input_len))
        .collect()
}
