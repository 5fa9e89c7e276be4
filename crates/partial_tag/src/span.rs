use serde::{Deserialize, Serialize};

/// Byte range into the (backtick-trimmed) input string.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub(crate) fn make_span(span: std::ops::Range<usize>, input_len: usize) -> Span {
    // chumsky reports end-of-input errors one past the end.
    let start = span.start.min(input_len);
    let end = span.end.min(input_len).max(start);
    Span { start, end }
}
