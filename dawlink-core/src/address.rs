//! Address tokenizer for the inbound notification stream.

use std::collections::VecDeque;

/// The segments of an address, consumed front to back by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments<'a> {
    parts: VecDeque<&'a str>,
}

impl<'a> Segments<'a> {
    pub fn next(&mut self) -> Option<&'a str> {
        self.parts.pop_front()
    }

    pub fn peek(&self) -> Option<&'a str> {
        self.parts.front().copied()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Split an address on `/` and drop the leading segment.
///
/// Returns `None` when there are fewer than two segments, i.e. the address
/// has no route. Segments are not unescaped or decoded.
pub fn tokenize(address: &str) -> Option<Segments<'_>> {
    let mut parts: VecDeque<&str> = address.split('/').collect();
    if parts.len() < 2 {
        return None;
    }
    parts.pop_front();
    Some(Segments { parts })
}
