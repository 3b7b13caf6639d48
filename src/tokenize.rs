//! Splits a byte stream into candidate tokens.

use std::io::{self, BufRead};

use crate::filter::CharFilter;
use crate::validate::MAX_TOKEN_LEN;

/// One run of non-separator bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Valid UTF-8, at most `MAX_TOKEN_LEN` bytes.
    Text(String),
    /// Longer than `MAX_TOKEN_LEN` bytes; carries the full byte length.
    /// Bytes past the limit are not buffered.
    Overlong(usize),
    /// Within the length limit but not valid UTF-8; the raw bytes.
    NotUtf8(Vec<u8>),
}

/// Streaming tokenizer over any `BufRead`.
///
/// Tokens are maximal runs of bytes that are neither ASCII whitespace nor
/// excluded by the filter. Empty runs are skipped. At most
/// `MAX_TOKEN_LEN` bytes of a run are held in memory.
pub struct Tokenizer<'f, R> {
    reader: R,
    filter: &'f CharFilter,
    pending: Vec<u8>,
    // Byte length of the current run, including bytes not buffered.
    run_len: usize,
    done: bool,
}

impl<'f, R: BufRead> Tokenizer<'f, R> {
    pub fn new(reader: R, filter: &'f CharFilter) -> Self {
        Self {
            reader,
            filter,
            pending: Vec::with_capacity(MAX_TOKEN_LEN),
            run_len: 0,
            done: false,
        }
    }

    fn take_token(&mut self) -> Token {
        let len = core::mem::take(&mut self.run_len);
        if len > MAX_TOKEN_LEN {
            self.pending.clear();
            return Token::Overlong(len);
        }
        match String::from_utf8(core::mem::take(&mut self.pending)) {
            Ok(s) => Token::Text(s),
            Err(e) => Token::NotUtf8(e.into_bytes()),
        }
    }
}

impl<R: BufRead> Iterator for Tokenizer<'_, R> {
    type Item = io::Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };
            if buf.is_empty() {
                self.done = true;
                if self.run_len == 0 {
                    return None;
                }
                return Some(Ok(self.take_token()));
            }

            // `buf` borrows `reader`, so only disjoint fields are touched here.
            let mut consumed = 0;
            let mut complete = false;
            for &b in buf {
                consumed += 1;
                let sep = b.is_ascii_whitespace() || self.filter.is_excluded(b);
                if !sep {
                    if self.run_len < MAX_TOKEN_LEN {
                        self.pending.push(b);
                    }
                    self.run_len = self.run_len.saturating_add(1);
                } else if self.run_len > 0 {
                    complete = true;
                    break;
                }
            }
            self.reader.consume(consumed);
            if complete {
                return Some(Ok(self.take_token()));
            }
        }
    }
}
