//! Length bounds a token must satisfy before it is counted.

pub const MIN_TOKEN_LEN: usize = 1;
pub const MAX_TOKEN_LEN: usize = 64;

/// True iff `s` is between `MIN_TOKEN_LEN` and `MAX_TOKEN_LEN` bytes long.
#[inline]
pub fn is_acceptable(s: &str) -> bool {
    (MIN_TOKEN_LEN..=MAX_TOKEN_LEN).contains(&s.len())
}
