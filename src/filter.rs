//! Byte-level filter for characters that split tokens.

/// Punctuation excluded by `CharFilter::default()`.
pub const COMMON_PUNCTUATION: &[u8] = b",*;.:([])";

/// Lookup table over all 256 byte values marking the excluded ones.
#[derive(Clone, PartialEq, Eq)]
pub struct CharFilter {
    excluded: [bool; 256],
}

impl CharFilter {
    /// Builds a filter from an explicit, length-delimited byte set.
    /// Duplicates are harmless.
    pub fn new(excluded: &[u8]) -> Self {
        let mut table = [false; 256];
        for &b in excluded {
            table[b as usize] = true;
        }
        Self { excluded: table }
    }

    /// A filter that excludes nothing.
    pub fn none() -> Self {
        Self::new(&[])
    }

    #[inline]
    pub fn is_excluded(&self, byte: u8) -> bool {
        self.excluded[byte as usize]
    }

    /// Excluded bytes in ascending order.
    pub fn excluded(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(move |&b| self.is_excluded(b))
    }
}

impl Default for CharFilter {
    fn default() -> Self {
        Self::new(COMMON_PUNCTUATION)
    }
}

impl core::fmt::Debug for CharFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set()
            .entries(self.excluded().map(|b| b as char))
            .finish()
    }
}
