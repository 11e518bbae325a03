/// A half-open range of a text body, in byte offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chunk {
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
    /// Whether this range matched one of the search words
    pub highlight: bool,
}

impl Chunk {
    pub fn new(start: usize, end: usize, highlight: bool) -> Self {
        Self {
            start,
            end,
            highlight,
        }
    }

    /// Creates a chunk for a raw match, before highlighting is decided
    pub fn raw(start: usize, end: usize) -> Self {
        Self::new(start, end, false)
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the slice of `text` this chunk covers.
    ///
    /// `None` when the range is out of bounds or does not fall on char
    /// boundaries, which can only happen when a sanitizer changed the length
    /// of the text it matched against.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..self.end)
    }
}
