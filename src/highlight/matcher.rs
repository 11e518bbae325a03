use std::fmt;

use regex::{Regex, RegexBuilder};

use super::chunk::Chunk;

/// Normalizes text before matching (e.g. stripping diacritics)
pub type SanitizeFn<'a> = &'a dyn Fn(&str) -> String;

/// Replacement for [`find_chunks`], producing the raw matches to highlight
pub type FindChunksFn<'a> = &'a dyn Fn(&[&str], &str, &FindAllOptions<'_>) -> Vec<Chunk>;

/// Knobs for [`find_all`]. All of them combine freely.
#[derive(Clone, Copy, Default)]
pub struct FindAllOptions<'a> {
    /// Escape regex metacharacters in each search word before matching
    pub auto_escape: bool,
    /// Match case exactly (case-insensitive when false)
    pub case_sensitive: bool,
    /// Applied to the text and to every search word; identity when `None`
    pub sanitize: Option<SanitizeFn<'a>>,
    /// Custom raw match finder; [`find_chunks`] when `None`
    pub find_chunks: Option<FindChunksFn<'a>>,
}

impl fmt::Debug for FindAllOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FindAllOptions")
            .field("auto_escape", &self.auto_escape)
            .field("case_sensitive", &self.case_sensitive)
            .field("sanitize", &self.sanitize.is_some())
            .field("find_chunks", &self.find_chunks.is_some())
            .finish()
    }
}

impl<'a> FindAllOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auto_escape(mut self, auto_escape: bool) -> Self {
        self.auto_escape = auto_escape;
        self
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn with_sanitize(mut self, sanitize: SanitizeFn<'a>) -> Self {
        self.sanitize = Some(sanitize);
        self
    }

    pub fn with_find_chunks(mut self, find_chunks: FindChunksFn<'a>) -> Self {
        self.find_chunks = Some(find_chunks);
        self
    }

    fn sanitize(&self, text: &str) -> String {
        match self.sanitize {
            Some(sanitize) => sanitize(text),
            None => text.to_string(),
        }
    }
}

/// Splits `text_to_highlight` into highlighted and plain chunks.
///
/// The returned chunks are sorted, never empty, and cover
/// `[0, text_to_highlight.len())` exactly. An empty text yields no chunks.
pub fn find_all<S: AsRef<str>>(
    search_words: &[S],
    text_to_highlight: &str,
    options: &FindAllOptions<'_>,
) -> Vec<Chunk> {
    let words: Vec<&str> = search_words.iter().map(AsRef::as_ref).collect();

    let chunks = match options.find_chunks {
        Some(find) => find(&words, text_to_highlight, options),
        None => find_chunks(&words, text_to_highlight, options),
    };

    let chunks_to_highlight = combine_chunks(chunks);
    fill_in_chunks(&chunks_to_highlight, text_to_highlight.len())
}

/// Finds every non-overlapping match of each search word.
///
/// Empty search words are skipped, as are zero-length matches. A word that
/// does not compile as a pattern is skipped too.
pub fn find_chunks(
    search_words: &[&str],
    text_to_highlight: &str,
    options: &FindAllOptions<'_>,
) -> Vec<Chunk> {
    let haystack = options.sanitize(text_to_highlight);
    let mut chunks = Vec::new();

    for word in search_words.iter().filter(|word| !word.is_empty()) {
        let word = options.sanitize(word);
        let pattern = if options.auto_escape {
            escape_search_word(&word)
        } else {
            word
        };

        let regex = match RegexBuilder::new(&pattern)
            .case_insensitive(!options.case_sensitive)
            .build()
        {
            Ok(regex) => regex,
            Err(e) => {
                log::warn!("Skipping search word {:?}: {}", pattern, e);
                continue;
            }
        };

        collect_matches(&regex, &haystack, &mut chunks);
    }

    chunks
}

fn collect_matches(regex: &Regex, haystack: &str, chunks: &mut Vec<Chunk>) {
    let mut pos = 0;

    while pos <= haystack.len() {
        let Some(m) = regex.find_at(haystack, pos) else {
            break;
        };

        if m.end() > m.start() {
            chunks.push(Chunk::raw(m.start(), m.end()));
            pos = m.end();
        } else {
            // Zero-width match: step over one char or we'd match here forever
            pos = next_char_boundary(haystack, m.end());
        }
    }
}

fn next_char_boundary(text: &str, index: usize) -> usize {
    text[index..]
        .chars()
        .next()
        .map_or(index + 1, |c| index + c.len_utf8())
}

/// Merges overlapping (or touching) chunks into a sorted, minimal set.
pub fn combine_chunks(mut chunks: Vec<Chunk>) -> Vec<Chunk> {
    chunks.sort_by_key(|chunk| chunk.start);

    let mut combined: Vec<Chunk> = Vec::with_capacity(chunks.len());
    for next in chunks {
        match combined.last_mut() {
            // `prev` may fully contain `next`, so keep the larger end
            Some(prev) if next.start <= prev.end => {
                *prev = Chunk::raw(prev.start, prev.end.max(next.end));
            }
            _ => combined.push(next),
        }
    }

    combined
}

/// Fills the gaps around already combined chunks with plain chunks.
///
/// Highlighted ranges are clamped to `total_length`.
pub fn fill_in_chunks(chunks_to_highlight: &[Chunk], total_length: usize) -> Vec<Chunk> {
    let mut all_chunks = Vec::with_capacity(chunks_to_highlight.len() * 2 + 1);

    if chunks_to_highlight.is_empty() {
        append(&mut all_chunks, 0, total_length, false);
        return all_chunks;
    }

    let mut last_index = 0;
    for chunk in chunks_to_highlight {
        let start = chunk.start.clamp(last_index, total_length);
        let end = chunk.end.clamp(start, total_length);

        append(&mut all_chunks, last_index, start, false);
        append(&mut all_chunks, start, end, true);
        last_index = end;
    }
    append(&mut all_chunks, last_index, total_length, false);

    all_chunks
}

fn append(chunks: &mut Vec<Chunk>, start: usize, end: usize, highlight: bool) {
    if end > start {
        chunks.push(Chunk::new(start, end, highlight));
    }
}

/// Escapes regex metacharacters so `word` matches literally
pub fn escape_search_word(word: &str) -> String {
    regex::escape(word)
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
