//! Highlight module
//!
//! Splits a text body into highlighted and plain chunks for a set of search
//! words. Overlapping matches are merged and the gaps between them filled so
//! the result always partitions the whole text.

mod chunk;
mod matcher;
pub mod option_text;

pub use chunk::Chunk;
pub use matcher::{
    combine_chunks, escape_search_word, fill_in_chunks, find_all, find_chunks, FindAllOptions,
    FindChunksFn, SanitizeFn,
};
pub use option_text::{option_segments, search_words_from_input, OptionSegment};
