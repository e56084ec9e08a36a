//! Document chunking.
//!
//! This module provides the [`Chunker`] trait and [`FixedSizeChunker`],
//! a character-window splitter with configurable overlap.

/// A strategy for splitting text into chunks.
pub trait Chunker: Send + Sync {
    /// Split `text` into a sequence of chunks.
    ///
    /// Returns an empty `Vec` if `text` is empty. Non-empty input always
    /// produces at least one chunk.
    fn chunk(&self, text: &str) -> Vec<String>;
}

/// Splits text into fixed-size chunks by character count with configurable overlap.
///
/// The window slides `chunk_size - chunk_overlap` characters per step, so
/// consecutive chunks share `chunk_overlap` characters. Window arithmetic is
/// in characters, not bytes: slicing always lands on UTF-8 char boundaries,
/// so multi-byte text cannot cause a panic.
///
/// # Example
///
/// ```rust,ignore
/// use tutor_rag::FixedSizeChunker;
///
/// let chunker = FixedSizeChunker::new(500, 50);
/// let chunks = chunker.chunk(&combined_text);
/// ```
#[derive(Debug, Clone)]
pub struct FixedSizeChunker {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl FixedSizeChunker {
    /// Create a new `FixedSizeChunker`.
    ///
    /// # Arguments
    ///
    /// * `chunk_size` — maximum number of characters per chunk
    /// * `chunk_overlap` — number of overlapping characters between consecutive chunks
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self { chunk_size, chunk_overlap }
    }
}

impl Chunker for FixedSizeChunker {
    fn chunk(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        // Byte offset of every char, so windows can be sliced safely.
        let offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        let total_chars = offsets.len();

        let mut chunks = Vec::new();
        let mut start = 0;

        while start < total_chars {
            let end = (start + self.chunk_size).min(total_chars);
            let byte_start = offsets[start];
            let byte_end = if end == total_chars { text.len() } else { offsets[end] };
            chunks.push(text[byte_start..byte_end].to_string());

            let step = self.chunk_size.saturating_sub(self.chunk_overlap);
            if step == 0 {
                // Degenerate overlap >= size: emit the first window and stop.
                break;
            }
            start += step;
        }

        chunks
    }
}
