//! Fixed top-K retrieval policy over the vector index.

use crate::error::Result;
use crate::index::VectorIndex;

/// Wraps a [`VectorIndex`] with a fixed top-K policy and projects results
/// to chunk texts.
pub struct Retriever {
    index: VectorIndex,
    top_k: usize,
}

impl Retriever {
    /// Create a retriever returning at most `top_k` chunks per query.
    pub fn new(index: VectorIndex, top_k: usize) -> Self {
        Self { index, top_k }
    }

    /// Retrieve the chunk texts most similar to `query`, most similar first.
    pub async fn retrieve(&self, query: &str) -> Result<Vec<String>> {
        let results = self.index.search(query, self.top_k).await?;
        Ok(results.into_iter().map(|r| r.text).collect())
    }

    /// Number of chunks in the underlying index.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the underlying index holds no chunks.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
