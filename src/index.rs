//! In-memory vector index using cosine similarity.
//!
//! [`VectorIndex`] stores (embedding, chunk text) entries in insertion order
//! and answers exact nearest-neighbor queries. It is an adapter over an
//! [`EmbeddingProvider`]: `build` embeds the chunks, `search` embeds the
//! query with the same provider. The index is immutable after `build`.

use std::sync::Arc;

use tracing::info;

use crate::document::SearchResult;
use crate::embedding::EmbeddingProvider;
use crate::error::{Result, TutorError};

/// A build-once, read-only vector index over chunk texts.
///
/// Corpora are small (hundreds of chunks), so search is an exact scan over
/// every entry; no approximate-NN structure is needed.
pub struct VectorIndex {
    provider: Arc<dyn EmbeddingProvider>,
    entries: Vec<Entry>,
}

impl std::fmt::Debug for VectorIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorIndex")
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}

struct Entry {
    embedding: Vec<f32>,
    text: String,
}

/// Compute cosine similarity between two vectors.
///
/// Returns 0.0 if either vector has zero magnitude.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

impl VectorIndex {
    /// Build an index by embedding every chunk with `provider`.
    ///
    /// Entries keep the order of `chunks`; that order is the tie-breaker
    /// during search.
    ///
    /// # Errors
    ///
    /// - [`TutorError::EmptyCorpus`] if `chunks` is empty.
    /// - [`TutorError::Provider`] if embedding fails or the provider
    ///   returns a mismatched number of vectors.
    pub async fn build(
        provider: Arc<dyn EmbeddingProvider>,
        chunks: Vec<String>,
    ) -> Result<VectorIndex> {
        if chunks.is_empty() {
            return Err(TutorError::EmptyCorpus("no chunks to index".to_string()));
        }

        let texts: Vec<&str> = chunks.iter().map(String::as_str).collect();
        let embeddings = provider.embed_batch(&texts).await?;

        if embeddings.len() != chunks.len() {
            return Err(TutorError::Provider {
                provider: "embedding".to_string(),
                message: format!(
                    "provider returned {} embeddings for {} chunks",
                    embeddings.len(),
                    chunks.len()
                ),
            });
        }

        let entries = embeddings
            .into_iter()
            .zip(chunks)
            .map(|(embedding, text)| Entry { embedding, text })
            .collect::<Vec<_>>();

        info!(entry_count = entries.len(), "vector index built");
        Ok(VectorIndex { provider, entries })
    }

    /// Search for the `k` entries most similar to `query`.
    ///
    /// The query is embedded with the same provider used at build time.
    /// Results are ordered by descending cosine similarity; equal scores
    /// keep insertion order (stable sort). Returns fewer than `k` results
    /// when the index holds fewer entries.
    pub async fn search(&self, query: &str, k: usize) -> Result<Vec<SearchResult>> {
        let query_embedding = self.provider.embed(query).await?;

        let mut scored: Vec<SearchResult> = self
            .entries
            .iter()
            .map(|entry| SearchResult {
                text: entry.text.clone(),
                score: cosine_similarity(&entry.embedding, &query_embedding),
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);
        Ok(scored)
    }

    /// Number of indexed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no entries.
    ///
    /// Always false for an index produced by [`build`](VectorIndex::build).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
