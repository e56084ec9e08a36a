//! Data types for loaded documents and search results.

use serde::{Deserialize, Serialize};

/// A source document loaded from disk.
///
/// Documents are immutable once loaded: the loader produces them, the
/// ingestion path consumes them for chunking, and they are not retained
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// The source identifier (file name).
    pub source: String,
    /// The text content of the document.
    pub text: String,
}

/// A retrieved chunk paired with a relevance score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The text of the retrieved chunk.
    pub text: String,
    /// The cosine similarity score (higher is more relevant).
    pub score: f32,
}
