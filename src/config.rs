//! Configuration for the tutor pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TutorError};

/// Configuration parameters for the tutor pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TutorConfig {
    /// Maximum chunk size in characters.
    pub chunk_size: usize,
    /// Number of overlapping characters between consecutive chunks.
    pub chunk_overlap: usize,
    /// Number of top results to retrieve per question.
    pub top_k: usize,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self { chunk_size: 500, chunk_overlap: 50, top_k: 3 }
    }
}

impl TutorConfig {
    /// Create a new builder for constructing a [`TutorConfig`].
    pub fn builder() -> TutorConfigBuilder {
        TutorConfigBuilder::default()
    }
}

/// Builder for constructing a validated [`TutorConfig`].
#[derive(Debug, Clone, Default)]
pub struct TutorConfigBuilder {
    config: TutorConfig,
}

impl TutorConfigBuilder {
    /// Set the maximum chunk size in characters.
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.config.chunk_size = size;
        self
    }

    /// Set the overlap between consecutive chunks in characters.
    pub fn chunk_overlap(mut self, overlap: usize) -> Self {
        self.config.chunk_overlap = overlap;
        self
    }

    /// Set the number of top results to retrieve per question.
    pub fn top_k(mut self, k: usize) -> Self {
        self.config.top_k = k;
        self
    }

    /// Build the [`TutorConfig`], validating that parameters are consistent.
    ///
    /// # Errors
    ///
    /// Returns [`TutorError::Config`] if:
    /// - `chunk_overlap >= chunk_size`
    /// - `top_k == 0`
    pub fn build(self) -> Result<TutorConfig> {
        if self.config.chunk_overlap >= self.config.chunk_size {
            return Err(TutorError::Config(format!(
                "chunk_overlap ({}) must be less than chunk_size ({})",
                self.config.chunk_overlap, self.config.chunk_size
            )));
        }
        if self.config.top_k == 0 {
            return Err(TutorError::Config("top_k must be greater than zero".to_string()));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = TutorConfig::builder().build().unwrap();
        assert_eq!(config, TutorConfig::default());
        assert_eq!(config.chunk_size, 500);
        assert_eq!(config.chunk_overlap, 50);
        assert_eq!(config.top_k, 3);
    }

    #[test]
    fn rejects_overlap_not_less_than_size() {
        let err = TutorConfig::builder().chunk_size(100).chunk_overlap(100).build().unwrap_err();
        assert!(matches!(err, TutorError::Config(_)));
    }

    #[test]
    fn rejects_zero_top_k() {
        let err = TutorConfig::builder().top_k(0).build().unwrap_err();
        assert!(matches!(err, TutorError::Config(_)));
    }
}
