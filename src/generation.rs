//! Answer generator trait for LLM completion backends.

use async_trait::async_trait;

use crate::error::Result;

/// A provider that generates a single text completion from a prompt.
///
/// This is the narrow capability the pipeline requires of an LLM backend:
/// one prompt in, one completion out, no streaming. Model selection,
/// temperature, and retry policy are construction-time configuration of
/// concrete implementations, not part of this interface.
#[async_trait]
pub trait AnswerGenerator: Send + Sync {
    /// A short name identifying the backend, used in logs and errors.
    fn name(&self) -> &str;

    /// Generate a completion for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
