//! Deterministic fakes for tests and examples.
//!
//! [`MockEmbeddingProvider`] produces hashed bag-of-words vectors, so texts
//! sharing tokens score high under cosine similarity. [`MockGenerator`]
//! returns a canned answer and records every prompt it receives. Both count
//! their calls, which lets tests assert that a failed or not-ready pipeline
//! never reached a provider.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::embedding::EmbeddingProvider;
use crate::error::Result;
use crate::generation::AnswerGenerator;

/// A deterministic [`EmbeddingProvider`] based on hashed bag-of-words.
///
/// Each token is lowercased, stripped of surrounding punctuation, hashed,
/// and added into a bucket of the output vector; the vector is then
/// L2-normalized. Token overlap between two texts directly increases their
/// cosine similarity, which is what retrieval tests need.
pub struct MockEmbeddingProvider {
    dimensions: usize,
    calls: AtomicUsize,
}

impl MockEmbeddingProvider {
    /// Create a provider emitting vectors of the given dimension.
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions, calls: AtomicUsize::new(0) }
    }

    /// Number of `embed` calls made so far (batch calls count per item).
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn token_hash(token: &str) -> u64 {
    token.bytes().fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(u64::from(b)))
}

#[async_trait]
impl EmbeddingProvider for MockEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let mut emb = vec![0.0f32; self.dimensions];
        for token in text.split_whitespace() {
            let token: String = token
                .chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect();
            if token.is_empty() {
                continue;
            }
            let bucket = (token_hash(&token) % self.dimensions as u64) as usize;
            emb[bucket] += 1.0;
        }

        // L2-normalize so cosine similarity is just the dot product.
        let norm: f32 = emb.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            emb.iter_mut().for_each(|x| *x /= norm);
        }
        Ok(emb)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

/// An [`AnswerGenerator`] that returns a canned answer and records prompts.
pub struct MockGenerator {
    answer: String,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl MockGenerator {
    /// Create a generator that always returns `answer`.
    pub fn new(answer: impl Into<String>) -> Self {
        Self { answer: answer.into(), prompts: Mutex::new(Vec::new()), calls: AtomicUsize::new(0) }
    }

    /// Number of `generate` calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// All prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompt log poisoned").clone()
    }
}

#[async_trait]
impl AnswerGenerator for MockGenerator {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().expect("prompt log poisoned").push(prompt.to_string());
        Ok(self.answer.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn embeddings_are_deterministic_and_normalized() {
        let provider = MockEmbeddingProvider::new(32);
        let a = provider.embed("rust is fast").await.unwrap();
        let b = provider.embed("rust is fast").await.unwrap();
        assert_eq!(a, b);

        let norm: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn token_overlap_scores_higher_than_disjoint_text() {
        let provider = MockEmbeddingProvider::new(64);
        let target = provider.embed("artificial intelligence transforms technology").await.unwrap();
        let related = provider.embed("what is artificial intelligence?").await.unwrap();
        let unrelated = provider.embed("baking sourdough bread at home").await.unwrap();

        let dot = |x: &[f32], y: &[f32]| x.iter().zip(y).map(|(a, b)| a * b).sum::<f32>();
        assert!(dot(&target, &related) > dot(&target, &unrelated));
    }

    #[tokio::test]
    async fn generator_records_prompts() {
        let generator = MockGenerator::new("canned");
        let answer = generator.generate("the prompt").await.unwrap();
        assert_eq!(answer, "canned");
        assert_eq!(generator.call_count(), 1);
        assert_eq!(generator.prompts(), vec!["the prompt".to_string()]);
    }
}
