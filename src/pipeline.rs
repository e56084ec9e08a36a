//! Tutor pipeline orchestrator.
//!
//! The [`TutorPipeline`] coordinates the full ingest-and-answer workflow by
//! composing an [`EmbeddingProvider`], an [`AnswerGenerator`], and a
//! [`Chunker`]. It has two macro-states: Uninitialized and Ready.
//! [`ingest()`](TutorPipeline::ingest) performs the one-time transition;
//! [`answer()`](TutorPipeline::answer) fails fast with
//! [`TutorError::NotReady`] until it completes.
//!
//! # Example
//!
//! ```rust,ignore
//! use tutor_rag::{TutorPipeline, TutorConfig};
//!
//! let pipeline = TutorPipeline::builder()
//!     .config(TutorConfig::default())
//!     .embedding_provider(Arc::new(embedder))
//!     .generator(Arc::new(llm))
//!     .build()?;
//!
//! pipeline.ingest("./sample_data").await?;
//! let answer = pipeline.answer("What is AI?").await?;
//! ```

use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{error, info};

use crate::chunking::{Chunker, FixedSizeChunker};
use crate::config::TutorConfig;
use crate::embedding::EmbeddingProvider;
use crate::error::{Result, TutorError};
use crate::generation::AnswerGenerator;
use crate::index::VectorIndex;
use crate::loader::{combined_text, load_documents};
use crate::prompt::assemble;
use crate::retriever::Retriever;

/// The tutor pipeline orchestrator.
///
/// Coordinates ingestion (load → chunk → embed → index) and answering
/// (retrieve → assemble → generate). Construct one via
/// [`TutorPipeline::builder()`] and share it with request handlers behind
/// an `Arc`; concurrent `answer()` calls only take read locks, so they
/// proceed in parallel.
pub struct TutorPipeline {
    config: TutorConfig,
    chunker: Arc<dyn Chunker>,
    embedding_provider: Arc<dyn EmbeddingProvider>,
    generator: Arc<dyn AnswerGenerator>,
    /// Written once by `ingest()`, read by every `answer()`.
    retriever: RwLock<Option<Retriever>>,
}

impl std::fmt::Debug for TutorPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TutorPipeline")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TutorPipeline {
    /// Create a new [`TutorPipelineBuilder`].
    pub fn builder() -> TutorPipelineBuilder {
        TutorPipelineBuilder::default()
    }

    /// Return a reference to the pipeline configuration.
    pub fn config(&self) -> &TutorConfig {
        &self.config
    }

    /// Build the vector index from the `.txt` documents under `source_dir`.
    ///
    /// Runs the full ingestion path: load documents, join them into one
    /// combined text, chunk it, embed the chunks, and store the index.
    /// Re-invocation rebuilds from scratch, replacing any previous index
    /// wholesale. The caller must complete one successful `ingest()` before
    /// serving `answer()` traffic.
    ///
    /// # Errors
    ///
    /// - [`TutorError::SourceNotFound`] if `source_dir` does not exist.
    /// - [`TutorError::EmptyCorpus`] if no usable documents or chunks remain.
    /// - [`TutorError::Provider`] if embedding fails.
    pub async fn ingest(&self, source_dir: impl AsRef<Path>) -> Result<()> {
        let documents = load_documents(source_dir)?;
        let document_count = documents.len();

        let combined = combined_text(&documents);
        let total_chars = combined.chars().count();

        let chunks = self.chunker.chunk(&combined);
        if chunks.is_empty() {
            return Err(TutorError::EmptyCorpus("chunking produced no chunks".to_string()));
        }
        let chunk_count = chunks.len();

        let index =
            VectorIndex::build(Arc::clone(&self.embedding_provider), chunks).await.map_err(|e| {
                error!(error = %e, "index build failed during ingestion");
                e
            })?;

        let retriever = Retriever::new(index, self.config.top_k);
        *self.retriever.write().await = Some(retriever);

        info!(document_count, chunk_count, total_chars, "ingestion complete");
        Ok(())
    }

    /// Answer `question` from the ingested corpus.
    ///
    /// Retrieves the most relevant chunks, assembles the QA prompt, and
    /// asks the generator for a completion. The returned answer is trimmed
    /// of leading and trailing whitespace.
    ///
    /// The boundary layer is expected to validate questions before calling
    /// (non-empty after trimming, at most 1000 characters); the core does
    /// not enforce those limits.
    ///
    /// # Errors
    ///
    /// - [`TutorError::NotReady`] if `ingest()` has not completed; no
    ///   provider is contacted in that case.
    /// - [`TutorError::Provider`] if embedding or generation fails.
    pub async fn answer(&self, question: &str) -> Result<String> {
        let guard = self.retriever.read().await;
        let retriever = guard.as_ref().ok_or(TutorError::NotReady)?;

        let context_chunks = retriever.retrieve(question).await.map_err(|e| {
            error!(error = %e, "retrieval failed");
            e
        })?;

        let prompt = assemble(&context_chunks, question);

        let answer = self.generator.generate(&prompt).await.map_err(|e| {
            error!(generator = self.generator.name(), error = %e, "generation failed");
            e
        })?;

        info!(
            context_chunks = context_chunks.len(),
            answer_chars = answer.len(),
            "answer generated"
        );
        Ok(answer.trim().to_string())
    }

    /// Whether `ingest()` has completed and `answer()` can be served.
    pub async fn is_ready(&self) -> bool {
        self.retriever.read().await.is_some()
    }

    /// Number of chunks in the current index, or 0 while Uninitialized.
    ///
    /// Backs the boundary layer's health reporting.
    pub async fn chunk_count(&self) -> usize {
        self.retriever.read().await.as_ref().map_or(0, Retriever::len)
    }

    /// Tear the pipeline down to the Uninitialized state.
    ///
    /// Drops the index; subsequent `answer()` calls fail with
    /// [`TutorError::NotReady`] until `ingest()` runs again.
    pub async fn shutdown(&self) {
        *self.retriever.write().await = None;
        info!("pipeline shut down");
    }
}

/// Builder for constructing a [`TutorPipeline`].
///
/// The embedding provider and generator are required; the config defaults
/// to [`TutorConfig::default()`] and the chunker is derived from the config
/// unless one is injected.
#[derive(Default)]
pub struct TutorPipelineBuilder {
    config: Option<TutorConfig>,
    chunker: Option<Arc<dyn Chunker>>,
    embedding_provider: Option<Arc<dyn EmbeddingProvider>>,
    generator: Option<Arc<dyn AnswerGenerator>>,
}

impl TutorPipelineBuilder {
    /// Set the pipeline configuration.
    pub fn config(mut self, config: TutorConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the chunker derived from the configuration.
    pub fn chunker(mut self, chunker: Arc<dyn Chunker>) -> Self {
        self.chunker = Some(chunker);
        self
    }

    /// Set the embedding provider.
    pub fn embedding_provider(mut self, provider: Arc<dyn EmbeddingProvider>) -> Self {
        self.embedding_provider = Some(provider);
        self
    }

    /// Set the answer generator.
    pub fn generator(mut self, generator: Arc<dyn AnswerGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Build the [`TutorPipeline`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`TutorError::Config`] if the embedding provider or
    /// generator is missing.
    pub fn build(self) -> Result<TutorPipeline> {
        let config = self.config.unwrap_or_default();
        let embedding_provider = self
            .embedding_provider
            .ok_or_else(|| TutorError::Config("embedding_provider is required".to_string()))?;
        let generator = self
            .generator
            .ok_or_else(|| TutorError::Config("generator is required".to_string()))?;
        let chunker = self.chunker.unwrap_or_else(|| {
            Arc::new(FixedSizeChunker::new(config.chunk_size, config.chunk_overlap))
        });

        Ok(TutorPipeline {
            config,
            chunker,
            embedding_provider,
            generator,
            retriever: RwLock::new(None),
        })
    }
}
