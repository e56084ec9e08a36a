//! Retrieval-Augmented Generation pipeline for a document-grounded tutor.
//!
//! A directory of plain-text documents is chunked, embedded, and indexed
//! into an in-memory vector index; at question time the most similar chunks
//! are retrieved and passed, with the question, to an LLM that synthesizes
//! a grounded answer.
//!
//! The pipeline exposes two operations to its boundary layer:
//! [`TutorPipeline::ingest`] (once at startup) and
//! [`TutorPipeline::answer`] (per request). Providers are narrow capability
//! traits — [`EmbeddingProvider`] and [`AnswerGenerator`] — with an OpenAI
//! implementation behind the `openai` feature and deterministic mocks
//! always available for tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tutor_rag::{MockEmbeddingProvider, MockGenerator, TutorPipeline};
//!
//! let pipeline = TutorPipeline::builder()
//!     .embedding_provider(Arc::new(MockEmbeddingProvider::new(64)))
//!     .generator(Arc::new(MockGenerator::new("A grounded answer.")))
//!     .build()?;
//!
//! pipeline.ingest("./sample_data").await?;
//! let answer = pipeline.answer("What is AI?").await?;
//! ```

pub mod chunking;
pub mod config;
pub mod document;
pub mod embedding;
pub mod error;
pub mod generation;
pub mod index;
pub mod loader;
pub mod mock;
pub mod pipeline;
pub mod prompt;
pub mod retriever;

#[cfg(feature = "openai")]
pub mod openai;

pub use chunking::{Chunker, FixedSizeChunker};
pub use config::{TutorConfig, TutorConfigBuilder};
pub use document::{Document, SearchResult};
pub use embedding::EmbeddingProvider;
pub use error::{Result, TutorError};
pub use generation::AnswerGenerator;
pub use index::VectorIndex;
pub use loader::{combined_text, load_documents};
pub use mock::{MockEmbeddingProvider, MockGenerator};
pub use pipeline::{TutorPipeline, TutorPipelineBuilder};
pub use prompt::{assemble, format_context};
pub use retriever::Retriever;

#[cfg(feature = "openai")]
pub use openai::{OpenAIChatGenerator, OpenAIEmbeddingProvider};
