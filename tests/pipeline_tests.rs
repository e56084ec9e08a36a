//! Integration tests for the tutor pipeline lifecycle and answer flow.

use std::fs;
use std::sync::Arc;

use async_trait::async_trait;
use tutor_rag::{
    AnswerGenerator, EmbeddingProvider, MockEmbeddingProvider, MockGenerator, TutorConfig,
    TutorError, TutorPipeline,
};

/// An [`AnswerGenerator`] that always fails.
struct FailingGenerator;

#[async_trait]
impl AnswerGenerator for FailingGenerator {
    fn name(&self) -> &str {
        "failing"
    }

    async fn generate(&self, _prompt: &str) -> tutor_rag::Result<String> {
        Err(TutorError::Provider { provider: "failing".into(), message: "quota exceeded".into() })
    }
}

/// An [`EmbeddingProvider`] that always fails.
struct FailingEmbedder;

#[async_trait]
impl EmbeddingProvider for FailingEmbedder {
    async fn embed(&self, _text: &str) -> tutor_rag::Result<Vec<f32>> {
        Err(TutorError::Provider { provider: "failing".into(), message: "network error".into() })
    }

    fn dimensions(&self) -> usize {
        64
    }
}

fn corpus_dir(files: &[(&str, &str)]) -> tempfile::TempDir {
    let temp = tempfile::tempdir().unwrap();
    for (name, content) in files {
        fs::write(temp.path().join(name), content).unwrap();
    }
    temp
}

fn mock_pipeline(
    generator: Arc<MockGenerator>,
) -> (TutorPipeline, Arc<MockEmbeddingProvider>) {
    let embedder = Arc::new(MockEmbeddingProvider::new(64));
    let pipeline = TutorPipeline::builder()
        .embedding_provider(Arc::clone(&embedder) as Arc<dyn EmbeddingProvider>)
        .generator(generator as Arc<dyn AnswerGenerator>)
        .build()
        .unwrap();
    (pipeline, embedder)
}

#[tokio::test]
async fn retrieved_context_contains_the_relevant_sentence() {
    let corpus = corpus_dir(&[
        ("ai.txt", "Artificial Intelligence is transforming technology."),
        ("cooking.txt", "Slow-roasted vegetables need olive oil and patience."),
        ("gardening.txt", "Tomato seedlings should be hardened off before planting."),
    ]);

    let generator = Arc::new(MockGenerator::new("AI transforms technology."));
    let (pipeline, _) = mock_pipeline(Arc::clone(&generator));

    pipeline.ingest(corpus.path()).await.unwrap();
    let answer = pipeline.answer("What is AI?").await.unwrap();
    assert_eq!(answer, "AI transforms technology.");

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(
        prompts[0].contains("Artificial Intelligence is transforming technology."),
        "retrieved context missing the relevant sentence:\n{}",
        prompts[0],
    );
    assert!(prompts[0].contains("Question: What is AI?"));
}

#[tokio::test]
async fn answer_before_ingest_is_not_ready_and_touches_no_provider() {
    let generator = Arc::new(MockGenerator::new("unused"));
    let (pipeline, embedder) = mock_pipeline(Arc::clone(&generator));

    let err = pipeline.answer("What is AI?").await.unwrap_err();
    assert!(matches!(err, TutorError::NotReady));
    assert_eq!(embedder.call_count(), 0);
    assert_eq!(generator.call_count(), 0);
    assert!(!pipeline.is_ready().await);
    assert_eq!(pipeline.chunk_count().await, 0);
}

#[tokio::test]
async fn answers_are_trimmed() {
    let corpus = corpus_dir(&[("doc.txt", "Some content to index.")]);
    let generator = Arc::new(MockGenerator::new("  \n An answer with padding. \n"));
    let (pipeline, _) = mock_pipeline(generator);

    pipeline.ingest(corpus.path()).await.unwrap();
    let answer = pipeline.answer("anything").await.unwrap();
    assert_eq!(answer, "An answer with padding.");
}

#[tokio::test]
async fn generator_failure_surfaces_as_provider_error() {
    let corpus = corpus_dir(&[("doc.txt", "Some content to index.")]);
    let pipeline = TutorPipeline::builder()
        .embedding_provider(Arc::new(MockEmbeddingProvider::new(64)))
        .generator(Arc::new(FailingGenerator))
        .build()
        .unwrap();

    pipeline.ingest(corpus.path()).await.unwrap();
    let err = pipeline.answer("anything").await.unwrap_err();
    assert!(matches!(err, TutorError::Provider { .. }));
}

#[tokio::test]
async fn embedding_failure_aborts_ingestion() {
    let corpus = corpus_dir(&[("doc.txt", "Some content to index.")]);
    let pipeline = TutorPipeline::builder()
        .embedding_provider(Arc::new(FailingEmbedder))
        .generator(Arc::new(MockGenerator::new("unused")))
        .build()
        .unwrap();

    let err = pipeline.ingest(corpus.path()).await.unwrap_err();
    assert!(matches!(err, TutorError::Provider { .. }));
    assert!(!pipeline.is_ready().await);
}

#[tokio::test]
async fn ingesting_a_missing_directory_is_source_not_found() {
    let temp = tempfile::tempdir().unwrap();
    let (pipeline, _) = mock_pipeline(Arc::new(MockGenerator::new("unused")));

    let err = pipeline.ingest(temp.path().join("missing")).await.unwrap_err();
    assert!(matches!(err, TutorError::SourceNotFound { .. }));
}

#[tokio::test]
async fn reingest_rebuilds_the_index_from_scratch() {
    let small = corpus_dir(&[("a.txt", "short")]);
    let long_text = "long text ".repeat(200);
    let large = corpus_dir(&[("a.txt", long_text.as_str())]);

    let config = TutorConfig::builder().chunk_size(100).chunk_overlap(20).build().unwrap();
    let pipeline = TutorPipeline::builder()
        .config(config)
        .embedding_provider(Arc::new(MockEmbeddingProvider::new(64)))
        .generator(Arc::new(MockGenerator::new("unused")))
        .build()
        .unwrap();

    pipeline.ingest(small.path()).await.unwrap();
    let first_count = pipeline.chunk_count().await;
    assert_eq!(first_count, 1);

    pipeline.ingest(large.path()).await.unwrap();
    let second_count = pipeline.chunk_count().await;
    assert!(second_count > first_count);
}

#[tokio::test]
async fn shutdown_returns_the_pipeline_to_uninitialized() {
    let corpus = corpus_dir(&[("doc.txt", "Some content to index.")]);
    let (pipeline, _) = mock_pipeline(Arc::new(MockGenerator::new("unused")));

    pipeline.ingest(corpus.path()).await.unwrap();
    assert!(pipeline.is_ready().await);

    pipeline.shutdown().await;
    assert!(!pipeline.is_ready().await);
    assert_eq!(pipeline.chunk_count().await, 0);

    let err = pipeline.answer("anything").await.unwrap_err();
    assert!(matches!(err, TutorError::NotReady));
}

#[tokio::test]
async fn concurrent_answers_share_the_index() {
    let corpus = corpus_dir(&[("doc.txt", "Concurrency is handled with read locks.")]);
    let generator = Arc::new(MockGenerator::new("done"));
    let (pipeline, _) = mock_pipeline(Arc::clone(&generator));
    let pipeline = Arc::new(pipeline);

    pipeline.ingest(corpus.path()).await.unwrap();

    let mut handles = Vec::new();
    for i in 0..8 {
        let pipeline = Arc::clone(&pipeline);
        handles.push(tokio::spawn(async move {
            pipeline.answer(&format!("question {i}")).await
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), "done");
    }
    assert_eq!(generator.call_count(), 8);
}

#[tokio::test]
async fn builder_requires_both_providers() {
    let missing_generator = TutorPipeline::builder()
        .embedding_provider(Arc::new(MockEmbeddingProvider::new(64)))
        .build();
    assert!(matches!(missing_generator.unwrap_err(), TutorError::Config(_)));

    let missing_embedder =
        TutorPipeline::builder().generator(Arc::new(MockGenerator::new("x"))).build();
    assert!(matches!(missing_embedder.unwrap_err(), TutorError::Config(_)));
}
