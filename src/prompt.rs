//! Prompt assembly: context joining and the fixed QA template.

/// Separator between context chunks (and between the documents they came from).
const CONTEXT_SEPARATOR: &str = "\n\n";

/// Join context chunks with a blank-line separator.
pub fn format_context(chunks: &[String]) -> String {
    chunks.join(CONTEXT_SEPARATOR)
}

/// Substitute retrieved context and the question into the QA template.
///
/// Pure and deterministic. Empty `context_chunks` render an empty context
/// section; the model is expected to say it lacks information rather than
/// hallucinate, so this is not an error.
pub fn assemble(context_chunks: &[String], question: &str) -> String {
    let context = format_context(context_chunks);
    format!(
        "Answer the question based only on the following context:\n\
         {context}\n\
         \n\
         Question: {question}\n\
         \n\
         Answer:"
    )
}
