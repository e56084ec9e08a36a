//! Document loading from a directory of plain-text files.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::document::Document;
use crate::error::{Result, TutorError};

/// Load all `.txt` documents directly under `dir` (non-recursive).
///
/// Files are read in sorted path order so ingestion is deterministic.
/// A file that cannot be read is logged and skipped; a file whose trimmed
/// content is empty is skipped silently. Loading only fails when the
/// directory is missing or nothing usable remains.
///
/// # Errors
///
/// - [`TutorError::SourceNotFound`] if `dir` does not exist.
/// - [`TutorError::EmptyCorpus`] if the directory contains no `.txt` files,
///   or if every file was skipped.
pub fn load_documents(dir: impl AsRef<Path>) -> Result<Vec<Document>> {
    let dir = dir.as_ref();
    if !dir.exists() {
        return Err(TutorError::SourceNotFound { path: dir.to_path_buf() });
    }

    let mut paths: Vec<_> = fs::read_dir(dir)
        .map_err(|e| TutorError::EmptyCorpus(format!("cannot read {}: {e}", dir.display())))?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Err(TutorError::EmptyCorpus(format!(
            "no .txt files found in {}",
            dir.display()
        )));
    }

    let mut documents = Vec::new();
    for path in &paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(document = %name, error = %e, "failed to load document, skipping");
                continue;
            }
        };

        let content = content.trim();
        if content.is_empty() {
            continue;
        }

        info!(document = %name, chars = content.chars().count(), "loaded document");
        documents.push(Document { source: name, text: content.to_string() });
    }

    if documents.is_empty() {
        return Err(TutorError::EmptyCorpus("no content loaded from text files".to_string()));
    }

    let total_chars: usize = documents.iter().map(|d| d.text.chars().count()).sum();
    info!(document_count = documents.len(), total_chars, "corpus loaded");

    Ok(documents)
}

/// Join document texts with a blank-line separator.
///
/// Ingestion chunks this combined text, so chunks may straddle two source
/// documents.
pub fn combined_text(documents: &[Document]) -> String {
    documents.iter().map(|d| d.text.as_str()).collect::<Vec<_>>().join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn skips_empty_files_and_keeps_valid_content() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("empty.txt"), "   \n").unwrap();
        fs::write(temp.path().join("valid.txt"), "Valid content here.").unwrap();

        let docs = load_documents(temp.path()).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].source, "valid.txt");
        assert_eq!(docs[0].text, "Valid content here.");
    }

    #[test]
    fn missing_directory_is_source_not_found() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("does-not-exist");
        let err = load_documents(&missing).unwrap_err();
        assert!(matches!(err, TutorError::SourceNotFound { .. }));
    }

    #[test]
    fn directory_without_txt_files_is_empty_corpus() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("notes.md"), "not a text file").unwrap();

        let err = load_documents(temp.path()).unwrap_err();
        assert!(matches!(err, TutorError::EmptyCorpus(_)));
    }

    #[test]
    fn only_empty_files_is_empty_corpus() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("a.txt"), "").unwrap();
        fs::write(temp.path().join("b.txt"), "\n\n  ").unwrap();

        let err = load_documents(temp.path()).unwrap_err();
        assert!(matches!(err, TutorError::EmptyCorpus(_)));
    }

    #[test]
    fn does_not_recurse_into_subdirectories() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested/inner.txt"), "nested content").unwrap();
        fs::write(temp.path().join("top.txt"), "top content").unwrap();

        let docs = load_documents(temp.path()).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].source, "top.txt");
    }

    #[test]
    fn documents_load_in_sorted_order() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("b.txt"), "second").unwrap();
        fs::write(temp.path().join("a.txt"), "first").unwrap();

        let docs = load_documents(temp.path()).unwrap();
        let sources: Vec<_> = docs.iter().map(|d| d.source.as_str()).collect();
        assert_eq!(sources, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn combined_text_joins_with_blank_line() {
        let docs = vec![
            Document { source: "a.txt".into(), text: "first".into() },
            Document { source: "b.txt".into(), text: "second".into() },
        ];
        assert_eq!(combined_text(&docs), "first\n\nsecond");
    }
}
