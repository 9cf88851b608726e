//! Filesystem-backed collaborator implementations
//!
//! Local directories stand in for the cloud folders of a production
//! deployment; folder identifiers are directory paths.

use std::fs;
use std::io;
use std::path::Path;
use verdict_domain::traits::{DocumentSource, RecordSink, TextExtractor};
use verdict_domain::{OutputRecord, SourceDocument, MIME_WORD_LEGACY, MIME_WORD_XML};

/// Lists the regular files of a directory as source documents
pub struct FsDocumentSource;

impl DocumentSource for FsDocumentSource {
    type Error = io::Error;

    fn list(&self, folder_id: &str) -> Result<Vec<SourceDocument>, Self::Error> {
        let mut documents = Vec::new();

        for entry in fs::read_dir(folder_id)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            let mime_type = mime_type_for(&name);
            let content = fs::read(entry.path())?;

            documents.push(SourceDocument::new(name, mime_type, content));
        }

        // Directory iteration order is platform-defined; sort for a
        // reproducible run log
        documents.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(documents)
    }
}

fn mime_type_for(name: &str) -> &'static str {
    let extension = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("doc") => MIME_WORD_LEGACY,
        Some("docx") => MIME_WORD_XML,
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}

/// Decodes document bytes as UTF-8 text.
///
/// A production deployment puts a word-processor conversion service behind
/// the `TextExtractor` seam; this implementation covers documents whose
/// bytes already hold plain text.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    type Error = io::Error;

    fn extract(&self, document: &SourceDocument) -> Result<String, Self::Error> {
        Ok(String::from_utf8_lossy(&document.content).into_owned())
    }
}

/// Writes records into a target directory, creating it on first use
pub struct FsRecordSink;

impl RecordSink for FsRecordSink {
    type Error = io::Error;

    fn write(&mut self, folder_id: &str, record: &OutputRecord) -> Result<(), Self::Error> {
        fs::create_dir_all(folder_id)?;
        fs::write(Path::new(folder_id).join(&record.file_name), &record.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type_mapping() {
        assert_eq!(mime_type_for("a.doc"), MIME_WORD_LEGACY);
        assert_eq!(mime_type_for("a.DOCX"), MIME_WORD_XML);
        assert_eq!(mime_type_for("a.pdf"), "application/pdf");
        assert_eq!(mime_type_for("a"), "application/octet-stream");
    }

    #[test]
    fn test_list_reads_files_and_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.docx"), b"second").unwrap();
        fs::write(dir.path().join("a.doc"), b"first").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let documents = FsDocumentSource
            .list(dir.path().to_str().unwrap())
            .unwrap();

        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].name, "a.doc");
        assert_eq!(documents[0].mime_type, MIME_WORD_LEGACY);
        assert_eq!(documents[0].content, b"first");
        assert_eq!(documents[1].name, "b.docx");
    }

    #[test]
    fn test_list_missing_directory_fails() {
        let result = FsDocumentSource.list("/nonexistent/source/folder");
        assert!(result.is_err());
    }

    #[test]
    fn test_plain_text_extractor() {
        let document = SourceDocument::new("a.docx", MIME_WORD_XML, "שלום".as_bytes().to_vec());
        let text = PlainTextExtractor.extract(&document).unwrap();
        assert_eq!(text, "שלום");
    }

    #[test]
    fn test_sink_creates_target_directory_and_writes() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("records");

        let record = OutputRecord {
            file_name: "verdict_parsed.json".to_string(),
            content: "{\n  \"a\": 1\n}".to_string(),
        };

        FsRecordSink
            .write(target.to_str().unwrap(), &record)
            .unwrap();

        let written = fs::read_to_string(target.join("verdict_parsed.json")).unwrap();
        assert_eq!(written, record.content);
    }
}
