//! Integration tests for the batch pipeline

#[cfg(test)]
mod tests {
    use crate::{
        BatchPipeline, DocumentFailure, DocumentOutcome, GenerationFailure, PipelineConfig,
        PipelineError, PromptBuilder,
    };
    use std::sync::{Arc, Mutex};
    use verdict_domain::traits::{DocumentSource, RecordSink, TextExtractor};
    use verdict_domain::{OutputRecord, SourceDocument, MIME_WORD_LEGACY, MIME_WORD_XML};
    use verdict_llm::{GenerationError, MockProvider};

    struct VecSource {
        documents: Vec<SourceDocument>,
    }

    impl DocumentSource for VecSource {
        type Error = String;

        fn list(&self, _folder_id: &str) -> Result<Vec<SourceDocument>, Self::Error> {
            Ok(self.documents.clone())
        }
    }

    struct FailingSource;

    impl DocumentSource for FailingSource {
        type Error = String;

        fn list(&self, _folder_id: &str) -> Result<Vec<SourceDocument>, Self::Error> {
            Err("storage unavailable".to_string())
        }
    }

    struct Utf8Extractor;

    impl TextExtractor for Utf8Extractor {
        type Error = String;

        fn extract(&self, document: &SourceDocument) -> Result<String, Self::Error> {
            Ok(String::from_utf8_lossy(&document.content).into_owned())
        }
    }

    struct FailingExtractor;

    impl TextExtractor for FailingExtractor {
        type Error = String;

        fn extract(&self, _document: &SourceDocument) -> Result<String, Self::Error> {
            Err("conversion failed".to_string())
        }
    }

    #[derive(Clone, Default)]
    struct MemorySink {
        files: Arc<Mutex<Vec<(String, OutputRecord)>>>,
    }

    impl RecordSink for MemorySink {
        type Error = String;

        fn write(&mut self, folder_id: &str, record: &OutputRecord) -> Result<(), Self::Error> {
            self.files
                .lock()
                .unwrap()
                .push((folder_id.to_string(), record.clone()));
            Ok(())
        }
    }

    struct FailingSink;

    impl RecordSink for FailingSink {
        type Error = String;

        fn write(&mut self, _folder_id: &str, _record: &OutputRecord) -> Result<(), Self::Error> {
            Err("quota exceeded".to_string())
        }
    }

    fn envelope(text: &str) -> String {
        serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        })
        .to_string()
    }

    fn docx(name: &str, text: &str) -> SourceDocument {
        SourceDocument::new(name, MIME_WORD_XML, text.as_bytes().to_vec())
    }

    fn config() -> PipelineConfig {
        PipelineConfig::new("source", "target")
    }

    #[tokio::test]
    async fn test_supported_document_is_processed_and_unsupported_is_skipped() {
        let documents = vec![
            docx("verdict.docx", "some verdict text"),
            SourceDocument::new("scan.pdf", "application/pdf", b"%PDF".to_vec()),
        ];

        let provider = MockProvider::new(envelope(r#"{"court name": "שלום"}"#));
        let sink = MemorySink::default();

        let mut pipeline = BatchPipeline::new(
            VecSource { documents },
            Utf8Extractor,
            sink.clone(),
            provider,
            config(),
        );

        let summary = pipeline.run().await.unwrap();

        assert_eq!(summary.processed, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 0);

        let files = sink.files.lock().unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].0, "target");
        assert_eq!(files[0].1.file_name, "verdict_parsed.json");
    }

    #[tokio::test]
    async fn test_http_error_is_isolated_to_one_document() {
        let documents = vec![
            docx("first.docx", "first verdict"),
            docx("second.docx", "second verdict"),
        ];

        let mut provider = MockProvider::new(envelope(r#"{"ok": true}"#));
        let failing_prompt = PromptBuilder::new("first verdict").build();
        provider.add_error(failing_prompt, GenerationError::HttpStatus(500));

        let sink = MemorySink::default();
        let mut pipeline = BatchPipeline::new(
            VecSource { documents },
            Utf8Extractor,
            sink.clone(),
            provider,
            config(),
        );

        let summary = pipeline.run().await.unwrap();

        assert_eq!(summary.processed, 1);
        assert_eq!(summary.failed, 1);

        // Only the second document produced a record
        let files = sink.files.lock().unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].1.file_name, "second_parsed.json");
    }

    #[tokio::test]
    async fn test_fenced_response_is_canonicalized() {
        let documents = vec![docx("verdict.docx", "text")];

        let provider = MockProvider::new(envelope("```json\n{\"a\":1}\n```"));
        let sink = MemorySink::default();
        let mut pipeline = BatchPipeline::new(
            VecSource { documents },
            Utf8Extractor,
            sink.clone(),
            provider,
            config(),
        );

        let summary = pipeline.run().await.unwrap();
        assert_eq!(summary.processed, 1);

        let files = sink.files.lock().unwrap();
        assert_eq!(files[0].1.content, "{\n  \"a\": 1\n}");
    }

    #[tokio::test]
    async fn test_run_with_no_supported_documents() {
        let documents = vec![SourceDocument::new(
            "scan.pdf",
            "application/pdf",
            Vec::new(),
        )];

        let provider = MockProvider::default();
        let call_counter = provider.clone();

        let mut pipeline = BatchPipeline::new(
            VecSource { documents },
            Utf8Extractor,
            MemorySink::default(),
            provider,
            config(),
        );

        let summary = pipeline.run().await.unwrap();

        assert!(summary.is_empty());
        assert_eq!(summary.skipped, 1);
        assert_eq!(call_counter.call_count(), 0);
    }

    #[tokio::test]
    async fn test_run_with_empty_folder() {
        let mut pipeline = BatchPipeline::new(
            VecSource {
                documents: Vec::new(),
            },
            Utf8Extractor,
            MemorySink::default(),
            MockProvider::default(),
            config(),
        );

        let summary = pipeline.run().await.unwrap();
        assert!(summary.is_empty());
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.failed, 0);
    }

    #[tokio::test]
    async fn test_extraction_failure_does_not_abort_the_run() {
        let documents = vec![
            docx("first.docx", "first"),
            docx("second.docx", "second"),
        ];

        let provider = MockProvider::new(envelope("{}"));
        let call_counter = provider.clone();

        let mut pipeline = BatchPipeline::new(
            VecSource { documents },
            FailingExtractor,
            MemorySink::default(),
            provider,
            config(),
        );

        let summary = pipeline.run().await.unwrap();

        assert_eq!(summary.failed, 2);
        assert_eq!(summary.processed, 0);
        // No prompt ever reached the provider
        assert_eq!(call_counter.call_count(), 0);
    }

    #[tokio::test]
    async fn test_write_failure_does_not_abort_the_run() {
        let documents = vec![
            docx("first.docx", "first"),
            docx("second.docx", "second"),
        ];

        let mut pipeline = BatchPipeline::new(
            VecSource { documents },
            Utf8Extractor,
            FailingSink,
            MockProvider::new(envelope("{}")),
            config(),
        );

        let summary = pipeline.run().await.unwrap();
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.processed, 0);
    }

    #[tokio::test]
    async fn test_listing_failure_aborts_the_run() {
        let mut pipeline = BatchPipeline::new(
            FailingSource,
            Utf8Extractor,
            MemorySink::default(),
            MockProvider::default(),
            config(),
        );

        let result = pipeline.run().await;
        assert!(matches!(result, Err(PipelineError::Listing(_))));
    }

    #[tokio::test]
    async fn test_unparseable_candidate_marks_document_failed() {
        let documents = vec![docx("verdict.docx", "text")];

        let provider = MockProvider::new(envelope("the model decided to chat instead"));
        let sink = MemorySink::default();
        let mut pipeline = BatchPipeline::new(
            VecSource { documents },
            Utf8Extractor,
            sink.clone(),
            provider,
            config(),
        );

        let summary = pipeline.run().await.unwrap();

        assert_eq!(summary.failed, 1);
        assert!(sink.files.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_one_generation_call_per_supported_document() {
        let documents = vec![
            docx("a.docx", "a"),
            SourceDocument::new("b.doc", MIME_WORD_LEGACY, b"b".to_vec()),
            SourceDocument::new("c.txt", "text/plain", b"c".to_vec()),
        ];

        let provider = MockProvider::new(envelope("{}"));
        let call_counter = provider.clone();

        let mut pipeline = BatchPipeline::new(
            VecSource { documents },
            Utf8Extractor,
            MemorySink::default(),
            provider,
            config(),
        );

        let summary = pipeline.run().await.unwrap();

        assert_eq!(summary.processed, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(call_counter.call_count(), 2);
    }

    #[test]
    fn test_failure_values_carry_their_step() {
        let outcome = DocumentOutcome::Failed(DocumentFailure::Generation(
            GenerationFailure::HttpStatus(429),
        ));
        match outcome {
            DocumentOutcome::Failed(DocumentFailure::Generation(
                GenerationFailure::HttpStatus(code),
            )) => assert_eq!(code, 429),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
