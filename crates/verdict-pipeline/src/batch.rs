//! Batch orchestrator: one sequential pass over the source folder

use crate::config::PipelineConfig;
use crate::error::{GenerationFailure, PipelineError};
use crate::parser::normalize_response;
use crate::prompt::PromptBuilder;
use crate::types::{DocumentFailure, DocumentOutcome};
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, info, warn};
use verdict_domain::traits::{DocumentSource, GenerationProvider, RecordSink, TextExtractor};
use verdict_domain::{OutputRecord, RunSummary, SourceDocument};

/// Drives one batch run: list, then per document extract → generate →
/// normalize → write.
///
/// Processing is strictly sequential; each document's generation call
/// completes before the next document starts. Every per-document failure
/// degrades to a [`DocumentOutcome::Failed`] and the run continues; only a
/// failed folder listing aborts the run.
pub struct BatchPipeline<F, X, W, L>
where
    F: DocumentSource,
    X: TextExtractor,
    W: RecordSink,
    L: GenerationProvider,
{
    source: F,
    extractor: X,
    sink: W,
    provider: Arc<L>,
    config: PipelineConfig,
}

impl<F, X, W, L> BatchPipeline<F, X, W, L>
where
    F: DocumentSource,
    X: TextExtractor,
    W: RecordSink,
    L: GenerationProvider + Send + Sync + 'static,
    L::Error: Into<GenerationFailure>,
    F::Error: Display,
    X::Error: Display,
    W::Error: Display,
{
    /// Create a new pipeline over the given collaborators
    pub fn new(source: F, extractor: X, sink: W, provider: L, config: PipelineConfig) -> Self {
        Self {
            source,
            extractor,
            sink,
            provider: Arc::new(provider),
            config,
        }
    }

    /// Run one batch over the configured source folder
    pub async fn run(&mut self) -> Result<RunSummary, PipelineError> {
        info!(
            "Starting batch run over source folder '{}'",
            self.config.source_folder_id
        );

        let documents = self
            .source
            .list(&self.config.source_folder_id)
            .map_err(|e| PipelineError::Listing(e.to_string()))?;

        info!("Discovered {} documents", documents.len());

        let mut summary = RunSummary::default();

        for document in &documents {
            debug!("Checking file: {} ({})", document.name, document.mime_type);

            match self.process_document(document).await {
                DocumentOutcome::Saved { output_name } => {
                    info!("Saved record {}", output_name);
                    summary.processed += 1;
                }
                DocumentOutcome::Skipped => {
                    debug!(
                        "Skipping unsupported file type: {} ({})",
                        document.name, document.mime_type
                    );
                    summary.skipped += 1;
                }
                DocumentOutcome::Failed(failure) => {
                    warn!("Document '{}' failed: {}", document.name, failure);
                    summary.failed += 1;
                }
            }
        }

        if summary.is_empty() {
            info!("No supported documents were processed");
        } else {
            info!("Finished processing {} documents", summary.processed);
        }

        Ok(summary)
    }

    /// Take one document through its full lifecycle.
    ///
    /// Extraction, generation, and write failures are all confined to this
    /// document; the caller only sees an outcome value.
    async fn process_document(&mut self, document: &SourceDocument) -> DocumentOutcome {
        if !document.is_supported() {
            return DocumentOutcome::Skipped;
        }

        info!("Processing supported document: {}", document.name);

        let text = match self.extractor.extract(document) {
            Ok(text) => text,
            Err(e) => return DocumentOutcome::Failed(DocumentFailure::Extraction(e.to_string())),
        };

        debug!("Extracted text length: {}", text.len());

        let prompt = PromptBuilder::new(text).build();

        let canonical = match self.generate(&prompt).await {
            Ok(canonical) => canonical,
            Err(failure) => return DocumentOutcome::Failed(DocumentFailure::Generation(failure)),
        };

        let record = OutputRecord::for_document(document, canonical);
        let output_name = record.file_name.clone();

        match self.sink.write(&self.config.target_folder_id, &record) {
            Ok(()) => DocumentOutcome::Saved { output_name },
            Err(e) => DocumentOutcome::Failed(DocumentFailure::Write(e.to_string())),
        }
    }

    /// One generation attempt: send the prompt, then normalize the body
    async fn generate(&self, prompt: &str) -> Result<String, GenerationFailure> {
        let provider = Arc::clone(&self.provider);
        let prompt = prompt.to_string();

        // The provider trait is synchronous, so run it on a blocking thread
        let body = tokio::task::spawn_blocking(move || -> Result<String, GenerationFailure> {
            provider.generate(&prompt).map_err(Into::into)
        })
        .await
        .map_err(|e| GenerationFailure::Transport(format!("task join error: {}", e)))??;

        debug!("Generation response length: {}", body.len());

        normalize_response(&body)
    }
}
