//! Source documents and the records derived from them

/// MIME type of legacy binary Word documents
pub const MIME_WORD_LEGACY: &str = "application/msword";

/// MIME type of XML-based Word documents
pub const MIME_WORD_XML: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// One input file as handed out by the document storage collaborator.
///
/// The pipeline never mutates a source document; it only reads the byte
/// content through the text extraction collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// File name as stored in the source folder (e.g. `verdict_4821.docx`)
    pub name: String,

    /// MIME type reported by the storage collaborator
    pub mime_type: String,

    /// Raw byte content
    pub content: Vec<u8>,
}

impl SourceDocument {
    /// Create a new source document
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        content: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            content,
        }
    }

    /// Whether this document is in one of the supported word-processing
    /// formats. Anything else is skipped without being treated as an error.
    pub fn is_supported(&self) -> bool {
        self.mime_type == MIME_WORD_LEGACY || self.mime_type == MIME_WORD_XML
    }

    /// File name with its final extension removed.
    ///
    /// The extension must be non-empty and must not itself contain a dot,
    /// so `archive.tar.gz` becomes `archive.tar` and a trailing-dot name
    /// is left untouched.
    pub fn base_name(&self) -> &str {
        match self.name.rsplit_once('.') {
            Some((base, ext)) if !ext.is_empty() && !ext.contains('/') => base,
            _ => &self.name,
        }
    }

    /// Name of the record file this document produces when processed
    pub fn output_name(&self) -> String {
        format!("{}_parsed.json", self.base_name())
    }
}

/// The structured record written for one successfully processed document.
///
/// Created at most once per document per run and written exactly once;
/// records are never updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    /// Target file name (`<base>_parsed.json`)
    pub file_name: String,

    /// Canonical pretty-printed JSON text
    pub content: String,
}

impl OutputRecord {
    /// Build the record for a document from its canonical JSON content
    pub fn for_document(document: &SourceDocument, content: impl Into<String>) -> Self {
        Self {
            file_name: document.output_name(),
            content: content.into(),
        }
    }
}
