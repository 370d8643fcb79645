//! Extraction adapters: pull ordered page/paragraph text out of a source file.
//!
//! These are thin wrappers; the segmentation core only ever sees the pages
//! as an ordered sequence of text chunks.

mod docx;
mod pdf;
mod txt;

use folio_core::FolioError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
    #[error("PDF extraction failed: {0}")]
    PdfError(String),
    #[error("No text found in {0}")]
    Empty(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ExtractionError> for FolioError {
    fn from(e: ExtractionError) -> Self {
        match e {
            ExtractionError::Io(io) => FolioError::Io(io),
            other => FolioError::Extraction(other.to_string()),
        }
    }
}

/// A page of extracted text.
#[derive(Debug, Clone)]
pub struct PageContent {
    /// 1-based page number (for PDFs). For TXT/DOCX, always 1.
    pub page_number: usize,
    /// The extracted text content.
    pub text: String,
}

/// Result of extracting text from a document.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    /// Original filename.
    pub filename: String,
    /// File type: "pdf", "txt", "docx"
    pub file_type: String,
    /// Extracted pages in reading order.
    pub pages: Vec<PageContent>,
}

impl ExtractedDocument {
    /// Page texts in reading order.
    pub fn page_texts(&self) -> Vec<&str> {
        self.pages.iter().map(|p| p.text.as_str()).collect()
    }

    /// Total character count across all pages.
    pub fn total_chars(&self) -> usize {
        self.pages.iter().map(|p| p.text.len()).sum()
    }
}

/// Extract text from file bytes based on file type.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<ExtractedDocument, ExtractionError> {
    let ext = filename.rsplit('.').next().unwrap_or("").to_lowercase();
    let file_type = ext.as_str();

    let pages = match file_type {
        "pdf" => pdf::extract_pdf(bytes, filename)?,
        "txt" | "text" => txt::extract_txt(bytes)?,
        "docx" => docx::extract_docx(bytes)?,
        other => return Err(ExtractionError::UnsupportedType(other.to_string())),
    };

    tracing::debug!(filename, file_type, pages = pages.len(), "extracted document");

    Ok(ExtractedDocument {
        filename: filename.to_string(),
        file_type: file_type.to_string(),
        pages,
    })
}
