use super::{ExtractionError, PageContent};

pub fn extract_pdf(bytes: &[u8], filename: &str) -> Result<Vec<PageContent>, ExtractionError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::PdfError(e.to_string()))?;

    // One string for the whole file; pages are separated by form feeds.
    let trimmed = text.trim();
    if trimmed.is_empty() {
        // Scanned/image PDFs come back empty; there is nothing to segment.
        tracing::warn!(filename, "PDF text extraction produced no text");
        return Err(ExtractionError::Empty(filename.to_string()));
    }

    let pages: Vec<PageContent> = if text.contains('\x0C') {
        text.split('\x0C')
            .enumerate()
            .filter(|(_, page_text)| !page_text.trim().is_empty())
            .map(|(i, page_text)| PageContent {
                page_number: i + 1,
                text: page_text.trim().to_string(),
            })
            .collect()
    } else {
        vec![PageContent {
            page_number: 1,
            text: trimmed.to_string(),
        }]
    };

    Ok(pages)
}

