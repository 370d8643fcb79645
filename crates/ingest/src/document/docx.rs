use super::txt::decode_lossy;
use super::{ExtractionError, PageContent};

/// Raw-decoding fallback for word-processor exports.
///
/// The bytes are decoded lossily and every control character except the
/// newline is dropped, so a DOCX that was saved as text (one paragraph per
/// line) comes through intact. Zipped XML is not unpacked here.
pub fn extract_docx(bytes: &[u8]) -> Result<Vec<PageContent>, ExtractionError> {
    let text: String = decode_lossy(bytes)
        .chars()
        .filter(|c| *c == '\n' || !c.is_control())
        .collect();

    Ok(vec![PageContent {
        page_number: 1,
        text: text.trim().to_string(),
    }])
}
