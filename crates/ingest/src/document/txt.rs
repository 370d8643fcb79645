use super::{ExtractionError, PageContent};

pub fn extract_txt(bytes: &[u8]) -> Result<Vec<PageContent>, ExtractionError> {
    Ok(vec![PageContent {
        page_number: 1,
        text: decode_lossy(bytes).trim().to_string(),
    }])
}

/// Try UTF-8 first, fall back to lossy conversion.
pub(super) fn decode_lossy(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(e) => {
            tracing::debug!(valid_up_to = e.valid_up_to(), "input is not valid UTF-8; decoding lossily");
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}
