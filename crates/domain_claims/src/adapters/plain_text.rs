//! Plain-text document extractor
//!
//! Reads text files straight from disk. Images and PDFs need an OCR or PDF
//! service and are reported as unsupported so the workflow can treat them as
//! unreadable.

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError};

use crate::document::DocumentRef;
use crate::ports::TextExtractor;

const TEXT_EXTENSIONS: [&str; 3] = ["txt", "text", "md"];

/// TextExtractor adapter for plain-text files
#[derive(Debug, Clone, Default)]
pub struct PlainTextExtractor {
    /// Files larger than this are rejected; `None` means no limit
    max_bytes: Option<u64>,
}

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects files larger than `max_bytes`
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = Some(max_bytes);
        self
    }

    /// Returns true if the document's extension is one this adapter reads
    pub fn supports(document: &DocumentRef) -> bool {
        document
            .extension()
            .map(|ext| TEXT_EXTENSIONS.contains(&ext.as_str()))
            .unwrap_or(false)
    }
}

impl DomainPort for PlainTextExtractor {}

#[async_trait]
impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, document: &DocumentRef) -> Result<String, PortError> {
        if !Self::supports(document) {
            return Err(PortError::unsupported_format(
                document.extension().unwrap_or_else(|| "unknown".to_string()),
            ));
        }

        let map_io = |e: std::io::Error| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PortError::not_found("Document", &document.source)
            } else {
                PortError::internal_with_source(format!("failed to read {}", document.source), e)
            }
        };

        if let Some(limit) = self.max_bytes {
            let metadata = tokio::fs::metadata(&document.source).await.map_err(map_io)?;
            if metadata.len() > limit {
                return Err(PortError::internal(format!(
                    "{} is {} bytes, limit is {}",
                    document.source,
                    metadata.len(),
                    limit
                )));
            }
        }

        let bytes = tokio::fs::read(&document.source).await.map_err(map_io)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
