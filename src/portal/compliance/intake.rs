use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::catalog::CategoryCatalog;
use super::domain::{CategoryId, Document, DocumentStatus, Supplier};
use super::scoring::ScoringError;

/// File metadata captured by the upload form before any document record
/// exists. No file content is read; uploads are simulated from metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRequest {
    pub file_name: String,
    pub size_bytes: u64,
    pub uploaded_on: NaiveDate,
    pub category: CategoryId,
    /// Free-form; only an exact match against a required label counts
    /// toward checklist completion.
    pub document_type: String,
}

/// Turn an upload request into a pending document on the supplier record.
///
/// New documents always start [`DocumentStatus::Pending`]; review
/// transitions happen outside this crate. The caller re-invokes the
/// scoring engine on the updated snapshot afterwards.
pub fn record_upload(
    catalog: &CategoryCatalog,
    supplier: &mut Supplier,
    request: UploadRequest,
) -> Result<Document, ScoringError> {
    catalog.category(request.category)?;

    let document = Document {
        id: next_document_id(&supplier.documents),
        name: request.file_name,
        category: request.category,
        document_type: request.document_type,
        upload_date: request.uploaded_on,
        size: format_size(request.size_bytes),
        status: DocumentStatus::Pending,
    };

    supplier.documents.push(document.clone());
    Ok(document)
}

fn next_document_id(documents: &[Document]) -> String {
    let highest = documents
        .iter()
        .filter_map(|document| document.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (highest + 1).to_string()
}

fn format_size(size_bytes: u64) -> String {
    format!("{:.1} MB", size_bytes as f64 / (1024.0 * 1024.0))
}
