//! Document actions

use super::{DomainRequest, RequestAction};
use crate::state::{DocumentData, RequestStatus};
use async_trait::async_trait;
use school_api::{DocumentUpload, Failure, SchoolClient};

#[derive(Debug, Clone, PartialEq)]
pub enum DocumentRequest {
    /// Upload a file (multipart)
    Upload(DocumentUpload),
    FetchForTeacher { teacher_id: String },
    Delete { document_id: String },
}

pub type DocumentAction = RequestAction<DocumentRequest>;

#[async_trait]
impl DomainRequest for DocumentRequest {
    type Data = DocumentData;

    fn success_status(&self) -> RequestStatus {
        match self {
            DocumentRequest::Upload(_) => RequestStatus::Added,
            DocumentRequest::Delete { .. } => RequestStatus::Deleted,
            DocumentRequest::FetchForTeacher { .. } => RequestStatus::Success,
        }
    }

    fn label(&self) -> String {
        match self {
            DocumentRequest::Upload(upload) => format!("Document: upload {}", upload.file_name),
            DocumentRequest::FetchForTeacher { .. } => "Document: list".to_string(),
            DocumentRequest::Delete { .. } => "Document: delete".to_string(),
        }
    }

    async fn perform(self, client: &SchoolClient) -> Result<DocumentData, Failure> {
        match self {
            DocumentRequest::Upload(upload) => client
                .upload_document(&upload)
                .await
                .map(DocumentData::Ack),
            DocumentRequest::FetchForTeacher { teacher_id } => client
                .fetch_teacher_documents(&teacher_id)
                .await
                .map(DocumentData::Documents),
            DocumentRequest::Delete { document_id } => client
                .delete_document(&document_id)
                .await
                .map(DocumentData::Ack),
        }
    }
}
