//! Fee actions
//!
//! Fee lists per school, per-student fee records, and their details.

use super::{DomainRequest, RequestAction};
use crate::state::{FeeData, RequestStatus};
use async_trait::async_trait;
use school_api::{Failure, FeeStatusUpdate, NewFee, SchoolClient};

/// Requests the fee screens issue
#[derive(Debug, Clone, PartialEq)]
pub enum FeeRequest {
    /// List every fee record of a school
    FetchAll { school_id: String },
    /// Load one student's fee record
    FetchStudent { student_id: String },
    /// Create a fee record with its monthly details
    Create(NewFee),
    /// Change the payment status of one fee detail
    UpdateStatus {
        fee_id: String,
        update: FeeStatusUpdate,
    },
    /// Delete a student's fee record, or only one detail of it
    Delete {
        student_id: String,
        fee_detail_id: Option<String>,
    },
}

pub type FeeAction = RequestAction<FeeRequest>;

#[async_trait]
impl DomainRequest for FeeRequest {
    type Data = FeeData;

    fn success_status(&self) -> RequestStatus {
        match self {
            FeeRequest::Create(_) => RequestStatus::Added,
            FeeRequest::Delete { .. } => RequestStatus::Deleted,
            _ => RequestStatus::Success,
        }
    }

    fn label(&self) -> String {
        let op = match self {
            FeeRequest::FetchAll { .. } => "list",
            FeeRequest::FetchStudent { .. } => "load student fee",
            FeeRequest::Create(_) => "create",
            FeeRequest::UpdateStatus { .. } => "update status",
            FeeRequest::Delete {
                fee_detail_id: Some(_),
                ..
            } => "delete detail",
            FeeRequest::Delete { .. } => "delete",
        };
        format!("Fee: {}", op)
    }

    async fn perform(self, client: &SchoolClient) -> Result<FeeData, Failure> {
        match self {
            FeeRequest::FetchAll { school_id } => {
                client.fetch_all_fees(&school_id).await.map(FeeData::Fees)
            }
            FeeRequest::FetchStudent { student_id } => client
                .fetch_student_fee(&student_id)
                .await
                .map(FeeData::StudentFee),
            FeeRequest::Create(fee) => client.create_fee(&fee).await.map(FeeData::Ack),
            FeeRequest::UpdateStatus { fee_id, update } => client
                .update_fee_status(&fee_id, &update)
                .await
                .map(FeeData::Ack),
            FeeRequest::Delete {
                student_id,
                fee_detail_id,
            } => client
                .delete_fee(&student_id, fee_detail_id.as_deref())
                .await
                .map(FeeData::Ack),
        }
    }
}
