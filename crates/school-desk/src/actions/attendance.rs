//! Attendance actions

use super::{DomainRequest, RequestAction};
use crate::state::RequestStatus;
use async_trait::async_trait;
use school_api::{AttendanceRecord, Failure, SchoolClient};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceRequest {
    /// Every attendance record of one student
    FetchStudent { student_id: String },
}

pub type AttendanceAction = RequestAction<AttendanceRequest>;

#[async_trait]
impl DomainRequest for AttendanceRequest {
    type Data = Vec<AttendanceRecord>;

    fn success_status(&self) -> RequestStatus {
        RequestStatus::Success
    }

    fn label(&self) -> String {
        "Attendance: load".to_string()
    }

    async fn perform(self, client: &SchoolClient) -> Result<Vec<AttendanceRecord>, Failure> {
        match self {
            AttendanceRequest::FetchStudent { student_id } => {
                client.fetch_attendance(&student_id).await
            }
        }
    }
}
