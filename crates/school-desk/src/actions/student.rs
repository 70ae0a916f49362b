//! Student actions

use super::{DomainRequest, RequestAction};
use crate::state::{RequestStatus, StudentData};
use async_trait::async_trait;
use school_api::{Failure, SchoolClient, StudentRegistration};

#[derive(Debug, Clone, PartialEq)]
pub enum StudentRequest {
    FetchAll { school_id: String },
    FetchOne { student_id: String },
    Register(StudentRegistration),
    Update {
        student_id: String,
        student: StudentRegistration,
    },
    Delete { student_id: String },
}

pub type StudentAction = RequestAction<StudentRequest>;

#[async_trait]
impl DomainRequest for StudentRequest {
    type Data = StudentData;

    fn success_status(&self) -> RequestStatus {
        match self {
            StudentRequest::Register(_) => RequestStatus::Added,
            StudentRequest::Delete { .. } => RequestStatus::Deleted,
            _ => RequestStatus::Success,
        }
    }

    fn label(&self) -> String {
        let op = match self {
            StudentRequest::FetchAll { .. } => "list",
            StudentRequest::FetchOne { .. } => "load",
            StudentRequest::Register(_) => "register",
            StudentRequest::Update { .. } => "update",
            StudentRequest::Delete { .. } => "delete",
        };
        format!("Student: {}", op)
    }

    async fn perform(self, client: &SchoolClient) -> Result<StudentData, Failure> {
        match self {
            StudentRequest::FetchAll { school_id } => client
                .fetch_students(&school_id)
                .await
                .map(StudentData::Students),
            StudentRequest::FetchOne { student_id } => client
                .fetch_student(&student_id)
                .await
                .map(StudentData::Student),
            StudentRequest::Register(student) => client
                .register_student(&student)
                .await
                .map(StudentData::Ack),
            StudentRequest::Update {
                student_id,
                student,
            } => client
                .update_student(&student_id, &student)
                .await
                .map(StudentData::Ack),
            StudentRequest::Delete { student_id } => client
                .delete_student(&student_id)
                .await
                .map(StudentData::Ack),
        }
    }
}
