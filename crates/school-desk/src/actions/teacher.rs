//! Teacher actions

use super::{DomainRequest, RequestAction};
use crate::state::{RequestStatus, TeacherData};
use async_trait::async_trait;
use school_api::{Failure, SchoolClient, TeacherRegistration};

#[derive(Debug, Clone, PartialEq)]
pub enum TeacherRequest {
    FetchAll { school_id: String },
    FetchOne { teacher_id: String },
    Register(TeacherRegistration),
    Update {
        teacher_id: String,
        teacher: TeacherRegistration,
    },
    Delete { teacher_id: String },
}

pub type TeacherAction = RequestAction<TeacherRequest>;

#[async_trait]
impl DomainRequest for TeacherRequest {
    type Data = TeacherData;

    fn success_status(&self) -> RequestStatus {
        match self {
            TeacherRequest::Register(_) => RequestStatus::Added,
            TeacherRequest::Delete { .. } => RequestStatus::Deleted,
            _ => RequestStatus::Success,
        }
    }

    fn label(&self) -> String {
        let op = match self {
            TeacherRequest::FetchAll { .. } => "list",
            TeacherRequest::FetchOne { .. } => "load",
            TeacherRequest::Register(_) => "register",
            TeacherRequest::Update { .. } => "update",
            TeacherRequest::Delete { .. } => "delete",
        };
        format!("Teacher: {}", op)
    }

    async fn perform(self, client: &SchoolClient) -> Result<TeacherData, Failure> {
        match self {
            TeacherRequest::FetchAll { school_id } => client
                .fetch_teachers(&school_id)
                .await
                .map(TeacherData::Teachers),
            TeacherRequest::FetchOne { teacher_id } => client
                .fetch_teacher(&teacher_id)
                .await
                .map(TeacherData::Teacher),
            TeacherRequest::Register(teacher) => client
                .register_teacher(&teacher)
                .await
                .map(TeacherData::Ack),
            TeacherRequest::Update {
                teacher_id,
                teacher,
            } => client
                .update_teacher(&teacher_id, &teacher)
                .await
                .map(TeacherData::Ack),
            TeacherRequest::Delete { teacher_id } => client
                .delete_teacher(&teacher_id)
                .await
                .map(TeacherData::Ack),
        }
    }
}
