//! Parent actions

use super::{DomainRequest, RequestAction};
use crate::state::{ParentData, RequestStatus};
use async_trait::async_trait;
use school_api::{Failure, ParentRegistration, SchoolClient};

#[derive(Debug, Clone, PartialEq)]
pub enum ParentRequest {
    FetchAll { school_id: String },
    FetchOne { parent_id: String },
    Register(ParentRegistration),
    Update {
        parent_id: String,
        parent: ParentRegistration,
    },
    Delete { parent_id: String },
    /// Attach a student to a parent account
    LinkStudent {
        parent_id: String,
        student_id: String,
    },
    UnlinkStudent {
        parent_id: String,
        student_id: String,
    },
}

pub type ParentAction = RequestAction<ParentRequest>;

#[async_trait]
impl DomainRequest for ParentRequest {
    type Data = ParentData;

    fn success_status(&self) -> RequestStatus {
        match self {
            ParentRequest::Register(_) => RequestStatus::Added,
            ParentRequest::Delete { .. } => RequestStatus::Deleted,
            _ => RequestStatus::Success,
        }
    }

    fn label(&self) -> String {
        let op = match self {
            ParentRequest::FetchAll { .. } => "list",
            ParentRequest::FetchOne { .. } => "load",
            ParentRequest::Register(_) => "register",
            ParentRequest::Update { .. } => "update",
            ParentRequest::Delete { .. } => "delete",
            ParentRequest::LinkStudent { .. } => "link student",
            ParentRequest::UnlinkStudent { .. } => "unlink student",
        };
        format!("Parent: {}", op)
    }

    async fn perform(self, client: &SchoolClient) -> Result<ParentData, Failure> {
        match self {
            ParentRequest::FetchAll { school_id } => client
                .fetch_parents(&school_id)
                .await
                .map(ParentData::Parents),
            ParentRequest::FetchOne { parent_id } => client
                .fetch_parent(&parent_id)
                .await
                .map(ParentData::Parent),
            ParentRequest::Register(parent) => {
                client.register_parent(&parent).await.map(ParentData::Ack)
            }
            ParentRequest::Update { parent_id, parent } => client
                .update_parent(&parent_id, &parent)
                .await
                .map(ParentData::Ack),
            ParentRequest::Delete { parent_id } => {
                client.delete_parent(&parent_id).await.map(ParentData::Ack)
            }
            ParentRequest::LinkStudent {
                parent_id,
                student_id,
            } => client
                .link_student(&parent_id, &student_id)
                .await
                .map(ParentData::Ack),
            ParentRequest::UnlinkStudent {
                parent_id,
                student_id,
            } => client
                .unlink_student(&parent_id, &student_id)
                .await
                .map(ParentData::Ack),
        }
    }
}
