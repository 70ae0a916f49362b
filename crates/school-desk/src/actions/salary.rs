//! Salary actions

use super::{DomainRequest, RequestAction};
use crate::state::{RequestStatus, SalaryData};
use async_trait::async_trait;
use school_api::{BulkPayment, Failure, SalaryRecord, SchoolClient};

#[derive(Debug, Clone, PartialEq)]
pub enum SalaryRequest {
    /// Employees of one type with their salary status for the current month
    FetchEmployees {
        school_id: String,
        employee_type: String,
    },
    /// Create or update one salary record
    Save(SalaryRecord),
    /// Pay several employees at once (explicit timeout)
    BulkPayment(BulkPayment),
}

pub type SalaryAction = RequestAction<SalaryRequest>;

#[async_trait]
impl DomainRequest for SalaryRequest {
    type Data = SalaryData;

    fn success_status(&self) -> RequestStatus {
        match self {
            SalaryRequest::Save(_) => RequestStatus::Added,
            _ => RequestStatus::Success,
        }
    }

    fn label(&self) -> String {
        match self {
            SalaryRequest::FetchEmployees { employee_type, .. } => {
                format!("Salary: list {}", employee_type)
            }
            SalaryRequest::Save(_) => "Salary: save".to_string(),
            SalaryRequest::BulkPayment(payment) => {
                format!("Salary: pay {} employees", payment.employee_ids.len())
            }
        }
    }

    async fn perform(self, client: &SchoolClient) -> Result<SalaryData, Failure> {
        match self {
            SalaryRequest::FetchEmployees {
                school_id,
                employee_type,
            } => client
                .fetch_salary_employees(&school_id, &employee_type)
                .await
                .map(SalaryData::Employees),
            SalaryRequest::Save(record) => client.save_salary(&record).await.map(SalaryData::Ack),
            SalaryRequest::BulkPayment(payment) => client
                .bulk_salary_payment(&payment)
                .await
                .map(SalaryData::Ack),
        }
    }
}
