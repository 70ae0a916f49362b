//! Wire types exchanged with the backend
//!
//! Field names follow the backend's camelCase JSON; record identifiers arrive
//! as `_id`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payment state of a fee month or a salary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    #[default]
    Unpaid,
    Partial,
}

// === Fees ===

/// One billed period of a student's fee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeDetail {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub month: String,
    #[serde(default)]
    pub monthly_amount: f64,
    #[serde(default)]
    pub dues_amount: f64,
    /// Amount billed for the period (monthly amount plus carried dues)
    pub amount: f64,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub payment_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: PaymentStatus,
    #[serde(default)]
    pub paid_amount: Option<f64>,
    #[serde(default)]
    pub description: String,
}

impl FeeDetail {
    /// Minimal detail for a month; remaining fields take their defaults
    pub fn new(month: impl Into<String>, amount: f64, status: PaymentStatus) -> Self {
        Self {
            id: None,
            month: month.into(),
            monthly_amount: amount,
            dues_amount: 0.0,
            amount,
            due_date: None,
            payment_date: None,
            status,
            paid_amount: None,
            description: String::new(),
        }
    }

    pub fn with_paid_amount(mut self, paid_amount: f64) -> Self {
        self.paid_amount = Some(paid_amount);
        self
    }
}

/// Fee record of one student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fee {
    #[serde(rename = "_id")]
    pub id: String,
    pub student_id: String,
    #[serde(default)]
    pub school_id: Option<String>,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub fee_details: Vec<FeeDetail>,
}

/// Body of `POST /FeeCreate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFee {
    pub student_id: String,
    pub school_id: String,
    pub fee_details: Vec<FeeDetail>,
}

/// Body of `PUT /Fee/{feeId}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeStatusUpdate {
    pub fee_detail_id: String,
    pub status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<DateTime<Utc>>,
}

// === Parents ===

/// Contact data of a father, mother, or guardian
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guardian {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cnic: Option<String>,
}

/// Short student reference nested in other records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub roll_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parent {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub school_id: Option<String>,
    #[serde(default)]
    pub father: Guardian,
    #[serde(default)]
    pub mother: Guardian,
    #[serde(default)]
    pub guardian: Option<Guardian>,
    #[serde(default)]
    pub students: Vec<StudentRef>,
}

/// Body of `POST /ParentReg` and `PUT /Parent/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentRegistration {
    pub school_id: String,
    pub email: String,
    pub password: String,
    pub father: Guardian,
    pub mother: Guardian,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guardian: Option<Guardian>,
    #[serde(default)]
    pub student_ids: Vec<String>,
}

// === Salaries ===

/// Employee with the salary fields the backend computes for a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub employee_type: String,
    #[serde(default)]
    pub base_salary: f64,
    #[serde(default)]
    pub salary_status: PaymentStatus,
    #[serde(default)]
    pub paid_amount: Option<f64>,
    #[serde(default)]
    pub month: Option<String>,
}

/// Body of `POST /Salary/Create`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    pub employee_id: String,
    pub month: String,
    pub amount: f64,
    #[serde(default)]
    pub paid_amount: f64,
    pub status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<DateTime<Utc>>,
}

/// Body of `POST /Salary/BulkPayment`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkPayment {
    pub school_id: String,
    pub month: String,
    pub employee_ids: Vec<String>,
    pub payment_date: DateTime<Utc>,
}

// === Documents ===

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub owner_id: String,
    pub title: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}

/// File and metadata for `POST /DocumentCreate`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentUpload {
    pub owner_id: String,
    pub title: String,
    pub file_name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

// === Students & Teachers ===

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub school_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub roll_number: String,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// Body of `POST /StudentReg` and `PUT /Student/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRegistration {
    pub school_id: String,
    pub name: String,
    pub roll_number: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub school_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Body of `POST /TeacherReg` and `PUT /Teacher/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherRegistration {
    pub school_id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

// === Attendance ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Leave,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub subject_id: String,
    #[serde(default)]
    pub subject_name: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    pub status: AttendanceStatus,
}

// === Acknowledgements ===

/// Body of a mutation that only acknowledges
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}
