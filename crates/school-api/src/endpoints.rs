//! Backend route table
//!
//! Paths are relative to the configured base URL. Every dynamic segment is
//! percent-encoded, so an id containing `/` or `?` stays one segment.

use reqwest::Url;
use std::sync::OnceLock;

/// Join segments into an absolute path, encoding each one
fn route(segments: &[&str]) -> String {
    static ROOT: OnceLock<Url> = OnceLock::new();

    let mut url = ROOT
        .get_or_init(|| Url::parse("http://localhost/").unwrap())
        .clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.clear().extend(segments);
    }
    url.path().to_string()
}

pub fn all_fees(school_id: &str) -> String {
    route(&["AllFees", school_id])
}

pub fn student_fee(student_id: &str) -> String {
    route(&["Fees", student_id])
}

pub const FEE_CREATE: &str = "/FeeCreate";

pub fn fee(fee_id: &str) -> String {
    route(&["Fee", fee_id])
}

/// Delete a whole fee record, or a single detail when `fee_detail_id` is given
pub fn fee_delete(student_id: &str, fee_detail_id: Option<&str>) -> String {
    match fee_detail_id {
        Some(detail) => route(&["Fee", student_id, detail]),
        None => route(&["Fee", student_id]),
    }
}

pub fn parents(school_id: &str) -> String {
    route(&["Parents", school_id])
}

pub fn parent(parent_id: &str) -> String {
    route(&["Parent", parent_id])
}

pub const PARENT_REGISTER: &str = "/ParentReg";

pub fn parent_link(parent_id: &str, student_id: &str) -> String {
    route(&["Parent", "Link", parent_id, student_id])
}

pub fn parent_unlink(parent_id: &str, student_id: &str) -> String {
    route(&["Parent", "Unlink", parent_id, student_id])
}

pub fn salary_employees(school_id: &str, employee_type: &str) -> String {
    route(&["Salary", "Employees", school_id, employee_type])
}

pub const SALARY_CREATE: &str = "/Salary/Create";
pub const SALARY_BULK_PAYMENT: &str = "/Salary/BulkPayment";

pub const DOCUMENT_CREATE: &str = "/DocumentCreate";

pub fn teacher_documents(teacher_id: &str) -> String {
    route(&["TeacherDocuments", teacher_id])
}

pub fn document(document_id: &str) -> String {
    route(&["Documents", document_id])
}

pub fn students(school_id: &str) -> String {
    route(&["Students", school_id])
}

pub fn student(student_id: &str) -> String {
    route(&["Student", student_id])
}

pub const STUDENT_REGISTER: &str = "/StudentReg";

pub fn teachers(school_id: &str) -> String {
    route(&["Teachers", school_id])
}

pub fn teacher(teacher_id: &str) -> String {
    route(&["Teacher", teacher_id])
}

pub const TEACHER_REGISTER: &str = "/TeacherReg";

pub fn attendance(student_id: &str) -> String {
    route(&["Attendance", student_id])
}
