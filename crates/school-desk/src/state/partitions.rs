//! Partition payloads
//!
//! What each domain partition holds in its `data` slot after a successful
//! request. Mutations that only acknowledge store the acknowledgement.

use super::RequestState;
use school_api::{Ack, AttendanceRecord, Document, Employee, Fee, Parent, Student, Teacher};

#[derive(Debug, Clone, PartialEq)]
pub enum FeeData {
    /// Every fee record of the school
    Fees(Vec<Fee>),
    /// One student's fee record
    StudentFee(Fee),
    Ack(Ack),
}

impl FeeData {
    pub fn fees(&self) -> Option<&[Fee]> {
        match self {
            FeeData::Fees(fees) => Some(fees),
            _ => None,
        }
    }

    pub fn student_fee(&self) -> Option<&Fee> {
        match self {
            FeeData::StudentFee(fee) => Some(fee),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParentData {
    Parents(Vec<Parent>),
    Parent(Parent),
    Ack(Ack),
}

impl ParentData {
    pub fn parents(&self) -> Option<&[Parent]> {
        match self {
            ParentData::Parents(parents) => Some(parents),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SalaryData {
    Employees(Vec<Employee>),
    Ack(Ack),
}

impl SalaryData {
    pub fn employees(&self) -> Option<&[Employee]> {
        match self {
            SalaryData::Employees(employees) => Some(employees),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DocumentData {
    Documents(Vec<Document>),
    Ack(Ack),
}

#[derive(Debug, Clone, PartialEq)]
pub enum StudentData {
    Students(Vec<Student>),
    Student(Student),
    Ack(Ack),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TeacherData {
    Teachers(Vec<Teacher>),
    Teacher(Teacher),
    Ack(Ack),
}

pub type FeeState = RequestState<FeeData>;
pub type ParentState = RequestState<ParentData>;
pub type SalaryState = RequestState<SalaryData>;
pub type DocumentState = RequestState<DocumentData>;
pub type StudentState = RequestState<StudentData>;
pub type TeacherState = RequestState<TeacherData>;
pub type AttendanceState = RequestState<Vec<AttendanceRecord>>;
