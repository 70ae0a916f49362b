//! Actions module
//!
//! Every domain partition is driven by a [`RequestAction`] over its own
//! request enum. Global and status bar actions sit beside them.

// Shared action types
pub mod global;
pub mod request;
pub mod status_bar;

// Domain action types
pub mod attendance;
pub mod document;
pub mod fee;
pub mod parent;
pub mod salary;
pub mod student;
pub mod teacher;

pub use attendance::{AttendanceAction, AttendanceRequest};
pub use document::{DocumentAction, DocumentRequest};
pub use fee::{FeeAction, FeeRequest};
pub use global::GlobalAction;
pub use parent::{ParentAction, ParentRequest};
pub use request::{DomainRequest, RequestAction};
pub use salary::{SalaryAction, SalaryRequest};
pub use status_bar::StatusBarAction;
pub use student::{StudentAction, StudentRequest};
pub use teacher::{TeacherAction, TeacherRequest};

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Application-wide actions
    Global(GlobalAction),

    Fee(FeeAction),
    Parent(ParentAction),
    Salary(SalaryAction),
    Document(DocumentAction),
    Student(StudentAction),
    Teacher(TeacherAction),
    Attendance(AttendanceAction),

    StatusBar(StatusBarAction),
}

impl Action {
    pub fn fee(request: FeeRequest) -> Self {
        Action::Fee(RequestAction::Request(request))
    }

    pub fn parent(request: ParentRequest) -> Self {
        Action::Parent(RequestAction::Request(request))
    }

    pub fn salary(request: SalaryRequest) -> Self {
        Action::Salary(RequestAction::Request(request))
    }

    pub fn document(request: DocumentRequest) -> Self {
        Action::Document(RequestAction::Request(request))
    }

    pub fn student(request: StudentRequest) -> Self {
        Action::Student(RequestAction::Request(request))
    }

    pub fn teacher(request: TeacherRequest) -> Self {
        Action::Teacher(RequestAction::Request(request))
    }

    pub fn attendance(request: AttendanceRequest) -> Self {
        Action::Attendance(RequestAction::Request(request))
    }
}
