//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod partitions;
mod request_state;
mod status_bar;

pub use app::AppState;
pub use partitions::{
    AttendanceState, DocumentData, DocumentState, FeeData, FeeState, ParentData, ParentState,
    SalaryData, SalaryState, StudentData, StudentState, TeacherData, TeacherState,
};
pub use request_state::{RequestState, RequestStatus, Resolution};
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};
