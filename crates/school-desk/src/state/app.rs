use super::{
    AttendanceState, DocumentState, FeeState, ParentState, SalaryState, StatusBarState,
    StudentState, TeacherState,
};

/// Application state: one partition per domain plus the status bar
///
/// Partitions are created here at store initialization and live for the
/// whole session.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub fees: FeeState,
    pub parents: ParentState,
    pub salaries: SalaryState,
    pub documents: DocumentState,
    pub students: StudentState,
    pub teachers: TeacherState,
    pub attendance: AttendanceState,
    pub status_bar: StatusBarState,
}
