use crate::actions::{Action, GlobalAction};
use crate::reducers::request_reducer::reduce_request;
use crate::reducers::status_bar_reducer::reduce_status_bar;
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that routes each action to its partition
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Logout) => {
            log::info!("Logging out, resetting all partitions");
            state.fees.logout();
            state.parents.logout();
            state.salaries.logout();
            state.documents.logout();
            state.students.logout();
            state.teachers.logout();
            state.attendance.logout();
        }
        Action::Fee(action) => {
            state.fees = reduce_request(state.fees, action);
        }
        Action::Parent(action) => {
            state.parents = reduce_request(state.parents, action);
        }
        Action::Salary(action) => {
            state.salaries = reduce_request(state.salaries, action);
        }
        Action::Document(action) => {
            state.documents = reduce_request(state.documents, action);
        }
        Action::Student(action) => {
            state.students = reduce_request(state.students, action);
        }
        Action::Teacher(action) => {
            state.teachers = reduce_request(state.teachers, action);
        }
        Action::Attendance(action) => {
            state.attendance = reduce_request(state.attendance, action);
        }
        Action::StatusBar(action) => {
            state.status_bar = reduce_status_bar(state.status_bar, action);
        }
    }
    state
}
