//! Domain models
//!
//! Client-side computations over records the backend already returned, and
//! form validation that runs before anything is dispatched.

pub mod attendance;
pub mod payment_summary;
pub mod validation;

pub use attendance::{group_by_subject, SubjectAttendance};
pub use payment_summary::{summarize_fees, summarize_salaries, Money, PaymentSummary};
pub use validation::{
    check_password, is_valid_email, ParentForm, StudentForm, TeacherForm, Validate,
    ValidationError,
};
