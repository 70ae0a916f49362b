//! REST client for the school-management backend
//!
//! This crate provides a trait-based transport and a typed client on top of it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                 SchoolClient                     │
//! │  - route table (fees, parents, salaries, ...)    │
//! │  - payload / acknowledgement decoding            │
//! │  - soft failure detection                        │
//! └─────────────────────────────────────────────────┘
//!                        │ ApiRequest
//!                        ▼
//! ┌─────────────────────────────────────────────────┐
//! │                Transport trait                   │
//! └─────────────────────────────────────────────────┘
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │ HttpTransport   │         │ test transports     │
//! │ (reqwest)       │         │ (scripted replies)  │
//! └─────────────────┘         └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use school_api::{HttpTransport, SchoolClient};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), school_api::Failure> {
//! let transport = HttpTransport::new("http://localhost:4000", None, "school-desk")?;
//! let client = SchoolClient::new(Arc::new(transport));
//!
//! let fees = client.fetch_all_fees("school-1").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod request;
pub mod transport;
pub mod types;

pub use client::{decode_ack, decode_payload, SchoolClient, DEFAULT_BULK_PAYMENT_TIMEOUT};
pub use error::{
    normalize_error_message, Failure, FALLBACK_MESSAGE, NETWORK_ERROR_MESSAGE, TIMEOUT_MESSAGE,
};
pub use request::{ApiRequest, FilePart, Method, MultipartForm, RequestBody};
pub use transport::{HttpTransport, Transport};
pub use types::{
    Ack, AttendanceRecord, AttendanceStatus, BulkPayment, Document, DocumentUpload, Employee, Fee,
    FeeDetail, FeeStatusUpdate, Guardian, NewFee, Parent, ParentRegistration, PaymentStatus,
    SalaryRecord, Student, StudentRef, StudentRegistration, Teacher, TeacherRegistration,
};
