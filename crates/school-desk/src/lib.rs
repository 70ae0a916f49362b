//! Request/state core of the school-management dashboards
//!
//! # Architecture
//!
//! ```text
//!   view ──dispatch(Action)──▶ Store
//!                               │  middleware chain (logging, notifications, api)
//!                               │  root reducer ──▶ AppState partitions
//!                               ▼
//!                          ApiMiddleware ──spawn──▶ tokio runtime ──▶ SchoolClient
//!                               ▲                                        │
//!                               └───── Dispatcher (Resolved{seq}) ◀──────┘
//! ```
//!
//! Each domain (fees, parents, salaries, documents, students, teachers,
//! attendance) owns one [`state::RequestState`] partition. A request marks its
//! partition pending and takes the next sequence number; only the resolution
//! carrying the latest number is applied.

pub mod actions;
pub mod dispatcher;
pub mod domain_models;
pub mod logger;
pub mod middleware;
pub mod reducers;
pub mod state;
pub mod store;

pub use actions::Action;
pub use dispatcher::Dispatcher;
pub use state::AppState;
pub use store::Store;
