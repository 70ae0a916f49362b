//! Global actions - not tied to any specific domain

/// Global actions that affect the entire application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalAction {
    /// Drop every partition's data and invalidate in-flight requests
    Logout,
}
