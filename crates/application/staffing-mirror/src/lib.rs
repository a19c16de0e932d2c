//! Client-side mirrors of the backend's employee, project and assignment collections.
//!
//! Each mirror keeps the last fetched list, a busy flag and the last error for
//! one collection. Reads never fail to the caller (they record the error and
//! leave an empty list); writes record the error and also return it.

pub mod assignments;
mod busy;
pub mod collection;
pub mod employees;
pub mod error;
pub mod projects;
pub mod session;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use assignments::AssignmentMirror;
pub use collection::{CollectionConfig, RemoteCollection};
pub use employees::{EmployeeExtras, EmployeeMirror};
pub use error::MirrorError;
pub use projects::ProjectMirror;
pub use session::{init_session, session, Session};
pub use state::CollectionState;
