use crate::{AssignmentMirror, EmployeeMirror, ProjectMirror};
use anyhow::Result;
use staffing_transport::{HttpTransport, Transport, TransportError};
use std::sync::{Arc, OnceLock};

/// The three mirrors of one application session, sharing one transport.
#[derive(Clone)]
pub struct Session {
    pub employees: EmployeeMirror,
    pub projects: ProjectMirror,
    pub assignments: AssignmentMirror,
}

impl Session {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            employees: EmployeeMirror::new(transport.clone()),
            projects: ProjectMirror::new(transport.clone()),
            assignments: AssignmentMirror::new(transport),
        }
    }

    pub fn connect(base_url: &str) -> Result<Self, TransportError> {
        Ok(Self::new(Arc::new(HttpTransport::new(base_url)?)))
    }
}

static SESSION: OnceLock<std::result::Result<Session, String>> = OnceLock::new();

/// Create the process-wide session against `base_url`.
///
/// Only the first call connects; later calls return the existing session
/// regardless of the address passed. The session is never torn down.
pub fn init_session(base_url: &str) -> Result<&'static Session> {
    match SESSION.get_or_init(|| Session::connect(base_url).map_err(|e| e.to_string())) {
        Ok(session) => Ok(session),
        Err(message) => Err(anyhow::anyhow!(message.clone())),
    }
}

/// Process-wide session, connected on first use to the configured base address.
pub fn session() -> Result<&'static Session> {
    init_session(&staffing_config::api_base_url())
}
