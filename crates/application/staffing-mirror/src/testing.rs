use serde_json::Value;
use staffing_transport::{ApiRequest, ApiResponse, Transport, TransportError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub(crate) type Scripted = Result<ApiResponse, TransportError>;

pub(crate) fn ok(body: Value) -> Scripted {
    Ok(ApiResponse { status: 200, body })
}

pub(crate) fn status(code: u16, body: Value) -> Scripted {
    Err(TransportError::Status { status: code, body })
}

type Probe = Box<dyn Fn() -> bool + Send + Sync>;

/// Transport that replays canned responses in order and records every request.
pub(crate) struct ScriptedTransport {
    responses: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<ApiRequest>>,
    probe: Mutex<Option<Probe>>,
    probed: Mutex<Vec<bool>>,
}

impl ScriptedTransport {
    pub(crate) fn new(responses: impl IntoIterator<Item = Scripted>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
            probe: Mutex::new(None),
            probed: Mutex::new(Vec::new()),
        })
    }

    /// Run `f` at the start of every request and keep its answer.
    pub(crate) fn set_probe(&self, f: impl Fn() -> bool + Send + Sync + 'static) {
        *self.probe.lock().unwrap() = Some(Box::new(f));
    }

    pub(crate) fn probed(&self) -> Vec<bool> {
        self.probed.lock().unwrap().clone()
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        if let Some(probe) = self.probe.lock().unwrap().as_ref() {
            let seen = probe();
            self.probed.lock().unwrap().push(seen);
        }
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request {} {}", request.method, request.path))
    }
}
