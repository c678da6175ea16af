use std::sync::Arc;
use crate::server::logging::{InfoRequestLog, RequestLog};

#[derive(Clone)]
pub(crate) struct AppState {
    request_log: Arc<dyn RequestLog>,
}

impl AppState {
    pub fn new(request_log: Arc<dyn RequestLog>) -> Self {
        Self {
            request_log,
        }
    }

    pub fn request_log(&self) -> &dyn RequestLog {
        self.request_log.as_ref()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InfoRequestLog))
    }
}
