//! request logging capability injected into handlers

use log::info;
use crate::server::model::headers::RequestHeaders;

pub(crate) trait RequestLog: Send + Sync {
    /// Record one incoming request on `route`
    fn log_request(&self, route: &str, headers: &RequestHeaders);
}

/// Writes through the `log` facade at info level
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct InfoRequestLog;

impl RequestLog for InfoRequestLog {
    fn log_request(&self, route: &str, headers: &RequestHeaders) {
        info!("{} request {:?}", route, headers.as_map());
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use std::sync::Mutex;
    use super::*;

    /// Keeps every logged request in memory
    #[derive(Debug, Default)]
    pub(crate) struct RecordingRequestLog {
        entries: Mutex<Vec<(String, RequestHeaders)>>,
    }

    impl RecordingRequestLog {
        pub fn entries(&self) -> Vec<(String, RequestHeaders)> {
            self.entries.lock().unwrap().clone()
        }
    }

    impl RequestLog for RecordingRequestLog {
        fn log_request(&self, route: &str, headers: &RequestHeaders) {
            self.entries
                .lock()
                .unwrap()
                .push((route.to_string(), headers.clone()));
        }
    }
}
