use std::collections::BTreeMap;
use std::future::{ready, Ready};
use actix_web::dev::Payload;
use actix_web::http::header::HeaderMap;
use actix_web::{Error, FromRequest, HttpRequest};

/// Request headers flattened into a plain `name -> value` mapping.
///
/// Names keep the lower-cased form actix hands out. A repeated header keeps its
/// first value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RequestHeaders(BTreeMap<String, String>);

impl RequestHeaders {
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(&name.to_ascii_lowercase()).map(String::as_str)
    }
}

impl From<&HeaderMap> for RequestHeaders {
    fn from(headers: &HeaderMap) -> Self {
        let mut map = BTreeMap::new();
        for (name, value) in headers.iter() {
            map.entry(name.as_str().to_string())
                .or_insert_with(|| String::from_utf8_lossy(value.as_bytes()).into_owned());
        }
        Self(map)
    }
}

impl FromRequest for RequestHeaders {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(RequestHeaders::from(req.headers())))
    }
}
