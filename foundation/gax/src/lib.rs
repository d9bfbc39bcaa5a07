use tonic::metadata::MetadataValue;
use tonic::{IntoRequest, Request};

pub mod cert;
pub mod conn;
pub mod retry;

pub mod grpc {
    pub use tonic::metadata;
    pub use tonic::{Code, IntoRequest, Request, Response, Status};
}

pub const REQUEST_PARAMS_HEADER: &str = "x-goog-request-params";

/// Wraps `into_request` and attaches the routing header, e.g. `parent=projects/p/locations/global`.
pub fn create_request<T>(param_string: String, into_request: impl IntoRequest<T>) -> Request<T> {
    let mut request = into_request.into_request();
    if param_string.is_empty() {
        return request;
    }
    match encode_params(&param_string).parse::<MetadataValue<_>>() {
        Ok(value) => {
            request.metadata_mut().append(REQUEST_PARAMS_HEADER, value);
        }
        Err(_) => tracing::warn!("invalid routing header: {param_string}"),
    }
    request
}

/// Percent-encodes the values of `key=value&...`, keeping resource name separators.
fn encode_params(param_string: &str) -> String {
    param_string
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => format!("{key}={}", urlencoding::encode(value).replace("%2F", "/")),
            None => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_routing_header() {
        let request = create_request("parent=projects/p/locations/global".to_string(), ());
        assert_eq!(
            "parent=projects/p/locations/global",
            request.metadata().get(REQUEST_PARAMS_HEADER).unwrap().to_str().unwrap()
        );
    }

    #[test]
    fn test_create_request_without_params() {
        let request = create_request(String::new(), ());
        assert!(request.metadata().get(REQUEST_PARAMS_HEADER).is_none());
    }

    #[test]
    fn test_create_request_encodes_values() {
        let request = create_request("name=projects/p/keyRings/キー ring&parent=a+b".to_string(), ());
        assert_eq!(
            "name=projects/p/keyRings/%E3%82%AD%E3%83%BC%20ring&parent=a%2Bb",
            request.metadata().get(REQUEST_PARAMS_HEADER).unwrap().to_str().unwrap()
        );
    }
}
