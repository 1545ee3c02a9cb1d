use super::http_response::response_common::ResponseError;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum HTTPError {
    HTTPRequestError(String),
    HTTPResponseError(ResponseError),
}

impl Display for HTTPError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HTTPError::HTTPRequestError(reason) => write!(f, "request could not be built: {reason}"),
            HTTPError::HTTPResponseError(err) => write!(f, "command endpoint answered with {err}"),
        }
    }
}

impl std::error::Error for HTTPError {}

impl From<ResponseError> for HTTPError {
    fn from(value: ResponseError) -> Self { HTTPError::HTTPResponseError(value) }
}

impl From<reqwest::Error> for HTTPError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_builder() {
            HTTPError::HTTPRequestError(value.to_string())
        } else {
            HTTPError::HTTPResponseError(value.into())
        }
    }
}
