use reqwest::StatusCode;
use reqwest::blocking::Response;
use strum_macros::Display;

/// A JSON reply of the command endpoint.
pub(crate) trait HTTPResponseType: Sized + for<'de> serde::Deserialize<'de> {
    fn read_response(response: Response) -> Result<Self, ResponseError> {
        match response.status() {
            status if status.is_success() => Ok(response.json::<Self>()?),
            status => Err(ResponseError::from_status(status, response)),
        }
    }
}

/// Why the command endpoint did not produce a verdict.
#[derive(Debug, Display, PartialEq, Eq)]
pub enum ResponseError {
    InternalServer,
    BadRequest(String),
    NoConnection,
    Timeout,
    Unknown,
}

impl ResponseError {
    fn from_status(status: StatusCode, response: Response) -> Self {
        if status.is_server_error() {
            ResponseError::InternalServer
        } else if status.is_client_error() {
            ResponseError::BadRequest(response.text().unwrap_or_default())
        } else {
            ResponseError::Unknown
        }
    }
}

impl std::error::Error for ResponseError {}

impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            ResponseError::Timeout
        } else if value.is_connect() {
            ResponseError::NoConnection
        } else if value.is_decode() || value.is_request() {
            ResponseError::BadRequest(value.to_string())
        } else {
            ResponseError::Unknown
        }
    }
}
