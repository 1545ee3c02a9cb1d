use super::super::{common::HTTPError, http_client::HTTPClient};
use crate::http_handler::http_response::response_common::HTTPResponseType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HTTPRequestMethod {
    Put,
}

pub(crate) trait HTTPRequestType {
    /// Type of the expected response.
    type Response: HTTPResponseType;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &str;
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod;

    fn request_url(&self, client: &HTTPClient) -> String {
        format!("{}{}", client.url(), self.endpoint())
    }
}

pub(crate) trait JSONBodyHTTPRequestType: HTTPRequestType {
    /// The type of the json body.
    type Body: serde::Serialize;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body;

    fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<Self::Response, HTTPError> {
        let url = self.request_url(client);
        let builder = match self.request_method() {
            HTTPRequestMethod::Put => client.client().put(url),
        };
        let response = builder.json(self.body()).send()?;
        Ok(Self::Response::read_response(response)?)
    }
}
