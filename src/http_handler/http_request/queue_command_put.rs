use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::command::CommandRecord;
use crate::http_handler::http_response::queue_command::QueueCommandResponse;

/// Request type for the /flightcomputer/commands endpoint.
#[derive(Debug)]
pub(crate) struct QueueCommandRequest<'a> {
    /// The command node to enqueue, sent as its JSON form.
    pub(crate) record: &'a CommandRecord,
}

impl JSONBodyHTTPRequestType for QueueCommandRequest<'_> {
    type Body = CommandRecord;
    fn body(&self) -> &Self::Body { self.record }
}

impl HTTPRequestType for QueueCommandRequest<'_> {
    type Response = QueueCommandResponse;
    fn endpoint(&self) -> &'static str { "/flightcomputer/commands" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
}
