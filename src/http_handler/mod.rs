mod common;
mod http_client;
mod http_command_sink;
mod http_request;
mod http_response;

pub use common::HTTPError;
pub use http_command_sink::HTTPCommandSink;
pub use http_response::response_common::ResponseError;
