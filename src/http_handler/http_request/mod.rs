pub(crate) mod queue_command_put;
pub(crate) mod request_common;
